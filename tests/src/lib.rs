//! Shared vectors and helpers for the gmcrypt end-to-end tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Published known-answer vectors
pub mod vectors {
    /// SM3("abc")
    pub const SM3_ABC: &str = "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0";
    /// SM3 of the empty string
    pub const SM3_EMPTY: &str = "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b";

    /// SM4 example from GB/T 32907: key and plaintext are the same block
    pub const SM4_KEY: &str = "0123456789abcdeffedcba9876543210";
    pub const SM4_CIPHERTEXT: &str = "681edf34d206965e86b3e94f536e4246";
}

/// Deterministic CSPRNG for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
