//! Trait definition for padded block-cipher message encryption

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Trait for symmetric ciphers that encrypt whole messages
///
/// Implementations pad the message to the block size and apply a chaining
/// mode. Modes that need an initialization vector draw it from the supplied
/// random source and carry it inside the returned ciphertext.
pub trait SymmetricCipher: Sized {
    /// Key type with appropriate algorithm binding
    type Key: Zeroize + AsRef<[u8]> + Clone;

    /// Returns the cipher and mode name, e.g. `"SM4-CBC"`
    fn name() -> &'static str;

    /// Create a cipher instance from a key
    fn new(key: &Self::Key) -> Result<Self>;

    /// Generate a new random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Key>;

    /// Encrypt a message of any length
    fn encrypt_message<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>>;

    /// Decrypt a message produced by [`SymmetricCipher::encrypt_message`]
    fn decrypt_message(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
