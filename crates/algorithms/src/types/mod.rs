//! Type-safe wrappers for cryptographic values
//!
//! Fixed-size digests and nonces with compile-time length guarantees.

pub mod digest;
pub mod nonce;

pub(crate) mod sealed;

pub use digest::Digest;
pub use nonce::Nonce;

pub use gmcrypt_api::types::SecretBytes;

pub use gmcrypt_common::security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

use rand::{CryptoRng, RngCore};

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for cryptographic types that can be randomly generated
pub trait RandomGeneration: Sized {
    /// Generate a random instance using the provided RNG
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> crate::error::Result<Self>;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

#[cfg(test)]
mod tests;
