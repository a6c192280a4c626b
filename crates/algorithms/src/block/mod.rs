//! Block cipher implementations with type-level guarantees
//!
//! This module contains the SM4 block cipher, the ECB and CBC modes of
//! operation and PKCS#7 padding.
//!
//! ## Example usage
//!
//! ```
//! use gmcrypt_algorithms::block::{BlockCipher, Cbc, Sm4};
//! use gmcrypt_algorithms::types::Nonce;
//! use rand::rngs::OsRng;
//!
//! let key = Sm4::generate_key(&mut OsRng).unwrap();
//! let iv = Nonce::<16>::random(&mut OsRng).unwrap();
//!
//! let mode = Cbc::new(Sm4::new(&key), &iv).unwrap();
//!
//! let plaintext = b"exactly thirty-two bytes long!!!";
//! let ciphertext = mode.encrypt(plaintext).unwrap();
//! let decrypted = mode.decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(plaintext, &decrypted[..]);
//! ```

use zeroize::Zeroize;

use crate::error::Result;
use rand::{CryptoRng, RngCore};

#[cfg(feature = "alloc")]
pub mod modes;
#[cfg(feature = "alloc")]
pub mod padding;
pub mod sm4;

#[cfg(feature = "alloc")]
pub use modes::{cbc::Cbc, ecb::Ecb};
pub use sm4::{Sm4, Sm4Algorithm};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers with type-level constraints
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + AsMut<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Key>;
}
