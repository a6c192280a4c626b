//! Hash function implementations
//!
//! Only SM3 is provided. The traits are kept generic so the KDF and the
//! SM2 scheme can be written against [`HashFunction`] rather than a
//! concrete type.

use crate::error::Result;

pub mod sm3;

pub use sm3::{sm3, Sm3, Sm3Algorithm};

/// Marker trait describing a hash algorithm's fixed parameters
pub trait HashAlgorithm {
    /// Output size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Trait for incremental cryptographic hash functions
pub trait HashFunction: Sized {
    /// Algorithm marker carrying the size constants
    type Algorithm: HashAlgorithm;

    /// Digest type returned by [`HashFunction::finalize`]
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance in its initial state
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Returns the digest of everything absorbed so far and resets the state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Hashes `data` in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
