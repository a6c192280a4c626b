//! Key derivation functions
//!
//! SM2 masks its plaintext with a keystream stretched from the shared point
//! by a counter-mode construction over a hash function:
//!
//! ```text
//! K = H(Z ∥ 1) ∥ H(Z ∥ 2) ∥ … truncated to klen bytes
//! ```
//!
//! [`CounterKdf`] implements that construction for any [`HashFunction`];
//! [`Sm3Kdf`] is the instance SM2 uses.
//!
//! ## Example usage
//!
//! ```
//! use gmcrypt_algorithms::kdf::{KdfOperation, KeyDerivationFunction, Sm3Kdf};
//!
//! let kdf = Sm3Kdf::new();
//!
//! let key1 = kdf.derive_key(b"shared secret", None, 48).unwrap();
//!
//! let key2 = kdf
//!     .builder()
//!     .with_ikm(b"shared secret")
//!     .with_output_length(48)
//!     .derive()
//!     .unwrap();
//!
//! let key3: [u8; 48] = kdf
//!     .builder()
//!     .with_ikm(b"shared secret")
//!     .with_output_length(48)
//!     .derive_array()
//!     .unwrap();
//!
//! assert_eq!(key1, key2);
//! assert_eq!(&key1[..], &key3[..]);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::marker::PhantomData;
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use crate::hash::{HashFunction, Sm3};

/// Marker trait for KDF algorithms
pub trait KdfAlgorithm {
    /// Default output size in bytes
    const DEFAULT_OUTPUT_SIZE: usize;

    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Returns the KDF algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}

/// Builder-style derivation request
pub trait KdfOperation<'a, A: KdfAlgorithm>: Sized {
    /// Set the input keying material
    fn with_ikm(self, ikm: &'a [u8]) -> Self;

    /// Set the info/context data appended after the counter
    fn with_info(self, info: &'a [u8]) -> Self;

    /// Set the desired output length
    fn with_output_length(self, length: usize) -> Self;

    /// Execute the key derivation
    fn derive(self) -> Result<Vec<u8>>;

    /// Execute the key derivation into a fixed-size array
    fn derive_array<const N: usize>(self) -> Result<[u8; N]>;
}

/// Common trait for key derivation functions
pub trait KeyDerivationFunction {
    /// The algorithm this KDF implements
    type Algorithm: KdfAlgorithm;

    /// Creates a new instance of the KDF
    fn new() -> Self;

    /// Derives `length` bytes from `input`
    ///
    /// # Arguments
    /// * `input` - Input keying material
    /// * `info` - Optional context appended to every hash input
    /// * `length` - Length of the output key in bytes
    fn derive_key(&self, input: &[u8], info: Option<&[u8]>, length: usize) -> Result<Vec<u8>>;
}

/// Type-level constants for the counter KDF over `H`
pub enum CounterKdfAlgorithm<H: HashFunction> {
    /// Phantom field for the hash function
    _Hash(PhantomData<H>),
}

impl<H: HashFunction> KdfAlgorithm for CounterKdfAlgorithm<H> {
    const DEFAULT_OUTPUT_SIZE: usize = 32;
    const ALGORITHM_ID: &'static str = "CTR-KDF";
}

/// Counter-mode KDF: `H(ikm ∥ counter_be32 [∥ info])` for counter = 1, 2, …
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterKdf<H: HashFunction> {
    _hash_type: PhantomData<H>,
}

/// The SM2 key derivation function
pub type Sm3Kdf = CounterKdf<Sm3>;

/// Pending derivation built through [`CounterKdf::builder`]
pub struct CounterKdfOperation<'a, H: HashFunction> {
    ikm: Option<&'a [u8]>,
    info: Option<&'a [u8]>,
    length: usize,
    _hash_type: PhantomData<H>,
}

impl<H: HashFunction> CounterKdf<H> {
    /// Derive `length` bytes into a zeroizing buffer
    ///
    /// A zero length yields an empty buffer. Lengths needing more than
    /// 2³² − 1 hash blocks are rejected.
    pub fn derive(ikm: &[u8], info: Option<&[u8]>, length: usize) -> Result<Zeroizing<Vec<u8>>> {
        let hash_len = H::output_size();
        let blocks = (length as u64).div_ceil(hash_len as u64);
        if blocks > u32::MAX as u64 {
            return Err(Error::Length {
                context: "KDF output",
                expected: u32::MAX as usize,
                actual: length,
            });
        }

        let mut okm = Zeroizing::new(Vec::with_capacity(blocks as usize * hash_len));
        let mut hasher = H::new();
        for counter in 1..=blocks as u32 {
            hasher.update(ikm)?;
            hasher.update(&counter.to_be_bytes())?;
            if let Some(info) = info {
                hasher.update(info)?;
            }
            let block = hasher.finalize()?;
            okm.extend_from_slice(block.as_ref());
        }
        okm.truncate(length);

        #[cfg(feature = "tracing-log")]
        tracing::trace!(hash = H::name(), length, "counter KDF output derived");

        Ok(okm)
    }

    /// Start a builder-style derivation
    pub fn builder(&self) -> CounterKdfOperation<'_, H> {
        CounterKdfOperation {
            ikm: None,
            info: None,
            length: CounterKdfAlgorithm::<H>::DEFAULT_OUTPUT_SIZE,
            _hash_type: PhantomData,
        }
    }
}

impl<'a, H: HashFunction> KdfOperation<'a, CounterKdfAlgorithm<H>> for CounterKdfOperation<'a, H> {
    fn with_ikm(mut self, ikm: &'a [u8]) -> Self {
        self.ikm = Some(ikm);
        self
    }

    fn with_info(mut self, info: &'a [u8]) -> Self {
        self.info = Some(info);
        self
    }

    fn with_output_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    fn derive(self) -> Result<Vec<u8>> {
        let ikm = self
            .ikm
            .ok_or_else(|| Error::param("ikm", "Input keying material is required"))?;
        CounterKdf::<H>::derive(ikm, self.info, self.length).map(|okm| okm.to_vec())
    }

    fn derive_array<const N: usize>(self) -> Result<[u8; N]> {
        validate::length("KDF output", self.length, N)?;
        let ikm = self
            .ikm
            .ok_or_else(|| Error::param("ikm", "Input keying material is required"))?;
        let okm = CounterKdf::<H>::derive(ikm, self.info, N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(&okm);
        Ok(array)
    }
}

impl<H: HashFunction> KeyDerivationFunction for CounterKdf<H> {
    type Algorithm = CounterKdfAlgorithm<H>;

    fn new() -> Self {
        CounterKdf {
            _hash_type: PhantomData,
        }
    }

    fn derive_key(&self, input: &[u8], info: Option<&[u8]>, length: usize) -> Result<Vec<u8>> {
        Self::derive(input, info, length).map(|okm| okm.to_vec())
    }
}
