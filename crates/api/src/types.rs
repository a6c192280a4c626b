//! Core types with security guarantees for the gmcrypt library

use crate::{Error, Result};
use core::fmt;
use core::ops::{Deref, DerefMut};
use gmcrypt_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// Used for symmetric keys. Equality is constant time and `Debug` output
/// hides the contents.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Create an instance filled with zeros
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Generate a random instance
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut data = [0u8; N];
        rng.try_fill_bytes(&mut data)?;
        Ok(Self { data })
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBytes<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for SecretBytes<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn test_from_slice_length() {
        assert!(SecretBytes::<16>::from_slice(&[0u8; 16]).is_ok());
        let err = SecretBytes::<16>::from_slice(&[0u8; 15]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_random_differs() {
        let a = SecretBytes::<16>::random(&mut OsRng).expect("OsRng available");
        let b = SecretBytes::<16>::random(&mut OsRng).expect("OsRng available");
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_redacted() {
        let key = SecretBytes::new([0x5Au8; 16]);
        assert_eq!(format!("{:?}", key), "SecretBytes<16>[REDACTED]");
    }
}
