//! Error handling for PKE operations.

use gmcrypt_algorithms::error::Error as PrimitiveError;
use gmcrypt_api::error::Error as CoreError;

#[cfg(not(feature = "std"))]
use core::fmt;

/// Error type for PKE operations.
#[derive(Debug)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// A curve, hash or KDF primitive failed
    #[cfg_attr(feature = "std", error("SM2 primitive error: {0}"))]
    Primitive(#[cfg_attr(feature = "std", source)] PrimitiveError),

    /// An error surfaced through the public API layer
    #[cfg_attr(feature = "std", error("SM2 API error: {0}"))]
    Api(#[cfg_attr(feature = "std", source)] CoreError),

    /// Ciphertext shorter than `C1 ∥ C3`
    #[cfg_attr(
        feature = "std",
        error("SM2 ciphertext too short: {actual} bytes, need at least {minimum}")
    )]
    TruncatedCiphertext {
        /// Minimum well-formed length
        minimum: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A public key failed to decode or was the identity
    #[cfg_attr(feature = "std", error("Invalid SM2 public key: {0}"))]
    InvalidPublicKey(&'static str),

    /// A secret key was outside `[1, n−1]` or had the wrong length
    #[cfg_attr(feature = "std", error("Invalid SM2 secret key: {0}"))]
    InvalidSecretKey(&'static str),

    /// The recomputed C3 did not match the ciphertext
    #[cfg_attr(feature = "std", error("SM2 integrity check failed"))]
    AuthenticationFailed,

    /// Every ephemeral scalar produced an all-zero keystream
    #[cfg_attr(
        feature = "std",
        error("SM2 keystream was all zero after {attempts} attempts")
    )]
    KeystreamExhausted {
        /// Number of ephemeral scalars tried
        attempts: usize,
    },
}

#[cfg(not(feature = "std"))]
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "SM2 primitive error: {}", e),
            Error::Api(e) => write!(f, "SM2 API error: {}", e),
            Error::TruncatedCiphertext { minimum, actual } => write!(
                f,
                "SM2 ciphertext too short: {} bytes, need at least {}",
                actual, minimum
            ),
            Error::InvalidPublicKey(reason) => write!(f, "Invalid SM2 public key: {}", reason),
            Error::InvalidSecretKey(reason) => write!(f, "Invalid SM2 secret key: {}", reason),
            Error::AuthenticationFailed => write!(f, "SM2 integrity check failed"),
            Error::KeystreamExhausted { attempts } => write!(
                f,
                "SM2 keystream was all zero after {} attempts",
                attempts
            ),
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::TruncatedCiphertext { .. } => CoreError::InvalidCiphertext {
                context: "SM2 ciphertext shorter than C1 and C3",
            },
            Error::InvalidPublicKey(reason) | Error::InvalidSecretKey(reason) => {
                CoreError::InvalidKey { context: reason }
            }
            Error::AuthenticationFailed => CoreError::AuthenticationFailed {
                context: "SM2 C3 mismatch",
            },
            Error::KeystreamExhausted { .. } => CoreError::ResourceExhausted {
                context: "SM2 keystream retries",
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
