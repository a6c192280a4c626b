//! Error handling for cryptographic primitives

use core::fmt;

use gmcrypt_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Authentication failure (integrity hash mismatch)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Malformed block padding
    Padding {
        /// Context where the padding was rejected
        context: &'static str,
    },

    /// Encoded point is malformed or not on the curve
    InvalidPoint {
        /// Context where the point was rejected
        context: &'static str,
    },

    /// The random source failed
    RandomSource {
        /// Context where randomness was requested
        context: &'static str,
    },

    /// Processing error during cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::Padding { context } => write!(f, "Invalid padding in {}", context),
            Error::InvalidPoint { context } => write!(f, "Invalid curve point in {}", context),
            Error::RandomSource { context } => write!(f, "Random source failed in {}", context),
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<rand::Error> for Error {
    fn from(_: rand::Error) -> Self {
        Error::RandomSource {
            context: "try_fill_bytes",
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, .. } => CoreError::InvalidParameter { context: name },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Authentication { algorithm } => {
                CoreError::AuthenticationFailed { context: algorithm }
            }
            Error::Padding { context } => CoreError::DecryptionFailed { context },
            Error::InvalidPoint { context } => CoreError::InvalidPoint { context },
            Error::RandomSource { context } => CoreError::RandomGenerationError { context },
            Error::Processing { operation, .. } => CoreError::Other { context: operation },
            Error::Other(msg) => CoreError::Other { context: msg },
        }
    }
}

pub use gmcrypt_api::error::ResultExt;

pub mod validate;
