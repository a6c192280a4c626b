//! Error type definitions for cryptographic operations

/// Primary error type for cryptographic operations
///
/// Variants carry only static context so the type stays `no_std` friendly
/// and never echoes secret input back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key was malformed or failed validation
    InvalidKey {
        /// Where the key was rejected
        context: &'static str,
    },

    /// An input had the wrong length
    InvalidLength {
        /// Where the length was checked
        context: &'static str,
        /// Expected length (a minimum or a multiple where the context says so)
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A ciphertext was structurally malformed, e.g. truncated
    InvalidCiphertext {
        /// Where the ciphertext was rejected
        context: &'static str,
    },

    /// An encoded point was malformed or not on the curve
    InvalidPoint {
        /// Where the point was rejected
        context: &'static str,
    },

    /// A parameter was outside its permitted range
    InvalidParameter {
        /// Which parameter was rejected
        context: &'static str,
    },

    /// Decryption failed, e.g. on invalid padding
    DecryptionFailed {
        /// Where decryption failed
        context: &'static str,
    },

    /// An integrity check did not match
    AuthenticationFailed {
        /// Which check failed
        context: &'static str,
    },

    /// The random source reported a failure
    RandomGenerationError {
        /// Where randomness was requested
        context: &'static str,
    },

    /// A bounded retry loop ran out of attempts
    ResourceExhausted {
        /// Which operation gave up
        context: &'static str,
    },

    /// Any other failure
    Other {
        /// Description of the failure
        context: &'static str,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey { context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidCiphertext { .. } => Self::InvalidCiphertext { context },
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            Self::DecryptionFailed { .. } => Self::DecryptionFailed { context },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed { context },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
            Self::ResourceExhausted { .. } => Self::ResourceExhausted { context },
            Self::Other { .. } => Self::Other { context },
        }
    }

    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context }
            | Self::InvalidLength { context, .. }
            | Self::InvalidCiphertext { context }
            | Self::InvalidPoint { context }
            | Self::InvalidParameter { context }
            | Self::DecryptionFailed { context }
            | Self::AuthenticationFailed { context }
            | Self::RandomGenerationError { context }
            | Self::ResourceExhausted { context }
            | Self::Other { context } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context } => write!(f, "Invalid key: {}", context),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidCiphertext { context } => write!(f, "Invalid ciphertext: {}", context),
            Self::InvalidPoint { context } => write!(f, "Invalid point: {}", context),
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            Self::DecryptionFailed { context } => write!(f, "Decryption failed: {}", context),
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            }
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            Self::ResourceExhausted { context } => write!(f, "Resource exhausted: {}", context),
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}
