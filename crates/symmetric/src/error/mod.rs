//! Error handling for symmetric cryptographic operations
//!
//! The crate reports everything through the API error type; this module
//! adds the conversion from primitive errors.

pub use gmcrypt_api::error::{Error, Result, ResultExt};

use gmcrypt_algorithms::error::Error as PrimitiveError;

/// Convert a primitive error to an API error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    Error::from(err)
}

/// Extension trait for lifting primitive results into API results
pub trait SymmetricResultExt<T> {
    /// Convert a Result with a primitive error into an API Result
    fn map_primitive_err(self) -> Result<T>;

    /// As [`SymmetricResultExt::map_primitive_err`], replacing the context
    fn map_primitive_err_with(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }

    fn map_primitive_err_with(self, context: &'static str) -> Result<T> {
        ResultExt::with_context(self, context)
    }
}

/// Validate a ciphertext length against a minimum and a block multiple
pub fn validate_ciphertext_length(
    context: &'static str,
    actual: usize,
    min: usize,
    block_size: usize,
) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    if actual % block_size != 0 {
        return Err(Error::InvalidLength {
            context,
            expected: (actual / block_size + 1) * block_size,
            actual,
        });
    }
    Ok(())
}
