//! Error handling for the gmcrypt library

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};

#[cfg(feature = "std")]
impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<rand::Error> for Error {
    fn from(_: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "random source",
        }
    }
}

#[cfg(test)]
mod tests;
