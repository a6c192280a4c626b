//! Sealed marker for the nonce compatibility traits

/// Prevents compatibility traits from being implemented outside this crate
pub trait Sealed {}
