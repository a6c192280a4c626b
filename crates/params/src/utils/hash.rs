//! Constants for hash functions

/// Output size of SM3 in bytes
pub const SM3_OUTPUT_SIZE: usize = 32;

/// Internal block size of SM3 in bytes
pub const SM3_BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the SM3 chaining state
pub const SM3_STATE_WORDS: usize = 8;

/// Offset within the final block at which the 64-bit bit length is written
pub const SM3_LENGTH_OFFSET: usize = 56;
