//! Size constants for the hash and block cipher primitives

pub mod hash;
pub mod symmetric;
