//! Constant values for gmcrypt cryptographic operations
//!
//! This crate holds the domain parameters and size constants shared by
//! the algorithm, symmetric and public-key crates.

#![no_std]
#![forbid(unsafe_code)]

pub mod traditional;
pub mod utils;
