//! Public API traits and types for the gmcrypt library
//!
//! This crate provides the public API surface shared by the gmcrypt crates:
//! the error type, the public-key and symmetric encryption traits, and the
//! fixed-size secret byte container used for keys.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

pub use traits::{Pke, SymmetricCipher};

pub use traits::{pke, symmetric};
