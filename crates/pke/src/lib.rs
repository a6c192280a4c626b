//! Public Key Encryption (PKE) schemes for the gmcrypt library.
//!
//! Currently this is SM2 encryption (GB/T 32918.4-2016) over the SM2
//! recommended curve, with ciphertexts laid out as `C1 ∥ C3 ∥ C2`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Required for Vec in no_std + alloc environments
#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod error;
pub mod sm2;

// Re-export key items
pub use error::{Error, Result};
pub use sm2::{sm2_decrypt, sm2_encrypt, sm2_generate_keypair, Sm2, Sm2PublicKey, Sm2SecretKey};
