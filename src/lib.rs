//! # gmcrypt
//!
//! The Chinese national commercial cryptography primitives in pure Rust:
//! the SM3 hash function, the SM4 block cipher and SM2 public-key encryption.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gmcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `algorithms` (default): SM3, SM4, the SM2 curve and the SM3 KDF
//! - `symmetric` (default): SM4-ECB and SM4-CBC message encryption
//! - `pke` (default): SM2 public-key encryption
//! - `tracing-log`: emit `tracing` events for cryptographic operations
//! - `rand`: re-export `rand` for callers that need an RNG
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gmcrypt-algorithms`]: Core primitives (SM2 curve, SM3, SM4)
//! - [`gmcrypt-symmetric`]: SM4 message encryption with padding
//! - [`gmcrypt-pke`]: SM2 public-key encryption
//!
//! ```
//! use gmcrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! assert_eq!(sm3(b"abc").len(), 32);
//!
//! let ct = sm4_ecb_encrypt(b"hello world", b"1234567890abcdef").unwrap();
//! assert_eq!(sm4_ecb_decrypt(&ct, b"1234567890abcdef").unwrap(), b"hello world");
//!
//! let (pk, sk) = Sm2::keypair(&mut OsRng).unwrap();
//! let ct = Sm2::encrypt(&pk, b"hello world", &mut OsRng).unwrap();
//! assert_eq!(Sm2::decrypt(&sk, &ct).unwrap(), b"hello world");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use gmcrypt_api as api;
pub use gmcrypt_common as common;
pub use gmcrypt_internal as internal;
pub use gmcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use gmcrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use gmcrypt_symmetric as symmetric;

#[cfg(feature = "pke")]
pub use gmcrypt_pke as pke;

// Crates that appear in the public API
#[cfg(feature = "rand")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for gmcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, SymmetricCipher};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{sm3, BlockCipher, HashFunction, Sm3, Sm4};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        sm4_cbc_decrypt, sm4_cbc_encrypt, sm4_ecb_decrypt, sm4_ecb_encrypt, Sm4Cbc, Sm4Ecb,
        Sm4Key,
    };

    #[cfg(feature = "pke")]
    pub use crate::pke::{
        sm2_decrypt, sm2_encrypt, sm2_generate_keypair, Sm2, Sm2PublicKey, Sm2SecretKey,
    };
}
