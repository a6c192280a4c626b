//! SM2, SM3 and SM4 primitives with constant-time implementation
//!
//! This crate provides the building blocks of the gmcrypt library:
//!
//! - [`hash::Sm3`], the SM3 hash function (GB/T 32905-2016)
//! - [`block::Sm4`], the SM4 block cipher (GB/T 32907-2016), with ECB and
//!   CBC modes and PKCS#7 padding
//! - [`ec::sm2p256`], arithmetic on the SM2 recommended curve
//!   (GB/T 32918-2016)
//! - [`kdf::Sm3Kdf`], the counter-mode KDF used by SM2 encryption
//!
//! The library is designed to be usable in both `std` and `no_std`
//! environments.
//!
//! # Security Features
//!
//! - Secure memory handling with automatic zeroization
//! - Constant-time comparison operations
//! - Memory barrier utilities

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Block cipher implementations
pub mod block;
pub use block::{BlockCipher, CipherAlgorithm, Sm4, Sm4Algorithm};
#[cfg(feature = "alloc")]
pub use block::{Cbc, Ecb};

// Hash function implementations
pub mod hash;
pub use hash::{sm3, HashAlgorithm, HashFunction, Sm3, Sm3Algorithm};

// KDF implementations
#[cfg(feature = "alloc")]
pub mod kdf;
#[cfg(feature = "alloc")]
pub use kdf::{CounterKdf, KdfOperation, KeyDerivationFunction, Sm3Kdf};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{sm2p256, CurveArithmetic, Sm2P256, Sm2Point, Sm2Scalar};

// Type system
pub mod types;
pub use types::{
    ConstantTimeEq, Digest, FixedSize, Nonce, RandomGeneration, SecretBytes,
    SecureZeroingType,
};

// Re-export security types from gmcrypt-common
pub use gmcrypt_common::security::{barrier, EphemeralSecret, SecretBuffer, ZeroizeGuard};
