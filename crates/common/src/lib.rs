//! Common implementations and shared functionality for the gmcrypt library
//!
//! This crate provides the secret-holding wrappers used by the SM2, SM3 and
//! SM4 implementations so that key material and intermediate values are
//! wiped when they go out of scope.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

pub use security::barrier;
