//! Symmetric encryption for the gmcrypt library
//!
//! This crate provides padded SM4 message encryption in ECB and CBC mode,
//! built on the primitives in `gmcrypt-algorithms` and reporting failures
//! through the unified API error type.
//!
//! ```
//! use gmcrypt_symmetric::{Sm4Cbc, Sm4Key};
//! use rand::rngs::OsRng;
//!
//! let key = Sm4Key::generate(&mut OsRng).unwrap();
//! let cipher = Sm4Cbc::new(&key);
//!
//! let ciphertext = cipher.encrypt(b"hello world", &mut OsRng).unwrap();
//! assert_eq!(ciphertext.len(), 32);
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"hello world");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod sm4;

// Re-export main types for convenience
pub use sm4::{
    sm4_cbc_decrypt, sm4_cbc_encrypt, sm4_ecb_decrypt, sm4_ecb_encrypt, Sm4Cbc, Sm4Ecb, Sm4Key,
    Sm4Nonce,
};

// Re-export the API error system and the message cipher trait
pub use error::{Error, Result, SymmetricResultExt};
pub use gmcrypt_api::SymmetricCipher;
