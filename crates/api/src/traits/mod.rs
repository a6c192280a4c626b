//! Traits implemented by the gmcrypt encryption schemes

pub mod pke;
pub mod symmetric;

pub use pke::Pke;
pub use symmetric::SymmetricCipher;
