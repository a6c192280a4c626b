//! Block cipher modes of operation
//!
//! Both modes operate on block-aligned input only; see
//! [`crate::block::padding`] for PKCS#7.

pub mod cbc;
pub mod ecb;

pub use cbc::Cbc;
pub use ecb::Ecb;
