//! Electronic Codebook (ECB) mode
//!
//! Each block is transformed independently with the same key. Identical
//! plaintext blocks therefore produce identical ciphertext blocks.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ecb<B> {
    /// Wraps a keyed block cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypts block-aligned input
    ///
    /// Padding must be applied by the caller.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB plaintext", plaintext.len(), B::block_size())?;

        let mut out = plaintext.to_vec();
        for block in out.chunks_exact_mut(B::block_size()) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(out)
    }

    /// Decrypts block-aligned input
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB ciphertext", ciphertext.len(), B::block_size())?;

        let mut out = ciphertext.to_vec();
        for block in out.chunks_exact_mut(B::block_size()) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests;
