//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode XORs each plaintext block with the previous ciphertext block
//! before encryption. The first block is XORed with an initialization
//! vector (IV). Input must be block aligned; padding and IV transport are
//! left to the caller.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::Nonce;
use gmcrypt_internal::constant_time::xor_in_place;

/// Marker trait for nonces that are compatible with CBC mode
pub trait CbcCompatible: crate::types::sealed::Sealed {}

impl<const N: usize> CbcCompatible for Nonce<N> {}

/// CBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: CbcCompatible,
    {
        validate::length("CBC initialization vector", N, B::block_size())?;

        Ok(Self {
            cipher,
            iv: iv.as_ref().to_vec(),
        })
    }

    /// Encrypts a block-aligned message
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("CBC plaintext", plaintext.len(), block_size)?;

        let mut out = plaintext.to_vec();
        let mut offset = 0;
        while offset < out.len() {
            let (done, rest) = out.split_at_mut(offset);
            let block = &mut rest[..block_size];
            let prev = if offset == 0 {
                &self.iv[..]
            } else {
                &done[offset - block_size..]
            };
            xor_in_place(block, prev);
            self.cipher.encrypt_block(block)?;
            offset += block_size;
        }
        Ok(out)
    }

    /// Decrypts a block-aligned message
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("CBC ciphertext", ciphertext.len(), block_size)?;

        let mut out = ciphertext.to_vec();
        let mut prev: &[u8] = &self.iv;
        for (block, source) in out
            .chunks_exact_mut(block_size)
            .zip(ciphertext.chunks_exact(block_size))
        {
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, prev);
            prev = source;
        }
        Ok(out)
    }
}
