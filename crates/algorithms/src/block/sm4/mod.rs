//! SM4 block cipher
//!
//! SM4 (GB/T 32907-2016) is a 128-bit block cipher with a 128-bit key and a
//! 32-round unbalanced Feistel structure. The round function combines the
//! S-box with a linear transform; both are folded into two 256-entry
//! lookup tables that are computed at compile time.

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBytes;

#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use gmcrypt_params::utils::symmetric::{SM4_BLOCK_SIZE, SM4_KEY_SIZE, SM4_ROUNDS};

const SBOX: [u8; 256] = [
    0xd6, 0x90, 0xe9, 0xfe, 0xcc, 0xe1, 0x3d, 0xb7, 0x16, 0xb6, 0x14, 0xc2, 0x28, 0xfb, 0x2c, 0x05,
    0x2b, 0x67, 0x9a, 0x76, 0x2a, 0xbe, 0x04, 0xc3, 0xaa, 0x44, 0x13, 0x26, 0x49, 0x86, 0x06, 0x99,
    0x9c, 0x42, 0x50, 0xf4, 0x91, 0xef, 0x98, 0x7a, 0x33, 0x54, 0x0b, 0x43, 0xed, 0xcf, 0xac, 0x62,
    0xe4, 0xb3, 0x1c, 0xa9, 0xc9, 0x08, 0xe8, 0x95, 0x80, 0xdf, 0x94, 0xfa, 0x75, 0x8f, 0x3f, 0xa6,
    0x47, 0x07, 0xa7, 0xfc, 0xf3, 0x73, 0x17, 0xba, 0x83, 0x59, 0x3c, 0x19, 0xe6, 0x85, 0x4f, 0xa8,
    0x68, 0x6b, 0x81, 0xb2, 0x71, 0x64, 0xda, 0x8b, 0xf8, 0xeb, 0x0f, 0x4b, 0x70, 0x56, 0x9d, 0x35,
    0x1e, 0x24, 0x0e, 0x5e, 0x63, 0x58, 0xd1, 0xa2, 0x25, 0x22, 0x7c, 0x3b, 0x01, 0x21, 0x78, 0x87,
    0xd4, 0x00, 0x46, 0x57, 0x9f, 0xd3, 0x27, 0x52, 0x4c, 0x36, 0x02, 0xe7, 0xa0, 0xc4, 0xc8, 0x9e,
    0xea, 0xbf, 0x8a, 0xd2, 0x40, 0xc7, 0x38, 0xb5, 0xa3, 0xf7, 0xf2, 0xce, 0xf9, 0x61, 0x15, 0xa1,
    0xe0, 0xae, 0x5d, 0xa4, 0x9b, 0x34, 0x1a, 0x55, 0xad, 0x93, 0x32, 0x30, 0xf5, 0x8c, 0xb1, 0xe3,
    0x1d, 0xf6, 0xe2, 0x2e, 0x82, 0x66, 0xca, 0x60, 0xc0, 0x29, 0x23, 0xab, 0x0d, 0x53, 0x4e, 0x6f,
    0xd5, 0xdb, 0x37, 0x45, 0xde, 0xfd, 0x8e, 0x2f, 0x03, 0xff, 0x6a, 0x72, 0x6d, 0x6c, 0x5b, 0x51,
    0x8d, 0x1b, 0xaf, 0x92, 0xbb, 0xdd, 0xbc, 0x7f, 0x11, 0xd9, 0x5c, 0x41, 0x1f, 0x10, 0x5a, 0xd8,
    0x0a, 0xc1, 0x31, 0x88, 0xa5, 0xcd, 0x7b, 0xbd, 0x2d, 0x74, 0xd0, 0x12, 0xb8, 0xe5, 0xb4, 0xb0,
    0x89, 0x69, 0x97, 0x4a, 0x0c, 0x96, 0x77, 0x7e, 0x65, 0xb9, 0xf1, 0x09, 0xc5, 0x6e, 0xc6, 0x84,
    0x18, 0xf0, 0x7d, 0xec, 0x3a, 0xdc, 0x4d, 0x20, 0x79, 0xee, 0x5f, 0x3e, 0xd7, 0xcb, 0x39, 0x48,
];

/// System parameter XORed into the key before expansion
const FK: [u32; 4] = [0xa3b1bac6, 0x56aa3350, 0x677d9197, 0xb27022dc];

/// Key schedule constants
const CK: [u32; 32] = [
    0x00070e15, 0x1c232a31, 0x383f464d, 0x545b6269, 0x70777e85, 0x8c939aa1, 0xa8afb6bd, 0xc4cbd2d9,
    0xe0e7eef5, 0xfc030a11, 0x181f262d, 0x343b4249, 0x50575e65, 0x6c737a81, 0x888f969d, 0xa4abb2b9,
    0xc0c7ced5, 0xdce3eaf1, 0xf8ff060d, 0x141b2229, 0x30373e45, 0x4c535a61, 0x686f767d, 0x848b9299,
    0xa0a7aeb5, 0xbcc3cad1, 0xd8dfe6ed, 0xf4fb0209, 0x10171e25, 0x2c333a41, 0x484f565d, 0x646b7279,
];

/// Which linear transform a table folds in
#[derive(Clone, Copy)]
enum Linear {
    /// L, used by the round function
    Round,
    /// L', used by the key schedule
    KeySchedule,
}

/// Builds `T[i][pos] = L(SBOX[i] << 8*(3-pos))` for every byte value and position
const fn build_table(linear: Linear) -> [[u32; 4]; 256] {
    let mut table = [[0u32; 4]; 256];
    let mut i = 0;
    while i < 256 {
        let mut pos = 0;
        while pos < 4 {
            let b = (SBOX[i] as u32) << ((3 - pos) * 8);
            table[i][pos] = match linear {
                Linear::Round => {
                    b ^ b.rotate_left(2) ^ b.rotate_left(10) ^ b.rotate_left(18) ^ b.rotate_left(24)
                }
                Linear::KeySchedule => b ^ b.rotate_left(13) ^ b.rotate_left(23),
            };
            pos += 1;
        }
        i += 1;
    }
    table
}

static T1_TABLE: [[u32; 4]; 256] = build_table(Linear::Round);
static T2_TABLE: [[u32; 4]; 256] = build_table(Linear::KeySchedule);

#[inline(always)]
fn lookup(table: &[[u32; 4]; 256], a: u32) -> u32 {
    table[(a >> 24) as usize][0]
        ^ table[((a >> 16) & 0xff) as usize][1]
        ^ table[((a >> 8) & 0xff) as usize][2]
        ^ table[(a & 0xff) as usize][3]
}

/// Round transform T = L(tau(a))
#[inline(always)]
fn t1(a: u32) -> u32 {
    lookup(&T1_TABLE, a)
}

/// Key schedule transform T' = L'(tau(a))
#[inline(always)]
fn t2(a: u32) -> u32 {
    lookup(&T2_TABLE, a)
}

/// Type-level constants for SM4
pub enum Sm4Algorithm {}

impl CipherAlgorithm for Sm4Algorithm {
    const KEY_SIZE: usize = SM4_KEY_SIZE;
    const BLOCK_SIZE: usize = SM4_BLOCK_SIZE;

    fn name() -> &'static str {
        "SM4"
    }
}

/// SM4 block cipher with expanded round keys
///
/// Encryption and decryption keys are the same 32 words in opposite order.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm4 {
    enc_keys: [u32; SM4_ROUNDS],
    dec_keys: [u32; SM4_ROUNDS],
}

impl fmt::Debug for Sm4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sm4([REDACTED])")
    }
}

impl CipherAlgorithm for Sm4 {
    const KEY_SIZE: usize = SM4_KEY_SIZE;
    const BLOCK_SIZE: usize = SM4_BLOCK_SIZE;

    fn name() -> &'static str {
        "SM4"
    }
}

impl Sm4 {
    /// Builds a cipher from a raw key slice
    ///
    /// Any length other than 16 bytes is a length error.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        validate::length("SM4 key", key.len(), SM4_KEY_SIZE)?;
        let mut mk = [0u8; SM4_KEY_SIZE];
        mk.copy_from_slice(key);
        let cipher = Self::expand_key(&mk);
        mk.zeroize();
        Ok(cipher)
    }

    fn expand_key(key: &[u8; SM4_KEY_SIZE]) -> Self {
        let mut k = [0u32; SM4_ROUNDS + 4];
        for i in 0..4 {
            k[i] = BigEndian::read_u32(&key[i * 4..]) ^ FK[i];
        }

        let mut enc_keys = [0u32; SM4_ROUNDS];
        for i in 0..SM4_ROUNDS {
            k[i + 4] = k[i] ^ t2(k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ CK[i]);
            enc_keys[i] = k[i + 4];
        }
        k.zeroize();

        let mut dec_keys = [0u32; SM4_ROUNDS];
        for i in 0..SM4_ROUNDS {
            dec_keys[i] = enc_keys[SM4_ROUNDS - 1 - i];
        }

        Sm4 { enc_keys, dec_keys }
    }

    fn crypt_block(round_keys: &[u32; SM4_ROUNDS], block: &mut [u8]) -> Result<()> {
        validate::length("SM4 block", block.len(), SM4_BLOCK_SIZE)?;

        compiler_fence(Ordering::SeqCst);

        let mut x0 = BigEndian::read_u32(&block[0..4]);
        let mut x1 = BigEndian::read_u32(&block[4..8]);
        let mut x2 = BigEndian::read_u32(&block[8..12]);
        let mut x3 = BigEndian::read_u32(&block[12..16]);

        for rk in round_keys.iter() {
            let next = x0 ^ t1(x1 ^ x2 ^ x3 ^ rk);
            x0 = x1;
            x1 = x2;
            x2 = x3;
            x3 = next;
        }

        // Reverse transform R on output
        BigEndian::write_u32(&mut block[0..4], x3);
        BigEndian::write_u32(&mut block[4..8], x2);
        BigEndian::write_u32(&mut block[8..12], x1);
        BigEndian::write_u32(&mut block[12..16], x0);

        compiler_fence(Ordering::SeqCst);
        Ok(())
    }
}

impl BlockCipher for Sm4 {
    type Algorithm = Sm4Algorithm;
    type Key = SecretBytes<SM4_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        Self::expand_key(key)
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        Self::crypt_block(&self.enc_keys, block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        Self::crypt_block(&self.dec_keys, block)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Key> {
        let mut key_data = [0u8; SM4_KEY_SIZE];
        rng.try_fill_bytes(&mut key_data)?;
        let key = SecretBytes::new(key_data);
        key_data.zeroize();
        Ok(key)
    }
}

#[cfg(test)]
mod tests;
