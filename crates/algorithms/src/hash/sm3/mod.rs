//! SM3 cryptographic hash function
//!
//! Implements the SM3 hash algorithm as published in GB/T 32905-2016.
//! SM3 is a Merkle-Damgård construction over 512-bit blocks with a
//! 256-bit chaining value and a 64-round compression function.

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use gmcrypt_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use gmcrypt_params::utils::hash::{
    SM3_BLOCK_SIZE, SM3_LENGTH_OFFSET, SM3_OUTPUT_SIZE, SM3_STATE_WORDS,
};

/// Initial chaining value
const IV: [u32; SM3_STATE_WORDS] = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e,
];

/// Round constant for rounds 0..16
const T0: u32 = 0x79cc4519;
/// Round constant for rounds 16..64
const T1: u32 = 0x7a879d8a;

/// Marker type for the SM3 algorithm
pub enum Sm3Algorithm {}

impl HashAlgorithm for Sm3Algorithm {
    const OUTPUT_SIZE: usize = SM3_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SM3_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SM3";
}

/// SM3 hash state
///
/// Cloning an `Sm3` snapshots the running computation; both copies can be
/// fed and finalized independently. The state is zeroized on drop.
#[derive(Clone, Zeroize)]
pub struct Sm3 {
    state: [u32; SM3_STATE_WORDS],
    buffer: [u8; SM3_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Sm3 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

#[inline(always)]
fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline(always)]
fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

impl Sm3 {
    /// Creates a hasher in the initial state
    pub fn new() -> Self {
        Sm3 {
            state: IV,
            buffer: [0u8; SM3_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    /// Returns the hasher to its initial state
    pub fn reset(&mut self) {
        self.state = IV;
        self.buffer.zeroize();
        self.buffer_idx = 0;
        self.total_bytes = 0;
    }

    /// Digest of the input absorbed so far, leaving this hasher untouched
    ///
    /// Further `update` calls continue from the same point, so a running
    /// hash can be sampled at several prefixes.
    pub fn sum(&self) -> Digest<SM3_OUTPUT_SIZE> {
        let mut snapshot = self.clone();
        Digest::new(snapshot.finalize_internal())
    }

    /// Compresses one block into `state`; `block` is always `SM3_BLOCK_SIZE` bytes
    fn compress(state: &mut [u32; SM3_STATE_WORDS], block: &[u8]) {
        let mut w = EphemeralSecret::new([0u32; 68]);
        let mut w1 = EphemeralSecret::new([0u32; 64]);

        compiler_fence(Ordering::SeqCst);

        for i in 0..16 {
            w[i] = BigEndian::read_u32(&block[i * 4..]);
        }
        for j in 16..68 {
            w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
                ^ w[j - 13].rotate_left(7)
                ^ w[j - 6];
        }
        for j in 0..64 {
            w1[j] = w[j] ^ w[j + 4];
        }

        let mut working_vars = *state;
        let mut guard = ZeroizeGuard::new(&mut working_vars);

        let mut a = guard[0];
        let mut b = guard[1];
        let mut c = guard[2];
        let mut d = guard[3];
        let mut e = guard[4];
        let mut f = guard[5];
        let mut g = guard[6];
        let mut h = guard[7];

        for j in 0..64 {
            let t = if j < 16 { T0 } else { T1 };
            let a12 = a.rotate_left(12);
            let ss1 = a12
                .wrapping_add(e)
                .wrapping_add(t.rotate_left((j % 32) as u32))
                .rotate_left(7);
            let ss2 = ss1 ^ a12;
            let tt1 = ff(j, a, b, c)
                .wrapping_add(d)
                .wrapping_add(ss2)
                .wrapping_add(w1[j]);
            let tt2 = gg(j, e, f, g)
                .wrapping_add(h)
                .wrapping_add(ss1)
                .wrapping_add(w[j]);

            d = c;
            c = b.rotate_left(9);
            b = a;
            a = tt1;
            h = g;
            g = f.rotate_left(19);
            f = e;
            e = p0(tt2);
        }

        guard[0] = a;
        guard[1] = b;
        guard[2] = c;
        guard[3] = d;
        guard[4] = e;
        guard[5] = f;
        guard[6] = g;
        guard[7] = h;

        // SM3 chains with XOR rather than addition
        for (s, v) in state.iter_mut().zip(guard.iter()) {
            *s ^= *v;
        }

        compiler_fence(Ordering::SeqCst);
    }

    fn update_internal(&mut self, mut input: &[u8]) {
        self.total_bytes = self.total_bytes.wrapping_add(input.len() as u64);

        if self.buffer_idx > 0 {
            let fill = core::cmp::min(input.len(), SM3_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SM3_BLOCK_SIZE {
                let block = self.buffer;
                Self::compress(&mut self.state, &block);
                self.buffer_idx = 0;
            }
        }

        let mut blocks = input.chunks_exact(SM3_BLOCK_SIZE);
        for block in &mut blocks {
            Self::compress(&mut self.state, block);
        }

        let rest = blocks.remainder();
        if !rest.is_empty() {
            self.buffer[..rest.len()].copy_from_slice(rest);
            self.buffer_idx = rest.len();
        }
    }

    fn finalize_internal(&mut self) -> [u8; SM3_OUTPUT_SIZE] {
        let bit_len = self.total_bytes.wrapping_mul(8);

        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= SM3_LENGTH_OFFSET {
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            let block = self.buffer;
            Self::compress(&mut self.state, &block);
            self.buffer = [0u8; SM3_BLOCK_SIZE];
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..SM3_LENGTH_OFFSET] {
                *b = 0;
            }
        }

        BigEndian::write_u64(&mut self.buffer[SM3_LENGTH_OFFSET..], bit_len);
        let block = self.buffer;
        Self::compress(&mut self.state, &block);

        let mut out = [0u8; SM3_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);
        out
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureZeroingType for Sm3 {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl HashFunction for Sm3 {
    type Algorithm = Sm3Algorithm;
    type Output = Digest<SM3_OUTPUT_SIZE>;

    fn new() -> Self {
        Sm3::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let out = self.finalize_internal();
        self.reset();

        #[cfg(feature = "tracing-log")]
        tracing::trace!(algorithm = "SM3", "digest finalized");

        Ok(Digest::new(out))
    }
}

/// One-shot SM3 over `data`
///
/// Total over all inputs, including the empty slice.
pub fn sm3(data: &[u8]) -> [u8; SM3_OUTPUT_SIZE] {
    let mut hasher = Sm3::new();
    hasher.update_internal(data);
    hasher.finalize_internal()
}
