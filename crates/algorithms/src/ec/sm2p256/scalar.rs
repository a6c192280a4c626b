//! SM2 P-256 scalars
//!
//! Scalars are private keys and ephemeral multipliers, always in `[1, n−1]`
//! and stored big-endian in a zeroizing buffer.

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::constants::{
    bytes_to_limbs_le, limbs_to_bytes_be, sbb8, NLIMBS, N_LIMBS, N_MINUS_1_LIMBS,
    N_MINUS_2_LIMBS, SM2_SCALAR_RANDOM_BYTES, SM2_SCALAR_SIZE,
};
use crate::error::{validate, Error, Result};
use crate::types::{EphemeralSecret, SecretBuffer};

/// Scalar modulo the SM2 curve order n
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<SM2_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from big-endian bytes
    ///
    /// Rejects zero and any value ≥ n; no reduction is applied.
    pub fn new(data: [u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        let buffer = SecretBuffer::new(data);
        if buffer.is_zero() {
            return Err(Error::param("SM2 scalar", "Scalar is zero"));
        }
        let limbs = EphemeralSecret::new(bytes_to_limbs_le(&data));
        let (_, borrow) = sbb8(&limbs, &N_LIMBS);
        if borrow == 0 {
            return Err(Error::param("SM2 scalar", "Scalar ≥ curve order"));
        }
        Ok(Scalar(buffer))
    }

    /// Deserialize from a byte slice of exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 scalar", bytes.len(), SM2_SCALAR_SIZE)?;
        let mut tmp = [0u8; SM2_SCALAR_SIZE];
        tmp.copy_from_slice(bytes);
        let scalar = Self::new(tmp);
        tmp.zeroize();
        scalar
    }

    /// Uniform ephemeral scalar in `[1, n−1]`
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Self::random_below(rng, &N_MINUS_1_LIMBS)
    }

    /// Uniform private key scalar in `[1, n−2]`
    pub fn random_private_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Self::random_below(rng, &N_MINUS_2_LIMBS)
    }

    /// Draw 40 random bytes v and return `(v mod bound) + 1`
    ///
    /// The 64 surplus bits keep the modular bias below 2⁻⁶⁴.
    fn random_below<R: RngCore + CryptoRng>(
        rng: &mut R,
        bound: &[u32; NLIMBS],
    ) -> Result<Self> {
        let mut wide = EphemeralSecret::new([0u8; SM2_SCALAR_RANDOM_BYTES]);
        rng.try_fill_bytes(&mut wide[..])
            .map_err(|_| Error::RandomSource {
                context: "SM2 scalar",
            })?;

        let mut r = EphemeralSecret::new(Self::reduce_wide(&wide[..], bound));

        // r < bound ≤ n − 1, so r + 1 ≤ n − 1 and never overflows
        let mut carry = 1u64;
        for limb in r.iter_mut() {
            let tmp = *limb as u64 + carry;
            *limb = tmp as u32;
            carry = tmp >> 32;
        }

        let bytes = EphemeralSecret::new(limbs_to_bytes_be(&r));
        Ok(Scalar(SecretBuffer::new(*bytes)))
    }

    /// Reduce a big-endian byte string modulo `m` by shift-and-subtract
    ///
    /// Runs a fixed number of steps with a constant-time conditional
    /// subtraction per input bit.
    fn reduce_wide(bytes: &[u8], m: &[u32; NLIMBS]) -> [u32; NLIMBS] {
        let mut r = [0u32; NLIMBS];
        for &byte in bytes.iter() {
            for bit in (0..8).rev() {
                // r = 2r + bit; the shifted-out top bit joins the comparison
                let top = r[NLIMBS - 1] >> 31;
                let mut carry_in = ((byte >> bit) & 1) as u32;
                for limb in r.iter_mut() {
                    let next = *limb >> 31;
                    *limb = (*limb << 1) | carry_in;
                    carry_in = next;
                }

                let (sub, borrow) = sbb8(&r, m);
                // subtract when the 257-bit value is ≥ m
                let take = Choice::from(((top | (borrow ^ 1)) & 1) as u8);
                for (r_limb, s_limb) in r.iter_mut().zip(sub.iter()) {
                    *r_limb = u32::conditional_select(r_limb, s_limb, take);
                }
            }
        }
        r
    }

    /// Access the underlying SecretBuffer
    pub fn as_secret_buffer(&self) -> &SecretBuffer<SM2_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize to big-endian bytes
    pub fn to_bytes(&self) -> [u8; SM2_SCALAR_SIZE] {
        let mut out = [0u8; SM2_SCALAR_SIZE];
        out.copy_from_slice(self.0.as_ref());
        out
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}
