//! SM2 P-256 field arithmetic
//!
//! Elements of 𝔽ₚ with p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1, held as eight
//! little-endian 32-bit limbs in Montgomery form (x·R mod p, R = 2²⁵⁶).
//! The low limb of p is 0xFFFFFFFF, so −p⁻¹ mod 2³² = 1 and the reduction
//! multiplier of each CIOS round is simply the low accumulator limb.

use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use super::constants::{
    adc8, bytes_to_limbs_le, limbs_to_bytes_be, sbb8, NLIMBS, SM2_FIELD_ELEMENT_SIZE,
};
use crate::error::{Error, Result};

/// Field element in Montgomery representation
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /// p as little-endian limbs
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
        0xFFFFFFFE,
    ];

    /// R mod p, the Montgomery form of 1
    const ONE: [u32; NLIMBS] = [
        0x00000001, 0x00000000, 0xFFFFFFFF, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001,
    ];

    /// R² mod p, used to enter Montgomery form
    const R2: [u32; NLIMBS] = [
        0x00000003, 0x00000002, 0xFFFFFFFF, 0x00000002, 0x00000001, 0x00000001, 0x00000002,
        0x00000004,
    ];

    /// Curve coefficient b in Montgomery form
    pub(crate) const B_MONT: FieldElement = FieldElement([
        0x2BC0DD42, 0x90D23063, 0xE9B537AB, 0x71CF379A, 0x5EA51C3C, 0x52798150, 0xBA20E2C8,
        0x240FE188,
    ]);

    /// Base point x-coordinate in Montgomery form
    pub(crate) const GX_MONT: FieldElement = FieldElement([
        0xF418029E, 0x61328990, 0xDCA6C050, 0x3E7981ED, 0xAC24C3C3, 0xD6A1ED99, 0xE1C13B05,
        0x91167A5E,
    ]);

    /// Base point y-coordinate in Montgomery form
    pub(crate) const GY_MONT: FieldElement = FieldElement([
        0x3C2D0DDD, 0xC1354E59, 0x8D3295FA, 0xC1F5E578, 0x6E2A48F8, 0x8D4CFB06, 0x81D735BD,
        0x63CD65D4,
    ]);

    /// p − 2, the Fermat inversion exponent (big-endian)
    const P_MINUS_2: [u8; 32] = [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFD,
    ];

    /// The additive identity
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity
    #[inline]
    pub fn one() -> Self {
        FieldElement(Self::ONE)
    }

    /// Parse a big-endian canonical encoding
    ///
    /// Values ≥ p are rejected rather than reduced.
    pub fn from_bytes(bytes: &[u8; SM2_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = bytes_to_limbs_le(bytes);
        let (_, borrow) = sbb8(&limbs, &Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param("SM2 field element", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs).mul(&FieldElement(Self::R2)))
    }

    /// Big-endian canonical encoding
    pub fn to_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        let mut one = [0u32; NLIMBS];
        one[0] = 1;
        let canonical = self.mul(&FieldElement(one));
        limbs_to_bytes_be(&canonical.0)
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().fold(0u32, |acc, &w| acc | w) == 0
    }

    /// (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc8(&self.0, &other.0);
        let (reduced, borrow) = sbb8(&sum, &Self::MOD_LIMBS);
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        Self::conditional_select(&sum, &reduced, Choice::from(need_reduce as u8))
    }

    /// (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb8(&self.0, &other.0);
        let (diff_plus_p, _) = adc8(&diff, &Self::MOD_LIMBS);
        Self::conditional_select(&diff, &diff_plus_p, Choice::from(borrow as u8))
    }

    /// 2·self
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// −self mod p
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Montgomery product self·other·R⁻¹ mod p (CIOS)
    pub fn mul(&self, other: &Self) -> Self {
        let a = &self.0;
        let b = &other.0;
        let p = &Self::MOD_LIMBS;
        let mut t = [0u32; NLIMBS + 2];

        for &bi in b.iter() {
            let mut carry = 0u64;
            for j in 0..NLIMBS {
                let uv = t[j] as u64 + (a[j] as u64) * (bi as u64) + carry;
                t[j] = uv as u32;
                carry = uv >> 32;
            }
            let uv = t[NLIMBS] as u64 + carry;
            t[NLIMBS] = uv as u32;
            t[NLIMBS + 1] = (uv >> 32) as u32;

            let m = t[0] as u64;
            let uv = t[0] as u64 + m * (p[0] as u64);
            let mut carry = uv >> 32;
            for j in 1..NLIMBS {
                let uv = t[j] as u64 + m * (p[j] as u64) + carry;
                t[j - 1] = uv as u32;
                carry = uv >> 32;
            }
            let uv = t[NLIMBS] as u64 + carry;
            t[NLIMBS - 1] = uv as u32;
            t[NLIMBS] = t[NLIMBS + 1] + (uv >> 32) as u32;
        }

        let mut r = [0u32; NLIMBS];
        r.copy_from_slice(&t[..NLIMBS]);
        let carry = t[NLIMBS];
        t.zeroize();

        let (reduced, borrow) = sbb8(&r, p);
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        Self::conditional_select(&r, &reduced, Choice::from(need_reduce as u8))
    }

    /// self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse via Fermat: a^(p−2) mod p
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("SM2 field element", "Inverse of zero"));
        }

        let mut result = FieldElement::one();
        for &byte in Self::P_MINUS_2.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        Ok(result)
    }

    /// Constant-time select: `a` when `flag` is 0, `b` otherwise
    fn conditional_select(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> Self {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        FieldElement(out)
    }
}
