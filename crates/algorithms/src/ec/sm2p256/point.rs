//! SM2 P-256 elliptic curve point operations

use subtle::{Choice, ConditionallySelectable};

use super::constants::{
    SM2_FIELD_ELEMENT_SIZE, SM2_POINT_UNCOMPRESSED_SIZE, SM2_POINT_UNCOMPRESSED_TAG,
};
use super::field::FieldElement;
use super::scalar::Scalar;
use crate::error::{Error, Result};

/// Affine coordinates (x, y) or the point at infinity
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian coordinates (X:Y:Z) with x = X/Z², y = Y/Z³
#[derive(Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Build a point from big-endian affine coordinates
    ///
    /// Fails unless both coordinates are below p and satisfy the curve equation.
    pub fn new_uncompressed(
        x_bytes: &[u8; SM2_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; SM2_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let invalid = |_| Error::InvalidPoint {
            context: "SM2 point coordinate",
        };
        let x = FieldElement::from_bytes(x_bytes).map_err(invalid)?;
        let y = FieldElement::from_bytes(y_bytes).map_err(invalid)?;
        if !Self::is_on_curve(&x, &y) {
            return Err(Error::InvalidPoint {
                context: "SM2 point not on curve",
            });
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// The generator G
    pub fn generator() -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement::GX_MONT,
            y: FieldElement::GY_MONT,
        }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// x-coordinate as 32 big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// y-coordinate as 32 big-endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Serialize as `0x04 ∥ x ∥ y`; the identity encodes as all zeros
    pub fn serialize_uncompressed(&self) -> [u8; SM2_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; SM2_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = SM2_POINT_UNCOMPRESSED_TAG;
        out[1..1 + SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[1 + SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize `0x04 ∥ x ∥ y`
    ///
    /// Only finite points are accepted; the all-zero identity encoding is
    /// rejected along with every other malformed input.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SM2_POINT_UNCOMPRESSED_SIZE {
            return Err(Error::InvalidPoint {
                context: "SM2 point encoding length",
            });
        }
        if bytes[0] != SM2_POINT_UNCOMPRESSED_TAG {
            return Err(Error::InvalidPoint {
                context: "SM2 point encoding tag",
            });
        }
        let mut xb = [0u8; SM2_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; SM2_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..1 + SM2_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[1 + SM2_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&xb, &yb)
    }

    /// Add two points (group law)
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Double this point: 2P
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Negate this point: −P = (x, −y)
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return Self::identity();
        }
        Point {
            is_identity: Choice::from(0),
            x: self.x.clone(),
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication: scalar · P
    ///
    /// Left-to-right double-and-add over all 256 bits; the addition is
    /// computed for every bit and kept by constant-time selection.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let base = self.to_projective();
        let mut acc = ProjectivePoint::identity();
        for &byte in scalar.as_secret_buffer().as_ref().iter() {
            for i in (0..8).rev() {
                acc = acc.double();
                let sum = acc.add(&base);
                let bit = Choice::from((byte >> i) & 1);
                acc = ProjectivePoint::conditional_select(&acc, &sum, bit);
            }
        }
        acc.to_affine()
    }

    /// Check that (x, y) satisfies y² = x³ − 3x + b
    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let y2 = y.square();
        let x3 = x.square().mul(x);
        let three_x = x.double().add(x);
        let rhs = x3.sub(&three_x).add(&FieldElement::B_MONT);
        y2 == rhs
    }

    fn to_projective(&self) -> ProjectivePoint {
        if self.is_identity() {
            ProjectivePoint::identity()
        } else {
            ProjectivePoint {
                is_identity: Choice::from(0),
                x: self.x.clone(),
                y: self.y.clone(),
                z: FieldElement::one(),
            }
        }
    }
}

impl ProjectivePoint {
    /// Identity in Jacobian form: (1 : 1 : 0)
    pub fn identity() -> Self {
        ProjectivePoint {
            is_identity: Choice::from(1),
            x: FieldElement::one(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let select = |fa: &FieldElement, fb: &FieldElement| {
            let mut out = FieldElement::zero();
            for ((o, x), y) in out.0.iter_mut().zip(fa.0.iter()).zip(fb.0.iter()) {
                *o = u32::conditional_select(x, y, choice);
            }
            out
        };
        ProjectivePoint {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, choice),
            x: select(&a.x, &b.x),
            y: select(&a.y, &b.y),
            z: select(&a.z, &b.z),
        }
    }

    /// Point addition (Jacobian coordinates)
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity.into() {
            return other.clone();
        }
        if other.is_identity.into() {
            return self.clone();
        }

        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let z1_cu = z1_sq.mul(&self.z);
        let z2_cu = z2_sq.mul(&other.z);

        let u1 = self.x.mul(&z2_sq); // X₁·Z₂²
        let u2 = other.x.mul(&z1_sq); // X₂·Z₁²
        let s1 = self.y.mul(&z2_cu); // Y₁·Z₂³
        let s2 = other.y.mul(&z1_cu); // Y₂·Z₁³

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return ProjectivePoint::identity();
        }

        let h2 = h.square();
        let h3 = h2.mul(&h);
        let v = u1.mul(&h2);

        // X₃ = r² − h³ − 2v
        let x3 = r.square().sub(&h3).sub(&v.double());

        // Y₃ = r·(v − X₃) − S₁·h³
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&h3));

        // Z₃ = Z₁·Z₂·h
        let z3 = self.z.mul(&other.z).mul(&h);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point doubling (Jacobian coordinates, a = −3)
    pub fn double(&self) -> Self {
        if self.is_identity.into() {
            return self.clone();
        }
        if self.y.is_zero() {
            return ProjectivePoint::identity();
        }

        //   δ = Z², γ = Y², β = X·γ, α = 3·(X − δ)·(X + δ)
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x.mul(&gamma);

        let t = self.x.add(&delta).mul(&self.x.sub(&delta));
        let alpha = t.double().add(&t);

        let four_beta = beta.double().double();

        // X₃ = α² − 8β
        let x3 = alpha.square().sub(&four_beta.double());

        // Z₃ = (Y + Z)² − γ − δ
        let z3 = self.y.add(&self.z).square().sub(&gamma).sub(&delta);

        // Y₃ = α·(4β − X₃) − 8γ²
        let eight_gamma_sq = gamma.square().double().double().double();
        let y3 = alpha.mul(&four_beta.sub(&x3)).sub(&eight_gamma_sq);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Convert back to affine coordinates
    pub fn to_affine(&self) -> Point {
        if self.is_identity.into() {
            return Point::identity();
        }
        let z_inv = match self.z.invert() {
            Ok(inv) => inv,
            Err(_) => return Point::identity(),
        };
        let z_inv_sq = z_inv.square();
        let z_inv_cu = z_inv_sq.mul(&z_inv);
        Point {
            is_identity: Choice::from(0),
            x: self.x.mul(&z_inv_sq),
            y: self.y.mul(&z_inv_cu),
        }
    }
}
