//! SM2 recommended 256-bit prime curve
//!
//! Curve equation: y² = x³ − 3x + b over 𝔽ₚ (GB/T 32918.5-2017), where
//! - p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1,
//! - n = 0xFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123,
//! - cofactor h = 1, so every curve point other than the identity lies in ⟨G⟩.
//!
//! Implements:
//! - Montgomery arithmetic for 𝔽ₚ,
//! - Jacobian projective coordinates for point operations,
//! - uniform scalar sampling by wide reduction.

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{SM2_FIELD_ELEMENT_SIZE, SM2_POINT_UNCOMPRESSED_SIZE, SM2_SCALAR_SIZE};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use rand::{CryptoRng, RngCore};

use super::CurveArithmetic;
use crate::error::Result;

/// Type-level handle for the SM2 curve backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sm2P256 {}

impl CurveArithmetic for Sm2P256 {
    type Scalar = Scalar;
    type Point = Point;
    type PointEncoding = [u8; SM2_POINT_UNCOMPRESSED_SIZE];

    const NAME: &'static str = "SM2-P256";

    fn base_point() -> Point {
        Point::generator()
    }

    fn mul_base(scalar: &Scalar) -> Point {
        scalar_mult_base_g(scalar)
    }

    fn mul(scalar: &Scalar, point: &Point) -> Point {
        scalar_mult(scalar, point)
    }

    fn decode_point(bytes: &[u8]) -> Result<Point> {
        Point::deserialize_uncompressed(bytes)
    }

    fn encode_point(point: &Point) -> [u8; SM2_POINT_UNCOMPRESSED_SIZE] {
        point.serialize_uncompressed()
    }

    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
        Scalar::random(rng)
    }
}

/// Get the standard base point G
pub fn base_point_g() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    if point.is_identity() {
        Point::identity()
    } else {
        point.mul(scalar)
    }
}

/// Generate a key pair with private scalar d in `[1, n−2]`
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let d = Scalar::random_private_key(rng)?;
    let q = scalar_mult_base_g(&d);

    #[cfg(feature = "tracing-log")]
    tracing::debug!(curve = "SM2-P256", "key pair generated");

    Ok((d, q))
}
