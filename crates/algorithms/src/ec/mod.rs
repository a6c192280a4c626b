//! Elliptic curve primitives
//!
//! The public-key scheme talks to the curve only through
//! [`CurveArithmetic`], so another backend can be slotted in without touching
//! the scheme. [`sm2p256`] is the SM2 recommended curve.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Result;

pub mod sm2p256;

pub use sm2p256::{Point as Sm2Point, Scalar as Sm2Scalar, Sm2P256};

/// Group operations a curve backend offers to a public-key scheme
pub trait CurveArithmetic {
    /// Secret scalar type, zeroized on drop
    type Scalar: Clone;
    /// Affine point type
    type Point: Clone + PartialEq;
    /// Fixed-size serialized point; wiped when it encodes a shared secret
    type PointEncoding: AsRef<[u8]> + Zeroize;

    /// Human-readable curve name
    const NAME: &'static str;

    /// The group generator
    fn base_point() -> Self::Point;

    /// `scalar · G`
    fn mul_base(scalar: &Self::Scalar) -> Self::Point;

    /// `scalar · point`
    fn mul(scalar: &Self::Scalar, point: &Self::Point) -> Self::Point;

    /// Parse and validate an uncompressed point encoding
    fn decode_point(bytes: &[u8]) -> Result<Self::Point>;

    /// Uncompressed point encoding
    fn encode_point(point: &Self::Point) -> Self::PointEncoding;

    /// Uniform nonzero scalar below the group order
    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Scalar>;
}
