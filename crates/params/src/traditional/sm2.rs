//! Constants for the SM2 elliptic curve and its public-key encryption scheme
//!
//! The curve is `y^2 = x^3 + a*x + b` over the prime field GF(p) with
//! `a = p - 3`. All multi-byte values are big-endian.

/// Size of a field element or scalar in bytes
pub const SM2_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an encoded scalar (private key) in bytes
pub const SM2_SCALAR_SIZE: usize = 32;

/// Size of an uncompressed point `0x04 || X || Y`
pub const SM2_POINT_UNCOMPRESSED_SIZE: usize = 65;

/// Prefix byte of an uncompressed point
pub const SM2_POINT_UNCOMPRESSED_TAG: u8 = 0x04;

/// Size of the C1 component (ephemeral point) of a ciphertext
pub const SM2_C1_SIZE: usize = SM2_POINT_UNCOMPRESSED_SIZE;

/// Size of the C3 component (SM3 integrity hash) of a ciphertext
pub const SM2_C3_SIZE: usize = 32;

/// Minimum size of a well-formed ciphertext `C1 || C3 || C2`
pub const SM2_CIPHERTEXT_MIN_SIZE: usize = SM2_C1_SIZE + SM2_C3_SIZE;

/// Size of the public key encoding
pub const SM2_PUBLIC_KEY_SIZE: usize = SM2_POINT_UNCOMPRESSED_SIZE;

/// Size of the private key encoding
pub const SM2_PRIVATE_KEY_SIZE: usize = SM2_SCALAR_SIZE;

/// Random bytes drawn per scalar; the 8 surplus bytes keep the reduction bias negligible
pub const SM2_SCALAR_RANDOM_BYTES: usize = 40;

/// Encryption attempts made before giving up on an all-zero keystream
pub const SM2_MAX_KEYSTREAM_RETRIES: usize = 8;

/// Field prime p
pub const SM2_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Curve coefficient a = p - 3
pub const SM2_A: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC,
];

/// Curve coefficient b
pub const SM2_B: [u8; 32] = [
    0x28, 0xE9, 0xFA, 0x9E, 0x9D, 0x9F, 0x5E, 0x34, 0x4D, 0x5A, 0x9E, 0x4B, 0xCF, 0x65, 0x09, 0xA7,
    0xF3, 0x97, 0x89, 0xF5, 0x15, 0xAB, 0x8F, 0x92, 0xDD, 0xBC, 0xBD, 0x41, 0x4D, 0x94, 0x0E, 0x93,
];

/// Order n of the base point
pub const SM2_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x72, 0x03, 0xDF, 0x6B, 0x21, 0xC6, 0x05, 0x2B, 0x53, 0xBB, 0xF4, 0x09, 0x39, 0xD5, 0x41, 0x23,
];

/// Base point x-coordinate
pub const SM2_GX: [u8; 32] = [
    0x32, 0xC4, 0xAE, 0x2C, 0x1F, 0x19, 0x81, 0x19, 0x5F, 0x99, 0x04, 0x46, 0x6A, 0x39, 0xC9, 0x94,
    0x8F, 0xE3, 0x0B, 0xBF, 0xF2, 0x66, 0x0B, 0xE1, 0x71, 0x5A, 0x45, 0x89, 0x33, 0x4C, 0x74, 0xC7,
];

/// Base point y-coordinate
pub const SM2_GY: [u8; 32] = [
    0xBC, 0x37, 0x36, 0xA2, 0xF4, 0xF6, 0x77, 0x9C, 0x59, 0xBD, 0xCE, 0xE3, 0x6B, 0x69, 0x21, 0x53,
    0xD0, 0xA9, 0x87, 0x7C, 0xC6, 0x2A, 0x47, 0x40, 0x02, 0xDF, 0x32, 0xE5, 0x21, 0x39, 0xF0, 0xA0,
];
