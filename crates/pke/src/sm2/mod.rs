//! SM2 public-key encryption
//!
//! A ciphertext is `C1 ∥ C3 ∥ C2` where
//! - `C1 = k·G`, the ephemeral point in uncompressed form (65 bytes),
//! - `C3 = SM3(x₂ ∥ M ∥ y₂)`, the integrity tag (32 bytes),
//! - `C2 = M ⊕ KDF(x₂ ∥ y₂, |M|)`, the masked message,
//!
//! and `(x₂, y₂) = k·Q` is the point shared with the holder of `d`, who
//! recomputes it as `d·C1`.
//!
//! ```
//! use gmcrypt_pke::{sm2_decrypt, sm2_encrypt, sm2_generate_keypair};
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = sm2_generate_keypair(&mut OsRng).unwrap();
//! let ciphertext = sm2_encrypt(&pk, b"encryption standard", &mut OsRng).unwrap();
//! assert_eq!(ciphertext.len(), 97 + 19);
//! assert_eq!(sm2_decrypt(&sk, &ciphertext).unwrap(), b"encryption standard");
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use gmcrypt_algorithms::ec::{sm2p256, CurveArithmetic, Sm2P256, Sm2Point, Sm2Scalar};
use gmcrypt_algorithms::hash::{HashFunction, Sm3};
use gmcrypt_algorithms::kdf::Sm3Kdf;
use gmcrypt_api::error::{Error as ApiError, Result as ApiResult};
use gmcrypt_api::traits::Pke;
use gmcrypt_common::security::{barrier, EphemeralSecret};
use gmcrypt_internal::constant_time::{ct_eq, ct_is_zero, xor_in_place};
use gmcrypt_params::traditional::sm2::{
    SM2_C1_SIZE, SM2_C3_SIZE, SM2_CIPHERTEXT_MIN_SIZE, SM2_MAX_KEYSTREAM_RETRIES,
    SM2_PRIVATE_KEY_SIZE, SM2_PUBLIC_KEY_SIZE,
};

use crate::error::{Error, Result};

/// SM2 public key: a validated, non-identity curve point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm2PublicKey {
    point: Sm2Point,
    encoded: [u8; SM2_PUBLIC_KEY_SIZE],
}

impl Sm2PublicKey {
    /// Parse an uncompressed `0x04 ∥ x ∥ y` encoding
    ///
    /// The point must lie on the curve; the identity is never accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = Sm2P256::decode_point(bytes)
            .map_err(|_| Error::InvalidPublicKey("SM2 public key is not a curve point"))?;
        Ok(Self::from_point(point))
    }

    /// The 65-byte uncompressed encoding
    pub fn to_bytes(&self) -> [u8; SM2_PUBLIC_KEY_SIZE] {
        self.encoded
    }

    /// The underlying curve point
    pub fn point(&self) -> &Sm2Point {
        &self.point
    }

    fn from_point(point: Sm2Point) -> Self {
        let encoded = Sm2P256::encode_point(&point);
        Self { point, encoded }
    }
}

impl AsRef<[u8]> for Sm2PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.encoded
    }
}

/// SM2 secret key: a scalar d with `1 ≤ d < n`, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm2SecretKey(Sm2Scalar);

impl Sm2SecretKey {
    /// Parse a 32-byte big-endian scalar
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SM2_PRIVATE_KEY_SIZE {
            return Err(Error::InvalidSecretKey("SM2 secret key must be 32 bytes"));
        }
        let scalar = Sm2Scalar::from_slice(bytes)
            .map_err(|_| Error::InvalidSecretKey("SM2 secret key out of range"))?;
        Ok(Self(scalar))
    }

    /// Big-endian scalar bytes, wiped when the returned buffer drops
    pub fn to_bytes(&self) -> Zeroizing<[u8; SM2_PRIVATE_KEY_SIZE]> {
        Zeroizing::new(self.0.to_bytes())
    }

    /// Derive the matching public key `d·G`
    pub fn public_key(&self) -> Sm2PublicKey {
        Sm2PublicKey::from_point(Sm2P256::mul_base(&self.0))
    }
}

impl AsRef<[u8]> for Sm2SecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_secret_buffer().as_ref()
    }
}

impl fmt::Debug for Sm2SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sm2SecretKey([REDACTED])")
    }
}

/// SM2 public-key encryption over the SM2 recommended curve
pub struct Sm2;

impl Pke for Sm2 {
    type PublicKey = Sm2PublicKey;
    type SecretKey = Sm2SecretKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "SM2"
    }

    fn keypair<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let (d, q) =
            sm2p256::generate_keypair(rng).map_err(|e| ApiError::from(Error::from(e)))?;
        Ok((Sm2PublicKey::from_point(q), Sm2SecretKey(d)))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        Ok(encrypt_to::<Sm2P256, R>(&pk_recipient.point, plaintext, rng)?)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Vec<u8>> {
        Ok(decrypt_with::<Sm2P256>(&sk_recipient.0, ciphertext)?)
    }
}

/// Generate an SM2 key pair
pub fn sm2_generate_keypair<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> ApiResult<(Sm2PublicKey, Sm2SecretKey)> {
    Sm2::keypair(rng)
}

/// Encrypt `plaintext` to `public_key`, returning `C1 ∥ C3 ∥ C2`
pub fn sm2_encrypt<R: RngCore + CryptoRng>(
    public_key: &Sm2PublicKey,
    plaintext: &[u8],
    rng: &mut R,
) -> ApiResult<Vec<u8>> {
    Sm2::encrypt(public_key, plaintext, rng)
}

/// Decrypt a `C1 ∥ C3 ∥ C2` ciphertext
///
/// Truncated input is `InvalidCiphertext`, a bad C1 is `InvalidPoint`, and
/// a C3 mismatch is `AuthenticationFailed`.
pub fn sm2_decrypt(secret_key: &Sm2SecretKey, ciphertext: &[u8]) -> ApiResult<Vec<u8>> {
    Ok(decrypt_with::<Sm2P256>(&secret_key.0, ciphertext)?)
}

/// `C3 = H(x₂ ∥ M ∥ y₂)`
fn integrity_tag(x2: &[u8], message: &[u8], y2: &[u8]) -> Result<[u8; SM2_C3_SIZE]> {
    let mut hasher = Sm3::new();
    hasher.update(x2)?.update(message)?.update(y2)?;
    Ok(hasher.finalize()?.into_array())
}

/// Coordinates `x ∥ y` of an uncompressed encoding, without the tag byte
fn coordinates(encoded: &[u8]) -> (&[u8], &[u8]) {
    let xy = &encoded[1..];
    xy.split_at(xy.len() / 2)
}

fn encrypt_to<C, R>(recipient: &C::Point, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    R: RngCore + CryptoRng,
{
    for _attempt in 1..=SM2_MAX_KEYSTREAM_RETRIES {
        let k = C::random_scalar(rng)?;
        let c1 = C::encode_point(&C::mul_base(&k));
        let shared = EphemeralSecret::new(C::encode_point(&C::mul(&k, recipient)));
        drop(k);

        let encoded: &[u8] = (*shared).as_ref();
        let keystream = Sm3Kdf::derive(&encoded[1..], None, plaintext.len())?;

        // an empty message has an empty keystream and nothing to mask
        if !plaintext.is_empty() && ct_is_zero(&keystream) {
            #[cfg(feature = "tracing-log")]
            tracing::debug!(
                attempt = _attempt,
                "SM2 keystream all zero, drawing a new ephemeral scalar"
            );
            continue;
        }

        let (x2, y2) = coordinates(encoded);
        let c3 = integrity_tag(x2, plaintext, y2)?;

        let mut out = Vec::with_capacity(SM2_CIPHERTEXT_MIN_SIZE + plaintext.len());
        out.extend_from_slice(c1.as_ref());
        out.extend_from_slice(&c3);
        out.extend_from_slice(plaintext);
        xor_in_place(&mut out[SM2_CIPHERTEXT_MIN_SIZE..], &keystream);

        #[cfg(feature = "tracing-log")]
        tracing::trace!(
            curve = C::NAME,
            plaintext_len = plaintext.len(),
            attempt = _attempt,
            "SM2 message encrypted"
        );

        return Ok(out);
    }

    Err(Error::KeystreamExhausted {
        attempts: SM2_MAX_KEYSTREAM_RETRIES,
    })
}

fn decrypt_with<C: CurveArithmetic>(secret: &C::Scalar, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < SM2_CIPHERTEXT_MIN_SIZE {
        return Err(Error::TruncatedCiphertext {
            minimum: SM2_CIPHERTEXT_MIN_SIZE,
            actual: ciphertext.len(),
        });
    }
    let (c1, rest) = ciphertext.split_at(SM2_C1_SIZE);
    let (c3, c2) = rest.split_at(SM2_C3_SIZE);

    let c1_point = C::decode_point(c1)?;
    let shared = EphemeralSecret::new(C::encode_point(&C::mul(secret, &c1_point)));
    let encoded: &[u8] = (*shared).as_ref();

    let keystream = Sm3Kdf::derive(&encoded[1..], None, c2.len())?;
    let mut plaintext = Zeroizing::new(c2.to_vec());
    xor_in_place(&mut plaintext, &keystream);

    let (x2, y2) = coordinates(encoded);
    let expected = integrity_tag(x2, &plaintext, y2)?;
    if !barrier::with_barriers(|| ct_eq(expected, c3)) {
        #[cfg(feature = "tracing-log")]
        tracing::debug!(ciphertext_len = ciphertext.len(), "SM2 integrity check failed");
        return Err(Error::AuthenticationFailed);
    }

    #[cfg(feature = "tracing-log")]
    tracing::trace!(
        curve = C::NAME,
        ciphertext_len = ciphertext.len(),
        "SM2 message decrypted"
    );

    Ok(core::mem::take(&mut *plaintext))
}

#[cfg(test)]
mod tests;
