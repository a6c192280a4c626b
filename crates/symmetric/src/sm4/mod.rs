//! SM4 message encryption in ECB and CBC mode
//!
//! Messages of any length are PKCS#7 padded to the 16-byte block size.
//! CBC ciphertexts carry their IV in front: `IV ∥ C₁ ∥ … ∥ Cₙ`. ECB
//! ciphertexts are the bare blocks.
//!
//! ```
//! use gmcrypt_symmetric::{sm4_ecb_decrypt, sm4_ecb_encrypt};
//!
//! let key = b"1234567890abcdef";
//! let ciphertext = sm4_ecb_encrypt(b"hello world", key).unwrap();
//! let plaintext = sm4_ecb_decrypt(&ciphertext, key).unwrap();
//! assert_eq!(plaintext, b"hello world");
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use gmcrypt_algorithms::block::padding::{pkcs7_pad, pkcs7_unpad};
use gmcrypt_algorithms::block::{BlockCipher, Cbc, Ecb, Sm4};
use gmcrypt_algorithms::types::Nonce;
use gmcrypt_api::types::SecretBytes;
use gmcrypt_api::SymmetricCipher;
use gmcrypt_params::utils::symmetric::{SM4_BLOCK_SIZE, SM4_CBC_IV_SIZE, SM4_KEY_SIZE};

use crate::error::{validate_ciphertext_length, Error, Result, SymmetricResultExt};

/// Initialization vector for SM4-CBC
pub type Sm4Nonce = Nonce<SM4_CBC_IV_SIZE>;

/// 128-bit SM4 key, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm4Key(SecretBytes<SM4_KEY_SIZE>);

impl Sm4Key {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; SM4_KEY_SIZE]) -> Self {
        Self(SecretBytes::new(bytes))
    }

    /// Copy a key from a slice of exactly 16 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SM4_KEY_SIZE {
            return Err(Error::InvalidLength {
                context: "SM4 key",
                expected: SM4_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    /// Draw a fresh random key
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Ok(Self(SecretBytes::random(rng)?))
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    fn cipher(&self) -> Sm4 {
        Sm4::new(&self.0)
    }
}

impl AsRef<[u8]> for Sm4Key {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Sm4Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sm4Key([REDACTED])")
    }
}

/// SM4 in ECB mode with PKCS#7 padding
#[derive(Clone)]
pub struct Sm4Ecb {
    mode: Ecb<Sm4>,
}

impl Sm4Ecb {
    /// Create a cipher from a key
    pub fn new(key: &Sm4Key) -> Self {
        Self {
            mode: Ecb::new(key.cipher()),
        }
    }

    /// Pad and encrypt; the output is a whole number of blocks
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padded = Zeroizing::new(pkcs7_pad(plaintext, SM4_BLOCK_SIZE).map_primitive_err()?);
        let ciphertext = self.mode.encrypt(&padded).map_primitive_err()?;

        #[cfg(feature = "tracing-log")]
        tracing::trace!(
            mode = "SM4-ECB",
            plaintext_len = plaintext.len(),
            "message encrypted"
        );

        Ok(ciphertext)
    }

    /// Decrypt and strip padding
    ///
    /// The ciphertext must be a non-empty multiple of 16 bytes.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate_ciphertext_length(
            "SM4-ECB ciphertext",
            ciphertext.len(),
            SM4_BLOCK_SIZE,
            SM4_BLOCK_SIZE,
        )?;
        let padded = Zeroizing::new(self.mode.decrypt(ciphertext).map_primitive_err()?);
        let plaintext = pkcs7_unpad(&padded, SM4_BLOCK_SIZE)
            .map_primitive_err_with("SM4-ECB padding")?
            .to_vec();

        #[cfg(feature = "tracing-log")]
        tracing::trace!(
            mode = "SM4-ECB",
            ciphertext_len = ciphertext.len(),
            "message decrypted"
        );

        Ok(plaintext)
    }
}

/// SM4 in CBC mode with PKCS#7 padding and a prepended IV
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm4Cbc {
    cipher: Sm4,
}

impl Sm4Cbc {
    /// Create a cipher from a key
    pub fn new(key: &Sm4Key) -> Self {
        Self {
            cipher: key.cipher(),
        }
    }

    /// Encrypt under a fresh random IV, returning `IV ∥ C`
    pub fn encrypt<R: RngCore + CryptoRng>(&self, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>> {
        let iv = Sm4Nonce::random(rng).map_primitive_err_with("SM4-CBC IV")?;
        self.encrypt_with_iv(plaintext, &iv)
    }

    /// Encrypt under a caller-chosen IV, returning `IV ∥ C`
    ///
    /// Reusing an IV under the same key leaks equality of message prefixes.
    pub fn encrypt_with_iv(&self, plaintext: &[u8], iv: &Sm4Nonce) -> Result<Vec<u8>> {
        let mode = Cbc::new(self.cipher.clone(), iv).map_primitive_err()?;
        let padded = Zeroizing::new(pkcs7_pad(plaintext, SM4_BLOCK_SIZE).map_primitive_err()?);
        let body = mode.encrypt(&padded).map_primitive_err()?;

        let mut out = Vec::with_capacity(SM4_CBC_IV_SIZE + body.len());
        out.extend_from_slice(iv.as_ref());
        out.extend_from_slice(&body);

        #[cfg(feature = "tracing-log")]
        tracing::trace!(
            mode = "SM4-CBC",
            plaintext_len = plaintext.len(),
            "message encrypted"
        );

        Ok(out)
    }

    /// Split off the IV, decrypt and strip padding
    ///
    /// Inputs shorter than one block or not block aligned are length
    /// errors; an IV with no ciphertext blocks fails padding validation.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate_ciphertext_length(
            "SM4-CBC ciphertext",
            ciphertext.len(),
            SM4_CBC_IV_SIZE,
            SM4_BLOCK_SIZE,
        )?;
        let (iv_bytes, body) = ciphertext.split_at(SM4_CBC_IV_SIZE);
        let iv = Sm4Nonce::from_slice(iv_bytes).map_primitive_err()?;

        let mode = Cbc::new(self.cipher.clone(), &iv).map_primitive_err()?;
        let padded = Zeroizing::new(mode.decrypt(body).map_primitive_err()?);
        let plaintext = pkcs7_unpad(&padded, SM4_BLOCK_SIZE)
            .map_primitive_err_with("SM4-CBC padding")?
            .to_vec();

        #[cfg(feature = "tracing-log")]
        tracing::trace!(
            mode = "SM4-CBC",
            ciphertext_len = ciphertext.len(),
            "message decrypted"
        );

        Ok(plaintext)
    }
}

impl SymmetricCipher for Sm4Ecb {
    type Key = Sm4Key;

    fn name() -> &'static str {
        "SM4-ECB"
    }

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Sm4Ecb::new(key))
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Key> {
        Sm4Key::generate(rng)
    }

    fn encrypt_message<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        _rng: &mut R,
    ) -> Result<Vec<u8>> {
        self.encrypt(plaintext)
    }

    fn decrypt_message(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.decrypt(ciphertext)
    }
}

impl SymmetricCipher for Sm4Cbc {
    type Key = Sm4Key;

    fn name() -> &'static str {
        "SM4-CBC"
    }

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Sm4Cbc::new(key))
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Key> {
        Sm4Key::generate(rng)
    }

    fn encrypt_message<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        self.encrypt(plaintext, rng)
    }

    fn decrypt_message(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.decrypt(ciphertext)
    }
}

/// Pad and encrypt `data` with SM4-ECB under a raw 16-byte key
pub fn sm4_ecb_encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Sm4Ecb::new(&Sm4Key::from_slice(key)?).encrypt(data)
}

/// Decrypt an SM4-ECB ciphertext under a raw 16-byte key
pub fn sm4_ecb_decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Sm4Ecb::new(&Sm4Key::from_slice(key)?).decrypt(data)
}

/// Pad and encrypt `data` with SM4-CBC under a raw 16-byte key and a random IV
pub fn sm4_cbc_encrypt<R: RngCore + CryptoRng>(
    data: &[u8],
    key: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    Sm4Cbc::new(&Sm4Key::from_slice(key)?).encrypt(data, rng)
}

/// Decrypt an `IV ∥ C` SM4-CBC ciphertext under a raw 16-byte key
pub fn sm4_cbc_decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Sm4Cbc::new(&Sm4Key::from_slice(key)?).decrypt(data)
}
