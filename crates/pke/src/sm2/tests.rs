use super::*;
use gmcrypt_params::traditional::sm2::SM2_N;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const SECRET_HEX: &str = "3945208f7b2144b13f36e38ac6d39f95889393692860b51a42fb81ef4df7c5b8";
const PUBLIC_HEX: &str = "0409f9df311e5421a150dd7d161e4bc5c672179fad1833fc076bb08ff356f35020\
                          ccea490ce26775a52dc6ea718cc1aa600aed05fbf35e084a6632f6072da9ad13";

/// Deterministic source that repeats one byte
struct FixedRng(u8);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_ne_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_ne_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}

/// Source whose every draw fails
struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {}

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        let code = core::num::NonZeroU32::new(rand::Error::CUSTOM_START).unwrap();
        Err(rand::Error::from(code))
    }
}

impl CryptoRng for FailingRng {}

fn fixed_secret_key() -> Sm2SecretKey {
    Sm2SecretKey::from_bytes(&hex::decode(SECRET_HEX).unwrap()).unwrap()
}

#[test]
fn test_public_key_derivation() {
    let sk = fixed_secret_key();
    let pk = sk.public_key();
    assert_eq!(hex::encode(pk.to_bytes()), PUBLIC_HEX);

    let parsed = Sm2PublicKey::from_bytes(&hex::decode(PUBLIC_HEX).unwrap()).unwrap();
    assert_eq!(parsed, pk);
    assert_eq!(parsed.as_ref(), &pk.to_bytes()[..]);
}

#[test]
fn test_fixed_randomness_known_answer() {
    let sk = fixed_secret_key();
    let pk = sk.public_key();

    let ct = sm2_encrypt(&pk, b"encryption standard", &mut FixedRng(0x42)).unwrap();
    assert_eq!(
        hex::encode(&ct),
        "04b2784186cf52c7585ea1ce7b3dccb2d68515532a8502d3b0f641134bbebefc0a\
         7908e025fe15d3543cfb3e7857898414459a2ce617375c9ffd4418bd83ab756a\
         7e17a85f75e425dba78ab39f3579ca86e7a5662c9b2dfe0df8a4334ecbe34c09\
         cc769990192fe72c8735aa94afd02473d73444"
    );
    assert_eq!(sm2_decrypt(&sk, &ct).unwrap(), b"encryption standard");

    // same ephemeral scalar, so C1 is unchanged; C3 covers only x₂ ∥ y₂
    let ct = sm2_encrypt(&pk, b"", &mut FixedRng(0x42)).unwrap();
    assert_eq!(
        hex::encode(&ct),
        "04b2784186cf52c7585ea1ce7b3dccb2d68515532a8502d3b0f641134bbebefc0a\
         7908e025fe15d3543cfb3e7857898414459a2ce617375c9ffd4418bd83ab756a\
         4296ac912fba61581d04c2aa2f7d74cda8491c3932792e483fbc501d9139107b"
    );
    assert!(sm2_decrypt(&sk, &ct).unwrap().is_empty());
}

#[test]
fn test_round_trip_various_lengths() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5332);
    let (pk, sk) = Sm2::keypair(&mut rng).unwrap();

    for len in [0usize, 1, 11, 31, 32, 33, 64, 100, 1000] {
        let msg: Vec<u8> = (0..len).map(|i| (i * 13 + 5) as u8).collect();
        let ct = Sm2::encrypt(&pk, &msg, &mut rng).unwrap();
        assert_eq!(ct.len(), SM2_CIPHERTEXT_MIN_SIZE + len);
        assert_eq!(ct[0], 0x04);
        assert_eq!(Sm2::decrypt(&sk, &ct).unwrap(), msg);
    }
}

#[test]
fn test_encryption_is_randomized() {
    let (pk, sk) = sm2_generate_keypair(&mut OsRng).unwrap();
    let a = sm2_encrypt(&pk, b"Hello, SM2!", &mut OsRng).unwrap();
    let b = sm2_encrypt(&pk, b"Hello, SM2!", &mut OsRng).unwrap();
    assert_ne!(a, b);
    assert_ne!(a[..SM2_C1_SIZE], b[..SM2_C1_SIZE]);
    assert_eq!(sm2_decrypt(&sk, &a).unwrap(), b"Hello, SM2!");
    assert_eq!(sm2_decrypt(&sk, &b).unwrap(), b"Hello, SM2!");
}

#[test]
fn test_flipped_bit_fails_authentication() {
    let (pk, sk) = sm2_generate_keypair(&mut OsRng).unwrap();
    let ct = sm2_encrypt(&pk, b"integrity matters", &mut OsRng).unwrap();

    // any bit of C2 or C3
    for idx in [SM2_C1_SIZE, SM2_C1_SIZE + 31, SM2_CIPHERTEXT_MIN_SIZE, ct.len() - 1] {
        let mut tampered = ct.clone();
        tampered[idx] ^= 0x01;
        assert!(matches!(
            sm2_decrypt(&sk, &tampered),
            Err(ApiError::AuthenticationFailed { .. })
        ));
    }
}

#[test]
fn test_tampered_c1_is_rejected() {
    let (pk, sk) = sm2_generate_keypair(&mut OsRng).unwrap();
    let ct = sm2_encrypt(&pk, b"point check", &mut OsRng).unwrap();

    let mut off_curve = ct.clone();
    off_curve[SM2_C1_SIZE - 1] ^= 0x01;
    assert!(matches!(
        sm2_decrypt(&sk, &off_curve),
        Err(ApiError::InvalidPoint { .. })
    ));

    let mut compressed_tag = ct.clone();
    compressed_tag[0] = 0x02;
    assert!(matches!(
        sm2_decrypt(&sk, &compressed_tag),
        Err(ApiError::InvalidPoint { .. })
    ));

    let mut identity = ct;
    identity[..SM2_C1_SIZE].fill(0);
    assert!(matches!(
        sm2_decrypt(&sk, &identity),
        Err(ApiError::InvalidPoint { .. })
    ));
}

#[test]
fn test_wrong_key_fails() {
    let (pk, _) = sm2_generate_keypair(&mut OsRng).unwrap();
    let (_, other_sk) = sm2_generate_keypair(&mut OsRng).unwrap();
    let ct = sm2_encrypt(&pk, b"for someone else", &mut OsRng).unwrap();
    assert!(matches!(
        sm2_decrypt(&other_sk, &ct),
        Err(ApiError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_truncated_ciphertext() {
    let sk = fixed_secret_key();
    for len in [0usize, 1, SM2_C1_SIZE, SM2_CIPHERTEXT_MIN_SIZE - 1] {
        let err = sm2_decrypt(&sk, &vec![0x04; len]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidCiphertext { .. }));
    }

    let err = decrypt_with::<Sm2P256>(&sk.0, b"short").unwrap_err();
    assert!(matches!(
        err,
        Error::TruncatedCiphertext {
            minimum: 97,
            actual: 5
        }
    ));
}

#[test]
fn test_rng_failure_propagates() {
    assert!(matches!(
        Sm2::keypair(&mut FailingRng),
        Err(ApiError::RandomGenerationError { .. })
    ));

    let pk = fixed_secret_key().public_key();
    assert!(matches!(
        sm2_encrypt(&pk, b"data", &mut FailingRng),
        Err(ApiError::RandomGenerationError { .. })
    ));
}

#[test]
fn test_zero_keystream_exhausts_retries() {
    // d = 121 with the scalar drawn from 0x42 bytes gives a shared point
    // whose first keystream byte is zero; the fixed source repeats that k.
    let mut d = [0u8; 32];
    d[31] = 121;
    let pk = Sm2SecretKey::from_bytes(&d).unwrap().public_key();

    let err = encrypt_to::<Sm2P256, _>(&pk.point, &[0xAB], &mut FixedRng(0x42)).unwrap_err();
    assert!(matches!(
        err,
        Error::KeystreamExhausted {
            attempts: SM2_MAX_KEYSTREAM_RETRIES
        }
    ));
    assert!(matches!(
        sm2_encrypt(&pk, &[0xAB], &mut FixedRng(0x42)),
        Err(ApiError::ResourceExhausted { .. })
    ));

    // the empty message never needs a retry
    assert!(sm2_encrypt(&pk, b"", &mut FixedRng(0x42)).is_ok());
}

#[test]
fn test_public_key_validation() {
    let valid = hex::decode(PUBLIC_HEX).unwrap();

    assert!(matches!(
        Sm2PublicKey::from_bytes(&[0u8; 65]),
        Err(Error::InvalidPublicKey(_))
    ));

    let mut off_curve = valid.clone();
    off_curve[64] ^= 0x01;
    assert!(Sm2PublicKey::from_bytes(&off_curve).is_err());

    assert!(Sm2PublicKey::from_bytes(&valid[..64]).is_err());
    assert!(Sm2PublicKey::from_bytes(&valid[1..]).is_err());

    let err: ApiError = Sm2PublicKey::from_bytes(&[]).unwrap_err().into();
    assert!(matches!(err, ApiError::InvalidKey { .. }));
}

#[test]
fn test_secret_key_validation() {
    assert!(Sm2SecretKey::from_bytes(&[0u8; 32]).is_err());
    assert!(Sm2SecretKey::from_bytes(&SM2_N).is_err());
    assert!(Sm2SecretKey::from_bytes(&[0xFF; 32]).is_err());
    assert!(Sm2SecretKey::from_bytes(&[1u8; 31]).is_err());
    assert!(Sm2SecretKey::from_bytes(&[1u8; 33]).is_err());

    let mut n_minus_1 = SM2_N;
    n_minus_1[31] -= 1;
    let sk = Sm2SecretKey::from_bytes(&n_minus_1).unwrap();
    assert_eq!(*sk.to_bytes(), n_minus_1);
    assert_eq!(sk.as_ref(), &n_minus_1[..]);
}

#[test]
fn test_keypair_matches_secret_key() {
    let (pk, sk) = Sm2::keypair(&mut OsRng).unwrap();
    assert_eq!(sk.public_key(), pk);

    let restored = Sm2SecretKey::from_bytes(sk.as_ref()).unwrap();
    let ct = Sm2::encrypt(&pk, b"restored", &mut OsRng).unwrap();
    assert_eq!(Sm2::decrypt(&restored, &ct).unwrap(), b"restored");
}

#[test]
fn test_secret_key_debug_is_redacted() {
    let rendered = format!("{:?}", fixed_secret_key());
    assert_eq!(rendered, "Sm2SecretKey([REDACTED])");
}

#[test]
fn test_name() {
    assert_eq!(Sm2::name(), "SM2");
}

#[test]
fn test_error_messages() {
    let err = Error::TruncatedCiphertext {
        minimum: 97,
        actual: 5,
    };
    assert_eq!(
        err.to_string(),
        "SM2 ciphertext too short: 5 bytes, need at least 97"
    );
    assert_eq!(
        Error::AuthenticationFailed.to_string(),
        "SM2 integrity check failed"
    );
    assert_eq!(
        ApiError::from(Error::AuthenticationFailed),
        ApiError::AuthenticationFailed {
            context: "SM2 C3 mismatch"
        }
    );
}
