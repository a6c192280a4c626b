//! End-to-end tests through the facade crate

use gmcrypt::prelude::*;
use gmcrypt_tests::{seeded_rng, vectors};
use rand::rngs::OsRng;

#[test]
fn test_sm3_published_vectors() {
    assert_eq!(hex::encode(sm3(b"abc")), vectors::SM3_ABC);
    assert_eq!(hex::encode(sm3(b"")), vectors::SM3_EMPTY);
}

#[test]
fn test_sm3_incremental_matches_one_shot() {
    let mut hasher = Sm3::new();
    hasher.update(b"hello ").unwrap();

    // sampling a prefix leaves the running state untouched
    assert_eq!(hasher.sum().as_ref(), sm3(b"hello "));

    hasher.update(b"world").unwrap();
    let digest = hasher.finalize().unwrap();
    assert_eq!(digest.as_ref(), sm3(b"hello world"));
}

#[test]
fn test_sm4_standard_block() {
    let key_bytes = hex::decode(vectors::SM4_KEY).unwrap();
    let key = gmcrypt::algorithms::SecretBytes::<16>::from_slice(&key_bytes).unwrap();
    let cipher = Sm4::new(&key);

    let mut block = key_bytes.clone();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), vectors::SM4_CIPHERTEXT);
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, key_bytes);
}

#[test]
fn test_sm4_ecb_hello_world() {
    let key = b"1234567890abcdef";
    let ciphertext = sm4_ecb_encrypt(b"hello world", key).unwrap();
    assert_eq!(sm4_ecb_decrypt(&ciphertext, key).unwrap(), b"hello world");
}

#[test]
fn test_sm4_cbc_through_trait() {
    let mut rng = seeded_rng(7);
    let key = Sm4Cbc::generate_key(&mut rng).unwrap();
    let cipher = <Sm4Cbc as SymmetricCipher>::new(&key).unwrap();

    let ct = cipher.encrypt_message(b"sixteen byte msg", &mut rng).unwrap();
    assert_eq!(ct.len(), 16 + 32);
    assert_eq!(cipher.decrypt_message(&ct).unwrap(), b"sixteen byte msg");

    let raw = sm4_cbc_decrypt(&ct, key.as_bytes()).unwrap();
    assert_eq!(raw, b"sixteen byte msg");
}

#[test]
fn test_sm4_invalid_key_length() {
    let err = sm4_ecb_encrypt(b"data", b"short").unwrap_err();
    assert!(matches!(err, Error::InvalidLength { .. }));
    let err = sm4_cbc_encrypt(b"data", &[0u8; 32], &mut OsRng).unwrap_err();
    assert!(matches!(err, Error::InvalidLength { .. }));
}

#[test]
fn test_sm2_encrypt_decrypt() {
    let (pk, sk) = sm2_generate_keypair(&mut OsRng).unwrap();
    let plaintext = b"Hello, SM2!";

    let ciphertext = sm2_encrypt(&pk, plaintext, &mut OsRng).unwrap();
    assert_eq!(ciphertext.len(), 97 + plaintext.len());
    assert_eq!(sm2_decrypt(&sk, &ciphertext).unwrap(), plaintext);
}

#[test]
fn test_sm2_with_long_data() {
    let (pk, sk) = Sm2::keypair(&mut OsRng).unwrap();
    let plaintext = b"This is a longer message for SM2 encryption testing. \
                      SM2 is an elliptic curve public key cryptography algorithm.";

    let ciphertext = Sm2::encrypt(&pk, plaintext, &mut OsRng).unwrap();
    assert_eq!(Sm2::decrypt(&sk, &ciphertext).unwrap(), plaintext);
}

#[test]
fn test_sm2_invalid_input() {
    let (pk, sk) = Sm2::keypair(&mut OsRng).unwrap();

    assert!(matches!(
        sm2_decrypt(&sk, b"short"),
        Err(Error::InvalidCiphertext { .. })
    ));

    let mut ct = sm2_encrypt(&pk, b"payload", &mut OsRng).unwrap();
    let last = ct.len() - 1;
    ct[last] ^= 0x80;
    assert!(matches!(
        sm2_decrypt(&sk, &ct),
        Err(Error::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_sm2_keys_round_trip_through_bytes() {
    let (pk, sk) = Sm2::keypair(&mut OsRng).unwrap();

    let pk2 = Sm2PublicKey::from_bytes(&pk.to_bytes()).unwrap();
    let sk2 = Sm2SecretKey::from_bytes(sk.as_ref()).unwrap();
    assert_eq!(pk2, pk);

    let ct = Sm2::encrypt(&pk2, b"serialized keys", &mut OsRng).unwrap();
    assert_eq!(Sm2::decrypt(&sk2, &ct).unwrap(), b"serialized keys");
}

#[test]
fn test_facade_reexports_support_crates() {
    use gmcrypt::subtle::ConstantTimeEq;
    use gmcrypt::zeroize::Zeroize;

    let mut rng = gmcrypt::rand::rngs::OsRng;
    let mut key = Sm4Key::generate(&mut rng).unwrap().as_bytes().to_vec();
    assert!(bool::from(key.as_slice().ct_eq(key.as_slice())));

    key.zeroize();
    assert!(key.is_empty());
}
