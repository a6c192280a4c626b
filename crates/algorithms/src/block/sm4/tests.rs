use super::*;
use rand::rngs::OsRng;

const STANDARD_KEY: &str = "0123456789abcdeffedcba9876543210";

fn standard_cipher() -> Sm4 {
    let key = hex::decode(STANDARD_KEY).unwrap();
    Sm4::from_slice(&key).unwrap()
}

#[test]
fn test_sm4_standard_vector() {
    let cipher = standard_cipher();
    let mut block = hex::decode(STANDARD_KEY).unwrap();

    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "681edf34d206965e86b3e94f536e4246");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), STANDARD_KEY);
}

#[test]
fn test_sm4_million_encryptions() {
    let cipher = standard_cipher();
    let mut block = hex::decode(STANDARD_KEY).unwrap();
    for _ in 0..1_000_000 {
        cipher.encrypt_block(&mut block).unwrap();
    }
    assert_eq!(hex::encode(&block), "595298c7c6fd271f0402f804c33d3f66");
}

#[test]
fn test_sm4_new_matches_from_slice() {
    let raw = hex::decode(STANDARD_KEY).unwrap();
    let key = SecretBytes::<16>::from_slice(&raw).unwrap();
    let a = Sm4::new(&key);
    let b = Sm4::from_slice(&raw).unwrap();

    let mut x = [0x11u8; 16];
    let mut y = [0x11u8; 16];
    a.encrypt_block(&mut x).unwrap();
    b.encrypt_block(&mut y).unwrap();
    assert_eq!(x, y);
}

#[test]
fn test_sm4_round_keys_reversed() {
    let cipher = standard_cipher();
    for i in 0..SM4_ROUNDS {
        assert_eq!(cipher.enc_keys[i], cipher.dec_keys[SM4_ROUNDS - 1 - i]);
    }
    // First round key of the standard example
    assert_eq!(cipher.enc_keys[0], 0xf12186f9);
    assert_eq!(cipher.enc_keys[31], 0x9124a012);
}

#[test]
fn test_sm4_invalid_key_length() {
    for len in [0usize, 5, 15, 17, 32] {
        let err = Sm4::from_slice(&vec![0u8; len]).unwrap_err();
        assert_eq!(
            err,
            crate::error::Error::Length {
                context: "SM4 key",
                expected: 16,
                actual: len
            }
        );
    }
}

#[test]
fn test_sm4_debug_hides_round_keys() {
    let cipher = standard_cipher();
    let shown = format!("{:?}", cipher);
    assert_eq!(shown, "Sm4([REDACTED])");
    assert!(!shown.contains("f12186f9"));

    let err = Sm4::from_slice(&[0u8; 8]).unwrap_err();
    assert!(matches!(err, crate::error::Error::Length { actual: 8, .. }));
}

#[test]
fn test_sm4_invalid_block_length() {
    let cipher = standard_cipher();
    let mut short = [0u8; 15];
    assert!(cipher.encrypt_block(&mut short).is_err());
    let mut long = [0u8; 17];
    assert!(cipher.decrypt_block(&mut long).is_err());
}

#[test]
fn test_sm4_random_key_round_trip() {
    let key = Sm4::generate_key(&mut OsRng).unwrap();
    let cipher = Sm4::new(&key);
    let original = *b"sixteen byte msg";
    let mut block = original;
    cipher.encrypt_block(&mut block).unwrap();
    assert_ne!(block, original);
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, original);
}

#[test]
fn test_sm4_tables_match_direct_transform() {
    fn tau(a: u32) -> u32 {
        let b = a.to_be_bytes();
        u32::from_be_bytes([
            SBOX[b[0] as usize],
            SBOX[b[1] as usize],
            SBOX[b[2] as usize],
            SBOX[b[3] as usize],
        ])
    }
    for a in [0u32, 1, 0xdeadbeef, 0x01234567, 0xffffffff, 0x80000000] {
        let s = tau(a);
        let l = s ^ s.rotate_left(2) ^ s.rotate_left(10) ^ s.rotate_left(18) ^ s.rotate_left(24);
        let l2 = s ^ s.rotate_left(13) ^ s.rotate_left(23);
        assert_eq!(t1(a), l);
        assert_eq!(t2(a), l2);
    }
}
