use super::*;
use crate::block::Sm4;
use crate::error::Error;

fn cipher() -> Sm4 {
    let key = hex::decode("0123456789abcdeffedcba9876543210").unwrap();
    Sm4::from_slice(&key).unwrap()
}

#[test]
fn test_ecb_blocks_independent() {
    let ecb = Ecb::new(cipher());
    let block = hex::decode("0123456789abcdeffedcba9876543210").unwrap();
    let plaintext = [block.clone(), block].concat();

    let ciphertext = ecb.encrypt(&plaintext).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "681edf34d206965e86b3e94f536e4246681edf34d206965e86b3e94f536e4246"
    );
    assert_eq!(ecb.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_ecb_empty_input() {
    let ecb = Ecb::new(cipher());
    assert!(ecb.encrypt(&[]).unwrap().is_empty());
    assert!(ecb.decrypt(&[]).unwrap().is_empty());
}

#[test]
fn test_ecb_rejects_unaligned() {
    let ecb = Ecb::new(cipher());
    let err = ecb.encrypt(&[0u8; 20]).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "ECB plaintext",
            expected: 32,
            actual: 20
        }
    );
    assert!(ecb.decrypt(&[0u8; 15]).is_err());
}
