use super::*;
use rand::rngs::OsRng;

#[test]
fn test_digest_hex_round_trip() {
    let hex_str = "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0";
    let digest = Digest::<32>::from_hex(hex_str).unwrap();
    assert_eq!(digest.to_hex(), hex_str);
    assert_eq!(format!("{}", digest), hex_str);
    assert_eq!(digest.len(), 32);
    assert!(!digest.is_empty());

    assert!(Digest::<32>::from_hex("zz").is_err());
    assert!(Digest::<32>::from_hex("abcd").is_err());
}

#[test]
fn test_digest_equality_and_sizes() {
    let a = Digest::new([7u8; 32]);
    let b = Digest::from_slice(&[7u8; 32]).unwrap();
    assert_eq!(a, b);
    assert!(ConstantTimeEq::ct_eq(&a, &b));
    assert!(!ConstantTimeEq::ct_eq(&a, &Digest::<32>::zeroed()));
    assert_eq!(<Digest<32> as FixedSize>::size(), 32);
    assert!(Digest::<32>::from_slice(&[0u8; 31]).is_err());
}

#[test]
fn test_nonce_generation() {
    let a = <Nonce<16> as RandomGeneration>::random(&mut OsRng).unwrap();
    let b = <Nonce<16> as RandomGeneration>::random(&mut OsRng).unwrap();
    assert!(!ConstantTimeEq::ct_eq(&a, &b));
    assert_eq!(<Nonce<16> as FixedSize>::size(), 16);
    assert_eq!(Nonce::<16>::zeroed().as_ref(), &[0u8; 16]);
    assert!(Nonce::<16>::from_slice(&[0u8; 12]).is_err());
}
