//! Property-based tests for SM3, SM4 and SM2

use gmcrypt::algorithms::block::{Cbc, Ecb};
use gmcrypt::algorithms::types::{Nonce, SecretBytes};
use gmcrypt::prelude::*;
use gmcrypt_tests::seeded_rng;
use proptest::prelude::*;

/// Generate data that's a multiple of 16 bytes (SM4 block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 16..=256).prop_map(|mut v| {
        while v.len() % 16 != 0 {
            v.push(0);
        }
        v
    })
}

proptest! {
    #[test]
    fn sm3_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let a = sm3(&data);
        let b = sm3(&data);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.len(), 32);
    }

    #[test]
    fn sm3_split_point_does_not_matter(
        data in prop::collection::vec(any::<u8>(), 0..300),
        split in any::<prop::sample::Index>()
    ) {
        let at = split.index(data.len() + 1);
        let mut hasher = Sm3::new();
        hasher.update(&data[..at]).unwrap();
        hasher.update(&data[at..]).unwrap();
        let digest = hasher.finalize().unwrap();
        let expected = sm3(&data);
        prop_assert_eq!(digest.as_ref(), &expected[..]);
    }

    #[test]
    fn sm4_block_roundtrip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let cipher = Sm4::new(&SecretBytes::<16>::new(key));
        let mut buf = block;
        cipher.encrypt_block(&mut buf).unwrap();
        cipher.decrypt_block(&mut buf).unwrap();
        prop_assert_eq!(buf, block);
    }

    #[test]
    fn sm4_raw_modes_roundtrip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let secret_key = SecretBytes::<16>::new(key);

        let ecb = Ecb::new(Sm4::new(&secret_key));
        let ct = ecb.encrypt(&data).unwrap();
        prop_assert_eq!(ecb.decrypt(&ct).unwrap(), data.clone());

        let nonce = Nonce::<16>::new(iv);
        let cbc = Cbc::new(Sm4::new(&secret_key), &nonce).unwrap();
        let ct = cbc.encrypt(&data).unwrap();
        prop_assert_eq!(cbc.decrypt(&ct).unwrap(), data);
    }

    #[test]
    fn sm4_padded_messages_roundtrip(
        key in any::<[u8; 16]>(),
        seed in any::<u64>(),
        data in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let ct = sm4_ecb_encrypt(&data, &key).unwrap();
        prop_assert_eq!(ct.len() % 16, 0);
        prop_assert_eq!(sm4_ecb_decrypt(&ct, &key).unwrap(), data.clone());

        let mut rng = seeded_rng(seed);
        let ct = sm4_cbc_encrypt(&data, &key, &mut rng).unwrap();
        prop_assert_eq!(ct.len(), 16 + (data.len() / 16 + 1) * 16);
        prop_assert_eq!(sm4_cbc_decrypt(&ct, &key).unwrap(), data);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sm2_roundtrip(seed in any::<u64>(), data in prop::collection::vec(any::<u8>(), 0..128)) {
        let mut rng = seeded_rng(seed);
        let (pk, sk) = Sm2::keypair(&mut rng).unwrap();
        let ct = Sm2::encrypt(&pk, &data, &mut rng).unwrap();
        prop_assert_eq!(ct.len(), 97 + data.len());
        prop_assert_eq!(Sm2::decrypt(&sk, &ct).unwrap(), data);
    }
}
