//! PKCS#7 padding
//!
//! Padding always adds between 1 and `block_size` bytes, each equal to the
//! number of bytes added, so an aligned message gains a full block.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use subtle::{ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

use crate::error::{validate, Error, Result};

/// Appends PKCS#7 padding to `data`
///
/// `block_size` must be in `1..=255`.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block_size",
        "must be between 1 and 255",
    )?;

    let pad_len = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    Ok(out)
}

/// Strips PKCS#7 padding, returning the unpadded prefix of `data`
///
/// The input must be non-empty and block aligned. The pad byte must be in
/// `1..=block_size` and every padding byte must equal it. The last block is
/// inspected without data-dependent branches.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block_size",
        "must be between 1 and 255",
    )?;
    validate::min_length("PKCS#7 padded data", data.len(), block_size)?;
    validate::block_aligned("PKCS#7 padded data", data.len(), block_size)?;

    let last_block = &data[data.len() - block_size..];
    let pad = last_block[block_size - 1];

    let mut valid = pad.ct_gt(&0u8) & !pad.ct_gt(&(block_size as u8));
    for (i, &b) in last_block.iter().rev().enumerate() {
        let in_pad = (i as u8).ct_lt(&pad);
        valid &= !in_pad | b.ct_eq(&pad);
    }

    if !bool::from(valid) {
        return Err(Error::Padding { context: "PKCS#7" });
    }
    Ok(&data[..data.len() - pad as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_lengths() {
        assert_eq!(pkcs7_pad(b"", 16).unwrap(), vec![16u8; 16]);

        let padded = pkcs7_pad(b"Hello, SM4!", 16).unwrap();
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[11..], &[5u8; 5]);

        let padded = pkcs7_pad(&[0xAA; 16], 16).unwrap();
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);
    }

    #[test]
    fn test_unpad_round_trip() {
        for len in 0..40 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pkcs7_pad(&data, 16).unwrap();
            assert_eq!(pkcs7_unpad(&padded, 16).unwrap(), &data[..]);
        }
    }

    #[test]
    fn test_unpad_rejects_bad_pad_byte() {
        let mut block = [3u8; 16];
        block[15] = 0;
        assert_eq!(
            pkcs7_unpad(&block, 16).unwrap_err(),
            Error::Padding { context: "PKCS#7" }
        );

        block[15] = 17;
        assert!(pkcs7_unpad(&block, 16).is_err());
    }

    #[test]
    fn test_unpad_rejects_inconsistent_padding() {
        let mut block = [0u8; 16];
        block[13] = 3;
        block[14] = 2;
        block[15] = 3;
        assert!(pkcs7_unpad(&block, 16).is_err());
    }

    #[test]
    fn test_unpad_full_padding_block() {
        let block = [16u8; 16];
        assert_eq!(pkcs7_unpad(&block, 16).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_unpad_rejects_misaligned_or_empty() {
        assert!(matches!(
            pkcs7_unpad(&[], 16),
            Err(Error::Length { .. })
        ));
        assert!(matches!(
            pkcs7_unpad(&[1u8; 17], 16),
            Err(Error::Length { .. })
        ));
    }

    #[test]
    fn test_invalid_block_size() {
        assert!(pkcs7_pad(b"x", 0).is_err());
        assert!(pkcs7_pad(b"x", 256).is_err());
    }
}
