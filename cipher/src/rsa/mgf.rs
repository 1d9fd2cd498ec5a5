//! MGF1: Mask Generation Function based on a hash function (RFC 8017 B.2.1)

use crate::{CipherError, Sha2Hash};
use sha2::Digest;

fn check_mask_len<H: Sha2Hash>(mask_len: usize) -> Result<(), CipherError> {
    // 计数器为32位
    if (mask_len as u128) > ((H::HLEN as u128) << 32) {
        Err(CipherError::MaskTooLong)
    } else {
        Ok(())
    }
}

/// `out ^= MGF1(seed, out.len())`
pub fn mgf1_xor<H: Sha2Hash>(out: &mut [u8], seed: &[u8]) -> Result<(), CipherError> {
    check_mask_len::<H>(out.len())?;

    let mut hasher = <H as Digest>::new();
    for (counter, block) in out.chunks_mut(H::HLEN).enumerate() {
        Digest::update(&mut hasher, seed);
        Digest::update(&mut hasher, (counter as u32).to_be_bytes());
        let digest = Digest::finalize_reset(&mut hasher);

        block
            .iter_mut()
            .zip(digest.iter())
            .for_each(|(a, &b)| *a ^= b);
    }

    Ok(())
}

/// `T = Hash(seed || C(0)) || Hash(seed || C(1)) || ...`, truncated to `mask_len` bytes
pub fn mgf1<H: Sha2Hash>(seed: &[u8], mask_len: usize) -> Result<Vec<u8>, CipherError> {
    check_mask_len::<H>(mask_len)?;

    let mut mask = vec![0u8; mask_len];
    mgf1_xor::<H>(mask.as_mut_slice(), seed)?;
    Ok(mask)
}
