//! = RFC 8017
//!
//! == PKCS #1: RSA Cryptography Specification Version 2.2
//!
//! === PSS(Probabilistic Signature Scheme)
//!
//! ```txt
//!                               +-----------+
//!                               |     M     |
//!                               +-----------+
//!                                     |
//!                                     V
//!                                   Hash
//!                                     |
//!                                     V
//!                       +--------+----------+----------+
//!                  M' = |Padding1|  mHash   |   salt   |
//!                       +--------+----------+----------+
//!                                      |
//!            +--------+----------+     V
//!      DB =  |Padding2|   salt   |   Hash
//!            +--------+----------+     |
//!                      |               |
//!                      V               |
//!                     xor <--- MGF <---|
//!                      |               |
//!                      |               |
//!                      V               V
//!            +-------------------+----------+--+
//!      EM =  |    maskedDB       |     H    |bc|
//!            +-------------------+----------+--+
//! ```
//!
//! 盐的长度固定为`hLen`, `emBits = modBits - 1`.

use crate::rsa::mgf::mgf1_xor;
use crate::rsa::{PrivateKey, PublicKey};
use crate::{wipe, CipherError, Rand, Sha2Hash, Sign, Verify};
use log::trace;
use sha2::Digest;
use std::marker::PhantomData;
use subtle::ConstantTimeEq;

const TRAILER: u8 = 0xbc;

/// RSASSA-PSS verification with the hash function `H`
pub struct PSSVerify<H: Sha2Hash> {
    key: PublicKey,
    hash: PhantomData<H>,
}

/// RSASSA-PSS signature generation with the hash function `H`
pub struct PSSSign<H: Sha2Hash> {
    key: PrivateKey,
    hash: PhantomData<H>,
}

// H = Hash(0x00 * 8 || Hash(msg) || salt)
fn pss_hash<H: Sha2Hash>(msg: &[u8], salt: &[u8]) -> Result<Vec<u8>, CipherError> {
    if msg.len() as u64 > H::ID.max_input_len() {
        return Err(CipherError::MsgTooLong);
    }

    let m_hash = <H as Digest>::digest(msg);
    let mut hasher = <H as Digest>::new();
    Digest::update(&mut hasher, [0u8; 8]);
    Digest::update(&mut hasher, m_hash);
    Digest::update(&mut hasher, salt);
    Ok(Digest::finalize(hasher).to_vec())
}

/// EMSA-PSS-ENCODE, `em = maskedDB || H || 0xbc`, `db = ps || 0x01 || salt`
pub(crate) fn emsa_pss_encode<H: Sha2Hash>(
    msg: &[u8],
    salt: &[u8],
    em_len: usize,
) -> Result<Vec<u8>, CipherError> {
    let (hlen, slen) = (H::HLEN, salt.len());
    let h = pss_hash::<H>(msg, salt)?;

    if em_len < hlen + slen + 2 {
        return Err(CipherError::HashTooLong);
    }

    let mut em = vec![0u8; em_len];
    let (db, rest) = em.split_at_mut(em_len - hlen - 1);
    let ps_len = db.len() - slen - 1;
    db[ps_len] = 0x01;
    db[(ps_len + 1)..].copy_from_slice(salt);
    rest[..hlen].copy_from_slice(h.as_slice());
    rest[hlen] = TRAILER;

    mgf1_xor::<H>(db, h.as_slice())?;
    // 8 * emLen - emBits = 1
    db[0] &= 0x7f;

    trace!("pss: emLen={}, hLen={}, psLen={}", em_len, hlen, ps_len);
    Ok(em)
}

/// EMSA-PSS-VERIFY with `sLen = hLen`
pub(crate) fn emsa_pss_verify<H: Sha2Hash>(msg: &[u8], em: &[u8]) -> Result<(), CipherError> {
    let (em_len, hlen) = (em.len(), H::HLEN);
    if msg.len() as u64 > H::ID.max_input_len() {
        return Err(CipherError::MsgTooLong);
    }

    if em_len < (hlen << 1) + 2 {
        return Err(CipherError::HashTooLong);
    }

    if em[em_len - 1] != TRAILER {
        return Err(CipherError::InvalidLast);
    }

    if em[0] & 0x80 != 0 {
        return Err(CipherError::InvalidInit);
    }

    let (masked_db, h) = em[..(em_len - 1)].split_at(em_len - hlen - 1);
    let mut db = masked_db.to_vec();
    mgf1_xor::<H>(db.as_mut_slice(), h)?;
    // 只清最高位: 其余7位属于PS或0x01, 当`k = 2hLen + 2`时DB[0]就是0x01
    db[0] &= 0x7f;

    let ps_len = db.len() - hlen - 1;
    if db[..ps_len].iter().any(|&x| x != 0) || db[ps_len] != 0x01 {
        return Err(CipherError::InvalidPd2);
    }

    let h_prime = pss_hash::<H>(msg, &db[(ps_len + 1)..])?;
    if bool::from(h_prime.as_slice().ct_eq(h)) {
        Ok(())
    } else {
        Err(CipherError::HashMismatch)
    }
}

impl<H: Sha2Hash> PSSVerify<H> {
    pub fn new(key: PublicKey) -> Result<Self, CipherError> {
        key.is_valid()?;

        Ok(Self {
            key,
            hash: PhantomData,
        })
    }

    pub fn key_len(&self) -> usize {
        self.key.key_len()
    }

    pub const fn hash_len(&self) -> usize {
        H::HLEN
    }

    pub const fn salt_len(&self) -> usize {
        H::HLEN
    }

    pub fn verify_block(&self, msg: &[u8], sign: &[u8]) -> Result<(), CipherError> {
        let em = self.key.rsaep_octets(sign)?;
        emsa_pss_verify::<H>(msg, em.as_slice())
    }
}

impl<H: Sha2Hash> PSSSign<H> {
    pub fn new(key: PrivateKey) -> Result<Self, CipherError> {
        key.is_valid()?;

        Ok(Self {
            key,
            hash: PhantomData,
        })
    }

    pub fn key_len(&self) -> usize {
        self.key.key_len()
    }

    pub const fn hash_len(&self) -> usize {
        H::HLEN
    }

    /// the matching verifier, `None` if the private key has no public exponent
    pub fn pss_verify(&self) -> Option<PSSVerify<H>> {
        self.key.public_key().map(|key| PSSVerify {
            key,
            hash: PhantomData,
        })
    }

    /// 签名长度为`key_len()`
    pub fn sign_block<R: Rand>(&self, msg: &[u8], rng: &mut R) -> Result<Vec<u8>, CipherError> {
        let mut salt = vec![0u8; self.hash_len()];
        rng.rand(salt.as_mut_slice());
        let s = self.sign_with_salt(msg, salt.as_slice());
        wipe(salt.as_mut_slice());
        s
    }

    pub(crate) fn sign_with_salt(&self, msg: &[u8], salt: &[u8]) -> Result<Vec<u8>, CipherError> {
        if salt.len() != self.hash_len() {
            return Err(CipherError::InvalidBlockSize {
                target: self.hash_len(),
                real: salt.len(),
            });
        }

        let mut em = emsa_pss_encode::<H>(msg, salt, self.key_len())?;
        let s = self.key.rsadp_octets(em.as_slice());
        wipe(em.as_mut_slice());
        s
    }
}

impl<H: Sha2Hash> Sign for PSSSign<H> {
    fn sign<R: Rand>(
        &self,
        msg: &[u8],
        sign: &mut Vec<u8>,
        rng: &mut R,
    ) -> Result<(), CipherError> {
        let s = self.sign_block(msg, rng)?;
        sign.extend_from_slice(s.as_slice());
        Ok(())
    }
}

impl<H: Sha2Hash> Verify for PSSVerify<H> {
    fn verify(&self, msg: &[u8], sign: &[u8]) -> Result<(), CipherError> {
        self.verify_block(msg, sign)
    }
}

impl<H: Sha2Hash> AsRef<PublicKey> for PSSVerify<H> {
    fn as_ref(&self) -> &PublicKey {
        &self.key
    }
}

impl<H: Sha2Hash> AsRef<PrivateKey> for PSSSign<H> {
    fn as_ref(&self) -> &PrivateKey {
        &self.key
    }
}
