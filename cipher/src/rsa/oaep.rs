//! = RFC 8017
//!
//! == PKCS #1: RSA Cryptography Specification Version 2.2
//!
//! === OAEP(Optimal Asymmetric Encryption Padding)
//!
//! ```txt
//!                     +----------+------+--+-------+
//!                DB = |  lHash   |  PS  |01|   M   |
//!                     +----------+------+--+-------+
//!                                    |
//!          +----------+              |
//!          |   seed   |              |
//!          +----------+              |
//!                |                   |
//!                |-------> MGF ---> xor
//!                |                   |
//!       +--+     V                   |
//!       |00|    xor <----- MGF <-----|
//!       +--+     |                   |
//!         |      |                   |
//!         V      V                   V
//!       +--+----------+----------------------------+
//! EM =  |00|maskedSeed|          maskedDB          |
//!       +--+----------+----------------------------+
//! ```

use crate::rsa::mgf::mgf1_xor;
use crate::rsa::{PrivateKey, PublicKey};
use crate::{wipe, CipherError, Decrypt, Encrypt, Rand, Sha2Hash};
use log::trace;
use sha2::Digest;
use std::marker::PhantomData;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// RSAES-OAEP encryption with the hash function `H` for both the label hash and MGF1
pub struct OAEPEncrypt<H: Sha2Hash> {
    key: PublicKey,
    label: Vec<u8>,
    hash: PhantomData<H>,
}

/// RSAES-OAEP decryption with the hash function `H`
pub struct OAEPDecrypt<H: Sha2Hash> {
    key: PrivateKey,
    label: Vec<u8>,
    hash: PhantomData<H>,
}

fn label_hash<H: Sha2Hash>(label: &[u8]) -> Result<Vec<u8>, CipherError> {
    if label.len() as u64 > H::ID.max_input_len() {
        return Err(CipherError::LabelTooLong);
    }

    Ok(<H as Digest>::digest(label).to_vec())
}

impl<H: Sha2Hash> OAEPEncrypt<H> {
    /// label: 和消息相关联的标签
    pub fn new(key: PublicKey, label: &[u8]) -> Result<Self, CipherError> {
        key.is_valid()?;

        Ok(Self {
            key,
            label: label.to_vec(),
            hash: PhantomData,
        })
    }

    pub fn set_label(&mut self, label: &[u8]) {
        self.label.clear();
        self.label.extend_from_slice(label);
    }

    pub fn key_len(&self) -> usize {
        self.key.key_len()
    }

    pub const fn hash_len(&self) -> usize {
        H::HLEN
    }

    /// `k - 2hLen - 2`, zero when the modulus is too short for `H`
    pub fn max_msg_len(&self) -> usize {
        self.key_len().saturating_sub((self.hash_len() << 1) + 2)
    }

    /// 加密`msg`, 密文长度为`key_len()`
    pub fn encrypt_block<R: Rand>(&self, msg: &[u8], rng: &mut R) -> Result<Vec<u8>, CipherError> {
        let mut seed = vec![0u8; self.hash_len()];
        rng.rand(seed.as_mut_slice());
        let c = self.encrypt_with_seed(msg, seed.as_slice());
        wipe(seed.as_mut_slice());
        c
    }

    // em = 0x00 || maskedSeed || maskedDB
    // db = lHash || ps || 0x01 || msg
    pub(crate) fn encrypt_with_seed(
        &self,
        msg: &[u8],
        seed: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        let (klen, hlen) = (self.key_len(), self.hash_len());
        let lhash = label_hash::<H>(self.label.as_slice())?;

        if klen < (hlen << 1) + 2 || msg.len() > self.max_msg_len() {
            return Err(CipherError::MsgTooLong);
        }

        if seed.len() != hlen {
            return Err(CipherError::InvalidBlockSize {
                target: hlen,
                real: seed.len(),
            });
        }

        let mut em = vec![0u8; klen];
        let (seed_part, db) = em[1..].split_at_mut(hlen);
        seed_part.copy_from_slice(seed);
        db[..hlen].copy_from_slice(lhash.as_slice());
        let sep = db.len() - msg.len() - 1;
        db[sep] = 0x01;
        db[(sep + 1)..].copy_from_slice(msg);

        // maskedDB = db ^ MGF(seed, k - hLen - 1)
        mgf1_xor::<H>(db, seed_part)?;
        // maskedSeed = seed ^ MGF(maskedDB, hLen)
        mgf1_xor::<H>(seed_part, db)?;

        trace!("oaep: k={}, hLen={}, psLen={}", klen, hlen, sep - hlen);
        let c = self.key.rsaep_octets(em.as_slice());
        wipe(em.as_mut_slice());
        c
    }
}

impl<H: Sha2Hash> OAEPDecrypt<H> {
    pub fn new(key: PrivateKey, label: &[u8]) -> Result<Self, CipherError> {
        key.is_valid()?;

        Ok(Self {
            key,
            label: label.to_vec(),
            hash: PhantomData,
        })
    }

    pub fn set_label(&mut self, label: &[u8]) {
        self.label.clear();
        self.label.extend_from_slice(label);
    }

    pub fn key_len(&self) -> usize {
        self.key.key_len()
    }

    pub const fn hash_len(&self) -> usize {
        H::HLEN
    }

    /// the matching encryptor, `None` if the private key has no public exponent
    pub fn oaep_encrypt(&self) -> Option<OAEPEncrypt<H>> {
        self.key.public_key().map(|key| OAEPEncrypt {
            key,
            label: self.label.clone(),
            hash: PhantomData,
        })
    }

    /// 解密一个`key_len()`字节的密文块
    ///
    /// The padding checks run over the whole block before any of them is reported, the
    /// first failing one in the order `InitialNonzero`, `HashMismatch`, `InvalidPs` is returned.
    pub fn decrypt_block(&self, cipher: &[u8]) -> Result<Vec<u8>, CipherError> {
        let (klen, hlen) = (self.key_len(), self.hash_len());
        let lhash = label_hash::<H>(self.label.as_slice())?;

        let mut em = self.key.rsadp_octets(cipher)?;
        if klen < (hlen << 1) + 2 {
            wipe(em.as_mut_slice());
            return Err(CipherError::InvalidKeySize {
                target: (hlen << 1) + 2,
                real: klen,
            });
        }

        let (first, rest) = em.split_at_mut(1);
        let (seed, db) = rest.split_at_mut(hlen);
        mgf1_xor::<H>(seed, db)?;
        mgf1_xor::<H>(db, seed)?;

        let initial_ok = first[0].ct_eq(&0u8);
        let hash_ok = db[..hlen].ct_eq(lhash.as_slice());

        // db[hlen..] = ps || 0x01 || msg
        let (mut looking, mut invalid, mut index) = (Choice::from(1u8), Choice::from(0u8), 0u32);
        for (i, &b) in db[hlen..].iter().enumerate() {
            let (is_zero, is_one) = (b.ct_eq(&0u8), b.ct_eq(&1u8));
            index.conditional_assign(&(i as u32), looking & is_one);
            looking &= !is_one;
            invalid |= looking & !is_zero;
        }
        let ps_ok = !(invalid | looking);

        let res = if !bool::from(initial_ok) {
            Err(CipherError::InitialNonzero)
        } else if !bool::from(hash_ok) {
            Err(CipherError::HashMismatch)
        } else if !bool::from(ps_ok) {
            Err(CipherError::InvalidPs)
        } else {
            Ok(db[(hlen + index as usize + 1)..].to_vec())
        };

        wipe(em.as_mut_slice());
        res
    }
}

impl<H: Sha2Hash> Encrypt for OAEPEncrypt<H> {
    fn encrypt<R: Rand>(
        &self,
        plaintext: &[u8],
        ciphertext: &mut Vec<u8>,
        rng: &mut R,
    ) -> Result<(), CipherError> {
        let c = self.encrypt_block(plaintext, rng)?;
        ciphertext.extend_from_slice(c.as_slice());
        Ok(())
    }
}

impl<H: Sha2Hash> Decrypt for OAEPDecrypt<H> {
    fn decrypt(&self, ciphertext: &[u8], plaintext: &mut Vec<u8>) -> Result<(), CipherError> {
        let mut m = self.decrypt_block(ciphertext)?;
        plaintext.extend_from_slice(m.as_slice());
        wipe(m.as_mut_slice());
        Ok(())
    }
}

impl<H: Sha2Hash> AsRef<PublicKey> for OAEPEncrypt<H> {
    fn as_ref(&self) -> &PublicKey {
        &self.key
    }
}

impl<H: Sha2Hash> AsRef<PrivateKey> for OAEPDecrypt<H> {
    fn as_ref(&self) -> &PrivateKey {
        &self.key
    }
}

impl<H: Sha2Hash> Clone for OAEPEncrypt<H> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            hash: PhantomData,
        }
    }
}

impl<H: Sha2Hash> Clone for OAEPDecrypt<H> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            hash: PhantomData,
        }
    }
}
