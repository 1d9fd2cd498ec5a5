//! RSAES-OAEP and RSASSA-PSS over fixed-width big-endian octet strings.
//!
//! Every key component (`e`, `d`, `n`), ciphertext and signature is exactly `k = modulus_bits / 8`
//! bytes, the modulus must use all `modulus_bits` bits.

use crate::config::PkcsConfig;
use crate::error::PkcsError;
use cipher::rsa::{
    ExponentMode, OAEPDecrypt, OAEPEncrypt, PSSSign, PSSVerify, PrivateKey, PublicKey,
};
use cipher::{with_hash, HashId, Rand};
use log::debug;
use num_bigint::BigUint;
use std::fmt::{Debug, Formatter};
use utils::BigUintExt;

/// `(e, d, n)`, each `k` bytes
#[derive(Clone, PartialEq, Eq)]
pub struct RsaKeyOctets {
    pub e: Vec<u8>,
    pub d: Vec<u8>,
    pub n: Vec<u8>,
}

impl Debug for RsaKeyOctets {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaKeyOctets")
            .field("e", &BigUint::from_bytes_be(&self.e))
            .field("n", &BigUint::from_bytes_be(&self.n))
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "sec-zeroize")]
impl Drop for RsaKeyOctets {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.d);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pkcs1 {
    modulus_bits: usize,
    prime_test_rounds: usize,
}

impl Default for Pkcs1 {
    fn default() -> Self {
        let c = PkcsConfig::default();
        Self {
            modulus_bits: c.modulus_bits,
            prime_test_rounds: c.prime_test_rounds,
        }
    }
}

impl TryFrom<&PkcsConfig> for Pkcs1 {
    type Error = PkcsError;

    fn try_from(value: &PkcsConfig) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            modulus_bits: value.modulus_bits,
            prime_test_rounds: value.prime_test_rounds,
        })
    }
}

impl Pkcs1 {
    pub fn new(modulus_bits: usize, prime_test_rounds: usize) -> Result<Self, PkcsError> {
        Self::try_from(&PkcsConfig {
            modulus_bits,
            prime_test_rounds,
        })
    }

    /// the process-wide configuration
    pub fn with_config() -> Result<Self, PkcsError> {
        Self::try_from(PkcsConfig::config()?)
    }

    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// `k`
    pub fn key_len(&self) -> usize {
        self.modulus_bits >> 3
    }

    fn check_len(&self, name: &str, x: &[u8]) -> Result<(), PkcsError> {
        if x.len() != self.key_len() {
            Err(PkcsError::InvalidKey(format!(
                "`{}` must be {} bytes, got {}",
                name,
                self.key_len(),
                x.len()
            )))
        } else {
            Ok(())
        }
    }

    fn check_modulus(&self, n: &[u8]) -> Result<(), PkcsError> {
        self.check_len("n", n)?;
        if n[0] & 0x80 == 0 {
            Err(PkcsError::InvalidKey(format!(
                "the modulus is shorter than {} bits",
                self.modulus_bits
            )))
        } else {
            Ok(())
        }
    }

    fn public_key(&self, e: &[u8], n: &[u8]) -> Result<PublicKey, PkcsError> {
        self.check_modulus(n)?;
        self.check_len("e", e)?;
        Ok(PublicKey::from_be_bytes(n, e))
    }

    fn private_key(&self, d: &[u8], n: &[u8]) -> Result<PrivateKey, PkcsError> {
        self.check_modulus(n)?;
        self.check_len("d", d)?;
        Ok(PrivateKey::from_be_bytes(n, d))
    }

    fn export(&self, x: &BigUint) -> Result<Vec<u8>, PkcsError> {
        BigUintExt(x).to_be_bytes_fixed(self.key_len()).ok_or_else(|| {
            PkcsError::InvalidKey(format!("value exceeds {} bytes", self.key_len()))
        })
    }

    pub fn rsa_generate_key<R: Rand>(
        &self,
        mode: ExponentMode,
        rng: &mut R,
    ) -> Result<RsaKeyOctets, PkcsError> {
        debug!(
            "rsa: generating a {}-bit key, {:?} exponent, {} Miller-Rabin rounds",
            self.modulus_bits, mode, self.prime_test_rounds
        );
        let sk = PrivateKey::generate_key(self.modulus_bits, mode, self.prime_test_rounds, rng)?;
        let pk = sk
            .public_key()
            .ok_or_else(|| PkcsError::InvalidKey("missing public exponent".to_string()))?;

        Ok(RsaKeyOctets {
            e: self.export(pk.exponent())?,
            d: self.export(sk.exponent())?,
            n: self.export(sk.modulus())?,
        })
    }

    pub fn rsaes_oaep_encrypt<R: Rand>(
        &self,
        message: &[u8],
        label: &[u8],
        e: &[u8],
        n: &[u8],
        hash: HashId,
        rng: &mut R,
    ) -> Result<Vec<u8>, PkcsError> {
        let pk = self.public_key(e, n)?;
        let c = with_hash!(hash, H => {
            OAEPEncrypt::<H>::new(pk, label)?.encrypt_block(message, rng)
        })?;
        Ok(c)
    }

    pub fn rsaes_oaep_decrypt(
        &self,
        ciphertext: &[u8],
        label: &[u8],
        d: &[u8],
        n: &[u8],
        hash: HashId,
    ) -> Result<Vec<u8>, PkcsError> {
        let sk = self.private_key(d, n)?;
        let m = with_hash!(hash, H => {
            OAEPDecrypt::<H>::new(sk, label)?.decrypt_block(ciphertext)
        })?;
        Ok(m)
    }

    pub fn rsassa_pss_sign<R: Rand>(
        &self,
        message: &[u8],
        d: &[u8],
        n: &[u8],
        hash: HashId,
        rng: &mut R,
    ) -> Result<Vec<u8>, PkcsError> {
        let sk = self.private_key(d, n)?;
        let s = with_hash!(hash, H => PSSSign::<H>::new(sk)?.sign_block(message, rng))?;
        Ok(s)
    }

    pub fn rsassa_pss_verify(
        &self,
        message: &[u8],
        e: &[u8],
        n: &[u8],
        signature: &[u8],
        hash: HashId,
    ) -> Result<(), PkcsError> {
        let pk = self.public_key(e, n)?;
        with_hash!(hash, H => PSSVerify::<H>::new(pk)?.verify_block(message, signature))?;
        Ok(())
    }
}
