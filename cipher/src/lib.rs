mod error;
pub use error::CipherError;

pub use rand::{DefaultRand, Rand};

pub mod hash;
pub use hash::{HashId, Sha2Hash};

pub mod rsa;

pub trait Encrypt {
    // 写入ciphertext之前不清空
    fn encrypt<R: Rand>(
        &self,
        plaintext: &[u8],
        ciphertext: &mut Vec<u8>,
        rng: &mut R,
    ) -> Result<(), CipherError>;
}

pub trait Decrypt {
    // 写入plaintext之前不清空
    fn decrypt(&self, ciphertext: &[u8], plaintext: &mut Vec<u8>) -> Result<(), CipherError>;
}

pub trait Sign {
    fn sign<R: Rand>(&self, msg: &[u8], sign: &mut Vec<u8>, rng: &mut R)
        -> Result<(), CipherError>;
}

pub trait Verify {
    fn verify(&self, msg: &[u8], sign: &[u8]) -> Result<(), CipherError>;
}

#[cfg(feature = "sec-zeroize")]
pub(crate) fn wipe(buf: &mut [u8]) {
    zeroize::Zeroize::zeroize(buf);
}

#[cfg(not(feature = "sec-zeroize"))]
pub(crate) fn wipe(_buf: &mut [u8]) {}
