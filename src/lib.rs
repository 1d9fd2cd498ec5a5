//! PKCS #1 v2.2 RSA: key generation, RSAES-OAEP and RSASSA-PSS over the SHA-2 family.
//!
//! The free functions use the process-wide [`PkcsConfig`] and the OS random source,
//! [`Pkcs1`] takes both explicitly.

pub mod config;
pub mod error;
mod pkcs;

pub use cipher::rsa::ExponentMode;
pub use cipher::{CipherError, DefaultRand, HashId, Rand};
pub use config::PkcsConfig;
pub use error::PkcsError;
pub use pkcs::{Pkcs1, RsaKeyOctets};

pub fn rsa_generate_key(mode: ExponentMode) -> Result<RsaKeyOctets, PkcsError> {
    Pkcs1::with_config()?.rsa_generate_key(mode, &mut DefaultRand::default())
}

pub fn rsaes_oaep_encrypt(
    message: &[u8],
    label: &[u8],
    e: &[u8],
    n: &[u8],
    hash: HashId,
) -> Result<Vec<u8>, PkcsError> {
    let mut rng = DefaultRand::default();
    Pkcs1::with_config()?.rsaes_oaep_encrypt(message, label, e, n, hash, &mut rng)
}

pub fn rsaes_oaep_decrypt(
    ciphertext: &[u8],
    label: &[u8],
    d: &[u8],
    n: &[u8],
    hash: HashId,
) -> Result<Vec<u8>, PkcsError> {
    Pkcs1::with_config()?.rsaes_oaep_decrypt(ciphertext, label, d, n, hash)
}

pub fn rsassa_pss_sign(
    message: &[u8],
    d: &[u8],
    n: &[u8],
    hash: HashId,
) -> Result<Vec<u8>, PkcsError> {
    Pkcs1::with_config()?.rsassa_pss_sign(message, d, n, hash, &mut DefaultRand::default())
}

pub fn rsassa_pss_verify(
    message: &[u8],
    e: &[u8],
    n: &[u8],
    signature: &[u8],
    hash: HashId,
) -> Result<(), PkcsError> {
    Pkcs1::with_config()?.rsassa_pss_verify(message, e, n, signature, hash)
}
