//! 参考 RFC 8017 第3、5节
use crate::{CipherError, Rand};
use log::debug;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use utils::BigUintExt;

/// `e` used by `ExponentMode::Fixed`
pub const FIXED_PUBLIC_EXPONENT: u32 = 65537;

/// How the public exponent is chosen during key generation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExponentMode {
    /// e = 65537
    #[default]
    Fixed,
    /// random e in (1, lambda(n)) coprime to lambda(n)
    Random,
}

#[derive(Clone, Debug, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    // n = p * q
    n: BigUint,
    // public exponent, gcd(e, lambda(n)) = 1
    e: BigUint,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrivateKey {
    n: BigUint,
    // d * e = 1 % lambda(n)
    // lambda(n) = lcm(p-1, q-1)
    d: BigUint,
    // unknown when the key is imported as (d, n)
    e: Option<BigUint>,
}

/// byte length `k` of the modulus
fn modulus_len(n: &BigUint) -> usize {
    (n.bits() as usize + 7) >> 3
}

fn check_modulus(n: &BigUint) -> Result<(), String> {
    let bits = n.bits();
    if bits == 0 || bits & 7 != 0 {
        Err(format!(
            "rsa: the modulus bits `{}` must be a non-zero multiple of 8",
            bits
        ))
    } else if n.is_even() {
        Err("rsa: the modulus must be odd".to_string())
    } else {
        Ok(())
    }
}

/// RSA trapdoor primitive: $block^{exponent} \mod n$.
///
/// `block` and the result are big-endian octet strings of exactly the modulus byte length.
/// The same primitive serves encryption and verification (`e`), decryption and signing (`d`).
pub fn crypt(block: &[u8], exponent: &BigUint, n: &BigUint) -> Result<Vec<u8>, CipherError> {
    let klen = modulus_len(n);
    if block.len() != klen {
        return Err(CipherError::InvalidBlockSize {
            target: klen,
            real: block.len(),
        });
    }

    let m = BigUint::from_bytes_be(block);
    if &m >= n {
        return Err(CipherError::MsgOutOfRange);
    }

    BigUintExt(m.modpow(exponent, n))
        .to_be_bytes_fixed(klen)
        .ok_or_else(|| CipherError::Other("rsa: result exceeds the modulus length".to_string()))
}

impl PublicKey {
    /// n: RSA modules
    /// e: public key exponent
    /// note: not to check the `n` and `exp` are right RSA parameters
    pub fn new_uncheck(n: BigUint, exp: BigUint) -> Self {
        Self { e: exp, n }
    }

    /// note: not to check the `n` and `exp` are right RSA parameters
    pub fn from_be_bytes(n: &[u8], exp: &[u8]) -> Self {
        Self {
            e: BigUint::from_bytes_be(exp),
            n: BigUint::from_bytes_be(n),
        }
    }

    /// n
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// e
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    pub fn key_len(&self) -> usize {
        modulus_len(&self.n)
    }

    /// RSAEP: RSA Encrypt primitive
    pub fn rsaep(&self, m: &BigUint) -> Result<BigUint, CipherError> {
        if m < &self.n {
            Ok(m.modpow(&self.e, &self.n))
        } else {
            Err(CipherError::MsgOutOfRange)
        }
    }

    /// RSAEP/RSAVP1 on a `key_len()` bytes octet string
    pub fn rsaep_octets(&self, em: &[u8]) -> Result<Vec<u8>, CipherError> {
        crypt(em, &self.e, &self.n)
    }

    pub fn is_valid(&self) -> Result<(), CipherError> {
        check_modulus(&self.n).map_err(CipherError::InvalidPublicKey)?;

        if self.e <= BigUint::one() {
            Err(CipherError::InvalidPublicKey(format!(
                "rsa: public key {:#x} is too small",
                self.e
            )))
        } else if self.e >= self.n {
            Err(CipherError::InvalidPublicKey(
                "rsa: public exponent is not less than the modulus".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl PrivateKey {
    pub fn new_uncheck(modulus: BigUint, private_exp: BigUint) -> Self {
        Self {
            n: modulus,
            d: private_exp,
            e: None,
        }
    }

    pub fn new_uncheck_with_public_exponent(
        modulus: BigUint,
        public_exp: BigUint,
        private_exp: BigUint,
    ) -> Self {
        Self {
            n: modulus,
            d: private_exp,
            e: Some(public_exp),
        }
    }

    /// note: not to check the `n` and `d` are right RSA parameters
    pub fn from_be_bytes(n: &[u8], d: &[u8]) -> Self {
        Self::new_uncheck(BigUint::from_bytes_be(n), BigUint::from_bytes_be(d))
    }

    pub fn from_be_bytes_with_public_exponent(n: &[u8], e: &[u8], d: &[u8]) -> Self {
        Self::new_uncheck_with_public_exponent(
            BigUint::from_bytes_be(n),
            BigUint::from_bytes_be(e),
            BigUint::from_bytes_be(d),
        )
    }

    /// n
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// d
    pub fn exponent(&self) -> &BigUint {
        &self.d
    }

    pub fn public_key(&self) -> Option<PublicKey> {
        self.e
            .as_ref()
            .map(|e| PublicKey::new_uncheck(self.n.clone(), e.clone()))
    }

    pub fn key_len(&self) -> usize {
        modulus_len(&self.n)
    }

    /// RSADP: RSA Decrypt primitive
    pub fn rsadp(&self, c: &BigUint) -> Result<BigUint, CipherError> {
        if c < &self.n {
            Ok(c.modpow(&self.d, &self.n))
        } else {
            Err(CipherError::MsgOutOfRange)
        }
    }

    /// RSADP/RSASP1 on a `key_len()` bytes octet string
    pub fn rsadp_octets(&self, c: &[u8]) -> Result<Vec<u8>, CipherError> {
        crypt(c, &self.d, &self.n)
    }

    /// Structural checks on `n` and `d`; when `e` is known also checks that
    /// $(m^e)^d \equiv m \mod n$ for a few probe values.
    pub fn is_valid(&self) -> Result<(), CipherError> {
        check_modulus(&self.n).map_err(CipherError::InvalidPrivateKey)?;

        if self.d.is_zero() || self.d >= self.n {
            return Err(CipherError::InvalidPrivateKey(
                "rsa: private exponent out of range".to_string(),
            ));
        }

        if let Some(pk) = self.public_key() {
            pk.is_valid()?;
            for probe in [2u32, 3, 0x10001] {
                let m = BigUint::from(probe);
                if self.rsadp(&pk.rsaep(&m)?)? != m {
                    return Err(CipherError::InvalidPrivateKey(
                        "rsa: private exponent does not match the public key".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// `generate_key` generates a 2-prime RSA key pair with a `bits_len` bits modulus.
    ///
    /// `p` and `q` are independent `bits_len / 2` bits primes, redrawn until `p != q`, `p * q`
    /// has exactly `bits_len` bits and, for `ExponentMode::Fixed`, `gcd(p-1, e) = gcd(q-1, e) = 1`.
    /// The private exponent is $d = e^{-1} \mod \lambda(n)$, $\lambda(n) = lcm(p-1, q-1)$.
    ///
    /// `prime_test_rounds` is the number of Miller-Rabin rounds for each prime candidate.
    pub fn generate_key<R: Rand>(
        bits_len: usize,
        mode: ExponentMode,
        prime_test_rounds: usize,
        rng: &mut R,
    ) -> Result<PrivateKey, CipherError> {
        if bits_len < 64 || bits_len & 7 != 0 {
            return Err(CipherError::Other(format!(
                "rsa: invalid modulus bits `{}`, need a multiple of 8 and at least 64",
                bits_len
            )));
        }

        let (half, fixed_e) = (bits_len >> 1, BigUint::from(FIXED_PUBLIC_EXPONENT));
        let mut attempts = 0usize;
        let (p, q) = 'next_set_of_primes: loop {
            attempts += 1;
            let p = BigUintExt::<BigUint>::generate_prime(half, prime_test_rounds, rng)
                .map_err(CipherError::Other)?;
            let q = BigUintExt::<BigUint>::generate_prime(half, prime_test_rounds, rng)
                .map_err(CipherError::Other)?;

            if p == q {
                continue 'next_set_of_primes;
            }

            if mode == ExponentMode::Fixed {
                for prime in [&p, &q] {
                    if !(prime - 1u32).gcd(&fixed_e).is_one() {
                        continue 'next_set_of_primes;
                    }
                }
            }

            if (&p * &q).bits() as usize == bits_len {
                break (p, q);
            }
        };
        debug!(
            "rsa: found {}-bit prime pair after {} attempt(s)",
            half, attempts
        );

        let lambda = (&p - 1u32).lcm(&(&q - 1u32));
        let e = match mode {
            ExponentMode::Fixed => fixed_e,
            ExponentMode::Random => loop {
                let e = BigUintExt(&lambda).gen_random(rng);
                if e > BigUint::one() && e.gcd(&lambda).is_one() {
                    break e;
                }
            },
        };

        let d = BigUintExt(&e).modinv(&lambda).ok_or_else(|| {
            CipherError::Other("rsa: public exponent is not invertible".to_string())
        })?;

        Ok(Self::new_uncheck_with_public_exponent(p * q, e, d))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{n={:#x}, e={:#x}}}", self.n, self.e)
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.e.as_ref() {
            Some(e) => write!(f, "{{n={:#x}, e={:#x}, d={:#x}}}", self.n, e, self.d),
            None => write!(f, "{{n={:#x}, d={:#x}}}", self.n, self.d),
        }
    }
}
