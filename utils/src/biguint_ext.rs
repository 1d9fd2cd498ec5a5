use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::Rand;
use std::borrow::Borrow;
use std::ops::Deref;

/// Extension methods over `BigUint` used by RSA key generation and the trapdoor primitive.
pub struct BigUintExt<T: Borrow<BigUint>>(pub T);

impl<T: Borrow<BigUint>> Deref for BigUintExt<T> {
    type Target = BigUint;
    fn deref(&self) -> &Self::Target {
        self.0.borrow()
    }
}

// 用于试除的小素数
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97,
];

impl<T: Borrow<BigUint>> BigUintExt<T> {
    /// self * inv = 1 \mod modulus
    ///
    /// Returns `None` if `self` and `modulus` are not coprime or `modulus` is zero.
    pub fn modinv(&self, modulus: &BigUint) -> Option<BigUint> {
        if modulus.is_zero() {
            return None;
        }

        let (a, n) = (
            BigInt::from(self.deref() % modulus),
            BigInt::from(modulus.clone()),
        );
        let g = a.extended_gcd(&n);
        if g.gcd.is_one() {
            g.x.mod_floor(&n).to_biguint()
        } else {
            None
        }
    }

    /// 生成[0..self)之间的随机数, `self`为零时返回零
    pub fn gen_random<R: Rand>(&self, rng: &mut R) -> BigUint {
        let bits = self.bits() as usize;
        if bits == 0 {
            return BigUint::zero();
        }

        let mut buf = vec![0u8; (bits + 7) >> 3];
        let excess = (buf.len() << 3) - bits;
        loop {
            rng.rand(buf.as_mut_slice());
            buf[0] &= 0xffu8 >> excess;
            let r = BigUint::from_bytes_be(buf.as_slice());
            if &r < self.deref() {
                return r;
            }
        }
    }

    /// Probabilistic primality test: trial division by the primes below 100, followed by
    /// `test_rounds` Miller-Rabin rounds with uniformly random bases in `[2, n-2]`.
    ///
    /// For an odd composite the probability of a false positive is at most $4^{-t}$.
    pub fn probably_prime_test<R: Rand>(&self, test_rounds: usize, rng: &mut R) -> bool {
        let n = self.deref();
        if n < &BigUint::from(2u8) {
            return false;
        }

        let small = n.to_u32();
        for &p in SMALL_PRIMES.iter() {
            if small == Some(p) {
                return true;
            }
            if (n % p).is_zero() {
                return false;
            }
        }

        self.miller_rabin(test_rounds, rng)
    }

    // n = 2^s * r + 1, n is odd and greater than 97
    fn miller_rabin<R: Rand>(&self, test_rounds: usize, rng: &mut R) -> bool {
        let n = self.deref();
        let n_m1 = n - 1u32;
        let s = n_m1.trailing_zeros().unwrap_or(0);
        let r = &n_m1 >> s;
        let base_bound = n - 3u32;

        'next_round: for _ in 0..test_rounds {
            let a = BigUintExt(&base_bound).gen_random(rng) + 2u32;
            let mut y = a.modpow(&r, n);
            if y.is_one() || y == n_m1 {
                continue;
            }

            for _ in 1..s {
                y = &y * &y % n;
                if y == n_m1 {
                    continue 'next_round;
                } else if y.is_one() {
                    return false;
                }
            }

            return false;
        }

        true
    }

    /// generate an odd number `p` with exactly `bits_len` bits (the top and bottom bits are forced
    /// to 1), retrying until `p` passes `probably_prime_test(test_rounds)`.
    pub fn generate_prime<R: Rand>(
        bits_len: usize,
        test_rounds: usize,
        rng: &mut R,
    ) -> Result<BigUint, String> {
        if bits_len < 2 {
            return Err("prime size must at least 2-bits".to_string());
        }

        let mut p = vec![0u8; (bits_len + 7) >> 3];
        let excess = (p.len() << 3) - bits_len;
        loop {
            rng.rand(p.as_mut_slice());

            // 清除大于bits_len的位, 并置最高位和最低位
            p[0] &= 0xffu8 >> excess;
            p[0] |= 0x80u8 >> excess;
            if let Some(x) = p.last_mut() {
                *x |= 1;
            }

            let n = BigUintExt(BigUint::from_bytes_be(p.as_slice()));
            if n.probably_prime_test(test_rounds, rng) {
                return Ok(n.0);
            }
        }
    }

    /// Big-endian encoding left-padded with zeros to exactly `len` bytes,
    /// `None` if the value needs more than `len` bytes.
    pub fn to_be_bytes_fixed(&self, len: usize) -> Option<Vec<u8>> {
        let bytes = if self.is_zero() {
            Vec::new()
        } else {
            self.to_bytes_be()
        };

        (bytes.len() <= len).then(|| {
            let mut out = vec![0u8; len];
            out[(len - bytes.len())..].copy_from_slice(bytes.as_slice());
            out
        })
    }
}
