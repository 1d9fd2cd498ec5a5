//! Random source handle.
//!
//! Every randomized operation (prime candidates, public exponents, OAEP seeds, PSS salts)
//! takes a `&mut R` where `R: Rand`. There is no process-wide generator.

use xrand::rngs::OsRng;
use xrand::RngCore;

/// A cryptographically secure source of random bytes.
pub trait Rand {
    fn rand(&mut self, random: &mut [u8]);
}

/// 操作系统提供的随机源(`getrandom`)
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultRand(OsRng);

impl Rand for DefaultRand {
    fn rand(&mut self, random: &mut [u8]) {
        self.0.fill_bytes(random);
    }
}

impl<T: RngCore + xrand::CryptoRng> Rand for T {
    fn rand(&mut self, random: &mut [u8]) {
        self.fill_bytes(random);
    }
}

#[cfg(test)]
mod tests {
    use crate::{DefaultRand, Rand};
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn default_rand_fill() {
        let mut rng = DefaultRand::default();
        let (mut a, mut b) = ([0u8; 32], [0u8; 32]);
        rng.rand(&mut a);
        rng.rand(&mut b);
        assert_ne!(a, b, "two 256-bit draws from the os rng collided");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let (mut r1, mut r2) = (
            ChaCha20Rng::seed_from_u64(0x5eed),
            ChaCha20Rng::seed_from_u64(0x5eed),
        );
        let (mut a, mut b) = ([0u8; 48], [0u8; 48]);
        r1.rand(&mut a);
        r2.rand(&mut b);
        assert_eq!(a, b);

        r1.rand(&mut a);
        assert_ne!(a, b);
    }
}
