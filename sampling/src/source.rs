use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;
use rand_distr::Distribution;

use crate::distributions::{Coefficients, Digits};

const MAXF64: f64 = 9007199254740992.0;

/// Deterministic, seedable randomness for tests and benches.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Returns a uniform value in [0, max) by rejection on `next_u64() & mask`.
    /// `mask` must cover `max - 1`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        debug_assert!(max > 0 && mask >= max - 1, "invalid mask {mask:#x} for max {max}");
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    /// Returns `len` uniform base-`base` digits, least significant first.
    /// The most significant digit is non-zero when `len > 0`.
    pub fn next_digits(&mut self, len: usize, base: u64) -> Vec<u64> {
        let digits: Digits = Digits::new(base);
        let mut out: Vec<u64> = (0..len).map(|_| digits.sample(self)).collect();
        if let Some(top) = out.last_mut() {
            *top = 1 + self.next_u64n(base - 1, (base - 1).next_power_of_two() - 1);
        }
        out
    }

    /// Returns `len` integral coefficients drawn from [-bound, bound].
    pub fn next_coefficients(&mut self, len: usize, bound: i64) -> Vec<f64> {
        let coefficients: Coefficients = Coefficients::new(bound);
        (0..len).map(|_| coefficients.sample(self)).collect()
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
