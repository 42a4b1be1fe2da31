use rand::Rng;
use rand_distr::Distribution;

/// Uniform digit in [0, base).
#[derive(Clone, Copy, Debug)]
pub struct Digits {
    base: u64,
}

impl Digits {
    pub fn new(base: u64) -> Self {
        assert!(base >= 2, "invalid base: {base} < 2");
        Self { base }
    }

    pub fn base(&self) -> u64 {
        self.base
    }
}

impl Distribution<u64> for Digits {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.random_range(0..self.base)
    }
}

/// Integral real coefficient in [-bound, bound], returned as f64 so that
/// products of small polynomials stay exact in double precision.
#[derive(Clone, Copy, Debug)]
pub struct Coefficients {
    bound: i64,
}

impl Coefficients {
    pub fn new(bound: i64) -> Self {
        assert!(bound >= 0, "invalid bound: {bound} < 0");
        Self { bound }
    }
}

impl Distribution<f64> for Coefficients {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(-self.bound..=self.bound) as f64
    }
}
