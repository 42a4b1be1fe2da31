use primality_test::is_prime;

use crate::error::Error;
use crate::field::Field;

/// Integers modulo an odd prime `q < 2^62`, elements stored as `u64` in `[0, q)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prime {
    q: u64,
}

impl Prime {
    /// Returns the field of integers modulo `q`.
    /// Fails if `q` is not an odd prime or does not fit the arithmetic.
    pub fn new(q: u64) -> Result<Self, Error> {
        if q >= 1 << 62 {
            return Err(Error::ModulusTooLarge { q });
        }
        if q <= 2 || !is_prime(q) {
            return Err(Error::NotPrime { q });
        }
        Ok(Self::new_unchecked(q))
    }

    /// Returns the ring of integers modulo `q` without checking primality.
    /// Panics if `q < 2` or `q >= 2^62`.
    pub fn new_unchecked(q: u64) -> Self {
        assert!(q >= 2 && q < 1 << 62, "invalid modulus: q = {q}");
        Self { q }
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    /// Reduces an arbitrary integer into `[0, q)`.
    #[inline(always)]
    pub fn reduce(&self, x: u64) -> u64 {
        x % self.q
    }

    /// Returns `x^-1 mod q` as `x^(q-2)` (Fermat).
    /// User must ensure that `x` is not divisible by `q`.
    #[inline(always)]
    pub fn inv(&self, x: u64) -> u64 {
        debug_assert!(x % self.q != 0, "invalid argument: {x} has no inverse mod {}", self.q);
        self.pow(x, self.q - 2)
    }
}

impl Field for Prime {
    type Elem = u64;

    #[inline(always)]
    fn zero(&self) -> u64 {
        0
    }

    #[inline(always)]
    fn one(&self) -> u64 {
        1
    }

    #[inline(always)]
    fn add(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.q && b < self.q);
        (a + b) % self.q
    }

    #[inline(always)]
    fn sub(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.q && b < self.q);
        (a + self.q - b) % self.q
    }

    #[inline(always)]
    fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.q as u128) as u64
    }
}
