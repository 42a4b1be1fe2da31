//! Scalar fields the transform engine runs over.

pub mod complex;
pub mod prime;

pub use complex::ComplexField;
pub use prime::Prime;

use std::fmt::Debug;

/// Arithmetic context of a field.
///
/// Elements are plain values; the context carries whatever the arithmetic
/// needs (nothing for the complex numbers, the modulus for a prime field).
pub trait Field {
    type Elem: Copy + Debug;

    fn zero(&self) -> Self::Elem;
    fn one(&self) -> Self::Elem;
    fn add(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem;
    fn sub(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem;
    fn mul(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem;

    /// Returns `x^exponent` by square-and-multiply.
    fn pow(&self, x: Self::Elem, exponent: u64) -> Self::Elem {
        let mut y: Self::Elem = self.one();
        let mut x: Self::Elem = x;
        let mut i: u64 = exponent;
        while i > 0 {
            if i & 1 == 1 {
                y = self.mul(y, x);
            }
            x = self.mul(x, x);
            i >>= 1;
        }
        y
    }
}

pub trait WordOps {
    /// ceil(log2(self)); `self` must be non-zero.
    fn log2(self) -> usize;
}

impl WordOps for usize {
    #[inline(always)]
    fn log2(self) -> usize {
        (usize::BITS - (self - 1).leading_zeros()) as _
    }
}

impl WordOps for u64 {
    #[inline(always)]
    fn log2(self) -> usize {
        (u64::BITS - (self - 1).leading_zeros()) as _
    }
}
