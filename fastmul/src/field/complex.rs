use num_complex::Complex;

use crate::field::Field;

/// Double-precision complex numbers, no reduction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComplexField;

impl Field for ComplexField {
    type Elem = Complex<f64>;

    #[inline(always)]
    fn zero(&self) -> Complex<f64> {
        Complex::new(0.0, 0.0)
    }

    #[inline(always)]
    fn one(&self) -> Complex<f64> {
        Complex::new(1.0, 0.0)
    }

    #[inline(always)]
    fn add(&self, a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
        a + b
    }

    #[inline(always)]
    fn sub(&self, a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
        a - b
    }

    #[inline(always)]
    fn mul(&self, a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
        a * b
    }
}
