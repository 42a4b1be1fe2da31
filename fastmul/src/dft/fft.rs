use std::f64::consts::TAU;

use num_complex::Complex;

use crate::dft::Roots;
use crate::field::ComplexField;

/// Complex roots of unity, `exp(2πi / 2^(l+1))` for every level `l`.
#[derive(Clone, Debug)]
pub struct FftTable {
    field: ComplexField,
    forward: Vec<Complex<f64>>,
    backward: Vec<Complex<f64>>,
}

impl FftTable {
    /// Returns a table for sequences of length up to `2^log_n`.
    pub fn new(log_n: usize) -> Self {
        assert!(log_n < usize::BITS as usize, "invalid argument: log_n = {log_n} too large");
        let (forward, backward): (Vec<Complex<f64>>, Vec<Complex<f64>>) = (0..log_n)
            .map(|level| {
                let theta: f64 = TAU / (1u64 << (level + 1)) as f64;
                (Complex::from_polar(1.0, theta), Complex::from_polar(1.0, -theta))
            })
            .unzip();
        Self {
            field: ComplexField,
            forward,
            backward,
        }
    }
}

impl Roots for FftTable {
    type Field = ComplexField;

    fn field(&self) -> &ComplexField {
        &self.field
    }

    fn log_n_max(&self) -> usize {
        self.forward.len()
    }

    fn forward_root(&self, level: usize) -> Complex<f64> {
        self.forward[level]
    }

    fn backward_root(&self, level: usize) -> Complex<f64> {
        self.backward[level]
    }

    fn scale(&self) -> Complex<f64> {
        Complex::new(0.5, 0.0)
    }
}
