use std::fmt;
use std::str::FromStr;

use num_complex::Complex;

use crate::TOLERANCE;
use crate::convolution::{multiply, padded_len};
use crate::dft::FftTable;
use crate::error::Error;
use crate::field::WordOps;

/// Largest exponent accepted by the parser.
pub const MAX_DEGREE: usize = 1 << 24;

/// Dense polynomial with complex coefficients, index = exponent.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<Complex<f64>>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<Complex<f64>>) -> Self {
        Self { coefficients }
    }

    pub fn from_real(coefficients: &[f64]) -> Self {
        Self::new(coefficients.iter().map(|&c| Complex::new(c, 0.0)).collect())
    }

    pub fn coefficients(&self) -> &[Complex<f64>] {
        &self.coefficients
    }

    /// Product through a complex FFT. The result keeps the padded length,
    /// with near-zero high coefficients.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        let k: usize = padded_len(&[self.coefficients.len(), other.coefficients.len()]);
        let table: FftTable = FftTable::new(k.log2());
        Self::new(multiply(&table, &self.coefficients, &other.coefficients))
    }
}

impl FromStr for Polynomial {
    type Err = Error;

    /// Parses `"+"`-separated terms `c`, `cx`, `cx^e` (spaces allowed, `c`
    /// defaults to 1, `-` alone means -1). Repeated exponents add up.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error::Empty);
        }

        let terms: Vec<(f64, usize)> = s.split('+').map(parse_term).collect::<Result<_, _>>()?;
        let degree: usize = terms.iter().map(|&(_, e)| e).max().unwrap_or(0);

        let mut coefficients: Vec<Complex<f64>> = vec![Complex::new(0.0, 0.0); degree + 1];
        terms.iter().for_each(|&(c, e)| coefficients[e].re += c);

        Ok(Self::new(coefficients))
    }
}

fn parse_term(term: &str) -> Result<(f64, usize), Error> {
    let invalid = || Error::InvalidTerm {
        term: term.to_string(),
    };

    if term.trim().is_empty() {
        return Err(invalid());
    }

    let (coefficient, exponent) = match term.trim().split_once('x') {
        None => (term.trim(), 0),
        Some((c, e)) => {
            let e: &str = e.trim();
            let exponent: usize = if e.is_empty() {
                1
            } else {
                e.strip_prefix('^')
                    .ok_or_else(invalid)?
                    .trim()
                    .parse()
                    .map_err(|_| invalid())?
            };
            if exponent > MAX_DEGREE {
                return Err(invalid());
            }
            (c.trim(), exponent)
        }
    };

    let coefficient: f64 = match coefficient {
        "" => 1.0,
        "-" => -1.0,
        c => c.parse().map_err(|_| invalid())?,
    };

    if !coefficient.is_finite() {
        return Err(invalid());
    }

    Ok((coefficient, exponent))
}

/// Rounds `x` to the nearest integer when within [`TOLERANCE`] of it.
fn snap(x: f64) -> f64 {
    let r: f64 = x.round();
    if (x - r).abs() < TOLERANCE { r } else { x }
}

impl fmt::Display for Polynomial {
    /// Real parts in ascending degree, joined by `" + "`. Terms under
    /// [`TOLERANCE`] are skipped; the constant prints in shortest form,
    /// other coefficients always carry a decimal point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .filter_map(|(i, c)| {
                let re: f64 = snap(c.re);
                if re.abs() < TOLERANCE {
                    return None;
                }
                Some(match i {
                    0 => format!("{re}"),
                    1 => format!("{re:?}x"),
                    _ => format!("{re:?}x^{i}"),
                })
            })
            .collect();

        if terms.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(&terms.join(" + "))
        }
    }
}
