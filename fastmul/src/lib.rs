//! Fast multiplication of big integers and polynomials through the
//! convolution theorem.
//!
//! Two transforms share one recursive radix-2 decimation-in-time engine
//! ([`dft`]): a complex FFT over `Complex<f64>` and a number-theoretic
//! transform over a prime field (by default the Fermat prime `2^16 + 1`).
//! [`convolution`] pads, transforms, multiplies point-wise and transforms
//! back, and [`carry`] turns digit products into a positional number.
//!
//! ```
//! use fastmul::encoding::integer::Integer;
//!
//! let a: Integer = "123".parse().unwrap();
//! let b: Integer = "456".parse().unwrap();
//! assert_eq!(a.mul(&b).unwrap().to_string(), "56088");
//! ```

pub mod carry;
pub mod convolution;
pub mod dft;
pub mod encoding;
pub mod error;
pub mod field;

pub use error::Error;

/// Radix of the integer digit representation.
pub const BASE: u64 = 10;

/// Working prime of the default modular field, `2^16 + 1`.
pub const FERMAT_Q: u64 = (1 << FERMAT_LOG_ORDER) + 1;

/// log2 of the largest transform supported over [`FERMAT_Q`].
pub const FERMAT_LOG_ORDER: usize = 16;

/// Magnitude under which a complex-path result is considered zero, and
/// distance under which it is snapped to the nearest integer.
pub const TOLERANCE: f64 = 1e-6;
