/// Failures surfaced to callers of the table builders and adapters.
///
/// Misuse of the transform engine itself (zero or non power-of-two lengths,
/// lengths beyond the table depth) panics instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The modulus is not an odd prime.
    NotPrime { q: u64 },
    /// The modulus does not fit the field's arithmetic.
    ModulusTooLarge { q: u64 },
    /// `2^log_order` does not divide `q - 1`.
    UnsupportedOrder { q: u64, log_order: usize },
    /// No element of `[2, q)` generates the multiplicative group.
    NoGenerator { q: u64 },
    /// The product needs a transform of length `len`, the table stops at `max`.
    TransformTooLarge { len: usize, max: usize },
    /// A convolution coefficient may reach `bound`, which does not fit below `q`.
    CoefficientOverflow { bound: u128, q: u64 },
    /// Nothing to parse.
    Empty,
    /// A non-digit character in a decimal string, `index` is its byte offset.
    InvalidDigit { index: usize, found: char },
    /// A polynomial term that is not of the form `c x^e`.
    InvalidTerm { term: String },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotPrime { q } => write!(f, "invalid modulus: {q} is not an odd prime"),
            Self::ModulusTooLarge { q } => write!(f, "invalid modulus: {q} >= 2^62"),
            Self::UnsupportedOrder { q, log_order } => {
                write!(f, "invalid order: 2^{log_order} does not divide {q} - 1")
            }
            Self::NoGenerator { q } => write!(f, "no generator of (Z/{q}Z)* found"),
            Self::TransformTooLarge { len, max } => {
                write!(f, "transform length {len} exceeds table capacity {max}")
            }
            Self::CoefficientOverflow { bound, q } => {
                write!(f, "convolution coefficients may reach {bound} >= q = {q}")
            }
            Self::Empty => f.write_str("empty input"),
            Self::InvalidDigit { index, found } => {
                write!(f, "invalid digit {found:?} at index {index}")
            }
            Self::InvalidTerm { term } => write!(f, "invalid term {term:?}"),
        }
    }
}

impl core::error::Error for Error {}
