//! String adapters around the convolution core.

pub mod integer;
pub mod polynomial;

pub use integer::Integer;
pub use polynomial::Polynomial;
