//! Acyclic convolution through the convolution theorem.

use itertools::izip;
use log::trace;

use crate::dft::{DFT, Elem, Roots};
use crate::field::Field;

/// Smallest power of two `>= lens.sum()`, the transform length of a product
/// of operands with these lengths.
///
/// The true product length is `lens.sum() - (lens.len() - 1)`, so the
/// padded length always leaves at least one slack position.
pub fn padded_len(lens: &[usize]) -> usize {
    lens.iter().sum::<usize>().next_power_of_two()
}

/// Returns the product of `a` and `b`, of length `padded_len(&[a.len(), b.len()])`.
pub fn multiply<T: Roots>(table: &T, a: &[Elem<T>], b: &[Elem<T>]) -> Vec<Elem<T>> {
    multiply_many(table, &[a, b])
}

/// Returns the product of `a`, `b` and `c`, computed with a single inverse transform.
pub fn multiply3<T: Roots>(table: &T, a: &[Elem<T>], b: &[Elem<T>], c: &[Elem<T>]) -> Vec<Elem<T>> {
    multiply_many(table, &[a, b, c])
}

/// Returns the product of all `operands`.
///
/// Each operand is zero-padded to the common length `k`, forward transformed,
/// the transforms are multiplied point-wise and the product is transformed
/// back. The result has length `k`; positions past the product degree are
/// zero. Panics if `operands` is empty or if `k` exceeds the table.
pub fn multiply_many<T: Roots>(table: &T, operands: &[&[Elem<T>]]) -> Vec<Elem<T>> {
    assert!(!operands.is_empty(), "invalid argument: no operands");

    let lens: Vec<usize> = operands.iter().map(|a| a.len()).collect();
    let k: usize = padded_len(&lens);

    trace!("convolving {} operands of lengths {:?} at length {}", operands.len(), lens, k);

    let f: &T::Field = table.field();

    let mut operands = operands.iter().map(|a| {
        let mut padded: Vec<Elem<T>> = vec![f.zero(); k];
        padded[..a.len()].copy_from_slice(a);
        table.forward_inplace(&mut padded);
        padded
    });

    let mut res: Vec<Elem<T>> = operands.next().unwrap_or_else(|| vec![f.zero(); k]);
    operands.for_each(|b| {
        izip!(res.iter_mut(), &b).for_each(|(r, &b)| *r = f.mul(*r, b));
    });

    table.backward_inplace(&mut res);
    res
}
