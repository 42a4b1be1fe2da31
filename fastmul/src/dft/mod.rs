//! Recursive radix-2 decimation-in-time transforms.
//!
//! [`Roots`] exposes, per recursion level `l`, a primitive `2^(l+1)`-th root
//! of unity for each direction. Every [`Roots`] implementor gets [`DFT`] for
//! free: the forward transform is unscaled, the backward transform multiplies
//! each combined value by [`Roots::scale`] (one half) at every level, which
//! amounts to a division by `n` overall.

pub mod fft;
pub mod ntt;

pub use fft::FftTable;
pub use ntt::NttTable;

use itertools::izip;

use crate::field::{Field, WordOps};

/// Element type of the field behind a root table.
pub type Elem<T> = <<T as Roots>::Field as Field>::Elem;

/// Per-level twiddle factors of a transform.
pub trait Roots {
    type Field: Field;

    fn field(&self) -> &Self::Field;

    /// log2 of the longest sequence the table can transform.
    fn log_n_max(&self) -> usize;

    /// Primitive `2^(level+1)`-th root of unity.
    fn forward_root(&self, level: usize) -> <Self::Field as Field>::Elem;

    /// Inverse of [`Roots::forward_root`].
    fn backward_root(&self, level: usize) -> <Self::Field as Field>::Elem;

    /// Inverse of two in the field.
    fn scale(&self) -> <Self::Field as Field>::Elem;

    fn n_max(&self) -> usize {
        1 << self.log_n_max()
    }
}

pub trait DFT<E> {
    /// In-place forward transform. `a.len()` must be a power of two no
    /// larger than the table supports.
    fn forward_inplace(&self, a: &mut [E]);

    /// In-place inverse of [`DFT::forward_inplace`], including the `1/n` factor.
    fn backward_inplace(&self, a: &mut [E]);
}

impl<T: Roots> DFT<Elem<T>> for T {
    fn forward_inplace(&self, a: &mut [Elem<T>]) {
        let level: usize = check_len(self, a.len());
        transform::<T, false>(self, a, level);
    }

    fn backward_inplace(&self, a: &mut [Elem<T>]) {
        let level: usize = check_len(self, a.len());
        transform::<T, true>(self, a, level);
    }
}

/// Panics unless `n` is a power of two within the table; returns the level
/// of the outermost recursion, `log2(n) - 1` (0 for `n = 1`, unused).
fn check_len<T: Roots>(table: &T, n: usize) -> usize {
    assert!(n != 0, "invalid length: a.len() = 0");
    assert!(n & (n - 1) == 0, "invalid length: a.len() = {n} is not a power of two");
    let log_n: usize = n.log2();
    assert!(
        log_n <= table.log_n_max(),
        "invalid length: a.len() = {n} > {} (table capacity)",
        table.n_max()
    );
    log_n.saturating_sub(1)
}

fn transform<T: Roots, const BACKWARD: bool>(table: &T, a: &mut [Elem<T>], level: usize) {
    let n: usize = a.len();
    if n == 1 {
        return;
    }

    let m: usize = n >> 1;
    let f: &T::Field = table.field();

    let mut u: Vec<Elem<T>> = a.iter().step_by(2).copied().collect();
    let mut v: Vec<Elem<T>> = a.iter().skip(1).step_by(2).copied().collect();

    if m > 1 {
        transform::<T, BACKWARD>(table, &mut u, level - 1);
        transform::<T, BACKWARD>(table, &mut v, level - 1);
    }

    let root: Elem<T> = if BACKWARD {
        table.backward_root(level)
    } else {
        table.forward_root(level)
    };

    let mut w: Elem<T> = f.one();
    let (lo, hi) = a.split_at_mut(m);

    if BACKWARD {
        let half: Elem<T> = table.scale();
        izip!(lo, hi, &u, &v).for_each(|(lo, hi, &u, &v)| {
            let t: Elem<T> = f.mul(w, v);
            *lo = f.mul(half, f.add(u, t));
            *hi = f.mul(half, f.sub(u, t));
            w = f.mul(w, root);
        });
    } else {
        izip!(lo, hi, &u, &v).for_each(|(lo, hi, &u, &v)| {
            let t: Elem<T> = f.mul(w, v);
            *lo = f.add(u, t);
            *hi = f.sub(u, t);
            w = f.mul(w, root);
        });
    }
}
