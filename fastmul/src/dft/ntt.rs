use std::sync::{Mutex, PoisonError};

use log::debug;
use once_cell::sync::{Lazy, OnceCell};
use prime_factorization::Factorization;
use utils::map::Map;

use crate::dft::Roots;
use crate::error::Error;
use crate::field::{Field, Prime};
use crate::{FERMAT_LOG_ORDER, FERMAT_Q};

/// Process-wide tables, one per `(q, log_order)`, each built at most once.
static TABLES: Lazy<Mutex<Map<(u64, usize), &'static OnceCell<NttTable>>>> =
    Lazy::new(|| Mutex::new(Map::new()));

/// Roots of unity of order `2, 4, ..., 2^log_order` modulo a prime `q`.
#[derive(Clone, Debug)]
pub struct NttTable {
    prime: Prime,
    generator: u64,
    forward: Vec<u64>,
    backward: Vec<u64>,
    half: u64,
}

impl NttTable {
    /// Builds the table for transforms of length up to `2^log_order` mod `q`.
    ///
    /// Fails if `q` is not an odd prime, if `2^log_order` does not divide
    /// `q - 1`, or if no generator of the multiplicative group exists.
    pub fn new(q: u64, log_order: usize) -> Result<Self, Error> {
        let prime: Prime = check_config(q, log_order)?;
        let generator: u64 = find_generator(&prime)?;

        // psi has order exactly 2^log_order, and so is the generator itself
        // when q - 1 = 2^log_order.
        let psi: u64 = prime.pow(generator, (q - 1) >> log_order);
        let psi_inv: u64 = prime.inv(psi);

        let table: NttTable = Self {
            prime,
            generator,
            forward: squares_down(&prime, psi, log_order),
            backward: squares_down(&prime, psi_inv, log_order),
            half: prime.inv(2),
        };

        debug!(
            "built ntt table: q={} log_order={} generator={} psi={}",
            q, log_order, generator, psi
        );

        Ok(table)
    }

    /// Returns the shared table for `(q, log_order)`, building it on first use.
    ///
    /// Concurrent first callers block until the single build completes.
    /// Invalid `(q, log_order)` pairs are rejected before a slot is registered.
    pub fn cached(q: u64, log_order: usize) -> Result<&'static NttTable, Error> {
        check_config(q, log_order)?;
        let cell: &'static OnceCell<NttTable> = {
            let mut tables = TABLES.lock().unwrap_or_else(PoisonError::into_inner);
            *tables.get_or_insert_with((q, log_order), || &*Box::leak(Box::new(OnceCell::new())))
        };
        cell.get_or_try_init(|| NttTable::new(q, log_order))
    }

    /// Shared table over `2^16 + 1`, transforms up to length `2^16`.
    pub fn fermat() -> Result<&'static NttTable, Error> {
        Self::cached(FERMAT_Q, FERMAT_LOG_ORDER)
    }

    pub fn prime(&self) -> &Prime {
        &self.prime
    }

    pub fn q(&self) -> u64 {
        self.prime.q()
    }

    /// Smallest generator of `(Z/qZ)*`.
    pub fn generator(&self) -> u64 {
        self.generator
    }

    /// `2^-1 mod q`.
    pub fn half(&self) -> u64 {
        self.half
    }
}

impl Roots for NttTable {
    type Field = Prime;

    fn field(&self) -> &Prime {
        &self.prime
    }

    fn log_n_max(&self) -> usize {
        self.forward.len()
    }

    fn forward_root(&self, level: usize) -> u64 {
        self.forward[level]
    }

    fn backward_root(&self, level: usize) -> u64 {
        self.backward[level]
    }

    fn scale(&self) -> u64 {
        self.half
    }
}

/// Checks that `q` is a supported prime and that `2^log_order` divides `q - 1`.
fn check_config(q: u64, log_order: usize) -> Result<Prime, Error> {
    let prime: Prime = Prime::new(q)?;
    if log_order > (q - 1).trailing_zeros() as usize {
        return Err(Error::UnsupportedOrder { q, log_order });
    }
    Ok(prime)
}

/// Returns `t` with `t[len-1] = z` and `t[i] = t[i+1]^2`, so that `t[l]` has
/// order `2^(l+1)` when `z` has order `2^len`.
fn squares_down(prime: &Prime, z: u64, len: usize) -> Vec<u64> {
    let mut t: Vec<u64> = vec![0; len];
    if let Some(last) = t.last_mut() {
        *last = z;
    }
    for i in (0..len.saturating_sub(1)).rev() {
        t[i] = prime.mul(t[i + 1], t[i + 1]);
    }
    t
}

/// Returns the smallest `z` in `[2, q)` of multiplicative order `q - 1`.
///
/// `z` has order `q - 1` iff `z^((q-1)/f) != 1` for every prime `f | q - 1`.
fn find_generator(prime: &Prime) -> Result<u64, Error> {
    let q: u64 = prime.q();
    let phi: u64 = q - 1;

    let factors: Vec<u64> = Factorization::run(phi)
        .prime_factor_repr()
        .iter()
        .map(|&(factor, _)| factor)
        .collect();

    (2..q)
        .find(|&z| factors.iter().all(|&f| prime.pow(z, phi / f) != 1))
        .ok_or(Error::NoGenerator { q })
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{NttTable, TABLES};
    use crate::dft::{DFT, Roots};
    use crate::error::Error;
    use crate::field::Field;
    use crate::{FERMAT_LOG_ORDER, FERMAT_Q};

    #[test]
    fn fermat_table() {
        let table: NttTable = NttTable::new(FERMAT_Q, FERMAT_LOG_ORDER).unwrap();
        assert_eq!(table.generator(), 3);
        assert_eq!(table.log_n_max(), 16);
        assert_eq!(table.forward_root(15), 3);
        assert_eq!(table.forward_root(0), FERMAT_Q - 1);
        assert_eq!(table.backward_root(0), FERMAT_Q - 1);
        assert_eq!(table.half(), 32769);
        assert_eq!(table.prime().mul(table.half(), 2), 1);
    }

    #[test]
    fn roots_have_exact_order() {
        for (q, log_order) in [(FERMAT_Q, FERMAT_LOG_ORDER), (998244353, 23), (12289, 12), (12289, 4)] {
            let table: NttTable = NttTable::new(q, log_order).unwrap();
            let f = table.field();
            for level in 0..log_order {
                let order: u64 = 1 << (level + 1);
                for root in [table.forward_root(level), table.backward_root(level)] {
                    assert_eq!(f.pow(root, order), 1, "q={q} level={level}");
                    assert_ne!(f.pow(root, order >> 1), 1, "q={q} level={level}");
                }
                assert_eq!(f.mul(table.forward_root(level), table.backward_root(level)), 1);
            }
        }
    }

    #[test]
    fn generator_has_full_order() {
        let table: NttTable = NttTable::new(12289, 12).unwrap();
        let f = table.field();
        let g: u64 = table.generator();
        let mut x: u64 = g;
        let mut order: u64 = 1;
        while x != 1 {
            x = f.mul(x, g);
            order += 1;
        }
        assert_eq!(order, 12288);
        // 12288 = 2^12 * 3: every smaller candidate is a square or a cube.
        for z in 2..g {
            assert!(f.pow(z, 12288 / 2) == 1 || f.pow(z, 12288 / 3) == 1, "z={z}");
        }
    }

    #[test]
    fn forward_matches_definition() {
        let table: NttTable = NttTable::new(FERMAT_Q, FERMAT_LOG_ORDER).unwrap();
        let f = table.field();
        let n: usize = 16;
        let a: Vec<u64> = (0..n as u64).map(|i| (i * i + 3) % FERMAT_Q).collect();
        let mut b: Vec<u64> = a.clone();
        table.forward_inplace(&mut b);
        let w: u64 = table.forward_root(3);
        for (k, &bk) in b.iter().enumerate() {
            let expected: u64 = a
                .iter()
                .enumerate()
                .fold(0, |acc, (j, &aj)| f.add(acc, f.mul(aj, f.pow(w, (j * k) as u64))));
            assert_eq!(bk, expected, "k={k}");
        }
    }

    #[test]
    fn round_trip() {
        let table: NttTable = NttTable::new(FERMAT_Q, FERMAT_LOG_ORDER).unwrap();
        for log_n in (0..=10).chain([16]) {
            let n: usize = 1 << log_n;
            let a: Vec<u64> = (0..n as u64).map(|i| (i * 40503 + 17) % FERMAT_Q).collect();
            let mut b: Vec<u64> = a.clone();
            table.forward_inplace(&mut b);
            table.backward_inplace(&mut b);
            assert_eq!(a, b, "n={n}");
        }
    }

    #[test]
    #[should_panic(expected = "table capacity")]
    fn rejects_beyond_capacity() {
        let table: NttTable = NttTable::new(12289, 4).unwrap();
        let mut a: Vec<u64> = vec![1; 32];
        table.forward_inplace(&mut a);
    }

    #[test]
    fn configuration_errors() {
        assert_eq!(NttTable::new(65535, 16).unwrap_err(), Error::NotPrime { q: 65535 });
        assert_eq!(
            NttTable::new(FERMAT_Q, 17).unwrap_err(),
            Error::UnsupportedOrder { q: FERMAT_Q, log_order: 17 }
        );
        assert_eq!(
            NttTable::new(12289, 13).unwrap_err(),
            Error::UnsupportedOrder { q: 12289, log_order: 13 }
        );
        assert!(NttTable::cached(65535, 16).is_err());
    }

    #[test]
    fn invalid_keys_are_not_registered() {
        assert_eq!(NttTable::cached(65535, 16).unwrap_err(), Error::NotPrime { q: 65535 });
        assert_eq!(
            NttTable::cached(FERMAT_Q, 20).unwrap_err(),
            Error::UnsupportedOrder { q: FERMAT_Q, log_order: 20 }
        );
        let tables = TABLES.lock().unwrap();
        assert!(tables.get(&(65535, 16)).is_none());
        assert!(tables.get(&(FERMAT_Q, 20)).is_none());
    }

    #[test]
    fn cached_is_built_once() {
        let handles: Vec<thread::JoinHandle<usize>> = (0..8)
            .map(|_| thread::spawn(|| NttTable::cached(7681, 9).unwrap() as *const NttTable as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
        assert!(std::ptr::eq(NttTable::fermat().unwrap(), NttTable::fermat().unwrap()));
        assert!(!std::ptr::eq(NttTable::cached(7681, 9).unwrap(), NttTable::cached(7681, 8).unwrap()));
    }
}
