use std::fmt;
use std::str::FromStr;

use crate::BASE;
use crate::carry::{normalize, trim};
use crate::convolution::{multiply_many, padded_len};
use crate::dft::{NttTable, Roots};
use crate::error::Error;

/// Non-negative integer stored as base-10 digits, least significant first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Integer {
    limbs: Vec<u64>,
}

impl Integer {
    /// Panics if a limb is not a base-10 digit.
    pub fn from_limbs(mut limbs: Vec<u64>) -> Self {
        assert!(limbs.iter().all(|&d| d < BASE), "invalid limbs: digit >= {BASE}");
        trim(&mut limbs);
        Self { limbs }
    }

    /// Digits, least significant first, without high zeros.
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    pub fn mul(&self, other: &Integer) -> Result<Integer, Error> {
        Ok(Self::from_limbs(mul_digits(&self.limbs, &other.limbs, BASE)?))
    }

    /// `self * b * c` with one inverse transform instead of two products.
    pub fn mul3(&self, b: &Integer, c: &Integer) -> Result<Integer, Error> {
        Ok(Self::from_limbs(mul3_digits(&self.limbs, &b.limbs, &c.limbs, BASE)?))
    }
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s: &str = s.trim();
        if s.is_empty() {
            return Err(Error::Empty);
        }
        let limbs: Vec<u64> = s
            .char_indices()
            .rev()
            .map(|(index, found)| {
                found
                    .to_digit(BASE as u32)
                    .map(u64::from)
                    .ok_or(Error::InvalidDigit { index, found })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self::from_limbs(limbs))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.limbs.iter().rev().try_for_each(|d| write!(f, "{d}"))
    }
}

/// Multiplies two base-`base` digit sequences over the shared `2^16 + 1` table.
/// The result is carried but keeps its high zeros.
pub fn mul_digits(a: &[u64], b: &[u64], base: u64) -> Result<Vec<u64>, Error> {
    mul_many_digits_with(NttTable::fermat()?, &[a, b], base)
}

/// Three-way version of [`mul_digits`].
pub fn mul3_digits(a: &[u64], b: &[u64], c: &[u64], base: u64) -> Result<Vec<u64>, Error> {
    mul_many_digits_with(NttTable::fermat()?, &[a, b, c], base)
}

/// Multiplies base-`base` digit sequences over `table` and propagates carries.
///
/// Fails if the transform would not fit the table, or if a coefficient of
/// the raw convolution could reach `q` and wrap.
pub fn mul_many_digits_with(table: &NttTable, operands: &[&[u64]], base: u64) -> Result<Vec<u64>, Error> {
    assert!(base >= 2, "invalid base: {base} < 2");
    assert!(
        operands.iter().all(|a| a.iter().all(|&d| d < base)),
        "invalid operand: digit >= {base}"
    );

    let lens: Vec<usize> = operands.iter().map(|a| a.len()).collect();

    let len: usize = padded_len(&lens);
    if len > table.n_max() {
        return Err(Error::TransformTooLarge {
            len,
            max: table.n_max(),
        });
    }

    let bound: u128 = coefficient_bound(&lens, base);
    if bound >= table.q() as u128 {
        return Err(Error::CoefficientOverflow { bound, q: table.q() });
    }

    let mut digits: Vec<u64> = multiply_many(table, operands);
    normalize(&mut digits, base);
    Ok(digits)
}

/// Largest value a raw convolution coefficient can take: at most
/// `(base-1)^m` per term, and a fixed output index is hit by at most the
/// product of all lengths but the largest.
fn coefficient_bound(lens: &[usize], base: u64) -> u128 {
    let largest: usize = lens.iter().copied().enumerate().max_by_key(|&(_, len)| len).map_or(0, |(i, _)| i);
    let terms: u128 = lens
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != largest)
        .fold(1u128, |acc, (_, &len)| acc.saturating_mul(len as u128));
    (0..lens.len()).fold(terms, |acc, _| acc.saturating_mul((base - 1) as u128))
}

#[cfg(test)]
mod tests {
    use super::{Integer, coefficient_bound, mul_digits, mul_many_digits_with, mul3_digits};
    use crate::dft::NttTable;
    use crate::error::Error;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(int("123").limbs(), &[3, 2, 1]);
        assert_eq!(int("00123").to_string(), "123");
        assert_eq!(int(" 0 ").to_string(), "0");
        assert!(int("000").is_zero());
        assert_eq!("".parse::<Integer>(), Err(Error::Empty));
        assert_eq!("12a4".parse::<Integer>(), Err(Error::InvalidDigit { index: 2, found: 'a' }));
        assert_eq!("-1".parse::<Integer>(), Err(Error::InvalidDigit { index: 0, found: '-' }));
    }

    #[test]
    fn scenarios() {
        assert_eq!(int("123").mul(&int("456")).unwrap().to_string(), "56088");
        assert_eq!(int("9999").mul(&int("9999")).unwrap().to_string(), "99980001");
        assert_eq!(int("2").mul3(&int("3"), &int("4")).unwrap().to_string(), "24");
        assert_eq!(int("0").mul(&int("987654321")).unwrap().to_string(), "0");
        assert_eq!(int("1").mul(&int("987654321")).unwrap().to_string(), "987654321");
    }

    #[test]
    fn raw_digits_keep_padding() {
        let digits: Vec<u64> = mul_digits(&[3, 2, 1], &[6, 5, 4], 10).unwrap();
        assert_eq!(digits, vec![8, 8, 0, 6, 5, 0, 0, 0]);
        let digits: Vec<u64> = mul3_digits(&[2], &[3], &[4], 10).unwrap();
        assert_eq!(digits, vec![4, 2, 0, 0]);
    }

    #[test]
    fn other_bases() {
        // 0xff * 0xff = 0xfe01
        let digits: Vec<u64> = mul_digits(&[15, 15], &[15, 15], 16).unwrap();
        assert_eq!(digits, vec![1, 0, 14, 15]);
        // 0b11 * 0b11 = 0b1001
        let digits: Vec<u64> = mul_digits(&[1, 1], &[1, 1], 2).unwrap();
        assert_eq!(digits, vec![1, 0, 0, 1]);
    }

    #[test]
    fn bounds() {
        assert_eq!(coefficient_bound(&[3, 3], 10), 3 * 81);
        assert_eq!(coefficient_bound(&[2, 7, 5], 10), 10 * 729);
        assert_eq!(coefficient_bound(&[0, 7], 10), 0);

        // 810 * 81 = 65610 >= 65537
        let a: Vec<u64> = vec![9; 810];
        assert_eq!(
            mul_digits(&a, &a, 10),
            Err(Error::CoefficientOverflow { bound: 65610, q: 65537 })
        );
        let b: Vec<u64> = vec![9; 809];
        assert!(mul_digits(&b, &b, 10).is_ok());
    }

    #[test]
    fn too_large_for_table() {
        let a: Vec<u64> = vec![1; 40_000];
        let b: Vec<u64> = vec![0; 30_000];
        assert_eq!(
            mul_digits(&a, &b, 10),
            Err(Error::TransformTooLarge { len: 1 << 17, max: 1 << 16 })
        );
    }

    #[test]
    fn larger_prime() {
        let table: &NttTable = NttTable::cached(998244353, 23).unwrap();
        let a: Vec<u64> = vec![9; 5000];
        let digits: Vec<u64> = mul_many_digits_with(table, &[&a, &a], 10).unwrap();
        // (10^5000 - 1)^2 = 10^10000 - 2 * 10^5000 + 1
        let mut expected: Vec<u64> = vec![0; digits.len()];
        expected[0] = 1;
        expected[5000..10000].iter_mut().for_each(|d| *d = 9);
        expected[5000] = 8;
        assert_eq!(digits, expected);
    }
}
