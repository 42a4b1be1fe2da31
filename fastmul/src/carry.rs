//! Carry propagation from raw convolution output to base-`b` digits.

/// Rewrites `digits` (least significant first) so that every entry lies in
/// `[0, base)`, pushing carries left to right in one pass.
///
/// When the most significant entry overflows, the sequence grows by as many
/// digits as its carry needs, so no value is ever dropped.
pub fn normalize(digits: &mut Vec<u64>, base: u64) {
    assert!(base >= 2, "invalid base: {base} < 2");
    let mut i: usize = 0;
    while i < digits.len() {
        if digits[i] >= base {
            let carry: u64 = digits[i] / base;
            digits[i] %= base;
            match digits.get_mut(i + 1) {
                Some(next) => *next += carry,
                None => digits.push(carry),
            }
        }
        i += 1;
    }
}

/// Drops most significant zero digits, keeping at least one digit.
pub fn trim(digits: &mut Vec<u64>) {
    let len: usize = digits.iter().rposition(|&d| d != 0).map_or(1, |i| i + 1);
    digits.truncate(len);
    if digits.is_empty() {
        digits.push(0);
    }
}
