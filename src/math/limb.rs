//! Building-blocks for decimal limb arithmetic.
//!
//! These algorithms assume little-endian order for the limb buffers, so for
//! a `vec![0, 1, 2, 3]`, `3` is the most significant limb, and `0` is the
//! least significant limb. A canonical buffer has no leading zero limb and
//! holds at least one limb; zero is `vec![0]`.

use alloc::vec;
use alloc::vec::Vec;
use core::{cmp, iter};

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is one digit in base `BASE`. Products of two limbs plus carries
/// fit comfortably in `Wide`.
pub(crate) type Limb = u32;

/// Accumulator type for limb products and carries.
pub(crate) type Wide = u64;

/// Radix of the limb representation.
pub(crate) const BASE: Limb = 10_000;

/// Number of decimal digits stored in one limb.
pub(crate) const BASE_DIGITS: usize = 4;

/// Largest limb value, `BASE - 1`.
pub(crate) const MAX_LIMB: Limb = BASE - 1;

// NORMALIZE
// ---------

/// Normalize the buffer by popping any leading zero limbs, keeping one limb.
#[inline]
pub fn normalize(x: &mut Vec<Limb>) {
    while x.len() > 1 && x[x.len() - 1] == 0 {
        x.pop();
    }
    if x.is_empty() {
        x.push(0);
    }
}

/// Check if a normalized buffer is zero.
#[inline]
pub fn is_zero(x: &[Limb]) -> bool {
    x.iter().all(|&xi| xi == 0)
}

/// The buffer for `BASE^n`.
pub fn pow_base(n: usize) -> Vec<Limb> {
    let mut x = vec![0; n + 1];
    x[n] = 1;
    x
}

/// Fold wide coefficients into canonical limbs.
///
/// `coefficients[i]` is weighted by `BASE^i`. Each coefficient may exceed
/// `BASE`; the carry is propagated upward and the buffer grows as needed.
/// Callers keep every coefficient below `Wide::MAX - Wide::MAX / BASE` so
/// adding the incoming carry cannot overflow.
pub fn from_coefficients<I>(coefficients: I) -> Vec<Limb>
where
    I: IntoIterator<Item = Wide>,
{
    let iter = coefficients.into_iter();
    let mut x = Vec::with_capacity(iter.size_hint().0 + 2);
    let mut carry: Wide = 0;
    for c in iter {
        let t = c + carry;
        x.push((t % BASE as Wide) as Limb);
        carry = t / BASE as Wide;
    }
    while carry != 0 {
        x.push((carry % BASE as Wide) as Limb);
        carry /= BASE as Wide;
    }
    normalize(&mut x);
    x
}

// RELATIVE OPERATORS
// ------------------

/// Compare `x` to `y`, in little-endian order.
///
/// Both buffers must be normalized, so that a longer buffer is the larger
/// value.
#[inline]
pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
    if x.len() > y.len() {
        cmp::Ordering::Greater
    } else if x.len() < y.len() {
        cmp::Ordering::Less
    } else {
        let iter = x.iter().rev().zip(y.iter().rev());
        for (&xi, &yi) in iter {
            if xi > yi {
                return cmp::Ordering::Greater;
            } else if xi < yi {
                return cmp::Ordering::Less;
            }
        }
        // Equal case.
        cmp::Ordering::Equal
    }
}

/// Check if x is greater than or equal to y.
#[inline]
pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
    compare(x, y) != cmp::Ordering::Less
}

// ADDITION
// --------

/// Implied AddAssign implementation for limb buffers.
///
/// Adds `y * BASE^xstart` to `x`. The effective x buffer is
/// `xstart..x.len()`; if y is longer, x is zero-extended first.
pub fn iadd_impl(x: &mut Vec<Limb>, y: &[Limb], xstart: usize) {
    if x.len() < y.len() + xstart {
        x.resize(y.len() + xstart, 0);
    }

    // Each step adds at most MAX_LIMB + MAX_LIMB + 1, so the carry is 0 or 1.
    let mut carry = 0;
    for (xi, &yi) in x[xstart..].iter_mut().zip(y.iter()) {
        let sum = *xi + yi + carry;
        carry = (sum >= BASE) as Limb;
        *xi = sum - carry * BASE;
    }

    // Ripple what is left past the end of y.
    let mut index = xstart + y.len();
    while carry != 0 {
        if index == x.len() {
            x.push(carry);
            break;
        }
        let sum = x[index] + carry;
        carry = (sum >= BASE) as Limb;
        x[index] = sum - carry * BASE;
        index += 1;
    }
}

/// AddAssign limb buffer to limb buffer.
#[inline]
pub fn iadd(x: &mut Vec<Limb>, y: &[Limb]) {
    iadd_impl(x, y, 0);
}

/// Add limb buffer to limb buffer.
pub fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut z = Vec::with_capacity(long.len() + 1);
    z.extend_from_slice(long);
    iadd(&mut z, short);
    z
}

// SUBTRACTION
// -----------

/// SubAssign limb buffer to limb buffer.
///
/// Requires `x >= y`. The result is normalized.
pub fn isub(x: &mut Vec<Limb>, y: &[Limb]) {
    debug_assert!(greater_equal(x, y));

    let mut borrow = 0;
    for (xi, &yi) in x.iter_mut().zip(y.iter()) {
        let sub = yi + borrow;
        if *xi >= sub {
            *xi -= sub;
            borrow = 0;
        } else {
            *xi = *xi + BASE - sub;
            borrow = 1;
        }
    }

    let mut index = y.len();
    while borrow != 0 && index < x.len() {
        if x[index] == 0 {
            x[index] = MAX_LIMB;
        } else {
            x[index] -= 1;
            borrow = 0;
        }
        index += 1;
    }
    normalize(x);
}

/// Subtract limb buffer from limb buffer. Requires `x >= y`.
pub fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut z = x.to_vec();
    isub(&mut z, y);
    z
}

// SMALL
// -----

/// MulAssign small integer to limb buffer.
pub fn imul_small(x: &mut Vec<Limb>, y: Limb) {
    // Multiply iteratively over all elements, adding the carry each time.
    let mut carry: Wide = 0;
    for xi in x.iter_mut() {
        let z = *xi as Wide * y as Wide + carry;
        *xi = (z % BASE as Wide) as Limb;
        carry = z / BASE as Wide;
    }

    // A multiplier above BASE can overflow by several limbs.
    while carry != 0 {
        x.push((carry % BASE as Wide) as Limb);
        carry /= BASE as Wide;
    }
    normalize(x);
}

/// DivAssign small integer to limb buffer, returning the remainder.
///
/// Requires `y != 0`.
pub fn idiv_small(x: &mut Vec<Limb>, y: Limb) -> Limb {
    debug_assert!(y != 0);
    let mut rem: Wide = 0;
    for xi in x.iter_mut().rev() {
        let acc = rem * BASE as Wide + *xi as Wide;
        *xi = (acc / y as Wide) as Limb;
        rem = acc % y as Wide;
    }
    normalize(x);
    rem as Limb
}

// SHIFTS
// ------

/// Shift-left `n` limbs, multiplying by `BASE^n`.
///
/// Zero stays a single zero limb.
pub fn ishl_limbs(x: &mut Vec<Limb>, n: usize) {
    if n == 0 || is_zero(x) {
        return;
    }
    let mut shifted = Vec::with_capacity(x.len() + n);
    shifted.extend(iter::repeat(0).take(n));
    shifted.extend_from_slice(x);
    *x = shifted;
}

/// Shift-right `n` limbs, dividing by `BASE^n` and discarding the remainder.
pub fn ishr_limbs(x: &mut Vec<Limb>, n: usize) {
    if n >= x.len() {
        x.clear();
        x.push(0);
    } else {
        x.drain(..n);
        normalize(x);
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_test() {
        let mut x = vec![1, 0, 0];
        normalize(&mut x);
        assert_eq!(x, [1]);

        let mut x = vec![0, 0];
        normalize(&mut x);
        assert_eq!(x, [0]);

        let mut x = Vec::new();
        normalize(&mut x);
        assert_eq!(x, [0]);
    }

    #[test]
    fn compare_test() {
        // Simple
        assert_eq!(compare(&[1], &[2]), cmp::Ordering::Less);
        assert_eq!(compare(&[2], &[2]), cmp::Ordering::Equal);
        assert_eq!(compare(&[3], &[2]), cmp::Ordering::Greater);

        // Length wins over the top limb.
        assert_eq!(compare(&[5, 1], &[9999]), cmp::Ordering::Greater);

        // Most significant limb decides first.
        assert_eq!(compare(&[0, 1, 9], &[9999, 0, 9]), cmp::Ordering::Greater);
        assert_eq!(compare(&[9999, 0, 9], &[0, 1, 9]), cmp::Ordering::Less);
    }

    #[test]
    fn add_test() {
        // Carry into a new limb.
        assert_eq!(add(&[9999], &[1]), [0, 1]);

        // Carry ripples past the shorter operand.
        assert_eq!(add(&[9999, 9999, 9999], &[1]), [0, 0, 0, 1]);

        // Operand order does not matter.
        assert_eq!(add(&[1], &[9999, 9999]), [0, 0, 1]);

        // Offset add.
        let mut x = vec![5];
        iadd_impl(&mut x, &[7, 9999], 2);
        assert_eq!(x, [5, 0, 7, 9999]);

        let mut x = vec![0, 0, 9999];
        iadd_impl(&mut x, &[1], 2);
        assert_eq!(x, [0, 0, 0, 1]);
    }

    #[test]
    fn sub_test() {
        assert_eq!(sub(&[0, 1], &[1]), [9999]);
        assert_eq!(sub(&[0, 0, 0, 1], &[1]), [9999, 9999, 9999]);
        assert_eq!(sub(&[1234, 5678], &[1234, 5678]), [0]);
        assert_eq!(sub(&[5, 3], &[7, 2]), [9998]);
    }

    #[test]
    fn small_test() {
        let mut x = vec![5000];
        imul_small(&mut x, 2);
        assert_eq!(x, [0, 1]);

        // Multiplier larger than the base.
        let mut x = vec![9999];
        imul_small(&mut x, 123_456_789);
        assert_eq!(from_coefficients([9999 * 123_456_789]), x);

        let mut x = vec![1234];
        imul_small(&mut x, 0);
        assert_eq!(x, [0]);

        let mut x = vec![0, 0, 1];
        assert_eq!(idiv_small(&mut x, 3), 1);
        assert_eq!(x, [3333, 3333]);

        let mut x = vec![7];
        assert_eq!(idiv_small(&mut x, 9), 7);
        assert_eq!(x, [0]);
    }

    #[test]
    fn shift_test() {
        let mut x = vec![12, 34];
        ishl_limbs(&mut x, 2);
        assert_eq!(x, [0, 0, 12, 34]);
        ishr_limbs(&mut x, 3);
        assert_eq!(x, [34]);
        ishr_limbs(&mut x, 1);
        assert_eq!(x, [0]);

        let mut zero = vec![0];
        ishl_limbs(&mut zero, 5);
        assert_eq!(zero, [0]);

        // Dropping the low limbs can expose leading zeros.
        let mut x = vec![1, 0, 0];
        ishr_limbs(&mut x, 1);
        assert_eq!(x, [0]);
    }

    #[test]
    fn coefficients_test() {
        assert_eq!(from_coefficients([12_345, 0]), [2345, 1]);
        assert_eq!(from_coefficients([99_980_001, 99_980_001]), [1, 9999, 9998]);
        assert_eq!(from_coefficients([0, 0, 0]), [0]);
        assert_eq!(pow_base(2), [0, 0, 1]);
    }
}
