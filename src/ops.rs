//! Operator overloads for `BigInt`.
//!
//! Every binary operator is implemented once on a pair of references and
//! forwarded for the owned combinations and the compound assignment forms.

use crate::bigint::{BigInt, Sign};
use crate::math::limb::{self, Limb};
use crate::math::ntt;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

/// Signed sum of `x_sign * x` and `y_sign * y`.
///
/// | x | y | result                                          |
/// |---|---|-------------------------------------------------|
/// | + | + | `+(x + y)`                                      |
/// | - | - | `-(x + y)`                                      |
/// | + | - | `+(x - y)` if `x >= y`, else `-(y - x)`         |
/// | - | + | `-(x - y)` if `x >= y`, else `+(y - x)`         |
///
/// Subtraction flips the sign of `y` and goes through the same table.
fn signed_add(x_sign: Sign, x: &[Limb], y_sign: Sign, y: &[Limb]) -> BigInt {
    match (x_sign, y_sign) {
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
            BigInt::from_parts(x_sign, limb::add(x, y))
        }
        (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => {
            match limb::compare(x, y) {
                Ordering::Less => BigInt::from_parts(y_sign, limb::sub(y, x)),
                Ordering::Equal | Ordering::Greater => BigInt::from_parts(x_sign, limb::sub(x, y)),
            }
        }
    }
}

fn divide(x: &BigInt, y: &BigInt) -> (BigInt, BigInt) {
    match x.div_rem(y) {
        Ok(result) => result,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        signed_add(self.sign, &self.mag, other.sign, &other.mag)
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        signed_add(self.sign, &self.mag, -other.sign, &other.mag)
    }
}

/// Multiplication goes through the number-theoretic transform once the
/// shorter operand is long enough.
///
/// ```
/// use longint::BigInt;
///
/// let x: BigInt = "-99999999999999999999".parse().unwrap();
/// assert_eq!((&x * &x).to_string(), "9999999999999999999800000000000000000001");
/// assert_eq!(&x * &BigInt::zero(), BigInt::zero());
/// ```
impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        BigInt::from_parts(self.sign * other.sign, ntt::mul(&self.mag, &other.mag))
    }
}

/// Truncating division.
///
/// # Panics
///
/// Panics if the divisor is zero. Use [`BigInt::checked_div`] or
/// [`BigInt::div_rem`] to handle that case.
///
/// ```
/// use longint::BigInt;
///
/// assert_eq!(&BigInt::from(-7) / &BigInt::from(2), BigInt::from(-3));
/// ```
impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn div(self, other: &BigInt) -> BigInt {
        divide(self, other).0
    }
}

/// Remainder with the sign of the dividend.
///
/// # Panics
///
/// Panics if the divisor is zero. Use [`BigInt::checked_rem`] or
/// [`BigInt::div_rem`] to handle that case.
///
/// ```
/// use longint::BigInt;
///
/// assert_eq!(&BigInt::from(-7) % &BigInt::from(2), BigInt::from(-1));
/// ```
impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn rem(self, other: &BigInt) -> BigInt {
        divide(self, other).1
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                $imp::$method(&self, &other)
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: &BigInt) -> BigInt {
                $imp::$method(&self, other)
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                $imp::$method(self, &other)
            }
        }

        impl<'a> $imp_assign<&'a BigInt> for BigInt {
            fn $method_assign(&mut self, other: &BigInt) {
                let result = $imp::$method(&*self, other);
                *self = result;
            }
        }

        impl $imp_assign<BigInt> for BigInt {
            fn $method_assign(&mut self, other: BigInt) {
                let result = $imp::$method(&*self, &other);
                *self = result;
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

/// Multiply by a machine integer.
///
/// ```
/// use longint::BigInt;
///
/// assert_eq!(&BigInt::from(123_456_789) * -1000i64, BigInt::from(-123_456_789_000i64));
/// ```
impl<'a> Mul<i64> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: i64) -> BigInt {
        let mut mag = self.mag.clone();
        let sign = if other < 0 { Sign::Negative } else { Sign::Positive };
        let mut factor = other.unsigned_abs();
        if factor <= Limb::MAX as u64 {
            limb::imul_small(&mut mag, factor as Limb);
        } else {
            let mut digits = Vec::new();
            while factor != 0 {
                digits.push((factor % limb::BASE as u64) as Limb);
                factor /= limb::BASE as u64;
            }
            mag = ntt::mul(&mag, &digits);
        }
        BigInt::from_parts(self.sign * sign, mag)
    }
}

impl Mul<i64> for BigInt {
    type Output = BigInt;

    fn mul(self, other: i64) -> BigInt {
        &self * other
    }
}

impl MulAssign<i64> for BigInt {
    fn mul_assign(&mut self, other: i64) {
        let result = &*self * other;
        *self = result;
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let sign = -self.sign;
        BigInt::from_parts(sign, self.mag)
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(-self.sign, self.mag.clone())
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}
