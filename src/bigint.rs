use crate::error::{Error, ErrorCode, Result};
use crate::math::limb::{self, Limb, BASE};
use crate::math::newton;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Mul, Neg};

/// The sign of a [`BigInt`].
///
/// Zero is always `Positive`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Zero or above.
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// An arbitrary precision signed integer.
///
/// ```
/// use longint::BigInt;
///
/// let x = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
/// assert_eq!(x.to_string(), "340282366920938463426481119284349108225");
/// assert_eq!(-&x + &x, BigInt::zero());
/// ```
///
/// The representation is canonical, so two values compare equal and hash
/// identically exactly when they are numerically equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) mag: Vec<Limb>,
}

impl BigInt {
    /// Build a value from a sign and a possibly non-canonical magnitude.
    ///
    /// Leading zero limbs are stripped and a zero magnitude is made
    /// positive.
    pub(crate) fn from_parts(sign: Sign, mut mag: Vec<Limb>) -> Self {
        limb::normalize(&mut mag);
        let sign = if limb::is_zero(&mag) {
            Sign::Positive
        } else {
            sign
        };
        BigInt { sign, mag }
    }

    /// Zero.
    pub fn zero() -> Self {
        BigInt {
            sign: Sign::Positive,
            mag: vec![0],
        }
    }

    /// One.
    pub fn one() -> Self {
        BigInt {
            sign: Sign::Positive,
            mag: vec![1],
        }
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        limb::is_zero(&self.mag)
    }

    /// Returns true if the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true if the value is strictly above zero.
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    /// The sign of the value. Zero is positive.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    ///
    /// ```
    /// use longint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-42).signum(), BigInt::from(-1));
    /// assert_eq!(BigInt::zero().signum(), BigInt::zero());
    /// ```
    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else {
            BigInt {
                sign: self.sign,
                mag: vec![1],
            }
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Sign::Positive,
            mag: self.mag.clone(),
        }
    }

    /// Number of base 10<sup>4</sup> limbs in the magnitude. Zero has one
    /// limb.
    pub fn num_limbs(&self) -> usize {
        self.mag.len()
    }

    /// Multiply by 10<sup>4k</sup>.
    ///
    /// ```
    /// use longint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-12).shl_limbs(2).to_string(), "-1200000000");
    /// ```
    pub fn shl_limbs(&self, k: usize) -> BigInt {
        let mut mag = self.mag.clone();
        limb::ishl_limbs(&mut mag, k);
        BigInt::from_parts(self.sign, mag)
    }

    /// Divide by 10<sup>4k</sup>, truncating toward zero.
    ///
    /// ```
    /// use longint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-123_456_789).shr_limbs(1).to_string(), "-12345");
    /// assert_eq!(BigInt::from(-9999).shr_limbs(1), BigInt::zero());
    /// ```
    pub fn shr_limbs(&self, k: usize) -> BigInt {
        let mut mag = self.mag.clone();
        limb::ishr_limbs(&mut mag, k);
        BigInt::from_parts(self.sign, mag)
    }

    /// Quotient and remainder of `self / divisor`.
    ///
    /// The quotient is truncated toward zero and the remainder takes the
    /// sign of `self`, so that `quotient * divisor + remainder == self` and
    /// `|remainder| < |divisor|`.
    ///
    /// ```
    /// use longint::BigInt;
    ///
    /// # fn main() -> longint::Result<()> {
    /// let (q, r) = BigInt::from(7).div_rem(&BigInt::from(-2))?;
    /// assert_eq!(q, BigInt::from(-3));
    /// assert_eq!(r, BigInt::from(1));
    ///
    /// let err = BigInt::from(7).div_rem(&BigInt::zero()).unwrap_err();
    /// assert!(err.is_domain());
    /// # Ok(())
    /// # }
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::domain(ErrorCode::DivisionByZero));
        }
        let (quotient, remainder) = newton::div_rem(&self.mag, &divisor.mag);
        Ok((
            BigInt::from_parts(self.sign * divisor.sign, quotient),
            BigInt::from_parts(self.sign, remainder),
        ))
    }

    /// Truncated quotient, or `None` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(quotient, _)| quotient)
    }

    /// Remainder with the sign of `self`, or `None` if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(_, remainder)| remainder)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => limb::compare(&self.mag, &other.mag),
            (Sign::Negative, Sign::Negative) => limb::compare(&other.mag, &self.mag),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn magnitude_of(mut n: u128) -> Vec<Limb> {
    if n == 0 {
        return vec![0];
    }
    let mut mag = Vec::new();
    while n != 0 {
        mag.push((n % BASE as u128) as Limb);
        n /= BASE as u128;
    }
    mag
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(n: $ty) -> Self {
                    BigInt {
                        sign: Sign::Positive,
                        mag: magnitude_of(n as u128),
                    }
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(n: $ty) -> Self {
                    let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                    BigInt::from_parts(sign, magnitude_of(n.unsigned_abs() as u128))
                }
            }
        )*
    };
}

from_unsigned! {
    u8 u16 u32 u64 u128 usize
}

from_signed! {
    i8 i16 i32 i64 i128 isize
}
