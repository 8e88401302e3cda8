//! Render big integers as decimal text.

use crate::bigint::BigInt;
use crate::math::limb::{Limb, BASE_DIGITS};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

#[cfg(feature = "std")]
use crate::error::{Error, Result};
#[cfg(feature = "std")]
use std::io;

/// Decimal digits of a canonical magnitude, without sign.
///
/// The most significant limb is written as is and every other limb is
/// zero-padded to `BASE_DIGITS` digits.
fn format_magnitude(mag: &[Limb]) -> String {
    let mut out = String::with_capacity(mag.len() * BASE_DIGITS);
    let mut buffer = itoa::Buffer::new();
    let (top, rest) = match mag.split_last() {
        Some(split) => split,
        None => return String::from("0"),
    };
    out.push_str(buffer.format(*top));
    for &limb in rest.iter().rev() {
        let digits = buffer.format(limb);
        for _ in digits.len()..BASE_DIGITS {
            out.push('0');
        }
        out.push_str(digits);
    }
    out
}

impl Display for BigInt {
    /// Honors width, fill, alignment, `+` and `0` flags like the primitive
    /// integers do.
    ///
    /// ```
    /// use longint::BigInt;
    ///
    /// let x = BigInt::from(-42);
    /// assert_eq!(format!("{}", x), "-42");
    /// assert_eq!(format!("{:>6}", x), "   -42");
    /// assert_eq!(format!("{:06}", x), "-00042");
    /// assert_eq!(format!("{:+}", BigInt::from(7)), "+7");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = format_magnitude(&self.mag);
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInt({})", self)
    }
}

/// Serialize the given value as a decimal string.
///
/// ```
/// use longint::BigInt;
///
/// assert_eq!(longint::to_string(&BigInt::from(-100_000_001)), "-100000001");
/// ```
pub fn to_string(value: &BigInt) -> String {
    let digits = format_magnitude(&value.mag);
    if value.is_negative() {
        let mut out = String::with_capacity(digits.len() + 1);
        out.push('-');
        out.push_str(&digits);
        out
    } else {
        digits
    }
}

/// Serialize the given value as a decimal byte vector.
pub fn to_vec(value: &BigInt) -> Vec<u8> {
    to_string(value).into_bytes()
}

/// Serialize the given value as decimal text into the IO stream.
///
/// # Errors
///
/// Serialization fails if the writer fails.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[inline]
pub fn to_writer<W>(mut writer: W, value: &BigInt) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(to_string(value).as_bytes())
        .map_err(Error::io)
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    /// Serialized as a decimal string so formats with bounded integers do
    /// not lose precision.
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
