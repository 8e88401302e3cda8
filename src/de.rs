//! Parse big integers from decimal text.

use crate::bigint::{BigInt, Sign};
use crate::error::{Error, ErrorCode, Result};
use crate::math::limb::{self, Limb, BASE_DIGITS};
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::str::FromStr;

#[cfg(feature = "std")]
use std::io;

pub use crate::read::{Read, SliceRead, StrRead};

#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::read::IoRead;

//////////////////////////////////////////////////////////////////////////////

/// A structure that reads whitespace separated decimal integers from some
/// input.
pub struct Deserializer<R> {
    read: R,
    scratch: Vec<u8>,
}

impl<R> Deserializer<R>
where
    R: Read,
{
    /// Create a decimal deserializer from one of the possible longint input
    /// sources.
    ///
    /// Typically it is more convenient to use one of these methods instead:
    ///
    ///   - Deserializer::from_str
    ///   - Deserializer::from_slice
    ///   - Deserializer::from_reader
    pub fn new(read: R) -> Self {
        Deserializer {
            read,
            scratch: Vec::new(),
        }
    }
}

#[cfg(feature = "std")]
impl<R> Deserializer<IoRead<R>>
where
    R: io::Read,
{
    /// Creates a decimal deserializer from an `io::Read`.
    ///
    /// Bytes are pulled from the reader one at a time, so wrap unbuffered
    /// sources in a [`std::io::BufReader`].
    pub fn from_reader(reader: R) -> Self {
        Deserializer::new(IoRead::new(reader))
    }
}

impl<'a> Deserializer<SliceRead<'a>> {
    /// Creates a decimal deserializer from a `&[u8]`.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Deserializer::new(SliceRead::new(bytes))
    }
}

impl<'a> Deserializer<StrRead<'a>> {
    /// Creates a decimal deserializer from a `&str`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Deserializer::new(StrRead::new(s))
    }
}

impl<R: Read> Deserializer<R> {
    /// The `Deserializer::end` method should be called after a value has been
    /// fully deserialized. This allows the `Deserializer` to validate that
    /// the input stream is at the end or that it only has trailing
    /// whitespace.
    pub fn end(&mut self) -> Result<()> {
        match tri!(self.parse_whitespace()) {
            Some(_) => Err(self.peek_error(ErrorCode::TrailingCharacters)),
            None => Ok(()),
        }
    }

    /// Turn a decimal deserializer into an iterator over values.
    #[allow(clippy::should_implement_trait)]
    pub fn into_iter(self) -> StreamDeserializer<R> {
        StreamDeserializer {
            de: self,
            offset: 0,
            failed: false,
        }
    }

    /// Parse the next whitespace delimited integer, skipping leading
    /// whitespace.
    ///
    /// ```
    /// use longint::Deserializer;
    ///
    /// let mut de = Deserializer::from_str("  -15 x");
    /// assert_eq!(de.parse().unwrap().to_string(), "-15");
    /// assert!(de.end().unwrap_err().is_syntax());
    /// ```
    pub fn parse(&mut self) -> Result<BigInt> {
        let peek = match tri!(self.parse_whitespace()) {
            Some(b) => b,
            None => {
                return Err(self.peek_error(ErrorCode::EofWhileParsingNumber));
            }
        };

        let sign = if peek == b'-' {
            self.read.discard();
            Sign::Negative
        } else {
            Sign::Positive
        };

        self.scratch.clear();
        loop {
            match tri!(self.read.peek()) {
                Some(c @ b'0'..=b'9') => {
                    self.scratch.push(c);
                    self.read.discard();
                }
                Some(c) if !is_whitespace(c) => {
                    self.read.discard();
                    return Err(self.error(ErrorCode::InvalidDigit));
                }
                _ => break,
            }
        }

        if self.scratch.is_empty() {
            return Err(self.error(ErrorCode::EmptyNumber));
        }
        Ok(BigInt::from_parts(sign, pack_digits(&self.scratch)))
    }

    /// Error caused by the most recently discarded byte.
    #[cold]
    fn error(&self, reason: ErrorCode) -> Error {
        let position = self.read.position();
        Error::syntax(reason, position.line, position.column)
    }

    /// Error caused by a byte from peek().
    #[cold]
    fn peek_error(&self, reason: ErrorCode) -> Error {
        let position = self.read.peek_position();
        Error::syntax(reason, position.line, position.column)
    }

    /// Returns the first non-whitespace byte without consuming it, or `None`
    /// if EOF is encountered.
    fn parse_whitespace(&mut self) -> Result<Option<u8>> {
        loop {
            match tri!(self.read.peek()) {
                Some(c) if is_whitespace(c) => {
                    self.read.discard();
                }
                other => {
                    return Ok(other);
                }
            }
        }
    }
}

#[inline]
fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Pack ASCII digits, most significant first, into canonical limbs.
///
/// Leading zeros are dropped and an empty input is zero.
fn pack_digits(digits: &[u8]) -> Vec<Limb> {
    let mut mag = Vec::with_capacity(digits.len() / BASE_DIGITS + 1);
    for chunk in digits.rchunks(BASE_DIGITS) {
        mag.push(
            chunk
                .iter()
                .fold(0, |acc, &d| acc * 10 + (d - b'0') as Limb),
        );
    }
    limb::normalize(&mut mag);
    mag
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse a single decimal integer.
    ///
    /// The whole string must be an optional `-` followed by at least one
    /// ASCII digit. Surrounding whitespace is rejected; use
    /// [`longint::from_str`](crate::from_str) to allow it.
    fn from_str(s: &str) -> Result<BigInt> {
        let bytes = s.as_bytes();
        let (sign, digits) = match bytes.split_first() {
            Some((b'-', rest)) => (Sign::Negative, rest),
            _ => (Sign::Positive, bytes),
        };
        if digits.is_empty() {
            return Err(Error::syntax(ErrorCode::EmptyNumber, 1, bytes.len()));
        }
        if let Some(index) = digits.iter().position(|b| !b.is_ascii_digit()) {
            let column = bytes.len() - digits.len() + index + 1;
            return Err(Error::syntax(ErrorCode::InvalidDigit, 1, column));
        }
        Ok(BigInt::from_parts(sign, pack_digits(digits)))
    }
}

//////////////////////////////////////////////////////////////////////////////

/// Iterator that parses a stream of whitespace separated integers.
///
/// A stream deserializer can be created from any longint deserializer using
/// the `Deserializer::into_iter` method.
///
/// ```
/// use longint::{BigInt, Deserializer};
///
/// let data = "1 -22\n333";
/// let mut stream = Deserializer::from_str(data).into_iter();
/// assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(1));
/// assert_eq!(stream.byte_offset(), 1);
/// assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(-22));
/// assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(333));
/// assert!(stream.next().is_none());
/// ```
///
/// After an error is returned the iterator yields `None`.
pub struct StreamDeserializer<R> {
    de: Deserializer<R>,
    offset: usize,
    failed: bool,
}

impl<R> StreamDeserializer<R>
where
    R: Read,
{
    /// Create a stream deserializer from one of the possible longint input
    /// sources.
    ///
    /// Typically it is more convenient to use one of these methods instead:
    ///
    ///   - Deserializer::from_str(...).into_iter()
    ///   - Deserializer::from_slice(...).into_iter()
    ///   - Deserializer::from_reader(...).into_iter()
    pub fn new(read: R) -> Self {
        Deserializer::new(read).into_iter()
    }

    /// Returns the number of bytes so far deserialized into a successful
    /// `BigInt`.
    ///
    /// If the stream deserializer returns an error, this is the byte offset
    /// just past the last value that was parsed successfully, which lets the
    /// caller resume or report where the bad input starts.
    ///
    /// ```
    /// use longint::Deserializer;
    ///
    /// let data = "10 20 2x";
    /// let mut stream = Deserializer::from_str(data).into_iter();
    /// assert!(stream.next().unwrap().is_ok());
    /// assert!(stream.next().unwrap().is_ok());
    /// assert_eq!(stream.byte_offset(), 5);
    ///
    /// let err = stream.next().unwrap().unwrap_err();
    /// assert_eq!(err.column(), 8);
    /// assert_eq!(stream.byte_offset(), 5);
    /// ```
    pub fn byte_offset(&self) -> usize {
        self.offset
    }
}

impl<R> Iterator for StreamDeserializer<R>
where
    R: Read,
{
    type Item = Result<BigInt>;

    fn next(&mut self) -> Option<Result<BigInt>> {
        if self.failed {
            return None;
        }

        // Skip whitespace so that a stream ending in whitespace ends cleanly.
        match self.de.parse_whitespace() {
            Ok(None) => {
                self.offset = self.de.read.byte_offset();
                None
            }
            Ok(Some(_)) => match self.de.parse() {
                Ok(value) => {
                    self.offset = self.de.read.byte_offset();
                    Some(Ok(value))
                }
                Err(err) => {
                    self.failed = true;
                    Some(Err(err))
                }
            },
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<R> FusedIterator for StreamDeserializer<R> where R: Read {}

//////////////////////////////////////////////////////////////////////////////

fn from_trait<R>(read: R) -> Result<BigInt>
where
    R: Read,
{
    let mut de = Deserializer::new(read);
    let value = tri!(de.parse());

    // Make sure the whole stream has been consumed.
    tri!(de.end());
    Ok(value)
}

/// Parse a single integer from an IO stream.
///
/// Leading and trailing whitespace is skipped. Anything else after the
/// number is an error.
///
/// The content of the IO stream is read one byte at a time. When reading
/// from a source against which short reads are not efficient, such as a
/// [`File`], you will want to apply your own buffering, for example with
/// [`std::io::BufReader`].
///
/// [`File`]: std::fs::File
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let reader = Cursor::new(b"\n 123456789012345678901234567890 \n");
/// let value = longint::from_reader(reader).unwrap();
/// assert_eq!(value.to_string(), "123456789012345678901234567890");
/// ```
///
/// # Errors
///
/// This fails if the input is not exactly one decimal integer surrounded by
/// optional whitespace, or if the reader fails.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn from_reader<R>(rdr: R) -> Result<BigInt>
where
    R: io::Read,
{
    from_trait(IoRead::new(rdr))
}

/// Parse a single integer from bytes, allowing surrounding whitespace.
///
/// # Example
///
/// ```
/// let value = longint::from_slice(b"  -0042\t").unwrap();
/// assert_eq!(value.to_string(), "-42");
/// ```
///
/// # Errors
///
/// This fails if the input is not exactly one decimal integer surrounded by
/// optional whitespace.
pub fn from_slice(v: &[u8]) -> Result<BigInt> {
    from_trait(SliceRead::new(v))
}

/// Parse a single integer from a string, allowing surrounding whitespace.
///
/// # Example
///
/// ```
/// let err = longint::from_str("12 13").unwrap_err();
/// assert_eq!(err.to_string(), "trailing characters at line 1 column 4");
/// ```
///
/// # Errors
///
/// This fails if the input is not exactly one decimal integer surrounded by
/// optional whitespace.
pub fn from_str(s: &str) -> Result<BigInt> {
    from_trait(StrRead::new(s))
}

//////////////////////////////////////////////////////////////////////////////

#[cfg(feature = "serde")]
mod serde_impl {
    use crate::bigint::BigInt;
    use core::fmt;
    use serde::de::{self, Deserialize, Deserializer, Visitor};

    struct BigIntVisitor;

    impl<'de> Visitor<'de> for BigIntVisitor {
        type Value = BigInt;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<BigInt, E> {
            Ok(BigInt::from(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<BigInt, E> {
            Ok(BigInt::from(value))
        }

        fn visit_i128<E>(self, value: i128) -> Result<BigInt, E> {
            Ok(BigInt::from(value))
        }

        fn visit_u128<E>(self, value: u128) -> Result<BigInt, E> {
            Ok(BigInt::from(value))
        }

        fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
        where
            E: de::Error,
        {
            value.parse().map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for BigInt {
        /// Accepts a decimal string or any integer the format produces.
        fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(BigIntVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_digits_test() {
        assert_eq!(pack_digits(b"0"), [0]);
        assert_eq!(pack_digits(b"0000"), [0]);
        assert_eq!(pack_digits(b"12345"), [2345, 1]);
        assert_eq!(pack_digits(b"00012345"), [2345, 1]);
        assert_eq!(pack_digits(b"10000"), [0, 1]);
        assert_eq!(pack_digits(b""), [0]);
    }

    #[test]
    fn whitespace_test() {
        for c in [b' ', b'\t', b'\n', b'\r', 0x0B, 0x0C] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace(b'0'));
        assert!(!is_whitespace(0));
    }

    #[test]
    fn from_str_columns_test() {
        let err = "12a4".parse::<BigInt>().unwrap_err();
        assert_eq!((err.line(), err.column()), (1, 3));
        let err = "-x".parse::<BigInt>().unwrap_err();
        assert_eq!(err.code(), &ErrorCode::InvalidDigit);
        assert_eq!(err.column(), 2);
        let err = "-".parse::<BigInt>().unwrap_err();
        assert_eq!(err.code(), &ErrorCode::EmptyNumber);
        assert_eq!(err.column(), 1);
    }

    #[test]
    fn parse_positions_test() {
        let mut de = Deserializer::from_str("1\n  -3z");
        assert_eq!(de.parse().unwrap(), BigInt::from(1));
        let err = de.parse().unwrap_err();
        assert_eq!(err.code(), &ErrorCode::InvalidDigit);
        assert_eq!((err.line(), err.column()), (2, 5));

        let mut de = Deserializer::from_str("  - 5");
        let err = de.parse().unwrap_err();
        assert_eq!(err.code(), &ErrorCode::EmptyNumber);
        assert_eq!((err.line(), err.column()), (1, 3));
    }
}
