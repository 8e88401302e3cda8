//! Input sources for the decimal deserializer.

use crate::error::Result;
use core::cmp;

#[cfg(feature = "std")]
use crate::error::Error;
#[cfg(feature = "std")]
use crate::iter::LineColIterator;
#[cfg(feature = "std")]
use std::io;

/// Trait used by the deserializer for iterating over input. This is manually
/// "specialized" for iterating over `&[u8]` so that line and column numbers
/// are only computed when an error is reported.
///
/// This trait is sealed and cannot be implemented for types outside of
/// `longint`.
pub trait Read: private::Sealed {
    #[doc(hidden)]
    fn peek(&mut self) -> Result<Option<u8>>;

    /// Only valid after a call to peek(). Discards the peeked byte.
    #[doc(hidden)]
    fn discard(&mut self);

    /// Position of the most recently discarded byte.
    ///
    /// Only called in case of an error, so performance is not important.
    #[doc(hidden)]
    fn position(&self) -> Position;

    /// Position of the most recent call to peek().
    ///
    /// Only called in case of an error, so performance is not important.
    #[doc(hidden)]
    fn peek_position(&self) -> Position;

    /// Offset from the beginning of the input to the next byte that would be
    /// returned by peek().
    #[doc(hidden)]
    fn byte_offset(&self) -> usize;
}

pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Decimal input source that reads from a std::io input stream.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub struct IoRead<R>
where
    R: io::Read,
{
    iter: LineColIterator<io::Bytes<R>>,
    /// Temporary storage of peeked byte.
    ch: Option<u8>,
    /// Line and column of the most recently discarded byte.
    line: usize,
    col: usize,
}

/// Decimal input source that reads from a slice of bytes.
//
// This is more efficient than other iterators because peek() can be read-only
// and we can compute line/col position only if an error happens.
pub struct SliceRead<'a> {
    slice: &'a [u8],
    /// Index of the *next* byte that will be returned by peek().
    index: usize,
}

/// Decimal input source that reads from a UTF-8 string.
pub struct StrRead<'a> {
    delegate: SliceRead<'a>,
}

// Prevent users from implementing the Read trait.
mod private {
    pub trait Sealed {}
}

//////////////////////////////////////////////////////////////////////////////

#[cfg(feature = "std")]
impl<R> IoRead<R>
where
    R: io::Read,
{
    /// Create an input source to read from a std::io input stream.
    ///
    /// When reading from a source against which short reads are not
    /// efficient, such as a [`File`], you will want to apply your own
    /// buffering because longint will not buffer the input. See
    /// [`std::io::BufReader`].
    ///
    /// [`File`]: std::fs::File
    pub fn new(reader: R) -> Self {
        IoRead {
            iter: LineColIterator::new(reader.bytes()),
            ch: None,
            line: 1,
            col: 0,
        }
    }
}

#[cfg(feature = "std")]
impl<R> private::Sealed for IoRead<R> where R: io::Read {}

#[cfg(feature = "std")]
impl<R> Read for IoRead<R>
where
    R: io::Read,
{
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        match self.ch {
            Some(ch) => Ok(Some(ch)),
            None => match self.iter.next() {
                Some(Err(err)) => Err(Error::io(err)),
                Some(Ok(ch)) => {
                    self.ch = Some(ch);
                    Ok(self.ch)
                }
                None => Ok(None),
            },
        }
    }

    #[inline]
    fn discard(&mut self) {
        self.ch = None;
        // The LineColIterator already counted the peeked byte.
        self.line = self.iter.line();
        self.col = self.iter.col();
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.col,
        }
    }

    fn peek_position(&self) -> Position {
        // The LineColIterator updates its position during peek() so it has the
        // right one here.
        Position {
            line: self.iter.line(),
            column: self.iter.col(),
        }
    }

    fn byte_offset(&self) -> usize {
        match self.ch {
            Some(_) => self.iter.byte_offset() - 1,
            None => self.iter.byte_offset(),
        }
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a> SliceRead<'a> {
    /// Create an input source to read from a slice of bytes.
    pub fn new(slice: &'a [u8]) -> Self {
        SliceRead { slice, index: 0 }
    }

    fn position_of_index(&self, i: usize) -> Position {
        let start_of_line = match memchr::memrchr(b'\n', &self.slice[..i]) {
            Some(position) => position + 1,
            None => 0,
        };
        Position {
            line: 1 + memchr::memchr_iter(b'\n', &self.slice[..start_of_line]).count(),
            column: i - start_of_line,
        }
    }
}

impl<'a> private::Sealed for SliceRead<'a> {}

impl<'a> Read for SliceRead<'a> {
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(if self.index < self.slice.len() {
            Some(self.slice[self.index])
        } else {
            None
        })
    }

    #[inline]
    fn discard(&mut self) {
        self.index += 1;
    }

    fn position(&self) -> Position {
        self.position_of_index(self.index)
    }

    fn peek_position(&self) -> Position {
        // Cap it at slice.len() for a peek that hit the end of the input.
        self.position_of_index(cmp::min(self.slice.len(), self.index + 1))
    }

    fn byte_offset(&self) -> usize {
        self.index
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a> StrRead<'a> {
    /// Create an input source to read from a UTF-8 string.
    pub fn new(s: &'a str) -> Self {
        StrRead {
            delegate: SliceRead::new(s.as_bytes()),
        }
    }
}

impl<'a> private::Sealed for StrRead<'a> {}

impl<'a> Read for StrRead<'a> {
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        self.delegate.peek()
    }

    #[inline]
    fn discard(&mut self) {
        self.delegate.discard();
    }

    fn position(&self) -> Position {
        self.delegate.position()
    }

    fn peek_position(&self) -> Position {
        self.delegate.peek_position()
    }

    fn byte_offset(&self) -> usize {
        self.delegate.byte_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_position_test() {
        let mut read = SliceRead::new(b"12\n 345\n");
        for _ in 0..5 {
            read.discard();
        }
        // The most recently discarded byte is the `3` on line 2.
        let position = read.position();
        assert_eq!((position.line, position.column), (2, 2));
        let position = read.peek_position();
        assert_eq!((position.line, position.column), (2, 3));
        assert_eq!(read.byte_offset(), 5);
    }

    #[test]
    fn slice_end_test() {
        let mut read = StrRead::new("7");
        assert_eq!(read.peek().unwrap(), Some(b'7'));
        read.discard();
        assert_eq!(read.peek().unwrap(), None);
        let position = read.peek_position();
        assert_eq!((position.line, position.column), (1, 1));
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_position_test() {
        let mut read = IoRead::new(&b"1\n23"[..]);
        let mut seen = alloc::vec::Vec::new();
        while let Some(ch) = read.peek().unwrap() {
            seen.push(ch);
            read.discard();
        }
        assert_eq!(seen, b"1\n23");
        let position = read.position();
        assert_eq!((position.line, position.column), (2, 2));
        assert_eq!(read.byte_offset(), 4);
    }
}
