//! When parsing a number or dividing goes wrong.

#[cfg(feature = "std")]
use std::io;
use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when parsing,
/// reading or dividing big integers.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// Every `Result<BigInt>` pays for the size of the error type.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `longint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based line number at which the error was detected.
    ///
    /// Characters in the first line of the input (before the first newline
    /// character) are in line 1. Errors that are not tied to a position in
    /// some input, such as division by zero, report line 0.
    pub fn line(&self) -> usize {
        self.err.line
    }

    /// One-based column number at which the error was detected.
    ///
    /// The first character in the input and any characters immediately
    /// following a newline character are in column 1.
    ///
    /// Note that errors may occur in column 0, for example if a read from an
    /// IO stream fails immediately following a previously read newline
    /// character.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Io` - failure to read bytes from an IO stream
    /// - `Category::Syntax` - input that is not a valid decimal integer
    /// - `Category::Eof` - input ended before a number started
    /// - `Category::Domain` - an arithmetic operation outside its domain
    pub fn classify(&self) -> Category {
        match self.err.code {
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::EofWhileParsingNumber => Category::Eof,
            ErrorCode::EmptyNumber | ErrorCode::InvalidDigit | ErrorCode::TrailingCharacters => {
                Category::Syntax
            }
            ErrorCode::DivisionByZero => Category::Domain,
        }
    }

    /// Returns true if this error was caused by a failure to read bytes on
    /// an IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by prematurely reaching the end
    /// of the input data.
    ///
    /// Callers that process streaming input may be interested in retrying
    /// once more data is available.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    /// Returns true if this error was caused by an operation applied outside
    /// its mathematical domain, such as division by zero.
    pub fn is_domain(&self) -> bool {
        self.classify() == Category::Domain
    }
}

/// Categorizes the cause of a `longint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a failure to read bytes from an IO stream.
    Io,

    /// The error was caused by input that was not a valid decimal integer.
    Syntax,

    /// The error was caused by prematurely reaching the end of the input
    /// data.
    Eof,

    /// The error was caused by an operation outside its domain.
    Domain,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `longint::Error` into an `io::Error`.
    ///
    /// Syntax and domain errors are turned into `InvalidData` IO errors.
    /// EOF errors are turned into `UnexpectedEof` IO errors.
    fn from(j: Error) -> Self {
        if let ErrorCode::Io(err) = j.err.code {
            err
        } else {
            match j.classify() {
                Category::Io => unreachable!(),
                Category::Syntax | Category::Domain => {
                    io::Error::new(io::ErrorKind::InvalidData, j)
                }
                Category::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, j),
            }
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    line: usize,
    column: usize,
}

/// This type describes all possible errors that can occur when parsing,
/// reading or dividing big integers.
pub enum ErrorCode {
    /// Some IO error occurred while reading input.
    #[cfg(feature = "std")]
    Io(io::Error),

    /// The input was empty or consisted of a lone `-`.
    EmptyNumber,

    /// A byte other than an ASCII digit appeared in a number.
    InvalidDigit,

    /// Non-whitespace input followed the number.
    TrailingCharacters,

    /// The input ended before any number started.
    EofWhileParsingNumber,

    /// The divisor of a division or remainder was zero.
    DivisionByZero,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => f.write_str("Io"),
            ErrorCode::EmptyNumber => f.write_str("EmptyNumber"),
            ErrorCode::InvalidDigit => f.write_str("InvalidDigit"),
            ErrorCode::TrailingCharacters => f.write_str("TrailingCharacters"),
            ErrorCode::EofWhileParsingNumber => f.write_str("EofWhileParsingNumber"),
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, line: usize, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, line, column }),
        }
    }

    #[cold]
    pub(crate) fn domain(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                line: 0,
                column: 0,
            }),
        }
    }

    #[cfg(feature = "std")]
    #[cold]
    pub(crate) fn io(error: io::Error) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::Io(error),
                line: 0,
                column: 0,
            }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ErrorCode::Io(err) => Display::fmt(err, f),
            ErrorCode::EmptyNumber => f.write_str("empty number"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
            ErrorCode::EofWhileParsingNumber => f.write_str("EOF while parsing a number"),
            ErrorCode::DivisionByZero => f.write_str("attempt to divide by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(
                f,
                "{} at line {} column {}",
                self.code, self.line, self.column
            )
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, line: {}, column: {})",
            self.err.code.to_string(),
            self.err.line,
            self.err.column
        )
    }
}
