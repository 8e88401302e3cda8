//! # longint
//!
//! Arbitrary precision signed integers.
//!
//! ```edition2021
//! use longint::BigInt;
//!
//! # fn main() -> longint::Result<()> {
//! let a: BigInt = "123456789".parse()?;
//! let b: BigInt = "987654321".parse()?;
//! assert_eq!((a * b).to_string(), "121932631112635269");
//! # Ok(())
//! # }
//! ```
//!
//! # Representation
//!
//! A [`BigInt`] stores its magnitude as a little-endian sequence of decimal
//! limbs in base 10<sup>4</sup> together with a sign. The representation is
//! canonical: there are no leading zero limbs and zero is always positive, so
//! derived equality and hashing agree with numeric equality.
//!
//! # Arithmetic
//!
//! Addition, subtraction and comparison are linear-time limb walks.
//! Multiplication of large operands goes through an exact number-theoretic
//! transform over the prime 7·2<sup>50</sup>+1, so products cost
//! O(n log n) instead of O(n<sup>2</sup>). Division refines an approximate
//! reciprocal of the divisor by Newton iteration, reading only as many
//! divisor limbs as each pass needs, and finishes with a bounded correction
//! step. A division costs a constant number of numerator-sized
//! multiplications.
//!
//! Quotients truncate toward zero and remainders take the sign of the
//! dividend, exactly like Rust's primitive integers:
//!
//! ```edition2021
//! use longint::BigInt;
//!
//! let q = BigInt::from(-7) / BigInt::from(2);
//! let r = BigInt::from(-7) % BigInt::from(2);
//! assert_eq!(q, BigInt::from(-3));
//! assert_eq!(r, BigInt::from(-1));
//! ```
//!
//! The `/` and `%` operators panic on a zero divisor like the primitive
//! types do. Use [`BigInt::div_rem`], [`BigInt::checked_div`] or
//! [`BigInt::checked_rem`] to handle that case without panicking.
//!
//! # Text input
//!
//! Single values are parsed with [`str::parse`], which accepts an optional
//! leading `-` followed by ASCII digits and nothing else. Whitespace separated
//! sequences of values can be read lazily from a string, a byte slice or any
//! [`std::io::Read`] with a [`Deserializer`]:
//!
//! ```edition2021
//! use longint::{BigInt, Deserializer};
//!
//! let data = "12 -34\n56";
//! let stream = Deserializer::from_str(data).into_iter();
//! let values: Vec<BigInt> = stream.collect::<Result<_, _>>().unwrap();
//! assert_eq!(values, [BigInt::from(12), BigInt::from(-34), BigInt::from(56)]);
//! ```
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use longint
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! longint = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/longint/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::many_single_char_names,
    clippy::needless_doctest_main,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl,
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::similar_names,
)]
#![deny(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "std", feature = "alloc")))]
mod features_check;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "serde")]
extern crate serde_core as serde;

// Not public API. Used to early return the error of a fallible expression
// without the overhead of `?`'s `From` conversion.
macro_rules! tri {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}

#[doc(inline)]
pub use crate::bigint::{BigInt, Sign};
#[doc(inline)]
pub use crate::de::{from_slice, from_str, Deserializer, StreamDeserializer};
#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::de::from_reader;
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::ser::{to_string, to_vec};
#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::ser::to_writer;

mod bigint;
pub mod de;
pub mod error;
mod math;
mod ops;
mod read;
pub mod ser;

#[cfg(feature = "std")]
mod iter;
