// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # BigInt
//!
//! Arbitrary-precision signed integers stored in sign-magnitude form over a
//! little-endian byte buffer whose length is always zero or a power of two.
//!
//! ## Modules
//!
//! - `bigint`: The [`BigInt`] value type, canonical zero, and the shared
//!   [`ZERO`] static.
//! - `storage`: Capacity management (`grow`/`trim`) and significant-byte
//!   queries.
//! - `cmp`: Total ordering, equality and hashing, including comparisons
//!   against primitive integers.
//! - `arith`: Addition, subtraction, multiplication and truncating division
//!   with operator impls for owned and borrowed operands.
//! - `bitwise`, `shift`: Sign-magnitude bitwise logic and byte/bit shifts.
//! - `convert`: Conversions to and from every primitive integer width.
//! - `fmt`, `parse`: Decimal, hexadecimal and binary rendering; parsing with
//!   radix auto-detection.
//! - `algorithm`: Exponentiation and factorial.
//! - `io`: Token reader and writer over `std::io` streams.
//! - `num`: `num-traits` integration.
//!
//! ## Example
//!
//! ```rust
//! use bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::from(-987_654_321_i64);
//! let (q, r) = a.checked_div_rem(&b).unwrap();
//! assert_eq!(&q * &b + &r, a);
//! assert_eq!(q.to_string(), "-124999998873437499901");
//! ```
//!
//! ## Errors
//!
//! Fallible operations return [`BigIntResult`]. Operator impls that cannot
//! return a `Result` (`/`, `%`, `<<`) panic with the error's message; use the
//! `checked_*` methods to handle those cases.

#[macro_use]
mod macros;

pub mod algorithm;
pub mod arith;
pub mod bigint;
pub mod bitwise;
pub mod cmp;
pub mod convert;
pub mod error;
pub mod fmt;
pub mod io;
pub mod num;
pub mod parse;
pub mod shift;
pub mod storage;

pub use bigint::{BigInt, ZERO};
pub use convert::FixedWidth;
pub use error::{BigIntError, BigIntResult, ParseBigIntError, ParseErrorKind};
pub use io::{BigIntReader, write_bigint};
pub use parse::parse_prefix;
