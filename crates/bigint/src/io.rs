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

//! # Stream adapters
//!
//! [`write_bigint`] writes the decimal rendering of a value to any
//! [`std::io::Write`]. [`BigIntReader`] pulls whitespace-delimited integers
//! out of a [`BufRead`] source.
//!
//! Each token is read with [`parse_prefix`]: the leading integer is taken and
//! the rest of the token is discarded. A token without any digits does not
//! surface as an error. Instead the reader enters a sticky *failed* state and every further read yields
//! `Ok(None)` until [`BigIntReader::clear`] is called. Genuine I/O errors are
//! always propagated.
//!
//! ```rust
//! # use bigint::{BigInt, BigIntReader};
//! let mut reader = BigIntReader::new("12 -0x1f oops 7".as_bytes()).radix(0);
//! assert_eq!(reader.next_bigint().unwrap(), Some(BigInt::from(12_u8)));
//! assert_eq!(reader.next_bigint().unwrap(), Some(BigInt::from(-31_i8)));
//! assert_eq!(reader.next_bigint().unwrap(), None);
//! assert!(reader.is_failed());
//! ```

use crate::bigint::BigInt;
use crate::parse::parse_prefix;
use std::io::{self, BufRead, Write};

/// Writes the decimal form of `value` to `w`.
#[inline]
pub fn write_bigint<W: Write>(w: &mut W, value: &BigInt) -> io::Result<()> {
    write!(w, "{}", value)
}

/// Reads whitespace-delimited `BigInt` tokens from a buffered source.
///
/// # Configuration
/// * `radix`: The radix passed to the parser for every token. `0` enables
///   prefix-based detection. Defaults to `10`.
#[derive(Debug)]
pub struct BigIntReader<R> {
    rdr: R,
    buf: String,
    pos: usize,
    radix: u32,
    failed: bool,
    eof: bool,
}

impl<R: BufRead> BigIntReader<R> {
    /// Creates a reader over `rdr` that parses decimal tokens.
    #[inline]
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
            radix: 10,
            failed: false,
            eof: false,
        }
    }

    /// Sets the radix used for every subsequent token.
    #[inline]
    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    /// Returns `true` once a token failed to parse.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Returns `true` once the underlying source is exhausted.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Leaves the failed state so reading can resume after the bad token.
    #[inline]
    pub fn clear(&mut self) {
        self.failed = false;
    }

    /// Consumes the reader, returning the underlying source.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rdr
    }

    /// Refills the line buffer. Returns `Ok(false)` on end of input.
    fn fill_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Returns the byte range of the next token in `buf`, or `None` at end of
    /// input.
    fn next_token(&mut self) -> io::Result<Option<(usize, usize)>> {
        loop {
            let rest = &self.buf[self.pos..];
            let skipped = rest.len() - rest.trim_start().len();
            self.pos += skipped;

            if self.pos < self.buf.len() {
                let rest = &self.buf[self.pos..];
                let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                let start = self.pos;
                self.pos += len;
                return Ok(Some((start, self.pos)));
            }

            if !self.fill_line()? {
                self.eof = true;
                return Ok(None);
            }
        }
    }

    /// Reads and parses the next token.
    ///
    /// Characters after the leading integer of a token are skipped.
    ///
    /// Returns `Ok(None)` at end of input, after a token without digits, and
    /// for every call while the reader is in the failed state.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying reader, including invalid UTF-8.
    pub fn next_bigint(&mut self) -> io::Result<Option<BigInt>> {
        if self.failed {
            return Ok(None);
        }
        let Some((start, end)) = self.next_token()? else {
            return Ok(None);
        };

        let token = &self.buf[start..end];
        match parse_prefix(token, self.radix) {
            Ok((value, _)) => Ok(Some(value)),
            Err(e) => {
                log::debug!("BigIntReader entering failed state: {}", e);
                self.failed = true;
                Ok(None)
            }
        }
    }

    /// Reads the next value into `dest`.
    ///
    /// Returns `Ok(true)` if a value was stored. On failure or end of input
    /// `dest` is left untouched and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying reader.
    pub fn read_into(&mut self, dest: &mut BigInt) -> io::Result<bool> {
        match self.next_bigint()? {
            Some(value) => {
                *dest = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
