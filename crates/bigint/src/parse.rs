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

//! # Parsing
//!
//! [`parse_prefix`] is the low-level parser: it reads the longest valid
//! integer at the start of a string and reports where it stopped, in the
//! manner of C's `strtol`. [`FromStr`] and [`BigInt::from_str_radix`] build on
//! it and reject any trailing input.

use crate::bigint::BigInt;
use crate::error::{BigIntError, BigIntResult, ParseBigIntError, ParseErrorKind};
use std::str::FromStr;

#[inline]
fn is_valid_radix(radix: u32) -> bool {
    radix == 0 || (2..=36).contains(&radix)
}

#[inline]
fn is_hex_prefix(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos) == Some(&b'0') && matches!(bytes.get(pos + 1), Some(b'x' | b'X'))
}

/// Parses an integer from the start of `src`.
///
/// Leading ASCII whitespace is skipped, followed by an optional `+` or `-`.
/// With `radix == 0` the base is detected from the digits: a `0x`/`0X` prefix
/// selects 16, a leading `0` selects 8, anything else 10. Radix 16 also
/// accepts the `0x` prefix; a prefix with no digits after it reads as zero and
/// is consumed whole. Digits `0-9`, `a-z` and `A-Z` are accepted while
/// their value is below the radix.
///
/// Returns the parsed value and the byte offset of the first unconsumed
/// character.
///
/// # Errors
///
/// Returns [`BigIntError::InvalidFormat`] if the radix is not `0` or in
/// `2..=36`, or if no digit could be consumed.
///
/// # Examples
///
/// ```rust
/// # use bigint::parse_prefix;
/// let (v, end) = parse_prefix("  -0x1Fzz", 0).unwrap();
/// assert_eq!(v.to_string(), "-31");
/// assert_eq!(end, 7);
///
/// assert!(parse_prefix("", 10).is_err());
/// ```
pub fn parse_prefix(src: &str, radix: u32) -> BigIntResult<(BigInt, usize)> {
    if !is_valid_radix(radix) {
        log::debug!("rejecting radix {} for input {:?}", radix, src);
        return Err(ParseBigIntError::new(src, ParseErrorKind::InvalidRadix(radix)).into());
    }

    let bytes = src.as_bytes();
    let mut pos = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    // The `0` of a hex prefix counts as a digit, so a bare `0x` reads as zero.
    let mut has_digits = false;
    let radix = match radix {
        0 | 16 if is_hex_prefix(bytes, pos) => {
            pos += 2;
            has_digits = true;
            16
        }
        0 if bytes.get(pos) == Some(&b'0') => 8,
        0 => 10,
        r => r,
    };

    let base = BigInt::from(radix);
    let mut result = BigInt::zero();
    while let Some(digit) = bytes
        .get(pos)
        .and_then(|&b| (b as char).to_digit(36))
        .filter(|&d| d < radix)
    {
        result *= &base;
        result += &BigInt::from(digit);
        pos += 1;
        has_digits = true;
    }

    if !has_digits {
        log::debug!("no digits found in {:?}", src);
        return Err(ParseBigIntError::new(src, ParseErrorKind::NoDigits).into());
    }

    if negative {
        result.negate();
    }
    Ok((result, pos))
}

impl BigInt {
    /// Parses a complete string in the given radix.
    ///
    /// Accepts the same syntax as [`parse_prefix`], but fails if anything
    /// follows the digits.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::InvalidFormat`] for an invalid radix, missing
    /// digits, or trailing characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// assert_eq!(BigInt::from_str_radix("ff", 16).unwrap(), BigInt::from(255_u8));
    /// assert!(BigInt::from_str_radix("ff ", 16).is_err());
    /// ```
    pub fn from_str_radix(src: &str, radix: u32) -> BigIntResult<BigInt> {
        let (value, end) = parse_prefix(src, radix)?;
        if end != src.len() {
            log::debug!("trailing input in {:?} at offset {}", src, end);
            return Err(ParseBigIntError::new(
                src,
                ParseErrorKind::TrailingCharacters { position: end },
            )
            .into());
        }
        Ok(value)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(err: BigIntError) -> ParseErrorKind {
        match err {
            BigIntError::InvalidFormat(e) => e.kind,
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_auto_detect_hex() {
        let (v, end) = parse_prefix("0x1F", 0).unwrap();
        assert_eq!(v.to_hex(false), "0x1f");
        assert_eq!(end, 4);
        assert_eq!(parse_prefix("0X1f", 16).unwrap().0, BigInt::from(31_u8));
    }

    #[test]
    fn test_auto_detect_octal_and_decimal() {
        assert_eq!(parse_prefix("017", 0).unwrap().0, BigInt::from(15_u8));
        assert_eq!(parse_prefix("0", 0).unwrap(), (BigInt::zero(), 1));
        assert_eq!(parse_prefix("19", 0).unwrap().0, BigInt::from(19_u8));
        assert_eq!(parse_prefix("0189", 0).unwrap(), (BigInt::from(1_u8), 2));
    }

    #[test]
    fn test_bare_hex_prefix_reads_zero() {
        assert_eq!(parse_prefix("0x", 0).unwrap(), (BigInt::zero(), 2));
        assert_eq!(parse_prefix("0xg", 16).unwrap(), (BigInt::zero(), 2));
        assert_eq!(parse_prefix(" -0X", 0).unwrap(), (BigInt::zero(), 4));
        assert!(!parse_prefix("-0x", 16).unwrap().0.is_negative());
        assert_eq!(parse_prefix("0x5", 10).unwrap(), (BigInt::zero(), 1));
        assert!("0x".parse::<BigInt>().is_err());
        assert_eq!(BigInt::from_str_radix("0x", 16).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_whitespace_and_sign() {
        assert_eq!(parse_prefix("  -42", 10).unwrap().0.to_string(), "-42");
        assert_eq!(parse_prefix("\t+42", 10).unwrap(), (BigInt::from(42_u8), 4));
        assert_eq!("-0".parse::<BigInt>().unwrap(), BigInt::zero());
        assert!(!"-0".parse::<BigInt>().unwrap().is_negative());
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(kind(parse_prefix("", 10).unwrap_err()), ParseErrorKind::NoDigits);
        assert_eq!(kind(parse_prefix("  -", 0).unwrap_err()), ParseErrorKind::NoDigits);
        assert_eq!(kind(parse_prefix("9", 8).unwrap_err()), ParseErrorKind::NoDigits);
    }

    #[test]
    fn test_invalid_radix() {
        assert_eq!(kind(parse_prefix("1", 1).unwrap_err()), ParseErrorKind::InvalidRadix(1));
        assert_eq!(kind(parse_prefix("1", 37).unwrap_err()), ParseErrorKind::InvalidRadix(37));
    }

    #[test]
    fn test_radix_36() {
        assert_eq!(parse_prefix("zZ", 36).unwrap().0, BigInt::from(35 * 36 + 35_u16));
    }

    #[test]
    fn test_from_str_rejects_trailing() {
        let err = "12ab".parse::<BigInt>().unwrap_err();
        assert_eq!(kind(err), ParseErrorKind::TrailingCharacters { position: 2 });
        assert!(" 12".parse::<BigInt>().is_ok());
    }

    #[test]
    fn test_parse_wide_value() {
        let text = "-340282366920938463463374607431768211456";
        let v: BigInt = text.parse().unwrap();
        assert_eq!(v.to_string(), text);
        assert_eq!(v, -(BigInt::from(u128::MAX) + 1_u8));
    }
}
