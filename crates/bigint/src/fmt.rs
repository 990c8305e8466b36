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

//! # Textual rendering
//!
//! Decimal output goes through [`std::fmt::Display`], so `to_string()`, width
//! and fill flags all work as they do for the primitive integers. Hexadecimal
//! and binary dumps of the whole buffer are available through
//! [`BigInt::to_hex`] and [`BigInt::to_bin`], and the `{:x}`, `{:X}`, `{:b}`
//! and `{:o}` format specifiers render the magnitude in the usual std style.

use crate::bigint::BigInt;
use std::fmt;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Divides a little-endian magnitude in place by a single-byte divisor and
/// returns the remainder.
fn div_rem_byte(magnitude: &mut [u8], divisor: u8) -> u8 {
    let mut rem = 0u16;
    for byte in magnitude.iter_mut().rev() {
        let cur = (rem << 8) | *byte as u16;
        *byte = (cur / divisor as u16) as u8;
        rem = cur % divisor as u16;
    }
    rem as u8
}

impl BigInt {
    /// Decimal digits of the absolute value, most significant first.
    fn decimal_digits(&self) -> String {
        let mut magnitude = self.to_le_bytes();
        let mut digits = Vec::with_capacity(magnitude.len() * 3 + 1);
        while !magnitude.is_empty() {
            digits.push(b'0' + div_rem_byte(&mut magnitude, 10));
            while magnitude.last() == Some(&0) {
                magnitude.pop();
            }
        }
        if digits.is_empty() {
            digits.push(b'0');
        }
        digits.reverse();
        digits.into_iter().map(char::from).collect()
    }

    /// Renders the absolute value in a power-of-two radix using `bits`
    /// bits per digit, without leading zeros.
    fn pow2_digits(&self, bits: usize, table: &[u8; 16]) -> String {
        let total = self.significant_byte_count() * 8;
        let count = total.div_ceil(bits).max(1);
        let mut out = String::with_capacity(count);
        let mut started = false;
        for d in (0..count).rev() {
            let mut digit = 0usize;
            for b in (0..bits).rev() {
                let bit = d * bits + b;
                digit = (digit << 1) | ((self.byte(bit / 8) >> (bit % 8)) & 1) as usize;
            }
            if digit != 0 || started || d == 0 {
                started = true;
                out.push(table[digit] as char);
            }
        }
        out
    }

    /// Renders the whole buffer in hexadecimal, prefixed with `0x` (`-0x` for
    /// negative values).
    ///
    /// Digits are produced from the most significant allocated byte down. With
    /// `leading_zeros` set, every nibble of the buffer is printed; otherwise
    /// leading zero digits are dropped. At least one digit is always printed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let v = BigInt::from(0x1f_u16);
    /// assert_eq!(v.to_hex(false), "0x1f");
    /// assert_eq!(v.to_hex(true), "0x001f");
    /// assert_eq!((-v).to_hex(false), "-0x1f");
    /// ```
    pub fn to_hex(&self, leading_zeros: bool) -> String {
        let mut out = String::with_capacity(self.capacity() * 2 + 3);
        if self.is_negative() {
            out.push('-');
        }
        out.push_str("0x");
        let start = out.len();
        for &byte in self.magnitude.iter().rev() {
            for nibble in [byte >> 4, byte & 0x0f] {
                if leading_zeros || nibble != 0 || out.len() > start {
                    out.push(DIGITS_LOWER[nibble as usize] as char);
                }
            }
        }
        if out.len() == start {
            out.push('0');
        }
        out
    }

    /// Renders the whole buffer in binary, prefixed with `-` for negative
    /// values.
    ///
    /// Follows the same leading-zero rules as [`BigInt::to_hex`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// assert_eq!(BigInt::from(5_u8).to_bin(true), "00000101");
    /// assert_eq!(BigInt::from(-5_i8).to_bin(false), "-101");
    /// ```
    pub fn to_bin(&self, leading_zeros: bool) -> String {
        let mut out = String::with_capacity(self.capacity() * 8 + 1);
        if self.is_negative() {
            out.push('-');
        }
        let start = out.len();
        for &byte in self.magnitude.iter().rev() {
            for shift in (0..8).rev() {
                let bit = (byte >> shift) & 1;
                if leading_zeros || bit != 0 || out.len() > start {
                    out.push(if bit == 1 { '1' } else { '0' });
                }
            }
        }
        if out.len() == start {
            out.push('0');
        }
        out
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.decimal_digits())
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.pow2_digits(4, DIGITS_LOWER))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.pow2_digits(4, DIGITS_UPPER))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.pow2_digits(1, DIGITS_LOWER))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.pow2_digits(3, DIGITS_LOWER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero() {
        assert_eq!(BigInt::zero().to_string(), "0");
        assert_eq!(BigInt::from(0_i64).to_string(), "0");
    }

    #[test]
    fn test_display_matches_primitive() {
        for v in [1_i128, -1, 9, 10, -255, 256, 65_535, i64::MIN as i128, i128::MIN, i128::MAX] {
            assert_eq!(BigInt::from(v).to_string(), v.to_string());
        }
        assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_display_honours_padding() {
        let v = BigInt::from(-42_i32);
        assert_eq!(format!("{:>6}", v), "   -42");
        assert_eq!(format!("{:06}", v), "-00042");
        assert_eq!(format!("{:+}", BigInt::from(7_u8)), "+7");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(BigInt::zero().to_hex(false), "0x0");
        assert_eq!(BigInt::zero().to_hex(true), "0x0");
        assert_eq!(BigInt::from(0x1f_u8).to_hex(false), "0x1f");
        assert_eq!(BigInt::from(0x1f_u32).to_hex(true), "0x0000001f");
        assert_eq!(BigInt::from(-0xabc_i16).to_hex(false), "-0xabc");
    }

    #[test]
    fn test_to_bin() {
        assert_eq!(BigInt::from(5_u8).to_bin(true), "00000101");
        assert_eq!(BigInt::from(5_u8).to_bin(false), "101");
        assert_eq!(BigInt::zero().to_bin(false), "0");
        assert_eq!(BigInt::from(-2_i16).to_bin(true), "-0000000000000010");
    }

    #[test]
    fn test_format_traits_match_primitive() {
        for v in [0_u64, 1, 7, 8, 0xdead_beef, u64::MAX] {
            let big = BigInt::from(v);
            assert_eq!(format!("{:x}", big), format!("{:x}", v));
            assert_eq!(format!("{:X}", big), format!("{:X}", v));
            assert_eq!(format!("{:b}", big), format!("{:b}", v));
            assert_eq!(format!("{:o}", big), format!("{:o}", v));
            assert_eq!(format!("{:#x}", big), format!("{:#x}", v));
        }
        assert_eq!(format!("{:#x}", BigInt::from(-255_i32)), "-0xff");
    }

    #[test]
    fn test_debug_uses_decimal() {
        assert_eq!(format!("{:?}", BigInt::from(-3_i8)), "BigInt(-3)");
    }
}
