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

//! # Logical shifts
//!
//! Shifts move the magnitude by whole bytes (`bits / 8`) plus a bit offset
//! (`bits % 8`) and keep the sign. Right shifts therefore truncate toward zero
//! for negative values: `-5 >> 1` is `-2`.

use crate::bigint::BigInt;
use crate::error::{BigIntError, BigIntResult};
use crate::storage::MAX_CAPACITY;
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

impl BigInt {
    /// Shifts the magnitude left by `bits`.
    ///
    /// The result buffer is sized up front for the significant bytes, the byte
    /// offset, and one more byte if bits spill out of the top byte.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::ShiftOverflow`] if the result would exceed the
    /// largest capacity whose bit length still fits in a `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let v = BigInt::from(-3_i8).checked_shl(9).unwrap();
    /// assert_eq!(v, BigInt::from(-1536_i32));
    /// assert!(BigInt::from(1_u8).checked_shl(usize::MAX).is_err());
    /// ```
    pub fn checked_shl(&self, bits: usize) -> BigIntResult<BigInt> {
        let len = self.significant_byte_count();
        if len == 0 {
            return Ok(BigInt::zero());
        }

        let shamt = (bits % 8) as u32;
        let offset = bits / 8;
        let spill = |b: u8| if shamt == 0 { 0 } else { b >> (8 - shamt) };
        let extra = (spill(self.magnitude[len - 1]) != 0) as usize;

        let capacity = len
            .checked_add(offset)
            .and_then(|n| n.checked_add(extra))
            .and_then(usize::checked_next_power_of_two)
            .filter(|&n| n <= MAX_CAPACITY)
            .ok_or(BigIntError::ShiftOverflow { bits })?;

        let mut result = BigInt::zero();
        result.grow_to(capacity);
        for i in (0..len).rev() {
            let b = self.magnitude[i];
            let high = spill(b);
            if high != 0 {
                result.magnitude[i + offset + 1] |= high;
            }
            result.magnitude[i + offset] |= b << shamt;
        }
        result.negative = self.negative;
        Ok(result)
    }

    fn shift_right(&self, bits: usize) -> BigInt {
        let len = self.significant_byte_count();
        let offset = bits / 8;
        if offset >= len {
            return BigInt::zero();
        }

        let shamt = (bits % 8) as u32;
        let top = self.magnitude[len - 1] >> shamt;
        let needed = len - offset - (top == 0) as usize;
        let mut result = BigInt::zero();
        if needed == 0 {
            return result;
        }

        result.grow_to(needed);
        for i in offset..len {
            let low = self.magnitude[i] >> shamt;
            let high = if shamt != 0 && i + 1 < len {
                self.magnitude[i + 1] << (8 - shamt)
            } else {
                0
            };
            let b = low | high;
            if b != 0 {
                result.magnitude[i - offset] = b;
            }
        }
        result.negative = self.negative;
        result.normalize_sign();
        result
    }
}

/// # Panics
///
/// Panics if the shifted value cannot be represented (see [`BigInt::checked_shl`]).
impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        match self.checked_shl(bits) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, bits: usize) -> BigInt {
        &self << bits
    }
}

impl ShlAssign<usize> for BigInt {
    #[inline]
    fn shl_assign(&mut self, bits: usize) {
        *self = &*self << bits;
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, bits: usize) -> BigInt {
        self.shift_right(bits)
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, bits: usize) -> BigInt {
        self.shift_right(bits)
    }
}

impl ShrAssign<usize> for BigInt {
    #[inline]
    fn shr_assign(&mut self, bits: usize) {
        *self = self.shift_right(bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shl_exact_capacity() {
        let v = BigInt::from(0x81_u8) << 1;
        assert_eq!(v, BigInt::from(0x0102_u16));
        assert_eq!(v.capacity(), 2);

        let v = BigInt::from(0x01_u8) << 16;
        assert_eq!(v, BigInt::from(0x0001_0000_u32));
        assert_eq!(v.capacity(), 4);

        let v = BigInt::from(0x7F_u8) << 1;
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_shl_zero_is_canonical() {
        let v = BigInt::zero() << 1000;
        assert!(v.is_zero());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_shl_overflow_error() {
        let v = BigInt::from(0xFF_u8);
        assert_eq!(
            v.checked_shl(usize::MAX),
            Err(BigIntError::ShiftOverflow { bits: usize::MAX })
        );
    }

    #[test]
    fn test_shr_matches_primitive() {
        let raw: u64 = 0xDEAD_BEEF_1234_5678;
        let v = BigInt::from(raw);
        for bits in 0..70 {
            let expected = if bits >= 64 { 0 } else { raw >> bits };
            assert_eq!(&v >> bits, BigInt::from(expected), "shift by {}", bits);
        }
    }

    #[test]
    fn test_shl_matches_primitive() {
        let raw: u128 = 0xDEAD_BEEF;
        let v = BigInt::from(raw);
        for bits in 0..90 {
            assert_eq!(&v << bits, BigInt::from(raw << bits), "shift by {}", bits);
        }
    }

    #[test]
    fn test_shr_past_end_is_zero() {
        let v = BigInt::from(-0x0100_i32) >> 9;
        assert!(v.is_zero());
        assert!(!v.negative);
        assert!((BigInt::from(5_u8) >> 64).is_zero());
    }

    #[test]
    fn test_shifts_keep_sign() {
        assert_eq!(BigInt::from(-5_i32) >> 1, BigInt::from(-2_i32));
        assert_eq!(BigInt::from(-5_i32) << 3, BigInt::from(-40_i32));
    }

    #[test]
    fn test_shift_round_trip() {
        let v = BigInt::from(-0x0123_4567_89AB_CDEF_i64);
        for bits in [0, 1, 7, 8, 9, 63, 64, 200] {
            assert_eq!((&v << bits) >> bits, v);
        }
    }

    #[test]
    fn test_shift_assign() {
        let mut v = BigInt::from(3_u8);
        v <<= 10;
        assert_eq!(v, BigInt::from(3072_u16));
        v >>= 11;
        assert_eq!(v, BigInt::from(1_u8));
    }
}
