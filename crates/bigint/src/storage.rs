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

//! Capacity management for the magnitude buffer.
//!
//! The buffer length is the logical capacity of a `BigInt`. It only changes
//! through `grow` (doubling) and `trim` (halving), which keeps it at zero or a
//! power of two.

use crate::bigint::BigInt;

/// Largest capacity in bytes whose bit length is addressable with a `usize`.
pub(crate) const MAX_CAPACITY: usize = 1 << (usize::BITS - 4);

impl BigInt {
    /// Returns the logical capacity of the magnitude buffer in bytes.
    ///
    /// Operations that shrink their result release unused high bytes, so the
    /// capacity follows the value rather than the operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let v = BigInt::from(5_u64);
    /// assert_eq!(v.capacity(), 8);
    /// assert_eq!((v * BigInt::one()).capacity(), 1);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.magnitude.len()
    }

    /// Returns the number of significant bytes: the index of the highest
    /// nonzero byte plus one, or `0` if the magnitude is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// assert_eq!(BigInt::from(0x0100_u32).significant_byte_count(), 2);
    /// assert_eq!(BigInt::from(0_u32).significant_byte_count(), 0);
    /// ```
    #[inline]
    pub fn significant_byte_count(&self) -> usize {
        self.magnitude
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |i| i + 1)
    }

    /// Returns the significant magnitude bytes, least significant first.
    #[inline]
    pub fn significant_bytes(&self) -> &[u8] {
        &self.magnitude[..self.significant_byte_count()]
    }

    /// Doubles the capacity (`0` becomes `1`), zero-filling the new high bytes.
    #[inline]
    pub(crate) fn grow(&mut self) {
        let new_capacity = match self.magnitude.len() {
            0 => 1,
            n => n << 1,
        };
        self.magnitude.resize(new_capacity, 0);
    }

    /// Grows until the capacity is at least `len` bytes.
    #[inline]
    pub(crate) fn grow_to(&mut self, len: usize) {
        while self.magnitude.len() < len {
            self.grow();
        }
    }

    /// Shrinks the capacity to the smallest power of two that still holds every
    /// significant byte and clears the sign if nothing is left.
    pub(crate) fn trim(&mut self) {
        let significant = self.significant_byte_count();
        let mut capacity = self.magnitude.len();
        while capacity != 0 && capacity >= (significant << 1) {
            capacity >>= 1;
        }
        if capacity != self.magnitude.len() {
            log::trace!(
                "trim: capacity {} -> {} ({} significant bytes)",
                self.magnitude.len(),
                capacity,
                significant
            );
            self.magnitude.truncate(capacity);
            self.magnitude.shrink_to_fit();
        }
        if capacity == 0 {
            self.negative = false;
        }
    }

    /// Clears the sign of a zero magnitude.
    #[inline]
    pub(crate) fn normalize_sign(&mut self) {
        if self.negative && self.is_zero() {
            self.negative = false;
        }
    }

    /// Byte at `index`, with positions beyond the buffer reading as zero.
    #[inline(always)]
    pub(crate) fn byte(&self, index: usize) -> u8 {
        self.magnitude.get(index).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_doubles() {
        let mut v = BigInt::zero();
        let mut seen = Vec::new();
        for _ in 0..5 {
            v.grow();
            seen.push(v.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16]);
        assert!(v.is_zero());
    }

    #[test]
    fn test_grow_preserves_low_bytes() {
        let mut v = BigInt::from_le_bytes(false, &[0xAB, 0xCD]);
        v.grow();
        assert_eq!(v.magnitude, vec![0xAB, 0xCD, 0, 0]);
    }

    #[test]
    fn test_grow_to_reaches_power_of_two() {
        let mut v = BigInt::zero();
        v.grow_to(5);
        assert_eq!(v.capacity(), 8);
        v.grow_to(3);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_significant_byte_count() {
        assert_eq!(BigInt::zero().significant_byte_count(), 0);
        assert_eq!(BigInt::from_le_bytes(false, &[0, 0, 0, 0]).significant_byte_count(), 0);
        assert_eq!(BigInt::from_le_bytes(false, &[1, 0, 0, 0]).significant_byte_count(), 1);
        assert_eq!(BigInt::from_le_bytes(false, &[0, 0, 7, 0]).significant_byte_count(), 3);
    }

    #[test]
    fn test_trim_keeps_significant_bytes() {
        let mut v = BigInt::from(0x0001_0000_u64);
        v.trim();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v, BigInt::from(0x0001_0000_u32));
    }

    #[test]
    fn test_trim_exact_power_of_two_is_stable() {
        let mut v = BigInt::from_le_bytes(false, &[1, 2, 3, 4]);
        v.trim();
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_trim_zero_clears_sign() {
        let mut v = BigInt {
            magnitude: vec![0, 0],
            negative: true,
        };
        v.trim();
        assert_eq!(v.capacity(), 0);
        assert!(!v.negative);
    }

    #[test]
    fn test_byte_out_of_range_reads_zero() {
        let v = BigInt::from(0x1234_u16);
        assert_eq!(v.byte(0), 0x34);
        assert_eq!(v.byte(1), 0x12);
        assert_eq!(v.byte(100), 0);
    }
}
