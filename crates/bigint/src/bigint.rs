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

//! # The `BigInt` value type
//!
//! A `BigInt` stores an integer in sign-magnitude form: a `negative` flag and a
//! little-endian byte buffer holding the absolute value. The length of the
//! buffer is the value's *capacity*; it is always zero or a power of two and is
//! only ever changed by the storage routines in `storage`.
//!
//! Zero has a single canonical representation: a zero magnitude is never
//! negative. A process-wide zero is available as the immutable [`ZERO`] static.

use std::ops::Neg;

/// An arbitrary-precision signed integer.
///
/// # Invariants
///
/// - `magnitude.len()` is `0` or a power of two.
/// - If every magnitude byte is zero, `negative` is `false`.
///
/// # Examples
///
/// ```rust
/// # use bigint::BigInt;
/// let a = BigInt::from(-12_i32);
/// let b = BigInt::from(30_u8);
/// assert_eq!((&a + &b).to_string(), "18");
/// assert_eq!((a * b).to_string(), "-360");
/// ```
#[derive(Clone, Default)]
pub struct BigInt {
    pub(crate) magnitude: Vec<u8>,
    pub(crate) negative: bool,
}

/// The shared canonical zero.
///
/// This is a `static`, so there is exactly one instance for the whole process,
/// and it can only ever be observed through shared references.
///
/// ```rust
/// # use bigint::{BigInt, ZERO};
/// assert!(ZERO.is_zero());
/// assert_eq!(BigInt::from(0_u64), ZERO);
/// ```
pub static ZERO: BigInt = BigInt::zero();

impl BigInt {
    /// Creates the canonical zero (capacity `0`, non-negative).
    #[inline]
    pub const fn zero() -> Self {
        Self {
            magnitude: Vec::new(),
            negative: false,
        }
    }

    /// Creates the value `1`.
    #[inline]
    pub fn one() -> Self {
        Self {
            magnitude: vec![1],
            negative: false,
        }
    }

    /// Builds a value from a sign and little-endian magnitude bytes.
    ///
    /// The capacity is the smallest power of two that holds `bytes`. A zero
    /// magnitude yields the canonical zero regardless of `negative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let v = BigInt::from_le_bytes(true, &[0x00, 0x01, 0x02]);
    /// assert_eq!(v.to_string(), "-131328");
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn from_le_bytes(negative: bool, bytes: &[u8]) -> Self {
        let capacity = if bytes.is_empty() {
            0
        } else {
            bytes.len().next_power_of_two()
        };
        let mut magnitude = vec![0u8; capacity];
        magnitude[..bytes.len()].copy_from_slice(bytes);
        let mut value = Self {
            magnitude,
            negative,
        };
        value.normalize_sign();
        value
    }

    /// Returns the significant magnitude bytes, least significant first.
    ///
    /// The returned vector has no trailing zero bytes; zero yields an empty vector.
    #[inline]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.significant_bytes().to_vec()
    }

    /// Returns `true` if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Returns `true` if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.iter().all(|&b| b == 0)
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// assert_eq!(BigInt::from(-7_i8).abs(), BigInt::from(7_u8));
    /// ```
    #[inline]
    pub fn abs(&self) -> BigInt {
        let mut result = self.clone();
        result.negative = false;
        result
    }

    /// Flips the sign in place. Zero stays non-negative.
    #[inline]
    pub fn negate(&mut self) {
        self.negative = !self.negative;
        self.normalize_sign();
    }
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}
