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

//! Equality, total ordering, and hashing.
//!
//! Values are compared byte by byte with missing high bytes treated as zero, so
//! the capacity of either operand never influences the result. A zero
//! magnitude compares equal to zero whatever its sign flag says.

use crate::bigint::BigInt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl BigInt {
    /// Compares the absolute values of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// # use std::cmp::Ordering;
    /// let a = BigInt::from(-300_i32);
    /// let b = BigInt::from(20_u8);
    /// assert_eq!(a.cmp_magnitude(&b), Ordering::Greater);
    /// ```
    #[inline]
    pub fn cmp_magnitude(&self, other: &BigInt) -> Ordering {
        cmp_le_bytes(&self.magnitude, &other.magnitude)
    }
}

/// Compares two little-endian magnitudes of possibly different lengths.
pub(crate) fn cmp_le_bytes(lhs: &[u8], rhs: &[u8]) -> Ordering {
    let len = lhs.len().max(rhs.len());
    for i in (0..len).rev() {
        let l = lhs.get(i).copied().unwrap_or(0);
        let r = rhs.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        let len = self.magnitude.len().max(other.magnitude.len());
        let mut both_zero = true;
        for i in 0..len {
            let (l, r) = (self.byte(i), other.byte(i));
            if l != r {
                return false;
            }
            if l != 0 {
                both_zero = false;
            }
        }
        both_zero || self.negative == other.negative
    }
}

impl Eq for BigInt {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => self.cmp_magnitude(other),
            // lhs < rhs iff -lhs > -rhs
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative().hash(state);
        self.significant_bytes().hash(state);
    }
}

macro_rules! impl_primitive_cmp {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for BigInt {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    *self == BigInt::from(*other)
                }
            }

            impl PartialEq<BigInt> for $t {
                #[inline]
                fn eq(&self, other: &BigInt) -> bool {
                    BigInt::from(*self) == *other
                }
            }

            impl PartialOrd<$t> for BigInt {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.cmp(&BigInt::from(*other)))
                }
            }

            impl PartialOrd<BigInt> for $t {
                #[inline]
                fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                    Some(BigInt::from(*self).cmp(other))
                }
            }
        )*
    };
}

impl_primitive_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
