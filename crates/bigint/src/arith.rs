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

//! # Arithmetic
//!
//! Addition, subtraction, increment/decrement, schoolbook multiplication, and
//! byte-wise long division over sign-magnitude values.
//!
//! The in-place forms (`+=`, `-=`) are the primitive implementations; the
//! binary forms clone the left operand and apply them, so both always agree.
//! Multiplication and division build a fresh value and the compound forms
//! assign it back.
//!
//! Division follows truncating semantics: the quotient is rounded toward zero
//! and the remainder takes the sign of the dividend.

use crate::bigint::BigInt;
use crate::cmp::cmp_le_bytes;
use crate::error::{BigIntError, BigIntResult};
use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

impl BigInt {
    /// Adds `other` to the magnitude, growing as the carry moves past the end.
    pub(crate) fn add_magnitude(&mut self, other: &[u8]) {
        let mut carry = 0u16;
        let mut i = 0;
        while i < other.len() || carry != 0 {
            if i == self.capacity() {
                self.grow();
            }
            let sum = self.magnitude[i] as u16 + other.get(i).copied().unwrap_or(0) as u16 + carry;
            self.magnitude[i] = sum as u8;
            carry = sum >> 8;
            i += 1;
        }
    }

    /// Subtracts `other` from the magnitude. Requires `|self| >= |other|`.
    fn sub_magnitude(&mut self, other: &[u8]) {
        let mut borrow = false;
        let mut i = 0;
        while i < other.len() || borrow {
            let (d, b1) = self.magnitude[i].overflowing_sub(other.get(i).copied().unwrap_or(0));
            let (d, b2) = d.overflowing_sub(borrow as u8);
            self.magnitude[i] = d;
            borrow = b1 || b2;
            i += 1;
        }
    }

    /// Replaces the magnitude with `other - self`. Requires `|other| > |self|`.
    fn sub_from_magnitude(&mut self, other: &[u8]) {
        let mut borrow = false;
        for (i, &l) in other.iter().enumerate() {
            if i == self.capacity() {
                self.grow();
            }
            let (d, b1) = l.overflowing_sub(self.magnitude[i]);
            let (d, b2) = d.overflowing_sub(borrow as u8);
            self.magnitude[i] = d;
            borrow = b1 || b2;
        }
        debug_assert!(!borrow, "`sub_from_magnitude` called with |other| <= |self|");
    }

    /// Adds a value given as significant magnitude bytes and a sign.
    ///
    /// Equal signs add magnitudes. Different signs subtract the smaller
    /// magnitude from the larger and take the sign of the larger operand.
    fn add_signed(&mut self, other: &[u8], other_negative: bool) {
        if self.negative == other_negative {
            self.add_magnitude(other);
        } else if cmp_le_bytes(&self.magnitude, other) == Ordering::Less {
            self.sub_from_magnitude(other);
            self.negative = other_negative;
        } else {
            self.sub_magnitude(other);
        }
        self.normalize_sign();
    }

    /// Adds one in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let mut v = BigInt::from(255_u8);
    /// v.increment();
    /// assert_eq!(v, BigInt::from(256_u16));
    /// assert_eq!(v.capacity(), 2);
    /// ```
    pub fn increment(&mut self) {
        if self.negative {
            self.negative = false;
            self.decrement();
            self.negative = !self.negative;
            self.normalize_sign();
            return;
        }

        let mut i = 0;
        loop {
            if i == self.capacity() {
                self.grow();
            }
            self.magnitude[i] = self.magnitude[i].wrapping_add(1);
            if self.magnitude[i] != 0 {
                break;
            }
            i += 1;
        }
    }

    /// Subtracts one in place. Decrementing zero yields `-1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let mut v = BigInt::zero();
    /// v.decrement();
    /// assert_eq!(v, BigInt::from(-1_i8));
    /// ```
    pub fn decrement(&mut self) {
        if self.negative {
            self.negative = false;
            self.increment();
            self.negative = !self.negative;
            return;
        }

        match self.magnitude.iter().position(|&b| b != 0) {
            Some(i) => {
                for b in &mut self.magnitude[..=i] {
                    *b = b.wrapping_sub(1);
                }
            }
            None => {
                if self.capacity() == 0 {
                    self.grow();
                }
                self.magnitude[0] = 0x01;
                self.negative = true;
            }
        }
    }

    /// Schoolbook multiplication: one partial product line per byte of `self`,
    /// each accumulated into the running result at its byte offset.
    fn multiply(&self, rhs: &BigInt) -> BigInt {
        let lhs_bytes = self.significant_bytes();
        let rhs_bytes = rhs.significant_bytes();
        let mut result = BigInt::zero();
        if lhs_bytes.is_empty() || rhs_bytes.is_empty() {
            return result;
        }

        let mut line: Vec<u8> = Vec::with_capacity(lhs_bytes.len() + rhs_bytes.len() + 1);
        for (i, &l) in lhs_bytes.iter().enumerate() {
            if l == 0 {
                continue;
            }
            line.clear();
            line.resize(i, 0);
            let mut carry = 0u16;
            for &r in rhs_bytes {
                let prod = l as u16 * r as u16 + carry;
                line.push(prod as u8);
                carry = prod >> 8;
            }
            if carry != 0 {
                line.push(carry as u8);
            }
            result.add_magnitude(&line);
        }
        result.negative = self.is_negative() != rhs.is_negative();
        result.trim();
        result
    }

    /// Shifts the magnitude one byte up and stores `byte` in the lowest position.
    fn push_low_byte(&mut self, byte: u8) {
        let len = self.significant_byte_count();
        self.grow_to(len + 1);
        self.magnitude.copy_within(0..len, 1);
        self.magnitude[0] = byte;
    }

    /// Computes quotient and remainder with truncating semantics.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let (q, r) = BigInt::from(-7_i32).checked_div_rem(&BigInt::from(2_u8)).unwrap();
    /// assert_eq!(q, BigInt::from(-3_i8));
    /// assert_eq!(r, BigInt::from(-1_i8));
    /// ```
    pub fn checked_div_rem(&self, divisor: &BigInt) -> BigIntResult<(BigInt, BigInt)> {
        let mut divisor_abs = divisor.abs();
        divisor_abs.trim();
        if divisor_abs.capacity() == 0 {
            return Err(BigIntError::DivisionByZero);
        }

        let len = self.significant_byte_count();
        let mut quotient = BigInt::zero();
        quotient.grow_to(len);
        let mut remainder = BigInt::zero();

        for i in (0..len).rev() {
            remainder.push_low_byte(self.magnitude[i]);
            let mut count = 0u8;
            while remainder >= divisor_abs {
                remainder -= &divisor_abs;
                count += 1;
            }
            quotient.magnitude[i] = count;
        }

        log::trace!(
            "long division: {} dividend bytes by {} divisor bytes",
            len,
            divisor_abs.capacity()
        );

        quotient.negative = self.is_negative() != divisor.is_negative();
        quotient.trim();
        remainder.negative = self.is_negative();
        remainder.trim();
        Ok((quotient, remainder))
    }

    /// Truncating division.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    #[inline]
    pub fn checked_div(&self, divisor: &BigInt) -> BigIntResult<BigInt> {
        self.checked_div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of truncating division; carries the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    #[inline]
    pub fn checked_rem(&self, divisor: &BigInt) -> BigIntResult<BigInt> {
        self.checked_div_rem(divisor).map(|(_, r)| r)
    }
}

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed(rhs.significant_bytes(), rhs.negative);
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_signed(rhs.significant_bytes(), !rhs.negative);
    }
}

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.multiply(rhs);
    }
}

/// # Panics
///
/// Panics if `rhs` is zero.
impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        match self.checked_div(rhs) {
            Ok(q) => *self = q,
            Err(e) => panic!("{}", e),
        }
    }
}

/// # Panics
///
/// Panics if `rhs` is zero.
impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        match self.checked_rem(rhs) {
            Ok(r) => *self = r,
            Err(e) => panic!("{}", e),
        }
    }
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

/// Arithmetic with a primitive right-hand side converts it first.
macro_rules! forward_primitive_binop {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident; $($t:ty),*) => {
        $(
            impl $trait_name<$t> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: $t) -> BigInt {
                    <BigInt as $trait_name<BigInt>>::$method(self, BigInt::from(rhs))
                }
            }

            impl $trait_name<$t> for &BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: $t) -> BigInt {
                    <&BigInt as $trait_name<BigInt>>::$method(self, BigInt::from(rhs))
                }
            }

            impl $assign_trait<$t> for BigInt {
                #[inline]
                fn $assign_method(&mut self, rhs: $t) {
                    <BigInt as $assign_trait<&BigInt>>::$assign_method(self, &BigInt::from(rhs));
                }
            }
        )*
    };
}

macro_rules! forward_primitive_binops {
    ($($t:ty),*) => {
        forward_primitive_binop!(Add, add, AddAssign, add_assign; $($t),*);
        forward_primitive_binop!(Sub, sub, SubAssign, sub_assign; $($t),*);
        forward_primitive_binop!(Mul, mul, MulAssign, mul_assign; $($t),*);
        forward_primitive_binop!(Div, div, DivAssign, div_assign; $($t),*);
        forward_primitive_binop!(Rem, rem, RemAssign, rem_assign; $($t),*);
    };
}

forward_primitive_binops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, v| acc + v)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, v| acc * v)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, v| acc * v)
    }
}
