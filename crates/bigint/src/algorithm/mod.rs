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

//! # Derived algorithms
//!
//! Exponentiation and factorial, built purely on top of the arithmetic
//! operators.

use crate::bigint::BigInt;
use crate::error::{BigIntError, BigIntResult};

impl BigInt {
    /// Raises `self` to the power `exponent` by binary exponentiation.
    ///
    /// The exponent is consumed one magnitude byte at a time, least
    /// significant bit first. A negative exponent yields zero; anything to
    /// the power zero is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let two = BigInt::from(2_u8);
    /// assert_eq!(two.pow(&BigInt::from(10_u8)).to_string(), "1024");
    /// assert!(two.pow(&BigInt::from(-1_i8)).is_zero());
    /// ```
    pub fn pow(&self, exponent: &BigInt) -> BigInt {
        if exponent.is_negative() {
            return BigInt::zero();
        }

        let bytes = exponent.significant_bytes();
        let mut result = BigInt::one();
        let mut base = self.clone();
        for (i, &byte) in bytes.iter().enumerate() {
            let last_byte = i + 1 == bytes.len();
            for bit in 0..8 {
                if (byte >> bit) & 1 == 1 {
                    result *= &base;
                }
                if last_byte && (byte >> bit) >> 1 == 0 {
                    return result;
                }
                base = &base * &base;
            }
        }
        result
    }

    /// Raises `self` to a small non-negative power.
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// assert_eq!(BigInt::from(-3_i8).pow_u32(3), BigInt::from(-27_i8));
    /// ```
    #[inline]
    pub fn pow_u32(&self, exponent: u32) -> BigInt {
        self.pow(&BigInt::from(exponent))
    }

    /// Computes `n!` as the running product `1 * 2 * ... * n`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::InvalidArgument`] if `n` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// assert_eq!(BigInt::factorial(&BigInt::from(5_u8)).unwrap().to_string(), "120");
    /// assert!(BigInt::factorial(&BigInt::from(-1_i8)).is_err());
    /// ```
    pub fn factorial(n: &BigInt) -> BigIntResult<BigInt> {
        if n.is_negative() {
            return Err(BigIntError::InvalidArgument {
                reason: "factorial of a negative number",
            });
        }

        let mut result = BigInt::one();
        let mut i = BigInt::one();
        while &i <= n {
            result *= &i;
            i.increment();
        }
        Ok(result)
    }
}
