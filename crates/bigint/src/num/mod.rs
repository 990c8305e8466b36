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

//! # `num-traits` integration
//!
//! Implements the generic numeric traits from [`num_traits`] so a `BigInt`
//! can be used wherever code is written against `Num`, `Signed`, or the
//! checked arithmetic traits. Every impl delegates to the inherent API.

use crate::bigint::BigInt;
use crate::error::BigIntError;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, FromPrimitive, Num, One, Pow,
    Signed, ToPrimitive, Zero,
};

impl Zero for BigInt {
    #[inline]
    fn zero() -> Self {
        BigInt::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> Self {
        BigInt::one()
    }
}

impl Num for BigInt {
    type FromStrRadixErr = BigIntError;

    #[inline]
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        BigInt::from_str_radix(str, radix)
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        BigInt::from(BigInt::signum(self))
    }

    #[inline]
    fn is_positive(&self) -> bool {
        BigInt::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(self - v)
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(self * v)
    }
}

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, v: &Self) -> Option<Self> {
        BigInt::checked_div(self, v).ok()
    }
}

impl CheckedRem for BigInt {
    #[inline]
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        BigInt::checked_rem(self, v).ok()
    }
}

impl Pow<u32> for BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, rhs: u32) -> BigInt {
        self.pow_u32(rhs)
    }
}

impl Pow<u32> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, rhs: u32) -> BigInt {
        self.pow_u32(rhs)
    }
}

impl ToPrimitive for BigInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_primitive().ok()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_primitive().ok()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.to_primitive().ok()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.to_primitive().ok()
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInt::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_squares<T: Num + Clone>(values: &[T]) -> T {
        values
            .iter()
            .cloned()
            .fold(T::zero(), |acc, v| acc + v.clone() * v)
    }

    #[test]
    fn test_generic_num_code() {
        let values: Vec<BigInt> = [3_i32, -4, 12].iter().map(|&v| BigInt::from(v)).collect();
        assert_eq!(sum_of_squares(&values), BigInt::from(169_u8));
    }

    #[test]
    fn test_num_from_str_radix() {
        let v = <BigInt as Num>::from_str_radix("-zz", 36).unwrap();
        assert_eq!(v, BigInt::from(-1295_i16));
        assert!(<BigInt as Num>::from_str_radix("12", 1).is_err());
    }

    #[test]
    fn test_signed() {
        let a = BigInt::from(-9_i8);
        assert_eq!(Signed::abs(&a), BigInt::from(9_u8));
        assert_eq!(Signed::signum(&a), BigInt::from(-1_i8));
        assert_eq!(Signed::signum(&BigInt::zero()), BigInt::zero());
        assert_eq!(a.abs_sub(&BigInt::from(-10_i8)), BigInt::one());
        assert_eq!(a.abs_sub(&BigInt::zero()), BigInt::zero());
        assert!(Signed::is_negative(&a));
        assert!(!Signed::is_positive(&BigInt::zero()));
    }

    #[test]
    fn test_checked_traits() {
        let a = BigInt::from(100_u8);
        let b = BigInt::from(7_u8);
        assert_eq!(CheckedAdd::checked_add(&a, &b), Some(BigInt::from(107_u8)));
        assert_eq!(CheckedSub::checked_sub(&b, &a), Some(BigInt::from(-93_i8)));
        assert_eq!(CheckedMul::checked_mul(&a, &b), Some(BigInt::from(700_u16)));
        assert_eq!(CheckedDiv::checked_div(&a, &b), Some(BigInt::from(14_u8)));
        assert_eq!(CheckedRem::checked_rem(&a, &b), Some(BigInt::from(2_u8)));
        assert_eq!(CheckedDiv::checked_div(&a, &BigInt::zero()), None);
        assert_eq!(CheckedRem::checked_rem(&a, &BigInt::zero()), None);
    }

    #[test]
    fn test_pow_trait() {
        let v = BigInt::from(3_u8);
        assert_eq!(Pow::pow(&v, 4_u32), BigInt::from(81_u8));
        assert_eq!(Pow::pow(v, 0_u32), BigInt::one());
    }

    #[test]
    fn test_primitive_traits() {
        let v = BigInt::from_i64(-5).unwrap();
        assert_eq!(v.to_i64(), Some(-5));
        assert_eq!(v.to_u64(), None);
        assert_eq!(v.to_i32(), Some(-5));
        assert_eq!(BigInt::from_u128(u128::MAX).unwrap().to_u128(), Some(u128::MAX));
        assert_eq!((BigInt::from(u128::MAX) + 1_u8).to_u128(), None);
    }
}
