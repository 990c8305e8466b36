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

//! # Fixed-width integer conversions
//!
//! One generic pair, [`BigInt::from_primitive`] and [`BigInt::to_primitive`],
//! does all conversion work. The [`FixedWidth`] trait describes each primitive
//! integer type, and the `From`/`TryFrom` impls for every width are generated
//! from it.

use crate::bigint::BigInt;
use crate::error::{BigIntError, BigIntResult};

/// A primitive integer type that can be converted to and from a `BigInt`.
///
/// # Examples
///
/// ```rust
/// # use bigint::convert::FixedWidth;
/// assert_eq!(<i32 as FixedWidth>::BYTES, 4);
/// assert!(<i32 as FixedWidth>::SIGNED);
/// assert_eq!((-5_i8).into_sign_magnitude(), (true, 5));
/// ```
pub trait FixedWidth: Copy {
    /// Width of the type in bytes.
    const BYTES: usize;
    /// Whether the type can hold negative values.
    const SIGNED: bool;
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Splits the value into its sign and absolute value.
    fn into_sign_magnitude(self) -> (bool, u128);

    /// Rebuilds a value from the unsigned round-trip representation: `m` is
    /// the absolute value, or the absolute value minus one when `negative`.
    ///
    /// Callers guarantee that `m` fits in the positive range of the type.
    fn from_round_trip(negative: bool, m: u128) -> Self;
}

macro_rules! impl_fixed_width_signed {
    ($($t:ty),*) => {
        $(
            impl FixedWidth for $t {
                const BYTES: usize = std::mem::size_of::<$t>();
                const SIGNED: bool = true;
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn into_sign_magnitude(self) -> (bool, u128) {
                    (self < 0, (self as i128).unsigned_abs())
                }

                #[inline(always)]
                fn from_round_trip(negative: bool, m: u128) -> Self {
                    let positive = m as $t;
                    if negative { -positive - 1 } else { positive }
                }
            }
        )*
    };
}

macro_rules! impl_fixed_width_unsigned {
    ($($t:ty),*) => {
        $(
            impl FixedWidth for $t {
                const BYTES: usize = std::mem::size_of::<$t>();
                const SIGNED: bool = false;
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn into_sign_magnitude(self) -> (bool, u128) {
                    (false, self as u128)
                }

                #[inline(always)]
                fn from_round_trip(_negative: bool, m: u128) -> Self {
                    m as $t
                }
            }
        )*
    };
}

impl_fixed_width_signed!(i8, i16, i32, i64, i128, isize);
impl_fixed_width_unsigned!(u8, u16, u32, u64, u128, usize);

impl BigInt {
    /// Creates a value from any primitive integer. The capacity equals the
    /// width of `T` in bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::BigInt;
    /// let v = BigInt::from_primitive(i16::MIN);
    /// assert_eq!(v.capacity(), 2);
    /// assert_eq!(v.to_string(), "-32768");
    /// ```
    pub fn from_primitive<T: FixedWidth>(value: T) -> Self {
        let (negative, abs) = value.into_sign_magnitude();
        Self {
            magnitude: abs.to_le_bytes()[..T::BYTES].to_vec(),
            negative,
        }
    }

    /// Converts the value into a primitive integer, checking range and sign.
    ///
    /// # Errors
    ///
    /// - [`BigIntError::NegativeToUnsigned`] if `T` is unsigned and the value
    ///   is negative.
    /// - [`BigIntError::ConversionOverflow`] if the value does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bigint::{BigInt, BigIntError};
    /// let v = BigInt::from(-129_i32);
    /// assert_eq!(v.to_primitive::<i16>(), Ok(-129));
    /// assert_eq!(
    ///     v.to_primitive::<i8>(),
    ///     Err(BigIntError::ConversionOverflow { target: "i8" })
    /// );
    /// assert_eq!(
    ///     v.to_primitive::<u64>(),
    ///     Err(BigIntError::NegativeToUnsigned { target: "u64" })
    /// );
    /// ```
    pub fn to_primitive<T: FixedWidth>(&self) -> BigIntResult<T> {
        let negative = self.is_negative();
        if negative && !T::SIGNED {
            return Err(BigIntError::NegativeToUnsigned { target: T::NAME });
        }

        let bytes = self.significant_bytes();
        if bytes.len() > T::BYTES {
            return Err(BigIntError::ConversionOverflow { target: T::NAME });
        }
        let magnitude = bytes
            .iter()
            .rev()
            .fold(0u128, |acc, &b| (acc << 8) | b as u128);

        if !T::SIGNED {
            return Ok(T::from_round_trip(false, magnitude));
        }

        let m = if negative { magnitude - 1 } else { magnitude };
        let unsigned_max = match T::BYTES {
            16 => u128::MAX,
            n => (1u128 << (8 * n)) - 1,
        };
        if m > unsigned_max / 2 {
            return Err(BigIntError::ConversionOverflow { target: T::NAME });
        }
        Ok(T::from_round_trip(negative, m))
    }

    /// Returns `true` for any nonzero value.
    #[inline]
    pub fn to_bool(&self) -> bool {
        !self.is_zero()
    }
}

impl From<bool> for BigInt {
    #[inline]
    fn from(value: bool) -> Self {
        BigInt::from_primitive(value as u8)
    }
}

macro_rules! impl_primitive_conversions {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                #[inline]
                fn from(value: $t) -> Self {
                    BigInt::from_primitive(value)
                }
            }

            impl TryFrom<&BigInt> for $t {
                type Error = BigIntError;

                #[inline]
                fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                    value.to_primitive()
                }
            }

            impl TryFrom<BigInt> for $t {
                type Error = BigIntError;

                #[inline]
                fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                    value.to_primitive()
                }
            }
        )*
    };
}

impl_primitive_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
