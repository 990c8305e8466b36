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

//! # Bitwise operations
//!
//! AND, OR, and XOR act on the stored magnitude bytes only. They are
//! sign-magnitude operations, not two's-complement ones: `-6 & 3` is `-2`
//! (magnitudes `0b110 & 0b011`, sign taken from the left operand), not the
//! `2` that primitive integers produce.
//!
//! The result keeps the sign of the left operand unless its magnitude is zero.

use crate::bigint::BigInt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

/// Combines two magnitudes byte by byte. `op(x, 0)` fills the bytes the shorter
/// operand does not have, and `truncate` limits the result to the shorter one.
fn combine(lhs: &BigInt, rhs: &BigInt, truncate: bool, op: impl Fn(u8, u8) -> u8) -> BigInt {
    let len = if truncate {
        lhs.capacity().min(rhs.capacity())
    } else {
        lhs.capacity().max(rhs.capacity())
    };
    let mut result = BigInt::zero();
    result.grow_to(len);
    for (i, byte) in result.magnitude.iter_mut().enumerate() {
        *byte = op(lhs.byte(i), rhs.byte(i));
    }
    result.negative = lhs.negative;
    result.normalize_sign();
    result
}

impl BitAndAssign<&BigInt> for BigInt {
    #[inline]
    fn bitand_assign(&mut self, rhs: &BigInt) {
        *self = combine(self, rhs, true, |l, r| l & r);
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    #[inline]
    fn bitor_assign(&mut self, rhs: &BigInt) {
        *self = combine(self, rhs, false, |l, r| l | r);
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &BigInt) {
        *self = combine(self, rhs, false, |l, r| l ^ r);
    }
}

forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);
