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

//! Operator plumbing shared by the arithmetic and bitwise modules.

/// Derives the binary operator forms and the by-value assignment form from
/// the `OpAssign<&BigInt>` implementation.
macro_rules! forward_binop {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait_name<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, rhs: &BigInt) -> BigInt {
                <BigInt as $assign_trait<&BigInt>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $trait_name<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                <BigInt as $trait_name<&BigInt>>::$method(self, &rhs)
            }
        }

        impl $trait_name<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                <BigInt as $trait_name<&BigInt>>::$method(self.clone(), rhs)
            }
        }

        impl $trait_name<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                <BigInt as $trait_name<&BigInt>>::$method(self.clone(), &rhs)
            }
        }

        impl $assign_trait<BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, rhs: BigInt) {
                <BigInt as $assign_trait<&BigInt>>::$assign_method(self, &rhs);
            }
        }
    };
}
