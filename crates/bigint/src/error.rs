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

//! Error types for fallible `BigInt` operations.
//!
//! Every failure condition is a distinct variant of [`BigIntError`], so callers
//! can branch on the kind of failure without inspecting messages. Parse failures
//! carry a [`ParseBigIntError`] with the offending input and the reason.

/// Convenience alias for results produced by this crate.
pub type BigIntResult<T> = Result<T, BigIntError>;

/// The reason a string could not be parsed into a `BigInt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No digit was consumed at all.
    NoDigits,
    /// The requested radix is neither `0` (auto-detect) nor in `2..=36`.
    InvalidRadix(u32),
    /// A complete parse was requested but input remained at `position`.
    TrailingCharacters {
        /// Byte offset of the first unconsumed character.
        position: usize,
    },
}

/// Details about a failed parse attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigIntError {
    /// The input that failed to parse.
    pub input: String,
    /// Why the input was rejected.
    pub kind: ParseErrorKind,
}

impl ParseBigIntError {
    #[inline]
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}

impl std::fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ParseErrorKind::NoDigits => {
                write!(f, "Could not parse '{}': no digits found", self.input)
            }
            ParseErrorKind::InvalidRadix(radix) => write!(
                f,
                "Could not parse '{}': radix {} is not 0 or in 2..=36",
                self.input, radix
            ),
            ParseErrorKind::TrailingCharacters { position } => write!(
                f,
                "Could not parse '{}': unexpected character at offset {}",
                self.input, position
            ),
        }
    }
}

impl std::error::Error for ParseBigIntError {}

/// The error type for fallible `BigInt` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The divisor of a division or remainder has zero magnitude.
    DivisionByZero,
    /// The value does not fit into the target fixed-width integer type.
    ConversionOverflow {
        /// Name of the target type (e.g. `"i32"`).
        target: &'static str,
    },
    /// A left shift would need a buffer larger than `usize` can describe.
    ShiftOverflow {
        /// The requested shift amount in bits.
        bits: usize,
    },
    /// A negative value was converted into an unsigned type.
    NegativeToUnsigned {
        /// Name of the target type (e.g. `"u64"`).
        target: &'static str,
    },
    /// An argument is outside the domain of the operation.
    InvalidArgument {
        /// Human-readable description of the violated precondition.
        reason: &'static str,
    },
    /// Textual input could not be parsed.
    InvalidFormat(ParseBigIntError),
}

impl std::fmt::Display for BigIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "attempt to divide by zero"),
            Self::ConversionOverflow { target } => {
                write!(f, "BigInt value does not fit into {}", target)
            }
            Self::ShiftOverflow { bits } => {
                write!(f, "Left shift by {} bits exceeds the addressable size", bits)
            }
            Self::NegativeToUnsigned { target } => {
                write!(f, "Negative BigInt cannot be converted to {}", target)
            }
            Self::InvalidArgument { reason } => write!(f, "Invalid argument: {}", reason),
            Self::InvalidFormat(e) => write!(f, "Invalid format: {}", e),
        }
    }
}

impl std::error::Error for BigIntError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFormat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseBigIntError> for BigIntError {
    fn from(e: ParseBigIntError) -> Self {
        Self::InvalidFormat(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BigIntError::DivisionByZero.to_string(),
            "attempt to divide by zero"
        );
        assert_eq!(
            BigIntError::ConversionOverflow { target: "i8" }.to_string(),
            "BigInt value does not fit into i8"
        );
        assert_eq!(
            BigIntError::NegativeToUnsigned { target: "u16" }.to_string(),
            "Negative BigInt cannot be converted to u16"
        );
    }

    #[test]
    fn test_parse_error_conversion_keeps_source() {
        let parse = ParseBigIntError::new("  ", ParseErrorKind::NoDigits);
        let err: BigIntError = parse.clone().into();
        assert_eq!(err, BigIntError::InvalidFormat(parse));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("no digits"));
    }
}
