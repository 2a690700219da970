//! Error types for parsing and checked arithmetic.
//!
//! The arithmetic operators themselves never fail (division by zero yields
//! canonical zero, narrowing conversions truncate); these types back the
//! hardened `checked_*` entry points and the string parsers.

use thiserror::Error;

/// Error returned by the checked division entry points when the divisor
/// (or a fraction denominator) is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivideByZero;

/// Errors from parsing a decimal string into a [`BigInt`](crate::BigInt)
/// or [`Fraction`](crate::Fraction).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    /// The input was empty, or contained only a sign.
    #[error("empty decimal string")]
    Empty,
    /// A character other than an ASCII digit was found.
    #[error("invalid decimal digit {0:?}")]
    InvalidDigit(char),
}
