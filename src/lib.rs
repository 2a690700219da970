//! Arbitrary-precision signed integer and exact rational arithmetic.
//!
//! The core type is [`BigInt`], a sign-magnitude integer backed by base-2^32
//! cells with native fast paths for word-sized operands. [`Fraction`] builds
//! exact rationals on top of it. Values convert to and from native integers
//! and decimal strings, and support the full operator set.
//!
//! ```
//! use multiprec::{BigInt, factorial};
//!
//! let a = BigInt::from(u64::MAX);
//! let b = &a * &a;
//! assert_eq!(b.to_string(), "340282366920938463426481119284349108225");
//!
//! assert_eq!(factorial(20), BigInt::from(2_432_902_008_176_640_000u64));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Sign-magnitude multi-precision integer and its arithmetic.
pub mod bigint;
/// Parse and checked-arithmetic error types.
pub mod error;
/// Exact rational numbers built on [`BigInt`].
pub mod fraction;

pub use bigint::{BigInt, CELL_BITS, Cell};
pub use error::{DivideByZero, ParseBigIntError};
pub use fraction::Fraction;

/// Compute `n!` exactly.
///
/// # Arguments
/// * `n` - Factorial argument; the result outgrows every native width from
///   `n = 21` on
///
/// # Example
/// ```
/// use multiprec::factorial;
///
/// assert_eq!(
///     factorial(30).to_string(),
///     "265252859812191058636308480000000"
/// );
/// ```
pub fn factorial(n: u32) -> BigInt {
    let mut product = BigInt::one();
    for factor in 2..=n as u64 {
        product *= BigInt::from_u64(factor);
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), BigInt::one());
        assert_eq!(factorial(1), BigInt::one());
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(12), 479_001_600);
    }

    #[test]
    fn test_factorial_past_native_range() {
        // 21! overflows u64; check it against 20! times 21.
        let twenty = factorial(20);
        let twenty_one = factorial(21);
        assert_eq!(&twenty * &BigInt::from(21u32), twenty_one);
        assert!(twenty_one.cell_count() > 2);
        assert_eq!(twenty_one.to_string(), "51090942171709440000");
    }

    #[test]
    fn test_factorial_100() {
        // 100! has 158 decimal digits and exactly 24 trailing zeros.
        let text = factorial(100).to_string();
        assert_eq!(text.len(), 158);
        assert!(text.ends_with("000000000000000000000000"));
        assert!(!text.ends_with("0000000000000000000000000"));
    }
}
