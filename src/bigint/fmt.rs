//! Decimal formatting and parsing.
//!
//! Both directions work in 9-digit chunks, the largest power of ten that
//! fits one cell: formatting peels chunks off with single-cell division,
//! parsing folds them back in with multiply-add. That keeps the decimal
//! conversions at one native division or multiplication per cell per chunk
//! instead of per digit.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::ParseBigIntError;

use super::div::div_rem_cell_magnitude;
use super::mul::mul_add_cell;
use super::{BigInt, Cell};

/// 10^9, the largest power of ten below 2^32.
const DECIMAL_CHUNK: Cell = 1_000_000_000;

/// Decimal digits per chunk.
const CHUNK_DIGITS: usize = 9;

/// Powers of ten up to the chunk size, indexed by digit count.
const POW10: [Cell; CHUNK_DIGITS + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut chunks: Vec<Cell> = Vec::with_capacity(self.cells.len() + 1);
        let mut cells = self.cells.clone();
        while !cells.is_empty() {
            let (next, chunk) = div_rem_cell_magnitude(&cells, DECIMAL_CHUNK);
            chunks.push(chunk);
            cells = next;
        }
        let mut buf = String::with_capacity(chunks.len() * CHUNK_DIGITS + 1);
        if self.negative {
            buf.push('-');
        }
        let mut rest = chunks.iter().rev();
        if let Some(top) = rest.next() {
            write!(buf, "{top}")?;
        }
        for chunk in rest {
            write!(buf, "{chunk:09}")?;
        }
        f.write_str(&buf)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(&b'-') => (true, &s[1..]),
            Some(&b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        let bytes = digits.as_bytes();
        let mut cells: Vec<Cell> = Vec::with_capacity(bytes.len() / CHUNK_DIGITS + 1);
        let mut pos = 0;
        while pos < bytes.len() {
            // Short leading chunk first, then full 9-digit chunks.
            let take = match (bytes.len() - pos) % CHUNK_DIGITS {
                0 => CHUNK_DIGITS,
                short if pos == 0 => short,
                _ => CHUNK_DIGITS,
            };
            let mut chunk: Cell = 0;
            for &byte in &bytes[pos..pos + take] {
                if !byte.is_ascii_digit() {
                    return Err(ParseBigIntError::InvalidDigit(byte as char));
                }
                chunk = chunk * 10 + (byte - b'0') as Cell;
            }
            mul_add_cell(&mut cells, POW10[take], chunk);
            pos += take;
        }
        Ok(BigInt::from_cells(negative, cells))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = String::deserialize(deserializer)?;
        repr.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_values() {
        assert_eq!(BigInt::zero().to_string(), "0");
        assert_eq!(BigInt::one().to_string(), "1");
        assert_eq!(BigInt::from_i64(-1).to_string(), "-1");
        assert_eq!(BigInt::from_u64(1_000_000_000).to_string(), "1000000000");
        assert_eq!(
            BigInt::from_u64(u64::MAX).to_string(),
            "18446744073709551615"
        );
        assert_eq!(BigInt::from_i64(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_display_pads_inner_chunks() {
        // 10^18 + 7: the middle and low chunks must keep their zeros.
        let value: BigInt = "1000000000000000007".parse().unwrap();
        assert_eq!(value.to_string(), "1000000000000000007");
    }

    #[test]
    fn test_parse_round_trip_wide_value() {
        let text = "123456789012345678901234567890123456789";
        let value: BigInt = text.parse().unwrap();
        assert!(value.cell_count() > 2);
        assert_eq!(value.to_string(), text);

        let negative: BigInt = "-123456789012345678901234567890".parse().unwrap();
        assert!(negative.is_negative());
        assert_eq!(negative.to_string(), "-123456789012345678901234567890");
    }

    #[test]
    fn test_parse_normalizes() {
        let zero: BigInt = "-0".parse().unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let trimmed: BigInt = "000042".parse().unwrap();
        assert_eq!(trimmed, 42);

        let plus: BigInt = "+7".parse().unwrap();
        assert_eq!(plus, 7);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!(
            "12x4".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit('x'))
        );
        assert_eq!(
            "1 2".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit(' '))
        );
    }

    #[test]
    fn test_parse_matches_native() {
        for value in [0i64, 1, -1, 42, -900_719_925_474_099, i64::MAX, i64::MIN] {
            let parsed: BigInt = value.to_string().parse().unwrap();
            assert_eq!(parsed, BigInt::from_i64(value));
        }
    }
}
