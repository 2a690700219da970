//! Ordering and sign predicates.

use std::cmp::Ordering;

use super::{BigInt, CELLS_PER_WORD, Cell};

/// Compare two trimmed magnitudes.
///
/// Trimmed cells make this cheap: a longer sequence is strictly larger,
/// and equal lengths compare lexicographically from the top cell down.
pub(crate) fn cmp_magnitudes(a: &[Cell], b: &[Cell]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            for i in (0..a.len()).rev() {
                match a[i].cmp(&b[i]) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        }
        ord => ord,
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => cmp_magnitudes(&self.cells, &other.cells),
            (true, true) => cmp_magnitudes(&other.cells, &self.cells),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BigInt {
    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the value is exactly one.
    pub fn is_one(&self) -> bool {
        !self.negative && self.cells.len() == 1 && self.cells[0] == 1
    }

    /// Whether the value is exactly minus one.
    pub fn is_negative_one(&self) -> bool {
        self.negative && self.cells.len() == 1 && self.cells[0] == 1
    }

    /// The sign as `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        if self.cells.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        if self.cells.len() > CELLS_PER_WORD {
            return false;
        }
        self.magnitude_word() == other.unsigned_abs() && self.negative == (*other < 0)
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        let other_negative = *other < 0;
        if self.negative != other_negative {
            return Some(if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        // Same sign; anything wider than a word outranks any native value.
        if self.cells.len() > CELLS_PER_WORD {
            return Some(if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        let ord = self.magnitude_word().cmp(&other.unsigned_abs());
        Some(if self.negative { ord.reverse() } else { ord })
    }
}
