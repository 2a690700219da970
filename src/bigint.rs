//! Sign-magnitude multi-precision integer.
//!
//! A [`BigInt`] stores its magnitude as a sequence of 32-bit unsigned
//! "cells" (base-2^32 digits), least significant cell first, alongside a
//! separate sign flag. The representation is kept canonical at all times:
//! the cell sequence carries no trailing zero cells, and zero is the empty
//! sequence with a non-negative sign. Every constructor and operator
//! re-establishes that form, so two equal values always compare equal
//! field-by-field and the sign of a magnitude is a single flag test.
//!
//! Operands whose magnitudes fit in one machine word take a native `u64`
//! fast path; wider values go through cell-by-cell kernels that propagate
//! explicit carries and borrows. Both paths produce identical results.

mod add;
mod cmp;
mod div;
mod fmt;
mod mul;
mod shift;

#[cfg(test)]
mod tests;

/// One magnitude cell: a base-2^32 digit.
pub type Cell = u32;

/// Number of bits in one magnitude cell.
pub const CELL_BITS: u32 = 32;

/// Double-width type used for cell products and carry chains.
pub(crate) type DoubleCell = u64;

/// Cells per machine word; operands at or below this width take fast paths.
pub(crate) const CELLS_PER_WORD: usize = 2;

/// Arbitrary-precision signed integer.
///
/// Construction from native integers, decimal strings and sign/magnitude
/// pairs is supported, along with the full set of arithmetic operators.
///
/// ```
/// use multiprec::BigInt;
///
/// let a: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
/// let b = BigInt::from(3u32);
/// assert_eq!((&a * &b).to_string(), "1020847100762815390390123822295304634368");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Sign flag; canonical zero is never negative.
    negative: bool,
    /// Base-2^32 digits, least significant first, trailing zeros trimmed.
    cells: Vec<Cell>,
}

impl BigInt {
    /// The canonical zero: empty cell sequence, non-negative.
    pub fn zero() -> Self {
        BigInt::default()
    }

    /// The value one.
    pub fn one() -> Self {
        BigInt {
            negative: false,
            cells: vec![1],
        }
    }

    /// Build from an unsigned native integer.
    pub fn from_u64(value: u64) -> Self {
        Self::from_sign_magnitude(false, value)
    }

    /// Build from a signed native integer.
    ///
    /// `i64::MIN` is handled; its magnitude (2^63) has no signed
    /// counterpart but fits the unsigned intermediate.
    pub fn from_i64(value: i64) -> Self {
        Self::from_sign_magnitude(value < 0, value.unsigned_abs())
    }

    /// Build from an explicit sign flag and an unsigned magnitude.
    ///
    /// A zero magnitude ignores the flag and yields canonical zero.
    pub fn from_sign_magnitude(negative: bool, magnitude: u64) -> Self {
        let mut cells = Vec::with_capacity(CELLS_PER_WORD);
        let mut rest = magnitude;
        while rest != 0 {
            cells.push(rest as Cell);
            rest >>= CELL_BITS;
        }
        BigInt {
            negative: negative && !cells.is_empty(),
            cells,
        }
    }

    /// Build from a sign flag and raw cells, restoring canonical form.
    pub(crate) fn from_cells(negative: bool, mut cells: Vec<Cell>) -> Self {
        while cells.last() == Some(&0) {
            cells.pop();
        }
        BigInt {
            negative: negative && !cells.is_empty(),
            cells,
        }
    }

    /// Build from a double-width magnitude, used by the word fast paths.
    pub(crate) fn from_double_word(negative: bool, magnitude: u128) -> Self {
        let mut cells = Vec::with_capacity(2 * CELLS_PER_WORD);
        let mut rest = magnitude;
        while rest != 0 {
            cells.push(rest as Cell);
            rest >>= CELL_BITS;
        }
        BigInt {
            negative: negative && !cells.is_empty(),
            cells,
        }
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of cells in the magnitude; zero has no cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The magnitude cells, least significant first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of significant bits in the magnitude; zero for zero.
    pub fn bit_len(&self) -> usize {
        match self.cells.last() {
            Some(&top) => {
                self.cells.len() * CELL_BITS as usize - top.leading_zeros() as usize
            }
            None => 0,
        }
    }

    /// Read one bit of the magnitude; bits past the top are zero.
    pub fn bit(&self, index: usize) -> bool {
        let cell = index / CELL_BITS as usize;
        match self.cells.get(cell) {
            Some(&c) => (c >> (index as u32 % CELL_BITS)) & 1 == 1,
            None => false,
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        BigInt {
            negative: false,
            cells: self.cells.clone(),
        }
    }

    /// Truncate the magnitude to an unsigned native integer.
    ///
    /// Only the low word of cells is read; wider values lose their high
    /// cells silently, and the sign is ignored.
    pub fn to_u64(&self) -> u64 {
        let mut word = 0u64;
        for (i, &cell) in self.cells.iter().take(CELLS_PER_WORD).enumerate() {
            word |= (cell as u64) << (i as u32 * CELL_BITS);
        }
        word
    }

    /// Truncate to a signed native integer.
    ///
    /// The low word of the magnitude is reinterpreted with the sign
    /// applied by wrapping negation, so `i64::MIN` round-trips.
    pub fn to_i64(&self) -> i64 {
        let word = self.to_u64() as i64;
        if self.negative { word.wrapping_neg() } else { word }
    }

    /// Approximate as a floating-point value.
    ///
    /// Cells are folded most significant first, so precision loss follows
    /// the usual `f64` rounding; very wide values go to infinity.
    pub fn to_f64(&self) -> f64 {
        let mut acc = 0.0f64;
        for &cell in self.cells.iter().rev() {
            acc = acc * CELL_RADIX_F64 + cell as f64;
        }
        if self.negative { -acc } else { acc }
    }

    /// Whether the magnitude fits in one machine word.
    pub(crate) fn fits_word(&self) -> bool {
        self.cells.len() <= CELLS_PER_WORD
    }

    /// The magnitude as a machine word; caller checks [`Self::fits_word`].
    pub(crate) fn magnitude_word(&self) -> u64 {
        debug_assert!(self.fits_word());
        self.to_u64()
    }
}

/// 2^32 as an `f64`, the per-cell scale factor for float conversion.
const CELL_RADIX_F64: f64 = 4_294_967_296.0;

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_u64(value as u64)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_i64(value as i64)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

/// Forward an operator on owned and mixed receivers to the `&T op &T` impl.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl std::ops::$imp<$t> for $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl std::ops::$imp<&$t> for $t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> $t {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl std::ops::$imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                std::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

pub(crate) use forward_binop;
