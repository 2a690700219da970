//! Multiplication.

use std::ops::{Mul, MulAssign};

use super::{BigInt, CELL_BITS, Cell, DoubleCell, forward_binop};

/// Grade-school multiplication of trimmed magnitudes.
///
/// Each cell product is formed in the double-width type, folded into the
/// running row together with the carry, and the carry deposited one cell
/// past the row. A row's carry slot is untouched by earlier rows, so a
/// plain store suffices.
pub(crate) fn mul_magnitudes(a: &[Cell], b: &[Cell]) -> Vec<Cell> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0 as Cell; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry: DoubleCell = 0;
        for (j, &y) in b.iter().enumerate() {
            let wide =
                x as DoubleCell * y as DoubleCell + out[i + j] as DoubleCell + carry;
            out[i + j] = wide as Cell;
            carry = wide >> CELL_BITS;
        }
        out[i + b.len()] = carry as Cell;
    }
    while out.last() == Some(&0) {
        out.pop();
    }
    out
}

/// In-place `cells = cells * multiplier + addend` over a magnitude.
///
/// The decimal parser folds 9-digit chunks in with this; the worst-case
/// intermediate `cell * multiplier + carry` stays below 2^64.
pub(crate) fn mul_add_cell(cells: &mut Vec<Cell>, multiplier: Cell, addend: Cell) {
    let mut carry = addend as DoubleCell;
    for cell in cells.iter_mut() {
        let wide = *cell as DoubleCell * multiplier as DoubleCell + carry;
        *cell = wide as Cell;
        carry = wide >> CELL_BITS;
    }
    if carry != 0 {
        cells.push(carry as Cell);
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        // Zero and unit operands skip the kernel entirely.
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }
        if self.is_negative_one() {
            return -rhs;
        }
        if rhs.is_negative_one() {
            return -self;
        }
        let negative = self.negative != rhs.negative;
        if self.fits_word() && rhs.fits_word() {
            let product = self.magnitude_word() as u128 * rhs.magnitude_word() as u128;
            return BigInt::from_double_word(negative, product);
        }
        BigInt::from_cells(negative, mul_magnitudes(&self.cells, &rhs.cells))
    }
}

forward_binop!(impl Mul, mul for BigInt);

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl MulAssign<BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = &*self * &rhs;
    }
}
