//! Division and remainder.
//!
//! The general kernel is restoring long division, one bit at a time: the
//! running remainder shifts left, absorbs the next dividend bit, and the
//! divisor is subtracted whenever it fits, setting the matching quotient
//! bit. Quadratic in the bit width, but branch-simple and exact for any
//! operand sizes. Single-cell divisors use a Horner scan instead, one
//! double-word division per cell.
//!
//! Quotients truncate toward zero and the remainder takes the dividend's
//! sign, matching native signed division. A zero divisor yields canonical
//! zero from the operators; `checked_div`/`checked_rem` report it as an
//! error instead.

use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use crate::error::DivideByZero;

use super::add::sub_magnitudes_in_place;
use super::cmp::cmp_magnitudes;
use super::{BigInt, CELL_BITS, Cell, DoubleCell, forward_binop};

/// Shift a magnitude left one bit in place, feeding `low_bit` into bit 0.
fn shl1_or(cells: &mut Vec<Cell>, low_bit: bool) {
    let mut carry = low_bit as Cell;
    for cell in cells.iter_mut() {
        let next_carry = *cell >> (CELL_BITS - 1);
        *cell = (*cell << 1) | carry;
        carry = next_carry;
    }
    if carry != 0 {
        cells.push(carry);
    }
}

/// Restoring long division of trimmed magnitudes.
///
/// Returns `(quotient, remainder)` as raw cells; the divisor must be
/// non-empty. The remainder stays below the divisor throughout, so it
/// never grows past `divisor.len() + 1` cells.
pub(crate) fn div_rem_magnitudes(
    dividend: &[Cell],
    divisor: &[Cell],
) -> (Vec<Cell>, Vec<Cell>) {
    debug_assert!(!divisor.is_empty());
    if cmp_magnitudes(dividend, divisor) == Ordering::Less {
        return (Vec::new(), dividend.to_vec());
    }
    let bits = dividend.len() * CELL_BITS as usize
        - dividend.last().map_or(0, |c| c.leading_zeros() as usize);
    let mut quotient = vec![0 as Cell; dividend.len()];
    let mut remainder: Vec<Cell> = Vec::with_capacity(divisor.len() + 1);
    for i in (0..bits).rev() {
        let cell = i / CELL_BITS as usize;
        let bit = (dividend[cell] >> (i as u32 % CELL_BITS)) & 1 == 1;
        shl1_or(&mut remainder, bit);
        if cmp_magnitudes(&remainder, divisor) != Ordering::Less {
            sub_magnitudes_in_place(&mut remainder, divisor);
            while remainder.last() == Some(&0) {
                remainder.pop();
            }
            quotient[cell] |= 1 << (i as u32 % CELL_BITS);
        }
    }
    while quotient.last() == Some(&0) {
        quotient.pop();
    }
    (quotient, remainder)
}

/// Divide a magnitude by a single non-zero cell.
///
/// Horner scan from the top cell down: the running remainder is always
/// below the divisor, so `(remainder << 32) | cell` fits the double word
/// and one native division produces each quotient cell exactly.
pub(crate) fn div_rem_cell_magnitude(cells: &[Cell], divisor: Cell) -> (Vec<Cell>, Cell) {
    debug_assert!(divisor != 0);
    let wide_divisor = divisor as DoubleCell;
    let mut quotient = vec![0 as Cell; cells.len()];
    let mut remainder: DoubleCell = 0;
    for i in (0..cells.len()).rev() {
        let current = (remainder << CELL_BITS) | cells[i] as DoubleCell;
        quotient[i] = (current / wide_divisor) as Cell;
        remainder = current % wide_divisor;
    }
    while quotient.last() == Some(&0) {
        quotient.pop();
    }
    (quotient, remainder as Cell)
}

impl BigInt {
    /// Quotient and remainder in one pass.
    ///
    /// The quotient truncates toward zero; the remainder carries the
    /// dividend's sign and satisfies `self == q * rhs + r`. Dividing by
    /// zero yields `(0, 0)`.
    pub fn div_rem(&self, rhs: &BigInt) -> (BigInt, BigInt) {
        if rhs.is_zero() || self.is_zero() {
            return (BigInt::zero(), BigInt::zero());
        }
        let quotient_negative = self.negative != rhs.negative;
        if self.fits_word() && rhs.fits_word() {
            let a = self.magnitude_word();
            let b = rhs.magnitude_word();
            return (
                BigInt::from_sign_magnitude(quotient_negative, a / b),
                BigInt::from_sign_magnitude(self.negative, a % b),
            );
        }
        let (q, r) = if rhs.cells.len() == 1 {
            let (q, r) = div_rem_cell_magnitude(&self.cells, rhs.cells[0]);
            (q, if r == 0 { Vec::new() } else { vec![r] })
        } else {
            div_rem_magnitudes(&self.cells, &rhs.cells)
        };
        (
            BigInt::from_cells(quotient_negative, q),
            BigInt::from_cells(self.negative, r),
        )
    }

    /// Division that reports a zero divisor instead of absorbing it.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, DivideByZero> {
        if rhs.is_zero() {
            return Err(DivideByZero);
        }
        Ok(self.div_rem(rhs).0)
    }

    /// Remainder that reports a zero divisor instead of absorbing it.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, DivideByZero> {
        if rhs.is_zero() {
            return Err(DivideByZero);
        }
        Ok(self.div_rem(rhs).1)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        self.div_rem(rhs).0
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        self.div_rem(rhs).1
    }
}

forward_binop!(impl Div, div for BigInt);
forward_binop!(impl Rem, rem for BigInt);

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

impl DivAssign<BigInt> for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        *self = &*self / &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

impl RemAssign<BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self = &*self % &rhs;
    }
}
