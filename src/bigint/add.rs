//! Addition and subtraction.
//!
//! Signed add/sub reduces to magnitude arithmetic: equal signs add the
//! magnitudes, mixed signs subtract the smaller magnitude from the larger
//! and take the larger operand's sign. The magnitude kernels run explicit
//! carry and borrow chains over the cells.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::cmp::cmp_magnitudes;
use super::{BigInt, Cell, forward_binop};

/// Add two trimmed magnitudes cell by cell, propagating the carry.
pub(crate) fn add_magnitudes(a: &[Cell], b: &[Cell]) -> Vec<Cell> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = false;
    for i in 0..long.len() {
        let rhs = if i < short.len() { short[i] } else { 0 };
        let (sum, overflow_a) = long[i].overflowing_add(rhs);
        let (sum, overflow_b) = sum.overflowing_add(carry as Cell);
        out.push(sum);
        carry = overflow_a || overflow_b;
    }
    if carry {
        out.push(1);
    }
    out
}

/// Subtract `b` from `a` cell by cell, propagating the borrow.
///
/// Requires `a >= b` as magnitudes; the result may carry trailing zeros,
/// which callers strip when rebuilding a canonical value.
pub(crate) fn sub_magnitudes(a: &[Cell], b: &[Cell]) -> Vec<Cell> {
    debug_assert!(cmp_magnitudes(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = false;
    for i in 0..a.len() {
        let rhs = if i < b.len() { b[i] } else { 0 };
        let (diff, underflow_a) = a[i].overflowing_sub(rhs);
        let (diff, underflow_b) = diff.overflowing_sub(borrow as Cell);
        out.push(diff);
        borrow = underflow_a || underflow_b;
    }
    debug_assert!(!borrow);
    out
}

/// Subtract `b` from `dst` in place; requires `dst >= b` as magnitudes.
pub(crate) fn sub_magnitudes_in_place(dst: &mut [Cell], b: &[Cell]) {
    debug_assert!(cmp_magnitudes(dst, b) != Ordering::Less);
    let mut borrow = false;
    for i in 0..dst.len() {
        let rhs = if i < b.len() { b[i] } else { 0 };
        let (diff, underflow_a) = dst[i].overflowing_sub(rhs);
        let (diff, underflow_b) = diff.overflowing_sub(borrow as Cell);
        dst[i] = diff;
        borrow = underflow_a || underflow_b;
    }
    debug_assert!(!borrow);
}

/// Combine two word-sized operands natively; sums need the double word.
fn add_words(a_negative: bool, a: u64, b_negative: bool, b: u64) -> BigInt {
    if a_negative == b_negative {
        BigInt::from_double_word(a_negative, a as u128 + b as u128)
    } else if a >= b {
        BigInt::from_sign_magnitude(a_negative, a - b)
    } else {
        BigInt::from_sign_magnitude(b_negative, b - a)
    }
}

fn add_signed(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.fits_word() && rhs.fits_word() {
        return add_words(
            lhs.negative,
            lhs.magnitude_word(),
            rhs.negative,
            rhs.magnitude_word(),
        );
    }
    if lhs.negative == rhs.negative {
        return BigInt::from_cells(lhs.negative, add_magnitudes(&lhs.cells, &rhs.cells));
    }
    match cmp_magnitudes(&lhs.cells, &rhs.cells) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => {
            BigInt::from_cells(lhs.negative, sub_magnitudes(&lhs.cells, &rhs.cells))
        }
        Ordering::Less => {
            BigInt::from_cells(rhs.negative, sub_magnitudes(&rhs.cells, &lhs.cells))
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        add_signed(self, rhs)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        // a - b is a + (-b); flip the sign without cloning the cells.
        if rhs.is_zero() {
            return self.clone();
        }
        let flipped = BigInt {
            negative: !rhs.negative,
            cells: rhs.cells.clone(),
        };
        add_signed(self, &flipped)
    }
}

forward_binop!(impl Add, add for BigInt);
forward_binop!(impl Sub, sub for BigInt);

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

impl SubAssign<BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) {
        *self = &*self - &rhs;
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt {
            negative: !self.negative && !self.cells.is_empty(),
            cells: self.cells.clone(),
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negative = !self.negative && !self.cells.is_empty();
        self
    }
}
