//! Bit shifts over the magnitude.
//!
//! Shift distances are plain bit counts; whole cells move by slice
//! copy and the residual distance stitches adjacent cells together.
//! The sign rides along unchanged unless the magnitude empties out.

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use super::{BigInt, CELL_BITS, Cell};

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, bits: u32) -> BigInt {
        if bits == 0 || self.is_zero() {
            return self.clone();
        }
        if self.fits_word() && self.bit_len() as u64 + bits as u64 <= 64 {
            return BigInt::from_sign_magnitude(self.negative, self.magnitude_word() << bits);
        }
        let cell_shift = (bits / CELL_BITS) as usize;
        let bit_shift = bits % CELL_BITS;
        let mut out = vec![0 as Cell; cell_shift];
        if bit_shift == 0 {
            out.extend_from_slice(&self.cells);
        } else {
            out.reserve(self.cells.len() + 1);
            let mut carry: Cell = 0;
            for &cell in &self.cells {
                out.push((cell << bit_shift) | carry);
                carry = cell >> (CELL_BITS - bit_shift);
            }
            // Top bits spilling past the last cell open a new one.
            if carry != 0 {
                out.push(carry);
            }
        }
        BigInt {
            negative: self.negative,
            cells: out,
        }
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, bits: u32) -> BigInt {
        if bits == 0 || self.is_zero() {
            return self.clone();
        }
        if self.fits_word() {
            let shifted = if bits >= 64 {
                0
            } else {
                self.magnitude_word() >> bits
            };
            return BigInt::from_sign_magnitude(self.negative, shifted);
        }
        let cell_shift = (bits / CELL_BITS) as usize;
        if cell_shift >= self.cells.len() {
            return BigInt::zero();
        }
        let bit_shift = bits % CELL_BITS;
        let src = &self.cells[cell_shift..];
        let out = if bit_shift == 0 {
            src.to_vec()
        } else {
            let mut out = Vec::with_capacity(src.len());
            for i in 0..src.len() {
                let low = src[i] >> bit_shift;
                let high = if i + 1 < src.len() {
                    src[i + 1] << (CELL_BITS - bit_shift)
                } else {
                    0
                };
                out.push(low | high);
            }
            out
        };
        BigInt::from_cells(self.negative, out)
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, bits: u32) -> BigInt {
        &self << bits
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, bits: u32) -> BigInt {
        &self >> bits
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, bits: u32) {
        *self = &*self << bits;
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, bits: u32) {
        *self = &*self >> bits;
    }
}
