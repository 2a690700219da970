//! Exact rational numbers over [`BigInt`].
//!
//! A [`Fraction`] is kept in canonical form: the denominator is strictly
//! positive, the sign lives on the numerator, numerator and denominator
//! share no common factor, and zero is always `0/1`. Canonical form makes
//! derived equality and hashing exact, so `2/4` and `1/2` are the same
//! value.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::bigint::forward_binop;
use crate::error::{DivideByZero, ParseBigIntError};
use crate::BigInt;

/// An exact ratio of two [`BigInt`] values.
///
/// ```
/// use multiprec::Fraction;
///
/// let third: Fraction = "1/3".parse().unwrap();
/// let sixth: Fraction = "1/6".parse().unwrap();
/// assert_eq!((&third + &sixth).to_string(), "1/2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    /// Carries the sign; reduced against the denominator.
    numerator: BigInt,
    /// Always strictly positive.
    denominator: BigInt,
}

/// Greatest common divisor of two magnitudes by Euclid's remainders.
fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

impl Fraction {
    /// The zero fraction, `0/1`.
    pub fn zero() -> Self {
        Fraction {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    /// The unit fraction, `1/1`.
    pub fn one() -> Self {
        Fraction {
            numerator: BigInt::one(),
            denominator: BigInt::one(),
        }
    }

    /// Build a fraction, reducing to canonical form.
    ///
    /// A zero denominator is absorbed to the zero fraction; use
    /// [`Self::checked_new`] to reject it instead.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        if denominator.is_zero() || numerator.is_zero() {
            return Fraction::zero();
        }
        let negative = numerator.is_negative() != denominator.is_negative();
        let numerator = numerator.abs();
        let denominator = denominator.abs();
        let common = gcd(&numerator, &denominator);
        let numerator = &numerator / &common;
        Fraction {
            numerator: if negative { -numerator } else { numerator },
            denominator: &denominator / &common,
        }
    }

    /// Build a fraction, reporting a zero denominator as an error.
    pub fn checked_new(numerator: BigInt, denominator: BigInt) -> Result<Self, DivideByZero> {
        if denominator.is_zero() {
            return Err(DivideByZero);
        }
        Ok(Fraction::new(numerator, denominator))
    }

    /// The reduced numerator; its sign is the fraction's sign.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The reduced denominator; always strictly positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Whether the value is a whole number.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Approximate as a floating-point value.
    pub fn to_f64(&self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction {
            numerator: value,
            denominator: BigInt::one(),
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::from(BigInt::from_i64(value))
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction::new(
            &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator),
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        Fraction::new(
            &(&self.numerator * &rhs.denominator) - &(&rhs.numerator * &self.denominator),
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Div<&Fraction> for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: &Fraction) -> Fraction {
        // Inverting a zero divisor hands Fraction::new a zero denominator,
        // which it absorbs to zero, matching integer division by zero.
        Fraction::new(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }
}

forward_binop!(impl Add, add for Fraction);
forward_binop!(impl Sub, sub for Fraction);
forward_binop!(impl Mul, mul for Fraction);
forward_binop!(impl Div, div for Fraction);

impl AddAssign<&Fraction> for Fraction {
    fn add_assign(&mut self, rhs: &Fraction) {
        *self = &*self + rhs;
    }
}

impl AddAssign<Fraction> for Fraction {
    fn add_assign(&mut self, rhs: Fraction) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<&Fraction> for Fraction {
    fn sub_assign(&mut self, rhs: &Fraction) {
        *self = &*self - rhs;
    }
}

impl SubAssign<Fraction> for Fraction {
    fn sub_assign(&mut self, rhs: Fraction) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<&Fraction> for Fraction {
    fn mul_assign(&mut self, rhs: &Fraction) {
        *self = &*self * rhs;
    }
}

impl MulAssign<Fraction> for Fraction {
    fn mul_assign(&mut self, rhs: Fraction) {
        *self = &*self * &rhs;
    }
}

impl DivAssign<&Fraction> for Fraction {
    fn div_assign(&mut self, rhs: &Fraction) {
        *self = &*self / rhs;
    }
}

impl DivAssign<Fraction> for Fraction {
    fn div_assign(&mut self, rhs: Fraction) {
        *self = &*self / &rhs;
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(mut self) -> Fraction {
        self.numerator = -self.numerator;
        self
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication keeps order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Fraction {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((numerator, denominator)) => Ok(Fraction::new(
                numerator.parse()?,
                denominator.parse()?,
            )),
            None => Ok(Fraction::from(s.parse::<BigInt>()?)),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fraction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fraction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = String::deserialize(deserializer)?;
        repr.parse().map_err(serde::de::Error::custom)
    }
}
