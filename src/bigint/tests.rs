//! Representation-level tests and fast/slow path equivalence checks.
//!
//! Everything here needs access to the raw cells or the magnitude kernels,
//! so it lives inside the crate; the public-surface properties are covered
//! by the integration suite.

use proptest::prelude::*;

use super::add::{add_magnitudes, sub_magnitudes};
use super::cmp::cmp_magnitudes;
use super::div::div_rem_magnitudes;
use super::mul::mul_magnitudes;
use super::{BigInt, CELLS_PER_WORD, Cell};

#[test]
fn test_native_constructors_decompose_into_cells() {
    assert_eq!(BigInt::from_u64(0).cells(), &[] as &[Cell]);
    assert_eq!(BigInt::from_u64(7).cells(), &[7]);
    assert_eq!(BigInt::from_u64(0x1_0000_0001).cells(), &[1, 1]);
    assert_eq!(BigInt::from_u64(u64::MAX).cells(), &[u32::MAX, u32::MAX]);

    let negative = BigInt::from_i64(-0x1_0000_0000);
    assert!(negative.is_negative());
    assert_eq!(negative.cells(), &[0, 1]);
}

#[test]
fn test_sign_magnitude_constructor_normalizes_zero() {
    let zero = BigInt::from_sign_magnitude(true, 0);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero, BigInt::default());

    let negative = BigInt::from_sign_magnitude(true, 5);
    assert_eq!(negative, -5);
}

#[test]
fn test_from_cells_trims_trailing_zeros() {
    let value = BigInt::from_cells(true, vec![9, 0, 0]);
    assert_eq!(value.cell_count(), 1);
    assert_eq!(value, -9);

    let zero = BigInt::from_cells(true, vec![0, 0, 0]);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
}

#[test]
fn test_native_conversions_round_trip() {
    for value in [0i64, 1, -1, 0x1_0000_0000, -0x1_0000_0000, i64::MAX, i64::MIN] {
        assert_eq!(BigInt::from_i64(value).to_i64(), value, "{value}");
    }
    for value in [0u64, 1, u32::MAX as u64, u64::MAX] {
        assert_eq!(BigInt::from_u64(value).to_u64(), value, "{value}");
    }
}

#[test]
fn test_narrowing_conversion_truncates() {
    // Three cells; only the low word survives, silently.
    let wide = BigInt::from_cells(false, vec![0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC]);
    assert_eq!(wide.to_u64(), 0xBBBB_BBBB_AAAA_AAAA);
    assert_eq!((-wide).to_i64(), (0xBBBB_BBBB_AAAA_AAAAu64 as i64).wrapping_neg());
}

#[test]
fn test_from_impls_cover_native_widths() {
    assert_eq!(BigInt::from(200u8), 200);
    assert_eq!(BigInt::from(u32::MAX), u32::MAX as i64);
    assert_eq!(BigInt::from(-32768i16), -32768);
    assert_eq!(BigInt::from(3usize), 3);
    assert_eq!(BigInt::from(-3isize), -3);
    assert_eq!(BigInt::from(u64::MAX).to_u64(), u64::MAX);
}

#[test]
fn test_bit_access() {
    let value = BigInt::from_u64(0b1010);
    assert!(!value.bit(0));
    assert!(value.bit(1));
    assert!(value.bit(3));
    assert!(!value.bit(200));
    assert_eq!(value.bit_len(), 4);

    assert_eq!(BigInt::zero().bit_len(), 0);
    assert_eq!((BigInt::one() << 100).bit_len(), 101);
}

#[test]
fn test_to_f64_approximation() {
    assert_eq!(BigInt::zero().to_f64(), 0.0);
    assert_eq!(BigInt::from_i64(-42).to_f64(), -42.0);
    assert_eq!(BigInt::from_u64(1 << 52).to_f64(), (1u64 << 52) as f64);

    let wide = BigInt::one() << 100;
    let expected = 2f64.powi(100);
    assert_eq!(wide.to_f64(), expected);
}

#[test]
fn test_abs() {
    assert_eq!(BigInt::from_i64(-9).abs(), 9);
    assert_eq!(BigInt::from_i64(9).abs(), 9);
    assert!(BigInt::zero().abs().is_zero());
}

/// Operands sitting at the word boundary: zero to three cells, so every
/// combination of fast path, slow path and the handoff between them shows up.
fn boundary_cells() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(any::<Cell>(), 0..=CELLS_PER_WORD + 1)
}

fn arb_bigint() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<Cell>(), 0..6))
        .prop_map(|(negative, cells)| BigInt::from_cells(negative, cells))
}

proptest! {
    #[test]
    fn prop_addition_matches_magnitude_kernel(
        a in boundary_cells(),
        b in boundary_cells(),
    ) {
        let lhs = BigInt::from_cells(false, a);
        let rhs = BigInt::from_cells(false, b);
        let expected = BigInt::from_cells(false, add_magnitudes(lhs.cells(), rhs.cells()));
        prop_assert_eq!(&lhs + &rhs, expected);
    }

    #[test]
    fn prop_subtraction_matches_magnitude_kernel(
        a in boundary_cells(),
        b in boundary_cells(),
    ) {
        let lhs = BigInt::from_cells(false, a);
        let rhs = BigInt::from_cells(false, b);
        let (big, small) = if lhs >= rhs { (lhs, rhs) } else { (rhs, lhs) };
        let expected = BigInt::from_cells(false, sub_magnitudes(big.cells(), small.cells()));
        prop_assert_eq!(&big - &small, expected);
    }

    #[test]
    fn prop_multiplication_matches_magnitude_kernel(
        a in boundary_cells(),
        b in boundary_cells(),
    ) {
        let lhs = BigInt::from_cells(false, a);
        let rhs = BigInt::from_cells(false, b);
        let expected = BigInt::from_cells(false, mul_magnitudes(lhs.cells(), rhs.cells()));
        prop_assert_eq!(&lhs * &rhs, expected);
    }

    #[test]
    fn prop_division_matches_magnitude_kernel(
        a in boundary_cells(),
        b in boundary_cells(),
    ) {
        let lhs = BigInt::from_cells(false, a);
        let rhs = BigInt::from_cells(false, b);
        prop_assume!(!rhs.is_zero());
        let (q_cells, r_cells) = div_rem_magnitudes(lhs.cells(), rhs.cells());
        let (q, r) = lhs.div_rem(&rhs);
        prop_assert_eq!(q, BigInt::from_cells(false, q_cells));
        prop_assert_eq!(r, BigInt::from_cells(false, r_cells));
    }

    #[test]
    fn prop_magnitude_comparison_is_total(a in boundary_cells(), b in boundary_cells()) {
        let lhs = BigInt::from_cells(false, a);
        let rhs = BigInt::from_cells(false, b);
        let ord = cmp_magnitudes(lhs.cells(), rhs.cells());
        prop_assert_eq!(ord, lhs.cmp(&rhs));
        prop_assert_eq!(ord.reverse(), cmp_magnitudes(rhs.cells(), lhs.cells()));
    }

    #[test]
    fn prop_cells_stay_canonical(value in arb_bigint(), other in arb_bigint()) {
        for result in [
            &value + &other,
            &value - &other,
            &value * &other,
            &value / &other,
            &value % &other,
            &value << 13,
            &value >> 13,
        ] {
            prop_assert_ne!(result.cells().last(), Some(&0));
            if result.cells().is_empty() {
                prop_assert!(!result.is_negative());
            }
        }
    }
}
