//! Property-based tests verifying the bijection property of the Hilbert
//! mapping.
//!
//! For every order, the index → point mapping must be injective, stay inside
//! the grid, and visit every cell exactly once.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::collections::HashSet;

use hilbertpath::{CurvePath, GridPoint, HilbertCurve};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every in-range index maps to a point inside the grid.
    #[test]
    fn points_stay_in_bounds(order in 1u32..=8, index in 0u32..65536) {
        let curve = HilbertCurve::new(order).expect("valid order");
        if index < curve.length() {
            let point = curve.point(index).expect("index in range");
            prop_assert!(point.x < curve.side(), "x out of bounds: {point}");
            prop_assert!(point.y < curve.side(), "y out of bounds: {point}");
        }
    }

    /// Consecutive indices map to grid-adjacent cells (locality).
    #[test]
    fn neighbours_are_adjacent(order in 1u32..=8, index in 0u32..65535) {
        let curve = HilbertCurve::new(order).expect("valid order");
        if index + 1 < curve.length() {
            let here = curve.point(index).expect("index in range");
            let next = curve.point(index + 1).expect("index in range");
            prop_assert!(
                here.is_adjacent(&next),
                "indices {index} and {} map to non-adjacent {here} and {next}",
                index + 1
            );
        }
    }

    /// Identical inputs always produce identical output.
    #[test]
    fn lookups_are_idempotent(order in 1u32..=10, index in 0u32..1048576) {
        let curve = HilbertCurve::new(order).expect("valid order");
        if index < curve.length() {
            prop_assert_eq!(curve.point(index).unwrap(), curve.point(index).unwrap());
        }
    }
}

// ============================================================================
// Edge case tests (non-property-based)
// ============================================================================

/// Exhaustively check that small curves visit every grid cell exactly once.
#[test]
fn every_cell_visited_exactly_once() {
    for order in 1..=6u32 {
        let path = CurvePath::generate(order).expect("valid order");
        let side = path.side();
        let mut seen = HashSet::with_capacity(path.len());
        for point in path.iter() {
            assert!(
                point.x < side && point.y < side,
                "order {order}: point {point} outside {side}x{side} grid"
            );
            assert!(
                seen.insert(*point),
                "order {order}: cell {point} visited twice"
            );
        }
        assert_eq!(
            seen.len() as u32,
            side * side,
            "order {order}: grid not fully covered"
        );
    }
}

/// The order-1 curve is exactly the canonical U-shape.
#[test]
fn base_case_matches_u_pattern() {
    let path = CurvePath::generate(1).expect("order 1");
    let expected = [
        GridPoint::new(0, 0),
        GridPoint::new(0, 1),
        GridPoint::new(1, 1),
        GridPoint::new(1, 0),
    ];
    assert_eq!(&path[..], &expected);
}

/// Orders outside the supported range are rejected at construction.
#[test]
fn invalid_orders_are_rejected() {
    assert!(HilbertCurve::new(0).is_err());
    assert!(HilbertCurve::new(16).is_err());
    assert!(HilbertCurve::new(1).is_ok());
    assert!(HilbertCurve::new(15).is_ok());
}

/// Index range checks cover both ends of the curve.
#[test]
fn index_bounds_are_enforced() {
    let curve = HilbertCurve::new(3).expect("order 3");
    assert!(curve.point(0).is_ok());
    assert!(curve.point(curve.length() - 1).is_ok());
    assert!(curve.point(curve.length()).is_err());
    assert!(curve.point(u32::MAX).is_err());
}
