//! Shared test utilities and fixtures.

#![allow(dead_code)]

use gallop::{RangePair, Sequential, SliceCursor};
use proptest::prelude::*;

// Re-export canonical test utilities from gallop::testing
pub use gallop::testing::{iota, linear_bounds, linear_partition_point, triangular_runs};

// ============================================================================
// POSITIONS
// ============================================================================

/// `(first, last)` indices of a slice range.
pub fn span(range: &RangePair<SliceCursor<'_, i32>>) -> (usize, usize) {
    (range.first().position(), range.last().position())
}

/// `(first, last)` indices of a forward-only range.
pub fn forward_span(range: &RangePair<Sequential<SliceCursor<'_, i32>>>) -> (usize, usize) {
    (range.first().inner().position(), range.last().inner().position())
}

/// Cursors bounding `values[start..]`.
pub fn suffix_bounds(values: &[i32], start: usize) -> (SliceCursor<'_, i32>, SliceCursor<'_, i32>) {
    let first = SliceCursor::new(values, start).expect("start within the slice");
    (first, SliceCursor::end(values))
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted vectors over a small alphabet, so equal runs are common.
pub fn sorted_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..20, 0..60).prop_map(|mut v| {
        v.sort();
        v
    })
}

/// A sorted vector, a start offset within it, and a key around its values.
pub fn search_case() -> impl Strategy<Value = (Vec<i32>, usize, i32)> {
    sorted_values().prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..=len, -1i32..21)
    })
}
