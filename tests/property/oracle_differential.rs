//! Differential testing: compare the searches against oracles.
//!
//! Each optimized algorithm is tested against a simple, obviously-correct
//! oracle implementation. If they disagree, the oracle is right.
//!
//! Every strategy runs on slice cursors (random access, so the galloping
//! strategy takes the midpoint-sentinel path) and on forward-only cursors
//! (exponential walk), over the suffix of the input starting at an arbitrary
//! offset.

use super::common::{forward_span, search_case, span, suffix_bounds};
use super::oracles::{oracle_flat_set_map, oracle_groups, oracle_lower_bound, oracle_upper_bound};
use gallop::{
    group_equals_slice, Binary, ExpensivePredicate, FlatSetMap, Galloping, PartitionStrategy,
    Sequential,
};
use proptest::prelude::*;

/// Oracle `(lower, upper)` over `values[start..]`, as absolute indices.
fn oracle_bounds(values: &[i32], start: usize, key: i32) -> (usize, usize) {
    let suffix = &values[start..];
    (
        start + oracle_lower_bound(suffix, &key),
        start + oracle_upper_bound(suffix, &key),
    )
}

fn strategy_bounds<S: PartitionStrategy>(values: &[i32], start: usize, key: i32) -> [(usize, usize); 4] {
    let (first, last) = suffix_bounds(values, start);
    let (f_first, f_last) = (Sequential::new(first), Sequential::new(last));
    [
        (
            S::lower_bound(first, last, &key).position(),
            S::upper_bound(first, last, &key).position(),
        ),
        span(&S::equal_range(first, last, &key)),
        (
            S::lower_bound(f_first, f_last, &key).into_inner().position(),
            S::upper_bound(f_first, f_last, &key).into_inner().position(),
        ),
        forward_span(&S::equal_range(f_first, f_last, &key)),
    ]
}

// =============================================================================
// BOUNDS: every strategy vs linear scan
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn diff_binary_bounds((values, start, key) in search_case()) {
        let expected = oracle_bounds(&values, start, key);
        for (i, got) in strategy_bounds::<Binary>(&values, start, key).into_iter().enumerate() {
            prop_assert_eq!(got, expected, "binary variant {} key {}", i, key);
        }
    }

    #[test]
    fn diff_galloping_bounds((values, start, key) in search_case()) {
        let expected = oracle_bounds(&values, start, key);
        for (i, got) in strategy_bounds::<Galloping>(&values, start, key).into_iter().enumerate() {
            prop_assert_eq!(got, expected, "galloping variant {} key {}", i, key);
        }
    }

    #[test]
    fn diff_expensive_bounds((values, start, key) in search_case()) {
        let expected = oracle_bounds(&values, start, key);
        for (i, got) in strategy_bounds::<ExpensivePredicate>(&values, start, key).into_iter().enumerate() {
            prop_assert_eq!(got, expected, "expensive_cmp variant {} key {}", i, key);
        }
    }

    /// Searching for each element present finds it at its first occurrence.
    #[test]
    fn diff_lower_bound_of_present_keys((values, start, _key) in search_case()) {
        for &key in &values[start..] {
            let (first, last) = suffix_bounds(&values, start);
            let found = Galloping::lower_bound(first, last, &key).position();
            prop_assert_eq!(found, start + oracle_lower_bound(&values[start..], &key));
            prop_assert_eq!(values[found], key);
        }
    }
}

// =============================================================================
// GROUPING AND MAP BUILDING vs oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn diff_groups((values, _start, _key) in search_case()) {
        let groups: Vec<(usize, usize)> = group_equals_slice(&values).map(|g| span(&g)).collect();
        prop_assert_eq!(groups, oracle_groups(&values));
    }

    /// Every sub-range of a random input.
    #[test]
    fn diff_flat_set_map_sub_ranges(pairs in prop::collection::vec((0u8..8, 0u8..8), 0..24)) {
        for begin in 0..=pairs.len() {
            for end in begin..=pairs.len() {
                let sub = &pairs[begin..end];
                let built = FlatSetMap::from_pairs(sub.to_vec()).into_inner();
                prop_assert_eq!(built, oracle_flat_set_map(sub), "pairs[{}..{}]", begin, end);
            }
        }
    }
}
