//! Properties of the partition-point engine itself.
//!
//! Predicates here are arbitrary prefix predicates, not comparisons, so the
//! searches are exercised independently of the bound derivations.

use super::common::{iota, linear_partition_point, suffix_bounds};
use gallop::{
    partition_point, partition_point_expensive, partition_point_galloping,
    partition_point_galloping_forward, partition_point_galloping_random_access, partition_point_n,
    ComparisonCounter, ExpensivePredicate, ForwardCursor, Galloping, PartitionStrategy, Rev,
    Sequential, SliceCursor,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every variant returns the first false position.
    #[test]
    fn prop_variants_find_first_false(len in 0usize..300, boundary_frac in 0.0f64..=1.0) {
        let data = iota(len);
        let boundary = ((len as f64) * boundary_frac) as i32;
        let pred = |&x: &i32| x < boundary;
        let expected = linear_partition_point(&data, pred);
        let (first, last) = SliceCursor::bounds(&data);

        prop_assert_eq!(partition_point(first, last, pred).position(), expected);
        prop_assert_eq!(partition_point_galloping(first, last, pred).position(), expected);
        prop_assert_eq!(partition_point_galloping_forward(first, last, pred).position(), expected);
        prop_assert_eq!(partition_point_galloping_random_access(first, last, pred).position(), expected);
        prop_assert_eq!(partition_point_expensive(first, last, pred).position(), expected);
        prop_assert_eq!(
            partition_point_galloping(Sequential::new(first), Sequential::new(last), pred)
                .into_inner()
                .position(),
            expected
        );
    }

    /// The counted form over `n` elements equals the bounded form.
    #[test]
    fn prop_counted_equals_bounded(len in 0usize..200, start in 0usize..200, n in 0usize..200, cut in 0i32..200) {
        let data = iota(len);
        let start = start.min(len);
        let n = n.min(len - start);
        let first = SliceCursor::new(&data, start).unwrap();
        let mut last = first;
        last.advance_n(n);

        let pred = |&x: &i32| x < cut;
        prop_assert_eq!(partition_point_n(first, n, pred), partition_point(first, last, pred));
        prop_assert_eq!(
            partition_point_n(Sequential::new(first), n, pred).into_inner(),
            partition_point(first, last, pred)
        );
    }

    /// Searching reversed data through `Rev` cursors matches a forward search
    /// on the reversed copy.
    #[test]
    fn prop_rev_cursor_matches_reversed_copy(mut values in prop::collection::vec(0i32..50, 0..80), key in 0i32..50) {
        values.sort_by(|a, b| b.cmp(a));
        let (first, last) = SliceCursor::bounds(&values);
        let found = Galloping::lower_bound(Rev::new(last), Rev::new(first), &key);
        let from_back = values.len() - found.into_base().position();

        let mut ascending = values.clone();
        ascending.reverse();
        prop_assert_eq!(from_back, ascending.partition_point(|&x| x < key));
    }

    /// The expensive variant stays within its call bound from any start.
    #[test]
    fn prop_expensive_call_bound(len in 1usize..500, start in 0usize..500, d in 0usize..500) {
        let data = iota(len);
        let start = start.min(len);
        let d = d.min(len - start);
        let key = (start + d) as i32;

        let counter = ComparisonCounter::new();
        let (first, last) = suffix_bounds(&data, start);
        let found = ExpensivePredicate::lower_bound_by(first, last, &key, counter.wrap(|a: &i32, b: &i32| a < b));
        prop_assert_eq!(found.position(), start + d);

        let log = (usize::BITS - 1 - (d + 1).leading_zeros()) as u64;
        prop_assert!(counter.count() <= 2 * log + 2, "d={} calls={}", d, counter.count());
    }
}
