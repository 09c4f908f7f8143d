//! Properties of equal-key grouping.

use super::common::{sorted_values, span};
use super::oracles::oracle_groups;
use gallop::{group_equals, group_equals_slice, GroupEquals, Groups, RangePair, Sequential, SliceCursor};
use proptest::prelude::*;

type Pair = (i32, u8);

/// Pairs sorted by key only, so equivalent pairs can still differ.
fn pairs_sorted_by_key() -> impl Strategy<Value = Vec<Pair>> {
    prop::collection::vec((0i32..8, 0u8..4), 0..40).prop_map(|mut v| {
        v.sort_by_key(|p| p.0);
        v
    })
}

fn by_key(x: &Pair, y: &Pair) -> bool {
    x.0 < y.0
}

fn key_groups(pairs: &[Pair]) -> Groups<SliceCursor<'_, Pair>, fn(&Pair, &Pair) -> bool> {
    let (first, last) = SliceCursor::bounds(pairs);
    group_equals(first, last, by_key as fn(&Pair, &Pair) -> bool)
}

fn pair_span(range: &RangePair<SliceCursor<'_, Pair>>) -> (usize, usize) {
    (range.first().position(), range.last().position())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Groups are non-empty, adjacent, uniform, maximal and cover the input.
    #[test]
    fn prop_groups_tile_input(values in sorted_values()) {
        let mut next_start = 0;
        for group in group_equals_slice(&values) {
            let (start, end) = span(&group);
            prop_assert_eq!(start, next_start);
            prop_assert!(start < end);
            prop_assert!(group.iter().all(|&v| v == values[start]));
            if end < values.len() {
                prop_assert!(values[end] > values[start]);
            }
            next_start = end;
        }
        prop_assert_eq!(next_start, values.len());
    }

    /// Backward iteration yields the forward groups in reverse.
    #[test]
    fn prop_backward_mirrors_forward(values in sorted_values()) {
        let forward: Vec<_> = group_equals_slice(&values).map(|g| span(&g)).collect();
        let mut backward: Vec<_> = group_equals_slice(&values).rev().map(|g| span(&g)).collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    /// Mixed front and back steps still yield every group exactly once.
    #[test]
    fn prop_mixed_direction_yields_each_group_once(
        values in sorted_values(),
        steps in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let expected: Vec<_> = group_equals_slice(&values).map(|g| span(&g)).collect();
        let mut groups = group_equals_slice(&values);
        let mut front = Vec::new();
        let mut back = Vec::new();
        for from_back in steps.into_iter().chain(std::iter::repeat(false).take(expected.len())) {
            let next = if from_back { groups.next_back() } else { groups.next() };
            match next {
                Some(g) if from_back => back.push(span(&g)),
                Some(g) => front.push(span(&g)),
                None => break,
            }
        }
        back.reverse();
        front.extend(back);
        prop_assert_eq!(front, expected);
    }

    /// Forward-only cursors group identically.
    #[test]
    fn prop_forward_only_grouping_matches(values in sorted_values()) {
        let (first, last) = SliceCursor::bounds(&values);
        let slice_lens: Vec<usize> = group_equals_slice(&values).map(|g| g.len()).collect();
        let forward_lens: Vec<usize> =
            group_equals(Sequential::new(first), Sequential::new(last), |a: &i32, b: &i32| a < b)
                .map(|g| g.len())
                .collect();
        prop_assert_eq!(slice_lens, forward_lens);
    }

    /// Advancing the explicit state reaches the end state after one step per group.
    #[test]
    fn prop_state_reaches_end(values in sorted_values()) {
        let (first, last) = SliceCursor::bounds(&values);
        let less = |a: &i32, b: &i32| a < b;
        let end = GroupEquals::end(first, last, less);
        let mut state = GroupEquals::begin(first, last, less);
        let mut steps = 0;
        while state != end {
            state.advance();
            steps += 1;
        }
        prop_assert_eq!(steps, group_equals_slice(&values).count());
        prop_assert!(state.is_end());
    }

    /// Backward grouping by a key projection splits at key changes only.
    #[test]
    fn prop_backward_by_key_matches_key_runs(pairs in pairs_sorted_by_key()) {
        let keys: Vec<i32> = pairs.iter().map(|p| p.0).collect();
        let expected = oracle_groups(&keys);
        let forward: Vec<_> = key_groups(&pairs).map(|g| pair_span(&g)).collect();
        let mut backward: Vec<_> = key_groups(&pairs).rev().map(|g| pair_span(&g)).collect();
        backward.reverse();
        prop_assert_eq!(&forward, &expected);
        prop_assert_eq!(&backward, &expected);
    }

    /// Mixed steps under a key projection yield each key run once.
    #[test]
    fn prop_mixed_direction_by_key(
        pairs in pairs_sorted_by_key(),
        steps in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let keys: Vec<i32> = pairs.iter().map(|p| p.0).collect();
        let expected = oracle_groups(&keys);
        let mut groups = key_groups(&pairs);
        let mut front = Vec::new();
        let mut back = Vec::new();
        for from_back in steps.into_iter().chain(std::iter::repeat(false).take(expected.len())) {
            let next = if from_back { groups.next_back() } else { groups.next() };
            match next {
                Some(g) if from_back => back.push(pair_span(&g)),
                Some(g) => front.push(pair_span(&g)),
                None => break,
            }
        }
        back.reverse();
        front.extend(back);
        prop_assert_eq!(front, expected);
    }
}
