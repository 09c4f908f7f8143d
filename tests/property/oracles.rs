//! Reference oracles for differential testing.
//!
//! These are simple, obviously-correct implementations. They serve as ground
//! truth for verifying the partition-point searches and the structures built
//! on them.
//!
//! Philosophy: trust the simple implementation, then verify the optimized
//! ones match it via differential testing.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Linear scan for lower bound: first element `>= target`.
pub fn oracle_lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    arr.iter().position(|x| x >= target).unwrap_or(arr.len())
}

/// Linear scan for upper bound: first element `> target`.
pub fn oracle_upper_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    arr.iter().position(|x| x > target).unwrap_or(arr.len())
}

/// Maximal runs of equal elements, as `(start, end)` index pairs.
pub fn oracle_groups<T: PartialEq>(arr: &[T]) -> Vec<(usize, usize)> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=arr.len() {
        if i == arr.len() || arr[i] != arr[start] {
            groups.push((start, i));
            start = i;
        }
    }
    groups
}

/// Key to set-of-values map via the standard ordered collections.
pub fn oracle_flat_set_map<K: Ord + Clone, V: Ord + Clone>(pairs: &[(K, V)]) -> Vec<(K, Vec<V>)> {
    let mut map: BTreeMap<K, BTreeSet<V>> = BTreeMap::new();
    for (k, v) in pairs {
        map.entry(k.clone()).or_default().insert(v.clone());
    }
    map.into_iter()
        .map(|(k, values)| (k, values.into_iter().collect()))
        .collect()
}

// =============================================================================
// ORACLE SELF-TESTS
// =============================================================================

proptest! {
    /// Lower bound never exceeds upper bound.
    #[test]
    fn oracle_bounds_ordered(mut arr in prop::collection::vec(0u8..10, 0..50), target in 0u8..10) {
        arr.sort();
        prop_assert!(oracle_lower_bound(&arr, &target) <= oracle_upper_bound(&arr, &target));
    }

    /// Groups tile the input.
    #[test]
    fn oracle_groups_cover_input(mut arr in prop::collection::vec(0u8..5, 0..50)) {
        arr.sort();
        let total: usize = oracle_groups(&arr).iter().map(|(s, e)| e - s).sum();
        prop_assert_eq!(total, arr.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_basic() {
        let arr = [1, 3, 3, 5];
        assert_eq!(oracle_lower_bound(&arr, &3), 1);
        assert_eq!(oracle_upper_bound(&arr, &3), 3);
        assert_eq!(oracle_lower_bound(&arr, &6), 4);
        assert_eq!(oracle_upper_bound(&arr, &0), 0);
    }

    #[test]
    fn test_groups_basic() {
        assert_eq!(oracle_groups(&[2, 2, 2, 5, 5, 9]), vec![(0, 3), (3, 5), (5, 6)]);
        assert!(oracle_groups::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_flat_set_map_basic() {
        let pairs = [(2, 'b'), (1, 'a'), (2, 'a'), (2, 'b')];
        assert_eq!(
            oracle_flat_set_map(&pairs),
            vec![(1, vec!['a']), (2, vec!['a', 'b'])]
        );
    }
}
