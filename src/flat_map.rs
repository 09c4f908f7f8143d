// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A sorted key → set-of-values map built with [`group_equals`].
//!
//! Building from unsorted `(key, value)` pairs is sort, dedup, then one
//! grouping pass: every group is one key with its values already sorted and
//! unique, so each entry is filled by moving a contiguous run.

use crate::bounds::{Binary, PartitionStrategy};
use crate::contracts;
use crate::cursor::{ForwardCursor, SliceCursor};
use crate::group::group_equals;

/// Sorted `Vec<(K, Vec<V>)>` with unique keys and sorted, unique values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatSetMap<K, V> {
    entries: Vec<(K, Vec<V>)>,
}

impl<K: Ord, V: Ord> FlatSetMap<K, V> {
    /// Builds the map, collapsing duplicate pairs.
    pub fn from_pairs(mut pairs: Vec<(K, V)>) -> Self {
        pairs.sort();
        pairs.dedup();
        contracts::check_sorted_by(&pairs, |a, b| a < b);

        let (first, last) = SliceCursor::bounds(&pairs);
        let lengths: Vec<usize> = group_equals(first, last, |x: &(K, V), y: &(K, V)| x.0 < y.0)
            .map(|group| group.len())
            .collect();

        let mut pairs = pairs.into_iter();
        let mut entries = Vec::with_capacity(lengths.len());
        for len in lengths {
            let mut group = pairs.by_ref().take(len);
            if let Some((key, value)) = group.next() {
                let mut values = Vec::with_capacity(len);
                values.push(value);
                values.extend(group.map(|(_, value)| value));
                entries.push((key, values));
            }
        }

        Self { entries }
    }

    /// Values stored under `key`.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        let (first, last) = SliceCursor::bounds(&self.entries);
        let found = Binary::lower_bound_by_key(first, last, key, |(k, _)| k);
        found
            .try_get()
            .ok()
            .filter(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V> FlatSetMap<K, V> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries.iter().map(|(k, values)| (k, values.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn into_inner(self) -> Vec<(K, Vec<V>)> {
        self.entries
    }
}

impl<K: Ord, V: Ord> FromIterator<(K, V)> for FlatSetMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().collect())
    }
}
