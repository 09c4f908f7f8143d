// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Comparator-invocation counting.
//!
//! Search cost on expensive keys is dominated by comparator calls, so this
//! module counts calls rather than time. The report shape follows the Google
//! Benchmark JSON format with the count in `real_time`:
//!
//! ```json
//! {"benchmarks":[{"name":"benchmark_search<galloping>/17","real_time":9.0}]}
//! ```
//!
//! so existing plotting scripts read it unchanged.

use crate::bounds::{Binary, ExpensivePredicate, Galloping, PartitionStrategy};
use crate::cursor::SliceCursor;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use std::cell::Cell;
use std::collections::BTreeSet;

/// Shared call counter for comparators.
///
/// Wrapped comparators borrow the counter, so several can feed one count.
#[derive(Debug, Default)]
pub struct ComparisonCounter {
    calls: Cell<u64>,
}

impl ComparisonCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `less` so every call is counted.
    pub fn wrap<'c, T, F>(&'c self, mut less: F) -> impl FnMut(&T, &T) -> bool + 'c
    where
        T: ?Sized + 'c,
        F: FnMut(&T, &T) -> bool + 'c,
    {
        move |a: &T, b: &T| {
            self.tick();
            less(a, b)
        }
    }

    #[inline]
    pub fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    pub fn count(&self) -> u64 {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }
}

/// Comparator calls `S` makes finding the lower bound of `key`.
pub fn count_lower_bound_calls<S, T>(haystack: &[T], key: &T) -> u64
where
    S: PartitionStrategy,
    T: Ord,
{
    let counter = ComparisonCounter::new();
    let (first, last) = SliceCursor::bounds(haystack);
    S::lower_bound_by(first, last, key, counter.wrap(|a: &T, b: &T| a < b));
    counter.count()
}

/// One measured search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationRecord {
    /// `benchmark_search<NAME>/POS`
    pub name: String,
    /// Comparator calls, as a float for benchmark-format consumers.
    pub real_time: f64,
    #[serde(skip)]
    pub strategy: &'static str,
    #[serde(skip)]
    pub position: usize,
    #[serde(skip)]
    pub calls: u64,
}

impl InvocationRecord {
    pub fn new(strategy: &'static str, position: usize, calls: u64) -> Self {
        Self {
            name: format!("benchmark_search<{}>/{}", strategy, position),
            real_time: calls as f64,
            strategy,
            position,
            calls,
        }
    }
}

/// A full measurement run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvocationReport {
    pub benchmarks: Vec<InvocationRecord>,
}

impl InvocationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = InvocationRecord>) {
        self.benchmarks.extend(records);
    }

    /// Records of one strategy, in position order.
    pub fn for_strategy<'r>(&'r self, name: &'r str) -> impl Iterator<Item = &'r InvocationRecord> + 'r {
        self.benchmarks.iter().filter(move |r| r.strategy == name)
    }

    /// `(min, mean, max)` call counts of one strategy.
    pub fn summary(&self, name: &str) -> Option<(u64, f64, u64)> {
        let mut n = 0u64;
        let mut total = 0u64;
        let mut min = u64::MAX;
        let mut max = 0u64;
        for record in self.for_strategy(name) {
            n += 1;
            total += record.calls;
            min = min.min(record.calls);
            max = max.max(record.calls);
        }
        (n > 0).then(|| (min, total as f64 / n as f64, max))
    }
}

/// One record per position of `haystack`, searching for the element there.
pub fn measure_positions<S, T>(haystack: &[T]) -> Vec<InvocationRecord>
where
    S: PartitionStrategy,
    T: Ord,
{
    haystack
        .iter()
        .enumerate()
        .map(|(position, key)| {
            InvocationRecord::new(S::NAME, position, count_lower_bound_calls::<S, T>(haystack, key))
        })
        .collect()
}

/// [`measure_positions`] for a strategy given by its `NAME`.
pub fn measure_by_name<T: Ord>(name: &str, haystack: &[T]) -> Option<Vec<InvocationRecord>> {
    if name == Binary::NAME {
        Some(measure_positions::<Binary, T>(haystack))
    } else if name == Galloping::NAME {
        Some(measure_positions::<Galloping, T>(haystack))
    } else if name == ExpensivePredicate::NAME {
        Some(measure_positions::<ExpensivePredicate, T>(haystack))
    } else {
        None
    }
}

/// `size` unique integers from `1..=10*size`, sorted; the same for a seed.
pub fn unique_sorted_haystack(size: usize, seed: u64) -> Vec<u64> {
    if size == 0 {
        return Vec::new();
    }
    let upper = (size as u64).saturating_mul(10);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut values = BTreeSet::new();
    while values.len() < size {
        values.insert(rng.gen_range(1..=upper));
    }
    values.into_iter().collect()
}
