//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests agree on their inputs.

#![doc(hidden)]

/// `0, 1, ..., n - 1`.
pub fn iota(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// Each `i` in `1..=max` repeated `i` times: `1, 2, 2, 3, 3, 3, ...`.
///
/// Groups of every length from 1 to `max`, so grouping and equal-range tests
/// see short and long runs in one input.
pub fn triangular_runs(max: usize) -> Vec<i32> {
    (1..=max as i32)
        .flat_map(|i| std::iter::repeat(i).take(i as usize))
        .collect()
}

/// Linear-scan partition point: index of the first element where `pred`
/// is false.
pub fn linear_partition_point<T>(items: &[T], mut pred: impl FnMut(&T) -> bool) -> usize {
    items.iter().position(|x| !pred(x)).unwrap_or(items.len())
}

/// Linear-scan `(lower_bound, upper_bound)` of `value`.
pub fn linear_bounds<T: PartialOrd>(items: &[T], value: &T) -> (usize, usize) {
    let lower = items.iter().filter(|x| *x < value).count();
    let upper = items.iter().filter(|x| !(value < *x)).count();
    (lower, upper)
}
