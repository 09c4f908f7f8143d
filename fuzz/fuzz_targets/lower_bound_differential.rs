// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing every strategy against counted halving.
//!
//! The galloping variants take very different paths through the sequence
//! (sentinel at the midpoint, unchecked doubling, exponential walk on
//! forward-only cursors). Any disagreement with the plain halving search on
//! any sorted input is a bug.

#![no_main]

use arbitrary::Arbitrary;
use gallop::{
    Binary, ExpensivePredicate, Galloping, PartitionStrategy, Sequential, SliceCursor,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    key: i32,
    values: Vec<i32>,
    /// Start of the searched sub-range, taken modulo the length.
    start: u16,
}

fn check<S: PartitionStrategy>(values: &[i32], start: usize, key: i32, expected: (usize, usize)) {
    let first = SliceCursor::new(values, start).expect("start is within the slice");
    let last = SliceCursor::end(values);

    let slice = S::equal_range(first, last, &key);
    assert_eq!(
        (slice.first().position(), slice.last().position()),
        expected,
        "{} on slice cursors, key {}",
        S::NAME,
        key
    );

    let forward = S::equal_range(Sequential::new(first), Sequential::new(last), &key);
    assert_eq!(
        (forward.first().inner().position(), forward.last().inner().position()),
        expected,
        "{} on forward-only cursors, key {}",
        S::NAME,
        key
    );
}

fuzz_target!(|input: SearchInput| {
    let SearchInput {
        key,
        mut values,
        start,
    } = input;
    values.sort();
    let start = usize::from(start) % (values.len() + 1);

    let first = SliceCursor::new(&values, start).expect("start is within the slice");
    let last = SliceCursor::end(&values);
    let lower = Binary::lower_bound(first, last, &key).position();
    let upper = Binary::upper_bound(first, last, &key).position();

    // Property 1: the reference itself brackets exactly the equal elements
    assert!(values[start..lower].iter().all(|&v| v < key));
    assert!(values[lower..upper].iter().all(|&v| v == key));
    assert!(values[upper..].iter().all(|&v| v > key));

    // Property 2: every strategy, on every cursor kind, agrees
    check::<Binary>(&values, start, key, (lower, upper));
    check::<Galloping>(&values, start, key, (lower, upper));
    check::<ExpensivePredicate>(&values, start, key, (lower, upper));
});
