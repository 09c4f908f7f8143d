// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for equal-key grouping.
//!
//! Groups must tile the sorted input exactly: non-empty, adjacent, each one
//! a maximal run of equal values. Walking backward must yield the same
//! groups in reverse.

#![no_main]

use gallop::group_equals_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: Vec<u8>| {
    let mut values = values;
    values.sort();

    let forward: Vec<(usize, usize)> = group_equals_slice(&values)
        .map(|g| (g.first().position(), g.last().position()))
        .collect();

    let mut expected_start = 0;
    for (i, &(start, end)) in forward.iter().enumerate() {
        assert_eq!(start, expected_start, "group {} is not adjacent", i);
        assert!(start < end, "group {} is empty", i);
        assert!(values[start..end].iter().all(|&v| v == values[start]));
        if end < values.len() {
            assert_ne!(values[end], values[start], "group {} is not maximal", i);
        }
        expected_start = end;
    }
    assert_eq!(expected_start, values.len());

    let mut backward: Vec<(usize, usize)> = group_equals_slice(&values)
        .rev()
        .map(|g| (g.first().position(), g.last().position()))
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
});
