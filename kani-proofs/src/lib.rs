// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the gallop partition-point searches.
//!
//! This standalone crate restates counted halving and the exponential walk
//! over plain indices (a cursor is an index, a predicate is a closure over
//! it) and proves them against a linear scan for every small input.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither search overflows or probes outside `[0, len)`
//! 2. **Agreement**: both return the first false index for any prefix predicate
//! 3. **Call bound**: the walk makes at most `2 * floor(log2(d + 1)) + 2` calls

/// Largest sequence length the proofs cover.
pub const MAX_LEN: usize = 16;

// ============================================================================
// SEARCHES (index form of src/partition/)
// ============================================================================

/// Counted halving over `[first, first + n)`.
pub fn partition_point_n(mut first: usize, mut n: usize, pred: &mut impl FnMut(usize) -> bool) -> usize {
    while n > 0 {
        let half = n / 2;
        let middle = first + half;
        if pred(middle) {
            first = middle + 1;
            n -= half + 1;
        } else {
            n = half;
        }
    }
    first
}

/// Exponential walk over `[first, last)`, halving inside the failed step.
pub fn exponential_walk(mut first: usize, last: usize, pred: &mut impl FnMut(usize) -> bool) -> usize {
    let mut step: usize = 1;
    loop {
        let taken = step.min(last - first);
        let probe = first + taken;
        if probe == last || !pred(probe) {
            return partition_point_n(first, taken, pred);
        }
        first = probe + 1;
        step = step.saturating_mul(2);
    }
}

/// Reference: first index in `[first, last)` where `pred` is false.
pub fn linear_scan(first: usize, last: usize, pred: &mut impl FnMut(usize) -> bool) -> usize {
    (first..last).find(|&i| !pred(i)).unwrap_or(last)
}

/// `floor(log2(d + 1))`
pub fn log2_floor_plus_one(d: usize) -> u32 {
    usize::BITS - 1 - (d + 1).leading_zeros()
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Counted halving finds the boundary of every prefix predicate.
    #[kani::proof]
    #[kani::unwind(17)] // MAX_LEN + 1
    fn verify_partition_point_n_finds_boundary() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let boundary: usize = kani::any_where(|&b| b <= len);
        let mut pred = |i: usize| {
            kani::assert(i < len, "probe must stay inside the range");
            i < boundary
        };

        let found = partition_point_n(0, len, &mut pred);
        kani::assert(found == boundary, "must return the first false index");
    }

    /// The exponential walk agrees with a linear scan from any start.
    #[kani::proof]
    #[kani::unwind(17)]
    fn verify_exponential_walk_matches_linear_scan() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let first: usize = kani::any_where(|&f| f <= len);
        let boundary: usize = kani::any_where(|&b| b >= first && b <= len);
        let mut pred = |i: usize| {
            kani::assert(i >= first && i < len, "probe must stay inside the range");
            i < boundary
        };

        let expected = linear_scan(first, len, &mut |i| i < boundary);
        let found = exponential_walk(first, len, &mut pred);
        kani::assert(found == expected, "walk must agree with linear scan");
    }

    /// The walk's predicate-call bound.
    #[kani::proof]
    #[kani::unwind(17)]
    fn verify_exponential_walk_call_bound() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let boundary: usize = kani::any_where(|&b| b <= len);
        let mut calls = 0u32;
        let mut pred = |i: usize| {
            calls += 1;
            i < boundary
        };

        exponential_walk(0, len, &mut pred);
        kani::assert(
            calls <= 2 * log2_floor_plus_one(boundary) + 2,
            "walk must stay within 2*floor(log2(d+1))+2 calls",
        );
    }

    /// Empty ranges make no calls.
    #[kani::proof]
    fn verify_empty_range_makes_no_calls() {
        let at: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut pred = |_: usize| -> bool {
            kani::assert(false, "empty range must not call the predicate");
            true
        };
        kani::assert(exponential_walk(at, at, &mut pred) == at, "empty walk returns first");
        kani::assert(partition_point_n(at, 0, &mut pred) == at, "empty halving returns first");
    }
}
