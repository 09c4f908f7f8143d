// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counted halving: the reference partition-point search.
//!
//! Classic binary search over a known element count. Takes
//! `floor(log2(n)) + 1` predicate calls at most no matter where the answer
//! is, which makes it the correctness oracle for the galloping variants and
//! their finishing phase once a bracket has been found.

use crate::cursor::ForwardCursor;

/// First position in `[first, first + n)` where `pred` is false.
///
/// `pred` must be true on a prefix of the span and false on the rest.
/// Returns `first + n` when it is true everywhere.
#[inline]
pub fn partition_point_n<'a, C, P>(mut first: C, mut n: usize, mut pred: P) -> C
where
    C: ForwardCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    // INVARIANT: pred is true before `first`, false from `first + n` onward
    while n != 0 {
        let half = n / 2;
        let mut middle = first.clone();
        middle.advance_n(half);
        if pred(middle.get()) {
            middle.advance();
            first = middle;
            n -= half + 1;
        } else {
            n = half;
        }
    }
    first
}

/// First position in `[first, last)` where `pred` is false.
///
/// Measures the range once (O(1) for random-access cursors, a walk
/// otherwise) and runs [`partition_point_n`].
#[inline]
pub fn partition_point<'a, C, P>(first: C, last: C, pred: P) -> C
where
    C: ForwardCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    let n = first.distance_to(&last);
    partition_point_n(first, n, pred)
}
