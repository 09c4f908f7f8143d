// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Galloping (biased) partition-point search.
//!
//! Binary search spends `log2(n)` predicate calls wherever the answer is.
//! When the answer tends to sit near `first` (merging, grouping, cursors
//! that resume from the previous hit) an exponential probe finds it in
//! `O(log d)` calls, `d` being the distance from `first` to the answer.
//!
//! Two shapes, chosen by cursor capability:
//!
//! ```text
//! exponential walk (any cursor)          midpoint sentinel (random access)
//!
//! first                                  first        mid         last
//!   │ 1 │  2  │    4    │      8  ...      │ .......... │ .......... │
//!   └─probe─probe──probe───probe           p(mid)? yes -> first = mid+1
//!   failed probe -> counted halving          no  -> unchecked gallop from
//!   over the span just walked                       first, mid is the stop
//! ```
//!
//! The exponential walk never re-examines a position: the halving phase runs
//! over exactly the elements skipped by the failed probe, and the failed
//! probe itself is excluded. That is why it is also the variant to use when
//! the predicate is expensive, whatever the cursor.

use super::counted::partition_point_n;
use crate::contracts;
use crate::cursor::{ForwardCursor, RandomAccessCursor};

/// Galloping partition point, specialised on the cursor capability.
///
/// Random-access cursors run the midpoint-sentinel variant, all others the
/// exponential walk. Same contract as [`partition_point`](super::partition_point).
#[inline]
pub fn partition_point_galloping<'a, C, P>(first: C, last: C, pred: P) -> C
where
    C: ForwardCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    if C::RANDOM_ACCESS {
        gallop_with_sentinel(first, last, pred)
    } else {
        exponential_walk(first, last, pred)
    }
}

/// Galloping for forward-only traversal.
///
/// Callers holding a random-access cursor can use this to skip the midpoint
/// probe of the sentinel variant.
#[inline]
pub fn partition_point_galloping_forward<'a, C, P>(first: C, last: C, pred: P) -> C
where
    C: ForwardCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    exponential_walk(first, last, pred)
}

/// Galloping with a midpoint sentinel, for random-access cursors.
#[inline]
pub fn partition_point_galloping_random_access<'a, C, P>(first: C, last: C, pred: P) -> C
where
    C: RandomAccessCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    gallop_with_sentinel(first, last, pred)
}

/// Galloping that minimises predicate calls.
///
/// Locating a partition point at distance `d` takes at most
/// `2 * floor(log2(d + 1)) + 2` calls. Use it when a predicate call costs
/// more than moving the cursor.
#[inline]
pub fn partition_point_expensive<'a, C, P>(first: C, last: C, pred: P) -> C
where
    C: ForwardCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    exponential_walk(first, last, pred)
}

fn exponential_walk<'a, C, P>(mut first: C, last: C, mut pred: P) -> C
where
    C: ForwardCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    let mut step: usize = 1;
    loop {
        let mut probe = first.clone();
        let untaken = probe.advance_up_to(&last, step);

        // INVARIANT: pred is true everywhere before `first`
        if probe == last || !pred(probe.get()) {
            // The answer lies in the `step - untaken` elements just walked;
            // `probe` itself is either `last` or already known false.
            return partition_point_n(first, step - untaken, pred);
        }

        probe.advance();
        first = probe;
        step = step.saturating_mul(2);
    }
}

fn gallop_with_sentinel<'a, C, P>(mut first: C, last: C, mut pred: P) -> C
where
    C: ForwardCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    while first != last {
        let mut sentinel = first.clone();
        sentinel.advance_n(first.distance_to(&last) / 2);

        if !pred(sentinel.get()) {
            // INVARIANT: pred(sentinel) is false and sentinel lies in the
            // first half of [first, last), so no probe can reach `last`
            let found = gallop_unchecked(first.clone(), pred);
            contracts::check_result_within(&first, &found, &sentinel);
            return found;
        }

        sentinel.advance();
        first = sentinel;
    }
    first
}

/// Gallops from `first` with no end checks.
///
/// Requires a known false position `s` such that the distance from `first`
/// to the range end is at least `2 * (s - first)`. Three linear checks, then
/// probes at doubling offsets; a failed probe restarts the pattern from the
/// last known-true position.
fn gallop_unchecked<'a, C, P>(mut first: C, mut pred: P) -> C
where
    C: ForwardCursor<'a>,
    P: FnMut(&'a C::Element) -> bool,
{
    // INVARIANT: no probe passes the known false position by more than it
    // lies from the range end, so every probe is dereferenceable
    loop {
        for _ in 0..3 {
            if !pred(first.get()) {
                return first;
            }
            first.advance();
        }

        let mut step: usize = 2;
        loop {
            let mut probe = first.clone();
            probe.advance_n(step);
            if !pred(probe.get()) {
                break;
            }
            probe.advance();
            first = probe;
            step += step;
        }
    }
}
