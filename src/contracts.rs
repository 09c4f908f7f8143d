//! Runtime contracts for the search invariants.
//!
//! Debug-mode assertions that catch a broken caller obligation (unsorted
//! input, an inverted range) or a broken algorithm (a result outside its
//! range) as close to the cause as possible. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. **Never call a user predicate or comparator**, so instrumented
//!    comparators count the same calls in debug and release builds
//! 3. Only measure distances on random-access cursors, where it is O(1)
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Invariant                                        |
//! |--------------------------|--------------------------------------------------|
//! | `check_sorted_by`        | input of a grouping build is sorted              |
//! | `check_result_within`    | partition point lies in `[first, last]`          |
//! | `check_group_shape`      | a group is empty only at the end of the sequence |
//! | `check_group_shape_back` | walking backward, empty only at the start        |

use crate::cursor::ForwardCursor;
use crate::range::RangePair;

/// Check that `items` is sorted under `less`.
///
/// Only for orders the crate owns (e.g. `Ord` on a key it just sorted);
/// user comparators are never invoked from a contract.
#[inline]
pub fn check_sorted_by<T, F>(items: &[T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if cfg!(debug_assertions) {
        for (i, pair) in items.windows(2).enumerate() {
            debug_assert!(
                !less(&pair[1], &pair[0]),
                "Contract violation: sorted input - items[{}] > items[{}]",
                i,
                i + 1
            );
        }
    }
}

/// Check that a partition point lies within `[first, last]`.
///
/// A no-op for cursors without O(1) distance.
#[inline]
pub fn check_result_within<'a, C: ForwardCursor<'a>>(first: &C, result: &C, last: &C) {
    if cfg!(debug_assertions) && C::RANDOM_ACCESS {
        let span = first.distance_to(last);
        let offset = first.distance_to(result);
        debug_assert!(
            offset <= span,
            "Contract violation: partition point {} past range end {}",
            offset,
            span
        );
    }
}

/// Check that a group is non-empty unless it sits at the sequence end.
#[inline]
pub fn check_group_shape<'a, C: ForwardCursor<'a>>(group: &RangePair<C>, last: &C) {
    debug_assert!(
        !group.is_empty() || group.first() == last,
        "Contract violation: empty group before the end of the sequence"
    );
}

/// Mirror of [`check_group_shape`] for backward steps: a group is non-empty
/// unless it ends at the sequence start.
#[inline]
pub fn check_group_shape_back<'a, C: ForwardCursor<'a>>(group: &RangePair<C>, first: &C) {
    debug_assert!(
        !group.is_empty() || group.last() == first,
        "Contract violation: empty group after the start of the sequence"
    );
}
