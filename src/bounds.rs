// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bound derivations: `lower_bound`, `upper_bound` and `equal_range`.
//!
//! Each bound is a partition point with a transformed predicate:
//!
//! ```text
//! lower_bound(v)  = partition_point(|e| e < v)
//! upper_bound(v)  = partition_point(|e| !(v < e))
//! equal_range(v)  = [lower_bound(v), upper_bound(v))
//! ```
//!
//! The search backend is a [`PartitionStrategy`]; the derivations are its
//! provided methods, so a strategy only has to say how it finds a partition
//! point. [`Binary`] overrides `equal_range_by` with a single descent that
//! splits once it meets an equal element. The galloping strategies run the
//! upper bound from the lower bound, never rescanning the prefix already
//! proven less than `v`.
//!
//! Comparators are strict weak orders given as "less" closures. The
//! comparator is only ever called through the closure, so callers can wrap it
//! (see [`crate::instrument`]) without the search knowing.

use crate::cursor::ForwardCursor;
use crate::partition::{
    partition_point, partition_point_expensive, partition_point_galloping, partition_point_n,
};
use crate::range::RangePair;

/// A partition-point backend and the bound operations derived from it.
pub trait PartitionStrategy {
    /// Stable name used in reports and benchmark ids.
    const NAME: &'static str;

    /// First position in `[first, last)` where `pred` is false.
    fn partition_point<'a, C, P>(first: C, last: C, pred: P) -> C
    where
        C: ForwardCursor<'a>,
        P: FnMut(&'a C::Element) -> bool;

    /// First position whose element is not less than `value`.
    #[inline]
    fn lower_bound_by<'a, C, F>(first: C, last: C, value: &C::Element, mut less: F) -> C
    where
        C: ForwardCursor<'a>,
        F: FnMut(&C::Element, &C::Element) -> bool,
    {
        Self::partition_point(first, last, |element| less(element, value))
    }

    /// First position whose element is greater than `value`.
    #[inline]
    fn upper_bound_by<'a, C, F>(first: C, last: C, value: &C::Element, mut less: F) -> C
    where
        C: ForwardCursor<'a>,
        F: FnMut(&C::Element, &C::Element) -> bool,
    {
        Self::partition_point(first, last, |element| !less(value, element))
    }

    /// The sub-range of elements equivalent to `value`.
    ///
    /// The upper bound search starts at the lower bound.
    #[inline]
    fn equal_range_by<'a, C, F>(first: C, last: C, value: &C::Element, mut less: F) -> RangePair<C>
    where
        C: ForwardCursor<'a>,
        F: FnMut(&C::Element, &C::Element) -> bool,
    {
        let lower = Self::lower_bound_by(first, last.clone(), value, &mut less);
        let upper = Self::upper_bound_by(lower.clone(), last, value, &mut less);
        RangePair::new(lower, upper)
    }

    /// First position whose projected key is not less than `key`.
    ///
    /// For lookups by a field of the element, without building a whole
    /// element to compare against.
    #[inline]
    fn lower_bound_by_key<'a, C, K, G>(first: C, last: C, key: &K, mut project: G) -> C
    where
        C: ForwardCursor<'a>,
        K: PartialOrd + ?Sized,
        G: FnMut(&C::Element) -> &K,
    {
        Self::partition_point(first, last, |element| project(element) < key)
    }

    /// First position whose projected key is greater than `key`.
    #[inline]
    fn upper_bound_by_key<'a, C, K, G>(first: C, last: C, key: &K, mut project: G) -> C
    where
        C: ForwardCursor<'a>,
        K: PartialOrd + ?Sized,
        G: FnMut(&C::Element) -> &K,
    {
        Self::partition_point(first, last, |element| !(key < project(element)))
    }

    /// The sub-range whose projected keys are equivalent to `key`.
    #[inline]
    fn equal_range_by_key<'a, C, K, G>(first: C, last: C, key: &K, mut project: G) -> RangePair<C>
    where
        C: ForwardCursor<'a>,
        K: PartialOrd + ?Sized,
        G: FnMut(&C::Element) -> &K,
    {
        let lower = Self::lower_bound_by_key(first, last.clone(), key, &mut project);
        let upper = Self::upper_bound_by_key(lower.clone(), last, key, &mut project);
        RangePair::new(lower, upper)
    }

    /// [`lower_bound_by`](Self::lower_bound_by) with the natural order.
    #[inline]
    fn lower_bound<'a, C>(first: C, last: C, value: &C::Element) -> C
    where
        C: ForwardCursor<'a>,
        C::Element: PartialOrd,
    {
        Self::lower_bound_by(first, last, value, |a, b| a < b)
    }

    /// [`upper_bound_by`](Self::upper_bound_by) with the natural order.
    #[inline]
    fn upper_bound<'a, C>(first: C, last: C, value: &C::Element) -> C
    where
        C: ForwardCursor<'a>,
        C::Element: PartialOrd,
    {
        Self::upper_bound_by(first, last, value, |a, b| a < b)
    }

    /// [`equal_range_by`](Self::equal_range_by) with the natural order.
    #[inline]
    fn equal_range<'a, C>(first: C, last: C, value: &C::Element) -> RangePair<C>
    where
        C: ForwardCursor<'a>,
        C::Element: PartialOrd,
    {
        Self::equal_range_by(first, last, value, |a, b| a < b)
    }
}

/// Counted halving: the reference backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

/// Galloping specialised on the cursor capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Galloping;

/// Galloping that minimises comparator calls on every cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpensivePredicate;

impl PartitionStrategy for Binary {
    const NAME: &'static str = "binary";

    #[inline]
    fn partition_point<'a, C, P>(first: C, last: C, pred: P) -> C
    where
        C: ForwardCursor<'a>,
        P: FnMut(&'a C::Element) -> bool,
    {
        partition_point(first, last, pred)
    }

    #[inline]
    fn equal_range_by<'a, C, F>(first: C, last: C, value: &C::Element, less: F) -> RangePair<C>
    where
        C: ForwardCursor<'a>,
        F: FnMut(&C::Element, &C::Element) -> bool,
    {
        let n = first.distance_to(&last);
        equal_range_n(first, n, value, less)
    }
}

impl PartitionStrategy for Galloping {
    const NAME: &'static str = "galloping";

    #[inline]
    fn partition_point<'a, C, P>(first: C, last: C, pred: P) -> C
    where
        C: ForwardCursor<'a>,
        P: FnMut(&'a C::Element) -> bool,
    {
        partition_point_galloping(first, last, pred)
    }
}

impl PartitionStrategy for ExpensivePredicate {
    const NAME: &'static str = "expensive_cmp";

    #[inline]
    fn partition_point<'a, C, P>(first: C, last: C, pred: P) -> C
    where
        C: ForwardCursor<'a>,
        P: FnMut(&'a C::Element) -> bool,
    {
        partition_point_expensive(first, last, pred)
    }
}

/// Names of every strategy, in report order.
pub const STRATEGY_NAMES: [&str; 3] = [Binary::NAME, Galloping::NAME, ExpensivePredicate::NAME];

// ============================================================================
// COUNTED BOUNDS
// ============================================================================

/// Lower bound within `[first, first + n)`.
#[inline]
pub fn lower_bound_n<'a, C, F>(first: C, n: usize, value: &C::Element, mut less: F) -> C
where
    C: ForwardCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool,
{
    partition_point_n(first, n, |element| less(element, value))
}

/// Upper bound within `[first, first + n)`.
#[inline]
pub fn upper_bound_n<'a, C, F>(first: C, n: usize, value: &C::Element, mut less: F) -> C
where
    C: ForwardCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool,
{
    partition_point_n(first, n, |element| !less(value, element))
}

/// Equal range within `[first, first + n)` in one descent.
///
/// Halves like [`partition_point_n`] until the probe is equivalent to
/// `value`. At that point the lower bound lies in the left part still in play
/// and the upper bound in the right part, so each is finished with its own
/// counted search over that part alone.
pub fn equal_range_n<'a, C, F>(mut first: C, mut n: usize, value: &C::Element, mut less: F) -> RangePair<C>
where
    C: ForwardCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool,
{
    // INVARIANT: elements before `first` are less than `value`, elements from
    // `first + n` on are greater
    while n != 0 {
        let half = n / 2;
        let mut middle = first.clone();
        middle.advance_n(half);
        let probe = middle.get();

        if less(probe, value) {
            middle.advance();
            first = middle;
            n -= half + 1;
        } else if less(value, probe) {
            n = half;
        } else {
            let lower = lower_bound_n(first, half, value, &mut less);
            middle.advance();
            let upper = upper_bound_n(middle, n - half - 1, value, &mut less);
            return RangePair::new(lower, upper);
        }
    }
    RangePair::new(first.clone(), first)
}

// ============================================================================
// REFERENCE SHORTHANDS
// ============================================================================

/// [`Binary`] lower bound with the natural order.
#[inline]
pub fn lower_bound<'a, C>(first: C, last: C, value: &C::Element) -> C
where
    C: ForwardCursor<'a>,
    C::Element: PartialOrd,
{
    Binary::lower_bound(first, last, value)
}

/// [`Binary`] upper bound with the natural order.
#[inline]
pub fn upper_bound<'a, C>(first: C, last: C, value: &C::Element) -> C
where
    C: ForwardCursor<'a>,
    C::Element: PartialOrd,
{
    Binary::upper_bound(first, last, value)
}

/// [`Binary`] equal range with the natural order.
#[inline]
pub fn equal_range<'a, C>(first: C, last: C, value: &C::Element) -> RangePair<C>
where
    C: ForwardCursor<'a>,
    C::Element: PartialOrd,
{
    Binary::equal_range(first, last, value)
}
