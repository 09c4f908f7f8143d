// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equal-key grouping over a sorted range.
//!
//! Splits `[first, last)` into maximal runs of equivalent elements, lazily,
//! one run per step. Each step is a galloping `upper_bound` from the start of
//! the run, keyed on the run's first element:
//!
//! ```text
//!  2 2 2 5 5 9
//!  └─┬─┘└┬┘└┬┘      upper_bound(start, last, *start) gallops from `start`,
//!   g0   g1 g2      so a run of length k costs O(log k), not O(log n)
//! ```
//!
//! Because runs are usually short compared with what is left of the range,
//! the total cost over all groups stays close to linear.
//!
//! [`GroupEquals`] is the explicit state: the cached current group plus the
//! range and comparator. Cloning it clones the cached group, so copies advance
//! independently. [`Groups`] pairs a begin and an end state into an iterator;
//! it runs backward too when the cursor is bidirectional, using [`Rev`]
//! cursors and the comparator with its arguments swapped.

use crate::bounds::{Galloping, PartitionStrategy};
use crate::contracts;
use crate::cursor::{BidirectionalCursor, ForwardCursor, Rev, SliceCursor};
use crate::range::RangePair;
use std::fmt;
use std::iter::FusedIterator;

/// One position in the grouping sequence.
///
/// States compare equal when their current groups have the same bounds.
/// The terminal state is the empty group at `last`.
#[derive(Clone)]
pub struct GroupEquals<C, F> {
    first: C,
    last: C,
    current: RangePair<C>,
    less: F,
}

impl<'a, C, F> GroupEquals<C, F>
where
    C: ForwardCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool,
{
    /// State holding the first group of `[first, last)`.
    pub fn begin(first: C, last: C, less: F) -> Self {
        let start = first.clone();
        Self::starting_at(start, first, last, less)
    }

    /// Terminal state: the empty group at `last`.
    pub fn end(first: C, last: C, less: F) -> Self {
        let start = last.clone();
        Self::starting_at(start, first, last, less)
    }

    fn starting_at(start: C, first: C, last: C, less: F) -> Self {
        let mut state = Self {
            current: RangePair::new(start.clone(), start.clone()),
            first,
            last,
            less,
        };
        state.start_group_at(start);
        state
    }

    /// The cached group.
    pub fn current(&self) -> &RangePair<C> {
        &self.current
    }

    pub fn is_end(&self) -> bool {
        *self.current.first() == self.last
    }

    /// Moves to the next group. At the end this is a no-op.
    pub fn advance(&mut self) {
        let start = self.current.last().clone();
        self.start_group_at(start);
    }

    fn start_group_at(&mut self, start: C) {
        // INVARIANT: the group is empty only when it starts at `last`
        let end = if start == self.last {
            self.last.clone()
        } else {
            let key = start.get();
            Galloping::upper_bound_by(start.clone(), self.last.clone(), key, &mut self.less)
        };
        self.current = RangePair::new(start, end);
        contracts::check_group_shape(&self.current, &self.last);
    }
}

impl<'a, C, F> GroupEquals<C, F>
where
    C: BidirectionalCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool,
{
    /// Moves to the previous group. At the first group this yields the
    /// empty group at `first`.
    pub fn retreat(&mut self) {
        let end = self.current.first().clone();
        self.end_group_at(end);
    }

    fn end_group_at(&mut self, end: C) {
        let start = if end == self.first {
            self.first.clone()
        } else {
            // Walking backward the run is a prefix of the reversed range, and
            // "not after" under the swapped comparator ends it.
            let reversed = Rev::new(end.clone());
            let key = reversed.get();
            let less = &mut self.less;
            Galloping::upper_bound_by(reversed, Rev::new(self.first.clone()), key, |x, y| less(y, x))
                .into_base()
        };
        self.current = RangePair::new(start, end);
        contracts::check_group_shape_back(&self.current, &self.first);
    }
}

impl<C: PartialEq, F> PartialEq for GroupEquals<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: fmt::Debug, F> fmt::Debug for GroupEquals<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupEquals")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Lazy, restartable sequence of equal-key groups.
///
/// Clone it to restart from the same point. Never yields an empty group.
#[derive(Clone)]
pub struct Groups<C, F> {
    front: GroupEquals<C, F>,
    back: GroupEquals<C, F>,
}

impl<'a, C, F> Groups<C, F>
where
    C: ForwardCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool + Clone,
{
    pub fn new(first: C, last: C, less: F) -> Self {
        Self {
            front: GroupEquals::begin(first.clone(), last.clone(), less.clone()),
            back: GroupEquals::end(first, last, less),
        }
    }
}

impl<C, F> Groups<C, F> {
    /// The state the next forward step will yield.
    pub fn front(&self) -> &GroupEquals<C, F> {
        &self.front
    }
}

impl<'a, C, F> Iterator for Groups<C, F>
where
    C: ForwardCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool,
{
    type Item = RangePair<C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let group = self.front.current().clone();
        self.front.advance();
        Some(group)
    }
}

impl<'a, C, F> DoubleEndedIterator for Groups<C, F>
where
    C: BidirectionalCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.current().clone())
    }
}

impl<'a, C, F> FusedIterator for Groups<C, F>
where
    C: ForwardCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool,
{
}

impl<C: fmt::Debug, F> fmt::Debug for Groups<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Groups")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// Groups `[first, last)` into runs equivalent under `less`.
pub fn group_equals<'a, C, F>(first: C, last: C, less: F) -> Groups<C, F>
where
    C: ForwardCursor<'a>,
    F: FnMut(&C::Element, &C::Element) -> bool + Clone,
{
    Groups::new(first, last, less)
}

/// Groups a sorted slice into runs of equal elements.
pub fn group_equals_slice<T: PartialOrd>(slice: &[T]) -> Groups<SliceCursor<'_, T>, fn(&T, &T) -> bool> {
    let (first, last) = SliceCursor::bounds(slice);
    Groups::new(first, last, T::lt as fn(&T, &T) -> bool)
}
