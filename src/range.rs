// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range-pairs: two cursors bounding a sub-sequence.
//!
//! Used as the result of `equal_range` and as one emitted group of the
//! grouping sequence. Immutable once built.

use crate::cursor::{BidirectionalCursor, ForwardCursor, SliceCursor};
use crate::error::CursorError;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Half-open span `[first, last)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePair<C> {
    first: C,
    last: C,
}

impl<C> RangePair<C> {
    /// Pairs two cursors. `last` must be reachable from `first`.
    pub const fn new(first: C, last: C) -> Self {
        Self { first, last }
    }

    pub fn first(&self) -> &C {
        &self.first
    }

    pub fn last(&self) -> &C {
        &self.last
    }

    pub fn into_parts(self) -> (C, C) {
        (self.first, self.last)
    }
}

impl<'a, C: ForwardCursor<'a>> RangePair<C> {
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Number of elements; O(1) for random-access cursors.
    pub fn len(&self) -> usize {
        self.first.distance_to(&self.last)
    }

    /// Iterates the elements of the range.
    pub fn iter(&self) -> RangeIter<'a, C> {
        RangeIter {
            front: self.first.clone(),
            back: self.last.clone(),
            _sequence: PhantomData,
        }
    }
}

impl<'a, T> RangePair<SliceCursor<'a, T>> {
    /// Validated pair: both cursors on the same slice, `first <= last`.
    pub fn try_new(first: SliceCursor<'a, T>, last: SliceCursor<'a, T>) -> Result<Self, CursorError> {
        if !first.same_sequence(&last) {
            return Err(CursorError::ForeignCursor);
        }
        if first.position() > last.position() {
            return Err(CursorError::InvertedRange {
                first: first.position(),
                last: last.position(),
            });
        }
        Ok(Self::new(first, last))
    }

    /// Index range within the underlying slice.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.first.position()..self.last.position()
    }

    /// The sub-slice this pair bounds.
    pub fn as_slice(&self) -> &'a [T] {
        &self.first.slice()[self.indices()]
    }
}

impl<'a, T> IntoIterator for RangePair<SliceCursor<'a, T>> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Iterator over the elements of a [`RangePair`].
#[derive(Debug, Clone)]
pub struct RangeIter<'a, C> {
    front: C,
    back: C,
    _sequence: PhantomData<&'a ()>,
}

impl<'a, C: ForwardCursor<'a>> Iterator for RangeIter<'a, C> {
    type Item = &'a C::Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.front.get();
        self.front.advance();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if C::RANDOM_ACCESS {
            let n = self.front.distance_to(&self.back);
            (n, Some(n))
        } else {
            (usize::from(self.front != self.back), None)
        }
    }
}

impl<'a, C: BidirectionalCursor<'a>> DoubleEndedIterator for RangeIter<'a, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.get())
    }
}

impl<'a, C: ForwardCursor<'a>> FusedIterator for RangeIter<'a, C> {}
