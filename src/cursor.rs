// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cursors: positions in a sequence, split by traversal capability.
//!
//! Every algorithm in this crate is written against [`ForwardCursor`]. The
//! capability of a concrete cursor decides which galloping variant runs:
//!
//! ```text
//! ForwardCursor        advance, equality         -> exponential walk
//!   └─ BidirectionalCursor   + retreat           -> reverse grouping
//!        └─ RandomAccessCursor  + O(1) jump/offset -> midpoint sentinel gallop
//! ```
//!
//! The selection happens through [`ForwardCursor::RANDOM_ACCESS`], an
//! associated constant that is resolved when the algorithm is monomorphized.
//! Random-access cursors also override the traversal hooks (`advance_n`,
//! `advance_up_to`, `distance_to`, ...) with O(1) versions, which is what
//! makes counted halving O(log n) on them. The
//! [`random_access_forward_hooks!`] and [`random_access_backward_hooks!`]
//! macros generate those overrides from `jump`/`offset_from`.
//!
//! # Element lifetime
//!
//! Cursor traits carry the lifetime of the underlying sequence, so
//! [`ForwardCursor::get`] hands out `&'a Element` that outlives the cursor
//! itself. Reverse adapters rely on this: [`Rev`] reads the element before
//! its base through a temporary copy of the base cursor.

use crate::error::CursorError;
use std::fmt;

/// Overrides the [`ForwardCursor`] traversal hooks with O(1) versions.
///
/// Expand inside `impl ForwardCursor<'a> for X` where `X` also implements
/// [`RandomAccessCursor`].
#[macro_export]
macro_rules! random_access_forward_hooks {
    () => {
        const RANDOM_ACCESS: bool = true;

        #[inline]
        fn advance_n(&mut self, n: usize) {
            $crate::cursor::RandomAccessCursor::jump(self, n as isize);
        }

        #[inline]
        fn advance_up_to(&mut self, last: &Self, n: usize) -> usize {
            let room = $crate::cursor::RandomAccessCursor::offset_from(last, self).max(0) as usize;
            let taken = n.min(room);
            $crate::cursor::RandomAccessCursor::jump(self, taken as isize);
            n - taken
        }

        #[inline]
        fn distance_to(&self, last: &Self) -> usize {
            let offset = $crate::cursor::RandomAccessCursor::offset_from(last, self);
            debug_assert!(offset >= 0, "range end precedes range start by {}", -offset);
            offset.max(0) as usize
        }
    };
}

/// Overrides the [`BidirectionalCursor`] traversal hooks with O(1) versions.
#[macro_export]
macro_rules! random_access_backward_hooks {
    () => {
        #[inline]
        fn retreat_n(&mut self, n: usize) {
            $crate::cursor::RandomAccessCursor::jump(self, -(n as isize));
        }

        #[inline]
        fn retreat_up_to(&mut self, first: &Self, n: usize) -> usize {
            let room = $crate::cursor::RandomAccessCursor::offset_from(self, first).max(0) as usize;
            let taken = n.min(room);
            $crate::cursor::RandomAccessCursor::jump(self, -(taken as isize));
            n - taken
        }
    };
}

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// A position in a sequence that can only move forward one step at a time.
///
/// Equality means "same position in the same sequence". A range `[first, last)`
/// is valid when `last` is reachable from `first` by finitely many `advance`
/// calls; every algorithm assumes its ranges are valid.
pub trait ForwardCursor<'a>: Clone + PartialEq {
    /// The element type the cursor refers to.
    type Element: ?Sized + 'a;

    /// `true` when the traversal hooks run in O(1).
    ///
    /// Galloping picks its variant from this constant; the branch is folded
    /// away per cursor type.
    const RANDOM_ACCESS: bool = false;

    /// Checked element access.
    fn try_get(&self) -> Result<&'a Self::Element, CursorError>;

    /// Element access for positions known to be inside the range.
    ///
    /// # Panics
    ///
    /// Panics with the [`CursorError`] message when the cursor has no element.
    #[inline]
    fn get(&self) -> &'a Self::Element {
        match self.try_get() {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }

    /// Moves to the next position.
    fn advance(&mut self);

    /// Moves `n` positions forward. The caller guarantees they exist.
    #[inline]
    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Moves at most `n` positions forward without passing `last`.
    ///
    /// Returns the number of steps that were *not* taken, so `n - result`
    /// is the distance actually walked.
    #[inline]
    fn advance_up_to(&mut self, last: &Self, mut n: usize) -> usize {
        while n != 0 && self != last {
            self.advance();
            n -= 1;
        }
        n
    }

    /// Number of `advance` calls needed to reach `last`.
    #[inline]
    fn distance_to(&self, last: &Self) -> usize {
        let mut cursor = self.clone();
        let mut n = 0;
        while cursor != *last {
            cursor.advance();
            n += 1;
        }
        n
    }
}

/// A cursor that can also step backward.
pub trait BidirectionalCursor<'a>: ForwardCursor<'a> {
    /// Moves to the previous position.
    fn retreat(&mut self);

    /// Moves `n` positions backward. The caller guarantees they exist.
    #[inline]
    fn retreat_n(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat();
        }
    }

    /// Moves at most `n` positions backward without passing `first`.
    ///
    /// Returns the number of steps that were not taken.
    #[inline]
    fn retreat_up_to(&mut self, first: &Self, mut n: usize) -> usize {
        while n != 0 && self != first {
            self.retreat();
            n -= 1;
        }
        n
    }
}

/// A cursor with O(1) offset arithmetic.
///
/// Implementors must expand [`random_access_forward_hooks!`] and
/// [`random_access_backward_hooks!`] in their `ForwardCursor` and
/// `BidirectionalCursor` impls so that the generic algorithms see the O(1)
/// traversal.
pub trait RandomAccessCursor<'a>: BidirectionalCursor<'a> {
    /// Moves by `delta` positions (negative moves backward).
    fn jump(&mut self, delta: isize);

    /// Signed distance from `origin` to `self`.
    fn offset_from(&self, origin: &Self) -> isize;
}

// ============================================================================
// SLICE CURSOR
// ============================================================================

/// Random-access cursor over a slice.
///
/// Two cursors are equal when they point into the same slice (same address
/// and length) at the same position.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at `pos`, which may be `slice.len()` (the end position).
    pub fn new(slice: &'a [T], pos: usize) -> Result<Self, CursorError> {
        if pos > slice.len() {
            return Err(CursorError::OutOfRange {
                position: isize::try_from(pos).unwrap_or(isize::MAX),
                len: slice.len(),
            });
        }
        Ok(Self { slice, pos })
    }

    /// Cursor at the first element.
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Cursor one past the last element.
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// `(begin, end)` of the whole slice.
    pub fn bounds(slice: &'a [T]) -> (Self, Self) {
        (Self::begin(slice), Self::end(slice))
    }

    /// Index of the cursor in its slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The slice this cursor traverses.
    #[inline]
    pub fn slice(&self) -> &'a [T] {
        self.slice
    }

    /// Moves by `delta`, refusing to leave `0..=len`.
    pub fn checked_jump(&mut self, delta: isize) -> Result<(), CursorError> {
        let len = self.slice.len();
        let target = isize::try_from(self.pos)
            .ok()
            .and_then(|pos| pos.checked_add(delta))
            .ok_or(CursorError::OutOfRange {
                position: if delta < 0 { isize::MIN } else { isize::MAX },
                len,
            })?;
        match usize::try_from(target) {
            Ok(pos) if pos <= len => {
                self.pos = pos;
                Ok(())
            }
            _ => Err(CursorError::OutOfRange {
                position: target,
                len,
            }),
        }
    }

    /// `true` when both cursors traverse the same slice.
    #[inline]
    pub fn same_sequence(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.slice.len() == other.slice.len()
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.same_sequence(other)
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &(self.pos as isize))
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T: 'a> ForwardCursor<'a> for SliceCursor<'a, T> {
    type Element = T;

    #[inline]
    fn try_get(&self) -> Result<&'a T, CursorError> {
        self.slice.get(self.pos).ok_or(CursorError::PastTheEnd)
    }

    #[inline]
    fn advance(&mut self) {
        self.pos = self.pos.wrapping_add(1);
    }

    random_access_forward_hooks!();
}

impl<'a, T: 'a> BidirectionalCursor<'a> for SliceCursor<'a, T> {
    /// Retreating from position 0 yields a before-the-beginning cursor
    /// whose `try_get` reports [`CursorError::PastTheEnd`].
    #[inline]
    fn retreat(&mut self) {
        self.pos = self.pos.wrapping_sub(1);
    }

    random_access_backward_hooks!();
}

impl<'a, T: 'a> RandomAccessCursor<'a> for SliceCursor<'a, T> {
    #[inline]
    fn jump(&mut self, delta: isize) {
        self.pos = self.pos.wrapping_add_signed(delta);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        debug_assert!(self.same_sequence(origin), "{}", CursorError::ForeignCursor);
        (self.pos as isize).wrapping_sub(origin.pos as isize)
    }
}

// ============================================================================
// ADAPTERS
// ============================================================================

/// Hides the O(1) arithmetic of a cursor.
///
/// Forward-only when wrapping a forward cursor, bidirectional when wrapping a
/// bidirectional one, never random access. Useful for linked traversals and
/// for exercising the forward-only algorithms on slice data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequential<C>(C);

impl<C> Sequential<C> {
    pub fn new(inner: C) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> &C {
        &self.0
    }

    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<'a, C: ForwardCursor<'a>> ForwardCursor<'a> for Sequential<C> {
    type Element = C::Element;

    #[inline]
    fn try_get(&self) -> Result<&'a C::Element, CursorError> {
        self.0.try_get()
    }

    #[inline]
    fn advance(&mut self) {
        self.0.advance();
    }
}

impl<'a, C: BidirectionalCursor<'a>> BidirectionalCursor<'a> for Sequential<C> {
    #[inline]
    fn retreat(&mut self) {
        self.0.retreat();
    }
}

/// Reverse traversal over a bidirectional cursor.
///
/// `Rev(c)` refers to the element *before* `c`, so `Rev(end)..Rev(begin)`
/// visits the sequence back to front. Keeps the capability of the base
/// cursor, including random access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rev<C> {
    base: C,
}

impl<C> Rev<C> {
    pub fn new(base: C) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn into_base(self) -> C {
        self.base
    }
}

impl<'a, C: BidirectionalCursor<'a>> ForwardCursor<'a> for Rev<C> {
    type Element = C::Element;

    const RANDOM_ACCESS: bool = C::RANDOM_ACCESS;

    #[inline]
    fn try_get(&self) -> Result<&'a C::Element, CursorError> {
        let mut before = self.base.clone();
        before.retreat();
        before.try_get()
    }

    #[inline]
    fn advance(&mut self) {
        self.base.retreat();
    }

    #[inline]
    fn advance_n(&mut self, n: usize) {
        self.base.retreat_n(n);
    }

    #[inline]
    fn advance_up_to(&mut self, last: &Self, n: usize) -> usize {
        self.base.retreat_up_to(&last.base, n)
    }

    #[inline]
    fn distance_to(&self, last: &Self) -> usize {
        last.base.distance_to(&self.base)
    }
}

impl<'a, C: BidirectionalCursor<'a>> BidirectionalCursor<'a> for Rev<C> {
    #[inline]
    fn retreat(&mut self) {
        self.base.advance();
    }

    #[inline]
    fn retreat_n(&mut self, n: usize) {
        self.base.advance_n(n);
    }

    #[inline]
    fn retreat_up_to(&mut self, first: &Self, n: usize) -> usize {
        self.base.advance_up_to(&first.base, n)
    }
}

impl<'a, C: RandomAccessCursor<'a>> RandomAccessCursor<'a> for Rev<C> {
    #[inline]
    fn jump(&mut self, delta: isize) {
        self.base.jump(-delta);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        origin.base.offset_from(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_cursor_walks_and_reads() {
        let data = [10, 20, 30];
        let (mut cursor, end) = SliceCursor::bounds(&data);
        assert_eq!(*cursor.get(), 10);
        cursor.advance();
        assert_eq!(*cursor.get(), 20);
        cursor.advance_n(2);
        assert_eq!(cursor, end);
        assert_eq!(cursor.try_get(), Err(CursorError::PastTheEnd));
    }

    #[test]
    fn test_slice_cursor_new_rejects_out_of_range() {
        let data = [1, 2, 3];
        assert!(SliceCursor::new(&data, 3).is_ok());
        assert_eq!(
            SliceCursor::new(&data, 4).unwrap_err(),
            CursorError::OutOfRange {
                position: 4,
                len: 3
            }
        );
    }

    #[test]
    fn test_checked_jump_reports_overrun() {
        let data = [1, 2, 3];
        let mut cursor = SliceCursor::begin(&data);
        assert!(cursor.checked_jump(3).is_ok());
        assert_eq!(
            cursor.checked_jump(1),
            Err(CursorError::OutOfRange {
                position: 4,
                len: 3
            })
        );
        assert_eq!(
            cursor.checked_jump(-4),
            Err(CursorError::OutOfRange {
                position: -1,
                len: 3
            })
        );
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_checked_jump_saturates_on_overflow() {
        let data = [1, 2, 3];
        let mut cursor = SliceCursor::new(&data, 2).unwrap();
        assert_eq!(
            cursor.checked_jump(isize::MAX),
            Err(CursorError::OutOfRange {
                position: isize::MAX,
                len: 3
            })
        );
        assert_eq!(cursor.position(), 2);

        let mut cursor = SliceCursor::begin(&data);
        assert_eq!(
            cursor.checked_jump(isize::MIN),
            Err(CursorError::OutOfRange {
                position: isize::MIN,
                len: 3
            })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_new_reports_huge_position_without_wrapping() {
        let units = [(); 3];
        assert_eq!(
            SliceCursor::new(&units, usize::MAX).unwrap_err(),
            CursorError::OutOfRange {
                position: isize::MAX,
                len: 3
            }
        );
    }

    #[test]
    fn test_cursors_over_different_slices_differ() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        assert_ne!(SliceCursor::begin(&a), SliceCursor::begin(&b));
        assert_eq!(SliceCursor::begin(&a), SliceCursor::begin(&a));
    }

    #[test]
    fn test_advance_up_to_reports_untaken_steps() {
        let data = [1, 2, 3, 4, 5];
        let (first, last) = SliceCursor::bounds(&data);

        let mut cursor = first;
        assert_eq!(cursor.advance_up_to(&last, 3), 0);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.advance_up_to(&last, 6), 4);
        assert_eq!(cursor, last);

        let mut slow = Sequential::new(first);
        assert_eq!(slow.advance_up_to(&Sequential::new(last), 8), 3);
        assert_eq!(slow.into_inner(), last);
    }

    #[test]
    fn test_distance_matches_across_capabilities() {
        let data = [0u8; 17];
        let (first, last) = SliceCursor::bounds(&data);
        assert_eq!(first.distance_to(&last), 17);
        assert_eq!(
            Sequential::new(first).distance_to(&Sequential::new(last)),
            17
        );
        assert_eq!(Rev::new(last).distance_to(&Rev::new(first)), 17);
    }

    #[test]
    fn test_rev_reads_element_before_base() {
        let data = [1, 2, 3];
        let (first, last) = SliceCursor::bounds(&data);
        let mut rev = Rev::new(last);
        let rend = Rev::new(first);

        let mut seen = Vec::new();
        while rev != rend {
            seen.push(*rev.get());
            rev.advance();
        }
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(rend.try_get(), Err(CursorError::PastTheEnd));
    }

    #[test]
    fn test_rev_keeps_random_access() {
        const fn random_access<'a, C: ForwardCursor<'a>>() -> bool {
            C::RANDOM_ACCESS
        }
        assert!(random_access::<SliceCursor<'_, i32>>());
        assert!(random_access::<Rev<SliceCursor<'_, i32>>>());
        assert!(!random_access::<Sequential<SliceCursor<'_, i32>>>());
        assert!(!random_access::<Rev<Sequential<SliceCursor<'_, i32>>>>());
    }

    #[test]
    fn test_rev_jump_and_offset() {
        let data = [1, 2, 3, 4, 5];
        let (first, last) = SliceCursor::bounds(&data);
        let mut rev = Rev::new(last);
        rev.jump(2);
        assert_eq!(*rev.get(), 3);
        assert_eq!(rev.offset_from(&Rev::new(last)), 2);
        assert_eq!(rev.distance_to(&Rev::new(first)), 3);
    }
}
