// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by checked cursor arithmetic.
//!
//! The search operations themselves never fail: a valid range, a strict weak
//! order and a monotonic predicate are caller obligations, and violating them
//! yields an unspecified (but memory-safe) cursor. What *is* checked is cursor
//! arithmetic: building a cursor past the end of its sequence, jumping outside
//! it, or pairing cursors that do not form a range.

use thiserror::Error;

/// Errors from checked cursor construction and movement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// A position outside `0..=len` was requested.
    #[error("cursor position {position} is out of range for a sequence of length {len}")]
    OutOfRange { position: isize, len: usize },

    /// The cursor sits at the end of its range and has no element.
    #[error("cursor is past the end and does not refer to an element")]
    PastTheEnd,

    /// `last` is not reachable from `first`.
    #[error("range end {last} precedes range start {first}")]
    InvertedRange { first: usize, last: usize },

    /// The two cursors traverse different sequences.
    #[error("cursors belong to different sequences")]
    ForeignCursor,
}
