// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Partition-point engine.
//!
//! Every search in the crate reduces to one question: given a predicate that
//! is true on a prefix of `[first, last)` and false on the rest, where is the
//! first false position? All variants here answer it identically for any
//! valid input and differ only in how many predicate calls and cursor steps
//! they spend.
//!
//! | Function                                   | Calls       | Best when                  |
//! |--------------------------------------------|-------------|----------------------------|
//! | [`partition_point`] / [`partition_point_n`] | O(log n)   | answer anywhere            |
//! | [`partition_point_galloping`]              | O(log d)    | answer near `first`        |
//! | [`partition_point_galloping_forward`]      | O(log d)    | forward-only traversal     |
//! | [`partition_point_galloping_random_access`]| O(log d)    | slices, O(1) distance      |
//! | [`partition_point_expensive`]              | ≤ 2·log(d)+2| predicate dominates cost   |
//!
//! `d` is the distance from `first` to the answer. All share the signature
//! `(first, last, pred) -> C`, so differential tests and benchmarks can swap
//! them freely.

mod counted;
mod galloping;

pub use counted::{partition_point, partition_point_n};
pub use galloping::{
    partition_point_expensive, partition_point_galloping, partition_point_galloping_forward,
    partition_point_galloping_random_access,
};
