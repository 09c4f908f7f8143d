//! Adaptive partition-point search over cursors.
//!
//! Binary search spends `log n` comparisons no matter where the answer is.
//! When the answer is usually close to where the search starts (merging,
//! grouping runs of equal keys, walking a sorted sequence in order), a
//! galloping search that probes `first+1, first+2, first+4, ...` and halves
//! inside the bracket it finds costs `O(log d)` instead, where `d` is the
//! distance to the answer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  cursor.rs  │────▶│  partition/  │────▶│  bounds.rs  │
//! │ (Forward,   │     │ (counted,    │     │ (lower/upper│
//! │  Rev, Slice)│     │  galloping)  │     │  equal_range│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐                          ┌─────────────┐
//! │  range.rs   │◀─────────────────────────│  group.rs   │
//! │ (RangePair) │                          │ (Groups)    │
//! └─────────────┘                          └─────────────┘
//!                                                 │
//!                            ┌────────────────────┴──────┐
//!                            ▼                           ▼
//!                     ┌─────────────┐            ┌──────────────┐
//!                     │ flat_map.rs │            │instrument.rs │
//!                     └─────────────┘            └──────────────┘
//! ```
//!
//! | Module        | Key Properties                                        |
//! |---------------|-------------------------------------------------------|
//! | `partition`   | All variants return the same first-false position     |
//! | `bounds`      | `lower <= upper`, derived from one partition point    |
//! | `group`       | Groups are non-empty, adjacent, and cover the range   |
//! | `contracts`   | Debug checks that never call user comparators         |
//!
//! # Usage
//!
//! ```
//! use gallop::{group_equals_slice, Galloping, PartitionStrategy, SliceCursor};
//!
//! let data = [1, 3, 3, 3, 8];
//! let (first, last) = SliceCursor::bounds(&data);
//! let range = Galloping::equal_range(first, last, &3);
//! assert_eq!(range.indices(), 1..4);
//!
//! let runs: Vec<usize> = group_equals_slice(&data).map(|g| g.len()).collect();
//! assert_eq!(runs, vec![1, 3, 1]);
//! ```

// Module declarations
pub mod bounds;
pub mod contracts;
pub mod cursor;
pub mod error;
pub mod flat_map;
pub mod group;
pub mod instrument;
pub mod partition;
pub mod range;
pub mod testing;

// Re-exports for public API
pub use bounds::{
    equal_range, equal_range_n, lower_bound, lower_bound_n, upper_bound, upper_bound_n, Binary,
    ExpensivePredicate, Galloping, PartitionStrategy, STRATEGY_NAMES,
};
pub use cursor::{BidirectionalCursor, ForwardCursor, RandomAccessCursor, Rev, Sequential, SliceCursor};
pub use error::CursorError;
pub use flat_map::FlatSetMap;
pub use group::{group_equals, group_equals_slice, GroupEquals, Groups};
pub use instrument::{
    count_lower_bound_calls, measure_by_name, measure_positions, unique_sorted_haystack,
    ComparisonCounter, InvocationRecord, InvocationReport,
};
pub use partition::{
    partition_point, partition_point_expensive, partition_point_galloping,
    partition_point_galloping_forward, partition_point_galloping_random_access, partition_point_n,
};
pub use range::{RangeIter, RangePair};
