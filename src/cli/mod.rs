// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gallop command-line interface.
//!
//! Two subcommands: `count` measures comparator calls per target position
//! on a generated haystack, and `search` runs the bound operations on a
//! small sequence given on the command line.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

/// Default seed of the Mersenne Twister the first plots were made with, kept
/// so reports from the same size are comparable across runs.
pub const DEFAULT_SEED: u64 = 5489;

#[derive(Parser)]
#[command(
    name = "gallop",
    about = "Adaptive partition-point search: measure and compare strategies",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count comparator calls for a lower-bound search of every element
    Count {
        /// Number of unique elements in the haystack
        #[arg(short, long, default_value = "1000")]
        size: usize,

        /// Seed of the haystack generator
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Strategy to measure: binary, galloping, expensive_cmp, or all
        #[arg(long, default_value = "all")]
        strategy: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Run lower_bound, upper_bound and equal_range on a sorted sequence
    Search {
        /// Sorted, comma-separated values
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Value to search for
        #[arg(long, allow_negative_numbers = true)]
        key: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Benchmark-style JSON, one record per strategy and position
    Json,
    /// Min/mean/max summary per strategy
    Table,
}
