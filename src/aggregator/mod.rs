//! Aggregation of scraped pages into one sorted table.
//!
//! This module:
//! - Concatenates rows across pages under one canonical header
//! - Coerces the statistic columns to numbers
//! - Sorts by goals per game, highest first

pub mod collect;
pub mod table;

// Re-export main types and functions
pub use collect::{aggregate, collect_pages};
pub use table::{Cell, Record, Table};
