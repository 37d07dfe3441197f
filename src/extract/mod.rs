//! HTML table extraction.
//!
//! Turns the raw markup of one leaderboard page into a header row and
//! a sequence of string rows.

pub mod table;

pub use table::{extract_table, RawTable};
