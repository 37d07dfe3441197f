//! NCAA Scorers
//!
//! Scrapes the NCAA Division I men's soccer goals-per-game leaderboard,
//! saves the combined table to a dated CSV file and renders two charts:
//! a dark-themed table and an annotated scatter plot of goals per game
//! against games played.
//!
//! The pipeline runs once per invocation:
//! fetch → extract → aggregate → persist → shape → render.
//!
//! ```bash
//! ncaa-scorers --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod render;
pub mod shaper;
pub mod utils;
