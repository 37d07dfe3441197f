//! Shape the sorted table into scatter-plot points.
//!
//! Records sharing the same (goals per game, games played) collapse into
//! one point, since coincident markers cannot be told apart on a scatter
//! plot. Each point carries its label, hover text and marker size, and the
//! leading records are flagged as top performers.

pub mod groups;
pub mod points;

pub use groups::{group_by_rate_games, matching_rows, top_performers, Group, TopPerformer};
pub use points::{display_label, hover_text, marker_size, shape, ScatterData, ScatterPoint};
