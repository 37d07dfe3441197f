//! Chart rendering.
//!
//! Both charts are hand-built SVG documents on a dark theme:
//! - a styled table of the full leaderboard
//! - an annotated scatter of goals per game against games played
//!
//! A boxed text summary is also available for the terminal.

pub mod scatter;
pub mod summary;
pub mod svg;
pub mod table;
pub mod viewer;

// Re-export main functions
pub use scatter::render_scatter_svg;
pub use summary::generate_text_summary;
pub use table::render_table_svg;
pub use viewer::open_in_viewer;
