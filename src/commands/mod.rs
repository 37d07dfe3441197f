//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod models;
pub mod scrape;
pub mod utils;

// Re-export main command functions
pub use inspect::execute_inspect;
pub use models::{ScrapeArgs, ScrapeReport};
pub use scrape::{execute_scrape, run_pipeline, validate_args};
pub use utils::display_version;
