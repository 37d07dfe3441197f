use crate::utils::config::{DEFAULT_BASE_URL, DEFAULT_PAGES};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the scrape command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ScrapeArgs {
    /// Leaderboard base URL
    pub base_url: String,

    /// Page identifiers appended to the base URL
    pub pages: Vec<String>,

    /// Directory for the dated CSV (None = next to the executable)
    pub output_dir: Option<PathBuf>,

    /// Directory for the SVG charts (None = system temp dir)
    pub chart_dir: Option<PathBuf>,

    /// Optional JSON export of the scatter groups
    pub export_groups: Option<PathBuf>,

    /// Request timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,

    /// Open the charts in the default viewer
    pub open_charts: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ScrapeArgs {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
            output_dir: None,
            chart_dir: None,
            export_groups: None,
            timeout: None,
            open_charts: true,
            print_summary: false,
        }
    }
}

/// Paths and counts produced by one scrape
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub csv_path: PathBuf,
    pub table_chart: PathBuf,
    pub scatter_chart: PathBuf,
    pub rows: usize,
    pub groups: usize,
}
