//! NCAA Scorers CLI
//!
//! Scrapes the NCAA D1 men's soccer goal scorer leaderboard,
//! saves a dated CSV and charts the leaders.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::warn;
use ncaa_scorers::commands::{
    display_version, execute_inspect, execute_scrape, validate_args, ScrapeArgs,
};
use ncaa_scorers::utils::config::{DEFAULT_BASE_URL, DEFAULT_PAGES};
use std::path::PathBuf;
use std::time::Duration;

/// NCAA Scorers - goal scorer leaderboard scraper
#[derive(Parser, Debug)]
#[command(name = "ncaa-scorers")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to scrape)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape the leaderboard, save the CSV and render the charts
    Scrape(ScrapeOpts),

    /// Summarize a previously saved CSV
    Inspect {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

#[derive(Args, Debug)]
struct ScrapeOpts {
    /// Leaderboard base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Page identifiers appended to the base URL
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_PAGES.iter().map(|p| p.to_string()).collect::<Vec<_>>())]
    pages: Vec<String>,

    /// Directory for the dated CSV (defaults to the executable's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Directory for the SVG charts (defaults to the system temp dir)
    #[arg(long)]
    chart_dir: Option<PathBuf>,

    /// Write the scatter groups as JSON
    #[arg(long)]
    export_groups: Option<PathBuf>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Write the charts without opening them
    #[arg(long)]
    no_open: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,
}

impl Default for ScrapeOpts {
    fn default() -> Self {
        let defaults = ScrapeArgs::default();
        Self {
            base_url: defaults.base_url,
            pages: defaults.pages,
            output_dir: None,
            chart_dir: None,
            export_groups: None,
            timeout: None,
            no_open: false,
            summary: false,
        }
    }
}

impl From<ScrapeOpts> for ScrapeArgs {
    fn from(opts: ScrapeOpts) -> Self {
        Self {
            base_url: opts.base_url,
            pages: opts.pages,
            output_dir: opts.output_dir,
            chart_dir: opts.chart_dir,
            export_groups: opts.export_groups,
            timeout: opts.timeout.map(Duration::from_secs),
            open_charts: !opts.no_open,
            print_summary: opts.summary,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command.unwrap_or_else(|| Commands::Scrape(ScrapeOpts::default())) {
        Commands::Scrape(opts) => {
            let args = ScrapeArgs::from(opts);

            // Validate args first
            validate_args(&args)?;

            if execute_scrape(args)?.is_none() {
                warn!("Nothing was saved or rendered");
            }
        }

        Commands::Inspect { file } => {
            execute_inspect(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
