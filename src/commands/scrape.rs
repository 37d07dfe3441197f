//! Scrape command implementation.
//!
//! The scrape command:
//! 1. Fetches every leaderboard page
//! 2. Extracts and aggregates the rows
//! 3. Writes the dated CSV
//! 4. Shapes the scatter groups
//! 5. Renders and opens both charts

use super::models::{ScrapeArgs, ScrapeReport};
use crate::aggregator::{aggregate, Table};
use crate::fetch::{PageClient, PageSource};
use crate::output::{default_output_dir, persist_table, write_groups, write_svg};
use crate::render::{generate_text_summary, open_in_viewer, render_scatter_svg, render_table_svg};
use crate::shaper::{shape, ScatterData};
use crate::utils::config::{SCATTER_CHART_FILE, TABLE_CHART_FILE};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the scrape command against the live site
///
/// Returns `None` when no page yielded any data.
pub fn execute_scrape(args: ScrapeArgs) -> Result<Option<ScrapeReport>> {
    let client = PageClient::new(args.timeout).context("Failed to create HTTP client")?;
    let today = Local::now().date_naive();

    run_pipeline(&client, &args, today)
}

/// Run every stage with the given page source and calendar date
pub fn run_pipeline<S: PageSource + ?Sized>(
    source: &S,
    args: &ScrapeArgs,
    today: NaiveDate,
) -> Result<Option<ScrapeReport>> {
    let start_time = Instant::now();

    info!("Step 1/5: Fetching {} pages from {}", args.pages.len(), args.base_url);
    let Some(table) = aggregate(source, &args.base_url, &args.pages)
        .context("Failed to aggregate scraped pages")?
    else {
        return Ok(None);
    };

    info!("Step 2/5: Writing dated table...");
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => default_output_dir().context("Failed to locate executable directory")?,
    };
    let csv_path = persist_table(&table, &output_dir, today).context("Failed to write table CSV")?;
    println!("✅ Data saved successfully to: {}", csv_path.display());

    info!("Step 3/5: Shaping scatter groups...");
    let scatter = shape(&table).context("Failed to group records")?;
    debug!("{} groups, {} top performers", scatter.points.len(), scatter.top.len());

    if let Some(path) = &args.export_groups {
        write_groups(&scatter, path).context("Failed to write groups JSON")?;
        info!("✓ Groups written to: {}", path.display());
    }

    let chart_dir = args.chart_dir.clone().unwrap_or_else(std::env::temp_dir);

    info!("Step 4/5: Rendering table chart...");
    let table_chart = display_table(&table, &chart_dir, args.open_charts)?;

    info!("Step 5/5: Rendering scatter chart...");
    let scatter_chart = display_scatter(&scatter, &chart_dir, args.open_charts)?;

    if args.print_summary {
        println!("\n{}", generate_text_summary(&table, 10).context("Failed to build summary")?);
    }

    info!("Scrape completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(Some(ScrapeReport {
        csv_path,
        table_chart,
        scatter_chart,
        rows: table.len(),
        groups: scatter.points.len(),
    }))
}

/// Render the table chart, write it and optionally open it
fn display_table(table: &Table, chart_dir: &Path, open: bool) -> Result<PathBuf> {
    let svg = render_table_svg(table);
    show_chart(&svg, &chart_dir.join(TABLE_CHART_FILE), open)
}

/// Render the scatter chart, write it and optionally open it
fn display_scatter(data: &ScatterData, chart_dir: &Path, open: bool) -> Result<PathBuf> {
    let svg = render_scatter_svg(data);
    show_chart(&svg, &chart_dir.join(SCATTER_CHART_FILE), open)
}

fn show_chart(svg: &str, path: &Path, open: bool) -> Result<PathBuf> {
    write_svg(svg, path).context("Failed to write chart SVG")?;

    if open {
        open_in_viewer(path).with_context(|| format!("Failed to open {}", path.display()))?;
    } else {
        info!("✓ Chart written to: {}", path.display());
    }

    Ok(path.to_path_buf())
}

/// Validate scrape arguments
///
/// **Public** - can be called before execute_scrape for early validation
pub fn validate_args(args: &ScrapeArgs) -> Result<()> {
    if args.base_url.is_empty() {
        anyhow::bail!("Base URL cannot be empty");
    }

    if !args.base_url.starts_with("http://") && !args.base_url.starts_with("https://") {
        anyhow::bail!("Base URL must start with http:// or https://");
    }

    if args.pages.is_empty() {
        anyhow::bail!("At least one page identifier is required");
    }

    if args.timeout.is_some_and(|t| t.is_zero()) {
        anyhow::bail!("Timeout must be greater than 0 seconds");
    }

    Ok(())
}
