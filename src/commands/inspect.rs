//! Inspect command: read a persisted table back and summarize it.

use crate::output::read_table;
use crate::render::generate_text_summary;
use crate::utils::config::{NUMERIC_COLUMNS, RATE_COLUMN, TOP_PERFORMER_COUNT};
use anyhow::{Context, Result};
use std::path::Path;

/// Print headers, row count and the leading records of a saved CSV
pub fn execute_inspect(file_path: &Path) -> Result<()> {
    println!("Inspecting table: {}", file_path.display());

    let mut table = read_table(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    println!("✓ Valid table CSV");
    println!("  Columns: {}", table.headers.join(", "));
    println!("  Rows:    {}", table.len());

    table
        .coerce_numeric(NUMERIC_COLUMNS)
        .context("Table is missing a statistic column")?;
    table.sort_desc_by(RATE_COLUMN)?;

    println!("{}", generate_text_summary(&table, TOP_PERFORMER_COUNT)?);

    Ok(())
}
