//! Dated CSV persistence of the aggregated table.
//!
//! One file per calendar day: a second run on the same day overwrites
//! the first.

use super::{ensure_parent_dir, validate_path};
use crate::aggregator::Table;
use crate::utils::config::{DATE_FORMAT, OUTPUT_FILE_EXTENSION, OUTPUT_FILE_PREFIX};
use crate::utils::error::OutputError;
use chrono::NaiveDate;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// File name for the given day, e.g. `ncaa_goal_scorers_stats_2024-09-07.csv`
pub fn dated_file_name(date: NaiveDate) -> String {
    format!(
        "{}{}.{}",
        OUTPUT_FILE_PREFIX,
        date.format(DATE_FORMAT),
        OUTPUT_FILE_EXTENSION
    )
}

/// Full destination path for the given day inside `dir`
pub fn dated_path(dir: impl AsRef<Path>, date: NaiveDate) -> PathBuf {
    dir.as_ref().join(dated_file_name(date))
}

/// Directory holding the running executable
pub fn default_output_dir() -> Result<PathBuf, OutputError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        OutputError::InvalidPath(format!("Executable has no parent: {}", exe.display()))
    })
}

/// Write the table as CSV: header row first, no index column
///
/// Existing files are truncated.
pub fn write_table(table: &Table, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing {} rows to: {}", table.len(), output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let mut writer = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_path)?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.cells.iter().map(ToString::to_string))?;
    }
    writer.flush()?;

    Ok(())
}

/// Persist the table to the dated file in `dir` and return its absolute path
pub fn persist_table(
    table: &Table,
    dir: impl AsRef<Path>,
    date: NaiveDate,
) -> Result<PathBuf, OutputError> {
    let path = dated_path(dir, date);

    write_table(table, &path)?;

    let absolute = std::fs::canonicalize(&path)?;
    info!("Table written successfully ({} rows)", table.len());

    Ok(absolute)
}

/// Read a persisted table back; every cell comes back as text
pub fn read_table(input_path: impl AsRef<Path>) -> Result<Table, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading table from: {}", input_path.display());

    let mut reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(input_path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::from_strings(headers, rows))
}
