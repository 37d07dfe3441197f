//! Output writers for the scraped table and rendered charts.
//!
//! This module handles writing data to disk in various formats:
//! - Dated CSV tables
//! - SVG charts
//! - JSON export of the shaped scatter groups

pub mod csv;
pub mod json;
pub mod svg;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use self::csv::{dated_file_name, dated_path, default_output_dir, persist_table, read_table, write_table};
pub use json::write_groups;
pub use svg::write_svg;

/// Validate that an output path is writable
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create parent directories of `path` if needed
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
