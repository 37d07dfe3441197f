//! SVG chart output writer.
//!
//! Writes SVG content to files with proper encoding.

use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write SVG content to a file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    if output_path.extension().map_or(true, |ext| ext != "svg") {
        debug!("Warning: File does not have .svg extension: {}", output_path.display());
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!(
        "SVG written successfully ({} bytes, {:.2} KB)",
        svg_content.len(),
        svg_content.len() as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/chart.svg");

        write_svg(VALID_SVG, &nested_path).unwrap();

        assert_eq!(std::fs::read_to_string(&nested_path).unwrap(), VALID_SVG);
    }

    #[test]
    fn test_write_svg_rejects_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(write_svg(VALID_SVG, temp_dir.path()).is_err());
    }
}
