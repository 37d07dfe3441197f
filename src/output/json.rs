//! JSON export of the shaped scatter data.

use super::{ensure_parent_dir, validate_path};
use crate::shaper::ScatterData;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write the scatter points and top performers as pretty JSON
pub fn write_groups(data: &ScatterData, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} groups to: {}", data.points.len(), output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, data).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaper::{Group, ScatterPoint, TopPerformer};

    #[test]
    fn test_write_groups() {
        let data = ScatterData {
            points: vec![ScatterPoint {
                group: Group {
                    rate: 1.5,
                    games: 4.0,
                    names: vec!["A".to_string()],
                    teams: vec!["X".to_string()],
                    mean_goals: Some(6.0),
                    count: 1,
                    members: vec![0],
                },
                label: String::new(),
                hover: "Name: A\n".to_string(),
                marker_size: 20,
                highlighted: true,
            }],
            top: vec![TopPerformer {
                position: 0,
                name: "A".to_string(),
                team: "X".to_string(),
                rate: Some(1.5),
                games: Some(4.0),
            }],
        };

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("groups.json");
        write_groups(&data, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["points"][0]["group"]["names"][0], "A");
        assert_eq!(value["points"][0]["marker_size"], 20);
        assert!(value["points"][0]["group"].get("members").is_none());
        assert_eq!(value["top"][0]["rate"], 1.5);
    }
}
