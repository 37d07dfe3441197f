mod common;

use chrono::NaiveDate;
use ncaa_scorers::aggregator::Table;
use ncaa_scorers::output::{dated_path, persist_table, read_table, validate_path, write_table};
use pretty_assertions::assert_eq;
use std::path::Path;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 7).unwrap()
}

fn as_strings(table: &Table) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|r| r.cells.iter().map(ToString::to_string).collect())
        .collect()
}

fn sorted_table() -> Table {
    let mut table = common::table(&[
        ("A, Jr.", "X \"State\"", "5", "10", "2.0"),
        ("B", "Y", "5", "10", "2.0"),
        ("C", "Z", "5", "6", "1.2"),
        ("D", "W", "3", "-", "-"),
    ]);
    table.coerce_numeric(&["Goals", "Per Game", "Games"]).unwrap();
    table.sort_desc_by("Per Game").unwrap();
    table
}

#[test]
fn test_persist_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let table = sorted_table();

    let path = persist_table(&table, temp_dir.path(), day()).unwrap();
    let loaded = read_table(&path).unwrap();

    assert!(path.is_absolute());
    assert!(path.ends_with("ncaa_goal_scorers_stats_2024-09-07.csv"));
    assert_eq!(loaded.headers, table.headers);
    assert_eq!(as_strings(&loaded), as_strings(&table));
}

#[test]
fn test_round_trip_values_coerce_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let table = sorted_table();

    let path = persist_table(&table, temp_dir.path(), day()).unwrap();
    let mut loaded = read_table(&path).unwrap();
    loaded.coerce_numeric(&["Goals", "Per Game", "Games"]).unwrap();

    assert_eq!(loaded, table);
}

#[test]
fn test_same_day_overwrites() {
    let temp_dir = tempfile::tempdir().unwrap();
    let big = sorted_table();
    let small = common::table(&[("Solo", "T", "1", "1", "1.0")]);

    let first = persist_table(&big, temp_dir.path(), day()).unwrap();
    let second = persist_table(&small, temp_dir.path(), day()).unwrap();

    let reference = temp_dir.path().join("reference.csv");
    write_table(&small, &reference).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        std::fs::read_to_string(&second).unwrap(),
        std::fs::read_to_string(&reference).unwrap()
    );
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[test]
fn test_different_days_get_different_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let next_day = day().succ_opt().unwrap();

    assert_ne!(dated_path(temp_dir.path(), day()), dated_path(temp_dir.path(), next_day));
}

#[test]
fn test_csv_layout_has_no_index_column() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("table.csv");
    let table = common::table(&[("A", "X", "5", "10", "2.0")]);

    write_table(&table, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Rank,Name,Team,Cl,Position,Games,Goals,Per Game"));
    assert_eq!(lines.next(), Some("1,A,X,Sr.,F,5,10,2.0"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_ragged_rows_are_written() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("ragged.csv");
    let table = Table::from_strings(
        vec!["Name".to_string(), "Team".to_string()],
        vec![vec!["A".to_string()], vec!["B".to_string(), "Y".to_string(), "extra".to_string()]],
    );

    write_table(&table, &path).unwrap();
    let loaded = read_table(&path).unwrap();

    assert_eq!(as_strings(&loaded), as_strings(&table));
}

#[test]
fn test_persist_into_missing_directory_fails_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("not_a_dir");
    std::fs::write(&file, "x").unwrap();

    assert!(persist_table(&sorted_table(), &file, day()).is_err());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}
