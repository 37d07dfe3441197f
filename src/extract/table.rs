//! Extract the first `<table>` of a page.

use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Header and rows of one scraped table, all as trimmed text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// True when the table carries both headers and at least one row
    pub fn is_complete(&self) -> bool {
        !self.headers.is_empty() && !self.rows.is_empty()
    }
}

const E: &str = "Invalid selector";

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").expect(E));
static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").expect(E));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect(E));
static DATA_CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect(E));

/// Extract headers and rows from the first table in `html`
///
/// Returns `None` (after logging) when the page has no table. Row length
/// is not checked against the header length.
pub fn extract_table(html: &str) -> Option<RawTable> {
    let document = Html::parse_document(html);

    let Some(table) = document.select(&TABLE).next() else {
        warn!("Statistics table not found.");
        return None;
    };

    let headers: Vec<String> = table
        .select(&HEADER_CELL)
        .map(cell_text)
        .collect();

    // First row is the header row
    let rows: Vec<Vec<String>> = table
        .select(&ROW)
        .skip(1)
        .map(|row| row.select(&DATA_CELL).map(cell_text).collect())
        .collect();

    debug!("Extracted {} headers and {} rows", headers.len(), rows.len());

    Some(RawTable { headers, rows })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_headers_and_rows() {
        let html = r#"
            <html><body>
            <table>
              <thead><tr><th> Rank </th><th>Name</th><th>Team</th></tr></thead>
              <tbody>
                <tr><td>1</td><td> Jane  Doe </td><td>State</td></tr>
                <tr><td>2</td><td>John Roe</td><td>Tech</td></tr>
              </tbody>
            </table>
            </body></html>
        "#;

        let table = extract_table(html).unwrap();

        assert_eq!(table.headers, vec!["Rank", "Name", "Team"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["1".to_string(), "Jane  Doe".to_string(), "State".to_string()],
                vec!["2".to_string(), "John Roe".to_string(), "Tech".to_string()],
            ]
        );
        assert!(table.is_complete());
    }

    #[test]
    fn test_missing_table() {
        assert!(extract_table("<html><body><p>maintenance</p></body></html>").is_none());
    }

    #[test]
    fn test_only_first_table_is_used() {
        let html = r#"
            <table><tr><th>A</th></tr><tr><td>1</td></tr></table>
            <table><tr><th>B</th></tr><tr><td>2</td></tr></table>
        "#;

        let table = extract_table(html).unwrap();

        assert_eq!(table.headers, vec!["A"]);
        assert_eq!(table.rows, vec![vec!["1".to_string()]]);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let html = r#"
            <table>
              <tr><th>Name</th><th>Team</th><th>Goals</th></tr>
              <tr><td>Short</td></tr>
              <tr><td>Long</td><td>T</td><td>3</td><td>extra</td></tr>
            </table>
        "#;

        let table = extract_table(html).unwrap();

        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_header_only_table_is_incomplete() {
        let html = "<table><tr><th>Name</th></tr></table>";
        let table = extract_table(html).unwrap();
        assert!(!table.is_complete());
    }
}
