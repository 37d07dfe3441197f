//! Dark-themed table chart of the full leaderboard.

use super::svg::escape_xml;
use crate::aggregator::Table;
use crate::utils::config::TABLE_TITLE;
use log::info;

const CHAR_WIDTH: usize = 7;
const CELL_PADDING: usize = 16;
const MIN_COLUMN_WIDTH: usize = 40;
const HEADER_HEIGHT: usize = 28;
const ROW_HEIGHT: usize = 24;
const TITLE_HEIGHT: usize = 50;
const MARGIN: usize = 20;

/// Render the table as an SVG document
///
/// Header row on black, body cells on dark slate gray, white text
/// aligned left, title centered above.
pub fn render_table_svg(table: &Table) -> String {
    let widths = column_widths(table);
    let table_width: usize = widths.iter().sum();
    let width = table_width + 2 * MARGIN;
    let height = TITLE_HEIGHT + HEADER_HEIGHT + table.len() * ROW_HEIGHT + 2 * MARGIN;

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="black"/>"#,
        width, height
    ));

    svg.push_str(&format!(
        r#"<text x="{}" y="{}" font-family="sans-serif" font-size="18" fill="white" text-anchor="middle">{}</text>"#,
        width / 2,
        MARGIN + 20,
        escape_xml(TABLE_TITLE)
    ));

    // Header
    let header_y = MARGIN + TITLE_HEIGHT;
    let mut x = MARGIN;
    for (header, w) in table.headers.iter().zip(&widths) {
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="black" stroke="rgb(47, 79, 79)"/>"#,
            x, header_y, w, HEADER_HEIGHT
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="12" fill="white">{}</text>"#,
            x + CELL_PADDING / 2,
            header_y + 18,
            escape_xml(header)
        ));
        x += w;
    }

    // Body
    for (row_idx, row) in table.rows.iter().enumerate() {
        let y = header_y + HEADER_HEIGHT + row_idx * ROW_HEIGHT;
        let mut x = MARGIN;
        for (col_idx, w) in widths.iter().enumerate() {
            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="darkslategray" stroke="black"/>"#,
                x, y, w, ROW_HEIGHT
            ));
            let value = row.get(col_idx).to_string();
            if !value.is_empty() {
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" font-family="sans-serif" font-size="11" fill="white">{}</text>"#,
                    x + CELL_PADDING / 2,
                    y + 16,
                    escape_xml(&value)
                ));
            }
            x += w;
        }
    }

    svg.push_str("</svg>");

    info!("Table chart generated ({} rows, {} bytes)", table.len(), svg.len());
    svg
}

/// Width of each header column, sized to its longest value
fn column_widths(table: &Table) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let longest = table
                .rows
                .iter()
                .map(|row| row.get(idx).to_string().chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0);
            (longest * CHAR_WIDTH + CELL_PADDING).max(MIN_COLUMN_WIDTH)
        })
        .collect()
}
