//! Collect rows from every page into a single table.

use super::table::{Record, Table};
use crate::extract::extract_table;
use crate::fetch::{page_url, PageSource};
use crate::utils::config::{NUMERIC_COLUMNS, RATE_COLUMN};
use crate::utils::error::TableError;
use log::{debug, info, warn};

/// Fetch and extract every page, concatenating the rows
///
/// Headers are taken from the first page that yields both headers and
/// rows. Pages without a table contribute nothing. Returns `None` when no
/// headers or no rows were collected at all.
pub fn collect_pages<S: PageSource + ?Sized>(
    source: &S,
    base_url: &str,
    pages: &[String],
) -> Option<Table> {
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Record> = Vec::new();
    let mut pages_with_rows = 0;

    for page in pages {
        let url = page_url(base_url, page);
        info!("Scraping page {}", url);

        let Some(html) = source.fetch(&url) else {
            continue;
        };

        let Some(raw) = extract_table(&html) else {
            continue;
        };

        if headers.is_none() && raw.is_complete() {
            debug!("Canonical headers from {}: {:?}", page, raw.headers);
            headers = Some(raw.headers.clone());
        }

        debug!("Page {} yielded {} rows", page, raw.rows.len());
        if !raw.rows.is_empty() {
            pages_with_rows += 1;
        }
        rows.extend(raw.rows.into_iter().map(Record::from_strings));
    }

    match headers {
        Some(headers) if !rows.is_empty() => {
            info!(
                "Collected {} rows from {} of {} pages",
                rows.len(),
                pages_with_rows,
                pages.len()
            );
            Some(Table::new(headers, rows))
        }
        _ => None,
    }
}

/// Collect, coerce the statistic columns and sort by goals per game
pub fn aggregate<S: PageSource + ?Sized>(
    source: &S,
    base_url: &str,
    pages: &[String],
) -> Result<Option<Table>, TableError> {
    let Some(mut table) = collect_pages(source, base_url, pages) else {
        warn!("No data to display.");
        return Ok(None);
    };

    table.coerce_numeric(NUMERIC_COLUMNS)?;
    table.sort_desc_by(RATE_COLUMN)?;

    Ok(Some(table))
}
