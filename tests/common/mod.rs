#![allow(dead_code)]

use ncaa_scorers::aggregator::Table;
use ncaa_scorers::fetch::PageSource;
use std::cell::RefCell;
use std::collections::HashMap;

pub const BASE_URL: &str = "https://stats.test/individual/5/";

pub fn headers() -> Vec<String> {
    ["Rank", "Name", "Team", "Cl", "Position", "Games", "Goals", "Per Game"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// (name, team, games, goals, per game)
pub type Row<'a> = (&'a str, &'a str, &'a str, &'a str, &'a str);

pub fn row_strings(rank: usize, (name, team, games, goals, rate): Row<'_>) -> Vec<String> {
    vec![
        rank.to_string(),
        name.to_string(),
        team.to_string(),
        "Sr.".to_string(),
        "F".to_string(),
        games.to_string(),
        goals.to_string(),
        rate.to_string(),
    ]
}

/// Leaderboard page markup in the shape the live site serves
pub fn page_html(rows: &[Row<'_>]) -> String {
    let mut html = String::from("<html><body><div class=\"stats\"><table><thead><tr>");
    for h in headers() {
        html.push_str(&format!("<th>{}</th>", h));
    }
    html.push_str("</tr></thead><tbody>");
    for (i, row) in rows.iter().enumerate() {
        html.push_str("<tr>");
        for cell in row_strings(i + 1, *row) {
            html.push_str(&format!("<td>\n  {}\n</td>", cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div></body></html>");
    html
}

/// Sorted-ready table with text cells
pub fn table(rows: &[Row<'_>]) -> Table {
    Table::from_strings(
        headers(),
        rows.iter()
            .enumerate()
            .map(|(i, r)| row_strings(i + 1, *r))
            .collect(),
    )
}

/// In-memory page source; unknown URLs fail like a network error
#[derive(Default)]
pub struct StubSource {
    pub pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl StubSource {
    pub fn with_page(mut self, page: &str, html: String) -> Self {
        self.pages.insert(format!("{}{}", BASE_URL, page), html);
        self
    }
}

impl PageSource for StubSource {
    fn fetch(&self, url: &str) -> Option<String> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned()
    }
}

pub fn pages(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|p| p.to_string()).collect()
}
