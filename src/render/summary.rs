//! Plain-text leaderboard summary for the terminal.

use crate::aggregator::Table;
use crate::utils::config::{GAMES_COLUMN, GOALS_COLUMN, NAME_COLUMN, RATE_COLUMN, TEAM_COLUMN};
use crate::utils::error::TableError;

/// Format the first `max_lines` records as a boxed table
pub fn generate_text_summary(table: &Table, max_lines: usize) -> Result<String, TableError> {
    let name_idx = table.column_index(NAME_COLUMN)?;
    let team_idx = table.column_index(TEAM_COLUMN)?;
    let goals_idx = table.column_index(GOALS_COLUMN)?;
    let games_idx = table.column_index(GAMES_COLUMN)?;
    let rate_idx = table.column_index(RATE_COLUMN)?;

    let mut lines = Vec::new();

    lines.push("  ⚽ TOP GOAL SCORERS (by goals per game)".to_string());
    lines.push("  ┏━━━━━┳━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━┳━━━━━━━┳━━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:>3} ┃ {:<24} ┃ {:<24} ┃ {:>5} ┃ {:>5} ┃ {:>8} ┃",
        "#", "Name", "Team", "Goals", "Games", "Per Game"
    ));
    lines.push("  ┣━━━━━╋━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━╋━━━━━━━╋━━━━━━━━━━┫".to_string());

    for (i, row) in table.rows.iter().take(max_lines).enumerate() {
        lines.push(format!(
            "  ┃ {:>3} ┃ {:<24} ┃ {:<24} ┃ {:>5} ┃ {:>5} ┃ {:>8} ┃",
            i + 1,
            truncate(&row.get(name_idx).to_string(), 24),
            truncate(&row.get(team_idx).to_string(), 24),
            row.get(goals_idx).to_string(),
            row.get(games_idx).to_string(),
            row.get(rate_idx).to_string(),
        ));
    }

    lines.push("  ┗━━━━━┻━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━┻━━━━━━━┻━━━━━━━━━━┛".to_string());

    if table.len() > max_lines {
        lines.push(String::new());
        lines.push(format!("   (Showing top {} of {} players)", max_lines, table.len()));
    }

    Ok(lines.join("\n"))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long player name", 10), "a very ...");
    }

    #[test]
    fn test_summary_mentions_remaining_rows() {
        let headers = ["Name", "Team", "Goals", "Games", "Per Game"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = |n: &str| vec![n.to_string(), "T".to_string(), "4".to_string(), "2".to_string(), "2.0".to_string()];
        let table = Table::from_strings(headers, vec![row("A"), row("B"), row("C")]);

        let summary = generate_text_summary(&table, 2).unwrap();

        assert!(summary.contains("(Showing top 2 of 3 players)"));
        assert!(summary.contains(" A "));
        assert!(!summary.contains(" C "));
    }
}
