//! Per-point labels, hover text and marker sizing.

use super::groups::{group_by_rate_games, matching_rows, top_performers, Group, TopPerformer};
use crate::aggregator::Table;
use crate::utils::config::{
    GAMES_COLUMN, GOALS_COLUMN, MARKER_SIZE_DEFAULT, MARKER_SIZE_TOP, MAX_NAMED_GROUP, NAME_COLUMN,
    RATE_COLUMN, TEAM_COLUMN, TOP_PERFORMER_COUNT,
};
use crate::utils::error::TableError;
use serde::Serialize;

/// One marker of the scatter plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub group: Group,

    /// Text drawn under the marker
    pub label: String,

    /// Multi-line tooltip listing every member
    pub hover: String,

    /// Marker diameter in px
    pub marker_size: u32,

    /// True when a top performer is among the members
    pub highlighted: bool,
}

/// Everything the scatter renderer needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterData {
    pub points: Vec<ScatterPoint>,
    pub top: Vec<TopPerformer>,
}

/// Label under a marker
///
/// Groups of more than two read "<n> Players"; smaller groups list the
/// members that are not top performers, who get their own callouts.
pub fn display_label(group: &Group, top_names: &[&str]) -> String {
    if group.count > MAX_NAMED_GROUP {
        return format!("{} Players", group.count);
    }

    group
        .names
        .iter()
        .filter(|name| !top_names.contains(&name.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tooltip for a group, rebuilt from every matching record of the table
pub fn hover_text(table: &Table, group: &Group) -> Result<String, TableError> {
    let name_idx = table.column_index(NAME_COLUMN)?;
    let team_idx = table.column_index(TEAM_COLUMN)?;
    let goals_idx = table.column_index(GOALS_COLUMN)?;
    let games_idx = table.column_index(GAMES_COLUMN)?;
    let rate_idx = table.column_index(RATE_COLUMN)?;

    let mut text = String::new();
    for idx in matching_rows(table, group.rate, group.games)? {
        let row = &table.rows[idx];
        text.push_str(&format!(
            "Name: {}\nTeam: {}\nGoals: {}\nGames: {}\nGoals Per Game: {}\n\n",
            row.get(name_idx),
            row.get(team_idx),
            row.get(goals_idx),
            row.get(games_idx),
            row.get(rate_idx),
        ));
    }
    Ok(text)
}

/// Marker size: boosted when any member is a top performer
pub fn marker_size(group: &Group, top_names: &[&str]) -> u32 {
    if is_highlighted(group, top_names) {
        MARKER_SIZE_TOP
    } else {
        MARKER_SIZE_DEFAULT
    }
}

fn is_highlighted(group: &Group, top_names: &[&str]) -> bool {
    group.names.iter().any(|name| top_names.contains(&name.as_str()))
}

/// Build the scatter points for a table sorted by rate
pub fn shape(table: &Table) -> Result<ScatterData, TableError> {
    let groups = group_by_rate_games(table)?;
    let top = top_performers(table, TOP_PERFORMER_COUNT)?;
    let top_names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();

    let mut points = Vec::with_capacity(groups.len());
    for group in groups {
        points.push(ScatterPoint {
            label: display_label(&group, &top_names),
            hover: hover_text(table, &group)?,
            marker_size: marker_size(&group, &top_names),
            highlighted: is_highlighted(&group, &top_names),
            group,
        });
    }

    Ok(ScatterData { points, top })
}
