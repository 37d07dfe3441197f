//! Group records by (rate, games played).

use crate::aggregator::Table;
use crate::utils::config::{GAMES_COLUMN, GOALS_COLUMN, NAME_COLUMN, RATE_COLUMN, TEAM_COLUMN};
use crate::utils::error::TableError;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

/// Records collapsed onto one (rate, games) point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// Goals per game shared by every member
    pub rate: f64,

    /// Games played shared by every member
    pub games: f64,

    /// Member names in table order
    pub names: Vec<String>,

    /// Member teams in table order
    pub teams: Vec<String>,

    /// Mean goal count over members with a numeric goal value
    pub mean_goals: Option<f64>,

    /// Number of members
    pub count: usize,

    /// Row indices of the members in the source table
    #[serde(skip)]
    pub members: Vec<usize>,
}

impl Group {
    /// Comma-joined member names
    pub fn player_names(&self) -> String {
        self.names.join(", ")
    }

    /// Comma-joined member teams
    pub fn team_names(&self) -> String {
        self.teams.join(", ")
    }

    fn matches(&self, rate: f64, games: f64) -> bool {
        self.rate == rate && self.games == games
    }
}

/// One of the leading records of the sorted table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    /// Position in the table (0 = best)
    pub position: usize,
    pub name: String,
    pub team: String,
    pub rate: Option<f64>,
    pub games: Option<f64>,
}

/// Group records by the composite (rate, games) key
///
/// Records missing either key value are left out. Groups come back in
/// ascending key order; members keep table order.
pub fn group_by_rate_games(table: &Table) -> Result<Vec<Group>, TableError> {
    let rate_idx = table.column_index(RATE_COLUMN)?;
    let games_idx = table.column_index(GAMES_COLUMN)?;
    let name_idx = table.column_index(NAME_COLUMN)?;
    let team_idx = table.column_index(TEAM_COLUMN)?;
    let goals_idx = table.column_index(GOALS_COLUMN)?;

    let mut groups: Vec<Group> = Vec::new();
    let mut goal_totals: Vec<(f64, usize)> = Vec::new();

    for (row_idx, row) in table.rows.iter().enumerate() {
        let (Some(rate), Some(games)) = (row.get(rate_idx).as_number(), row.get(games_idx).as_number())
        else {
            continue;
        };

        let slot = match groups.iter().position(|g| g.matches(rate, games)) {
            Some(slot) => slot,
            None => {
                groups.push(Group {
                    rate,
                    games,
                    names: Vec::new(),
                    teams: Vec::new(),
                    mean_goals: None,
                    count: 0,
                    members: Vec::new(),
                });
                goal_totals.push((0.0, 0));
                groups.len() - 1
            }
        };

        let group = &mut groups[slot];
        group.names.push(row.get(name_idx).to_string());
        group.teams.push(row.get(team_idx).to_string());
        group.count += 1;
        group.members.push(row_idx);

        if let Some(goals) = row.get(goals_idx).as_number() {
            let totals = &mut goal_totals[slot];
            totals.0 += goals;
            totals.1 += 1;
        }
    }

    for (group, (sum, n)) in groups.iter_mut().zip(goal_totals) {
        if n > 0 {
            group.mean_goals = Some(sum / n as f64);
        }
    }

    groups.sort_by(|a, b| {
        a.rate
            .partial_cmp(&b.rate)
            .unwrap_or(Ordering::Equal)
            .then(a.games.partial_cmp(&b.games).unwrap_or(Ordering::Equal))
    });

    debug!("Grouped {} records into {} points", table.len(), groups.len());

    Ok(groups)
}

/// The first `n` records of the table (fewer if the table is shorter)
pub fn top_performers(table: &Table, n: usize) -> Result<Vec<TopPerformer>, TableError> {
    let rate_idx = table.column_index(RATE_COLUMN)?;
    let games_idx = table.column_index(GAMES_COLUMN)?;
    let name_idx = table.column_index(NAME_COLUMN)?;
    let team_idx = table.column_index(TEAM_COLUMN)?;

    Ok(table
        .rows
        .iter()
        .take(n)
        .enumerate()
        .map(|(position, row)| TopPerformer {
            position,
            name: row.get(name_idx).to_string(),
            team: row.get(team_idx).to_string(),
            rate: row.get(rate_idx).as_number(),
            games: row.get(games_idx).as_number(),
        })
        .collect())
}

/// Row indices of every record with the given (rate, games)
pub fn matching_rows(table: &Table, rate: f64, games: f64) -> Result<Vec<usize>, TableError> {
    let rate_idx = table.column_index(RATE_COLUMN)?;
    let games_idx = table.column_index(GAMES_COLUMN)?;

    Ok(table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row.get(rate_idx).as_number() == Some(rate) && row.get(games_idx).as_number() == Some(games)
        })
        .map(|(idx, _)| idx)
        .collect())
}
