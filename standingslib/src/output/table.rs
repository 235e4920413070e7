//! Table-ready data structures for standings output.
//!
//! This module provides `StandingsTable`, a presentation-ready structure that
//! can be rendered as text or serialized to JSON.
//!
//! The data flow is:
//! 1. Raw rows (FixtureTable)
//! 2. Standings (classified, aggregated, ranked)
//! 3. StandingsTable (formatted strings for display)
//!
//! StandingsTable only formats; positions come from the order of
//! `Standings.teams`.

use serde::{Deserialize, Serialize};

use crate::builder::Standings;
use crate::data::standing::{Record, TeamStanding};

/// Which optional column groups to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Columns {
    /// Points per game
    pub ppg: bool,
    /// Home and away W-D-L and goals
    pub splits: bool,
}

impl Columns {
    /// Only the core columns
    pub fn core() -> Self {
        Self::default()
    }

    /// Every column group
    pub fn all() -> Self {
        Self {
            ppg: true,
            splits: true,
        }
    }

    /// Builder: toggle points-per-game
    pub fn with_ppg(mut self, enabled: bool) -> Self {
        self.ppg = enabled;
        self
    }

    /// Builder: toggle home/away splits
    pub fn with_splits(mut self, enabled: bool) -> Self {
        self.splits = enabled;
        self
    }
}

/// A single row in the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// League position, starting at 1
    pub position: usize,
    /// Team name
    pub label: String,
    /// Values for each column after `Pos` and `Team`
    pub values: Vec<String>,
}

/// Table-ready standings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsTable {
    /// Optional title (e.g., "england 2020-21 level 1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers: [Pos, Team, P, W, D, L, GF, GA, GD, Pts, ...]
    pub headers: Vec<String>,
    /// Data rows in ranked order
    pub rows: Vec<TableRow>,
    /// Summary line, e.g. "20 teams, 380 fixtures"
    pub footer: String,
    /// Downgraded build warnings
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}

impl StandingsTable {
    /// Create a table from built standings.
    pub fn from_standings(standings: &Standings, columns: Columns) -> Self {
        let headers = build_headers(&columns);
        let rows = standings
            .iter_ranked()
            .map(|(position, standing)| TableRow {
                position,
                label: standing.team.clone(),
                values: format_standing(standing, &columns),
            })
            .collect();

        StandingsTable {
            title: None,
            headers,
            rows,
            footer: build_footer(standings),
            warnings: standings.warnings.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Builder: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn build_headers(columns: &Columns) -> Vec<String> {
    let mut headers: Vec<String> = ["Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    if columns.ppg {
        headers.push("PPG".to_string());
    }
    if columns.splits {
        headers.push("Home".to_string());
        headers.push("Away".to_string());
    }
    headers
}

/// Goal difference with an explicit sign for positives.
fn format_goal_difference(gd: i64) -> String {
    if gd > 0 {
        format!("+{}", gd)
    } else {
        gd.to_string()
    }
}

/// Compact "W-D-L GF:GA" summary of a split.
fn format_split(record: &Record) -> String {
    format!(
        "{}-{}-{} {}:{}",
        record.win, record.draw, record.loss, record.scored, record.conceded
    )
}

fn format_standing(standing: &TeamStanding, columns: &Columns) -> Vec<String> {
    let mut values = vec![
        standing.played.to_string(),
        standing.win.to_string(),
        standing.draw.to_string(),
        standing.loss.to_string(),
        standing.scored.to_string(),
        standing.conceded.to_string(),
        format_goal_difference(standing.goal_difference),
        standing.points.to_string(),
    ];
    if columns.ppg {
        values.push(format!("{:.2}", standing.points_per_game()));
    }
    if columns.splits {
        values.push(format_split(&standing.home));
        values.push(format_split(&standing.away));
    }
    values
}

fn build_footer(standings: &Standings) -> String {
    let teams = standings.len();
    let fixtures = standings.fixture_count;
    format!(
        "{} team{}, {} fixture{}",
        teams,
        if teams == 1 { "" } else { "s" },
        fixtures,
        if fixtures == 1 { "" } else { "s" }
    )
}
