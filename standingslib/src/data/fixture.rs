//! Fixtures and outcome classification.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScoreIssue, Side, StandingsError};
use crate::source::FixtureRow;
use crate::Result;

/// Separator between home and away goals in upstream score strings (en-dash).
pub const SCORE_DELIMITER: char = '\u{2013}';

/// Categorical result of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::HomeWin => "home_win",
            Outcome::AwayWin => "away_win",
            Outcome::Draw => "draw",
        };
        write!(f, "{s}")
    }
}

/// Result of a fixture from one participant's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamResult {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Result for the home side.
    pub fn for_home(self) -> TeamResult {
        match self {
            Outcome::HomeWin => TeamResult::Win,
            Outcome::AwayWin => TeamResult::Loss,
            Outcome::Draw => TeamResult::Draw,
        }
    }

    /// Result for the away side.
    pub fn for_away(self) -> TeamResult {
        match self {
            Outcome::HomeWin => TeamResult::Loss,
            Outcome::AwayWin => TeamResult::Win,
            Outcome::Draw => TeamResult::Draw,
        }
    }
}

/// Full-time score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Classify the score. Draws stay draws however they were settled.
    pub fn outcome(&self) -> Outcome {
        match self.home.cmp(&self.away) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Parse `"2–1"` style strings.
    pub fn parse(s: &str) -> std::result::Result<Self, ScoreIssue> {
        let (home, away) = s
            .split_once(SCORE_DELIMITER)
            .ok_or(ScoreIssue::MissingDelimiter)?;
        Ok(Self {
            home: parse_goals(home, Side::Home)?,
            away: parse_goals(away, Side::Away)?,
        })
    }
}

impl FromStr for Score {
    type Err = ScoreIssue;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Score::parse(s)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.home, SCORE_DELIMITER, self.away)
    }
}

fn parse_goals(text: &str, side: Side) -> std::result::Result<u32, ScoreIssue> {
    let trimmed = text.trim();
    // u32::from_str accepts a leading '+'
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScoreIssue::InvalidGoals {
            side,
            text: text.to_string(),
        });
    }
    // Goals per side are bounded by u16
    trimmed
        .parse::<u16>()
        .map(u32::from)
        .map_err(|_| ScoreIssue::GoalsOutOfRange {
            side,
            text: text.to_string(),
        })
}

/// A played fixture with its score resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub matchday: String,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub score: Score,
}

impl Fixture {
    pub fn new(
        matchday: impl Into<String>,
        date: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        score: Score,
    ) -> Self {
        Self {
            matchday: matchday.into(),
            date: date.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            score,
        }
    }

    /// Classify a raw row. `row` is the 1-based position of the fixture in
    /// its table and is only used for error reporting.
    pub fn classify(raw: &FixtureRow, row: usize) -> Result<Self> {
        let score = Score::parse(&raw.score).map_err(|issue| StandingsError::ScoreFormat {
            row,
            matchday: raw.matchday.clone(),
            home_team: raw.home_team.clone(),
            away_team: raw.away_team.clone(),
            value: raw.score.clone(),
            issue,
        })?;
        Ok(Self {
            matchday: raw.matchday.clone(),
            date: raw.date.clone(),
            home_team: raw.home_team.clone(),
            away_team: raw.away_team.clone(),
            score,
        })
    }

    pub fn outcome(&self) -> Outcome {
        self.score.outcome()
    }

    /// Both participants carry the same name.
    pub fn is_self_play(&self) -> bool {
        self.home_team == self.away_team
    }
}

/// Classify every row, failing on the first malformed score.
pub fn classify_all(rows: &[FixtureRow]) -> Result<Vec<Fixture>> {
    rows.iter()
        .enumerate()
        .map(|(idx, raw)| Fixture::classify(raw, idx + 1))
        .collect()
}
