//! Error types for standingslib

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of a score string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Why a score string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreIssue {
    /// The en-dash delimiter was not found
    MissingDelimiter,
    /// One side is not a non-negative integer
    InvalidGoals { side: Side, text: String },
    /// One side is an integer larger than a goal count can be
    GoalsOutOfRange { side: Side, text: String },
}

impl fmt::Display for ScoreIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreIssue::MissingDelimiter => {
                write!(f, "expected two integers joined by '\u{2013}'")
            }
            ScoreIssue::InvalidGoals { side, text } => {
                write!(f, "{side} goals '{text}' is not a non-negative integer")
            }
            ScoreIssue::GoalsOutOfRange { side, text } => {
                write!(f, "{side} goals '{text}' exceed {}", u16::MAX)
            }
        }
    }
}

/// Errors that can occur while reading fixtures or building a table
#[derive(Error, Debug)]
pub enum StandingsError {
    /// Column headers do not match the expected fixture layout
    #[error("unexpected column headers: expected {expected:?}, found {found:?}")]
    Schema {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A fixture's score string could not be classified
    #[error(
        "invalid score '{value}' in row {row} (matchday {matchday}, {home_team} v {away_team}): {issue}"
    )]
    ScoreFormat {
        row: usize,
        matchday: String,
        home_team: String,
        away_team: String,
        value: String,
        issue: ScoreIssue,
    },

    /// A CSV record does not carry the five fixture fields
    #[error("line {line}: expected at least 5 fields, found {found}")]
    RowShape { line: usize, found: usize },

    /// Season string is not a valid `YYYY-YY` season
    #[error("invalid season '{value}': {reason}")]
    InvalidSeason { value: String, reason: String },

    /// League level out of range
    #[error("invalid league level {0}: levels start at 1")]
    InvalidLevel(u8),

    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV decoding or encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
