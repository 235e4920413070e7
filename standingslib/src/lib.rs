//! # standingslib
//!
//! Derive a ranked football league table from a season of match results.
//!
//! ## Overview
//!
//! Given one row per fixture (matchday, date, home team, full-time score,
//! away team) the library produces one standing per team: played, won,
//! drawn, lost, goals for and against, goal difference and points, ordered
//! by points, goal difference, goals scored and finally team name.
//!
//! The pipeline is:
//!
//! - **Source**: read raw rows (`source::read_fixtures`), locate upstream
//!   season files (`source::SeasonSource`)
//! - **Data**: classify scores into outcomes and tally per team
//! - **Query**: apply `PointsRules` and rank
//! - **Output**: table-ready rows and a CSV sink
//!
//! `TableBuilder` runs the middle stages and is pure: no I/O, no state kept
//! between builds.
//!
//! ## Example
//!
//! ```rust
//! use standingslib::{read_fixtures, to_csv_string, BuildOptions, TableBuilder};
//!
//! let csv = "\
//! Round,Date,Team 1,FT,Team 2
//! 1,Sat Aug 8 2020,A,2\u{2013}1,B
//! 2,Sat Aug 15 2020,B,0\u{2013}0,A
//! ";
//! let fixtures = read_fixtures(csv.as_bytes()).unwrap();
//! let standings = TableBuilder::new(BuildOptions::new()).build(&fixtures).unwrap();
//!
//! assert_eq!(standings.teams[0].team, "A");
//! assert_eq!(standings.teams[0].points, 4);
//!
//! let out = to_csv_string(&standings.teams).unwrap();
//! assert!(out.starts_with("team,played,win,draw,loss,scored,conceded,goal_difference,points"));
//! ```

pub mod builder;
pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use builder::{build_table, BuildOptions, BuildWarning, Standings, TableBuilder};
pub use data::{Fixture, Outcome, Record, Score, TeamResult, TeamStanding, SCORE_DELIMITER};
pub use error::{ScoreIssue, Side, StandingsError};
pub use output::{to_csv_string, write_csv, Columns, StandingsTable, TableRow, CSV_HEADERS};
pub use query::{PointsRules, SchemaPolicy, DRAW_POINTS, LOSS_POINTS, WIN_POINTS};
pub use source::{
    read_fixtures, read_fixtures_path, FixtureRow, FixtureTable, Level, Season, SeasonSource,
    EXPECTED_HEADERS,
};

/// Result type for standingslib operations
pub type Result<T> = std::result::Result<T, StandingsError>;
