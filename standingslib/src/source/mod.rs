//! Source ingestion: get raw fixture rows into memory.
//!
//! This module handles the first stage of the pipeline - turning upstream
//! data into a `FixtureTable` the builder can consume. It provides:
//!
//! - **CSV reading**: `read_fixtures` / `read_fixtures_path`
//! - **Season addressing**: `Season`, `Level` and `SeasonSource` for locating
//!   a season file in the footballcsv repositories
//!
//! Nothing here interprets scores; rows stay as strings until the data stage.
//!
//! ## Example
//!
//! ```rust
//! use standingslib::source::{read_fixtures, SeasonSource};
//!
//! let csv = "Round,Date,Team 1,FT,Team 2\n1,Sat Aug 8 2020,Fulham FC,0\u{2013}3,Arsenal FC\n";
//! let table = read_fixtures(csv.as_bytes()).unwrap();
//! assert_eq!(table.rows.len(), 1);
//!
//! let source = SeasonSource::new("2020-21".parse().unwrap());
//! assert!(source.url().ends_with("/2020s/2020-21/eng.1.csv?raw=true"));
//! ```

pub mod reader;
pub mod season;

pub use reader::{read_fixtures, read_fixtures_path, FixtureRow, FixtureTable, EXPECTED_HEADERS};
pub use season::{Level, Season, SeasonSource, DEFAULT_COUNTRY};
