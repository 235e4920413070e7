//! Data collection: classify fixtures and accumulate per-team records.
//!
//! This module handles the second stage of the pipeline - turning raw rows
//! into typed fixtures and summing them per team. It provides:
//!
//! - **Classification**: `Score`, `Outcome` and `Fixture::classify`
//! - **Records**: `Record` counters and the final `TeamStanding`
//! - **Aggregation**: one linear pass into `Tallies`
//!
//! ## Example
//!
//! ```rust
//! use standingslib::data::{aggregate, Fixture, Score};
//!
//! let fixtures = vec![Fixture::new("1", "", "A", "B", Score::new(2, 1))];
//! let tallies = aggregate(&fixtures);
//! assert_eq!(tallies.get("A").unwrap().home.win, 1);
//! ```

pub mod aggregate;
pub mod fixture;
pub mod standing;

pub use aggregate::{aggregate, Tallies, TeamTally};
pub use fixture::{classify_all, Fixture, Outcome, Score, TeamResult, SCORE_DELIMITER};
pub use standing::{Record, TeamStanding};
