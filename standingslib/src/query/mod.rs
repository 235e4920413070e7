//! Query processing: points rules, schema policy and ranking.
//!
//! This module handles the third stage of the pipeline - turning tallies
//! into an ordered standings sequence. It provides:
//!
//! - **Options**: `PointsRules` and `SchemaPolicy`
//! - **Ranking**: `rank` and the tie-break comparator `compare_standings`
//!
//! ## Example
//!
//! ```rust
//! use standingslib::data::{aggregate, Fixture, Score};
//! use standingslib::query::{rank, PointsRules};
//!
//! let fixtures = vec![Fixture::new("1", "", "A", "B", Score::new(0, 1))];
//! let table = rank(&aggregate(&fixtures), &PointsRules::STANDARD);
//! assert_eq!(table[0].team, "B");
//! ```

pub mod options;
pub mod ranking;

pub use options::{PointsRules, SchemaPolicy, DRAW_POINTS, LOSS_POINTS, WIN_POINTS};
pub use ranking::{compare_standings, is_ranked, rank};
