//! Output formatting: present standings as tables or CSV.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting ranked standings for a sink. It provides:
//!
//! - **StandingsTable**: Table-ready structure with headers, rows, and footer
//! - **CSV sink**: `write_csv` / `to_csv_string` with the nine-field header
//!
//! Nothing here sorts or aggregates; order comes from the builder.
//!
//! ## Example
//!
//! ```rust,ignore
//! use standingslib::output::{to_csv_string, Columns, StandingsTable};
//!
//! let table = StandingsTable::from_standings(&standings, Columns::core());
//! let csv = to_csv_string(&standings.teams)?;
//! ```

pub mod table;
pub mod writer;

pub use table::{Columns, StandingsTable, TableRow};
pub use writer::{to_csv_string, write_csv, CSV_HEADERS};
