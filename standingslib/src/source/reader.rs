//! CSV reading for season result files.
//!
//! Upstream files carry one fixture per line with the columns
//! `Round,Date,Team 1,FT,Team 2`. The reader keeps everything as strings and
//! records the headers exactly as found (no trimming) so the builder can
//! enforce the column contract itself.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::StandingsError;
use crate::Result;

/// Column labels a season file must carry, in order.
pub const EXPECTED_HEADERS: [&str; 5] = ["Round", "Date", "Team 1", "FT", "Team 2"];

/// One unparsed fixture line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRow {
    /// Matchday label (`Round`), opaque
    pub matchday: String,
    /// Kick-off date (`Date`), opaque
    pub date: String,
    /// Home team (`Team 1`)
    pub home_team: String,
    /// Full-time score (`FT`), e.g. `2–1`
    pub score: String,
    /// Away team (`Team 2`)
    pub away_team: String,
}

impl FixtureRow {
    /// Build a row from its five fields in upstream order.
    pub fn new(
        matchday: impl Into<String>,
        date: impl Into<String>,
        home_team: impl Into<String>,
        score: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            matchday: matchday.into(),
            date: date.into(),
            home_team: home_team.into(),
            score: score.into(),
            away_team: away_team.into(),
        }
    }

    fn from_record(record: &StringRecord, line: usize) -> Result<Self> {
        if record.len() < EXPECTED_HEADERS.len() {
            return Err(StandingsError::RowShape {
                line,
                found: record.len(),
            });
        }
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        Ok(Self {
            matchday: field(0),
            date: field(1),
            home_team: field(2),
            score: field(3),
            away_team: field(4),
        })
    }
}

/// Raw fixtures as handed over by a source: headers plus rows in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureTable {
    /// Header labels exactly as read
    pub headers: Vec<String>,
    /// Data rows, in file order
    pub rows: Vec<FixtureRow>,
}

impl FixtureTable {
    /// Create a table carrying the expected headers.
    pub fn new(rows: Vec<FixtureRow>) -> Self {
        Self {
            headers: EXPECTED_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    /// Create a table with explicit headers.
    pub fn with_headers(headers: Vec<String>, rows: Vec<FixtureRow>) -> Self {
        Self { headers, rows }
    }

    /// Whether the headers match `EXPECTED_HEADERS` exactly.
    pub fn has_expected_headers(&self) -> bool {
        self.headers.len() == EXPECTED_HEADERS.len()
            && self
                .headers
                .iter()
                .zip(EXPECTED_HEADERS.iter())
                .all(|(found, expected)| found == expected)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a season CSV from any reader.
///
/// Data fields are trimmed, headers are not. Rows with fewer than five
/// fields are rejected with their line number; extra trailing fields are
/// ignored.
pub fn read_fixtures<R: Read>(reader: R) -> Result<FixtureTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, name)| normalize_header(idx, name))
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);
        rows.push(FixtureRow::from_record(&record, line)?);
    }

    tracing::debug!(rows = rows.len(), "read fixture rows");
    Ok(FixtureTable { headers, rows })
}

/// Read a season CSV from a file on disk.
pub fn read_fixtures_path(path: impl AsRef<Path>) -> Result<FixtureTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StandingsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_fixtures(file)
}

fn normalize_header(idx: usize, name: &str) -> String {
    if idx == 0 {
        name.trim_start_matches('\u{feff}').to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
Round,Date,Team 1,FT,Team 2
1,Sat Sep 12 2020,Fulham FC,0\u{2013}3,Arsenal FC
1,Sat Sep 12 2020,Crystal Palace FC,1\u{2013}0,Southampton FC
";

    #[test]
    fn test_read_fixtures_rows_and_headers() {
        let table = read_fixtures(SAMPLE.as_bytes()).unwrap();
        assert!(table.has_expected_headers());
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].home_team, "Fulham FC");
        assert_eq!(table.rows[0].score, "0\u{2013}3");
        assert_eq!(table.rows[1].away_team, "Southampton FC");
    }

    #[test]
    fn test_read_fixtures_trims_fields() {
        let csv = "Round,Date,Team 1,FT,Team 2\n 3 ,x,  A  , 1\u{2013}1 ,B\n";
        let table = read_fixtures(csv.as_bytes()).unwrap();
        assert!(table.has_expected_headers());
        assert_eq!(table.rows[0].matchday, "3");
        assert_eq!(table.rows[0].home_team, "A");
        assert_eq!(table.rows[0].score, "1\u{2013}1");
    }

    #[test]
    fn test_read_fixtures_keeps_padded_headers() {
        let csv = " Round , Date ,Team 1 , FT,Team 2\n1,d,A,1\u{2013}0,B\n";
        let table = read_fixtures(csv.as_bytes()).unwrap();
        assert_eq!(table.headers[0], " Round ");
        assert_eq!(table.headers[3], " FT");
        assert!(!table.has_expected_headers());
        assert_eq!(table.rows[0].home_team, "A");
    }

    #[test]
    fn test_read_fixtures_strips_bom() {
        let csv = "\u{feff}Round,Date,Team 1,FT,Team 2\n";
        let table = read_fixtures(csv.as_bytes()).unwrap();
        assert_eq!(table.headers[0], "Round");
        assert!(table.has_expected_headers());
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_fixtures_keeps_unexpected_headers() {
        let csv = "Wk,Day,Home,Score,Away\n1,d,A,1\u{2013}0,B\n";
        let table = read_fixtures(csv.as_bytes()).unwrap();
        assert!(!table.has_expected_headers());
        assert_eq!(table.headers, vec!["Wk", "Day", "Home", "Score", "Away"]);
        assert_eq!(table.rows[0].away_team, "B");
    }

    #[test]
    fn test_read_fixtures_short_row() {
        let csv = "Round,Date,Team 1,FT,Team 2\n1,d,A,1\u{2013}0,B\n2,d,C\n";
        let err = read_fixtures(csv.as_bytes()).unwrap_err();
        match err {
            StandingsError::RowShape { line, found } => {
                assert_eq!(line, 3);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_fixtures_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = read_fixtures_path(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_read_fixtures_path_missing() {
        let err = read_fixtures_path("/nonexistent/season.csv").unwrap_err();
        assert!(matches!(err, StandingsError::FileRead { .. }));
    }

    #[test]
    fn test_has_expected_headers_order_matters() {
        let table = FixtureTable::with_headers(
            vec!["Date", "Round", "Team 1", "FT", "Team 2"]
                .into_iter()
                .map(String::from)
                .collect(),
            vec![],
        );
        assert!(!table.has_expected_headers());
        assert!(FixtureTable::new(vec![]).has_expected_headers());
    }
}
