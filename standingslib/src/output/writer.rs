//! CSV sink for ranked standings.
//!
//! The header is always the nine contract fields, in this order, even for an
//! empty table. Home/away splits are not written here.

use std::io::Write;

use serde::Serialize;

use crate::data::standing::TeamStanding;
use crate::Result;

/// Column labels of the CSV sink.
pub const CSV_HEADERS: [&str; 9] = [
    "team",
    "played",
    "win",
    "draw",
    "loss",
    "scored",
    "conceded",
    "goal_difference",
    "points",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    team: &'a str,
    played: u32,
    win: u32,
    draw: u32,
    loss: u32,
    scored: u32,
    conceded: u32,
    goal_difference: i64,
    points: u32,
}

impl<'a> From<&'a TeamStanding> for CsvRow<'a> {
    fn from(s: &'a TeamStanding) -> Self {
        Self {
            team: &s.team,
            played: s.played,
            win: s.win,
            draw: s.draw,
            loss: s.loss,
            scored: s.scored,
            conceded: s.conceded,
            goal_difference: s.goal_difference,
            points: s.points,
        }
    }
}

/// Write standings as CSV, header first, rows in the given order.
pub fn write_csv<W: Write>(writer: W, standings: &[TeamStanding]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for standing in standings {
        csv_writer.serialize(CsvRow::from(standing))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render standings as a CSV string.
pub fn to_csv_string(standings: &[TeamStanding]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_csv(&mut buf, standings)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
