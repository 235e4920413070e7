//! Season addressing for the footballcsv repositories.
//!
//! Seasons are written `YYYY-YY` (e.g. `2023-24`) and the files live at
//! `{country}/{decade}/{season}/{cc}.{level}.csv` where `cc` is the first
//! three letters of the country.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StandingsError;
use crate::Result;

/// Country repository used when none is given.
pub const DEFAULT_COUNTRY: &str = "england";

const URL_TEMPLATE_BASE: &str = "https://github.com/footballcsv";

/// A season spanning two consecutive years, e.g. `2020-21`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season {
    start_year: u16,
}

impl Season {
    /// Season starting in `start_year`.
    pub fn starting(start_year: u16) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> u16 {
        self.start_year
    }

    /// Two-digit suffix of the closing year.
    pub fn end_suffix(&self) -> u16 {
        (self.start_year % 100 + 1) % 100
    }

    /// Decade directory name, e.g. `2020s`.
    pub fn decade(&self) -> String {
        format!("{}0s", self.start_year / 10)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.start_year, self.end_suffix())
    }
}

impl FromStr for Season {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| StandingsError::InvalidSeason {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| invalid("expected the format YYYY-YY"))?;
        if start.len() != 4
            || end.len() != 2
            || !start.bytes().all(|b| b.is_ascii_digit())
            || !end.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("expected the format YYYY-YY"));
        }

        let start_year: u16 = start.parse().map_err(|_| invalid("bad start year"))?;
        let end_suffix: u16 = end.parse().map_err(|_| invalid("bad end year"))?;

        let season = Season::starting(start_year);
        if season.end_suffix() != end_suffix {
            return Err(invalid(&format!(
                "second year must directly follow {start_year}"
            )));
        }
        Ok(season)
    }
}

/// Level of the football pyramid, 1 being the top flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Level(u8);

impl Level {
    pub const TOP: Level = Level(1);

    pub fn new(level: u8) -> Result<Self> {
        if level == 0 {
            return Err(StandingsError::InvalidLevel(level));
        }
        Ok(Self(level))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::TOP
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of one season file upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSource {
    pub country: String,
    pub level: Level,
    pub season: Season,
}

impl SeasonSource {
    /// Top-flight English season.
    pub fn new(season: Season) -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            level: Level::TOP,
            season,
        }
    }

    /// Builder: set the pyramid level
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Builder: set the country repository
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Country code used in file names (first three letters).
    pub fn country_code(&self) -> String {
        self.country.chars().take(3).collect()
    }

    /// Raw-content URL of the season file.
    pub fn url(&self) -> String {
        format!(
            "{base}/{country}/blob/master/{decade}/{season}/{cc}.{level}.csv?raw=true",
            base = URL_TEMPLATE_BASE,
            country = self.country,
            decade = self.season.decade(),
            season = self.season,
            cc = self.country_code(),
            level = self.level,
        )
    }
}

impl fmt::Display for SeasonSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} level {}", self.country, self.season, self.level)
    }
}
