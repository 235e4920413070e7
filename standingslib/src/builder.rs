//! The table builder: raw fixtures in, ranked standings out.
//!
//! Building runs the pipeline stages in order:
//! 1. Schema check (headers against `EXPECTED_HEADERS`, per `SchemaPolicy`)
//! 2. Classification (every score string, first bad row aborts the build)
//! 3. Aggregation (one pass into per-team tallies)
//! 4. Ranking (points, goal difference, scored, name)
//!
//! A build holds no state between calls; the same input always produces the
//! same output.

use serde::{Deserialize, Serialize};

use crate::data::aggregate::aggregate;
use crate::data::fixture::{classify_all, Fixture};
use crate::data::standing::TeamStanding;
use crate::error::StandingsError;
use crate::query::options::{PointsRules, SchemaPolicy};
use crate::query::ranking::rank;
use crate::source::{FixtureTable, EXPECTED_HEADERS};
use crate::Result;

/// Options for building a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Points awarded per result
    pub rules: PointsRules,
    /// Handling of unexpected column headers
    pub schema_policy: SchemaPolicy,
}

impl BuildOptions {
    /// Create default options (standard points, strict schema)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the points rules
    pub fn rules(mut self, rules: PointsRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the schema policy
    pub fn schema_policy(mut self, policy: SchemaPolicy) -> Self {
        self.schema_policy = policy;
        self
    }
}

/// A problem that was downgraded instead of failing the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// Headers did not match; columns were read by position
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl std::fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildWarning::SchemaMismatch { expected, found } => write!(
                f,
                "unexpected column headers: expected {expected:?}, found {found:?}"
            ),
        }
    }
}

/// Result of a build: teams in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    /// Ranked standings, first place first
    pub teams: Vec<TeamStanding>,
    /// Number of fixtures aggregated
    pub fixture_count: usize,
    /// Downgraded problems encountered while building
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<BuildWarning>,
}

impl Standings {
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// 1-based league position of a team.
    pub fn position_of(&self, team: &str) -> Option<usize> {
        self.teams.iter().position(|s| s.team == team).map(|i| i + 1)
    }

    pub fn get(&self, team: &str) -> Option<&TeamStanding> {
        self.teams.iter().find(|s| s.team == team)
    }

    /// Iterate `(position, standing)` pairs, positions starting at 1.
    pub fn iter_ranked(&self) -> impl Iterator<Item = (usize, &TeamStanding)> {
        self.teams.iter().enumerate().map(|(i, s)| (i + 1, s))
    }
}

/// Builds ranked standings from fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableBuilder {
    options: BuildOptions,
}

impl TableBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build standings from a raw fixture table.
    pub fn build(&self, table: &FixtureTable) -> Result<Standings> {
        let warnings = self.check_schema(table)?;
        let fixtures = classify_all(&table.rows)?;
        tracing::debug!(fixtures = fixtures.len(), "classified fixtures");

        let mut standings = self.build_fixtures(&fixtures);
        standings.warnings = warnings;
        Ok(standings)
    }

    /// Build standings from already classified fixtures.
    pub fn build_fixtures(&self, fixtures: &[Fixture]) -> Standings {
        let tallies = aggregate(fixtures);
        let teams = rank(&tallies, &self.options.rules);
        tracing::debug!(teams = teams.len(), "ranked standings");

        Standings {
            teams,
            fixture_count: fixtures.len(),
            warnings: Vec::new(),
        }
    }

    fn check_schema(&self, table: &FixtureTable) -> Result<Vec<BuildWarning>> {
        if table.has_expected_headers() {
            return Ok(Vec::new());
        }

        let expected: Vec<String> = EXPECTED_HEADERS.iter().map(|h| h.to_string()).collect();
        let found = table.headers.clone();

        match self.options.schema_policy {
            SchemaPolicy::Strict => Err(StandingsError::Schema { expected, found }),
            SchemaPolicy::Warn => {
                tracing::warn!(
                    ?expected,
                    ?found,
                    "unexpected column headers, reading columns by position"
                );
                Ok(vec![BuildWarning::SchemaMismatch { expected, found }])
            }
        }
    }
}

/// Build standings with default options.
pub fn build_table(table: &FixtureTable) -> Result<Standings> {
    TableBuilder::default().build(table)
}
