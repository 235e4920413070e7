//! Per-team aggregation over classified fixtures.
//!
//! A single pass over the fixtures accumulates into a map keyed by team
//! name. Each fixture touches exactly two tallies (its home and away
//! participants), so the result does not depend on fixture order.

use std::collections::BTreeMap;

use super::fixture::Fixture;
use super::standing::Record;

/// Accumulated home and away records for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamTally {
    pub home: Record,
    pub away: Record,
}

impl TeamTally {
    /// Home and away combined.
    pub fn overall(&self) -> Record {
        self.home + self.away
    }
}

/// Tallies for every team seen in a fixture set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tallies {
    teams: BTreeMap<String, TeamTally>,
}

impl Tallies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply both participations of one fixture.
    pub fn add_fixture(&mut self, fixture: &Fixture) {
        let outcome = fixture.outcome();
        let score = fixture.score;

        if fixture.is_self_play() {
            tracing::warn!(
                team = %fixture.home_team,
                matchday = %fixture.matchday,
                "fixture lists the same team on both sides"
            );
        }

        self.teams
            .entry(fixture.home_team.clone())
            .or_default()
            .home
            .record(outcome.for_home(), score.home, score.away);
        self.teams
            .entry(fixture.away_team.clone())
            .or_default()
            .away
            .record(outcome.for_away(), score.away, score.home);
    }

    pub fn get(&self, team: &str) -> Option<&TeamTally> {
        self.teams.get(team)
    }

    /// Number of distinct teams
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Iterate teams in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TeamTally)> {
        self.teams.iter().map(|(name, tally)| (name.as_str(), tally))
    }
}

impl<'a> FromIterator<&'a Fixture> for Tallies {
    fn from_iter<I: IntoIterator<Item = &'a Fixture>>(iter: I) -> Self {
        let mut tallies = Tallies::new();
        for fixture in iter {
            tallies.add_fixture(fixture);
        }
        tallies
    }
}

/// Aggregate a whole fixture set.
pub fn aggregate(fixtures: &[Fixture]) -> Tallies {
    let tallies: Tallies = fixtures.iter().collect();
    tracing::debug!(
        fixtures = fixtures.len(),
        teams = tallies.len(),
        "aggregated fixtures"
    );
    tallies
}
