//! Core data structures for team standings

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use super::fixture::TeamResult;
use crate::query::options::PointsRules;

/// Raw counters for a run of matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
    pub scored: u32,
    pub conceded: u32,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one participation, seen from this team's side.
    pub fn record(&mut self, result: TeamResult, goals_for: u32, goals_against: u32) {
        self.played = self.played.saturating_add(1);
        match result {
            TeamResult::Win => self.win = self.win.saturating_add(1),
            TeamResult::Draw => self.draw = self.draw.saturating_add(1),
            TeamResult::Loss => self.loss = self.loss.saturating_add(1),
        }
        self.scored = self.scored.saturating_add(goals_for);
        self.conceded = self.conceded.saturating_add(goals_against);
    }

    /// Scored minus conceded
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.scored) - i64::from(self.conceded)
    }

    /// Points under the given rules, saturating at `u32::MAX`
    pub fn points(&self, rules: &PointsRules) -> u32 {
        rules
            .win
            .saturating_mul(self.win)
            .saturating_add(rules.draw.saturating_mul(self.draw))
            .saturating_add(rules.loss.saturating_mul(self.loss))
    }
}

impl Add for Record {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            played: self.played.saturating_add(other.played),
            win: self.win.saturating_add(other.win),
            draw: self.draw.saturating_add(other.draw),
            loss: self.loss.saturating_add(other.loss),
            scored: self.scored.saturating_add(other.scored),
            conceded: self.conceded.saturating_add(other.conceded),
        }
    }
}

impl AddAssign for Record {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// A team's season record, ranked-ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    /// Team name (identity key)
    pub team: String,
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
    /// Goals for, home and away combined
    pub scored: u32,
    /// Goals against, home and away combined
    pub conceded: u32,
    /// scored - conceded
    pub goal_difference: i64,
    pub points: u32,
    /// Home fixtures only
    pub home: Record,
    /// Away fixtures only
    pub away: Record,
}

impl TeamStanding {
    /// Finalize accumulated home/away records into a standing.
    pub fn from_records(
        team: impl Into<String>,
        home: Record,
        away: Record,
        rules: &PointsRules,
    ) -> Self {
        let overall = home + away;
        Self {
            team: team.into(),
            played: overall.played,
            win: overall.win,
            draw: overall.draw,
            loss: overall.loss,
            scored: overall.scored,
            conceded: overall.conceded,
            goal_difference: overall.goal_difference(),
            points: overall.points(rules),
            home,
            away,
        }
    }

    /// The overall record (home + away).
    pub fn record(&self) -> Record {
        Record {
            played: self.played,
            win: self.win,
            draw: self.draw,
            loss: self.loss,
            scored: self.scored,
            conceded: self.conceded,
        }
    }

    /// Points per game, 0.0 before a match is played.
    pub fn points_per_game(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.points) / f64::from(self.played)
        }
    }
}
