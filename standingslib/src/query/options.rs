//! Options controlling how a table is built.
//!
//! This module contains the configuration types callers use to adapt the
//! builder to a competition: the points awarded per result and how strictly
//! the input column contract is enforced.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Points for a win in the standard ruleset
pub const WIN_POINTS: u32 = 3;
/// Points for a draw in the standard ruleset
pub const DRAW_POINTS: u32 = 1;
/// Points for a loss in the standard ruleset
pub const LOSS_POINTS: u32 = 0;

/// Points awarded per result.
///
/// The standard ruleset is 3/1/0. Alternate eras or competitions can supply
/// their own weights, e.g. `PointsRules::new(2, 1, 0)` for two points a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointsRules {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl PointsRules {
    /// Three points for a win, one for a draw
    pub const STANDARD: PointsRules = PointsRules {
        win: WIN_POINTS,
        draw: DRAW_POINTS,
        loss: LOSS_POINTS,
    };

    pub fn new(win: u32, draw: u32, loss: u32) -> Self {
        Self { win, draw, loss }
    }

    /// Builder: set points for a win
    pub fn with_win(mut self, points: u32) -> Self {
        self.win = points;
        self
    }

    /// Builder: set points for a draw
    pub fn with_draw(mut self, points: u32) -> Self {
        self.draw = points;
        self
    }

    /// Builder: set points for a loss
    pub fn with_loss(mut self, points: u32) -> Self {
        self.loss = points;
        self
    }
}

impl Default for PointsRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// What to do when input headers don't match the expected labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaPolicy {
    /// Fail the build with a schema error
    #[default]
    Strict,
    /// Log a warning, record it on the result and read columns by position
    Warn,
}

impl FromStr for SchemaPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" | "error" => Ok(SchemaPolicy::Strict),
            "warn" | "warning" => Ok(SchemaPolicy::Warn),
            _ => Err(format!("Unknown schema policy: {}", s)),
        }
    }
}
