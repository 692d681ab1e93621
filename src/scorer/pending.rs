//! Operator input that rides along with the next committed play.

use serde::{Deserialize, Serialize};

use crate::records::BattedBall;

/// Extra counts the operator enters before committing a play.
///
/// Added on top of the runs computed from runner movement, then reset after
/// every commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCounters {
    /// Extra RBI for our batter.
    pub rbi: u32,
    /// Extra runs charged to our pitcher.
    pub runs_allowed: u32,
    /// Earned runs charged to our pitcher. Never derived from movement.
    pub earned_runs: u32,
}

impl PendingCounters {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-play details that are not part of runner movement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayDetails {
    pub batted_ball: Option<BattedBall>,
    /// Fielding direction picked by hand. Overrides the one derived from
    /// the batted ball.
    pub direction: Option<u8>,
}

impl PlayDetails {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_batted_ball(mut self, x: f32, y: f32) -> Self {
        self.batted_ball = Some(BattedBall::new(x, y));
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: u8) -> Self {
        self.direction = Some(direction);
        self
    }
}
