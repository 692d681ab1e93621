//! Immutable play records.
//!
//! One `PlateAppearanceRecord` is written per committed play while our team
//! bats. While the opponent bats, one `PitchingPlayRecord` is written for our
//! pitcher plus, when the batter is registered, a mirrored
//! `PlateAppearanceRecord` tagged with the sentinel opponent value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{BaseOccupancy, GameId, Half, PlayerId, RecordId};
use crate::roster::Hand;
use crate::rules::ResultCode;

/// Where the ball went, in percent of the field diagram (0-100 each axis).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattedBall {
    pub x: f32,
    pub y: f32,
}

impl BattedBall {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }

    /// Fielding direction by position number: 7 left, 8 center, 9 right.
    #[must_use]
    pub fn direction(&self) -> u8 {
        if self.x < 35.0 {
            7
        } else if self.x > 65.0 {
            9
        } else {
            8
        }
    }
}

/// A batter's plate appearance (or a steal marker for a runner).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlateAppearanceRecord {
    pub id: RecordId,
    pub game_id: GameId,
    pub date: NaiveDate,
    /// Opponent name, or the sentinel tag on mirrored records.
    pub opponent: String,
    pub player_id: Option<PlayerId>,
    pub player_name: String,
    pub inning: u32,
    pub half: Half,
    /// Base occupancy before the play.
    pub bases: BaseOccupancy,
    pub result: ResultCode,
    /// Fielding direction (0 = none recorded).
    pub direction: u8,
    pub rbi: u32,
    pub is_steal: bool,
    pub batted_ball: Option<BattedBall>,
    /// Throwing hand of the opposing pitcher (or our pitcher on mirrors).
    pub vs_hand: Option<Hand>,
}

impl PlateAppearanceRecord {
    /// True if this is a mirrored record of an opposing batter.
    #[must_use]
    pub fn is_mirror(&self, sentinel: &str) -> bool {
        self.opponent == sentinel
    }
}

/// One play from our pitcher's point of view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitchingPlayRecord {
    pub id: RecordId,
    pub game_id: GameId,
    pub date: NaiveDate,
    pub opponent: String,
    pub pitcher_id: Option<PlayerId>,
    pub pitcher_name: String,
    pub inning: u32,
    pub half: Half,
    pub result: ResultCode,
    pub batted_ball: Option<BattedBall>,
    pub is_out: bool,
    pub runs_allowed: u32,
    pub earned_runs: u32,
    /// Side the opposing batter hit from.
    pub vs_hand: Option<Hand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_x() {
        assert_eq!(BattedBall::new(10.0, 50.0).direction(), 7);
        assert_eq!(BattedBall::new(35.0, 50.0).direction(), 8);
        assert_eq!(BattedBall::new(65.0, 50.0).direction(), 8);
        assert_eq!(BattedBall::new(80.0, 50.0).direction(), 9);
    }

    #[test]
    fn test_batted_ball_clamped() {
        let ball = BattedBall::new(-5.0, 130.0);
        assert_eq!(ball, BattedBall { x: 0.0, y: 100.0 });
    }
}
