//! Game configuration.
//!
//! Scorers configure the engine at startup with a `GameConfig`. The defaults
//! describe a regular nine-batter, three-out game; leagues with different
//! rules change them here rather than in the engine.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::roster::Hand;

/// How a grounded-into-double-play result moves the runners.
///
/// The default reproduces the long-standing scorebook behavior; the
/// alternative is a candidate correction that scorers can opt into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoublePlayPolicy {
    /// Runners on First and Second are both proposed out, a runner on Third
    /// is proposed to score. Applies to whichever of those bases are
    /// occupied, so a lone runner on Second is also retired.
    #[default]
    ClearFirstAndSecond,
    /// Only the runner on First is proposed out; other runners hold.
    ForcedRunnerOnly,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Batting-order length. Batter indices wrap modulo this value.
    pub lineup_size: usize,

    /// Outs that end a half-inning.
    pub outs_per_half: u8,

    /// Runner movement on a grounded-into-double-play result.
    pub double_play: DoublePlayPolicy,

    /// Opponent value stamped on mirrored batter-side records so the
    /// opposing roster's batting stats stay derivable from the same log.
    pub mirror_opponent_tag: String,

    /// Handedness assumed when the opposing player is unknown.
    pub default_hand: Hand,

    /// Fixed seed for record ids. `None` seeds from entropy.
    pub id_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lineup_size: 9,
            outs_per_half: 3,
            double_play: DoublePlayPolicy::default(),
            mirror_opponent_tag: "My Team".to_string(),
            default_hand: Hand::Right,
            id_seed: None,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batting-order length.
    #[must_use]
    pub fn with_lineup_size(mut self, size: usize) -> Self {
        self.lineup_size = size;
        self
    }

    /// Set the outs that end a half-inning.
    #[must_use]
    pub fn with_outs_per_half(mut self, outs: u8) -> Self {
        self.outs_per_half = outs;
        self
    }

    /// Set the double-play policy.
    #[must_use]
    pub fn with_double_play(mut self, policy: DoublePlayPolicy) -> Self {
        self.double_play = policy;
        self
    }

    /// Set the sentinel opponent tag for mirrored records.
    #[must_use]
    pub fn with_mirror_opponent_tag(mut self, tag: impl Into<String>) -> Self {
        self.mirror_opponent_tag = tag.into();
        self
    }

    /// Set the assumed handedness for unknown players.
    #[must_use]
    pub fn with_default_hand(mut self, hand: Hand) -> Self {
        self.default_hand = hand;
        self
    }

    /// Use a fixed seed for record ids.
    #[must_use]
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = Some(seed);
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lineup_size == 0 {
            return Err(ConfigError::Validation(
                "lineup_size must be > 0".into(),
            ));
        }
        if self.outs_per_half == 0 {
            return Err(ConfigError::Validation(
                "outs_per_half must be > 0".into(),
            ));
        }
        if self.mirror_opponent_tag.trim().is_empty() {
            return Err(ConfigError::Validation(
                "mirror_opponent_tag must not be empty".into(),
            ));
        }
        Ok(())
    }
}
