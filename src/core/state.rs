//! Live game state.
//!
//! ## GameState
//!
//! The tuple (inning, half, outs, bases, side) plus the batting-order index
//! of each side. It is mutated only by:
//! - committing a play outcome (`commit`)
//! - explicit manual base edits (steal, pick-off, advance, substitution)
//! - side changes, forced or triggered by the third out
//!
//! ## Outs invariant
//!
//! `outs` is always below `outs_per_half` between operations. A commit that
//! reaches the threshold resolves immediately into a side change, so the
//! overflow is never observable.

use serde::{Deserialize, Serialize};

use super::bases::{Base, BaseSlot, Bases};
use super::config::GameConfig;
use super::side::{Side, SideMap};
use crate::error::SnapshotError;

/// Game-level phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Lineups and opponent being entered.
    #[default]
    Setup,
    /// Plays are being recorded.
    InProgress,
}

/// Half of an inning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Half::Top => Half::Bottom,
            Half::Bottom => Half::Top,
        }
    }
}

/// A point in the game: which half-inning, and who is being recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfInning {
    pub inning: u32,
    pub half: Half,
    pub side: Side,
}

/// A completed side change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideChange {
    /// The half-inning that just ended.
    pub from: HalfInning,
    /// The half-inning now in progress.
    pub to: HalfInning,
}

/// Net effect of a committed play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Base occupancy after the play.
    pub bases: Bases,
    /// Outs recorded on the play.
    pub outs_added: u8,
    /// Runs that crossed home on the play.
    pub runs: u32,
}

impl PlayOutcome {
    /// An outcome that only records outs, leaving the bases as they are.
    #[must_use]
    pub fn outs_only(bases: &Bases, outs_added: u8) -> Self {
        Self {
            bases: bases.clone(),
            outs_added,
            runs: 0,
        }
    }
}

/// Live game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,

    /// Inning number (starts at 1).
    pub inning: u32,

    pub half: Half,

    outs: u8,

    pub bases: Bases,

    /// Team currently being recorded.
    pub side: Side,

    /// Batting-order index per side, preserved across side changes.
    batter_index: SideMap<usize>,

    lineup_size: usize,

    outs_per_half: u8,
}

impl GameState {
    /// Create the state for a new game: top of the first, nobody out, bases
    /// empty, recording our team at bat.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Setup,
            inning: 1,
            half: Half::Top,
            outs: 0,
            bases: Bases::new(),
            side: Side::Attack,
            batter_index: SideMap::with_value(0),
            lineup_size: config.lineup_size.max(1),
            outs_per_half: config.outs_per_half.max(1),
        }
    }

    #[must_use]
    pub fn outs(&self) -> u8 {
        self.outs
    }

    #[must_use]
    pub fn lineup_size(&self) -> usize {
        self.lineup_size
    }

    /// Current half-inning.
    #[must_use]
    pub fn half_inning(&self) -> HalfInning {
        HalfInning {
            inning: self.inning,
            half: self.half,
            side: self.side,
        }
    }

    // === Batting Order ===

    /// Batting-order index of a side.
    #[must_use]
    pub fn batter_index(&self, side: Side) -> usize {
        self.batter_index[side]
    }

    /// Batting-order index of the side at bat.
    #[must_use]
    pub fn current_batter_index(&self) -> usize {
        self.batter_index[self.side]
    }

    /// Move the side at bat to its next batter.
    pub fn advance_batter(&mut self) {
        let index = &mut self.batter_index[self.side];
        *index = (*index + 1) % self.lineup_size;
    }

    // === Commit ===

    /// Install a play outcome: bases are replaced wholesale, outs accumulate.
    ///
    /// Runs are not tallied here; the score is a projection of the play log.
    /// Call `check_side_change` afterwards, or use `commit`.
    pub fn apply_outcome(&mut self, outcome: &PlayOutcome) {
        self.bases = outcome.bases.clone();
        self.outs = self.outs.saturating_add(outcome.outs_added);
    }

    /// End the half-inning if the out threshold has been reached.
    pub fn check_side_change(&mut self) -> Option<SideChange> {
        if self.outs >= self.outs_per_half {
            Some(self.change_side())
        } else {
            None
        }
    }

    /// Apply an outcome, optionally advance the batting order, and resolve
    /// any side change.
    ///
    /// The batter index advances before the side flips, so the outgoing side
    /// resumes with the batter after the one who made the last out.
    pub fn commit(&mut self, outcome: &PlayOutcome, advance_batter: bool) -> Option<SideChange> {
        if advance_batter {
            self.advance_batter();
        }
        self.apply_outcome(outcome);
        self.check_side_change()
    }

    /// Record a single out outside of a plate appearance (caught stealing,
    /// pick-off).
    pub fn record_out(&mut self) -> Option<SideChange> {
        self.outs = self.outs.saturating_add(1);
        self.check_side_change()
    }

    /// End the current half-inning.
    ///
    /// Outs reset, bases clear, the recorded side flips. Top→Bottom keeps
    /// the inning; Bottom→Top starts the next one.
    pub fn change_side(&mut self) -> SideChange {
        let from = self.half_inning();

        self.outs = 0;
        self.bases.clear();
        self.side = self.side.flip();
        if self.half == Half::Bottom {
            self.inning += 1;
        }
        self.half = self.half.flip();

        SideChange {
            from,
            to: self.half_inning(),
        }
    }

    // === Manual Base Edits ===

    /// Move the runner on `base` forward one base.
    ///
    /// Returns the runner's slot when they left the bases from Third. No run
    /// is tallied; runs only come from committed records.
    pub fn advance_runner(&mut self, base: Base) -> Option<BaseSlot> {
        let runner = self.bases.take(base);
        let BaseSlot::Occupied(id) = runner else {
            return None;
        };
        match base.next() {
            Some(next) => {
                let displaced = self.bases.place(next, id);
                if displaced.is_occupied() {
                    log::warn!("advance from {base} displaced the runner on {next}");
                }
                None
            }
            None => Some(BaseSlot::Occupied(id)),
        }
    }

    /// Remove the runner on `base` and record an out.
    pub fn retire_runner(&mut self, base: Base) -> Option<SideChange> {
        self.bases.take(base);
        self.record_out()
    }

    /// Check a state loaded from outside against the game config.
    ///
    /// A state built by `new` and mutated through these methods always
    /// passes; a decoded one may not.
    pub fn validate(&self, config: &GameConfig) -> Result<(), SnapshotError> {
        let invalid = |reason: String| Err(SnapshotError::InvalidState(reason));
        if self.lineup_size == 0 || self.lineup_size != config.lineup_size {
            return invalid(format!(
                "lineup size {} does not match config ({})",
                self.lineup_size, config.lineup_size
            ));
        }
        if self.outs_per_half != config.outs_per_half {
            return invalid(format!(
                "outs per half {} does not match config ({})",
                self.outs_per_half, config.outs_per_half
            ));
        }
        if self.outs >= self.outs_per_half {
            return invalid(format!("{} out(s) recorded with the half-inning still open", self.outs));
        }
        if self.inning == 0 {
            return invalid("inning 0".into());
        }
        for side in [Side::Attack, Side::Defense] {
            if self.batter_index[side] >= self.lineup_size {
                return invalid(format!(
                    "{side} batter index {} past lineup of {}",
                    self.batter_index[side], self.lineup_size
                ));
            }
        }
        Ok(())
    }

    /// Reset to a fresh game, keeping lineup size and out threshold.
    pub fn reset(&mut self) {
        *self = Self {
            phase: GamePhase::Setup,
            inning: 1,
            half: Half::Top,
            outs: 0,
            bases: Bases::new(),
            side: Side::Attack,
            batter_index: SideMap::with_value(0),
            lineup_size: self.lineup_size,
            outs_per_half: self.outs_per_half,
        };
    }
}
