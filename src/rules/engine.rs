//! Resolution rule engine.
//!
//! Maps a result code and the pre-play base occupancy to a proposed set of
//! runner movements. Pure: no side effects, outs are not consulted.
//!
//! ## Movement classes
//!
//! - **Advance(n)**: every runner's target is their base + n; 4 or more
//!   scores. Advisory only, the operator may override in review.
//! - **Forced** (walk, intentional walk, hit by pitch): a runner advances
//!   only if every base below theirs is occupied.
//! - **SacrificeFly**: the runner on Third scores, others hold.
//! - **DoublePlay**: governed by `DoublePlayPolicy`.
//! - **Static**: everyone holds.

use super::movement::{Destination, MovementProposal, Origin, RunnerMove};
use super::result::{MovementClass, ResultCode};
use crate::core::{Base, Bases, DoublePlayPolicy, GameConfig, PlayerId};

/// Rules trait for proposing runner movement.
///
/// Implementations must be deterministic and side-effect free.
pub trait ResolutionRules {
    /// Destination proposed for the runner on `base`.
    fn runner_destination(&self, code: ResultCode, base: Base, bases: &Bases) -> Destination;

    /// Build the full proposal: batter first (if the batter is in the runner
    /// list), then each occupied base, lead runner first.
    fn resolve(&self, code: ResultCode, bases: &Bases, batter: Option<&PlayerId>) -> MovementProposal {
        let mut proposal = MovementProposal::new(code);

        if let Some(destination) = code.batter_destination() {
            proposal.push(RunnerMove::new(Origin::Batter, batter.cloned(), destination));
        }

        for base in [Base::Third, Base::Second, Base::First] {
            if bases.is_occupied(base) {
                let destination = self.runner_destination(code, base, bases);
                proposal.push(RunnerMove::new(
                    Origin::from_base(base),
                    bases.occupant(base).cloned(),
                    destination,
                ));
            }
        }

        proposal
    }

    /// Base state after a walk-class result, with the batter on First.
    fn forced_walk(&self, bases: &Bases, batter: Option<&PlayerId>) -> Bases {
        self.resolve(ResultCode::Walk, bases, batter).outcome().bases
    }
}

/// The standard scorebook rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules {
    double_play: DoublePlayPolicy,
}

impl StandardRules {
    #[must_use]
    pub fn new(double_play: DoublePlayPolicy) -> Self {
        Self { double_play }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.double_play)
    }

    #[must_use]
    pub fn double_play_policy(&self) -> DoublePlayPolicy {
        self.double_play
    }
}

impl ResolutionRules for StandardRules {
    fn runner_destination(&self, code: ResultCode, base: Base, bases: &Bases) -> Destination {
        let hold = Destination::from_base(base);

        match code.movement_class() {
            MovementClass::Advance(n) => Destination::from_number(base.number() + n),
            MovementClass::Forced => {
                if bases.all_below_occupied(base) {
                    Destination::from_number(base.number() + 1)
                } else {
                    hold
                }
            }
            MovementClass::SacrificeFly => match base {
                Base::Third => Destination::Home,
                Base::First | Base::Second => hold,
            },
            MovementClass::DoublePlay => match (self.double_play, base) {
                (DoublePlayPolicy::ClearFirstAndSecond, Base::First | Base::Second) => {
                    Destination::Out
                }
                (DoublePlayPolicy::ClearFirstAndSecond, Base::Third) => Destination::Home,
                (DoublePlayPolicy::ForcedRunnerOnly, Base::First) => Destination::Out,
                (DoublePlayPolicy::ForcedRunnerOnly, Base::Second | Base::Third) => hold,
            },
            MovementClass::Static => hold,
        }
    }
}

/// Resolve with the standard rules and default double-play policy.
#[must_use]
pub fn resolve(code: ResultCode, bases: &Bases, batter: Option<&PlayerId>) -> MovementProposal {
    StandardRules::default().resolve(code, bases, batter)
}
