//! Review/override session.
//!
//! A review session holds the rule engine's proposal for exactly one play
//! and lets the operator correct individual runner destinations before the
//! play is committed.
//!
//! ## Lifecycle
//!
//! - `open`: resolve the proposal from the current bases
//! - `set_destination`: override one entry (flags re-derived)
//! - `confirm`: consume the session, returning the net outcome to commit
//! - `cancel`: consume the session with no effect
//!
//! Committing the outcome (state mutation, record emission) belongs to the
//! scorer, which owns the game state and the store.

use serde::{Deserialize, Serialize};

use crate::core::{Bases, PlayOutcome, PlayerId};
use crate::error::ScoreError;
use crate::rules::{Destination, MovementProposal, ResolutionRules, ResultCode, RunnerMove};

/// Transient per-play review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSession {
    proposal: MovementProposal,
    /// The unedited rule-engine proposal, kept for display and auditing.
    original: MovementProposal,
}

/// What a confirmed review hands to the commit step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedPlay {
    pub code: ResultCode,
    pub outcome: PlayOutcome,
    /// True if the operator changed any destination.
    pub overridden: bool,
}

impl ReviewSession {
    /// Open a review for `code` against the current bases.
    pub fn open<R: ResolutionRules + ?Sized>(
        rules: &R,
        code: ResultCode,
        bases: &Bases,
        batter: Option<&PlayerId>,
    ) -> Self {
        let proposal = rules.resolve(code, bases, batter);
        Self {
            original: proposal.clone(),
            proposal,
        }
    }

    #[must_use]
    pub fn code(&self) -> ResultCode {
        self.proposal.code()
    }

    /// Current (possibly edited) proposal.
    #[must_use]
    pub fn proposal(&self) -> &MovementProposal {
        &self.proposal
    }

    pub fn runners(&self) -> &[RunnerMove] {
        self.proposal.moves()
    }

    /// Override one entry's destination.
    pub fn set_destination(&mut self, index: usize, destination: Destination) -> Result<(), ScoreError> {
        if self.proposal.set_destination(index, destination) {
            Ok(())
        } else {
            Err(ScoreError::RunnerIndexOutOfRange {
                index,
                len: self.proposal.len(),
            })
        }
    }

    /// Restore the rule engine's original proposal.
    pub fn reset(&mut self) {
        self.proposal = self.original.clone();
    }

    #[must_use]
    pub fn is_overridden(&self) -> bool {
        self.proposal != self.original
    }

    /// Outcome the session would commit right now.
    #[must_use]
    pub fn preview(&self) -> PlayOutcome {
        self.proposal.outcome()
    }

    /// Finish the review: compute the net effect to commit.
    #[must_use]
    pub fn confirm(self) -> ConfirmedPlay {
        ConfirmedPlay {
            code: self.proposal.code(),
            outcome: self.proposal.outcome(),
            overridden: self.proposal != self.original,
        }
    }

    /// Discard the review.
    pub fn cancel(self) {
        log::debug!("review for {} cancelled", self.proposal.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Base;
    use crate::rules::{Origin, StandardRules};

    fn pid(s: &str) -> PlayerId {
        PlayerId::new(s)
    }

    fn open(code: ResultCode, bases: &Bases) -> ReviewSession {
        ReviewSession::open(&StandardRules::default(), code, bases, Some(&pid("bat")))
    }

    #[test]
    fn test_open_uses_rule_engine() {
        let bases = Bases::from_runners(Some(Some(pid("a"))), None, None);
        let session = open(ResultCode::Single, &bases);

        assert_eq!(session.code(), ResultCode::Single);
        assert_eq!(session.runners().len(), 2);
        assert!(!session.is_overridden());
    }

    #[test]
    fn test_override_runner_out() {
        let bases = Bases::from_runners(Some(Some(pid("a"))), None, None);
        let mut session = open(ResultCode::Single, &bases);

        // Runner from first thrown out at third.
        session.set_destination(1, Destination::Out).unwrap();
        assert_eq!(session.runners()[1].origin(), Origin::First);
        assert!(session.runners()[1].is_out());
        assert!(session.is_overridden());

        let play = session.confirm();
        assert!(play.overridden);
        assert_eq!(play.outcome.outs_added, 1);
        assert_eq!(play.outcome.bases.occupant(Base::First), Some(&pid("bat")));
        assert_eq!(play.outcome.bases.occupied_count(), 1);
    }

    #[test]
    fn test_set_destination_out_of_range() {
        let session_bases = Bases::new();
        let mut session = open(ResultCode::Double, &session_bases);

        let err = session.set_destination(3, Destination::Home).unwrap_err();
        assert!(matches!(err, ScoreError::RunnerIndexOutOfRange { index: 3, len: 1 }));
    }

    #[test]
    fn test_reset_restores_proposal() {
        let mut session = open(ResultCode::Triple, &Bases::new());
        session.set_destination(0, Destination::Home).unwrap();
        assert_eq!(session.preview().runs, 1);

        session.reset();
        assert!(!session.is_overridden());
        assert_eq!(session.preview().runs, 0);
    }
}
