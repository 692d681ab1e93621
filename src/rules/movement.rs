//! Runner movement proposals.
//!
//! A `MovementProposal` has one `RunnerMove` for the batter (when the result
//! puts the batter in the runner list) and one per occupied base, lead
//! runner first. It exists only between result selection and commit.
//!
//! A move's `is_out`/`is_run` flags are always derived from its destination,
//! so the fields are private and only `set_destination` can change them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::result::ResultCode;
use crate::core::{Base, Bases, PlayOutcome, PlayerId};

/// Where a runner started the play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Batter,
    First,
    Second,
    Third,
}

impl Origin {
    /// Origin of a runner on `base`.
    #[must_use]
    pub const fn from_base(base: Base) -> Self {
        match base {
            Base::First => Origin::First,
            Base::Second => Origin::Second,
            Base::Third => Origin::Third,
        }
    }

    /// The base a runner started on, `None` for the batter.
    #[must_use]
    pub const fn base(self) -> Option<Base> {
        match self {
            Origin::Batter => None,
            Origin::First => Some(Base::First),
            Origin::Second => Some(Base::Second),
            Origin::Third => Some(Base::Third),
        }
    }
}

/// Where a runner ends the play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    First,
    Second,
    Third,
    /// Scored a run.
    Home,
    Out,
    /// Left the bases without scoring or being put out.
    None,
}

impl Destination {
    /// Destination for a runner standing on `base`.
    #[must_use]
    pub const fn from_base(base: Base) -> Self {
        match base {
            Base::First => Destination::First,
            Base::Second => Destination::Second,
            Base::Third => Destination::Third,
        }
    }

    /// Destination for a target base number; 4 or more is home.
    #[must_use]
    pub const fn from_number(n: u8) -> Self {
        match Base::from_number(n) {
            Some(base) => Self::from_base(base),
            None if n >= 4 => Destination::Home,
            None => Destination::None,
        }
    }

    /// The base reached, if the runner stays on base.
    #[must_use]
    pub const fn base(self) -> Option<Base> {
        match self {
            Destination::First => Some(Base::First),
            Destination::Second => Some(Base::Second),
            Destination::Third => Some(Base::Third),
            Destination::Home | Destination::Out | Destination::None => None,
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.base() {
            Some(base) => write!(f, "{base}"),
            None => match self {
                Destination::Home => f.write_str("Home"),
                Destination::Out => f.write_str("Out"),
                _ => f.write_str("None"),
            },
        }
    }
}

/// One runner's proposed movement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerMove {
    origin: Origin,
    runner: Option<PlayerId>,
    destination: Destination,
    is_out: bool,
    is_run: bool,
}

impl RunnerMove {
    #[must_use]
    pub fn new(origin: Origin, runner: Option<PlayerId>, destination: Destination) -> Self {
        let mut mv = Self {
            origin,
            runner,
            destination,
            is_out: false,
            is_run: false,
        };
        mv.set_destination(destination);
        mv
    }

    /// Change the destination, re-deriving the out/run flags.
    pub fn set_destination(&mut self, destination: Destination) {
        self.destination = destination;
        self.is_out = destination == Destination::Out;
        self.is_run = destination == Destination::Home;
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[must_use]
    pub fn runner(&self) -> Option<&PlayerId> {
        self.runner.as_ref()
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        self.destination
    }

    #[must_use]
    pub fn is_out(&self) -> bool {
        self.is_out
    }

    #[must_use]
    pub fn is_run(&self) -> bool {
        self.is_run
    }

    /// Still on base after the play.
    #[must_use]
    pub fn stays_on_base(&self) -> bool {
        self.destination.base().is_some()
    }
}

/// Proposed movement for every runner on a play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementProposal {
    code: ResultCode,
    moves: SmallVec<[RunnerMove; 4]>,
}

impl MovementProposal {
    /// An empty proposal for `code`.
    #[must_use]
    pub fn new(code: ResultCode) -> Self {
        Self {
            code,
            moves: SmallVec::new(),
        }
    }

    pub fn push(&mut self, mv: RunnerMove) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn code(&self) -> ResultCode {
        self.code
    }

    #[must_use]
    pub fn moves(&self) -> &[RunnerMove] {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RunnerMove> {
        self.moves.get(index)
    }

    /// The batter's entry, if the batter is in the runner list.
    #[must_use]
    pub fn batter(&self) -> Option<&RunnerMove> {
        self.moves.iter().find(|m| m.origin == Origin::Batter)
    }

    /// The entry for the runner who started on `base`.
    #[must_use]
    pub fn runner_from(&self, base: Base) -> Option<&RunnerMove> {
        let origin = Origin::from_base(base);
        self.moves.iter().find(|m| m.origin == origin)
    }

    /// Change one entry's destination. Returns false if `index` is out of range.
    pub fn set_destination(&mut self, index: usize, destination: Destination) -> bool {
        match self.moves.get_mut(index) {
            Some(mv) => {
                mv.set_destination(destination);
                true
            }
            None => false,
        }
    }

    /// Outs recorded, including a batter who is out without an entry.
    #[must_use]
    pub fn outs(&self) -> u8 {
        let listed = self.moves.iter().filter(|m| m.is_out).count() as u8;
        listed + u8::from(self.code.implicit_batter_out())
    }

    /// Runs scored.
    #[must_use]
    pub fn runs(&self) -> u32 {
        self.moves.iter().filter(|m| m.is_run).count() as u32
    }

    /// Net effect: outs, runs, and the resulting base occupancy.
    ///
    /// Bases are rebuilt from scratch. If two entries end on the same base
    /// the later one (the trailing runner) wins.
    #[must_use]
    pub fn outcome(&self) -> PlayOutcome {
        let mut bases = Bases::new();
        for mv in &self.moves {
            if let Some(base) = mv.destination.base() {
                let displaced = bases.place(base, mv.runner.clone());
                if displaced.is_occupied() {
                    log::warn!("{} proposal puts two runners on {base}", self.code);
                }
            }
        }
        PlayOutcome {
            bases,
            outs_added: self.outs(),
            runs: self.runs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> Option<PlayerId> {
        Some(PlayerId::new(s))
    }

    #[test]
    fn test_flags_follow_destination() {
        let mut mv = RunnerMove::new(Origin::Second, pid("b"), Destination::Third);
        assert!(!mv.is_out() && !mv.is_run());

        mv.set_destination(Destination::Home);
        assert!(mv.is_run() && !mv.is_out());

        mv.set_destination(Destination::Out);
        assert!(mv.is_out() && !mv.is_run());

        mv.set_destination(Destination::None);
        assert!(!mv.is_out() && !mv.is_run() && !mv.stays_on_base());
    }

    #[test]
    fn test_destination_from_number() {
        assert_eq!(Destination::from_number(2), Destination::Second);
        assert_eq!(Destination::from_number(4), Destination::Home);
        assert_eq!(Destination::from_number(6), Destination::Home);
        assert_eq!(Destination::from_number(0), Destination::None);
    }

    #[test]
    fn test_outcome() {
        let mut proposal = MovementProposal::new(ResultCode::Double);
        proposal.push(RunnerMove::new(Origin::Batter, pid("bat"), Destination::Second));
        proposal.push(RunnerMove::new(Origin::Third, pid("c"), Destination::Home));
        proposal.push(RunnerMove::new(Origin::First, pid("a"), Destination::Out));

        let outcome = proposal.outcome();
        assert_eq!(outcome.outs_added, 1);
        assert_eq!(outcome.runs, 1);
        assert_eq!(outcome.bases.occupant(Base::Second), Some(&PlayerId::new("bat")));
        assert_eq!(outcome.bases.occupied_count(), 1);
    }

    #[test]
    fn test_implicit_batter_out_counted() {
        let proposal = MovementProposal::new(ResultCode::Strikeout);
        assert_eq!(proposal.outs(), 1);
        assert!(proposal.outcome().bases.is_empty());
    }

    #[test]
    fn test_set_destination_out_of_range() {
        let mut proposal = MovementProposal::new(ResultCode::Single);
        proposal.push(RunnerMove::new(Origin::Batter, None, Destination::First));

        assert!(proposal.set_destination(0, Destination::Second));
        assert!(!proposal.set_destination(1, Destination::Home));
        assert_eq!(proposal.batter().unwrap().destination(), Destination::Second);
    }

    #[test]
    fn test_collision_trailing_runner_wins() {
        let mut proposal = MovementProposal::new(ResultCode::Single);
        proposal.push(RunnerMove::new(Origin::Batter, pid("bat"), Destination::Second));
        proposal.push(RunnerMove::new(Origin::First, pid("a"), Destination::Second));

        let outcome = proposal.outcome();
        assert_eq!(outcome.bases.occupant(Base::Second), Some(&PlayerId::new("a")));
    }
}
