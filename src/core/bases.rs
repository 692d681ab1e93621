//! Base occupancy.
//!
//! Three base slots, each either empty or holding a runner. A runner's
//! identity may be unknown (an unregistered opposing batter), so an occupied
//! slot carries an optional `PlayerId`. An empty slot never carries an id:
//! the `BaseSlot` enum makes that state unrepresentable.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::ids::PlayerId;

/// One of the three bases a runner can stand on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    /// All bases, First to Third.
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// Base number (1-3).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
        }
    }

    /// Base for a number in 1..=3.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Base::First),
            2 => Some(Base::Second),
            3 => Some(Base::Third),
            _ => None,
        }
    }

    /// The next base, or `None` from Third (home plate).
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    const fn slot(self) -> usize {
        self.number() as usize - 1
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}B", self.number())
    }
}

/// A single base slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseSlot {
    #[default]
    Empty,
    /// Occupied by a runner whose identity may be unknown.
    Occupied(Option<PlayerId>),
}

impl BaseSlot {
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, BaseSlot::Occupied(_))
    }

    /// The runner's id, if the base is occupied by a known runner.
    #[must_use]
    pub fn occupant(&self) -> Option<&PlayerId> {
        match self {
            BaseSlot::Occupied(id) => id.as_ref(),
            BaseSlot::Empty => None,
        }
    }
}

/// Occupancy of all three bases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bases {
    slots: [BaseSlot; 3],
}

impl Bases {
    /// Empty bases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from per-base optional runners (`None` = empty base).
    ///
    /// Each occupied base holds a runner with the given (possibly unknown) id.
    #[must_use]
    pub fn from_runners(
        first: Option<Option<PlayerId>>,
        second: Option<Option<PlayerId>>,
        third: Option<Option<PlayerId>>,
    ) -> Self {
        let slot = |runner: Option<Option<PlayerId>>| match runner {
            Some(id) => BaseSlot::Occupied(id),
            None => BaseSlot::Empty,
        };
        Self {
            slots: [slot(first), slot(second), slot(third)],
        }
    }

    #[must_use]
    pub fn is_occupied(&self, base: Base) -> bool {
        self.slots[base.slot()].is_occupied()
    }

    #[must_use]
    pub fn occupant(&self, base: Base) -> Option<&PlayerId> {
        self.slots[base.slot()].occupant()
    }

    /// Put a runner on a base, replacing whoever was there.
    ///
    /// Returns the previous slot contents.
    pub fn place(&mut self, base: Base, runner: Option<PlayerId>) -> BaseSlot {
        std::mem::replace(&mut self.slots[base.slot()], BaseSlot::Occupied(runner))
    }

    /// Empty a base, returning what was there.
    pub fn take(&mut self, base: Base) -> BaseSlot {
        std::mem::take(&mut self.slots[base.slot()])
    }

    /// Empty all bases.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Occupied bases, First to Third.
    pub fn occupied(&self) -> impl Iterator<Item = Base> + '_ {
        Base::ALL.into_iter().filter(|&b| self.is_occupied(b))
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.occupied_count() == 3
    }

    /// True if every base below `base` is occupied (the runner on `base`
    /// is forced by a walk).
    #[must_use]
    pub fn all_below_occupied(&self, base: Base) -> bool {
        Base::ALL
            .into_iter()
            .take_while(|&b| b < base)
            .all(|b| self.is_occupied(b))
    }

    /// Plain occupancy flags, as stored on play records.
    #[must_use]
    pub fn occupancy(&self) -> BaseOccupancy {
        BaseOccupancy {
            first: self.is_occupied(Base::First),
            second: self.is_occupied(Base::Second),
            third: self.is_occupied(Base::Third),
        }
    }
}

impl Index<Base> for Bases {
    type Output = BaseSlot;

    fn index(&self, base: Base) -> &Self::Output {
        &self.slots[base.slot()]
    }
}

/// Pre-play base occupancy snapshot carried by play records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseOccupancy {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

impl BaseOccupancy {
    /// Runner in scoring position (on second or third).
    #[must_use]
    pub fn scoring_position(&self) -> bool {
        self.second || self.third
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Option<PlayerId> {
        Some(PlayerId::new(s))
    }

    #[test]
    fn test_base_numbers() {
        assert_eq!(Base::First.number(), 1);
        assert_eq!(Base::from_number(3), Some(Base::Third));
        assert_eq!(Base::from_number(4), None);
        assert_eq!(Base::Second.next(), Some(Base::Third));
        assert_eq!(Base::Third.next(), None);
        assert_eq!(Base::Third.to_string(), "3B");
    }

    #[test]
    fn test_place_and_take() {
        let mut bases = Bases::new();
        assert!(bases.is_empty());

        bases.place(Base::Second, id("7"));
        assert!(bases.is_occupied(Base::Second));
        assert_eq!(bases.occupant(Base::Second), Some(&PlayerId::new("7")));

        let taken = bases.take(Base::Second);
        assert_eq!(taken, BaseSlot::Occupied(id("7")));
        assert!(!bases.is_occupied(Base::Second));
        assert_eq!(bases.occupant(Base::Second), None);
    }

    #[test]
    fn test_unknown_runner_is_occupied() {
        let mut bases = Bases::new();
        bases.place(Base::First, None);

        assert!(bases.is_occupied(Base::First));
        assert_eq!(bases.occupant(Base::First), None);
        assert_eq!(bases.occupied_count(), 1);
    }

    #[test]
    fn test_all_below_occupied() {
        let bases = Bases::from_runners(Some(id("1")), None, Some(id("3")));

        assert!(bases.all_below_occupied(Base::First));
        assert!(bases.all_below_occupied(Base::Second));
        assert!(!bases.all_below_occupied(Base::Third));
    }

    #[test]
    fn test_occupancy_snapshot() {
        let bases = Bases::from_runners(None, Some(id("2")), Some(None));
        let snapshot = bases.occupancy();

        assert_eq!(
            snapshot,
            BaseOccupancy {
                first: false,
                second: true,
                third: true
            }
        );
        assert!(snapshot.scoring_position());
    }

    #[test]
    fn test_loaded_and_clear() {
        let mut bases = Bases::from_runners(Some(id("1")), Some(id("2")), Some(id("3")));
        assert!(bases.is_loaded());

        bases.clear();
        assert!(bases.is_empty());
        assert_eq!(bases[Base::Third], BaseSlot::Empty);
    }
}
