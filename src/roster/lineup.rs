//! Batting orders.
//!
//! A lineup has one slot per batting-order position. A slot may be empty
//! (the opponent's batter was never registered); the scorer still records
//! plays for that slot, it just cannot attribute them to a player.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Position label given to a pinch hitter.
pub const PINCH_HITTER: &str = "PH";

/// One batting-order position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub player: Option<PlayerId>,
    /// Fielding position label.
    pub position: String,
}

/// A batting order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    slots: Vec<LineupSlot>,
}

impl Lineup {
    /// Create an empty lineup of `size` slots.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![LineupSlot::default(); size],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.player.is_none())
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&LineupSlot> {
        self.slots.get(index)
    }

    /// Player batting at `index`, if the slot is filled.
    #[must_use]
    pub fn player_at(&self, index: usize) -> Option<&PlayerId> {
        self.slots.get(index).and_then(|s| s.player.as_ref())
    }

    /// Fill a slot. Returns false if `index` is out of range.
    pub fn set(&mut self, index: usize, player: Option<PlayerId>, position: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.player = player;
                slot.position = position.into();
                true
            }
            None => false,
        }
    }

    /// Change a slot's fielding position. Returns false if out of range.
    pub fn set_position(&mut self, index: usize, position: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.position = position.into();
                true
            }
            None => false,
        }
    }

    /// Send a pinch hitter up in slot `index`.
    pub fn pinch_hit(&mut self, index: usize, player: PlayerId) -> bool {
        self.set(index, Some(player), PINCH_HITTER)
    }

    /// Replace `old` wherever they bat. Returns the slot index replaced.
    pub fn replace(&mut self, old: &PlayerId, new: PlayerId) -> Option<usize> {
        let index = self.position_of(old)?;
        self.slots[index].player = Some(new);
        Some(index)
    }

    /// Batting-order index of a player.
    #[must_use]
    pub fn position_of(&self, player: &PlayerId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.player.as_ref() == Some(player))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineupSlot> {
        self.slots.iter()
    }
}
