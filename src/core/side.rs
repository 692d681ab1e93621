//! Which team the scorer is recording for, and per-side data storage.
//!
//! ## Side
//!
//! The scorer always records from one team's point of view: `Attack` while
//! our team bats, `Defense` while the opponent bats against our pitcher.
//!
//! ## SideMap
//!
//! Two-entry storage indexed by `Side`, used for lineups, batting-order
//! indices and pitchers.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Team currently being recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Our team is batting.
    Attack,
    /// The opponent is batting against our pitcher.
    Defense,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Side::Attack => Side::Defense,
            Side::Defense => Side::Attack,
        }
    }

    /// Both sides, attack first.
    pub fn all() -> impl Iterator<Item = Side> {
        [Side::Attack, Side::Defense].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Attack => f.write_str("Attack"),
            Side::Defense => f.write_str("Defense"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use scorebook::core::{Side, SideMap};
///
/// let mut index: SideMap<usize> = SideMap::with_value(0);
/// index[Side::Defense] = 4;
/// assert_eq!(index[Side::Attack], 0);
/// assert_eq!(index[Side::Defense], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    attack: T,
    defense: T,
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            attack: factory(Side::Attack),
            defense: factory(Side::Defense),
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            attack: value.clone(),
            defense: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Attack => &self.attack,
            Side::Defense => &self.defense,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Attack => &mut self.attack,
            Side::Defense => &mut self.defense,
        }
    }

    /// Iterate over (Side, &T) pairs, attack first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Attack, &self.attack), (Side::Defense, &self.defense)].into_iter()
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_flip() {
        assert_eq!(Side::Attack.flip(), Side::Defense);
        assert_eq!(Side::Defense.flip(), Side::Attack);
        assert_eq!(Side::Attack.flip().flip(), Side::Attack);
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|side| side == Side::Defense);
        assert!(!map[Side::Attack]);
        assert!(map[Side::Defense]);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<u32> = SideMap::default();
        map[Side::Attack] += 3;
        *map.get_mut(Side::Defense) = 7;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Attack, &3), (Side::Defense, &7)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(|side| side.to_string());
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
