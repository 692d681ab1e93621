//! Roster registry and lineups.
//!
//! Player identities, handedness and team membership come from an external
//! registry (`RosterRegistry`). Lineups are fixed at game start and only
//! changed by substitutions.

mod player;
mod registry;
mod lineup;

pub use player::{BattingSide, Hand, Opponent, Player, PlayerKind};
pub use registry::{Roster, RosterRegistry};
pub use lineup::{Lineup, LineupSlot, PINCH_HITTER};
