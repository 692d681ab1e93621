//! Core engine types: ids, sides, bases, live state, configuration.
//!
//! This module holds the base/out state machine. It knows nothing about
//! result codes or records; those layers drive it through `GameState::commit`
//! and the manual base edits.

pub mod ids;
pub mod side;
pub mod bases;
pub mod config;
pub mod state;

pub use ids::{GameId, IdGenerator, PlayerId, RecordId};
pub use side::{Side, SideMap};
pub use bases::{Base, BaseOccupancy, BaseSlot, Bases};
pub use config::{DoublePlayPolicy, GameConfig};
pub use state::{GamePhase, GameState, Half, HalfInning, PlayOutcome, SideChange};
