//! # scorebook
//!
//! A play-by-play baseball scoring engine.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: The resolution engine maps (result code, bases) to a
//!    proposed runner movement and nothing else. It never touches state.
//!
//! 2. **One owner of live state**: `Scorer` owns the `GameState`, lineups,
//!    the open review and the record store. Nothing is global.
//!
//! 3. **Event-sourced score**: The score is never stored as a counter. It
//!    is summed from the play records on every query, so deleting a record
//!    fixes the score for free.
//!
//! ## Flow of a play
//!
//! - The operator submits a `ResultCode`
//! - Hits, errors, fielder's choices, sacrifices and double plays open a
//!   `ReviewSession`; the operator may override destinations, then confirms
//! - Everything else commits immediately
//! - A commit writes the play's records, applies the outcome to the
//!   `GameState` (batter advance, third-out side change) and queues the
//!   records for the remote mirror
//!
//! ## Modules
//!
//! - `core`: Ids, sides, bases, live state, configuration
//! - `rules`: Result codes and the resolution rule engine
//! - `review`: Review/override session
//! - `roster`: Players, opponents, lineups, roster registry
//! - `records`: Play records, record store, score projections
//! - `sync`: Remote mirror outbox
//! - `scorer`: Live-game driver and session snapshots

pub mod core;
pub mod error;
pub mod rules;
pub mod review;
pub mod roster;
pub mod records;
pub mod sync;
pub mod scorer;

// Re-export commonly used types
pub use crate::core::{
    Base, BaseOccupancy, BaseSlot, Bases,
    GameId, PlayerId, RecordId, IdGenerator,
    Side, SideMap,
    DoublePlayPolicy, GameConfig,
    GamePhase, GameState, Half, HalfInning, PlayOutcome, SideChange,
};

pub use crate::error::{ConfigError, ScoreError, SnapshotError, StoreError, SyncError};

pub use crate::rules::{
    Destination, MovementClass, MovementProposal, Origin, ResultCode, RunnerMove,
    resolve, ResolutionRules, StandardRules,
};

pub use crate::review::{ConfirmedPlay, ReviewSession};

pub use crate::roster::{
    BattingSide, Hand, Lineup, LineupSlot, Opponent, Player, PlayerKind,
    Roster, RosterRegistry,
};

pub use crate::records::{
    BattedBall, PitchingPlayRecord, PlateAppearanceRecord,
    MemoryStore, PlayRecordStore,
    derive_score, LineScore, Score,
};

pub use crate::sync::{MirrorWrite, NoopMirror, Outbox, RemoteMirror};

pub use crate::scorer::{
    CommitSummary, GameInfo, PendingCounters, PlayDetails,
    Scorer, SessionSnapshot, Submission,
};
