//! Structured error types.
//!
//! Every fallible operation on the live game either succeeds against the
//! in-memory state or is refused up front with one of these errors. Nothing
//! here is fatal.

use crate::core::{Base, RecordId};

/// Errors surfaced by the live-game driver.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("no opponent set for this game")]
    MissingOpponent,

    #[error("game has not started")]
    NotInProgress,

    #[error("game is already in progress")]
    AlreadyInProgress,

    #[error("a review session is already open for {0}")]
    ReviewInProgress(String),

    #[error("no review session is open")]
    NoReviewOpen,

    #[error("runner index {index} out of range (proposal has {len} entries)")]
    RunnerIndexOutOfRange { index: usize, len: usize },

    #[error("no runner on {0}")]
    EmptyBase(Base),

    #[error("lineup slot {index} out of range (lineup size {size})")]
    LineupSlotOutOfRange { index: usize, size: usize },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::fmt::Error),
}

/// Errors from a play record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record {0} already exists")]
    DuplicateRecord(RecordId),

    #[error("record {0} not found")]
    RecordNotFound(RecordId),
}

/// Errors from a remote mirror. Logged only, never surfaced to the operator.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("mirror rejected {id}: {reason}")]
    Rejected { id: RecordId, reason: String },

    #[error("mirror unavailable: {0}")]
    Unavailable(String),
}

/// Errors encoding or decoding a session snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(bincode::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("snapshot does not fit this game: {0}")]
    InvalidState(String),
}

/// Errors when validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
