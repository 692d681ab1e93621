//! Live-game driver, session snapshots and game reports.

mod driver;
mod game;
mod pending;
mod report;
mod snapshot;

pub use driver::{CommitSummary, Scorer, Submission, UNKNOWN_PLAYER};
pub use game::GameInfo;
pub use pending::{PendingCounters, PlayDetails};
pub use report::{game_log, write_game_log};
pub use snapshot::{IdCursor, SessionSnapshot, SNAPSHOT_VERSION};
