//! Result codes and runner-movement resolution.
//!
//! The rule engine is a pure function from (result code, base occupancy) to
//! a `MovementProposal`. It never touches game state; the review session and
//! the scorer decide what to commit.

pub mod result;
pub mod movement;
pub mod engine;

pub use result::{MovementClass, ResultCode, UnknownResultCode};
pub use movement::{Destination, MovementProposal, Origin, RunnerMove};
pub use engine::{resolve, ResolutionRules, StandardRules};
