//! Review/override step between rule proposal and commit.

mod session;

pub use session::{ConfirmedPlay, ReviewSession};
