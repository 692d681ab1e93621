//! Play records, the record store and score projections.

mod record;
mod store;
mod score;

pub use record::{BattedBall, PitchingPlayRecord, PlateAppearanceRecord};
pub use store::{MemoryStore, PlayRecordStore};
pub use score::{derive_score, LineScore, Score};
