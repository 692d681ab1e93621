//! Play record store.
//!
//! Append-only persistence of committed records, keyed by game id. The only
//! removal path is explicit operator deletion; records are never edited here.
//!
//! `MemoryStore` keeps the log in `im` persistent vectors, so cloning the
//! store (to snapshot or compare) is O(1).

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::record::{PitchingPlayRecord, PlateAppearanceRecord};
use crate::core::{GameId, RecordId};
use crate::error::StoreError;

/// Persistence for committed play records.
pub trait PlayRecordStore {
    /// Append a plate-appearance record.
    fn save_plate_appearance(&mut self, record: PlateAppearanceRecord) -> Result<(), StoreError>;

    /// Append a pitching-play record.
    fn save_pitching_play(&mut self, record: PitchingPlayRecord) -> Result<(), StoreError>;

    /// Plate appearances for a game, in commit order.
    fn plate_appearances(&self, game_id: &GameId) -> Vec<PlateAppearanceRecord>;

    /// Pitching plays for a game, in commit order.
    fn pitching_plays(&self, game_id: &GameId) -> Vec<PitchingPlayRecord>;

    /// Delete a plate-appearance record.
    fn delete_plate_appearance(&mut self, id: RecordId) -> Result<PlateAppearanceRecord, StoreError>;

    /// Delete a pitching-play record.
    fn delete_pitching_play(&mut self, id: RecordId) -> Result<PitchingPlayRecord, StoreError>;
}

/// In-memory record store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    plate_appearances: Vector<PlateAppearanceRecord>,
    pitching_plays: Vector<PitchingPlayRecord>,
    ids: ImHashSet<RecordId>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across all games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plate_appearances.len() + self.pitching_plays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn claim(&mut self, id: RecordId) -> Result<(), StoreError> {
        if self.ids.contains(&id) {
            return Err(StoreError::DuplicateRecord(id));
        }
        self.ids.insert(id);
        Ok(())
    }
}

impl PlayRecordStore for MemoryStore {
    fn save_plate_appearance(&mut self, record: PlateAppearanceRecord) -> Result<(), StoreError> {
        self.claim(record.id)?;
        self.plate_appearances.push_back(record);
        Ok(())
    }

    fn save_pitching_play(&mut self, record: PitchingPlayRecord) -> Result<(), StoreError> {
        self.claim(record.id)?;
        self.pitching_plays.push_back(record);
        Ok(())
    }

    fn plate_appearances(&self, game_id: &GameId) -> Vec<PlateAppearanceRecord> {
        self.plate_appearances
            .iter()
            .filter(|r| &r.game_id == game_id)
            .cloned()
            .collect()
    }

    fn pitching_plays(&self, game_id: &GameId) -> Vec<PitchingPlayRecord> {
        self.pitching_plays
            .iter()
            .filter(|r| &r.game_id == game_id)
            .cloned()
            .collect()
    }

    fn delete_plate_appearance(&mut self, id: RecordId) -> Result<PlateAppearanceRecord, StoreError> {
        let index = self
            .plate_appearances
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;
        self.ids.remove(&id);
        Ok(self.plate_appearances.remove(index))
    }

    fn delete_pitching_play(&mut self, id: RecordId) -> Result<PitchingPlayRecord, StoreError> {
        let index = self
            .pitching_plays
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;
        self.ids.remove(&id);
        Ok(self.pitching_plays.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BaseOccupancy, Half, PlayerId};
    use crate::rules::ResultCode;
    use chrono::NaiveDate;

    fn game(opponent: &str) -> GameId {
        GameId::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), opponent)
    }

    fn pa(id: u64, game_id: GameId, rbi: u32) -> PlateAppearanceRecord {
        PlateAppearanceRecord {
            id: RecordId(id),
            game_id,
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            opponent: "Red Stars".to_string(),
            player_id: Some(PlayerId::new("1")),
            player_name: "Sato".to_string(),
            inning: 1,
            half: Half::Top,
            bases: BaseOccupancy::default(),
            result: ResultCode::Single,
            direction: 0,
            rbi,
            is_steal: false,
            batted_ball: None,
            vs_hand: None,
        }
    }

    #[test]
    fn test_filter_by_game() {
        let mut store = MemoryStore::new();
        store.save_plate_appearance(pa(1, game("Red Stars"), 0)).unwrap();
        store.save_plate_appearance(pa(2, game("Blue Oceans"), 1)).unwrap();
        store.save_plate_appearance(pa(3, game("Red Stars"), 2)).unwrap();

        let records = store.plate_appearances(&game("Red Stars"));
        assert_eq!(records.iter().map(|r| r.id.0).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut store = MemoryStore::new();
        store.save_plate_appearance(pa(1, game("Red Stars"), 0)).unwrap();

        let err = store.save_plate_appearance(pa(1, game("Red Stars"), 0)).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateRecord(RecordId(1))));
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        store.save_plate_appearance(pa(1, game("Red Stars"), 0)).unwrap();

        let removed = store.delete_plate_appearance(RecordId(1)).unwrap();
        assert_eq!(removed.id, RecordId(1));
        assert!(store.is_empty());
        assert!(store.delete_plate_appearance(RecordId(1)).is_err());

        // Id is free again after deletion.
        store.save_plate_appearance(pa(1, game("Red Stars"), 0)).unwrap();
    }

    #[test]
    fn test_clone_is_independent() {
        let mut store = MemoryStore::new();
        store.save_plate_appearance(pa(1, game("Red Stars"), 0)).unwrap();

        let snapshot = store.clone();
        store.save_plate_appearance(pa(2, game("Red Stars"), 0)).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
