//! Score derivation.
//!
//! The score is never stored. It is a projection of the record log:
//! - attack runs = sum of `rbi` over our plate appearances for the game
//!   (mirrored opposing-batter records are skipped)
//! - defense runs = sum of `runs_allowed` over the game's pitching plays
//!
//! Deleting or editing records changes the result on the next query.

use serde::{Deserialize, Serialize};

use super::store::PlayRecordStore;
use crate::core::{GameId, Side};

/// Runs per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub attack: u32,
    pub defense: u32,
}

impl Score {
    #[must_use]
    pub fn runs(&self, side: Side) -> u32 {
        match side {
            Side::Attack => self.attack,
            Side::Defense => self.defense,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.attack, self.defense)
    }
}

/// Derive the running score for a game.
pub fn derive_score<S>(store: &S, game_id: &GameId, mirror_tag: &str) -> Score
where
    S: PlayRecordStore + ?Sized,
{
    let attack = store
        .plate_appearances(game_id)
        .iter()
        .filter(|r| !r.is_mirror(mirror_tag))
        .map(|r| r.rbi)
        .sum();
    let defense = store
        .pitching_plays(game_id)
        .iter()
        .map(|r| r.runs_allowed)
        .sum();
    Score { attack, defense }
}

/// Runs per inning per side.
///
/// `attack[i]` and `defense[i]` hold the runs of inning `i + 1`. Both rows
/// are padded to the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    pub attack: Vec<u32>,
    pub defense: Vec<u32>,
}

impl LineScore {
    /// Derive the line score for a game, same filtering as `derive_score`.
    pub fn derive<S>(store: &S, game_id: &GameId, mirror_tag: &str) -> Self
    where
        S: PlayRecordStore + ?Sized,
    {
        let mut line = Self::default();
        for record in store.plate_appearances(game_id) {
            if !record.is_mirror(mirror_tag) {
                Self::add(&mut line.attack, record.inning, record.rbi);
            }
        }
        for record in store.pitching_plays(game_id) {
            Self::add(&mut line.defense, record.inning, record.runs_allowed);
        }

        let innings = line.innings();
        line.attack.resize(innings, 0);
        line.defense.resize(innings, 0);
        line
    }

    fn add(row: &mut Vec<u32>, inning: u32, runs: u32) {
        let index = inning.max(1) as usize - 1;
        if row.len() <= index {
            row.resize(index + 1, 0);
        }
        row[index] += runs;
    }

    /// Innings with at least one record on either side.
    #[must_use]
    pub fn innings(&self) -> usize {
        self.attack.len().max(self.defense.len())
    }

    /// Runs in one inning (1-based).
    #[must_use]
    pub fn inning(&self, side: Side, inning: u32) -> u32 {
        let row = match side {
            Side::Attack => &self.attack,
            Side::Defense => &self.defense,
        };
        inning
            .checked_sub(1)
            .and_then(|i| row.get(i as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Totals, equal to `derive_score` over the same log.
    #[must_use]
    pub fn total(&self) -> Score {
        Score {
            attack: self.attack.iter().sum(),
            defense: self.defense.iter().sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BaseOccupancy, Half, PlayerId, RecordId};
    use crate::records::{MemoryStore, PitchingPlayRecord, PlateAppearanceRecord};
    use crate::rules::ResultCode;
    use chrono::NaiveDate;

    const TAG: &str = "My Team";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    fn game() -> GameId {
        GameId::new(date(), "Red Stars")
    }

    fn pa(id: u64, inning: u32, rbi: u32, opponent: &str) -> PlateAppearanceRecord {
        PlateAppearanceRecord {
            id: RecordId(id),
            game_id: game(),
            date: date(),
            opponent: opponent.to_string(),
            player_id: Some(PlayerId::new("1")),
            player_name: "Sato".to_string(),
            inning,
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

    fn pitch(id: u64, inning: u32, runs: u32) -> PitchingPlayRecord {
        PitchingPlayRecord {
            id: RecordId(id),
            game_id: game(),
            date: date(),
            opponent: "Red Stars".to_string(),
            pitcher_id: Some(PlayerId::new("P")),
            pitcher_name: "Ito".to_string(),
            inning,
            half: Half::Bottom,
            result: ResultCode::Double,
            batted_ball: None,
            is_out: false,
            runs_allowed: runs,
            earned_runs: runs,
            vs_hand: None,
        }
    }

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.save_plate_appearance(pa(1, 1, 2, "Red Stars")).unwrap();
        store.save_plate_appearance(pa(2, 3, 1, "Red Stars")).unwrap();
        store.save_pitching_play(pitch(3, 2, 1)).unwrap();
        // Mirror of the pitching play: must not count for us.
        store.save_plate_appearance(pa(4, 2, 1, TAG)).unwrap();
        store
    }

    #[test]
    fn test_derive_score() {
        let score = derive_score(&store(), &game(), TAG);
        assert_eq!(score, Score { attack: 3, defense: 1 });
        assert_eq!(score.to_string(), "3-1");
    }

    #[test]
    fn test_score_follows_deletion() {
        let mut store = store();
        store.delete_plate_appearance(RecordId(1)).unwrap();
        assert_eq!(derive_score(&store, &game(), TAG).attack, 1);
    }

    #[test]
    fn test_other_game_ignored() {
        let other = GameId::new(date(), "Blue Oceans");
        assert_eq!(derive_score(&store(), &other, TAG), Score::default());
    }

    #[test]
    fn test_line_score() {
        let line = LineScore::derive(&store(), &game(), TAG);
        assert_eq!(line.attack, vec![2, 0, 1]);
        assert_eq!(line.defense, vec![0, 1, 0]);
        assert_eq!(line.inning(Side::Defense, 2), 1);
        assert_eq!(line.inning(Side::Attack, 0), 0);
        assert_eq!(line.total(), derive_score(&store(), &game(), TAG));
    }
}
