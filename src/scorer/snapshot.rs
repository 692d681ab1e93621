//! Session snapshots.
//!
//! A `SessionSnapshot` is everything needed to resume scoring after a
//! restart: game info, live state, lineups, pitchers and the pending
//! counters, plus the record id cursor. Records are not part of it; they
//! live in the store. An open review session is not captured either.
//!
//! Snapshots are encoded with bincode and carry a format version. A decoded
//! snapshot is checked against the game config before it is restored.

use serde::{Deserialize, Serialize};

use super::game::GameInfo;
use super::pending::PendingCounters;
use crate::core::{GameConfig, GameState, PlayerId, Side, SideMap};
use crate::error::SnapshotError;
use crate::roster::Lineup;

/// Current snapshot format.
pub const SNAPSHOT_VERSION: u32 = 2;

/// Serializable projection of a scoring session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub game: GameInfo,
    pub state: GameState,
    pub lineups: SideMap<Lineup>,
    pub pitchers: SideMap<Option<PlayerId>>,
    pub pending: PendingCounters,
    /// Record id stream position: seed and ids already issued.
    pub ids: IdCursor,
}

/// Where the record id stream stood when the snapshot was taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCursor {
    pub seed: u64,
    pub issued: u64,
}

impl SessionSnapshot {
    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode from bytes, refusing other format versions.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Check the version, the live state and the lineups against `config`.
    pub fn validate(&self, config: &GameConfig) -> Result<(), SnapshotError> {
        self.check_version()?;
        self.state.validate(config)?;
        for side in [Side::Attack, Side::Defense] {
            let slots = self.lineups[side].len();
            if slots != config.lineup_size {
                return Err(SnapshotError::InvalidState(format!(
                    "{side} lineup has {slots} slot(s), config expects {}",
                    config.lineup_size
                )));
            }
        }
        Ok(())
    }

    pub fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Base, GameConfig, Side};
    use chrono::NaiveDate;

    fn snapshot() -> SessionSnapshot {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.bases.place(Base::Second, Some(PlayerId::new("7")));
        state.advance_batter();

        let mut lineups = SideMap::new(|_| Lineup::new(config.lineup_size));
        lineups[Side::Attack].set(0, Some(PlayerId::new("7")), "SS");

        let mut game = GameInfo::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        game.opponent = Some("Red Stars".into());

        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            game,
            state,
            lineups,
            pitchers: SideMap::with_value(None),
            pending: PendingCounters {
                rbi: 1,
                runs_allowed: 0,
                earned_runs: 2,
            },
            ids: IdCursor { seed: 7, issued: 3 },
        }
    }

    #[test]
    fn test_encode_decode() {
        let original = snapshot();
        let bytes = original.encode().unwrap();
        assert_eq!(SessionSnapshot::decode(&bytes).unwrap(), original);
    }

    #[test]
    fn test_wrong_version_refused() {
        let mut old = snapshot();
        old.version = 0;
        let bytes = old.encode().unwrap();

        let err = SessionSnapshot::decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::UnsupportedVersion { found: 0, expected: SNAPSHOT_VERSION }
        ));
    }

    #[test]
    fn test_validate_against_config() {
        let config = GameConfig::default();
        assert!(snapshot().validate(&config).is_ok());

        let mut short = snapshot();
        short.lineups[Side::Defense] = Lineup::new(8);
        assert!(matches!(short.validate(&config), Err(SnapshotError::InvalidState(_))));

        let other = GameConfig::default().with_lineup_size(10);
        assert!(snapshot().validate(&other).is_err());
    }

    #[test]
    fn test_garbage_refused() {
        assert!(matches!(
            SessionSnapshot::decode(&[1, 2, 3]),
            Err(SnapshotError::Decode(_))
        ));
    }
}
