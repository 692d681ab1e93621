//! Game identity: date and opponent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::GameId;

/// Who and when. The game id is derived from these, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub date: NaiveDate,
    /// Opponent display name as typed by the operator.
    pub opponent: Option<String>,
    /// Registry id of the opponent, when the name is registered.
    pub opponent_id: Option<String>,
}

impl GameInfo {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            opponent: None,
            opponent_id: None,
        }
    }

    /// Id of this game, once an opponent is named.
    #[must_use]
    pub fn game_id(&self) -> Option<GameId> {
        self.opponent
            .as_deref()
            .map(|opponent| GameId::new(self.date, opponent))
    }
}
