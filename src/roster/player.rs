//! Players and opponents as supplied by the roster registry.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Throwing hand, also used as the opponent-handedness tag on records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    #[default]
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "L")]
    Left,
}

impl Hand {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Hand::Right => Hand::Left,
            Hand::Left => Hand::Right,
        }
    }
}

/// Batting side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattingSide {
    #[default]
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "L")]
    Left,
    /// Switch hitter.
    #[serde(rename = "S")]
    Switch,
}

impl BattingSide {
    /// The side this batter hits from against a pitcher.
    ///
    /// Switch hitters bat opposite to the pitcher's throwing hand; against an
    /// unknown pitcher they are assumed to bat left (facing a right-hander).
    #[must_use]
    pub fn against(self, pitcher: Option<Hand>) -> Hand {
        match self {
            BattingSide::Right => Hand::Right,
            BattingSide::Left => Hand::Left,
            BattingSide::Switch => pitcher.map_or(Hand::Left, Hand::opposite),
        }
    }
}

/// Player role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    #[default]
    Batter,
    Pitcher,
    TwoWay,
}

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub number: String,
    /// Default fielding position label ("SS", "CF", ...).
    pub position: String,
    pub kind: PlayerKind,
    pub throws: Hand,
    pub bats: BattingSide,
    /// Owning opponent id. `None` means our own team.
    pub team_id: Option<String>,
}

impl Player {
    /// Create a right-handed batter on our team.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            number: String::new(),
            position: String::new(),
            kind: PlayerKind::Batter,
            throws: Hand::Right,
            bats: BattingSide::Right,
            team_id: None,
        }
    }

    #[must_use]
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: PlayerKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_throws(mut self, hand: Hand) -> Self {
        self.throws = hand;
        self
    }

    #[must_use]
    pub fn with_bats(mut self, side: BattingSide) -> Self {
        self.bats = side;
        self
    }

    /// Assign the player to an opponent's roster.
    #[must_use]
    pub fn on_team(mut self, opponent_id: impl Into<String>) -> Self {
        self.team_id = Some(opponent_id.into());
        self
    }

    /// True if the player belongs to our own team.
    #[must_use]
    pub fn is_my_team(&self) -> bool {
        self.team_id.is_none()
    }

    /// Name with uniform number, as shown on the scoreboard.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.number.is_empty() {
            self.name.clone()
        } else {
            format!("{} #{}", self.name, self.number)
        }
    }
}

/// A registered opposing team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    pub id: String,
    pub name: String,
}

impl Opponent {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
