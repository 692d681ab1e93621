//! Roster registry: where the engine looks up player identities.
//!
//! The registry is an external collaborator. The engine only reads from it;
//! `Roster` is the in-memory implementation used by the driver and tests.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::{Opponent, Player};
use crate::core::PlayerId;

/// Read access to registered players and opponents.
pub trait RosterRegistry {
    /// All registered players, both teams.
    fn players(&self) -> &[Player];

    /// All registered opponents.
    fn opponents(&self) -> &[Opponent];

    /// Look up a player by id.
    fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players().iter().find(|p| &p.id == id)
    }

    /// Look up an opponent by display name.
    fn opponent_by_name(&self, name: &str) -> Option<&Opponent> {
        self.opponents().iter().find(|o| o.name == name)
    }

    /// Players on our own team.
    fn my_team(&self) -> Vec<&Player> {
        self.players().iter().filter(|p| p.is_my_team()).collect()
    }

    /// Players registered to an opponent.
    fn opponent_team(&self, opponent_id: &str) -> Vec<&Player> {
        self.players()
            .iter()
            .filter(|p| p.team_id.as_deref() == Some(opponent_id))
            .collect()
    }
}

/// In-memory roster with an id index.
///
/// The index is not serialized; deserializing rebuilds it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "RosterData")]
pub struct Roster {
    players: Vec<Player>,
    opponents: Vec<Opponent>,
    #[serde(skip)]
    index: FxHashMap<PlayerId, usize>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a player.
    pub fn add_player(&mut self, player: Player) {
        match self.index.get(&player.id) {
            Some(&pos) => self.players[pos] = player,
            None => {
                self.index.insert(player.id.clone(), self.players.len());
                self.players.push(player);
            }
        }
    }

    /// Add or replace an opponent.
    pub fn add_opponent(&mut self, opponent: Opponent) {
        match self.opponents.iter_mut().find(|o| o.id == opponent.id) {
            Some(existing) => *existing = opponent,
            None => self.opponents.push(opponent),
        }
    }

    /// Builder-style `add_player`.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.add_player(player);
        self
    }

    /// Builder-style `add_opponent`.
    #[must_use]
    pub fn with_opponent(mut self, opponent: Opponent) -> Self {
        self.add_opponent(opponent);
        self
    }

    fn reindex(&mut self) {
        self.index = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
    }
}

/// Serialized form of `Roster`.
#[derive(Deserialize)]
struct RosterData {
    players: Vec<Player>,
    opponents: Vec<Opponent>,
}

impl From<RosterData> for Roster {
    fn from(data: RosterData) -> Self {
        let mut roster = Self {
            players: data.players,
            opponents: data.opponents,
            index: FxHashMap::default(),
        };
        roster.reindex();
        roster
    }
}

impl RosterRegistry for Roster {
    fn players(&self) -> &[Player] {
        &self.players
    }

    fn opponents(&self) -> &[Opponent] {
        &self.opponents
    }

    fn player(&self, id: &PlayerId) -> Option<&Player> {
        match self.index.get(id) {
            Some(&pos) => self.players.get(pos),
            None => self.players.iter().find(|p| &p.id == id),
        }
    }
}
