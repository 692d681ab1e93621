//! Identifiers for players, games and play records.
//!
//! ## Record ids
//!
//! Every committed play record gets a `RecordId` drawn from an
//! `IdGenerator`. The generator is a seeded ChaCha8 stream, so a fixed seed
//! reproduces the same id sequence (useful in tests); an unseeded generator
//! draws its seed from the thread RNG.
//!
//! The (seed, issued) pair is saved in session snapshots. `resume` replays
//! the stream past the ids already handed out, so a restarted session does
//! not reissue ids that are already in the store.
//!
//! ```
//! use scorebook::core::IdGenerator;
//!
//! let mut a = IdGenerator::new(42);
//! let mut b = IdGenerator::new(42);
//! assert_eq!(a.next_id(), b.next_id());
//! ```

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Player identifier as assigned by the roster registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Game identifier: `"{date}-{opponent}"`.
///
/// Play records are keyed by this id, and the running score is derived by
/// filtering the log on it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    /// Build the id for a game on `date` against `opponent`.
    #[must_use]
    pub fn new(date: NaiveDate, opponent: &str) -> Self {
        Self(format!("{}-{}", date.format("%Y-%m-%d"), opponent))
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a committed play record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Record id generator.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    inner: ChaCha8Rng,
    seed: u64,
    issued: u64,
}

impl IdGenerator {
    /// Create a generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            issued: 0,
        }
    }

    /// Create a generator seeded from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create a generator from an optional seed.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Rebuild a generator and skip the first `issued` ids.
    #[must_use]
    pub fn resume(seed: u64, issued: u64) -> Self {
        let mut generator = Self::new(seed);
        for _ in 0..issued {
            generator.next_id();
        }
        generator
    }

    /// Draw the next record id.
    pub fn next_id(&mut self) -> RecordId {
        self.issued += 1;
        RecordId(self.inner.gen())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_format() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let id = GameId::new(date, "Red Stars");
        assert_eq!(id.as_str(), "2024-04-01-Red Stars");
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId(255).to_string(), "00000000000000ff");
    }

    #[test]
    fn test_generator_deterministic() {
        let mut a = IdGenerator::new(7);
        let mut b = IdGenerator::new(7);

        let ids_a: Vec<_> = (0..10).map(|_| a.next_id()).collect();
        let ids_b: Vec<_> = (0..10).map(|_| b.next_id()).collect();

        assert_eq!(ids_a, ids_b);
        assert_eq!(a.issued(), 10);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_generator_ids_distinct() {
        let mut generator = IdGenerator::new(1);
        let mut ids: Vec<_> = (0..100).map(|_| generator.next_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_resume_continues_stream() {
        let mut original = IdGenerator::new(11);
        let issued: Vec<_> = (0..5).map(|_| original.next_id()).collect();

        let mut resumed = IdGenerator::resume(11, 5);
        assert_eq!(resumed.issued(), 5);

        let next = resumed.next_id();
        assert_eq!(next, original.next_id());
        assert!(!issued.contains(&next));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = IdGenerator::new(1);
        let mut b = IdGenerator::new(2);
        assert_ne!(a.next_id(), b.next_id());
    }
}
