//! Plain-text game log.

use std::fmt::{self, Write};

use super::game::GameInfo;
use crate::core::{GameId, Half};
use crate::records::{derive_score, PlayRecordStore};

/// Inning-by-inning play log of a game, ending with the score.
///
/// Mirrored opposing-batter records are left out; the defense half is
/// listed from the pitching plays.
pub fn game_log<S>(store: &S, game_id: &GameId, game: &GameInfo, mirror_tag: &str) -> Result<String, fmt::Error>
where
    S: PlayRecordStore + ?Sized,
{
    let mut log = String::new();
    write_game_log(&mut log, store, game_id, game, mirror_tag)?;
    Ok(log)
}

/// Write the game log to any `fmt::Write` sink.
pub fn write_game_log<W, S>(
    out: &mut W,
    store: &S,
    game_id: &GameId,
    game: &GameInfo,
    mirror_tag: &str,
) -> fmt::Result
where
    W: Write,
    S: PlayRecordStore + ?Sized,
{
    let batting: Vec<_> = store
        .plate_appearances(game_id)
        .into_iter()
        .filter(|r| !r.is_mirror(mirror_tag))
        .collect();
    let pitching = store.pitching_plays(game_id);
    let last_inning = batting
        .iter()
        .map(|r| r.inning)
        .chain(pitching.iter().map(|r| r.inning))
        .max()
        .unwrap_or(0);

    writeln!(out, "=== Game Log ===")?;
    writeln!(out, "Date: {}", game.date.format("%Y-%m-%d"))?;
    writeln!(out, "Opponent: {}", game.opponent.as_deref().unwrap_or("-"))?;
    writeln!(out)?;

    for inning in 1..=last_inning {
        writeln!(out, "--- Inning {inning} ---")?;

        let plays: Vec<_> = batting.iter().filter(|r| r.inning == inning).collect();
        if let Some(first) = plays.first() {
            writeln!(out, "[Attack] ({})", half_label(first.half))?;
            for r in plays {
                write!(out, "  {}: {}", r.player_name, r.result)?;
                if r.rbi > 0 {
                    write!(out, " ({} RBI)", r.rbi)?;
                }
                if r.is_steal {
                    write!(out, " (SB)")?;
                }
                writeln!(out)?;
            }
        }

        let plays: Vec<_> = pitching.iter().filter(|r| r.inning == inning).collect();
        if let Some(first) = plays.first() {
            writeln!(out, "[Defense] ({})", half_label(first.half))?;
            for r in plays {
                write!(out, "  P {}: {}", r.pitcher_name, r.result)?;
                if r.runs_allowed > 0 {
                    write!(out, " ({} run(s))", r.runs_allowed)?;
                }
                writeln!(out)?;
            }
        }
        writeln!(out)?;
    }

    let score = derive_score(store, game_id, mirror_tag);
    writeln!(out, "[Score] Us {} - {} Them", score.attack, score.defense)
}

fn half_label(half: Half) -> &'static str {
    match half {
        Half::Top => "Top",
        Half::Bottom => "Bottom",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MemoryStore;
    use chrono::NaiveDate;

    /// A sink that refuses every write.
    struct Closed;

    impl Write for Closed {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn info() -> GameInfo {
        let mut game = GameInfo::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        game.opponent = Some("Red Stars".into());
        game
    }

    #[test]
    fn test_empty_game_log() {
        let store = MemoryStore::new();
        let game = info();
        let game_id = game.game_id().unwrap();

        let log = game_log(&store, &game_id, &game, "mirror").unwrap();
        assert!(log.starts_with("=== Game Log ===\nDate: 2024-04-01\nOpponent: Red Stars\n"));
        assert!(log.ends_with("[Score] Us 0 - 0 Them\n"));
    }

    #[test]
    fn test_write_error_propagates() {
        let store = MemoryStore::new();
        let game = info();
        let game_id = game.game_id().unwrap();

        assert!(write_game_log(&mut Closed, &store, &game_id, &game, "mirror").is_err());
    }
}
