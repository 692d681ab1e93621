//! The live-game driver.
//!
//! `Scorer` owns one game's worth of scoring: the live `GameState`, both
//! lineups, the current pitchers, the pending counters, at most one open
//! `ReviewSession`, the record store and the mirror outbox. Every operator
//! action goes through it.
//!
//! ## Commit order
//!
//! 1. Build the play's records from the pre-play state
//! 2. Save them (a store failure refuses the commit, nothing else changes)
//! 3. Queue them for the mirror
//! 4. Apply the outcome to the game state (batter advance, side change)
//! 5. Reset the pending counters and flush the outbox
//!
//! ## Sides
//!
//! `pitchers[Side::Attack]` is the opposing pitcher our batters face;
//! `pitchers[Side::Defense]` is our own pitcher.

use chrono::NaiveDate;
use smallvec::SmallVec;

use super::game::GameInfo;
use super::pending::{PendingCounters, PlayDetails};
use super::report;
use super::snapshot::{IdCursor, SessionSnapshot, SNAPSHOT_VERSION};
use crate::core::{
    Base, BaseSlot, GameConfig, GameId, GamePhase, GameState, IdGenerator, PlayOutcome, PlayerId,
    RecordId, Side, SideChange, SideMap,
};
use crate::error::{ScoreError, StoreError};
use crate::records::{
    derive_score, LineScore, MemoryStore, PitchingPlayRecord, PlateAppearanceRecord,
    PlayRecordStore, Score,
};
use crate::review::ReviewSession;
use crate::roster::{Hand, Lineup, Roster, RosterRegistry};
use crate::rules::{Destination, ResolutionRules, ResultCode, StandardRules};
use crate::sync::{FlushReport, MirrorWrite, NoopMirror, Outbox, RemoteMirror};

/// Name written on records when the player is not registered.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Summary of one committed play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitSummary {
    pub code: ResultCode,
    /// Records written, pitching play first on defense.
    pub records: SmallVec<[RecordId; 2]>,
    pub outs_added: u8,
    /// Runs that crossed home on the play (pending counters not included).
    pub runs: u32,
    /// True if the operator changed the proposed movement.
    pub overridden: bool,
    pub side_change: Option<SideChange>,
}

/// What `submit` did with a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The play was committed right away.
    Committed(CommitSummary),
    /// A review session was opened; confirm or cancel it next.
    ReviewOpened,
}

struct OpenReview {
    session: ReviewSession,
    details: PlayDetails,
}

/// Live-game driver.
pub struct Scorer<S: PlayRecordStore = MemoryStore> {
    config: GameConfig,
    rules: StandardRules,
    state: GameState,
    game: GameInfo,
    lineups: SideMap<Lineup>,
    pitchers: SideMap<Option<PlayerId>>,
    pending: PendingCounters,
    review: Option<OpenReview>,
    roster: Roster,
    store: S,
    outbox: Outbox,
    mirror: Box<dyn RemoteMirror>,
    ids: IdGenerator,
}

impl Scorer<MemoryStore> {
    /// Create a scorer backed by an in-memory store.
    pub fn new(config: GameConfig, roster: Roster, date: NaiveDate) -> Result<Self, ScoreError> {
        Self::with_store(config, roster, date, MemoryStore::new())
    }
}

impl<S: PlayRecordStore> Scorer<S> {
    /// Create a scorer writing to `store`.
    pub fn with_store(
        config: GameConfig,
        roster: Roster,
        date: NaiveDate,
        store: S,
    ) -> Result<Self, ScoreError> {
        config.validate()?;
        Ok(Self {
            rules: StandardRules::from_config(&config),
            state: GameState::new(&config),
            game: GameInfo::new(date),
            lineups: SideMap::new(|_| Lineup::new(config.lineup_size)),
            pitchers: SideMap::with_value(None),
            pending: PendingCounters::default(),
            review: None,
            roster,
            store,
            outbox: Outbox::new(),
            mirror: Box::new(NoopMirror),
            ids: IdGenerator::from_seed(config.id_seed),
            config,
        })
    }

    /// Replace the remote mirror.
    #[must_use]
    pub fn with_mirror(mut self, mirror: impl RemoteMirror + 'static) -> Self {
        self.mirror = Box::new(mirror);
        self
    }

    // === Accessors ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn game(&self) -> &GameInfo {
        &self.game
    }

    pub fn game_id(&self) -> Option<GameId> {
        self.game.game_id()
    }

    pub fn lineup(&self, side: Side) -> &Lineup {
        &self.lineups[side]
    }

    pub fn pitcher(&self, side: Side) -> Option<&PlayerId> {
        self.pitchers[side].as_ref()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pending(&self) -> &PendingCounters {
        &self.pending
    }

    /// Edit the counters that ride along with the next commit.
    pub fn pending_mut(&mut self) -> &mut PendingCounters {
        &mut self.pending
    }

    /// The open review session, if any.
    pub fn review(&self) -> Option<&ReviewSession> {
        self.review.as_ref().map(|open| &open.session)
    }

    /// Writes waiting for the mirror.
    pub fn outbox_len(&self) -> usize {
        self.outbox.len()
    }

    /// Player due up for the side at bat, if the slot is filled.
    pub fn current_batter(&self) -> Option<&PlayerId> {
        self.lineups[self.state.side].player_at(self.state.current_batter_index())
    }

    // === Setup ===

    /// Change the game date. Only before the game starts.
    pub fn set_date(&mut self, date: NaiveDate) -> Result<(), ScoreError> {
        self.ensure_setup()?;
        self.game.date = date;
        Ok(())
    }

    /// Name the opponent, resolving its registry id by name.
    pub fn set_opponent(&mut self, name: &str) -> Result<(), ScoreError> {
        self.ensure_setup()?;
        let name = name.trim();
        if name.is_empty() {
            self.game.opponent = None;
            self.game.opponent_id = None;
            return Ok(());
        }
        self.game.opponent_id = self.roster.opponent_by_name(name).map(|o| o.id.clone());
        self.game.opponent = Some(name.to_string());
        Ok(())
    }

    /// Fill one batting-order slot.
    ///
    /// Without an explicit position label the player's registered position
    /// is used.
    pub fn set_lineup_slot(
        &mut self,
        side: Side,
        index: usize,
        player: Option<PlayerId>,
        position: Option<&str>,
    ) -> Result<(), ScoreError> {
        let position = match position {
            Some(position) => position.to_string(),
            None => player
                .as_ref()
                .and_then(|id| self.roster.player(id))
                .map(|p| p.position.clone())
                .unwrap_or_default(),
        };
        let lineup = &mut self.lineups[side];
        if lineup.set(index, player, position) {
            Ok(())
        } else {
            Err(ScoreError::LineupSlotOutOfRange {
                index,
                size: lineup.len(),
            })
        }
    }

    /// Set the pitcher for a side (see the module docs for which is which).
    pub fn set_pitcher(&mut self, side: Side, pitcher: Option<PlayerId>) {
        self.pitchers[side] = pitcher;
    }

    // === Lifecycle ===

    /// Start the game with our team batting first.
    pub fn start_game(&mut self) -> Result<(), ScoreError> {
        self.start_game_with(Side::Attack)
    }

    /// Start the game with `side` being recorded first.
    pub fn start_game_with(&mut self, side: Side) -> Result<(), ScoreError> {
        if self.state.phase == GamePhase::InProgress {
            return Err(ScoreError::AlreadyInProgress);
        }
        let game_id = self.game_id().ok_or(ScoreError::MissingOpponent)?;
        if self.game.opponent_id.is_none() {
            log::warn!("opponent of {game_id} is not registered, opposing batters are not attributed");
        }

        self.state.phase = GamePhase::InProgress;
        self.state.side = side;
        log::info!("game {game_id} started, {side} first");
        Ok(())
    }

    /// End the game and return to setup. Lineups and opponent are kept.
    pub fn end_game(&mut self) -> Result<(), ScoreError> {
        self.ensure_in_progress()?;
        if let Some(open) = self.review.take() {
            open.session.cancel();
        }
        self.state.reset();
        self.pending.reset();
        self.flush_outbox();
        log::info!("game {} ended", self.game.game_id().map(|id| id.0).unwrap_or_default());
        Ok(())
    }

    // === Plays ===

    /// Submit a result with no extra details.
    pub fn submit(&mut self, code: ResultCode) -> Result<Submission, ScoreError> {
        self.submit_with(code, PlayDetails::default())
    }

    /// Submit a result.
    ///
    /// Hit, error, fielder's choice, sacrifice and double-play results open
    /// a review session. Everything else commits immediately with the rule
    /// engine's proposal (forced advances for walks, no movement otherwise).
    pub fn submit_with(&mut self, code: ResultCode, details: PlayDetails) -> Result<Submission, ScoreError> {
        self.ensure_live()?;
        if code.opens_review() {
            self.open_review_with(code, details)?;
            return Ok(Submission::ReviewOpened);
        }

        let outcome = self
            .rules
            .resolve(code, &self.state.bases, self.current_batter())
            .outcome();
        let summary = self.commit_play(code, &outcome, &details, false)?;
        Ok(Submission::Committed(summary))
    }

    /// Open a review for any result code.
    pub fn open_review(&mut self, code: ResultCode) -> Result<(), ScoreError> {
        self.open_review_with(code, PlayDetails::default())
    }

    pub fn open_review_with(&mut self, code: ResultCode, details: PlayDetails) -> Result<(), ScoreError> {
        self.ensure_in_progress()?;
        if let Some(open) = &self.review {
            return Err(ScoreError::ReviewInProgress(open.session.code().to_string()));
        }
        let session = ReviewSession::open(&self.rules, code, &self.state.bases, self.current_batter());
        log::debug!("review opened for {code} with {} runner(s)", session.runners().len());
        self.review = Some(OpenReview { session, details });
        Ok(())
    }

    /// Override one runner's destination in the open review.
    pub fn set_destination(&mut self, index: usize, destination: Destination) -> Result<(), ScoreError> {
        let open = self.review.as_mut().ok_or(ScoreError::NoReviewOpen)?;
        open.session.set_destination(index, destination)
    }

    /// Undo all overrides in the open review.
    pub fn reset_review(&mut self) -> Result<(), ScoreError> {
        let open = self.review.as_mut().ok_or(ScoreError::NoReviewOpen)?;
        open.session.reset();
        Ok(())
    }

    /// Commit the open review.
    ///
    /// If the records cannot be saved the review stays open.
    pub fn confirm_review(&mut self) -> Result<CommitSummary, ScoreError> {
        let open = self.review.take().ok_or(ScoreError::NoReviewOpen)?;
        let play = open.session.clone().confirm();
        match self.commit_play(play.code, &play.outcome, &open.details, play.overridden) {
            Ok(summary) => Ok(summary),
            Err(err) => {
                self.review = Some(open);
                Err(err)
            }
        }
    }

    /// Discard the open review.
    pub fn cancel_review(&mut self) -> Result<(), ScoreError> {
        let open = self.review.take().ok_or(ScoreError::NoReviewOpen)?;
        open.session.cancel();
        Ok(())
    }

    fn commit_play(
        &mut self,
        code: ResultCode,
        outcome: &PlayOutcome,
        details: &PlayDetails,
        overridden: bool,
    ) -> Result<CommitSummary, ScoreError> {
        self.ensure_in_progress()?;
        let writes = self.play_records(code, outcome, details)?;

        self.save_all(&writes)?;
        let records: SmallVec<[RecordId; 2]> = writes.iter().map(MirrorWrite::record_id).collect();
        for write in writes {
            self.outbox.enqueue(write);
        }

        let side_change = self.state.commit(outcome, code.advances_batting_order());
        self.pending.reset();
        log::debug!(
            "committed {code}: {} out(s), {} run(s)",
            outcome.outs_added,
            outcome.runs
        );
        if let Some(change) = &side_change {
            log_side_change(change);
        }
        self.flush_outbox();

        Ok(CommitSummary {
            code,
            records,
            outs_added: outcome.outs_added,
            runs: outcome.runs,
            overridden,
            side_change,
        })
    }

    /// Save a play's records as one unit. If any save fails, the records
    /// already saved are deleted again before the error is returned.
    fn save_all(&mut self, writes: &[MirrorWrite]) -> Result<(), ScoreError> {
        for (saved, write) in writes.iter().enumerate() {
            if let Err(err) = self.save(write) {
                for earlier in writes[..saved].iter().rev() {
                    if let Err(undo) = self.unsave(earlier) {
                        log::error!("could not roll back record {}: {undo}", earlier.record_id());
                    }
                }
                return Err(err.into());
            }
        }
        Ok(())
    }

    fn save(&mut self, write: &MirrorWrite) -> Result<(), StoreError> {
        match write {
            MirrorWrite::PlateAppearance(record) => self.store.save_plate_appearance(record.clone()),
            MirrorWrite::PitchingPlay(record) => self.store.save_pitching_play(record.clone()),
            MirrorWrite::Delete(_) => Ok(()),
        }
    }

    fn unsave(&mut self, write: &MirrorWrite) -> Result<(), StoreError> {
        match write {
            MirrorWrite::PlateAppearance(record) => self.store.delete_plate_appearance(record.id).map(drop),
            MirrorWrite::PitchingPlay(record) => self.store.delete_pitching_play(record.id).map(drop),
            MirrorWrite::Delete(_) => Ok(()),
        }
    }

    /// Records for a play, built from the pre-play state.
    fn play_records(
        &mut self,
        code: ResultCode,
        outcome: &PlayOutcome,
        details: &PlayDetails,
    ) -> Result<SmallVec<[MirrorWrite; 2]>, ScoreError> {
        let game_id = self.game_id().ok_or(ScoreError::MissingOpponent)?;
        let opponent = self.game.opponent.clone().unwrap_or_default();
        let batter = self.current_batter().cloned();
        let batter_name = self.player_name(batter.as_ref());
        let mut writes = SmallVec::new();

        match self.state.side {
            Side::Attack => {
                let vs_hand = self.pitcher_hand(Side::Attack).unwrap_or(self.config.default_hand);
                let direction = details
                    .direction
                    .or_else(|| details.batted_ball.map(|ball| ball.direction()))
                    .unwrap_or(0);
                writes.push(MirrorWrite::PlateAppearance(PlateAppearanceRecord {
                    id: self.ids.next_id(),
                    game_id,
                    date: self.game.date,
                    opponent,
                    player_id: batter,
                    player_name: batter_name,
                    inning: self.state.inning,
                    half: self.state.half,
                    bases: self.state.bases.occupancy(),
                    result: code,
                    direction,
                    rbi: self.pending.rbi + outcome.runs,
                    is_steal: false,
                    batted_ball: details.batted_ball,
                    vs_hand: Some(vs_hand),
                }));
            }
            Side::Defense => {
                let our_hand = self.pitcher_hand(Side::Defense);
                let batter_bats = batter
                    .as_ref()
                    .and_then(|id| self.roster.player(id))
                    .map(|p| p.bats);
                let vs_hand = batter_bats.map_or(self.config.default_hand, |bats| bats.against(our_hand));
                let runs_allowed = self.pending.runs_allowed + outcome.runs;
                let pitcher = self.pitchers[Side::Defense].clone();

                writes.push(MirrorWrite::PitchingPlay(PitchingPlayRecord {
                    id: self.ids.next_id(),
                    game_id: game_id.clone(),
                    date: self.game.date,
                    opponent,
                    pitcher_name: self.player_name(pitcher.as_ref()),
                    pitcher_id: pitcher,
                    inning: self.state.inning,
                    half: self.state.half,
                    result: code,
                    batted_ball: details.batted_ball,
                    is_out: code.is_out(),
                    runs_allowed,
                    earned_runs: self.pending.earned_runs,
                    vs_hand: Some(vs_hand),
                }));

                // Only registered batters get a batting line of their own.
                if batter_bats.is_some() {
                    writes.push(MirrorWrite::PlateAppearance(PlateAppearanceRecord {
                        id: self.ids.next_id(),
                        game_id,
                        date: self.game.date,
                        opponent: self.config.mirror_opponent_tag.clone(),
                        player_id: batter,
                        player_name: batter_name,
                        inning: self.state.inning,
                        half: self.state.half,
                        bases: self.state.bases.occupancy(),
                        result: code,
                        direction: details.direction.unwrap_or(0),
                        rbi: runs_allowed,
                        is_steal: false,
                        batted_ball: details.batted_ball,
                        vs_hand: Some(our_hand.unwrap_or(self.config.default_hand)),
                    }));
                }
            }
        }
        Ok(writes)
    }

    // === Runners ===

    /// Stolen base: the runner moves up one base and a steal marker is
    /// recorded. A steal of home takes the runner off the bases without a
    /// run; credit it through the pending counters on the next play.
    pub fn steal(&mut self, base: Base) -> Result<RecordId, ScoreError> {
        self.ensure_live()?;
        let runner = self.runner_on(base)?;
        let id = self.save_steal_marker(runner.as_ref(), true)?;
        self.state.advance_runner(base);
        log::debug!("{} stole from {base}", self.player_name(runner.as_ref()));
        self.flush_outbox();
        Ok(id)
    }

    /// Caught stealing: the runner is out and a marker is recorded.
    pub fn caught_stealing(&mut self, base: Base) -> Result<Option<SideChange>, ScoreError> {
        self.ensure_live()?;
        let runner = self.runner_on(base)?;
        self.save_steal_marker(runner.as_ref(), false)?;
        let change = self.state.retire_runner(base);
        log::debug!("{} caught stealing from {base}", self.player_name(runner.as_ref()));
        if let Some(change) = &change {
            log_side_change(change);
        }
        self.flush_outbox();
        Ok(change)
    }

    /// Pick-off: the runner is out. No record.
    pub fn pick_off(&mut self, base: Base) -> Result<Option<SideChange>, ScoreError> {
        self.ensure_live()?;
        self.runner_on(base)?;
        let change = self.state.retire_runner(base);
        log::debug!("runner picked off {base}");
        if let Some(change) = &change {
            log_side_change(change);
        }
        Ok(change)
    }

    /// Move the runner up one base (wild pitch, balk). No record.
    pub fn advance_runner(&mut self, base: Base) -> Result<(), ScoreError> {
        self.ensure_live()?;
        self.runner_on(base)?;
        if self.state.advance_runner(base).is_some() {
            log::debug!("runner on {base} crossed home without a run credit");
        }
        Ok(())
    }

    /// Take the runner off the base with no out.
    pub fn clear_runner(&mut self, base: Base) -> Result<(), ScoreError> {
        self.ensure_live()?;
        self.runner_on(base)?;
        self.state.bases.take(base);
        Ok(())
    }

    /// Pinch runner: swap the occupant of `base`, and the lineup slot of
    /// the runner replaced. Returns the lineup slot changed, if any.
    pub fn substitute_runner(&mut self, base: Base, runner: PlayerId) -> Result<Option<usize>, ScoreError> {
        self.ensure_live()?;
        let previous = self.runner_on(base)?;
        self.state.bases.place(base, Some(runner.clone()));
        let slot = previous.and_then(|old| self.lineups[self.state.side].replace(&old, runner));
        log::debug!("runner substituted on {base}");
        Ok(slot)
    }

    fn runner_on(&self, base: Base) -> Result<Option<PlayerId>, ScoreError> {
        match &self.state.bases[base] {
            BaseSlot::Occupied(id) => Ok(id.clone()),
            BaseSlot::Empty => Err(ScoreError::EmptyBase(base)),
        }
    }

    fn save_steal_marker(&mut self, runner: Option<&PlayerId>, is_steal: bool) -> Result<RecordId, ScoreError> {
        let game_id = self.game_id().ok_or(ScoreError::MissingOpponent)?;
        // Opposing runners are booked to their own batting lines.
        let opponent = match self.state.side {
            Side::Attack => self.game.opponent.clone().unwrap_or_default(),
            Side::Defense => self.config.mirror_opponent_tag.clone(),
        };
        let record = PlateAppearanceRecord {
            id: self.ids.next_id(),
            game_id,
            date: self.game.date,
            opponent,
            player_id: runner.cloned(),
            player_name: self.player_name(runner),
            inning: self.state.inning,
            half: self.state.half,
            bases: self.state.bases.occupancy(),
            result: ResultCode::InterferenceOrStolenBaseMarker,
            direction: 0,
            rbi: 0,
            is_steal,
            batted_ball: None,
            vs_hand: None,
        };
        let id = record.id;
        self.store.save_plate_appearance(record.clone())?;
        self.outbox.enqueue(MirrorWrite::PlateAppearance(record));
        Ok(id)
    }

    // === Lineup and Sides ===

    /// Send a pinch hitter up in the current batter's slot.
    pub fn pinch_hit(&mut self, player: PlayerId) -> Result<usize, ScoreError> {
        self.ensure_live()?;
        let index = self.state.current_batter_index();
        let lineup = &mut self.lineups[self.state.side];
        if lineup.pinch_hit(index, player) {
            Ok(index)
        } else {
            Err(ScoreError::LineupSlotOutOfRange {
                index,
                size: lineup.len(),
            })
        }
    }

    /// Force a side change.
    pub fn change_side(&mut self) -> Result<SideChange, ScoreError> {
        self.ensure_live()?;
        let change = self.state.change_side();
        log_side_change(&change);
        Ok(change)
    }

    // === Score ===

    /// Running score, derived from the record log.
    pub fn score(&self) -> Result<Score, ScoreError> {
        let game_id = self.game_id().ok_or(ScoreError::MissingOpponent)?;
        Ok(derive_score(&self.store, &game_id, &self.config.mirror_opponent_tag))
    }

    /// Runs per inning, derived from the record log.
    pub fn line_score(&self) -> Result<LineScore, ScoreError> {
        let game_id = self.game_id().ok_or(ScoreError::MissingOpponent)?;
        Ok(LineScore::derive(&self.store, &game_id, &self.config.mirror_opponent_tag))
    }

    /// Plain-text play-by-play of the current game.
    pub fn game_log(&self) -> Result<String, ScoreError> {
        let game_id = self.game_id().ok_or(ScoreError::MissingOpponent)?;
        let log = report::game_log(&self.store, &game_id, &self.game, &self.config.mirror_opponent_tag)?;
        Ok(log)
    }

    /// Delete a record of either kind.
    pub fn delete_record(&mut self, id: RecordId) -> Result<(), ScoreError> {
        match self.store.delete_plate_appearance(id) {
            Ok(_) => {}
            Err(StoreError::RecordNotFound(_)) => {
                self.store.delete_pitching_play(id)?;
            }
            Err(err) => return Err(err.into()),
        }
        log::info!("record {id} deleted");
        self.outbox.enqueue(MirrorWrite::Delete(id));
        self.flush_outbox();
        Ok(())
    }

    // === Persistence ===

    /// Capture the session for a later `restore`.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            game: self.game.clone(),
            state: self.state.clone(),
            lineups: self.lineups.clone(),
            pitchers: self.pitchers.clone(),
            pending: self.pending,
            ids: IdCursor {
                seed: self.ids.seed(),
                issued: self.ids.issued(),
            },
        }
    }

    /// Resume from a snapshot. An open review is discarded.
    ///
    /// The snapshot must fit this scorer's config; a refused snapshot
    /// leaves the session untouched.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), ScoreError> {
        snapshot.validate(&self.config)?;
        if let Some(open) = self.review.take() {
            open.session.cancel();
        }
        self.game = snapshot.game;
        self.state = snapshot.state;
        self.lineups = snapshot.lineups;
        self.pitchers = snapshot.pitchers;
        self.pending = snapshot.pending;
        self.ids = IdGenerator::resume(snapshot.ids.seed, snapshot.ids.issued);
        log::info!(
            "session restored at inning {} ({:?}), {} out(s)",
            self.state.inning,
            self.state.half,
            self.state.outs()
        );
        Ok(())
    }

    /// Decode and restore an encoded snapshot.
    pub fn restore_bytes(&mut self, bytes: &[u8]) -> Result<(), ScoreError> {
        let snapshot = SessionSnapshot::decode(bytes)?;
        self.restore(snapshot)
    }

    /// Push queued writes to the mirror. Failures are logged and dropped.
    pub fn flush_outbox(&mut self) -> FlushReport {
        self.outbox.flush(&mut *self.mirror)
    }

    // === Helpers ===

    fn ensure_setup(&self) -> Result<(), ScoreError> {
        match self.state.phase {
            GamePhase::Setup => Ok(()),
            GamePhase::InProgress => Err(ScoreError::AlreadyInProgress),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), ScoreError> {
        match self.state.phase {
            GamePhase::InProgress => Ok(()),
            GamePhase::Setup => Err(ScoreError::NotInProgress),
        }
    }

    /// In progress and no review pending.
    fn ensure_live(&self) -> Result<(), ScoreError> {
        self.ensure_in_progress()?;
        match &self.review {
            Some(open) => Err(ScoreError::ReviewInProgress(open.session.code().to_string())),
            None => Ok(()),
        }
    }

    fn player_name(&self, id: Option<&PlayerId>) -> String {
        id.and_then(|id| self.roster.player(id))
            .map_or_else(|| UNKNOWN_PLAYER.to_string(), |p| p.name.clone())
    }

    fn pitcher_hand(&self, side: Side) -> Option<Hand> {
        self.pitchers[side]
            .as_ref()
            .and_then(|id| self.roster.player(id))
            .map(|p| p.throws)
    }
}

fn log_side_change(change: &SideChange) {
    log::info!(
        "side change: inning {} {:?} -> inning {} {:?}, now recording {}",
        change.from.inning,
        change.from.half,
        change.to.inning,
        change.to.half,
        change.to.side
    );
}
