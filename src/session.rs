//! Game session controller: turn order, AI turns, outcomes and statistics.

use crate::ai::MoveStrategy;
use crate::clock::{Clock, SystemClock};
use crate::config::RoundConfig;
use crate::db::KeyValueStore;
use crate::events::{GameEvent, GameObserver, notify};
use crate::games::tictactoe::{Board, Move, MoveError, Outcome, Player, Position, SessionState, evaluate};
use crate::stats::{GameRecord, GameWinner, StatsAggregator, StatsReport};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// An AI move that has been decided but not yet applied.
///
/// Hand it back to [`GameSession::apply_ai_move`] after whatever pause the
/// front-end wants. A token from a round that has since been restarted is
/// rejected with [`MoveError::StaleAiMove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAiMove {
    round: u64,
    action: Move,
}

impl PendingAiMove {
    /// The square the AI chose.
    pub fn position(&self) -> Position {
        self.action.position
    }

    /// The AI's mark.
    pub fn player(&self) -> Player {
        self.action.player
    }

    /// Resolves after `delay`, yielding the token back for application.
    pub async fn after(self, delay: Duration) -> Self {
        tokio::time::sleep(delay).await;
        self
    }
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The round goes on; `next` is to move.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The AI is to move and has decided; human input is locked until the
    /// token is applied or the round is restarted.
    AiPending(PendingAiMove),
    /// The move ended the round.
    Finished(Outcome),
}

/// A single-owner tic-tac-toe session.
///
/// Holds the live board for the current round and the statistics for the
/// life of the process. All mutation happens through `&mut self`; the only
/// suspension point is the gap between an AI decision and its application.
pub struct GameSession<S> {
    board: Board,
    state: SessionState,
    config: RoundConfig,
    to_move: Player,
    move_count: u32,
    started_at: i64,
    round: u64,
    pending_ai: Option<PendingAiMove>,
    strategy: Box<dyn MoveStrategy>,
    rng: Box<dyn RngCore>,
    clock: Box<dyn Clock>,
    stats: StatsAggregator<S>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<S> std::fmt::Debug for GameSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("to_move", &self.to_move)
            .field("move_count", &self.move_count)
            .field("round", &self.round)
            .field("pending_ai", &self.pending_ai)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> GameSession<S> {
    /// Creates a session awaiting its first round.
    #[instrument(skip(stats))]
    pub fn new(stats: StatsAggregator<S>) -> Self {
        info!("Creating game session");
        let config = RoundConfig::default();
        Self {
            board: Board::new(),
            state: SessionState::AwaitingStart,
            strategy: config.difficulty.strategy(),
            config,
            to_move: Player::X,
            move_count: 0,
            started_at: 0,
            round: 0,
            pending_ai: None,
            rng: Box::new(Pcg64::from_os_rng()),
            clock: Box::new(SystemClock),
            stats,
            observers: Vec::new(),
        }
    }

    /// Replaces the random source used by the AI.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replaces the time source used for round durations.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Registers an observer for session events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Starts a fresh round with new settings.
    ///
    /// Valid from any state. A pending AI move from the previous round is
    /// invalidated.
    #[instrument(skip(self, config), fields(mode = %config.mode, difficulty = %config.difficulty))]
    pub fn start_round(&mut self, config: RoundConfig) {
        self.strategy = config.difficulty.strategy();
        self.config = config;
        self.new_round();
    }

    /// Starts a fresh round with the current settings.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        if let Some(pending) = self.pending_ai.take() {
            debug!(position = ?pending.position(), "Dropping pending AI move");
        }
        self.board.reset();
        self.move_count = 0;
        self.to_move = Player::X;
        self.round += 1;
        self.started_at = self.clock.now_millis();
        self.state = SessionState::Active;

        info!(
            round = self.round,
            player_x = %self.config.display_name(Player::X),
            player_o = %self.config.display_name(Player::O),
            "Round started"
        );
        self.emit(GameEvent::RoundStarted {
            player_x: self.config.display_name(Player::X),
            player_o: self.config.display_name(Player::O),
        });
    }

    /// Plays the current mover's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and changes nothing if the index is out of
    /// range, the cell is taken, no round is active, or the AI's move is
    /// pending.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.pending_ai.is_some() {
            warn!(index, "Move submitted while the AI is to move");
            return Err(MoveError::AiTurnPending);
        }
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move out of range");
            MoveError::OutOfRange(index)
        })?;
        self.play(pos)
    }

    /// Applies a previously decided AI move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StaleAiMove`] if the round the move was decided
    /// for has been replaced; the token is dropped and nothing changes.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn apply_ai_move(&mut self, pending: PendingAiMove) -> Result<MoveOutcome, MoveError> {
        if self.pending_ai != Some(pending) {
            debug!(
                token_round = pending.round,
                position = ?pending.position(),
                "Dropping stale AI move"
            );
            return Err(MoveError::StaleAiMove);
        }
        self.pending_ai = None;
        self.play(pending.position())
    }

    /// Waits `delay`, then applies the AI move.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::apply_ai_move`].
    pub async fn play_ai_turn(
        &mut self,
        pending: PendingAiMove,
        delay: Duration,
    ) -> Result<MoveOutcome, MoveError> {
        let pending = pending.after(delay).await;
        self.apply_ai_move(pending)
    }

    fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if !self.state.is_active() {
            warn!(?pos, state = ?self.state, "Move submitted with no active round");
            return Err(MoveError::NotActive);
        }

        let player = self.to_move;
        self.board.place(pos, player).inspect_err(|e| {
            warn!(?pos, error = %e, "Rejected move");
        })?;
        self.move_count += 1;
        debug!(?pos, ?player, move_count = self.move_count, "Move played");
        self.emit(GameEvent::MovePlayed(Move::new(player, pos)));

        if let Some(outcome) = evaluate(&self.board) {
            self.finish(outcome);
            return Ok(MoveOutcome::Finished(outcome));
        }

        self.to_move = player.opponent();
        if self.config.ai_player() == Some(self.to_move) {
            return Ok(self.decide_ai_move());
        }
        Ok(MoveOutcome::Continue { next: self.to_move })
    }

    fn decide_ai_move(&mut self) -> MoveOutcome {
        let ai = self.to_move;
        match self.strategy.choose_move(&self.board, ai, self.rng.as_mut()) {
            Some(position) => {
                let pending = PendingAiMove {
                    round: self.round,
                    action: Move::new(ai, position),
                };
                debug!(strategy = self.strategy.name(), ?position, "AI decided");
                self.pending_ai = Some(pending);
                self.emit(GameEvent::AiThinking { position });
                MoveOutcome::AiPending(pending)
            }
            None => {
                // Unreachable while the round is active: a full board is terminal.
                warn!("AI found no move on a live board");
                MoveOutcome::Continue { next: ai }
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        let duration_millis = (self.clock.now_millis() - self.started_at).max(0) as u64;
        self.state = SessionState::Terminal(outcome);
        info!(
            round = self.round,
            %outcome,
            moves = self.move_count,
            duration_millis,
            "Round finished"
        );

        match outcome {
            Outcome::Win { player, pattern } => self.emit(GameEvent::Win { player, pattern }),
            Outcome::Draw => self.emit(GameEvent::Draw),
        }

        let record = GameRecord::new(GameWinner::from(&outcome), self.move_count, duration_millis);
        let report = match self.stats.record_game(record) {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "Statistics could not be persisted");
                self.stats.report()
            }
        };
        self.emit(GameEvent::StatsUpdated(report));
    }

    /// Zeroes the statistics and persists immediately.
    ///
    /// Persistence failures are logged; the in-memory figures are zeroed
    /// regardless.
    #[instrument(skip(self))]
    pub fn reset_stats(&mut self) -> StatsReport {
        let report = self.stats.reset().unwrap_or_else(|e| {
            warn!(error = %e, "Reset statistics could not be persisted");
            self.stats.report()
        });
        self.emit(GameEvent::StatsUpdated(report.clone()));
        report
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            notify(observer.as_mut(), &event);
        }
    }

    /// Copy of the current board.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Marks placed this round.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The AI move awaiting application, if any.
    pub fn pending_ai_move(&self) -> Option<PendingAiMove> {
        self.pending_ai
    }

    /// Settings of the current round.
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Statistics owned by this session.
    pub fn stats(&self) -> &StatsAggregator<S> {
        &self.stats
    }

    /// One-line status for display.
    pub fn status_line(&self) -> String {
        match &self.state {
            SessionState::AwaitingStart => "Press start".to_string(),
            SessionState::Active => {
                format!("{}'s Turn", self.config.display_name(self.to_move))
            }
            SessionState::Terminal(Outcome::Win { player, .. }) => {
                format!("{} Wins!", self.config.display_name(*player))
            }
            SessionState::Terminal(Outcome::Draw) => "Draw!".to_string(),
        }
    }
}
