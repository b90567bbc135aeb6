//! Tic-tac-toe arena - a single-session tic-tac-toe engine
//!
//! Two humans or a human against a heuristic AI, with aggregate statistics
//! that survive restarts.
//!
//! # Architecture
//!
//! - **Games**: board model, win/draw evaluation
//! - **AI**: random, mixed and greedy one-ply move strategies
//! - **Session**: turn order, AI turns, outcome events
//! - **Stats**: aggregate statistics persisted to a key-value store
//!
//! Front-ends drive a [`GameSession`] with commands and observe it through
//! [`GameObserver`]; rendering, input and sound stay outside the crate.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_arena::{GameSession, MemoryStore, MoveOutcome, RoundConfig, StatsAggregator};
//!
//! let stats = StatsAggregator::load(MemoryStore::new());
//! let mut session = GameSession::new(stats);
//! session.start_round(RoundConfig::pvp("Ada", "Grace"));
//!
//! for index in [0, 3, 1, 4, 2] {
//!     if let Ok(MoveOutcome::Finished(outcome)) = session.submit_move(index) {
//!         println!("{outcome}");
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod clock;
mod config;
mod db;
mod events;
mod games;
mod session;
mod stats;

// Crate-level exports - AI
pub use ai::{
    DEFAULT_OPTIMAL_PROBABILITY, Difficulty, MixedStrategy, MoveStrategy, OptimalStrategy,
    PRIORITY_ORDER, RandomStrategy,
};

// Crate-level exports - Time
pub use clock::{Clock, ManualClock, SystemClock};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, GameMode, RoundConfig};

// Crate-level exports - Persistence
pub use db::{KeyValueStore, KvEntry, MemoryStore, NewKvEntry, SqliteStore, StoreError};

// Crate-level exports - Events
pub use events::{EventLog, GameEvent, GameObserver};

// Crate-level exports - Session management
pub use session::{GameSession, MoveOutcome, PendingAiMove};

// Crate-level exports - Statistics
pub use stats::{
    DEFAULT_STATS_KEY, GameRecord, GameWinner, StatsAggregator, StatsReport, StatsSummary,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Move, MoveError, Outcome, Player, Position, SessionState, Square, WIN_PATTERNS,
    WinPattern, evaluate, rules,
};
