//! Round and application configuration.

use crate::ai::Difficulty;
use crate::games::tictactoe::Player;
use crate::stats::DEFAULT_STATS_KEY;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Who sits in the O seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp")]
    Pvp,
    /// A human plays X against the AI as O.
    #[serde(rename = "vsAI")]
    #[strum(to_string = "vsAI", serialize = "ai")]
    VsAi,
}

/// Options for starting a round, as sent by a front-end.
///
/// Serialized with the keys `mode`, `difficulty`, `playerXName`, `playerOName`;
/// all are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoundConfig {
    /// Human vs human, or human vs AI.
    pub mode: GameMode,
    /// AI tier (ignored in PvP).
    pub difficulty: Difficulty,
    /// Name for X; blank falls back to `"Player X"`.
    pub player_x_name: String,
    /// Name for O; blank falls back to `"Player O"`. Replaced by the AI's
    /// name in vsAI mode.
    pub player_o_name: String,
}

impl RoundConfig {
    /// Two humans.
    #[instrument(skip(player_x_name, player_o_name))]
    pub fn pvp(player_x_name: impl Into<String>, player_o_name: impl Into<String>) -> Self {
        Self {
            mode: GameMode::Pvp,
            difficulty: Difficulty::default(),
            player_x_name: player_x_name.into(),
            player_o_name: player_o_name.into(),
        }
    }

    /// A human as X against the AI at the given tier.
    #[instrument(skip(player_x_name))]
    pub fn vs_ai(player_x_name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::VsAi,
            difficulty,
            player_x_name: player_x_name.into(),
            player_o_name: String::new(),
        }
    }

    /// The seat the AI plays, if any.
    pub fn ai_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::Pvp => None,
            GameMode::VsAi => Some(Player::O),
        }
    }

    /// Display name for a seat after defaults and AI naming are applied.
    pub fn display_name(&self, player: Player) -> String {
        if self.ai_player() == Some(player) {
            return format!("AI ({})", self.difficulty.label());
        }
        let (name, fallback) = match player {
            Player::X => (&self.player_x_name, "Player X"),
            Player::O => (&self.player_o_name, "Player O"),
        };
        let name = name.trim();
        if name.is_empty() {
            fallback.to_string()
        } else {
            name.to_string()
        }
    }
}

/// Application settings, optionally loaded from a TOML file.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database holding the statistics.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// Key the statistics blob is stored under.
    #[serde(default = "default_stats_key")]
    stats_key: String,

    /// Shortest pause before the AI's move is applied.
    #[serde(default = "default_ai_delay_min_ms")]
    ai_delay_min_ms: u64,

    /// Longest pause before the AI's move is applied.
    #[serde(default = "default_ai_delay_max_ms")]
    ai_delay_max_ms: u64,

    /// Round settings used when the command line does not override them.
    #[serde(default)]
    round: RoundConfig,
}

fn default_db_path() -> String {
    "tictactoe_arena.db".to_string()
}

fn default_stats_key() -> String {
    DEFAULT_STATS_KEY.to_string()
}

fn default_ai_delay_min_ms() -> u64 {
    300
}

fn default_ai_delay_max_ms() -> u64 {
    800
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            stats_key: default_stats_key(),
            ai_delay_min_ms: default_ai_delay_min_ms(),
            ai_delay_max_ms: default_ai_delay_max_ms(),
            round: RoundConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(db_path = %config.db_path, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the database path.
    pub fn with_db_path(mut self, db_path: impl Into<String>) -> Self {
        self.db_path = db_path.into();
        self
    }

    /// Picks a pause for the AI's move uniformly within the configured window.
    pub fn ai_delay(&self, rng: &mut dyn RngCore) -> Duration {
        let low = self.ai_delay_min_ms.min(self.ai_delay_max_ms);
        let high = self.ai_delay_min_ms.max(self.ai_delay_max_ms);
        Duration::from_millis(rng.random_range(low..=high))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
