//! Difficulty tiers and the strategy behind each one.

use super::{MixedStrategy, MoveStrategy, OptimalStrategy, RandomStrategy};
use serde::{Deserialize, Serialize};

/// AI difficulty, selected per round.
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
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform random moves.
    Easy,
    /// Optimal 70% of the time, random otherwise.
    #[default]
    Medium,
    /// Greedy one-ply: win, block, then center/corners/edges.
    Hard,
}

impl Difficulty {
    /// Capitalised name for player-facing labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Builds the move strategy for this tier.
    pub fn strategy(self) -> Box<dyn MoveStrategy> {
        match self {
            Self::Easy => Box::new(RandomStrategy),
            Self::Medium => Box::new(MixedStrategy::default()),
            Self::Hard => Box::new(OptimalStrategy),
        }
    }
}
