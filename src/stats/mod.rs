//! Statistics across rounds.

mod aggregator;
mod record;
mod summary;

pub use aggregator::{DEFAULT_STATS_KEY, StatsAggregator};
pub use record::{GameRecord, GameWinner};
pub use summary::{StatsReport, StatsSummary};
