//! Durable statistics: the summary plus the store it is persisted in.

use tracing::{debug, info, instrument, warn};

use crate::db::{KeyValueStore, StoreError};
use crate::stats::{GameRecord, StatsReport, StatsSummary};

/// Storage key used when none is configured.
pub const DEFAULT_STATS_KEY: &str = "ticTacToeStats";

/// Owns the [`StatsSummary`] for the life of the process and keeps it
/// persisted after every mutation.
#[derive(Debug)]
pub struct StatsAggregator<S> {
    store: S,
    key: String,
    summary: StatsSummary,
}

impl<S: KeyValueStore> StatsAggregator<S> {
    /// Loads the summary stored under [`DEFAULT_STATS_KEY`].
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, DEFAULT_STATS_KEY)
    }

    /// Loads the summary stored under `key`.
    ///
    /// Never fails: an unreadable store or a malformed blob falls back to
    /// zeroed statistics.
    #[instrument(skip(store, key), fields(key = %key.as_ref()))]
    pub fn load_with_key(store: S, key: impl AsRef<str>) -> Self {
        let mut aggregator = Self {
            store,
            key: key.as_ref().to_string(),
            summary: StatsSummary::default(),
        };
        aggregator.reload();
        aggregator
    }

    /// Re-reads the persisted summary, replacing the in-memory copy.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn reload(&mut self) -> StatsReport {
        self.summary = match self.store.get(&self.key) {
            Ok(Some(blob)) => match serde_json::from_str::<StatsSummary>(&blob) {
                Ok(summary) => {
                    info!(total_games = summary.total_games(), "Statistics loaded");
                    summary
                }
                Err(e) => {
                    warn!(error = %e, "Stored statistics are corrupt, starting from zero");
                    StatsSummary::default()
                }
            },
            Ok(None) => {
                debug!("No stored statistics");
                StatsSummary::default()
            }
            Err(e) => {
                warn!(error = %e, "Could not read statistics, starting from zero");
                StatsSummary::default()
            }
        };
        self.summary.report()
    }

    /// Folds a finished round into the summary and persists it.
    ///
    /// The in-memory summary is updated even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the summary could not be written.
    #[instrument(skip(self))]
    pub fn record_game(&mut self, record: GameRecord) -> Result<StatsReport, StoreError> {
        self.summary.apply(&record);
        info!(
            winner = ?record.winner(),
            moves = record.move_count(),
            duration_millis = record.duration_millis(),
            total_games = self.summary.total_games(),
            "Game recorded"
        );
        self.persist()?;
        Ok(self.summary.report())
    }

    /// Writes the summary to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.summary)?;
        self.store.set(&self.key, &blob)?;
        debug!(bytes = blob.len(), "Statistics persisted");
        Ok(())
    }

    /// Zeroes every figure and persists immediately.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the zeroed summary could not be written.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<StatsReport, StoreError> {
        info!("Resetting statistics");
        self.summary = StatsSummary::default();
        self.persist()?;
        Ok(self.summary.report())
    }

    /// Derived figures for display.
    pub fn report(&self) -> StatsReport {
        self.summary.report()
    }

    /// The raw aggregate.
    pub fn summary(&self) -> &StatsSummary {
        &self.summary
    }

    /// Key the summary is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::stats::GameWinner;

    #[derive(Debug, Default)]
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&mut self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::new("disk on fire"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::new("disk on fire"))
        }
    }

    #[test]
    fn test_record_persists_immediately() {
        let mut stats = StatsAggregator::load(MemoryStore::new());
        stats
            .record_game(GameRecord::new(GameWinner::O, 6, 900))
            .unwrap();

        let blob = stats.store().peek(DEFAULT_STATS_KEY).unwrap();
        let stored: StatsSummary = serde_json::from_str(blob).unwrap();
        assert_eq!(&stored, stats.summary());
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_zero() {
        let store = MemoryStore::with_entry(DEFAULT_STATS_KEY, "{not json");
        let stats = StatsAggregator::load(store);
        assert_eq!(stats.summary(), &StatsSummary::default());
    }

    #[test]
    fn test_wrong_field_type_falls_back_to_zero() {
        let store = MemoryStore::with_entry(DEFAULT_STATS_KEY, r#"{"totalGames": "many"}"#);
        let stats = StatsAggregator::load(store);
        assert_eq!(*stats.report().total_games(), 0);
    }

    #[test]
    fn test_unreadable_store_falls_back_and_keeps_counting() {
        let mut stats = StatsAggregator::load(FailingStore);
        assert_eq!(stats.summary(), &StatsSummary::default());

        let result = stats.record_game(GameRecord::new(GameWinner::X, 5, 100));
        assert!(result.is_err());
        assert_eq!(*stats.report().total_games(), 1);
    }

    #[test]
    fn test_custom_key() {
        let mut stats = StatsAggregator::load_with_key(MemoryStore::new(), "arena");
        stats.reset().unwrap();
        assert!(stats.store().peek("arena").is_some());
        assert!(stats.store().peek(DEFAULT_STATS_KEY).is_none());
    }
}
