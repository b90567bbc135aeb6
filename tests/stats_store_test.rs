//! Tests for statistics persistence against the key-value stores.

use tempfile::TempDir;
use tictactoe_arena::{
    DEFAULT_STATS_KEY, GameRecord, GameSession, GameWinner, KeyValueStore, MemoryStore,
    RoundConfig, SqliteStore, StatsAggregator,
};

fn temp_db() -> (TempDir, String) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("stats.db").to_string_lossy().into_owned();
    (dir, path)
}

fn sample_records() -> Vec<GameRecord> {
    vec![
        GameRecord::new(GameWinner::X, 7, 12_000),
        GameRecord::new(GameWinner::Draw, 9, 20_000),
        GameRecord::new(GameWinner::O, 6, 9_000),
        GameRecord::new(GameWinner::X, 5, 4_000),
    ]
}

#[test]
fn test_sqlite_store_get_and_overwrite() {
    let mut store = SqliteStore::open(":memory:").expect("Failed to open store");
    assert_eq!(store.db_path(), ":memory:");

    assert_eq!(store.get("missing").expect("Lookup failed"), None);

    store.set("k", "one").expect("Write failed");
    store.set("k", "two").expect("Overwrite failed");
    assert_eq!(store.get("k").expect("Lookup failed"), Some("two".to_string()));

    let entry = store.entry("k").expect("Lookup failed").expect("Row exists");
    assert_eq!(entry.key(), "k");
    assert_eq!(entry.value(), "two");
}

#[test]
fn test_stats_survive_reopen() {
    let (_dir, path) = temp_db();

    {
        let store = SqliteStore::open(&path).expect("Failed to open store");
        let mut stats = StatsAggregator::load(store);
        for record in sample_records() {
            stats.record_game(record).expect("Persist failed");
        }
    }

    let store = SqliteStore::open(&path).expect("Failed to reopen store");
    let stats = StatsAggregator::load(store);
    let report = stats.report();
    assert_eq!(*report.total_games(), 4);
    assert_eq!(*report.player_x_wins(), 2);
    assert_eq!(*report.player_o_wins(), 1);
    assert_eq!(*report.draws(), 1);
    assert_eq!(*report.fastest_win(), Some(5));
    assert_eq!(report.win_rate_label(), "50.0%");
    assert_eq!(report.average_time_label(), "11s");
}

#[test]
fn test_blob_uses_expected_key_and_fields() {
    let mut stats = StatsAggregator::load(MemoryStore::new());
    stats
        .record_game(GameRecord::new(GameWinner::X, 5, 3_000))
        .expect("Persist failed");

    let blob = stats
        .store()
        .peek(DEFAULT_STATS_KEY)
        .expect("Blob written under the default key");
    let json: serde_json::Value = serde_json::from_str(blob).expect("Blob is JSON");
    assert_eq!(json["totalGames"], 1);
    assert_eq!(json["playerXWins"], 1);
    assert_eq!(json["playerOWins"], 0);
    assert_eq!(json["draws"], 0);
    assert_eq!(json["fastestWin"], 5);
    assert_eq!(json["gameTimes"], serde_json::json!([3000]));
}

#[test]
fn test_aggregate_ignores_record_order() {
    let mut forward = StatsAggregator::load(MemoryStore::new());
    let mut backward = StatsAggregator::load(MemoryStore::new());

    for record in sample_records() {
        forward.record_game(record).expect("Persist failed");
    }
    for record in sample_records().into_iter().rev() {
        backward.record_game(record).expect("Persist failed");
    }

    assert_eq!(forward.report(), backward.report());
}

#[test]
fn test_corrupt_blob_loads_as_zero() {
    let (_dir, path) = temp_db();
    let mut store = SqliteStore::open(&path).expect("Failed to open store");
    store
        .set(DEFAULT_STATS_KEY, "{not json")
        .expect("Write failed");

    let stats = StatsAggregator::load(store);
    assert_eq!(*stats.report().total_games(), 0);
    assert_eq!(stats.report().fastest_win_label(), "--");
}

#[test]
fn test_partial_blob_keeps_known_fields() {
    let store = MemoryStore::with_entry(
        DEFAULT_STATS_KEY,
        r#"{"totalGames": 3, "draws": 3, "theme": "dark"}"#,
    );
    let stats = StatsAggregator::load(store);
    let report = stats.report();
    assert_eq!(*report.total_games(), 3);
    assert_eq!(*report.draws(), 3);
    assert_eq!(*report.player_x_wins(), 0);
    assert_eq!(report.average_time_label(), "--");
}

#[test]
fn test_overflowing_blob_still_loads_and_records() {
    let store = MemoryStore::with_entry(
        DEFAULT_STATS_KEY,
        r#"{"totalGames": 4294967295, "gameTimes": [18446744073709551615, 1]}"#,
    );
    let mut stats = StatsAggregator::load(store);
    assert!(stats.report().average_duration_millis().is_some());

    let report = stats
        .record_game(GameRecord::new(GameWinner::Draw, 9, 1_000))
        .expect("Persist failed");
    assert_eq!(*report.total_games(), u32::MAX);
    assert_eq!(*report.draws(), 1);
}

#[test]
fn test_reset_persists_zeroes() {
    let (_dir, path) = temp_db();
    {
        let store = SqliteStore::open(&path).expect("Failed to open store");
        let mut stats = StatsAggregator::load(store);
        for record in sample_records() {
            stats.record_game(record).expect("Persist failed");
        }
        let report = stats.reset().expect("Reset failed");
        assert_eq!(*report.total_games(), 0);
        assert_eq!(report.win_rate_label(), "0%");
        assert_eq!(report.fastest_win_label(), "--");
        assert_eq!(report.average_time_label(), "--");
    }

    let store = SqliteStore::open(&path).expect("Failed to reopen store");
    let stats = StatsAggregator::load(store);
    assert_eq!(*stats.report().total_games(), 0);
    assert!(stats.summary().game_times().is_empty());
}

#[test]
fn test_custom_key_is_isolated() {
    let mut store = SqliteStore::open(":memory:").expect("Failed to open store");
    store
        .set(DEFAULT_STATS_KEY, r#"{"totalGames": 9}"#)
        .expect("Write failed");

    let stats = StatsAggregator::load_with_key(store, "otherStats");
    assert_eq!(stats.key(), "otherStats");
    assert_eq!(*stats.report().total_games(), 0);
}

#[test]
fn test_session_records_rounds_to_sqlite() {
    let (_dir, path) = temp_db();
    {
        let store = SqliteStore::open(&path).expect("Failed to open store");
        let mut session = GameSession::new(StatsAggregator::load(store));
        session.start_round(RoundConfig::default());
        for index in [0, 3, 1, 4, 2] {
            session.submit_move(index).expect("Valid move");
        }
        session.new_round();
        for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            session.submit_move(index).expect("Valid move");
        }
    }

    let store = SqliteStore::open(&path).expect("Failed to reopen store");
    let report = StatsAggregator::load(store).report();
    assert_eq!(*report.total_games(), 2);
    assert_eq!(*report.player_x_wins(), 1);
    assert_eq!(*report.draws(), 1);
}

#[test]
fn test_session_reset_stats() {
    let mut session = GameSession::new(StatsAggregator::load(MemoryStore::new()));
    session.start_round(RoundConfig::default());
    for index in [0, 3, 1, 4, 2] {
        session.submit_move(index).expect("Valid move");
    }
    assert_eq!(*session.stats().report().total_games(), 1);

    let report = session.reset_stats();
    assert_eq!(*report.total_games(), 0);
    assert_eq!(
        session.stats().store().peek(DEFAULT_STATS_KEY),
        Some(r#"{"totalGames":0,"playerXWins":0,"playerOWins":0,"draws":0,"fastestWin":null,"gameTimes":[]}"#)
    );
}
