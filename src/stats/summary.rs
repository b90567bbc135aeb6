//! Aggregate statistics and the figures derived from them.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::stats::{GameRecord, GameWinner};

/// The persisted aggregate over every recorded round.
///
/// Serialized as `{totalGames, playerXWins, playerOWins, draws, fastestWin,
/// gameTimes}`. Missing fields deserialize to zero/empty and unknown fields
/// are ignored, so older or partial blobs still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSummary {
    total_games: u32,
    player_x_wins: u32,
    player_o_wins: u32,
    draws: u32,
    fastest_win: Option<u32>,
    game_times: Vec<u64>,
}

impl StatsSummary {
    /// Folds one round into the aggregate.
    #[instrument(skip(self))]
    pub fn apply(&mut self, record: &GameRecord) {
        // Counters come from a stored blob and may already sit at the limit.
        self.total_games = self.total_games.saturating_add(1);
        let tally = match record.winner() {
            GameWinner::X => &mut self.player_x_wins,
            GameWinner::O => &mut self.player_o_wins,
            GameWinner::Draw => &mut self.draws,
        };
        *tally = tally.saturating_add(1);
        if *record.winner() != GameWinner::Draw {
            let moves = *record.move_count();
            self.fastest_win = Some(self.fastest_win.map_or(moves, |best| best.min(moves)));
        }
        self.game_times.push(*record.duration_millis());
    }

    /// Computes the derived figures.
    #[instrument(skip(self))]
    pub fn report(&self) -> StatsReport {
        let win_rate_x = if self.total_games == 0 {
            0.0
        } else {
            (self.player_x_wins as f64 / self.total_games as f64) * 100.0
        };

        let average_duration_millis = if self.game_times.is_empty() {
            None
        } else {
            let total = self
                .game_times
                .iter()
                .fold(0u128, |acc, t| acc + u128::from(*t));
            Some(total as f64 / self.game_times.len() as f64)
        };

        StatsReport {
            total_games: self.total_games,
            player_x_wins: self.player_x_wins,
            player_o_wins: self.player_o_wins,
            draws: self.draws,
            win_rate_x,
            fastest_win: self.fastest_win,
            average_duration_millis,
        }
    }
}

/// Player-facing statistics.
///
/// `fastest_win` is `None` until someone wins; `average_duration_millis` is
/// `None` until a round has been recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct StatsReport {
    total_games: u32,
    player_x_wins: u32,
    player_o_wins: u32,
    draws: u32,
    win_rate_x: f64,
    fastest_win: Option<u32>,
    average_duration_millis: Option<f64>,
}

impl StatsReport {
    /// Win rate for X with one decimal, e.g. `"66.7%"`; `"0%"` before any game.
    pub fn win_rate_label(&self) -> String {
        if self.total_games == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", self.win_rate_x)
        }
    }

    /// `"N moves"`, or `"--"` when nobody has won yet.
    pub fn fastest_win_label(&self) -> String {
        match self.fastest_win {
            Some(moves) => format!("{} moves", moves),
            None => "--".to_string(),
        }
    }

    /// Average round length in whole seconds, e.g. `"12s"`, or `"--"`.
    pub fn average_time_label(&self) -> String {
        match self.average_duration_millis {
            Some(millis) => format!("{}s", (millis / 1000.0).round() as u64),
            None => "--".to_string(),
        }
    }
}

impl std::fmt::Display for StatsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} / O {} / Draws {} | Games: {} | X win rate: {} | Fastest win: {} | Avg time: {}",
            self.player_x_wins,
            self.player_o_wins,
            self.draws,
            self.total_games,
            self.win_rate_label(),
            self.fastest_win_label(),
            self.average_time_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win_x(moves: u32, millis: u64) -> GameRecord {
        GameRecord::new(GameWinner::X, moves, millis)
    }

    #[test]
    fn test_empty_report_uses_sentinels() {
        let report = StatsSummary::default().report();
        assert_eq!(*report.total_games(), 0);
        assert_eq!(*report.win_rate_x(), 0.0);
        assert_eq!(*report.fastest_win(), None);
        assert_eq!(*report.average_duration_millis(), None);
        assert_eq!(report.win_rate_label(), "0%");
        assert_eq!(report.fastest_win_label(), "--");
        assert_eq!(report.average_time_label(), "--");
    }

    #[test]
    fn test_draws_do_not_touch_fastest_win() {
        let mut summary = StatsSummary::default();
        summary.apply(&GameRecord::new(GameWinner::Draw, 9, 4000));
        assert_eq!(*summary.fastest_win(), None);
        assert_eq!(*summary.draws(), 1);
        assert_eq!(summary.game_times(), &vec![4000]);
    }

    #[test]
    fn test_fastest_win_keeps_minimum() {
        let mut summary = StatsSummary::default();
        summary.apply(&win_x(7, 1000));
        summary.apply(&GameRecord::new(GameWinner::O, 6, 1000));
        summary.apply(&win_x(9, 1000));
        assert_eq!(*summary.fastest_win(), Some(6));
    }

    #[test]
    fn test_report_figures() {
        let mut summary = StatsSummary::default();
        summary.apply(&win_x(5, 2000));
        summary.apply(&win_x(7, 4000));
        summary.apply(&GameRecord::new(GameWinner::Draw, 9, 12_000));

        let report = summary.report();
        assert_eq!(report.win_rate_label(), "66.7%");
        assert_eq!(*report.average_duration_millis(), Some(6000.0));
        assert_eq!(report.average_time_label(), "6s");
        assert_eq!(report.fastest_win_label(), "5 moves");
    }

    #[test]
    fn test_json_shape() {
        let mut summary = StatsSummary::default();
        summary.apply(&win_x(5, 2000));
        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalGames": 1,
                "playerXWins": 1,
                "playerOWins": 0,
                "draws": 0,
                "fastestWin": 5,
                "gameTimes": [2000],
            })
        );
    }

    #[test]
    fn test_partial_blob_merges_over_defaults() {
        let summary: StatsSummary =
            serde_json::from_str(r#"{"totalGames": 3, "draws": 3, "theme": "dark"}"#).unwrap();
        assert_eq!(*summary.total_games(), 3);
        assert_eq!(*summary.draws(), 3);
        assert_eq!(*summary.player_x_wins(), 0);
        assert_eq!(*summary.fastest_win(), None);
        assert!(summary.game_times().is_empty());
    }

    #[test]
    fn test_saturated_counters_do_not_overflow() {
        let mut summary: StatsSummary =
            serde_json::from_str(r#"{"totalGames": 4294967295, "playerXWins": 4294967295}"#)
                .unwrap();
        summary.apply(&win_x(5, 1000));
        assert_eq!(*summary.total_games(), u32::MAX);
        assert_eq!(*summary.player_x_wins(), u32::MAX);
        assert_eq!(*summary.fastest_win(), Some(5));
    }

    #[test]
    fn test_huge_game_times_average_without_overflow() {
        let summary: StatsSummary =
            serde_json::from_str(r#"{"totalGames": 2, "gameTimes": [18446744073709551615, 1]}"#)
                .unwrap();
        let average = summary.report().average_duration_millis().unwrap();
        assert!(average > 9.0e18, "average = {average}");
    }
}
