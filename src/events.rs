//! Notification port: how a game session tells the outside world what happened.

use crate::games::tictactoe::{Move, Player, Position, WinPattern};
use crate::stats::StatsReport;
use std::cell::RefCell;
use std::rc::Rc;

/// Messages emitted by a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A round started with an empty board, X to move.
    RoundStarted {
        /// Display name for X.
        player_x: String,
        /// Display name for O.
        player_o: String,
    },
    /// A mark was placed.
    MovePlayed(Move),
    /// The AI decided its move; it is applied later by the caller.
    AiThinking {
        /// The square the AI will take.
        position: Position,
    },
    /// The round ended with a completed line.
    Win {
        /// The winner.
        player: Player,
        /// The completed line.
        pattern: WinPattern,
    },
    /// The round ended in a draw.
    Draw,
    /// The persisted statistics changed.
    StatsUpdated(StatsReport),
}

/// Receives session events.
///
/// Every method defaults to forwarding into [`GameObserver::on_event`], so an
/// observer can either match on [`GameEvent`] in one place or override the
/// specific callbacks it cares about.
pub trait GameObserver {
    /// Called for every event.
    fn on_event(&mut self, _event: &GameEvent) {}

    /// A round ended with a completed line.
    fn on_win(&mut self, player: Player, pattern: WinPattern) {
        self.on_event(&GameEvent::Win { player, pattern });
    }

    /// A round ended in a draw.
    fn on_draw(&mut self) {
        self.on_event(&GameEvent::Draw);
    }

    /// Statistics were recorded, reset or reloaded.
    fn on_stats_updated(&mut self, report: &StatsReport) {
        self.on_event(&GameEvent::StatsUpdated(report.clone()));
    }
}

/// Dispatches an event to the matching observer callback.
pub(crate) fn notify(observer: &mut dyn GameObserver, event: &GameEvent) {
    match event {
        GameEvent::Win { player, pattern } => observer.on_win(*player, *pattern),
        GameEvent::Draw => observer.on_draw(),
        GameEvent::StatsUpdated(report) => observer.on_stats_updated(report),
        other => observer.on_event(other),
    }
}

/// Observer that keeps every event in a shared buffer.
///
/// Clones share the buffer, so one clone can be handed to the session while
/// another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the recorded events.
    pub fn drain(&self) -> Vec<GameEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::WIN_PATTERNS;

    #[derive(Default)]
    struct WinCounter {
        wins: usize,
        other: usize,
    }

    impl GameObserver for WinCounter {
        fn on_event(&mut self, _event: &GameEvent) {
            self.other += 1;
        }

        fn on_win(&mut self, _player: Player, _pattern: WinPattern) {
            self.wins += 1;
        }
    }

    #[test]
    fn test_notify_routes_to_specific_callbacks() {
        let mut counter = WinCounter::default();
        notify(
            &mut counter,
            &GameEvent::Win {
                player: Player::X,
                pattern: WIN_PATTERNS[0],
            },
        );
        notify(&mut counter, &GameEvent::Draw);
        assert_eq!(counter.wins, 1);
        assert_eq!(counter.other, 1);
    }

    #[test]
    fn test_event_log_clones_share_buffer() {
        let log = EventLog::new();
        let mut handle = log.clone();
        notify(&mut handle, &GameEvent::Draw);
        assert_eq!(log.events(), vec![GameEvent::Draw]);
        assert_eq!(log.drain().len(), 1);
        assert!(log.events().is_empty());
    }
}
