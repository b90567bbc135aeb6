//! Time source for round durations.

use std::cell::Cell;
use std::rc::Rc;

/// Supplies wall-clock time in milliseconds since the Unix epoch.
pub trait Clock: std::fmt::Debug {
    /// Current time in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// The system clock, via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    /// Creates a clock stopped at `start` milliseconds.
    pub fn starting_at(start: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}
