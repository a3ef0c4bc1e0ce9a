//! Move clocks and the time-left contract agents search against.
//!
//! Agents never own a deadline. They receive a [`TimeSource`] and sample it
//! whenever they need to know how much of the current turn is left.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A live read of the time remaining in the current turn.
///
/// Implementations must be monotonically non-increasing over a turn.
pub trait TimeSource {
    fn time_left(&self) -> Duration;
}

impl<F> TimeSource for F
where
    F: Fn() -> Duration,
{
    fn time_left(&self) -> Duration {
        self()
    }
}

/// Per-move limits the match runner hands to agents.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Clock agents read their remaining time from
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Limits without a clock.
    pub fn unlimited() -> Self {
        Self {
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Limits with a fixed time per move.
    pub fn move_time(move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Start the clock. Call this right before handing the turn to an agent.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Thread-safe move clock.
///
/// Cheap to clone; clones share the stop flag, so another thread can end a
/// turn early with [`TimeControl::stop`].
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    /// Time limit for this turn (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
        }
    }

    /// Start the clock and clear any previous stop request.
    pub fn start(&self) {
        if let Ok(mut start) = self.start_time.write() {
            *start = Some(Instant::now());
        }
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force the turn to end immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Elapsed time since `start`, zero if the clock never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .ok()
            .and_then(|s| *s)
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining time, `None` for an unlimited clock. A stopped clock has none left.
    pub fn remaining(&self) -> Option<Duration> {
        if self.is_stopped() {
            return Some(Duration::ZERO);
        }
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    /// True once the limit has passed or `stop` was called.
    pub fn is_expired(&self) -> bool {
        self.remaining() == Some(Duration::ZERO)
    }
}

impl TimeSource for TimeControl {
    fn time_left(&self) -> Duration {
        self.remaining().unwrap_or(Duration::MAX)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
