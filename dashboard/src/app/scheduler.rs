//! Fixed-cadence refresh timer, polled once per frame.

use std::time::{Duration, Instant};

/// Shortest cadence the scheduler accepts.
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Decides when the next listing refresh is due.
///
/// The first poll always fires. After that the deadline advances by whole
/// intervals; if several intervals were missed only one tick fires.
/// Intervals shorter than [`MIN_INTERVAL`] are raised to it.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RefreshScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                true
            }
            Some(due) if now >= due => {
                let mut next = due + self.interval;
                while next <= now {
                    next += self.interval;
                }
                self.next_due = Some(next);
                true
            }
            Some(_) => false,
        }
    }

    /// Time left until the next tick; zero before the first poll.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}
