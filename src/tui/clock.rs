//! One-second clock driving the timer.

use std::time::{Duration, Instant};

/// Counts whole periods of wall time between polls.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    #[must_use]
    pub const fn new(period: Duration, now: Instant) -> Self {
        Self { period, last: now }
    }

    /// A ticker with a one-second period.
    #[must_use]
    pub const fn every_second(now: Instant) -> Self {
        Self::new(Duration::from_secs(1), now)
    }

    /// Number of whole periods elapsed since the previous call.
    ///
    /// The remainder carries over to the next call.
    pub fn elapsed_ticks(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now.saturating_duration_since(self.last) >= self.period {
            self.last += self.period;
            ticks += 1;
        }
        ticks
    }

    /// Start a fresh period at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.last = now;
    }
}
