// crates/panel-trading-client/src/refresh.rs

//! Repeating price-refresh timer, polled from the UI loop.

use std::time::{Duration, Instant};

/// Cadence of the live price refresh.
pub const PRICE_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct PriceRefresh {
    interval: Duration,
    last: Option<Instant>,
}

impl PriceRefresh {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True if the timer has never fired or a full interval has passed.
    pub fn due(&self, now: Instant) -> bool {
        match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }
}

impl Default for PriceRefresh {
    fn default() -> Self {
        Self::new(PRICE_REFRESH_INTERVAL)
    }
}
