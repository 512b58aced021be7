//! Tick watchdog state.

use std::time::{Duration, Instant};

use crate::config::TickWatchdogConfig;

/// Result of a staleness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogStatus {
    /// Never fed since creation or the last reset
    Idle,
    /// Fed within the timeout
    Fresh,
    /// Not fed for longer than the timeout
    Stale {
        /// Time since the last feed
        elapsed: Duration,
    },
}

impl WatchdogStatus {
    /// Whether this status is [`WatchdogStatus::Stale`].
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, WatchdogStatus::Stale { .. })
    }
}

/// Tracks the time of the last tick.
#[derive(Debug, Clone)]
pub struct TickWatchdog {
    config: TickWatchdogConfig,
    last_feed: Option<Instant>,
}

impl TickWatchdog {
    /// Create a watchdog from a validated configuration.
    #[must_use]
    pub fn new(config: TickWatchdogConfig) -> Self {
        Self {
            config,
            last_feed: None,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &TickWatchdogConfig {
        &self.config
    }

    /// Record a tick at `now`.
    pub fn feed(&mut self, now: Instant) {
        self.last_feed = Some(now);
    }

    /// Time of the last feed.
    #[must_use]
    pub fn last_feed(&self) -> Option<Instant> {
        self.last_feed
    }

    /// Time since the last feed, or `None` if never fed.
    ///
    /// A `now` earlier than the last feed counts as zero elapsed.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.last_feed
            .map(|last| now.saturating_duration_since(last))
    }

    /// Check staleness at `now`.
    #[must_use]
    pub fn status(&self, now: Instant) -> WatchdogStatus {
        match self.elapsed(now) {
            None => WatchdogStatus::Idle,
            Some(elapsed) if elapsed > self.config.timeout() => WatchdogStatus::Stale { elapsed },
            Some(_) => WatchdogStatus::Fresh,
        }
    }

    /// Whether more than the timeout has passed since the last feed.
    #[must_use]
    pub fn is_stale(&self, now: Instant) -> bool {
        self.status(now).is_stale()
    }

    /// Forget the last feed.
    pub fn reset(&mut self) {
        self.last_feed = None;
    }
}

impl Default for TickWatchdog {
    fn default() -> Self {
        Self::new(TickWatchdogConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_fed() {
        let watchdog = TickWatchdog::default();
        let now = Instant::now();
        assert_eq!(watchdog.status(now), WatchdogStatus::Idle);
        assert!(!watchdog.is_stale(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_timeout_boundary_is_fresh() {
        let mut watchdog = TickWatchdog::default();
        let t0 = Instant::now();
        watchdog.feed(t0);
        assert_eq!(
            watchdog.status(t0 + Duration::from_millis(250)),
            WatchdogStatus::Fresh
        );
        assert!(watchdog.is_stale(t0 + Duration::from_millis(251)));
    }

    #[test]
    fn test_feed_refreshes() {
        let mut watchdog = TickWatchdog::default();
        let t0 = Instant::now();
        watchdog.feed(t0);
        let t1 = t0 + Duration::from_millis(200);
        watchdog.feed(t1);
        assert!(!watchdog.is_stale(t1 + Duration::from_millis(200)));
    }

    #[test]
    fn test_clock_going_backwards_is_fresh() {
        let mut watchdog = TickWatchdog::default();
        let t0 = Instant::now();
        watchdog.feed(t0 + Duration::from_secs(1));
        assert_eq!(watchdog.elapsed(t0), Some(Duration::ZERO));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut watchdog = TickWatchdog::default();
        let t0 = Instant::now();
        watchdog.feed(t0);
        watchdog.reset();
        assert_eq!(watchdog.last_feed(), None);
        assert_eq!(watchdog.status(t0 + Duration::from_secs(1)), WatchdogStatus::Idle);
    }
}
