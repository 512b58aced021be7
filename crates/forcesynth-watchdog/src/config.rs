//! Watchdog configuration.

use std::time::Duration;

use crate::error::{WatchdogError, WatchdogResult};

/// Default staleness timeout.
pub const DEFAULT_TIMEOUT_MS: u32 = 250;

/// Accepted timeout range in milliseconds.
pub const TIMEOUT_RANGE_MS: std::ops::RangeInclusive<u32> = 10..=5000;

/// Tick watchdog configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickWatchdogConfig {
    /// Time without a tick after which input counts as stale.
    ///
    /// Default: 250ms, about fifteen ticks at 60 Hz.
    pub timeout_ms: u32,
}

impl TickWatchdogConfig {
    /// Create a configuration with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout_ms` is outside 10-5000ms.
    pub fn new(timeout_ms: u32) -> WatchdogResult<Self> {
        let config = Self { timeout_ms };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> TickWatchdogConfigBuilder {
        TickWatchdogConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> WatchdogResult<()> {
        if !TIMEOUT_RANGE_MS.contains(&self.timeout_ms) {
            return Err(WatchdogError::invalid_configuration(
                "timeout_ms must be between 10 and 5000",
            ));
        }
        Ok(())
    }

    /// Timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }
}

impl Default for TickWatchdogConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Builder for `TickWatchdogConfig`.
#[derive(Debug, Default)]
pub struct TickWatchdogConfigBuilder {
    config: TickWatchdogConfig,
}

impl TickWatchdogConfigBuilder {
    /// Set the timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(mut self, ms: u32) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Build and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> WatchdogResult<TickWatchdogConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TickWatchdogConfig::default();
        assert_eq!(config.timeout_ms, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_range_enforced() {
        assert!(TickWatchdogConfig::new(9).is_err());
        assert!(TickWatchdogConfig::new(10).is_ok());
        assert!(TickWatchdogConfig::new(5000).is_ok());
        assert!(TickWatchdogConfig::new(5001).is_err());
    }

    #[test]
    fn test_builder() -> WatchdogResult<()> {
        let config = TickWatchdogConfig::builder().timeout_ms(500).build()?;
        assert_eq!(config.timeout(), Duration::from_millis(500));
        Ok(())
    }
}
