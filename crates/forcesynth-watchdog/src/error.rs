//! Error types for watchdog configuration.

/// Watchdog errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WatchdogError {
    /// Invalid configuration
    #[error("Invalid watchdog configuration: {0}")]
    InvalidConfiguration(String),
}

impl WatchdogError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// Result type for watchdog operations.
pub type WatchdogResult<T> = Result<T, WatchdogError>;
