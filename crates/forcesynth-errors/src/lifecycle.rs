//! Activation and shutdown ordering errors.

use crate::common::ErrorSeverity;

/// Errors returned when an engine operation is not valid in its current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// Force feedback disabled by configuration
    #[error("Force feedback disabled by configuration")]
    Disabled,

    /// Activation already ran and failed; it is never retried
    #[error("Activation already attempted")]
    AlreadyAttempted,

    /// Engine was shut down
    #[error("Engine has been shut down")]
    ShutDown,
}

impl LifecycleError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LifecycleError::Disabled => ErrorSeverity::Info,
            LifecycleError::AlreadyAttempted | LifecycleError::ShutDown => ErrorSeverity::Warning,
        }
    }
}
