//! Top-level error type and severity classification.

use core::fmt;

use crate::{ConfigError, DeviceError, LifecycleError, SampleError};

/// Top-level error type wrapping every forcesynth sub-error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForceSynthError {
    /// Actuator errors
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// Telemetry sample errors
    #[error("Sample error: {0}")]
    Sample(#[from] SampleError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Lifecycle ordering errors
    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),
}

impl ForceSynthError {
    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ForceSynthError::Device(e) => e.severity(),
            ForceSynthError::Sample(_) => ErrorSeverity::Warning,
            ForceSynthError::Config(_) => ErrorSeverity::Error,
            ForceSynthError::Lifecycle(e) => e.severity(),
        }
    }

    /// Whether the engine keeps producing force after this error.
    ///
    /// Only per-tick problems are recoverable; anything that stops the engine
    /// from reaching `Ready` disables force feedback for the process lifetime.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ForceSynthError::Sample(_) => true,
            ForceSynthError::Device(e) => !e.is_device_unavailable(),
            ForceSynthError::Config(_) | ForceSynthError::Lifecycle(_) => false,
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, actuator may be left in an unsafe state
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
    }

    #[test]
    fn test_sample_errors_are_recoverable() {
        let err: ForceSynthError = SampleError::Missing.into();
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_no_devices_is_not_recoverable() {
        let err: ForceSynthError = DeviceError::NoDevices.into();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_write_failure_is_recoverable() {
        let err: ForceSynthError = DeviceError::write_failed("usb stall").into();
        assert!(err.is_recoverable());
    }
}
