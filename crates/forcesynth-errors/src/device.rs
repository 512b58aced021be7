//! Actuator errors.
//!
//! Covers discovery, opening, capability checks and writes. Any of these
//! during activation leaves the engine in the `Failed` state for the rest of
//! the process; a write failure on the tick path is logged and the tick is
//! treated as not having written.

use crate::common::ErrorSeverity;

/// Device and actuator errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// No force feedback capable device attached
    #[error("No force feedback devices found")]
    NoDevices,

    /// Enumeration itself failed
    #[error("Device enumeration failed: {0}")]
    EnumerationFailed(String),

    /// Opening the selected device failed
    #[error("Failed to open device at index {index}: {reason}")]
    OpenFailed {
        /// Enumeration index that was opened
        index: usize,
        /// Failure reason
        reason: String,
    },

    /// Feature not supported
    #[error("Feature '{feature}' not supported by device {device}")]
    FeatureNotSupported {
        /// Device name
        device: String,
        /// Feature name
        feature: String,
    },

    /// The persistent force channel could not be created
    #[error("Failed to create force channel on {device}: {reason}")]
    ChannelCreationFailed {
        /// Device name
        device: String,
        /// Failure reason
        reason: String,
    },

    /// A level update was rejected
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Device disappeared
    #[error("Device disconnected: {0}")]
    Disconnected(String),
}

impl DeviceError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DeviceError::NoDevices => ErrorSeverity::Warning,
            DeviceError::EnumerationFailed(_) => ErrorSeverity::Error,
            DeviceError::OpenFailed { .. } => ErrorSeverity::Error,
            DeviceError::FeatureNotSupported { .. } => ErrorSeverity::Warning,
            DeviceError::ChannelCreationFailed { .. } => ErrorSeverity::Error,
            DeviceError::WriteFailed(_) => ErrorSeverity::Warning,
            DeviceError::Disconnected(_) => ErrorSeverity::Critical,
        }
    }

    /// Check if this error means force feedback cannot run at all.
    pub fn is_device_unavailable(&self) -> bool {
        !matches!(self, DeviceError::WriteFailed(_))
    }

    /// Create an open failure.
    pub fn open_failed(index: usize, reason: impl Into<String>) -> Self {
        DeviceError::OpenFailed {
            index,
            reason: reason.into(),
        }
    }

    /// Create a missing feature error.
    pub fn feature_not_supported(device: impl Into<String>, feature: impl Into<String>) -> Self {
        DeviceError::FeatureNotSupported {
            device: device.into(),
            feature: feature.into(),
        }
    }

    /// Create a channel creation failure.
    pub fn channel_failed(device: impl Into<String>, reason: impl Into<String>) -> Self {
        DeviceError::ChannelCreationFailed {
            device: device.into(),
            reason: reason.into(),
        }
    }

    /// Create a write failure.
    pub fn write_failed(reason: impl Into<String>) -> Self {
        DeviceError::WriteFailed(reason.into())
    }

    /// Create a disconnected error.
    pub fn disconnected(device: impl Into<String>) -> Self {
        DeviceError::Disconnected(device.into())
    }
}
