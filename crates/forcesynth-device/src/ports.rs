//! Port traits for the device boundary
//!
//! Implementations wrap a platform haptics API. Every call is synchronous and
//! is made from the host's simulation thread.

use forcesynth_errors::DeviceResult;
use serde::{Deserialize, Serialize};

/// Highest level accepted by a standard constant-force effect.
pub const STANDARD_MAX_LEVEL: i16 = i16::MAX;

/// An attached device as reported by enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Enumeration index, passed back to [`HapticPort::open`]
    pub index: usize,
    /// Human readable device name
    pub name: String,
}

/// Features of an opened device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    /// Supports a constant-force channel
    pub constant_force: bool,
    /// Supports global gain
    pub gain: bool,
    /// Supports hardware autocenter
    pub autocenter: bool,
    /// Largest magnitude accepted by [`ForceChannel::update`]
    pub max_level: i16,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            constant_force: true,
            gain: true,
            autocenter: true,
            max_level: STANDARD_MAX_LEVEL,
        }
    }
}

/// The persistent force channel on an opened device.
pub trait ForceChannel: Send {
    /// Set the signed force level, within `±max_level`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::WriteFailed` if the device rejected the update.
    fn update(&mut self, level: i16) -> DeviceResult;

    /// Stop the channel. The channel is not used again afterwards.
    ///
    /// # Errors
    ///
    /// Returns a device error if the stop request failed.
    fn stop(&mut self) -> DeviceResult;
}

/// An opened haptic device.
pub trait HapticDevice: Send {
    /// Device name, used for torque profile lookup
    fn name(&self) -> &str;

    /// Device capabilities
    fn capabilities(&self) -> DeviceCapabilities;

    /// Set hardware autocenter strength, `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns a device error if the setting was rejected.
    fn set_autocenter(&mut self, percent: u8) -> DeviceResult;

    /// Set global device gain, `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns a device error if the setting was rejected.
    fn set_gain(&mut self, percent: u8) -> DeviceResult;

    /// Create and start the constant-force channel.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::ChannelCreationFailed` when no channel can be made.
    fn create_force_channel(&mut self) -> DeviceResult<Box<dyn ForceChannel>>;

    /// Stop every effect running on the device.
    ///
    /// # Errors
    ///
    /// Returns a device error if the request failed.
    fn stop_all(&mut self) -> DeviceResult;

    /// Release the device. Infallible; errors are logged by implementations.
    fn close(&mut self);
}

/// Device discovery.
pub trait HapticPort: Send {
    /// List attached force feedback devices.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::EnumerationFailed` if the platform query failed.
    fn enumerate(&self) -> DeviceResult<Vec<DeviceInfo>>;

    /// Open the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::OpenFailed` if the device cannot be opened.
    fn open(&self, index: usize) -> DeviceResult<Box<dyn HapticDevice>>;
}
