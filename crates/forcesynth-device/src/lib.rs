//! Haptic device boundary for forcesynth
//!
//! The engine never talks to hardware directly. It sees three narrow traits:
//!
//! - [`HapticPort`]: enumerate attached devices and open one
//! - [`HapticDevice`]: an opened device, its capabilities and global settings
//! - [`ForceChannel`]: the single persistent constant-force channel the engine
//!   updates once per tick
//!
//! [`resolve_profile`] maps a device name to its rated torque so strong
//! direct-drive bases are scaled down to the feel of a reference wheel.
//! [`VirtualHapticPort`] records everything written to it for tests and demos.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod ports;
pub mod profile;
pub mod virtual_device;

pub use ports::{DeviceCapabilities, DeviceInfo, ForceChannel, HapticDevice, HapticPort};
pub use profile::{
    DeviceProfile, KNOWN_WHEELS, KnownWheel, REFERENCE_TORQUE_NM, TorqueSource, resolve_profile,
};
pub use virtual_device::{FailurePlan, VirtualDeviceHandle, VirtualHapticPort};
