//! Centralized error types for forcesynth
//!
//! Every failure in the force feedback engine degrades to "no force feedback"
//! rather than propagating into the host. These types describe *why* the
//! engine degraded so the host can log it and so tests can assert on it.
//!
//! - [`device`]: actuator discovery, opening and writes
//! - [`sample`]: malformed telemetry samples
//! - [`config`]: configuration validation
//! - [`lifecycle`]: activation and shutdown ordering
//! - [`common`]: the top-level [`ForceSynthError`] and [`ErrorSeverity`]
//!
//! # Example
//!
//! ```
//! use forcesynth_errors::prelude::*;
//!
//! fn check_speed(speed: f32) -> Result<f32> {
//!     if !speed.is_finite() {
//!         return Err(SampleError::non_finite("speed", speed).into());
//!     }
//!     Ok(speed)
//! }
//!
//! assert!(check_speed(f32::NAN).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod common;
pub mod config;
pub mod device;
pub mod lifecycle;
pub mod prelude;
pub mod sample;

pub use common::{ErrorSeverity, ForceSynthError};
pub use config::ConfigError;
pub use device::DeviceError;
pub use lifecycle::LifecycleError;
pub use sample::SampleError;

/// A specialized `Result` type for forcesynth operations.
pub type Result<T> = std::result::Result<T, ForceSynthError>;

/// A specialized `Result` type for device operations on the tick path.
pub type DeviceResult<T = ()> = std::result::Result<T, DeviceError>;
