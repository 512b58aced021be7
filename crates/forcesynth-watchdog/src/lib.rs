//! Tick staleness watchdog.
//!
//! The engine feeds the watchdog from every well-formed tick. When the host
//! stops ticking (pause menu, loading screen, a hung simulation thread) the
//! watchdog reports stale and the engine zeroes the actuator so a held force
//! never outlives the telemetry that produced it.
//!
//! Time is always passed in by the caller; the watchdog never reads a clock.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use forcesynth_watchdog::prelude::*;
//!
//! let mut watchdog = TickWatchdog::default();
//! let t0 = Instant::now();
//! watchdog.feed(t0);
//! assert!(!watchdog.is_stale(t0 + Duration::from_millis(100)));
//! assert!(watchdog.is_stale(t0 + Duration::from_millis(300)));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod prelude;
pub mod watchdog;

pub use config::{TickWatchdogConfig, TickWatchdogConfigBuilder};
pub use error::{WatchdogError, WatchdogResult};
pub use watchdog::{TickWatchdog, WatchdogStatus};
