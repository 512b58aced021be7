//! Per-tick force feedback synthesis
//!
//! Converts one telemetry sample per simulation tick into one signed level on
//! a haptic actuator:
//!
//! ```text
//! sample -> normalize -> smoothing / impact detection -> compose
//!        -> tanh -> quantize -> slew limit -> deadband -> write
//! ```
//!
//! # Example
//!
//! ```
//! use forcesynth_engine::prelude::*;
//! use forcesynth_device::VirtualHapticPort;
//! use forcesynth_telemetry::TelemetrySample;
//!
//! let port = VirtualHapticPort::new("Logitech G29");
//! let device = port.handle();
//! let mut engine = Engine::new(FfbConfig::default(), port);
//!
//! let sample = TelemetrySample {
//!     speed: 0.5,
//!     lateral_a: 10.0,
//!     lateral_b: 10.0,
//!     ..TelemetrySample::at_rest()
//! };
//! let outcome = engine.tick(Some(&sample), true);
//! assert!(matches!(outcome, TickOutcome::Written { .. }));
//! assert_eq!(engine.state(), LifecycleState::Ready);
//! assert_eq!(device.write_count(), 1);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod composer;
pub mod config;
pub mod constants;
pub mod engine;
pub mod impulse;
pub mod lifecycle;
pub mod output;
pub mod prelude;
pub mod replay;
pub mod shared;

pub use composer::{ForceBreakdown, ForceComposer};
pub use config::FfbConfig;
pub use engine::{Engine, EngineStats, TickOutcome};
pub use lifecycle::{GameplayGate, LifecycleState};
pub use shared::SharedEngine;
