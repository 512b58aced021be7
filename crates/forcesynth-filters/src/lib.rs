//! Signal conditioning for the forcesynth tick loop
//!
//! Every filter here runs once per simulation tick (60 Hz) and keeps its
//! state in a small `Copy` struct owned by the caller.
//!
//! # Overview
//!
//! - **Dual-rate smoothing**: fast attack, slow release low-pass for lateral load
//! - **Impact window**: speed-loss detector over a short ring buffer
//! - **Phase accumulators**: bounded oscillators for periodic effects
//! - **Saturation**: `tanh` soft limiting and level quantization
//! - **Slew rate**: per-tick limit on level changes
//! - **Deadband**: suppresses writes that would not change the actuator
//!
//! # RT Safety
//!
//! - No heap allocations
//! - O(1) time complexity
//! - No syscalls or I/O
//!
//! # Example
//!
//! ```
//! use forcesynth_filters::prelude::*;
//!
//! let mut smoother = DualRateSmoother::lateral();
//! let mut slew = SlewRateState::per_tick(2000);
//! let deadband = DeadbandState::new(64);
//!
//! let smoothed = dual_rate_filter(20.0, &mut smoother);
//! let target = quantize(soft_saturate(smoothed / 30.0), 32767);
//! let level = slew_rate_filter(target, &slew);
//! if deadband_filter(level, slew.prev_output, &deadband) {
//!     slew.commit(level);
//! }
//! assert_eq!(slew.prev_output, 2000);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod deadband;
pub mod impact;
pub mod phase;
pub mod prelude;
pub mod saturation;
pub mod slew_rate;
pub mod smoothing;
pub mod state;

pub use deadband::{DeadbandState, deadband_filter};
pub use impact::{ImpactWindow, impact_detector};
pub use phase::PhaseAccumulator;
pub use saturation::{quantize, soft_saturate};
pub use slew_rate::{SlewRateState, slew_rate_filter};
pub use smoothing::{DualRateSmoother, dual_rate_filter};
pub use state::FilterState;
