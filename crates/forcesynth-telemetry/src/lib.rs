//! Telemetry sample model and normalizer.
//!
//! The host simulation publishes one [`TelemetrySample`] per tick. The
//! normalizer turns it into [`NormalizedSignals`]: clamped, combined and
//! decoded values the force composer can consume without further checks.
//! Normalization is pure and rejects samples carrying NaN or infinities.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

mod normalize;
mod sample;

pub use normalize::{NormalizedSignals, normalize};
pub use sample::{COLLISION_BIT, SURFACE_AIRBORNE, SURFACE_ROAD, TelemetrySample};
