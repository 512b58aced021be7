//! Prelude for the filters crate.

pub use crate::deadband::{DeadbandState, deadband_filter};
pub use crate::impact::{ImpactWindow, impact_detector};
pub use crate::phase::PhaseAccumulator;
pub use crate::saturation::{quantize, soft_saturate};
pub use crate::slew_rate::{SlewRateState, slew_rate_filter};
pub use crate::smoothing::{DualRateSmoother, dual_rate_filter};
pub use crate::state::FilterState;
