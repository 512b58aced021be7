//! Filter state reset.

use crate::deadband::DeadbandState;
use crate::impact::ImpactWindow;
use crate::phase::PhaseAccumulator;
use crate::slew_rate::SlewRateState;
use crate::smoothing::DualRateSmoother;

/// Common reset operation for filter states.
pub trait FilterState: Copy + Clone + std::fmt::Debug {
    /// Reset the filter state to initial values.
    fn reset(&mut self);
}

impl FilterState for DualRateSmoother {
    fn reset(&mut self) {
        self.smoothed = 0.0;
    }
}

impl FilterState for ImpactWindow {
    fn reset(&mut self) {
        self.speeds = [0.0; crate::impact::WINDOW_SLOTS];
        self.count = 0;
    }
}

impl FilterState for PhaseAccumulator {
    fn reset(&mut self) {
        self.phase = 0.0;
    }
}

impl FilterState for SlewRateState {
    fn reset(&mut self) {
        self.prev_output = 0;
    }
}

impl FilterState for DeadbandState {
    fn reset(&mut self) {
        // Threshold only, nothing dynamic
    }
}
