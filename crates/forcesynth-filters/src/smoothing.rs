//! Dual-rate smoothing
//!
//! Exponential smoothing with a faster coefficient while the input magnitude
//! grows than while it shrinks. Loads build up quickly and bleed off slowly,
//! which keeps cornering force from chattering on kerbs.

/// Coefficient used while `|input| > |smoothed|`.
pub const LATERAL_ATTACK_ALPHA: f32 = 0.25;

/// Coefficient used otherwise.
pub const LATERAL_RELEASE_ALPHA: f32 = 0.10;

/// State for the dual-rate smoother.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DualRateSmoother {
    /// Coefficient applied while magnitude is rising
    pub attack_alpha: f32,
    /// Coefficient applied while magnitude is falling or flat
    pub release_alpha: f32,
    /// Current smoothed value
    pub smoothed: f32,
}

impl DualRateSmoother {
    /// Create a smoother with explicit coefficients, each clamped to `[0, 1]`.
    pub fn new(attack_alpha: f32, release_alpha: f32) -> Self {
        Self {
            attack_alpha: attack_alpha.clamp(0.0, 1.0),
            release_alpha: release_alpha.clamp(0.0, 1.0),
            smoothed: 0.0,
        }
    }

    /// Coefficients used for combined lateral load.
    pub fn lateral() -> Self {
        Self::new(LATERAL_ATTACK_ALPHA, LATERAL_RELEASE_ALPHA)
    }

    /// Current smoothed value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.smoothed
    }
}

impl Default for DualRateSmoother {
    fn default() -> Self {
        Self::lateral()
    }
}

/// Advance the smoother by one tick and return the new smoothed value.
///
/// The rate is chosen by comparing magnitudes, so a sign flip through zero
/// is treated as release until the new magnitude overtakes the old one.
/// Non-finite input leaves the state untouched.
#[inline]
pub fn dual_rate_filter(input: f32, state: &mut DualRateSmoother) -> f32 {
    if !input.is_finite() {
        return state.smoothed;
    }
    let alpha = if input.abs() > state.smoothed.abs() {
        state.attack_alpha
    } else {
        state.release_alpha
    };
    state.smoothed = alpha * input + (1.0 - alpha) * state.smoothed;
    state.smoothed
}
