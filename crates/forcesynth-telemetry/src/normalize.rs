//! Sample validation and normalization.

use forcesynth_errors::SampleError;
use serde::{Deserialize, Serialize};

use crate::sample::{COLLISION_BIT, SURFACE_ROAD, TelemetrySample};

/// Signals derived from one [`TelemetrySample`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedSignals {
    /// Speed clamped to `[0, 1]`, used for scaling
    pub speed: f32,
    /// Unclamped speed, used for crash detection
    pub speed_raw: f32,
    /// First lateral component
    pub lateral_a: f32,
    /// Second lateral component
    pub lateral_b: f32,
    /// `lateral_a + lateral_b`
    pub lateral_combined: f32,
    /// Steering angle
    pub steering_angle: f32,
    /// Current gear
    pub gear: u32,
    /// Gear the host reported for the previous frame
    pub previous_gear: u32,
    /// Collision bit is set
    pub collision: bool,
    /// Impact magnitude reported with the collision
    pub impact_force: f32,
    /// At least one wheel is on a surface rougher than road
    pub off_road: bool,
    /// Strongest host rumble motor, clamped to `[0, 1]`
    pub companion_rumble: f32,
}

/// Validate and normalize a sample.
///
/// # Errors
///
/// Returns [`SampleError::NonFinite`] naming the first float field that is
/// NaN or infinite, or `lateral_combined` when the lateral sum overflows.
pub fn normalize(sample: &TelemetrySample) -> Result<NormalizedSignals, SampleError> {
    if let Some((field, value)) = sample
        .float_fields()
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(SampleError::non_finite(field, value));
    }

    let lateral_combined = sample.lateral_a + sample.lateral_b;
    if !lateral_combined.is_finite() {
        return Err(SampleError::non_finite("lateral_combined", lateral_combined));
    }

    let [low, high] = sample.rumble_motors;

    Ok(NormalizedSignals {
        speed: sample.speed.clamp(0.0, 1.0),
        speed_raw: sample.speed,
        lateral_a: sample.lateral_a,
        lateral_b: sample.lateral_b,
        lateral_combined,
        steering_angle: sample.steering_angle,
        gear: sample.gear,
        previous_gear: sample.previous_gear,
        collision: sample.collision_flags & COLLISION_BIT != 0,
        impact_force: sample.impact_force,
        off_road: sample.surface.iter().any(|&code| code > SURFACE_ROAD),
        companion_rumble: low.max(high).clamp(0.0, 1.0),
    })
}
