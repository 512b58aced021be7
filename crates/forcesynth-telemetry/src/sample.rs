//! Raw per-tick telemetry.

use serde::{Deserialize, Serialize};

/// Collision flag bit set by the physics engine while a hard contact is registered.
pub const COLLISION_BIT: u32 = 0x40;

/// Surface code for a wheel in the air.
pub const SURFACE_AIRBORNE: u32 = 0;

/// Surface code for a wheel on normal road. Anything above counts as off-road.
pub const SURFACE_ROAD: u32 = 1;

/// One telemetry sample as published by the host simulation.
///
/// Values are taken verbatim from the host; nothing here is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySample {
    /// Normalized speed, `>= 0` and usually `<= ~1.2`
    pub speed: f32,
    /// First lateral force component, roughly `±30`
    pub lateral_a: f32,
    /// Second lateral force component, roughly `±30`
    pub lateral_b: f32,
    /// Steering angle, sign gives direction
    pub steering_angle: f32,
    /// Current gear, `0` means neutral or unknown
    pub gear: u32,
    /// Gear reported for the previous frame
    pub previous_gear: u32,
    /// Collision bit-field, see [`COLLISION_BIT`]
    pub collision_flags: u32,
    /// Per-wheel surface codes
    pub surface: [u32; 4],
    /// Collision impact magnitude
    pub impact_force: f32,
    /// Host rumble motor intensities (low, high), `0..=1`
    pub rumble_motors: [f32; 2],
}

impl TelemetrySample {
    /// A stationary car on normal road.
    pub fn at_rest() -> Self {
        Self {
            surface: [SURFACE_ROAD; 4],
            ..Self::default()
        }
    }

    /// Float fields paired with their names, in declaration order.
    pub(crate) fn float_fields(&self) -> [(&'static str, f32); 7] {
        let [low, high] = self.rumble_motors;
        [
            ("speed", self.speed),
            ("lateral_a", self.lateral_a),
            ("lateral_b", self.lateral_b),
            ("steering_angle", self.steering_angle),
            ("impact_force", self.impact_force),
            ("rumble_motors[0]", low),
            ("rumble_motors[1]", high),
        ]
    }
}
