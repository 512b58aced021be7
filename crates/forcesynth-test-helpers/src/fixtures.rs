//! Telemetry fixtures.
//!
//! Single samples for common driving situations, plus [`DriveScript`] for
//! building tick-by-tick sequences.

use forcesynth_telemetry::{SURFACE_ROAD, TelemetrySample};

/// Car stationary in first gear on normal road.
pub fn parked() -> TelemetrySample {
    TelemetrySample {
        gear: 1,
        previous_gear: 1,
        ..TelemetrySample::at_rest()
    }
}

/// Driving straight in third gear.
pub fn cruising(speed: f32) -> TelemetrySample {
    TelemetrySample {
        speed,
        gear: 3,
        previous_gear: 3,
        ..TelemetrySample::at_rest()
    }
}

/// Holding a steady corner; `lateral` is split evenly across both components.
pub fn sweeping_corner(speed: f32, lateral: f32) -> TelemetrySample {
    TelemetrySample {
        lateral_a: lateral / 2.0,
        lateral_b: lateral / 2.0,
        steering_angle: lateral.signum() * 0.3,
        ..cruising(speed)
    }
}

/// Driving with the outside wheels on grass.
pub fn off_road(speed: f32) -> TelemetrySample {
    TelemetrySample {
        surface: [SURFACE_ROAD, 3, SURFACE_ROAD, 3],
        ..cruising(speed)
    }
}

/// The tick on which a gear change is first reported.
pub fn gear_change(from: u32, to: u32, speed: f32) -> TelemetrySample {
    TelemetrySample {
        gear: to,
        previous_gear: from,
        ..cruising(speed)
    }
}

/// Ten ticks of cruising followed by ten ticks at the post-impact speed.
pub fn crash_into_wall(speed_before: f32, speed_after: f32, steering: f32) -> Vec<TelemetrySample> {
    let approach = TelemetrySample {
        steering_angle: steering,
        ..cruising(speed_before)
    };
    let stopped = TelemetrySample {
        steering_angle: steering,
        ..cruising(speed_after)
    };
    DriveScript::new().hold(approach, 10).hold(stopped, 10).build()
}

/// Builder for a tick-by-tick sample sequence.
#[derive(Debug, Clone, Default)]
pub struct DriveScript {
    samples: Vec<TelemetrySample>,
}

impl DriveScript {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeat `sample` for `ticks` ticks.
    pub fn hold(mut self, sample: TelemetrySample, ticks: usize) -> Self {
        self.samples.extend(std::iter::repeat_n(sample, ticks));
        self
    }

    /// Append a single tick.
    pub fn then(mut self, sample: TelemetrySample) -> Self {
        self.samples.push(sample);
        self
    }

    /// Linear speed ramp over `ticks` ticks, both ends included.
    pub fn ramp_speed(mut self, base: TelemetrySample, from: f32, to: f32, ticks: usize) -> Self {
        let steps = ticks.saturating_sub(1).max(1) as f32;
        for i in 0..ticks {
            let t = i as f32 / steps;
            self.samples.push(TelemetrySample {
                speed: from + (to - from) * t,
                ..base
            });
        }
        self
    }

    /// Number of ticks in the script.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no ticks have been added.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Finish the script.
    pub fn build(self) -> Vec<TelemetrySample> {
        self.samples
    }
}
