//! Synthetic telemetry for demos and soak tests.
//!
//! [`SyntheticLap`] plays a short scripted lap: pull away from the grid,
//! upshift along a straight, a long corner that ends with the tires sliding,
//! a trip over the kerb onto the grass, a wall hit, a pause menu and a
//! restart. Every phase exercises a different force source.

use forcesynth_telemetry::{COLLISION_BIT, SURFACE_ROAD, TelemetrySample};

/// One scripted tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayFrame {
    /// Sample for the tick, `None` for a dropped frame
    pub sample: Option<TelemetrySample>,
    /// Host reports active driving
    pub gameplay: bool,
}

/// Lap phase boundaries in ticks.
const GRID: u32 = 60;
const STRAIGHT: u32 = GRID + 240;
const CORNER: u32 = STRAIGHT + 180;
const GRASS: u32 = CORNER + 90;
const WALL: u32 = GRASS + 30;
const PAUSE: u32 = WALL + 120;
const LAP_TICKS: u32 = PAUSE + 60;

/// Iterator over a scripted lap, repeated `laps` times.
#[derive(Debug, Clone)]
pub struct SyntheticLap {
    tick: u32,
    total: u32,
    gear: u32,
    speed: f32,
}

impl SyntheticLap {
    /// Script `laps` laps.
    pub fn new(laps: u32) -> Self {
        Self {
            tick: 0,
            total: laps.saturating_mul(LAP_TICKS),
            gear: 1,
            speed: 0.0,
        }
    }

    /// Ticks in one lap.
    pub fn lap_ticks() -> u32 {
        LAP_TICKS
    }

    fn frame(&mut self, t: u32) -> ReplayFrame {
        let mut sample = TelemetrySample {
            surface: [SURFACE_ROAD; 4],
            ..TelemetrySample::default()
        };
        let mut gameplay = true;

        match t {
            0..GRID => {
                self.speed = 0.0;
                self.gear = 1;
                sample.rumble_motors = [0.4, 0.1];
            }
            GRID..STRAIGHT => {
                self.speed = (self.speed + 0.004).min(0.9);
                let target_gear = 1 + (self.speed / 0.15) as u32;
                if target_gear > self.gear {
                    self.gear = target_gear.min(6);
                }
            }
            STRAIGHT..CORNER => {
                let progress = (t - STRAIGHT) as f32 / (CORNER - STRAIGHT) as f32;
                self.speed = (self.speed - 0.001).max(0.6);
                let load = 8.0 + 22.0 * progress;
                sample.lateral_a = load * 0.6;
                sample.lateral_b = load * 0.4;
                sample.steering_angle = -0.3;
                if t == STRAIGHT + 20 && self.gear > 3 {
                    self.gear -= 1;
                }
            }
            CORNER..GRASS => {
                self.speed = (self.speed - 0.002).max(0.55);
                sample.surface = [SURFACE_ROAD, 3, SURFACE_ROAD, 3];
                sample.lateral_a = 8.0;
                sample.lateral_b = 8.0;
                sample.steering_angle = 0.2;
            }
            GRASS..WALL => {
                if t == GRASS {
                    sample.collision_flags = COLLISION_BIT;
                    sample.impact_force = 0.4;
                    self.speed = 0.2;
                }
                sample.steering_angle = 0.35;
            }
            WALL..PAUSE => {
                self.speed = 0.0;
                gameplay = false;
            }
            _ => {
                self.speed = 0.0;
                self.gear = 1;
                if t == PAUSE + 30 {
                    return ReplayFrame {
                        sample: None,
                        gameplay,
                    };
                }
            }
        }

        sample.speed = self.speed;
        sample.gear = self.gear;
        sample.previous_gear = self.gear;
        ReplayFrame {
            sample: Some(sample),
            gameplay,
        }
    }
}

impl Iterator for SyntheticLap {
    type Item = ReplayFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tick >= self.total {
            return None;
        }
        let t = self.tick % LAP_TICKS;
        self.tick += 1;
        Some(self.frame(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_length() {
        assert_eq!(SyntheticLap::new(2).count() as u32, 2 * SyntheticLap::lap_ticks());
    }

    #[test]
    fn test_lap_covers_every_phase() {
        let frames: Vec<_> = SyntheticLap::new(1).collect();
        let samples: Vec<_> = frames.iter().filter_map(|f| f.sample).collect();
        assert!(frames.iter().any(|f| f.sample.is_none()));
        assert!(frames.iter().any(|f| !f.gameplay));
        assert!(samples.iter().any(|s| s.collision_flags & COLLISION_BIT != 0));
        assert!(samples.iter().any(|s| s.surface.iter().any(|&c| c > SURFACE_ROAD)));
        assert!(samples.iter().any(|s| s.gear >= 4));
        assert!(samples.iter().any(|s| (s.lateral_a + s.lateral_b) > 25.0));
    }
}
