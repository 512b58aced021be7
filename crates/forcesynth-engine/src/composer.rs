//! Force composition.
//!
//! Sums every force source for one tick into a single signed scalar. Each
//! source is computed independently so the breakdown can be inspected.

use forcesynth_filters::{FilterState, PhaseAccumulator};
use forcesynth_telemetry::NormalizedSignals;
use serde::{Deserialize, Serialize};

use crate::config::FfbConfig;
use crate::constants::*;
use crate::impulse::{CrashImpulse, GearKick};

/// Per-source contributions for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceBreakdown {
    /// Cornering weight
    pub cornering: f32,
    /// Crash jolt
    pub crash: f32,
    /// Lighter push while a collision is held
    pub contact: f32,
    /// Gear-shift kick
    pub gear_kick: f32,
    /// Off-road rumble
    pub rumble: f32,
    /// Tire slip buzz
    pub slip: f32,
    /// Idle hum
    pub idle_hum: f32,
    /// Road texture
    pub road_texture: f32,
    /// Sum after global strength and inversion
    pub total: f32,
}

impl ForceBreakdown {
    fn sum(&self) -> f32 {
        self.cornering
            + self.crash
            + self.contact
            + self.gear_kick
            + self.rumble
            + self.slip
            + self.idle_hum
            + self.road_texture
    }
}

/// Everything the composer reads for one tick.
#[derive(Debug, Clone, Copy)]
pub struct CompositionInput<'a> {
    /// Normalized telemetry
    pub signals: &'a NormalizedSignals,
    /// Smoothed combined lateral load
    pub smoothed_lateral: f32,
    /// Crash impulse state
    pub crash: &'a CrashImpulse,
    /// Gear kick state
    pub gear_kick: &'a GearKick,
    /// Device torque scale
    pub torque_scale: f32,
    /// Strength settings
    pub config: &'a FfbConfig,
}

/// Inverted-U transfer from normalized lateral load to cornering force.
///
/// Linear up to the knee, then falling linearly to the floor at full load,
/// so the wheel goes light as the front tires give up. Sign is preserved.
pub fn cornering_curve(normalized: f32) -> f32 {
    let n = normalized.clamp(-1.0, 1.0);
    let magnitude = n.abs();
    let shaped = if magnitude <= CORNERING_KNEE {
        magnitude
    } else {
        let past_knee = (magnitude - CORNERING_KNEE) / (1.0 - CORNERING_KNEE);
        CORNERING_KNEE + past_knee * (CORNERING_FLOOR - CORNERING_KNEE)
    };
    shaped.copysign(n)
}

/// Phase state for the periodic sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceComposer {
    rumble: PhaseAccumulator,
    slip: PhaseAccumulator,
    idle_hum: PhaseAccumulator,
    road_texture: PhaseAccumulator,
}

impl Default for ForceComposer {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ)
    }
}

fn gated(acc: &mut PhaseAccumulator, active: bool) -> Option<f32> {
    if active {
        Some(acc.advance())
    } else {
        acc.reset();
        None
    }
}

impl ForceComposer {
    /// Composer for a host ticking at `tick_rate_hz`.
    pub fn new(tick_rate_hz: f32) -> Self {
        Self {
            rumble: PhaseAccumulator::new(RUMBLE_HZ, tick_rate_hz),
            slip: PhaseAccumulator::new(SLIP_HZ, tick_rate_hz),
            idle_hum: PhaseAccumulator::new(IDLE_HUM_HZ, tick_rate_hz),
            road_texture: PhaseAccumulator::new(ROAD_TEXTURE_HZ, tick_rate_hz),
        }
    }

    /// Zero every phase.
    pub fn reset(&mut self) {
        self.rumble.reset();
        self.slip.reset();
        self.idle_hum.reset();
        self.road_texture.reset();
    }

    /// Compose one tick.
    pub fn compose(&mut self, input: &CompositionInput<'_>) -> ForceBreakdown {
        let signals = input.signals;
        let config = input.config;
        let scale = input.torque_scale;
        let speed = signals.speed;
        let mut out = ForceBreakdown::default();

        if !input.crash.is_jolting() {
            let limit = CORNERING_GAIN * scale;
            out.cornering = (cornering_curve(input.smoothed_lateral / LATERAL_REFERENCE)
                * speed
                * config.steering_weight
                * limit)
                .clamp(-limit, limit);

            // Onset is the crash jolt; this only covers the ticks after it.
            if signals.collision {
                out.contact = signals.impact_force.clamp(-1.0, 1.0)
                    * CONTACT_GAIN
                    * config.wall_impact
                    * scale;
            }
        }

        out.crash = input.crash.force() * config.wall_impact * CRASH_GAIN * scale;
        out.gear_kick = input.gear_kick.force() * config.gear_shift * GEAR_KICK_GAIN * scale;

        let rumbling = signals.off_road && speed > RUMBLE_MIN_SPEED;
        if let Some(wave) = gated(&mut self.rumble, rumbling) {
            out.rumble = wave * speed * config.rumble_strip * scale * RUMBLE_GAIN;
        }

        let excess = input.smoothed_lateral.abs() - SLIP_THRESHOLD;
        let slipping = excess > 0.0 && speed > SLIP_MIN_SPEED;
        if let Some(wave) = gated(&mut self.slip, slipping) {
            let intensity = (excess / (LATERAL_REFERENCE - SLIP_THRESHOLD)).clamp(0.0, 1.0);
            out.slip = wave * intensity * config.tire_slip * scale * SLIP_GAIN;
        }

        let idling = speed < IDLE_HUM_MAX_SPEED;
        if let Some(wave) = gated(&mut self.idle_hum, idling) {
            let fade = 1.0 - speed / IDLE_HUM_MAX_SPEED;
            let intensity = if signals.companion_rumble > 0.0 {
                signals.companion_rumble
            } else {
                IDLE_HUM_DEFAULT_INTENSITY
            };
            out.idle_hum = wave * fade * intensity * scale * IDLE_HUM_GAIN;
        }

        let on_road = !signals.off_road && speed > ROAD_TEXTURE_MIN_SPEED;
        if let Some(wave) = gated(&mut self.road_texture, on_road) {
            out.road_texture = wave * speed * config.road_texture * scale * ROAD_TEXTURE_GAIN;
        }

        let total = out.sum() * config.global_strength;
        out.total = if config.invert_force { -total } else { total };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forcesynth_telemetry::{TelemetrySample, normalize};
    use forcesynth_test_helpers::prelude::*;

    fn signals(sample: &TelemetrySample) -> NormalizedSignals {
        must(normalize(sample))
    }

    fn compose_once(
        composer: &mut ForceComposer,
        signals: &NormalizedSignals,
        smoothed: f32,
        config: &FfbConfig,
    ) -> ForceBreakdown {
        composer.compose(&CompositionInput {
            signals,
            smoothed_lateral: smoothed,
            crash: &CrashImpulse::default(),
            gear_kick: &GearKick::default(),
            torque_scale: 1.0,
            config,
        })
    }

    #[test]
    fn test_cornering_curve_shape() {
        assert_approx_eq!(cornering_curve(0.5), 0.5);
        assert_approx_eq!(cornering_curve(0.7), 0.7);
        assert_approx_eq!(cornering_curve(0.85), 0.5, 1e-5);
        assert_approx_eq!(cornering_curve(1.0), 0.3, 1e-5);
        assert_approx_eq!(cornering_curve(3.0), 0.3, 1e-5);
        assert_approx_eq!(cornering_curve(-0.85), -0.5, 1e-5);
    }

    #[test]
    fn test_cornering_scales_with_speed_and_weight() {
        let mut composer = ForceComposer::default();
        let config = FfbConfig {
            steering_weight: 1.0,
            ..FfbConfig::default()
        };
        let s = signals(&cruising(0.5));
        let out = compose_once(&mut composer, &s, 15.0, &config);
        // 0.5 normalized * 0.5 speed * 0.6 gain
        assert_approx_eq!(out.cornering, 0.15, 1e-5);
    }

    #[test]
    fn test_cornering_clamped_to_base_gain() {
        let mut composer = ForceComposer::default();
        let config = FfbConfig {
            steering_weight: 2.0,
            ..FfbConfig::default()
        };
        let s = signals(&cruising(1.0));
        let out = compose_once(&mut composer, &s, 20.0, &config);
        assert_approx_eq!(out.cornering, 0.6, 1e-5);
    }

    #[test]
    fn test_cornering_suppressed_during_jolt_only() {
        let mut composer = ForceComposer::default();
        let config = FfbConfig::default();
        let s = signals(&cruising(0.8));
        let mut crash = CrashImpulse::default();
        crash.arm(1.0, 1.0);
        let input = |crash: &CrashImpulse| -> ForceBreakdown {
            let mut composer = composer;
            composer.compose(&CompositionInput {
                signals: &s,
                smoothed_lateral: 12.0,
                crash,
                gear_kick: &GearKick::default(),
                torque_scale: 1.0,
                config: &config,
            })
        };
        let jolting = input(&crash);
        assert_approx_eq!(jolting.cornering, 0.0);
        assert!(jolting.crash > 0.0);

        while crash.is_jolting() {
            crash.tick();
        }
        let cooling = input(&crash);
        assert!(cooling.cornering > 0.0);
        assert_approx_eq!(cooling.crash, 0.0);
        composer.reset();
    }

    #[test]
    fn test_contact_pushes_only_after_the_jolt() {
        let config = FfbConfig::default();
        let scraping = signals(&TelemetrySample {
            collision_flags: forcesynth_telemetry::COLLISION_BIT,
            impact_force: -0.4,
            ..cruising(0.5)
        });
        let mut crash = CrashImpulse::default();
        crash.arm(1.0, 0.8);
        let compose = |crash: &CrashImpulse, signals: &NormalizedSignals| {
            ForceComposer::default().compose(&CompositionInput {
                signals,
                smoothed_lateral: 0.0,
                crash,
                gear_kick: &GearKick::default(),
                torque_scale: 0.5,
                config: &config,
            })
        };

        assert_approx_eq!(compose(&crash, &scraping).contact, 0.0);

        while crash.is_jolting() {
            crash.tick();
        }
        // -0.4 impact * 0.5 gain * 0.5 torque scale
        assert_approx_eq!(compose(&crash, &scraping).contact, -0.1, 1e-6);

        let clear = signals(&cruising(0.5));
        assert_approx_eq!(compose(&crash, &clear).contact, 0.0);
    }

    #[test]
    fn test_rumble_only_off_road() {
        let mut composer = ForceComposer::default();
        let config = FfbConfig::default();
        let on_road = compose_once(&mut composer, &signals(&cruising(0.6)), 0.0, &config);
        assert_approx_eq!(on_road.rumble, 0.0);
        let grass = compose_once(&mut composer, &signals(&off_road(0.6)), 0.0, &config);
        // First tick of an 8 Hz wave sampled at 60 Hz
        let expected = (std::f32::consts::TAU * 8.0 / 60.0).sin() * 0.6 * 0.6 * 0.25;
        assert_approx_eq!(grass.rumble, expected, 1e-5);
        assert_approx_eq!(grass.road_texture, 0.0);
    }

    #[test]
    fn test_slip_needs_threshold_and_speed() {
        let mut composer = ForceComposer::default();
        let config = FfbConfig::default();
        let fast = signals(&cruising(0.6));
        assert_approx_eq!(compose_once(&mut composer, &fast, 20.0, &config).slip, 0.0);
        assert!(compose_once(&mut composer, &fast, 27.0, &config).slip.abs() > 0.0);
        let slow = signals(&cruising(0.05));
        assert_approx_eq!(compose_once(&mut composer, &slow, 27.0, &config).slip, 0.0);
    }

    #[test]
    fn test_idle_hum_fades_with_speed() {
        let config = FfbConfig::default();
        let mut parked_composer = ForceComposer::default();
        let mut rolling_composer = ForceComposer::default();
        let stopped = compose_once(&mut parked_composer, &signals(&parked()), 0.0, &config);
        let rolling = compose_once(&mut rolling_composer, &signals(&cruising(0.025)), 0.0, &config);
        assert!(stopped.idle_hum > 0.0);
        assert_approx_eq!(rolling.idle_hum, stopped.idle_hum * 0.5, 1e-6);
        let moving = compose_once(&mut rolling_composer, &signals(&cruising(0.2)), 0.0, &config);
        assert_approx_eq!(moving.idle_hum, 0.0);
    }

    #[test]
    fn test_idle_hum_follows_companion_rumble() {
        let config = FfbConfig::default();
        let mut a = ForceComposer::default();
        let mut b = ForceComposer::default();
        let quiet = compose_once(&mut a, &signals(&parked()), 0.0, &config);
        let revving = TelemetrySample {
            rumble_motors: [0.9, 0.1],
            ..parked()
        };
        let loud = compose_once(&mut b, &signals(&revving), 0.0, &config);
        assert_approx_eq!(loud.idle_hum / quiet.idle_hum, 3.0, 1e-4);
    }

    #[test]
    fn test_phase_resets_when_source_inactive() {
        let mut composer = ForceComposer::default();
        let config = FfbConfig::default();
        let grass = signals(&off_road(0.6));
        let first = compose_once(&mut composer, &grass, 0.0, &config).rumble;
        compose_once(&mut composer, &grass, 0.0, &config);
        compose_once(&mut composer, &signals(&cruising(0.6)), 0.0, &config);
        let restarted = compose_once(&mut composer, &grass, 0.0, &config).rumble;
        assert_approx_eq!(first, restarted);
    }

    #[test]
    fn test_global_strength_and_inversion() {
        let s = signals(&cruising(0.5));
        let base = compose_once(&mut ForceComposer::default(), &s, 15.0, &FfbConfig::default());
        let config = FfbConfig {
            global_strength: 0.5,
            invert_force: true,
            ..FfbConfig::default()
        };
        let scaled = compose_once(&mut ForceComposer::default(), &s, 15.0, &config);
        assert_approx_eq!(scaled.total, -0.5 * base.total, 1e-6);
    }

    #[test]
    fn test_torque_scale_applies_to_every_source() {
        let config = FfbConfig::default();
        let s = signals(&off_road(0.6));
        let full = compose_once(&mut ForceComposer::default(), &s, 25.0, &config);
        let scaled = ForceComposer::default().compose(&CompositionInput {
            signals: &s,
            smoothed_lateral: 25.0,
            crash: &CrashImpulse::default(),
            gear_kick: &GearKick::default(),
            torque_scale: 0.25,
            config: &config,
        });
        assert_approx_eq!(scaled.total, full.total * 0.25, 1e-6);
    }
}
