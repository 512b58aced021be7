//! Crash and gear-shift impulse timers.
//!
//! Both are countdown timers armed by an event and decremented exactly once
//! per tick. The crash timer splits into an active jolt (timer above
//! [`CRASH_JOLT_THRESHOLD`]) followed by a cooldown that blocks re-arming.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CRASH_HOLD_TICKS, CRASH_IMPACT_FORCE_SCALE, CRASH_JOLT_THRESHOLD, CRASH_MIN_MAGNITUDE,
    CRASH_SPEED_LOSS_SCALE, CRASH_TIMER_TICKS, GEAR_KICK_TICKS,
};

/// How a crash was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashTrigger {
    /// Sudden speed loss in the impact window
    SpeedLoss,
    /// Rising edge of the collision bit
    CollisionFlag,
}

/// Push away from the apparent turn-in: steering right yields a left push.
#[inline]
pub fn crash_direction(steering_angle: f32) -> f32 {
    if steering_angle > 0.0 { -1.0 } else { 1.0 }
}

/// Magnitude for a crash detected by speed loss.
#[inline]
pub fn speed_loss_magnitude(loss: f32, threshold: f32) -> f32 {
    ((loss - threshold) * CRASH_SPEED_LOSS_SCALE).clamp(CRASH_MIN_MAGNITUDE, 1.0)
}

/// Magnitude for a crash detected by the collision bit.
#[inline]
pub fn impact_force_magnitude(impact_force: f32) -> f32 {
    (impact_force.abs() * CRASH_IMPACT_FORCE_SCALE).clamp(CRASH_MIN_MAGNITUDE, 1.0)
}

/// Crash jolt state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CrashImpulse {
    direction: f32,
    magnitude: f32,
    timer: u32,
}

impl CrashImpulse {
    /// Neither jolting nor cooling down; a new crash may arm.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.timer == 0
    }

    /// In the active jolt phase.
    #[inline]
    pub fn is_jolting(&self) -> bool {
        self.timer > CRASH_JOLT_THRESHOLD
    }

    /// Ticks remaining.
    #[inline]
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Stored direction, `±1`.
    #[inline]
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Stored magnitude, `[0.3, 1]` once armed.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Arm a new jolt. Returns false, leaving the state untouched, unless idle.
    pub fn arm(&mut self, direction: f32, magnitude: f32) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.direction = direction.signum();
        self.magnitude = magnitude.clamp(0.0, 1.0);
        self.timer = CRASH_TIMER_TICKS;
        true
    }

    /// Strength envelope: full for the first active ticks, then a linear ramp
    /// reaching zero where cooldown begins.
    pub fn envelope(&self) -> f32 {
        if !self.is_jolting() {
            return 0.0;
        }
        let elapsed = CRASH_TIMER_TICKS.saturating_sub(self.timer);
        if elapsed < CRASH_HOLD_TICKS {
            return 1.0;
        }
        let decay_span = CRASH_TIMER_TICKS - CRASH_JOLT_THRESHOLD - CRASH_HOLD_TICKS + 1;
        (self.timer - CRASH_JOLT_THRESHOLD) as f32 / decay_span as f32
    }

    /// Signed jolt before gains, zero outside the active phase.
    pub fn force(&self) -> f32 {
        self.direction * self.magnitude * self.envelope()
    }

    /// Advance one tick.
    #[inline]
    pub fn tick(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }

    /// Cancel any jolt and cooldown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Gear-shift kick state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GearKick {
    direction: f32,
    timer: u32,
}

impl GearKick {
    /// A kick is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.timer > 0
    }

    /// Ticks remaining.
    #[inline]
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Start a kick for a change from `from` to `to`.
    ///
    /// Ignored when either gear is neutral, the gear did not change, or a kick
    /// is already running. Upshifts kick positive, downshifts negative.
    pub fn arm(&mut self, from: u32, to: u32) -> bool {
        if from == 0 || to == 0 || from == to || self.is_running() {
            return false;
        }
        self.direction = if to > from { 1.0 } else { -1.0 };
        self.timer = GEAR_KICK_TICKS;
        true
    }

    /// Signed kick before gains, decaying linearly to zero.
    pub fn force(&self) -> f32 {
        self.direction * self.timer as f32 / GEAR_KICK_TICKS as f32
    }

    /// Advance one tick.
    #[inline]
    pub fn tick(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }

    /// Cancel any running kick.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
