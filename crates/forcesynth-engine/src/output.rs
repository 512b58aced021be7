//! Output conditioning.
//!
//! Turns a composed force into the level written to the device, in a fixed
//! order: `tanh` saturation, quantization, slew limiting, deadband. The order
//! matters on stiff direct-drive bases; changing it lets small corrections
//! feed back into self-sustaining oscillation.

use forcesynth_filters::{
    DeadbandState, FilterState, SlewRateState, deadband_filter, quantize, slew_rate_filter,
    soft_saturate,
};

use crate::constants::{OUTPUT_DEADBAND, SLEW_MAX_STEP};

/// What to do with the device this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDecision {
    /// Write this level
    Write(i16),
    /// Leave the device at its current level; carries the level computed
    Hold(i16),
}

/// Events that change how the conditioner treats a level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputEvents {
    /// Crash impulse is in its active jolt
    pub crash_jolt: bool,
    /// Gear kick is running
    pub gear_kick: bool,
}

/// Output conditioner state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputConditioner {
    max_level: i16,
    slew: SlewRateState,
    deadband: DeadbandState,
}

impl OutputConditioner {
    /// Conditioner for a device accepting `±max_level`.
    pub fn new(max_level: i16) -> Self {
        Self {
            max_level: max_level.max(0),
            slew: SlewRateState::per_tick(SLEW_MAX_STEP),
            deadband: DeadbandState::new(OUTPUT_DEADBAND),
        }
    }

    /// Level last written to the device.
    pub fn last_written(&self) -> i16 {
        self.slew.prev_output
    }

    /// Decide the output for a composed force.
    ///
    /// Crash jolts and gear kicks bypass the slew limit; a crash jolt also
    /// bypasses the deadband so it is always written.
    pub fn condition(&self, force: f32, events: OutputEvents) -> OutputDecision {
        let target = quantize(soft_saturate(force), self.max_level);
        let level = if events.crash_jolt || events.gear_kick {
            target
        } else {
            slew_rate_filter(target, &self.slew)
        };

        if events.crash_jolt || deadband_filter(level, self.last_written(), &self.deadband) {
            OutputDecision::Write(level)
        } else {
            OutputDecision::Hold(level)
        }
    }

    /// Decision that brings the device to rest, if it is not already.
    pub fn zero(&self) -> Option<OutputDecision> {
        (self.last_written() != 0).then_some(OutputDecision::Write(0))
    }

    /// Record a level as written.
    pub fn commit(&mut self, level: i16) {
        self.slew.commit(level);
    }

    /// Forget the last written level.
    pub fn reset(&mut self) {
        self.slew.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: i16 = 10_000;

    fn write_level(decision: OutputDecision) -> Option<i16> {
        match decision {
            OutputDecision::Write(level) => Some(level),
            OutputDecision::Hold(_) => None,
        }
    }

    #[test]
    fn test_slew_limits_normal_output() {
        let conditioner = OutputConditioner::new(MAX);
        assert_eq!(
            conditioner.condition(0.9, OutputEvents::default()),
            OutputDecision::Write(2000)
        );
    }

    #[test]
    fn test_crash_jolt_bypasses_slew() {
        let conditioner = OutputConditioner::new(MAX);
        let events = OutputEvents {
            crash_jolt: true,
            ..OutputEvents::default()
        };
        let expected = quantize(soft_saturate(0.9), MAX);
        assert_eq!(
            conditioner.condition(0.9, events),
            OutputDecision::Write(expected)
        );
    }

    #[test]
    fn test_gear_kick_bypasses_slew_not_deadband() {
        let mut conditioner = OutputConditioner::new(MAX);
        let events = OutputEvents {
            gear_kick: true,
            ..OutputEvents::default()
        };
        let level = write_level(conditioner.condition(0.5, events));
        assert_eq!(level, Some(quantize(soft_saturate(0.5), MAX)));
        if let Some(level) = level {
            conditioner.commit(level);
        }
        assert!(matches!(
            conditioner.condition(0.5, events),
            OutputDecision::Hold(_)
        ));
    }

    #[test]
    fn test_crash_jolt_written_even_if_unchanged() {
        let mut conditioner = OutputConditioner::new(MAX);
        let events = OutputEvents {
            crash_jolt: true,
            ..OutputEvents::default()
        };
        let level = quantize(soft_saturate(0.7), MAX);
        conditioner.commit(level);
        assert_eq!(
            conditioner.condition(0.7, events),
            OutputDecision::Write(level)
        );
    }

    #[test]
    fn test_deadband_holds_small_change() {
        let mut conditioner = OutputConditioner::new(MAX);
        conditioner.commit(1000);
        // 0.1 saturates to ~0.0997, ~997 units
        assert!(matches!(
            conditioner.condition(0.1, OutputEvents::default()),
            OutputDecision::Hold(_)
        ));
    }

    #[test]
    fn test_zero_only_when_holding_force() {
        let mut conditioner = OutputConditioner::new(MAX);
        assert_eq!(conditioner.zero(), None);
        conditioner.commit(-300);
        assert_eq!(conditioner.zero(), Some(OutputDecision::Write(0)));
        conditioner.reset();
        assert_eq!(conditioner.last_written(), 0);
    }

    #[test]
    fn test_small_force_settles_to_zero() {
        let mut conditioner = OutputConditioner::new(MAX);
        conditioner.commit(40);
        assert_eq!(
            conditioner.condition(0.0, OutputEvents::default()),
            OutputDecision::Write(0)
        );
    }
}
