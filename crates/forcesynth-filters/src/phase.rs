//! Phase accumulators for periodic effects.

use std::f32::consts::TAU;

/// Oscillator phase advanced once per tick.
///
/// The phase is wrapped into `[0, 2π)` after every step, so long sessions
/// never lose precision.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhaseAccumulator {
    /// Current phase in radians
    pub phase: f32,
    /// Phase step per tick in radians
    pub increment: f32,
}

impl PhaseAccumulator {
    /// Oscillator at `frequency_hz` sampled at `tick_rate_hz`.
    pub fn new(frequency_hz: f32, tick_rate_hz: f32) -> Self {
        let increment = if tick_rate_hz > 0.0 {
            (TAU * frequency_hz / tick_rate_hz).rem_euclid(TAU)
        } else {
            0.0
        };
        Self {
            phase: 0.0,
            increment,
        }
    }

    /// Step one tick and return `sin` of the new phase.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.phase = (self.phase + self.increment).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if self.phase >= TAU {
            self.phase = 0.0;
        }
        self.phase.sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FilterState;

    #[test]
    fn test_increment_matches_frequency() {
        let acc = PhaseAccumulator::new(8.0, 60.0);
        assert!((acc.increment - TAU * 8.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_phase_stays_bounded() {
        let mut acc = PhaseAccumulator::new(13.0, 60.0);
        for _ in 0..100_000 {
            let v = acc.advance();
            assert!((-1.0..=1.0).contains(&v));
            assert!((0.0..TAU).contains(&acc.phase));
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        // 5 Hz at 60 Hz: 12 ticks per cycle
        let mut acc = PhaseAccumulator::new(5.0, 60.0);
        for _ in 0..12 {
            acc.advance();
        }
        let distance = acc.phase.min(TAU - acc.phase);
        assert!(distance < 1e-4);
    }

    #[test]
    fn test_reset() {
        let mut acc = PhaseAccumulator::new(11.0, 60.0);
        acc.advance();
        acc.reset();
        assert!(acc.phase.abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_tick_rate_is_silent() {
        let mut acc = PhaseAccumulator::new(11.0, 0.0);
        assert!(acc.advance().abs() < f32::EPSILON);
    }
}
