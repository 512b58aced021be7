//! Property-based tests for the tick-rate filters.

use forcesynth_filters::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn smoother_stays_between_previous_and_input(
        prev in -60.0f32..60.0,
        input in -60.0f32..60.0,
    ) {
        let mut state = DualRateSmoother::lateral();
        state.smoothed = prev;
        let out = dual_rate_filter(input, &mut state);
        let (lo, hi) = if prev < input { (prev, input) } else { (input, prev) };
        prop_assert!(out >= lo - 1e-4 && out <= hi + 1e-4);
    }

    #[test]
    fn slew_never_exceeds_step(
        prev in any::<i16>(),
        target in any::<i16>(),
        step in 0i32..5000,
    ) {
        let mut state = SlewRateState::per_tick(step);
        state.commit(prev);
        let out = slew_rate_filter(target, &state);
        prop_assert!((i32::from(out) - i32::from(prev)).abs() <= step);
    }

    #[test]
    fn quantized_level_within_max(force in -1e6f32..1e6, max_level in 0i16..=i16::MAX) {
        let level = quantize(soft_saturate(force), max_level);
        prop_assert!(i32::from(level).abs() <= i32::from(max_level));
    }

    #[test]
    fn phase_wrapped_for_any_frequency(freq in 0.0f32..200.0, ticks in 0usize..2000) {
        let mut acc = PhaseAccumulator::new(freq, 60.0);
        for _ in 0..ticks {
            acc.advance();
        }
        prop_assert!(acc.phase >= 0.0 && acc.phase < std::f32::consts::TAU);
    }

    #[test]
    fn impact_never_reported_below_cutoff(speeds in prop::collection::vec(0.0f32..0.1, 1..64)) {
        let mut window = ImpactWindow::default();
        for speed in speeds {
            prop_assert!(impact_detector(speed, &mut window).is_none());
        }
    }
}
