//! Snapshot tests for integer output shaping.
//!
//! Float filters are asserted with tolerances in unit tests; the level
//! pipeline is exact, so its sequences are pinned here.

use forcesynth_filters::prelude::*;

fn drive(targets: &[i16]) -> Vec<i16> {
    let mut slew = SlewRateState::default();
    let deadband = DeadbandState::default();
    targets
        .iter()
        .filter_map(|&target| {
            let level = slew_rate_filter(target, &slew);
            deadband_filter(level, slew.prev_output, &deadband).then(|| {
                slew.commit(level);
                level
            })
        })
        .collect()
}

#[test]
fn slew_ramp_and_reverse_snapshot() {
    let written = drive(&[7000, 7000, 7000, 7000, 7000, -1000, -1000, -1000, -1000]);
    insta::assert_debug_snapshot!(written, @r"
    [
        2000,
        4000,
        6000,
        7000,
        5000,
        3000,
        1000,
        -1000,
    ]
    ");
}

#[test]
fn deadband_suppresses_jitter_snapshot() {
    let written = drive(&[1000, 1030, 990, 1063, 1100, 0]);
    insta::assert_debug_snapshot!(written, @r"
    [
        1000,
        1100,
        0,
    ]
    ");
}
