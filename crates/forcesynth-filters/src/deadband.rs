//! Output deadband.
//!
//! Suppresses device writes that would move the level by less than a few
//! units. Some bases buzz audibly when fed a stream of tiny corrections.

/// Default deadband in level units.
pub const DEFAULT_DEADBAND: i32 = 64;

/// State for the deadband.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeadbandState {
    /// Minimum level change that is written
    pub threshold: i32,
}

impl DeadbandState {
    /// Create a deadband of `threshold` level units.
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold: threshold.max(0),
        }
    }
}

impl Default for DeadbandState {
    fn default() -> Self {
        Self::new(DEFAULT_DEADBAND)
    }
}

/// Whether `level` differs enough from `last_written` to be written.
///
/// A zero level is always written while the device is holding a nonzero
/// one, so the actuator can come to rest exactly.
#[inline]
pub fn deadband_filter(level: i16, last_written: i16, state: &DeadbandState) -> bool {
    if level == 0 && last_written != 0 {
        return true;
    }
    (i32::from(level) - i32::from(last_written)).abs() >= state.threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_change_suppressed() {
        let state = DeadbandState::default();
        assert!(!deadband_filter(1063, 1000, &state));
        assert!(!deadband_filter(937, 1000, &state));
    }

    #[test]
    fn test_threshold_change_written() {
        let state = DeadbandState::default();
        assert!(deadband_filter(1064, 1000, &state));
        assert!(deadband_filter(936, 1000, &state));
    }

    #[test]
    fn test_settle_to_zero_always_written() {
        let state = DeadbandState::default();
        assert!(deadband_filter(0, 10, &state));
        assert!(!deadband_filter(0, 0, &state));
    }
}
