//! Slew Rate Limiter
//!
//! Restricts how far the device level may move in one tick, preventing
//! sudden torque steps on direct-drive bases.

/// Default maximum change per tick in device level units.
pub const DEFAULT_MAX_STEP: i32 = 2000;

/// State for the slew rate limiter.
///
/// `prev_output` is the level last written to the device. The filter itself
/// does not move it; the caller commits a level once it is actually written,
/// so skipped writes never drift the reference.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlewRateState {
    /// Maximum change per tick, in level units
    pub max_change_per_tick: i32,
    /// Level last written to the device
    pub prev_output: i16,
}

impl SlewRateState {
    /// Create a limiter allowing `max_change` level units per tick.
    pub fn per_tick(max_change: i32) -> Self {
        Self {
            max_change_per_tick: max_change.max(0),
            prev_output: 0,
        }
    }

    /// Limiter that never restricts.
    pub fn unlimited() -> Self {
        Self::per_tick(i32::MAX)
    }

    /// Record a level as written.
    #[inline]
    pub fn commit(&mut self, written: i16) {
        self.prev_output = written;
    }
}

impl Default for SlewRateState {
    fn default() -> Self {
        Self::per_tick(DEFAULT_MAX_STEP)
    }
}

/// Limit `target` to within `max_change_per_tick` of the last written level.
#[inline]
pub fn slew_rate_filter(target: i16, state: &SlewRateState) -> i16 {
    let prev = i32::from(state.prev_output);
    let change = i32::from(target).saturating_sub(prev);
    let max_change = state.max_change_per_tick;
    let limited = prev.saturating_add(change.clamp(-max_change, max_change));
    i16::try_from(limited).unwrap_or(target)
}
