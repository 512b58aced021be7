//! Impact window
//!
//! Detects sudden speed loss by comparing the newest speed sample with the
//! one recorded a fixed number of ticks earlier. Samples live in a ring of
//! [`WINDOW_SLOTS`] entries indexed by a monotonically increasing count.

/// Ring buffer size.
pub const WINDOW_SLOTS: usize = 8;

/// Ticks between the compared samples.
pub const LOOKBACK_TICKS: u64 = 6;

/// Speed loss over the lookback that counts as an impact.
pub const DEFAULT_LOSS_THRESHOLD: f32 = 0.03;

/// Below this speed, losses are ignored (parking, pit lane).
pub const DEFAULT_MIN_SPEED: f32 = 0.10;

/// State for the impact detector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImpactWindow {
    /// Recorded speeds, slot `count % WINDOW_SLOTS`
    pub speeds: [f32; WINDOW_SLOTS],
    /// Number of samples recorded so far
    pub count: u64,
    /// Minimum loss that reports an impact
    pub loss_threshold: f32,
    /// Minimum current speed that reports an impact
    pub min_speed: f32,
}

impl ImpactWindow {
    /// Create a window with explicit thresholds.
    pub fn new(loss_threshold: f32, min_speed: f32) -> Self {
        Self {
            speeds: [0.0; WINDOW_SLOTS],
            count: 0,
            loss_threshold,
            min_speed,
        }
    }

    /// Record a speed sample.
    #[inline]
    pub fn record(&mut self, speed: f32) {
        if let Some(slot) = self.speeds.get_mut(slot_for(self.count)) {
            *slot = speed;
        }
        self.count = self.count.wrapping_add(1);
    }

    /// Speed lost over the lookback, once enough samples exist.
    ///
    /// Positive means the car slowed down.
    #[inline]
    pub fn loss(&self) -> Option<f32> {
        if self.count <= LOOKBACK_TICKS {
            return None;
        }
        let newest = self.count.wrapping_sub(1);
        let oldest = newest.wrapping_sub(LOOKBACK_TICKS);
        let then = self.speeds.get(slot_for(oldest))?;
        let now = self.speeds.get(slot_for(newest))?;
        Some(then - now)
    }
}

impl Default for ImpactWindow {
    fn default() -> Self {
        Self::new(DEFAULT_LOSS_THRESHOLD, DEFAULT_MIN_SPEED)
    }
}

#[inline]
fn slot_for(index: u64) -> usize {
    // Result is always below WINDOW_SLOTS
    (index % WINDOW_SLOTS as u64) as usize
}

/// Record `speed` and report the speed loss if it qualifies as an impact.
///
/// Returns `Some(loss)` when the loss over [`LOOKBACK_TICKS`] exceeds the
/// threshold and the current speed is above the low-speed cutoff.
#[inline]
pub fn impact_detector(speed: f32, state: &mut ImpactWindow) -> Option<f32> {
    state.record(speed);
    let loss = state.loss()?;
    (loss > state.loss_threshold && speed > state.min_speed).then_some(loss)
}
