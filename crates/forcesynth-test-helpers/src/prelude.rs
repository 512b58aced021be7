//! Convenience re-exports for common test utilities.

pub use crate::must::{must, must_err, must_some, must_with};
pub use crate::{assert_approx_eq, assert_in_range};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    DriveScript, crash_into_wall, cruising, gear_change, off_road, parked, sweeping_corner,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
