//! Float assertion macros.

/// Default tolerance used by [`assert_approx_eq!`] when none is given.
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Assert that two `f32` values are approximately equal.
///
/// ```rust
/// use forcesynth_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0f32, 1.000001);
/// assert_approx_eq!(1.0f32, 1.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::assertions::DEFAULT_TOLERANCE)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let left: f32 = $left;
        let right: f32 = $right;
        let tolerance: f32 = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    }};
}

/// Assert that a value lies within an inclusive range.
///
/// ```rust
/// use forcesynth_test_helpers::assert_in_range;
///
/// assert_in_range!(0.5f32, 0.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr $(,)?) => {{
        let value = $value;
        let min = $min;
        let max = $max;
        if !(min <= value && value <= max) {
            panic!(
                "assertion failed: `{:?}` not in range [{:?}, {:?}]",
                value, min, max
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_approx_eq_within_default_tolerance() {
        assert_approx_eq!(0.1f32 + 0.2, 0.3);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_approx_eq_rejects_nan() {
        assert_approx_eq!(f32::NAN, 0.0);
    }

    #[test]
    fn test_in_range_bounds_inclusive() {
        assert_in_range!(2000i16, -2000, 2000);
    }
}
