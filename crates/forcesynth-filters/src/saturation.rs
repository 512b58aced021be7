//! Soft saturation and level quantization.

/// Squash any force into `(-1, 1)` with `tanh`.
///
/// Non-finite input maps to zero so a bad value can never reach the actuator.
#[inline]
pub fn soft_saturate(force: f32) -> f32 {
    if force.is_finite() { force.tanh() } else { 0.0 }
}

/// Convert a normalized force to a device level in `[-max_level, max_level]`.
#[inline]
pub fn quantize(force: f32, max_level: i16) -> i16 {
    let max_level = max_level.max(0);
    let limit = f32::from(max_level);
    if !force.is_finite() {
        return 0;
    }
    let scaled = (force * limit).round().clamp(-limit, limit);
    // Clamped to the i16 range above
    scaled as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_saturate_is_bounded() {
        assert!(soft_saturate(100.0) < 1.0 + f32::EPSILON);
        assert!(soft_saturate(-100.0) > -1.0 - f32::EPSILON);
        assert!(soft_saturate(f32::NAN).abs() < f32::EPSILON);
        assert!(soft_saturate(f32::INFINITY).abs() < f32::EPSILON);
    }

    #[test]
    fn test_soft_saturate_near_linear_for_small_forces() {
        assert!((soft_saturate(0.05) - 0.05).abs() < 1e-4);
    }

    #[test]
    fn test_quantize_rounds_and_clamps() {
        assert_eq!(quantize(0.5, 10000), 5000);
        assert_eq!(quantize(0.00004, 10000), 0);
        assert_eq!(quantize(0.0002, 10000), 2);
        assert_eq!(quantize(1.5, 32767), 32767);
        assert_eq!(quantize(-1.5, 32767), -32767);
    }

    #[test]
    fn test_quantize_negative_max_level_is_zero() {
        assert_eq!(quantize(0.7, -5), 0);
    }
}
