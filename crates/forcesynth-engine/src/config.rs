//! Engine configuration.
//!
//! [`FfbConfig`] is what the host's settings file deserializes into. Values
//! outside their accepted range are clamped by [`FfbConfig::sanitized`] when
//! the engine is built; [`FfbConfig::validate`] reports them instead.

use std::path::Path;

use forcesynth_errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Accepted range for every strength multiplier.
pub const STRENGTH_RANGE: (f32, f32) = (0.0, 2.0);

/// Accepted range for the manual torque rating.
pub const TORQUE_RANGE_NM: (f32, f32) = (0.0, 100.0);

/// Force feedback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FfbConfig {
    /// Master switch; when false the engine never touches a device
    pub enabled: bool,
    /// Enumeration index of the device to use, `None` picks the first
    pub device_index: Option<usize>,
    /// Multiplier on the final force
    pub global_strength: f32,
    /// Cornering weight multiplier
    pub steering_weight: f32,
    /// Crash jolt multiplier
    pub wall_impact: f32,
    /// Off-road rumble multiplier
    pub rumble_strip: f32,
    /// Gear kick multiplier
    pub gear_shift: f32,
    /// Road texture multiplier
    pub road_texture: f32,
    /// Tire slip buzz multiplier
    pub tire_slip: f32,
    /// Rated wheel torque in Nm; `0` detects it from the device name
    pub wheel_torque_nm: f32,
    /// Reverse the direction of every force
    pub invert_force: bool,
}

impl Default for FfbConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            device_index: None,
            global_strength: 1.0,
            steering_weight: 1.0,
            wall_impact: 1.0,
            rumble_strip: 0.6,
            gear_shift: 0.3,
            road_texture: 0.2,
            tire_slip: 0.8,
            wheel_torque_nm: 0.0,
            invert_force: false,
        }
    }
}

fn clamp_finite(value: f32, (min, max): (f32, f32), fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

impl FfbConfig {
    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> FfbConfigBuilder {
        FfbConfigBuilder::default()
    }

    fn strengths(&self) -> [(&'static str, f32); 7] {
        [
            ("global_strength", self.global_strength),
            ("steering_weight", self.steering_weight),
            ("wall_impact", self.wall_impact),
            ("rumble_strip", self.rumble_strip),
            ("gear_shift", self.gear_shift),
            ("road_texture", self.road_texture),
            ("tire_slip", self.tire_slip),
        ]
    }

    /// Copy with every value clamped into its accepted range.
    ///
    /// Non-finite values fall back to their defaults.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            enabled: self.enabled,
            device_index: self.device_index,
            global_strength: clamp_finite(
                self.global_strength,
                STRENGTH_RANGE,
                defaults.global_strength,
            ),
            steering_weight: clamp_finite(
                self.steering_weight,
                STRENGTH_RANGE,
                defaults.steering_weight,
            ),
            wall_impact: clamp_finite(self.wall_impact, STRENGTH_RANGE, defaults.wall_impact),
            rumble_strip: clamp_finite(self.rumble_strip, STRENGTH_RANGE, defaults.rumble_strip),
            gear_shift: clamp_finite(self.gear_shift, STRENGTH_RANGE, defaults.gear_shift),
            road_texture: clamp_finite(self.road_texture, STRENGTH_RANGE, defaults.road_texture),
            tire_slip: clamp_finite(self.tire_slip, STRENGTH_RANGE, defaults.tire_slip),
            wheel_torque_nm: clamp_finite(
                self.wheel_torque_nm,
                TORQUE_RANGE_NM,
                defaults.wheel_torque_nm,
            ),
            invert_force: self.invert_force,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] for the first value outside its range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = STRENGTH_RANGE;
        for (field, value) in self.strengths() {
            ConfigError::check_range(field, value, min, max)?;
        }
        let (min, max) = TORQUE_RANGE_NM;
        ConfigError::check_range("wheel_torque_nm", self.wheel_torque_nm, min, max)
    }

    /// Parse from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Parse from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the text is not a valid configuration.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Invalid(format!("{}: {e}", path.display())))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("yaml" | "yml") => Self::from_yaml(&text),
            _ => Err(ConfigError::Invalid(format!(
                "{}: unsupported config format",
                path.display()
            ))),
        }
    }
}

/// Builder for `FfbConfig`.
#[derive(Debug, Default)]
pub struct FfbConfigBuilder {
    config: FfbConfig,
}

impl FfbConfigBuilder {
    /// Enable or disable force feedback.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Select a device by enumeration index.
    #[must_use]
    pub fn device_index(mut self, index: usize) -> Self {
        self.config.device_index = Some(index);
        self
    }

    /// Set the global strength.
    #[must_use]
    pub fn global_strength(mut self, value: f32) -> Self {
        self.config.global_strength = value;
        self
    }

    /// Set the cornering weight.
    #[must_use]
    pub fn steering_weight(mut self, value: f32) -> Self {
        self.config.steering_weight = value;
        self
    }

    /// Set the crash jolt strength.
    #[must_use]
    pub fn wall_impact(mut self, value: f32) -> Self {
        self.config.wall_impact = value;
        self
    }

    /// Set the rumble strength.
    #[must_use]
    pub fn rumble_strip(mut self, value: f32) -> Self {
        self.config.rumble_strip = value;
        self
    }

    /// Set the gear kick strength.
    #[must_use]
    pub fn gear_shift(mut self, value: f32) -> Self {
        self.config.gear_shift = value;
        self
    }

    /// Set the road texture strength.
    #[must_use]
    pub fn road_texture(mut self, value: f32) -> Self {
        self.config.road_texture = value;
        self
    }

    /// Set the tire slip strength.
    #[must_use]
    pub fn tire_slip(mut self, value: f32) -> Self {
        self.config.tire_slip = value;
        self
    }

    /// Set the rated wheel torque.
    #[must_use]
    pub fn wheel_torque_nm(mut self, value: f32) -> Self {
        self.config.wheel_torque_nm = value;
        self
    }

    /// Reverse every force.
    #[must_use]
    pub fn invert_force(mut self, invert: bool) -> Self {
        self.config.invert_force = invert;
        self
    }

    /// Build and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range.
    pub fn build(self) -> Result<FfbConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forcesynth_test_helpers::prelude::*;

    #[test]
    fn test_defaults_are_valid() -> TestResult {
        let config = FfbConfig::default();
        config.validate()?;
        assert!(config.enabled);
        assert_eq!(config.device_index, None);
        assert_approx_eq!(config.rumble_strip, 0.6);
        assert_approx_eq!(config.gear_shift, 0.3);
        assert_approx_eq!(config.road_texture, 0.2);
        assert_approx_eq!(config.tire_slip, 0.8);
        Ok(())
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = FfbConfig {
            global_strength: 5.0,
            tire_slip: -1.0,
            wheel_torque_nm: 250.0,
            steering_weight: f32::NAN,
            ..FfbConfig::default()
        }
        .sanitized();
        assert_approx_eq!(config.global_strength, 2.0);
        assert_approx_eq!(config.tire_slip, 0.0);
        assert_approx_eq!(config.wheel_torque_nm, 100.0);
        assert_approx_eq!(config.steering_weight, 1.0);
    }

    #[test]
    fn test_validate_names_field() {
        let result = FfbConfig::builder().wall_impact(2.5).build();
        assert!(matches!(
            result,
            Err(ConfigError::OutOfRange {
                field: "wall_impact",
                ..
            })
        ));
    }

    #[test]
    fn test_json_missing_fields_use_defaults() -> TestResult {
        let config = FfbConfig::from_json(r#"{ "wheel_torque_nm": 9.0, "invert_force": true }"#)?;
        assert_approx_eq!(config.wheel_torque_nm, 9.0);
        assert!(config.invert_force);
        assert_approx_eq!(config.steering_weight, 1.0);
        Ok(())
    }

    #[test]
    fn test_yaml_round_trip_of_device_index() -> TestResult {
        let config = FfbConfig::from_yaml("device_index: 2\nrumble_strip: 1.5\n")?;
        assert_eq!(config.device_index, Some(2));
        assert_approx_eq!(config.rumble_strip, 1.5);
        Ok(())
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(matches!(
            FfbConfig::from_json("not json"),
            Err(ConfigError::Invalid(_))
        ));
    }
}
