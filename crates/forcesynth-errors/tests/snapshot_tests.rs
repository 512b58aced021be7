//! Snapshot tests for error display messages.

use forcesynth_errors::prelude::*;

#[test]
fn snapshot_device_error_messages() {
    insta::assert_snapshot!(
        DeviceError::NoDevices.to_string(),
        @"No force feedback devices found"
    );
    insta::assert_snapshot!(
        DeviceError::open_failed(2, "access denied").to_string(),
        @"Failed to open device at index 2: access denied"
    );
    insta::assert_snapshot!(
        DeviceError::feature_not_supported("Logitech G29", "constant force").to_string(),
        @"Feature 'constant force' not supported by device Logitech G29"
    );
}

#[test]
fn snapshot_sample_error_messages() {
    insta::assert_snapshot!(SampleError::Missing.to_string(), @"Telemetry sample missing");
    insta::assert_snapshot!(
        SampleError::non_finite("speed", f32::INFINITY).to_string(),
        @"Telemetry field 'speed' is not finite: inf"
    );
}

#[test]
fn snapshot_wrapped_error_messages() {
    let err: ForceSynthError = LifecycleError::Disabled.into();
    insta::assert_snapshot!(
        err.to_string(),
        @"Lifecycle error: Force feedback disabled by configuration"
    );

    let err: ForceSynthError = ConfigError::out_of_range("global_strength", 3.0f32, 0.0f32, 2.0f32).into();
    insta::assert_snapshot!(
        err.to_string(),
        @"Configuration error: Field 'global_strength' value 3 is out of range [0, 2]"
    );
}

#[test]
fn severity_display_is_stable() {
    assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
}
