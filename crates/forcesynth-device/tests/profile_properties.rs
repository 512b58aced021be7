//! Property tests for torque profile resolution.

use forcesynth_device::{TorqueSource, resolve_profile};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_name_yields_a_bounded_scale(name in ".{0,40}", override_nm in -50.0f32..150.0) {
        let profile = resolve_profile(&name, override_nm);
        prop_assert!(profile.torque_scale > 0.0 && profile.torque_scale <= 1.0);
        if override_nm > 0.0 {
            prop_assert_eq!(profile.source, TorqueSource::Manual);
        }
    }

    #[test]
    fn known_names_survive_surrounding_text(prefix in "[a-z ]{0,8}", suffix in "[a-z ]{0,8}") {
        let name = format!("{prefix}Moza R21{suffix}");
        let profile = resolve_profile(&name, 0.0);
        prop_assert_eq!(profile.source, TorqueSource::Detected);
    }
}

#[test]
fn profile_serializes_for_diagnostics() -> Result<(), Box<dyn std::error::Error>> {
    let profile = resolve_profile("Fanatec DD2", 0.0);
    let json = serde_json::to_value(&profile)?;
    assert_eq!(json.get("source").and_then(|v| v.as_str()), Some("Detected"));
    assert_eq!(json.get("name").and_then(|v| v.as_str()), Some("Fanatec DD2"));
    Ok(())
}
