//! Torque profile resolution
//!
//! Force levels are tuned on a belt-driven reference wheel. Stronger bases
//! would turn the same level into several times the torque, so the engine
//! scales every force by `REFERENCE_TORQUE_NM / rated_torque`.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Rated torque the force gains are tuned for (Logitech G29 class).
pub const REFERENCE_TORQUE_NM: f32 = 2.2;

/// A known device name fragment and its rated peak torque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownWheel {
    /// Case-insensitive substring matched against the device name
    pub pattern: &'static str,
    /// Rated peak torque in Nm
    pub torque_nm: f32,
}

const fn wheel(pattern: &'static str, torque_nm: f32) -> KnownWheel {
    KnownWheel { pattern, torque_nm }
}

/// Known wheels, searched in order. Patterns carry the brand so bare model
/// numbers cannot match unrelated hardware; specific models come before the
/// brand-level fallbacks they contain.
pub const KNOWN_WHEELS: &[KnownWheel] = &[
    // Moza
    wheel("Moza R3", 3.9),
    wheel("Moza R5", 5.5),
    wheel("Moza R9", 9.0),
    wheel("Moza R12", 12.0),
    wheel("Moza R16", 16.0),
    wheel("Moza R21", 21.0),
    // Fanatec
    wheel("Fanatec CSL DD", 8.0),
    wheel("Fanatec GT DD", 12.0),
    wheel("Fanatec DD1", 20.0),
    wheel("Fanatec DD2", 25.0),
    // Simucube
    wheel("Simucube 2 Ultimate", 32.0),
    wheel("Simucube 2 Pro", 25.0),
    wheel("Simucube 2 Sport", 17.0),
    wheel("Simucube", 25.0),
    // Simagic
    wheel("Simagic Alpha Mini", 10.0),
    wheel("Simagic Alpha", 15.0),
    wheel("Simagic M10", 10.0),
    // Logitech
    wheel("Logitech G29", 2.2),
    wheel("Logitech G920", 2.2),
    wheel("Logitech G923", 2.2),
    wheel("Logitech G27", 2.2),
    wheel("Logitech G25", 2.2),
    wheel("Logitech G Pro", 11.0),
    wheel("Logitech PRO", 11.0),
    // Thrustmaster
    wheel("Thrustmaster T300", 3.9),
    wheel("Thrustmaster T500", 3.0),
    wheel("Thrustmaster T-GT", 4.2),
    wheel("Thrustmaster TS-XW", 4.5),
    wheel("Thrustmaster TS-PC", 4.5),
    wheel("Thrustmaster T818", 10.0),
    wheel("Thrustmaster T248", 3.5),
    wheel("Thrustmaster T150", 2.5),
    wheel("Thrustmaster TMX", 2.5),
    // Others
    wheel("VRS DFP", 20.0),
    wheel("Cammus", 10.0),
];

/// Where a profile's torque rating came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TorqueSource {
    /// Configured by the user
    Manual,
    /// Matched in [`KNOWN_WHEELS`]
    Detected,
    /// No rating; forces are not scaled
    Unknown,
}

/// Torque profile of the active device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Device name as reported by the port
    pub name: String,
    /// Rated peak torque, if known
    pub max_torque_nm: Option<f32>,
    /// Where the rating came from
    pub source: TorqueSource,
    /// Multiplier applied to every force, `(0, 1]`
    pub torque_scale: f32,
}

impl DeviceProfile {
    /// Profile for a device with no known rating.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_torque_nm: None,
            source: TorqueSource::Unknown,
            torque_scale: 1.0,
        }
    }
}

/// Scale that brings `torque_nm` down to the reference wheel.
///
/// Wheels at or below the reference are left unscaled.
pub fn torque_scale(torque_nm: f32) -> f32 {
    if torque_nm.is_finite() && torque_nm > REFERENCE_TORQUE_NM {
        REFERENCE_TORQUE_NM / torque_nm
    } else {
        1.0
    }
}

/// Look up the first known wheel whose pattern occurs in `name`.
pub fn lookup_known_wheel(name: &str) -> Option<&'static KnownWheel> {
    let name = name.to_lowercase();
    KNOWN_WHEELS
        .iter()
        .find(|known| name.contains(&known.pattern.to_lowercase()))
}

/// Resolve the torque profile for a device.
///
/// A positive `manual_override_nm` always wins. Otherwise the name is matched
/// against [`KNOWN_WHEELS`]; an unmatched name yields an unscaled profile.
pub fn resolve_profile(name: &str, manual_override_nm: f32) -> DeviceProfile {
    let profile = if manual_override_nm.is_finite() && manual_override_nm > 0.0 {
        DeviceProfile {
            name: name.to_owned(),
            max_torque_nm: Some(manual_override_nm),
            source: TorqueSource::Manual,
            torque_scale: torque_scale(manual_override_nm),
        }
    } else if let Some(known) = lookup_known_wheel(name) {
        DeviceProfile {
            name: name.to_owned(),
            max_torque_nm: Some(known.torque_nm),
            source: TorqueSource::Detected,
            torque_scale: torque_scale(known.torque_nm),
        }
    } else {
        DeviceProfile::unknown(name)
    };

    match profile.max_torque_nm {
        Some(torque) => info!(
            device = %profile.name,
            torque_nm = torque,
            source = ?profile.source,
            scale = profile.torque_scale,
            "Resolved torque profile"
        ),
        None => info!(
            device = %profile.name,
            "Unknown wheel, using reference scaling (set wheel_torque_nm for direct drive bases)"
        ),
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use forcesynth_test_helpers::prelude::*;

    #[test]
    fn test_manual_override_wins() {
        let profile = resolve_profile("Moza R9 Base", 15.0);
        assert_eq!(profile.source, TorqueSource::Manual);
        assert_eq!(profile.max_torque_nm, Some(15.0));
        assert_approx_eq!(profile.torque_scale, 2.2 / 15.0);
    }

    #[test]
    fn test_detected_case_insensitive() {
        let profile = resolve_profile("FANATEC csl dd", 0.0);
        assert_eq!(profile.source, TorqueSource::Detected);
        assert_approx_eq!(profile.torque_scale, 2.2 / 8.0);
    }

    #[test]
    fn test_specific_model_before_brand() {
        let ultimate = resolve_profile("Simucube 2 Ultimate", 0.0);
        assert_eq!(ultimate.max_torque_nm, Some(32.0));
        let generic = resolve_profile("Simucube Link Hub", 0.0);
        assert_eq!(generic.max_torque_nm, Some(25.0));
        let mini = resolve_profile("SIMAGIC Alpha Mini", 0.0);
        assert_eq!(mini.max_torque_nm, Some(10.0));
    }

    #[test]
    fn test_reference_wheel_unscaled() {
        let profile = resolve_profile("Logitech G29 Driving Force Racing Wheel", 0.0);
        assert_eq!(profile.source, TorqueSource::Detected);
        assert_approx_eq!(profile.torque_scale, 1.0);
    }

    #[test]
    fn test_weak_wheel_not_amplified() {
        assert_approx_eq!(torque_scale(1.5), 1.0);
        assert_approx_eq!(resolve_profile("Thrustmaster T150", 0.0).torque_scale, 2.2 / 2.5);
    }

    #[test]
    fn test_bare_model_numbers_do_not_match() {
        for name in [
            "Acme G25 Gamepad",
            "DD1 Button Box",
            "VRS Pedals",
            "T300 Shifter Adapter",
            "PRO Racing Pedals",
        ] {
            assert_eq!(lookup_known_wheel(name), None, "{name}");
        }
        let pro = resolve_profile("Logitech PRO Racing Wheel", 0.0);
        assert_eq!(pro.max_torque_nm, Some(11.0));
    }

    #[test]
    fn test_unknown_wheel() {
        let profile = resolve_profile("Homebrew Arduino Wheel", 0.0);
        assert_eq!(profile, DeviceProfile::unknown("Homebrew Arduino Wheel"));
    }

    #[test]
    fn test_negative_override_ignored() {
        assert_eq!(resolve_profile("Moza R5", -3.0).source, TorqueSource::Detected);
    }

    #[test]
    fn test_scale_never_exceeds_one() {
        for known in KNOWN_WHEELS {
            let scale = torque_scale(known.torque_nm);
            assert!(scale > 0.0 && scale <= 1.0, "{}", known.pattern);
        }
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_resolution_is_logged() {
        resolve_profile("Moza R12", 0.0);
        assert!(logs_contain("Resolved torque profile"));
    }
}
