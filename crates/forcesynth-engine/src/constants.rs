//! Tuning constants for force composition and output conditioning.
//!
//! Gains are dimensionless and tuned at the reference torque; the device
//! torque scale is applied on top.

/// Simulation tick rate the engine is driven at.
pub const TICK_RATE_HZ: f32 = 60.0;

// Cornering

/// Combined lateral load that maps to full cornering force.
pub const LATERAL_REFERENCE: f32 = 30.0;
/// Normalized load at which grip starts to fall away.
pub const CORNERING_KNEE: f32 = 0.7;
/// Cornering output left at full normalized load.
pub const CORNERING_FLOOR: f32 = 0.3;
/// Base gain for cornering weight.
pub const CORNERING_GAIN: f32 = 0.6;

// Crash impulse

/// Crash timer length in ticks.
pub const CRASH_TIMER_TICKS: u32 = 30;
/// Timer values above this are the active jolt; at or below is cooldown.
pub const CRASH_JOLT_THRESHOLD: u32 = 18;
/// Active ticks held at full strength before the decay starts.
pub const CRASH_HOLD_TICKS: u32 = 4;
/// Base gain for the crash jolt.
pub const CRASH_GAIN: f32 = 0.9;
/// Smallest crash magnitude either detection path produces.
pub const CRASH_MIN_MAGNITUDE: f32 = 0.3;
/// Magnitude per unit of speed loss above the impact threshold.
pub const CRASH_SPEED_LOSS_SCALE: f32 = 10.0;
/// Magnitude per unit of reported impact force.
pub const CRASH_IMPACT_FORCE_SCALE: f32 = 2.0;

// Sustained contact

/// Gain on the reported impact force while the collision bit stays set.
pub const CONTACT_GAIN: f32 = 0.5;

// Gear kick

/// Gear kick length in ticks.
pub const GEAR_KICK_TICKS: u32 = 6;
/// Base gain for the gear kick.
pub const GEAR_KICK_GAIN: f32 = 0.3;

// Off-road rumble

/// Rumble frequency.
pub const RUMBLE_HZ: f32 = 8.0;
/// Rumble needs at least this speed.
pub const RUMBLE_MIN_SPEED: f32 = 0.01;
/// Base gain for rumble.
pub const RUMBLE_GAIN: f32 = 0.25;

// Tire slip

/// Smoothed lateral load above which the tires are sliding.
pub const SLIP_THRESHOLD: f32 = 21.0;
/// Slip buzz frequency, off the rumble harmonics.
pub const SLIP_HZ: f32 = 13.0;
/// Slip buzz needs more than this speed.
pub const SLIP_MIN_SPEED: f32 = 0.10;
/// Base gain for slip buzz.
pub const SLIP_GAIN: f32 = 0.15;

// Idle hum

/// Idle hum frequency.
pub const IDLE_HUM_HZ: f32 = 5.0;
/// Idle hum fades out as speed approaches this value.
pub const IDLE_HUM_MAX_SPEED: f32 = 0.05;
/// Hum intensity when the host reports no rumble of its own.
pub const IDLE_HUM_DEFAULT_INTENSITY: f32 = 0.3;
/// Base gain for idle hum.
pub const IDLE_HUM_GAIN: f32 = 0.08;

// Road texture

/// Road texture frequency.
pub const ROAD_TEXTURE_HZ: f32 = 11.0;
/// Road texture needs more than this speed.
pub const ROAD_TEXTURE_MIN_SPEED: f32 = 0.10;
/// Base gain for road texture.
pub const ROAD_TEXTURE_GAIN: f32 = 0.05;

// Output

/// Largest level change per tick outside of crash and gear events.
pub const SLEW_MAX_STEP: i32 = 2000;
/// Smallest level change that is written.
pub const OUTPUT_DEADBAND: i32 = 64;
/// Device gain requested on activation; scaling happens in software.
pub const DEVICE_GAIN_PERCENT: u8 = 100;
