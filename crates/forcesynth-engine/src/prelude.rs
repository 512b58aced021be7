//! Prelude for the engine crate.

pub use crate::composer::{ForceBreakdown, ForceComposer};
pub use crate::config::{FfbConfig, FfbConfigBuilder};
pub use crate::engine::{Engine, EngineStats, TickOutcome};
pub use crate::impulse::{CrashImpulse, GearKick};
pub use crate::lifecycle::{GameplayGate, LifecycleState};
pub use crate::output::{OutputConditioner, OutputDecision, OutputEvents};
pub use crate::shared::SharedEngine;
pub use forcesynth_errors::{ForceSynthError, SampleError};
