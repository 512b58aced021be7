//! Lifecycle states and gameplay gating.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Engine lifecycle.
///
/// `Uninitialized -> Probing -> Ready | Failed`, and any state to `ShutDown`.
/// Activation is attempted at most once; `Failed` and `ShutDown` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Built, no device work done yet
    Uninitialized,
    /// Activation in progress
    Probing,
    /// Device open and force channel running
    Ready,
    /// Activation failed; force feedback is off for the rest of the process
    Failed,
    /// Device released
    ShutDown,
}

impl LifecycleState {
    /// Ticks produce output in this state.
    pub fn is_ready(self) -> bool {
        self == LifecycleState::Ready
    }

    /// No further transition except to `ShutDown`.
    pub fn is_terminal(self) -> bool {
        matches!(self, LifecycleState::Failed | LifecycleState::ShutDown)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Probing => "probing",
            LifecycleState::Ready => "ready",
            LifecycleState::Failed => "failed",
            LifecycleState::ShutDown => "shut down",
        };
        f.write_str(name)
    }
}

/// Whether the host is in active driving.
///
/// Menus, replays and result screens keep publishing telemetry; force
/// feedback must stay off there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameplayGate {
    active: bool,
}

impl GameplayGate {
    /// Gate from an explicit flag.
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    /// Gate from a host game-mode value: active when `mode` is one of
    /// `driving_modes`.
    pub fn from_game_mode(mode: u32, driving_modes: &[u32]) -> Self {
        Self::new(driving_modes.contains(&mode))
    }

    /// Gate from a host "in gameplay" byte; any nonzero value is active.
    pub fn from_flag(flag: u8) -> Self {
        Self::new(flag != 0)
    }

    /// Force feedback may run.
    pub fn is_active(self) -> bool {
        self.active
    }
}

impl From<bool> for GameplayGate {
    fn from(active: bool) -> Self {
        Self::new(active)
    }
}

impl From<GameplayGate> for bool {
    fn from(gate: GameplayGate) -> Self {
        gate.active
    }
}
