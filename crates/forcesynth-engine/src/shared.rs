//! Thread-shareable engine handle.

use std::sync::Arc;
use std::time::Instant;

use forcesynth_device::HapticPort;
use forcesynth_errors::ForceSynthError;
use forcesynth_telemetry::TelemetrySample;
use parking_lot::Mutex;

use crate::engine::{Engine, EngineStats, TickOutcome};
use crate::lifecycle::{GameplayGate, LifecycleState};

/// Engine behind a lock, for hosts that tick on one thread and poll the
/// watchdog or shut down from another.
///
/// Every method takes the lock for its whole duration, so a tick and a
/// watchdog poll never interleave.
pub struct SharedEngine<P: HapticPort> {
    inner: Arc<Mutex<Engine<P>>>,
}

impl<P: HapticPort> Clone for SharedEngine<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: HapticPort> SharedEngine<P> {
    /// Wrap an engine.
    pub fn new(engine: Engine<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// See [`Engine::activate`].
    ///
    /// # Errors
    ///
    /// Returns why activation failed.
    pub fn activate(&self) -> Result<(), ForceSynthError> {
        self.inner.lock().activate()
    }

    /// See [`Engine::tick`].
    pub fn tick(
        &self,
        sample: Option<&TelemetrySample>,
        gameplay: impl Into<GameplayGate>,
    ) -> TickOutcome {
        self.inner.lock().tick(sample, gameplay)
    }

    /// See [`Engine::tick_at`].
    pub fn tick_at(
        &self,
        sample: Option<&TelemetrySample>,
        gameplay: impl Into<GameplayGate>,
        now: Instant,
    ) -> TickOutcome {
        self.inner.lock().tick_at(sample, gameplay, now)
    }

    /// See [`Engine::poll_watchdog`].
    pub fn poll_watchdog(&self, now: Instant) -> bool {
        self.inner.lock().poll_watchdog(now)
    }

    /// See [`Engine::shutdown`].
    pub fn shutdown(&self) {
        self.inner.lock().shutdown();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.inner.lock().state()
    }

    /// Running counters.
    pub fn stats(&self) -> EngineStats {
        self.inner.lock().stats()
    }

    /// Level last written to the device.
    pub fn last_level(&self) -> i16 {
        self.inner.lock().last_level()
    }
}
