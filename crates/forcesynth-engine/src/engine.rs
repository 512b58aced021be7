//! The per-tick force feedback engine.

use std::time::Instant;

use forcesynth_device::{
    DeviceCapabilities, DeviceProfile, ForceChannel, HapticDevice, HapticPort, resolve_profile,
};
use forcesynth_errors::{
    DeviceError, ForceSynthError, LifecycleError, SampleError,
};
use forcesynth_filters::{
    DualRateSmoother, FilterState, ImpactWindow, dual_rate_filter, impact_detector,
};
use forcesynth_telemetry::{NormalizedSignals, TelemetrySample, normalize};
use forcesynth_watchdog::{TickWatchdog, TickWatchdogConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::composer::{CompositionInput, ForceBreakdown, ForceComposer};
use crate::config::FfbConfig;
use crate::constants::{DEVICE_GAIN_PERCENT, TICK_RATE_HZ};
use crate::impulse::{
    CrashImpulse, CrashTrigger, GearKick, crash_direction, impact_force_magnitude,
    speed_loss_magnitude,
};
use crate::lifecycle::{GameplayGate, LifecycleState};
use crate::output::{OutputConditioner, OutputDecision, OutputEvents};

/// What a tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// A level was written
    Written {
        /// Level written
        level: i16,
    },
    /// Output computed but left unwritten by the deadband
    Held {
        /// Level computed
        level: i16,
    },
    /// Gameplay inactive; `zeroed` when this tick brought the device to rest
    Gated {
        /// A zero level was written
        zeroed: bool,
    },
    /// Input was stale; the device was zeroed and state reset
    StaleRecovered,
    /// The sample was missing or malformed; nothing changed
    Skipped(SampleError),
    /// The engine is not producing force in this state
    Inactive(LifecycleState),
    /// The device rejected the write
    WriteFailed(DeviceError),
}

/// Running counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Ticks received
    pub ticks: u64,
    /// Levels written
    pub writes: u64,
    /// Ticks held by the deadband
    pub held: u64,
    /// Ticks with a missing or malformed sample
    pub skipped_samples: u64,
    /// Ticks outside gameplay
    pub gated_ticks: u64,
    /// Crash impulses armed
    pub crash_impulses: u64,
    /// Gear kicks armed
    pub gear_kicks: u64,
    /// Times the watchdog zeroed a held force
    pub watchdog_trips: u64,
    /// Writes rejected by the device
    pub write_failures: u64,
}

struct ActiveDevice {
    device: Box<dyn HapticDevice>,
    channel: Box<dyn ForceChannel>,
    capabilities: DeviceCapabilities,
    profile: DeviceProfile,
}

/// Force feedback engine for one host process.
///
/// Built without touching any device; the first well-formed tick (or an
/// explicit [`Engine::activate`]) opens the device. All state is owned here
/// and every method takes `&mut self`, so ticks and watchdog polls never
/// interleave.
pub struct Engine<P: HapticPort> {
    config: FfbConfig,
    port: P,
    state: LifecycleState,
    active: Option<ActiveDevice>,
    smoother: DualRateSmoother,
    impact: ImpactWindow,
    crash: CrashImpulse,
    gear_kick: GearKick,
    composer: ForceComposer,
    output: OutputConditioner,
    watchdog: TickWatchdog,
    in_gameplay: bool,
    prev_collision: bool,
    last_gear: Option<u32>,
    last_breakdown: Option<ForceBreakdown>,
    stats: EngineStats,
}

impl<P: HapticPort> Engine<P> {
    /// Create an engine. Out-of-range settings are clamped and logged.
    pub fn new(config: FfbConfig, port: P) -> Self {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Force feedback settings out of range, clamping");
        }
        Self {
            config: config.sanitized(),
            port,
            state: LifecycleState::Uninitialized,
            active: None,
            smoother: DualRateSmoother::lateral(),
            impact: ImpactWindow::default(),
            crash: CrashImpulse::default(),
            gear_kick: GearKick::default(),
            composer: ForceComposer::new(TICK_RATE_HZ),
            output: OutputConditioner::new(0),
            watchdog: TickWatchdog::default(),
            in_gameplay: false,
            prev_collision: false,
            last_gear: None,
            last_breakdown: None,
            stats: EngineStats::default(),
        }
    }

    /// Replace the watchdog configuration.
    #[must_use]
    pub fn with_watchdog(mut self, config: TickWatchdogConfig) -> Self {
        self.watchdog = TickWatchdog::new(config);
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Effective (sanitized) configuration.
    pub fn config(&self) -> &FfbConfig {
        &self.config
    }

    /// Torque profile of the active device.
    pub fn profile(&self) -> Option<&DeviceProfile> {
        self.active.as_ref().map(|active| &active.profile)
    }

    /// Capabilities of the active device.
    pub fn capabilities(&self) -> Option<DeviceCapabilities> {
        self.active.as_ref().map(|active| active.capabilities)
    }

    /// Level last written to the device.
    pub fn last_level(&self) -> i16 {
        self.output.last_written()
    }

    /// Current smoothed lateral load.
    pub fn smoothed_lateral(&self) -> f32 {
        self.smoother.value()
    }

    /// Crash impulse state.
    pub fn crash_impulse(&self) -> &CrashImpulse {
        &self.crash
    }

    /// Gear kick state.
    pub fn gear_kick(&self) -> &GearKick {
        &self.gear_kick
    }

    /// Breakdown from the last composed tick.
    pub fn last_breakdown(&self) -> Option<&ForceBreakdown> {
        self.last_breakdown.as_ref()
    }

    /// Running counters.
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Open the device and start the force channel.
    ///
    /// Runs at most once. On failure the engine moves to
    /// [`LifecycleState::Failed`] and every later tick is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the reason activation failed, or a [`LifecycleError`] if
    /// activation was already attempted or the engine was shut down.
    pub fn activate(&mut self) -> Result<(), ForceSynthError> {
        match self.state {
            LifecycleState::Ready => return Ok(()),
            LifecycleState::Probing | LifecycleState::Failed => {
                return Err(LifecycleError::AlreadyAttempted.into());
            }
            LifecycleState::ShutDown => return Err(LifecycleError::ShutDown.into()),
            LifecycleState::Uninitialized => {}
        }

        self.state = LifecycleState::Probing;
        match self.open_device() {
            Ok(active) => {
                self.output = OutputConditioner::new(active.capabilities.max_level);
                info!(
                    device = %active.profile.name,
                    torque_scale = active.profile.torque_scale,
                    "Force feedback ready"
                );
                self.active = Some(active);
                self.state = LifecycleState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Force feedback disabled");
                self.state = LifecycleState::Failed;
                Err(e)
            }
        }
    }

    fn open_device(&mut self) -> Result<ActiveDevice, ForceSynthError> {
        if !self.config.enabled {
            return Err(LifecycleError::Disabled.into());
        }

        let devices = self.port.enumerate()?;
        if devices.is_empty() {
            return Err(DeviceError::NoDevices.into());
        }
        for found in &devices {
            info!(index = found.index, device = %found.name, "Found force feedback device");
        }

        let index = match self.config.device_index {
            Some(index) if index < devices.len() => index,
            Some(index) => {
                warn!(
                    requested = index,
                    available = devices.len(),
                    "Configured device index out of range, using device 0"
                );
                0
            }
            None => 0,
        };

        let mut device = self.port.open(index)?;
        let capabilities = device.capabilities();
        info!(
            device = %device.name(),
            constant_force = capabilities.constant_force,
            gain = capabilities.gain,
            autocenter = capabilities.autocenter,
            max_level = capabilities.max_level,
            "Opened device"
        );

        if !capabilities.constant_force {
            let err = DeviceError::feature_not_supported(device.name(), "constant force");
            device.close();
            return Err(err.into());
        }

        let profile = resolve_profile(device.name(), self.config.wheel_torque_nm);

        if capabilities.autocenter {
            if let Err(e) = device.set_autocenter(0) {
                warn!(error = %e, "Could not disable hardware autocenter");
            }
        }
        if capabilities.gain {
            if let Err(e) = device.set_gain(DEVICE_GAIN_PERCENT) {
                warn!(error = %e, "Could not set device gain");
            }
        }

        let channel = match device.create_force_channel() {
            Ok(channel) => channel,
            Err(e) => {
                device.close();
                return Err(e.into());
            }
        };

        Ok(ActiveDevice {
            device,
            channel,
            capabilities,
            profile,
        })
    }

    /// Run one tick at the current time.
    pub fn tick(
        &mut self,
        sample: Option<&TelemetrySample>,
        gameplay: impl Into<GameplayGate>,
    ) -> TickOutcome {
        self.tick_at(sample, gameplay, Instant::now())
    }

    /// Run one tick at `now`.
    pub fn tick_at(
        &mut self,
        sample: Option<&TelemetrySample>,
        gameplay: impl Into<GameplayGate>,
        now: Instant,
    ) -> TickOutcome {
        self.stats.ticks = self.stats.ticks.saturating_add(1);

        if self.state.is_terminal() {
            return TickOutcome::Inactive(self.state);
        }

        let signals = match sample.ok_or(SampleError::Missing).and_then(normalize) {
            Ok(signals) => signals,
            Err(e) => {
                trace!(error = %e, "Skipping tick");
                self.stats.skipped_samples = self.stats.skipped_samples.saturating_add(1);
                return TickOutcome::Skipped(e);
            }
        };

        if self.state == LifecycleState::Uninitialized && self.activate().is_err() {
            return TickOutcome::Inactive(self.state);
        }
        if !self.state.is_ready() {
            return TickOutcome::Inactive(self.state);
        }

        if self.watchdog.is_stale(now) {
            self.watchdog.feed(now);
            if self.zero_on_stale() {
                return TickOutcome::StaleRecovered;
            }
        } else {
            self.watchdog.feed(now);
        }

        if !gameplay.into().is_active() {
            self.stats.gated_ticks = self.stats.gated_ticks.saturating_add(1);
            if self.in_gameplay {
                debug!("Gameplay inactive, releasing force");
                self.in_gameplay = false;
                self.reset_transient();
            }
            let zeroed = match self.output.zero() {
                Some(decision) => matches!(self.apply(decision), TickOutcome::Written { .. }),
                None => false,
            };
            return TickOutcome::Gated { zeroed };
        }
        self.in_gameplay = true;

        let outcome = self.run_pipeline(&signals);

        self.crash.tick();
        self.gear_kick.tick();
        self.prev_collision = signals.collision;
        self.last_gear = Some(signals.gear);

        outcome
    }

    fn run_pipeline(&mut self, signals: &NormalizedSignals) -> TickOutcome {
        dual_rate_filter(signals.lateral_combined, &mut self.smoother);

        let impact_loss = impact_detector(signals.speed_raw, &mut self.impact);
        if self.crash.is_idle() {
            let direction = crash_direction(signals.steering_angle);
            if let Some(loss) = impact_loss {
                let magnitude = speed_loss_magnitude(loss, self.impact.loss_threshold);
                self.arm_crash(CrashTrigger::SpeedLoss, direction, magnitude);
            } else if signals.collision && !self.prev_collision {
                let magnitude = impact_force_magnitude(signals.impact_force);
                self.arm_crash(CrashTrigger::CollisionFlag, direction, magnitude);
            }
        }

        let from = self.last_gear.unwrap_or(signals.previous_gear);
        if self.gear_kick.arm(from, signals.gear) {
            self.stats.gear_kicks = self.stats.gear_kicks.saturating_add(1);
            debug!(from, to = signals.gear, "Gear kick");
        }

        let torque_scale = self
            .active
            .as_ref()
            .map_or(1.0, |active| active.profile.torque_scale);
        let breakdown = self.composer.compose(&CompositionInput {
            signals,
            smoothed_lateral: self.smoother.value(),
            crash: &self.crash,
            gear_kick: &self.gear_kick,
            torque_scale,
            config: &self.config,
        });
        self.last_breakdown = Some(breakdown);

        let events = OutputEvents {
            crash_jolt: self.crash.is_jolting(),
            gear_kick: self.gear_kick.is_running(),
        };
        let decision = self.output.condition(breakdown.total, events);
        self.apply(decision)
    }

    fn arm_crash(&mut self, trigger: CrashTrigger, direction: f32, magnitude: f32) {
        if self.crash.arm(direction, magnitude) {
            self.smoother.reset();
            self.stats.crash_impulses = self.stats.crash_impulses.saturating_add(1);
            debug!(?trigger, direction, magnitude, "Crash impulse armed");
        }
    }

    fn apply(&mut self, decision: OutputDecision) -> TickOutcome {
        let level = match decision {
            OutputDecision::Hold(level) => {
                self.stats.held = self.stats.held.saturating_add(1);
                return TickOutcome::Held { level };
            }
            OutputDecision::Write(level) => level,
        };

        let Some(active) = self.active.as_mut() else {
            return TickOutcome::Inactive(self.state);
        };
        match active.channel.update(level) {
            Ok(()) => {
                trace!(level, "Wrote force level");
                self.output.commit(level);
                self.stats.writes = self.stats.writes.saturating_add(1);
                TickOutcome::Written { level }
            }
            Err(e) => {
                warn!(error = %e, level, "Force write failed");
                self.stats.write_failures = self.stats.write_failures.saturating_add(1);
                TickOutcome::WriteFailed(e)
            }
        }
    }

    /// Zero the device if input is stale and a force is being held.
    ///
    /// Safe to call at any time from the host; returns whether it wrote.
    pub fn poll_watchdog(&mut self, now: Instant) -> bool {
        if !self.state.is_ready() || !self.watchdog.is_stale(now) {
            return false;
        }
        self.zero_on_stale()
    }

    fn zero_on_stale(&mut self) -> bool {
        self.reset_transient();
        let Some(decision) = self.output.zero() else {
            return false;
        };
        warn!(
            last_level = self.output.last_written(),
            "Telemetry stale, zeroing force"
        );
        self.stats.watchdog_trips = self.stats.watchdog_trips.saturating_add(1);
        matches!(self.apply(decision), TickOutcome::Written { .. })
    }

    fn reset_transient(&mut self) {
        self.smoother.reset();
        self.impact.reset();
        self.crash.reset();
        self.gear_kick.reset();
        self.composer.reset();
        self.prev_collision = false;
        self.last_gear = None;
    }

    /// Stop the channel and release the device.
    ///
    /// Idempotent, and a no-op on the device when the engine never activated.
    pub fn shutdown(&mut self) {
        if self.state == LifecycleState::ShutDown {
            return;
        }
        if let Some(mut active) = self.active.take() {
            if let Err(e) = active.channel.stop() {
                warn!(error = %e, "Failed to stop force channel");
            }
            drop(active.channel);
            if let Err(e) = active.device.stop_all() {
                warn!(error = %e, "Failed to stop device effects");
            }
            active.device.close();
            info!(device = %active.profile.name, "Force feedback shut down");
        }
        self.reset_transient();
        self.output.reset();
        self.watchdog.reset();
        self.state = LifecycleState::ShutDown;
    }
}

impl<P: HapticPort> Drop for Engine<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<P: HapticPort> std::fmt::Debug for Engine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("profile", &self.profile())
            .field("last_level", &self.output.last_written())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
