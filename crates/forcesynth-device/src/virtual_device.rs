//! In-memory haptic device
//!
//! [`VirtualHapticPort`] enumerates a configurable list of devices and
//! records every call made against them. A [`VirtualDeviceHandle`] cloned from
//! the port stays valid after the port has been moved into an engine, so
//! tests can inspect what was written.

use std::sync::Arc;

use forcesynth_errors::{DeviceError, DeviceResult};
use parking_lot::Mutex;
use tracing::debug;

use crate::ports::{DeviceCapabilities, DeviceInfo, ForceChannel, HapticDevice, HapticPort};

/// Failures to inject into the virtual device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailurePlan {
    /// `enumerate` fails
    pub enumerate: bool,
    /// `open` fails
    pub open: bool,
    /// `create_force_channel` fails
    pub channel: bool,
    /// every `ForceChannel::update` fails
    pub write: bool,
}

#[derive(Debug, Default)]
struct VirtualState {
    failures: FailurePlan,
    opened: Option<usize>,
    writes: Vec<i16>,
    gain: Option<u8>,
    autocenter: Option<u8>,
    channels_created: usize,
    channel_stops: usize,
    stop_all_calls: usize,
    closed: bool,
}

/// Port serving in-memory devices.
#[derive(Debug, Clone)]
pub struct VirtualHapticPort {
    devices: Vec<(String, DeviceCapabilities)>,
    state: Arc<Mutex<VirtualState>>,
}

impl VirtualHapticPort {
    /// Port with no devices attached.
    pub fn empty() -> Self {
        Self {
            devices: Vec::new(),
            state: Arc::new(Mutex::new(VirtualState::default())),
        }
    }

    /// Port with a single fully capable device.
    pub fn new(name: impl Into<String>) -> Self {
        Self::empty().with_device(name, DeviceCapabilities::default())
    }

    /// Attach another device.
    pub fn with_device(mut self, name: impl Into<String>, capabilities: DeviceCapabilities) -> Self {
        self.devices.push((name.into(), capabilities));
        self
    }

    /// Inject failures.
    pub fn with_failures(self, failures: FailurePlan) -> Self {
        self.state.lock().failures = failures;
        self
    }

    /// Inspection handle shared with every device opened from this port.
    pub fn handle(&self) -> VirtualDeviceHandle {
        VirtualDeviceHandle {
            state: Arc::clone(&self.state),
        }
    }
}

impl HapticPort for VirtualHapticPort {
    fn enumerate(&self) -> DeviceResult<Vec<DeviceInfo>> {
        if self.state.lock().failures.enumerate {
            return Err(DeviceError::EnumerationFailed("injected failure".into()));
        }
        Ok(self
            .devices
            .iter()
            .enumerate()
            .map(|(index, (name, _))| DeviceInfo {
                index,
                name: name.clone(),
            })
            .collect())
    }

    fn open(&self, index: usize) -> DeviceResult<Box<dyn HapticDevice>> {
        let (name, capabilities) = self
            .devices
            .get(index)
            .ok_or_else(|| DeviceError::open_failed(index, "no such device"))?;

        let mut state = self.state.lock();
        if state.failures.open {
            return Err(DeviceError::open_failed(index, "injected failure"));
        }
        state.opened = Some(index);
        debug!(index, device = %name, "Opened virtual device");

        Ok(Box::new(VirtualDevice {
            name: name.clone(),
            capabilities: *capabilities,
            state: Arc::clone(&self.state),
        }))
    }
}

struct VirtualDevice {
    name: String,
    capabilities: DeviceCapabilities,
    state: Arc<Mutex<VirtualState>>,
}

impl HapticDevice for VirtualDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> DeviceCapabilities {
        self.capabilities
    }

    fn set_autocenter(&mut self, percent: u8) -> DeviceResult {
        if !self.capabilities.autocenter {
            return Err(DeviceError::feature_not_supported(&self.name, "autocenter"));
        }
        self.state.lock().autocenter = Some(percent.min(100));
        Ok(())
    }

    fn set_gain(&mut self, percent: u8) -> DeviceResult {
        if !self.capabilities.gain {
            return Err(DeviceError::feature_not_supported(&self.name, "gain"));
        }
        self.state.lock().gain = Some(percent.min(100));
        Ok(())
    }

    fn create_force_channel(&mut self) -> DeviceResult<Box<dyn ForceChannel>> {
        let mut state = self.state.lock();
        if state.failures.channel {
            return Err(DeviceError::channel_failed(&self.name, "injected failure"));
        }
        state.channels_created += 1;
        Ok(Box::new(VirtualChannel {
            max_level: self.capabilities.max_level,
            state: Arc::clone(&self.state),
        }))
    }

    fn stop_all(&mut self) -> DeviceResult {
        self.state.lock().stop_all_calls += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.state.lock().closed = true;
    }
}

struct VirtualChannel {
    max_level: i16,
    state: Arc<Mutex<VirtualState>>,
}

impl ForceChannel for VirtualChannel {
    fn update(&mut self, level: i16) -> DeviceResult {
        let mut state = self.state.lock();
        if state.failures.write {
            return Err(DeviceError::write_failed("injected failure"));
        }
        if i32::from(level).abs() > i32::from(self.max_level) {
            return Err(DeviceError::write_failed(format!(
                "level {level} exceeds ±{}",
                self.max_level
            )));
        }
        state.writes.push(level);
        Ok(())
    }

    fn stop(&mut self) -> DeviceResult {
        self.state.lock().channel_stops += 1;
        Ok(())
    }
}

/// Read access to what the virtual device received.
#[derive(Debug, Clone)]
pub struct VirtualDeviceHandle {
    state: Arc<Mutex<VirtualState>>,
}

impl VirtualDeviceHandle {
    /// Every level written, in order.
    pub fn writes(&self) -> Vec<i16> {
        self.state.lock().writes.clone()
    }

    /// Number of levels written.
    pub fn write_count(&self) -> usize {
        self.state.lock().writes.len()
    }

    /// Most recent level written.
    pub fn last_level(&self) -> Option<i16> {
        self.state.lock().writes.last().copied()
    }

    /// Index of the opened device.
    pub fn opened(&self) -> Option<usize> {
        self.state.lock().opened
    }

    /// Last gain set.
    pub fn gain(&self) -> Option<u8> {
        self.state.lock().gain
    }

    /// Last autocenter strength set.
    pub fn autocenter(&self) -> Option<u8> {
        self.state.lock().autocenter
    }

    /// Number of force channels created.
    pub fn channels_created(&self) -> usize {
        self.state.lock().channels_created
    }

    /// Number of `ForceChannel::stop` calls.
    pub fn channel_stops(&self) -> usize {
        self.state.lock().channel_stops
    }

    /// Number of `HapticDevice::stop_all` calls.
    pub fn stop_all_calls(&self) -> usize {
        self.state.lock().stop_all_calls
    }

    /// Whether the device was closed.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Toggle write failures at runtime.
    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().failures.write = fail;
    }
}
