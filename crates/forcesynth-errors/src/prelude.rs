//! Prelude module for convenient error handling imports.

pub use crate::{
    DeviceResult, Result,
    common::{ErrorSeverity, ForceSynthError},
    config::ConfigError,
    device::DeviceError,
    lifecycle::LifecycleError,
    sample::SampleError,
};
