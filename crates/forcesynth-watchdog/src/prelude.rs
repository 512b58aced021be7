//! Prelude for the watchdog crate.

pub use crate::config::{TickWatchdogConfig, TickWatchdogConfigBuilder};
pub use crate::error::{WatchdogError, WatchdogResult};
pub use crate::watchdog::{TickWatchdog, WatchdogStatus};
