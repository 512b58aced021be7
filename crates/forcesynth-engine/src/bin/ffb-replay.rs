//! ffb-replay - drive the force feedback engine with a scripted lap
//!
//! Runs [`SyntheticLap`] through the engine against an in-memory device and
//! reports what reached the wheel. Useful for tuning settings without a host
//! simulation or hardware attached.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use forcesynth_device::VirtualHapticPort;
use forcesynth_engine::prelude::*;
use forcesynth_engine::replay::SyntheticLap;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TICK_PERIOD: Duration = Duration::from_micros(16_667);

#[derive(Parser)]
#[command(name = "ffb-replay")]
#[command(about = "Replay a scripted lap through the force feedback engine")]
#[command(version)]
struct Cli {
    /// Name the virtual device reports; drives torque detection
    #[arg(long, default_value = "Moza R9")]
    device: String,

    /// Number of laps to replay
    #[arg(long, default_value_t = 1)]
    laps: u32,

    /// Settings file (.json, .yaml or .yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the wheel's rated torque in Nm
    #[arg(long)]
    torque_nm: Option<f32>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(serde::Serialize)]
struct Summary {
    device: String,
    torque_scale: f32,
    peak_level: i16,
    stats: EngineStats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("forcesynth={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut config = match &cli.config {
        Some(path) => FfbConfig::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => FfbConfig::default(),
    };
    if let Some(torque) = cli.torque_nm {
        config.wheel_torque_nm = torque;
    }

    let port = VirtualHapticPort::new(cli.device.as_str());
    let device = port.handle();
    let mut engine = Engine::new(config, port);
    engine.activate().context("activating force feedback")?;

    let torque_scale = engine.profile().map_or(1.0, |profile| profile.torque_scale);
    info!(laps = cli.laps, ticks = SyntheticLap::lap_ticks(), "Replaying");

    let mut now = Instant::now();
    for frame in SyntheticLap::new(cli.laps) {
        engine.tick_at(frame.sample.as_ref(), frame.gameplay, now);
        now += TICK_PERIOD;
    }
    engine.shutdown();

    let peak_level = device
        .writes()
        .iter()
        .map(|level| level.saturating_abs())
        .max()
        .unwrap_or(0);
    let summary = Summary {
        device: cli.device,
        torque_scale,
        peak_level,
        stats: engine.stats(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let stats = summary.stats;
        println!("Device:          {}", summary.device);
        println!("Torque scale:    {:.3}", summary.torque_scale);
        println!("Peak level:      {}", summary.peak_level);
        println!("Ticks:           {}", stats.ticks);
        println!("Writes:          {}", stats.writes);
        println!("Held:            {}", stats.held);
        println!("Skipped samples: {}", stats.skipped_samples);
        println!("Gated ticks:     {}", stats.gated_ticks);
        println!("Crash impulses:  {}", stats.crash_impulses);
        println!("Gear kicks:      {}", stats.gear_kicks);
        println!("Write failures:  {}", stats.write_failures);
    }

    Ok(())
}
