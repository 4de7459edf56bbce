#![deny(clippy::all, clippy::pedantic)]
//! # Kart Runtime
//!
//! Entry point for the headless kart drive loop.
//!
//! Loads an optional tuning file, plays a drive script (the built-in demo by
//! default) for a fixed number of ticks and logs telemetry as it goes. With
//! `--watch`, edits to the tuning file are picked up between ticks.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use kart::{ControllerSettings, KartTuningProfile};
use runtime::{config, watcher, DriveScript, DriveSession};
use tracing_subscriber::EnvFilter;

const LOG_INTERVAL: u64 = 50;

#[derive(Parser, Debug)]
#[command(name = "runtime_main", about = "Drive a physics kart headlessly")]
struct Args {
    /// Number of fixed ticks to simulate.
    #[arg(long, default_value_t = 500)]
    steps: u64,

    /// Fixed tick duration in seconds.
    #[arg(long, default_value_t = 0.02)]
    dt: f32,

    /// JSON tuning profile; defaults are used when omitted.
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Reload the tuning file whenever it changes.
    #[arg(long, requires = "tuning")]
    watch: bool,

    /// JSON drive script; the built-in demo is used when omitted.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if !(args.dt.is_finite() && args.dt > 0.0) {
        bail!("--dt must be a positive number of seconds, got {}", args.dt);
    }

    let tuning = match &args.tuning {
        Some(path) => config::load_tuning(path)?,
        None => KartTuningProfile::default(),
    };
    let script = match &args.script {
        Some(path) => config::load_script(path)?,
        None => DriveScript::demo(),
    };

    let reloads = match (&args.tuning, args.watch) {
        (Some(path), true) => Some(watcher::watch_tuning(path)?),
        _ => None,
    };

    let settings = ControllerSettings::default().with_tick_duration(args.dt);
    let mut session = DriveSession::new(tuning, settings);

    tracing::info!(
        "Running headless drive for {} ticks with dt = {}",
        args.steps,
        args.dt
    );
    for tick in 0..args.steps {
        if let Some((_, rx)) = &reloads {
            for tuning in rx.try_iter() {
                session.retune(tuning);
            }
        }

        session.tick(script.input_at(tick));

        if (tick + 1) % LOG_INTERVAL == 0 {
            let t = session.telemetry();
            tracing::info!(
                tick = t.tick,
                position = ?t.position,
                forward_speed = t.forward_speed,
                grounded = t.grounded,
                landings = t.landings,
                "drive progress"
            );
        }
    }

    let t = session.telemetry();
    tracing::info!(
        "Drive finished after {} ticks. Final position: {:?}, landings: {}",
        t.tick,
        t.position,
        t.landings
    );
    Ok(())
}
