#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Kart Runtime
//!
//! Headless host for one kart: loads a tuning file, plays a drive script
//! against the reference physics layer and optionally hot-reloads the tuning
//! while the loop runs.

pub mod config;
pub mod script;
pub mod session;
pub mod watcher;

pub use script::{DriveScript, Segment};
pub use session::{DriveSession, Telemetry};
