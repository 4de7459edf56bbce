//! Tuning and script files on disk.

use std::path::Path;

use anyhow::{Context, Result};
use kart::KartTuningProfile;

use crate::script::DriveScript;

/// Read and validate a [`KartTuningProfile`] stored as JSON.
///
/// # Errors
///
/// Fails when the file cannot be read, is not a valid profile, or holds a
/// non-finite or non-positive driving stat.
pub fn load_tuning(path: &Path) -> Result<KartTuningProfile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    parse_tuning(&text).with_context(|| format!("loading tuning file {}", path.display()))
}

/// Parse and validate a JSON tuning profile.
///
/// # Errors
///
/// Fails on malformed JSON or when [`KartTuningProfile::validate`] rejects
/// the values.
pub fn parse_tuning(text: &str) -> Result<KartTuningProfile> {
    let tuning: KartTuningProfile = serde_json::from_str(text)?;
    tuning.validate()?;
    Ok(tuning)
}

/// Read a [`DriveScript`] stored as JSON.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_script(path: &Path) -> Result<DriveScript> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading drive script {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing drive script {}", path.display()))
}
