// src/config/io.rs
use super::types::ScoutToml;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Reads and parses a config file.
///
/// # Errors
/// Returns error if the file doesn't exist, can't be read, or isn't valid TOML.
pub fn read_toml(path: &Path) -> Result<ScoutToml> {
    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_toml(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
}

/// Parses config text.
///
/// # Errors
/// Returns error if the text isn't valid TOML for [`ScoutToml`].
pub fn parse_toml(content: &str) -> Result<ScoutToml> {
    Ok(toml::from_str(content)?)
}
