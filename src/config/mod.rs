// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, DiscoveryConfig, ReportConfig, ScoutToml};
use crate::error::ScoutError;
use crate::triage::PriorityTable;
use anyhow::{Context, Result};
use std::path::Path;

/// Name of the project config file looked up in the working directory.
pub const CONFIG_FILE: &str = "assetscout.toml";

impl Config {
    /// Loads configuration.
    ///
    /// With no explicit path, `./assetscout.toml` is read if present and
    /// defaults are used otherwise. An explicit path must exist.
    ///
    /// # Errors
    /// Returns error if the file can't be read, isn't valid TOML, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let raw = match path {
            Some(p) => io::read_toml(p)?,
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    io::read_toml(local)?
                } else {
                    ScoutToml::default()
                }
            }
        };

        let mut config = Self::from_toml(raw);
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    /// Parses config text without touching the filesystem.
    ///
    /// # Errors
    /// Returns error if the text isn't valid TOML or fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config = Self::from_toml(io::parse_toml(content)?);
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    #[must_use]
    pub fn from_toml(raw: ScoutToml) -> Self {
        Self {
            roots: raw.discovery.roots,
            extensions: raw.discovery.extensions,
            priorities: raw
                .priority
                .map(PriorityTable::new)
                .unwrap_or_default(),
            output: raw.report.output,
            jobs: None,
            verbose: false,
        }
    }

    /// Checks keywords and extensions, lowercasing extensions in place.
    ///
    /// # Errors
    /// Returns [`ScoutError::Config`] on an empty priority keyword or an
    /// extension without a leading dot.
    pub fn validate(&mut self) -> crate::error::Result<()> {
        if let Some(rule) = self
            .priorities
            .rules()
            .iter()
            .find(|r| r.keyword.trim().is_empty())
        {
            return Err(ScoutError::Config(format!(
                "empty priority keyword for tier {}",
                rule.tier
            )));
        }

        for ext in &mut self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ScoutError::Config(format!(
                    "extension '{ext}' must start with a dot"
                )));
            }
            *ext = ext.to_lowercase();
        }

        if self.jobs == Some(0) {
            return Err(ScoutError::Config("--jobs must be at least 1".to_string()));
        }
        Ok(())
    }
}
