use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::triage::{PriorityRule, PriorityTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            extensions: default_extensions(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { output: default_output() }
    }
}

pub(crate) fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

pub(crate) fn default_extensions() -> Vec<String> {
    [".py", ".sql", ".ipynb", ".scala", ".r", ".json", ".yaml", ".yml"]
        .iter()
        .map(|e| (*e).to_string())
        .collect()
}

pub(crate) fn default_output() -> PathBuf {
    PathBuf::from("results").join("etl_asset_inventory.json")
}

/// On-disk shape of `assetscout.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoutToml {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub report: ReportConfig,
    /// Ordered keyword table. `None` keeps the built-in table.
    #[serde(default)]
    pub priority: Option<Vec<PriorityRule>>,
}

/// Effective runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub roots: Vec<PathBuf>,
    /// Lowercase, dot-prefixed.
    pub extensions: Vec<String>,
    pub priorities: PriorityTable,
    pub output: PathBuf,
    /// Worker threads. `None` uses the global rayon pool.
    pub jobs: Option<usize>,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            extensions: default_extensions(),
            priorities: PriorityTable::default(),
            output: default_output(),
            jobs: None,
            verbose: false,
        }
    }
}
