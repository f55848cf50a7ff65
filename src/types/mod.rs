use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

mod asset;
mod inventory;
pub use asset::{Asset, AssetDraft};
pub use inventory::Inventory;

/// Role of a file in the ETL corpus. Derived from the extension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Notebook,
    Script,
    Sql,
    Config,
}

impl AssetType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notebook => "notebook",
            Self::Script => "script",
            Self::Sql => "sql",
            Self::Config => "config",
        }
    }

    /// Title-cased label used in descriptions and console tables.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Notebook => "Notebook",
            Self::Script => "Script",
            Self::Sql => "Sql",
            Self::Config => "Config",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source language as far as substring heuristics can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Sql,
    Scala,
    R,
    Notebook,
    Config,
    Unknown,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Sql => "sql",
            Self::Scala => "scala",
            Self::R => "r",
            Self::Notebook => "notebook",
            Self::Config => "config",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of data transformation. Presence only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transformation {
    Aggregation,
    Join,
    Filter,
    Window,
    Pivot,
    Union,
    Distinct,
    Sort,
}

impl Transformation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aggregation => "aggregation",
            Self::Join => "join",
            Self::Filter => "filter",
            Self::Window => "window",
            Self::Pivot => "pivot",
            Self::Union => "union",
            Self::Distinct => "distinct",
            Self::Sort => "sort",
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business priority tier, driven by ownership keywords in path or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessPriority {
    Critical,
    HighRisk,
    High,
    Medium,
}

impl BusinessPriority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::HighRisk => "HIGH_RISK",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        }
    }

    /// Tiers whose assets are never reported as trivially easy to migrate.
    #[must_use]
    pub fn is_escalated(self) -> bool {
        matches!(self, Self::Critical | Self::HighRisk)
    }

    /// Ownership context shown next to the tier in the console summary.
    #[must_use]
    pub fn context(self) -> &'static str {
        match self {
            Self::Critical => "Paymentez (65 employees, unknown stack)",
            Self::HighRisk => "Mazooma (6 employees, DB2 legacy)",
            Self::High => "SafeCharge, Simplex (large teams)",
            Self::Medium => "Other acquired companies",
        }
    }
}

impl fmt::Display for BusinessPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic migration effort tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationDifficulty {
    Easy,
    Medium,
    Hard,
    Critical,
}

impl MigrationDifficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub fn risk_label(self) -> &'static str {
        match self {
            Self::Easy => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::Hard => "High Risk",
            Self::Critical => "Critical Risk",
        }
    }
}

impl fmt::Display for MigrationDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file the engine could not turn into an asset.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one engine run.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub inventory: Inventory,
    pub skipped: Vec<SkippedFile>,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Returns true if any candidate file was skipped.
    #[must_use]
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}
