//! The per-file asset record and its two-phase construction.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{AssetType, BusinessPriority, Language, MigrationDifficulty, Transformation};
use crate::triage::difficulty::{self, DifficultySignals};

/// One classified source file. Immutable once frozen from an [`AssetDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    // Data record, one getter per field.
    path: PathBuf,
    asset_type: AssetType,
    name: String,
    size_bytes: u64,
    last_modified: DateTime<Utc>,
    language: Language,
    complexity_score: u8,
    dependencies: BTreeSet<String>,
    database_objects: BTreeSet<String>,
    transformations: BTreeSet<Transformation>,
    business_priority: BusinessPriority,
    migration_difficulty: MigrationDifficulty,
    description: String,
    extracted_statements: Vec<String>,
    platform_operations: BTreeSet<String>,
    data_sources: BTreeSet<String>,
    data_targets: BTreeSet<String>,
}

impl Asset {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Always within `1..=10`.
    #[must_use]
    pub fn complexity_score(&self) -> u8 {
        self.complexity_score
    }

    #[must_use]
    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    #[must_use]
    pub fn database_objects(&self) -> &BTreeSet<String> {
        &self.database_objects
    }

    #[must_use]
    pub fn transformations(&self) -> &BTreeSet<Transformation> {
        &self.transformations
    }

    #[must_use]
    pub fn business_priority(&self) -> BusinessPriority {
        self.business_priority
    }

    #[must_use]
    pub fn migration_difficulty(&self) -> MigrationDifficulty {
        self.migration_difficulty
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Statement fragments in pattern-table order, duplicates kept.
    #[must_use]
    pub fn extracted_statements(&self) -> &[String] {
        &self.extracted_statements
    }

    #[must_use]
    pub fn platform_operations(&self) -> &BTreeSet<String> {
        &self.platform_operations
    }

    #[must_use]
    pub fn data_sources(&self) -> &BTreeSet<String> {
        &self.data_sources
    }

    #[must_use]
    pub fn data_targets(&self) -> &BTreeSet<String> {
        &self.data_targets
    }
}

/// Every classification input for an asset, before the dependent fields exist.
///
/// `migration_difficulty` and `description` are only computed by [`AssetDraft::freeze`],
/// so an [`Asset`] is never observable with either unset.
#[derive(Debug, Clone)]
pub struct AssetDraft {
    pub(crate) path: PathBuf,
    pub(crate) asset_type: AssetType,
    pub(crate) name: String,
    pub(crate) size_bytes: u64,
    pub(crate) last_modified: DateTime<Utc>,
    pub(crate) language: Language,
    pub(crate) complexity_score: u8,
    pub(crate) dependencies: BTreeSet<String>,
    pub(crate) database_objects: BTreeSet<String>,
    pub(crate) transformations: BTreeSet<Transformation>,
    pub(crate) business_priority: BusinessPriority,
    pub(crate) extracted_statements: Vec<String>,
    pub(crate) platform_operations: BTreeSet<String>,
    pub(crate) data_sources: BTreeSet<String>,
    pub(crate) data_targets: BTreeSet<String>,
}

impl AssetDraft {
    /// Computes the dependent fields and freezes the record.
    #[must_use]
    pub fn freeze(self) -> Asset {
        let migration_difficulty = difficulty::classify(&DifficultySignals {
            complexity_score: self.complexity_score,
            language: self.language,
            has_platform_operations: !self.platform_operations.is_empty(),
            business_priority: self.business_priority,
        });
        let description = format!(
            "{} containing {} transformation types",
            self.asset_type.title(),
            self.transformations.len()
        );

        Asset {
            path: self.path,
            asset_type: self.asset_type,
            name: self.name,
            size_bytes: self.size_bytes,
            last_modified: self.last_modified,
            language: self.language,
            complexity_score: self.complexity_score,
            dependencies: self.dependencies,
            database_objects: self.database_objects,
            transformations: self.transformations,
            business_priority: self.business_priority,
            migration_difficulty,
            description,
            extracted_statements: self.extracted_statements,
            platform_operations: self.platform_operations,
            data_sources: self.data_sources,
            data_targets: self.data_targets,
        }
    }
}
