// src/file_class.rs
//! File classification: works out what role a file plays in an ETL corpus
//! and which language it is written in.
//!
//! `AssetType` is a pure function of the extension. `Language` falls back to
//! content markers when the extension is not in the lookup table. Detection is
//! substring based, so a script that merely mentions `SELECT` in a string will
//! be called SQL. That is accepted.

use std::path::Path;

use crate::types::{AssetType, Language};

/// Content markers that identify an unmapped file as a Spark Python script.
const PYTHON_MARKERS: &[&str] = &["import pyspark", "from pyspark", "spark.sql"];

/// Uppercase keywords that identify an unmapped file as SQL.
const SQL_KEYWORDS: &[&str] = &["SELECT", "CREATE TABLE", "INSERT INTO"];

/// Literal marker for Scala Spark sources.
const SCALA_MARKER: &str = "import org.apache.spark";

/// Classifies a file into `(AssetType, Language)`.
#[must_use]
pub fn classify(path: &Path, content: &str) -> (AssetType, Language) {
    (asset_type(path), detect_language(path, content))
}

/// Derives the asset type from the extension alone.
#[must_use]
pub fn asset_type(path: &Path) -> AssetType {
    match extension(path).as_str() {
        "ipynb" => AssetType::Notebook,
        "sql" => AssetType::Sql,
        "json" | "yaml" | "yml" => AssetType::Config,
        _ => AssetType::Script,
    }
}

/// Determines the source language.
///
/// Decision order:
/// 1. Extension lookup → specific language
/// 2. Spark Python markers (case-insensitive) → `Python`
/// 3. SQL keywords (uppercased content) → `Sql`
/// 4. Scala Spark import (literal) → `Scala`
/// 5. `Unknown`
#[must_use]
pub fn detect_language(path: &Path, content: &str) -> Language {
    if let Some(lang) = language_by_ext(&extension(path)) {
        return lang;
    }
    language_by_content(content)
}

fn language_by_ext(ext: &str) -> Option<Language> {
    match ext {
        "py" => Some(Language::Python),
        "sql" => Some(Language::Sql),
        "scala" => Some(Language::Scala),
        "r" => Some(Language::R),
        "ipynb" => Some(Language::Notebook),
        "json" | "yaml" | "yml" => Some(Language::Config),
        _ => None,
    }
}

fn language_by_content(content: &str) -> Language {
    let lower = content.to_lowercase();
    if PYTHON_MARKERS.iter().any(|m| lower.contains(m)) {
        return Language::Python;
    }

    let upper = content.to_uppercase();
    if SQL_KEYWORDS.iter().any(|k| upper.contains(k)) {
        return Language::Sql;
    }

    if content.contains(SCALA_MARKER) {
        return Language::Scala;
    }

    Language::Unknown
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}
