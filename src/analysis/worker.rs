//! Worker module: turns one file into one [`Asset`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::{extract, metrics};
use crate::error::{Result, ScoutError};
use crate::file_class;
use crate::triage::PriorityTable;
use crate::types::{Asset, AssetDraft};

/// A file's decoded text and metadata.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub last_modified: DateTime<Utc>,
    pub content: String,
}

impl SourceFile {
    /// Reads metadata and content from disk.
    ///
    /// Content is decoded with [`decode_text`], which never fails.
    ///
    /// # Errors
    /// Returns error if the file cannot be stat'ed or read.
    pub fn read(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| ScoutError::io(e, path))?;
        let modified = metadata.modified().map_err(|e| ScoutError::io(e, path))?;
        let bytes = fs::read(path).map_err(|e| ScoutError::io(e, path))?;
        let content = decode_text(&bytes);
        let absolute = std::path::absolute(path).map_err(|e| ScoutError::io(e, path))?;

        Ok(Self {
            name: file_stem(&absolute),
            path: absolute,
            size_bytes: metadata.len(),
            last_modified: DateTime::<Utc>::from(modified),
            content,
        })
    }

    /// Wraps in-memory text. Metadata is derived from the text itself.
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let content = content.into();
        Self {
            name: file_stem(&path),
            size_bytes: content.len() as u64,
            last_modified: DateTime::<Utc>::default(),
            path,
            content,
        }
    }
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Best-effort decoding.
///
/// A UTF-16 byte-order mark selects UTF-16, as written by SQL Server exports.
/// Everything else is read as UTF-8. Invalid sequences are dropped and NUL
/// bytes are kept.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF16LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// A trailing odd byte and unpaired surrogates are dropped.
fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units).filter_map(|c| c.ok()).collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Runs the classification pipeline for single files.
#[derive(Debug, Clone, Copy)]
pub struct AssetBuilder<'a> {
    priorities: &'a PriorityTable,
}

impl<'a> AssetBuilder<'a> {
    #[must_use]
    pub fn new(priorities: &'a PriorityTable) -> Self {
        Self { priorities }
    }

    /// Reads and classifies one file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, stat'ed, or decoded.
    pub fn build(&self, path: &Path) -> Result<Asset> {
        let source = SourceFile::read(path)?;
        Ok(self.build_source(source))
    }

    /// Classifies already-loaded source text.
    #[must_use]
    pub fn build_source(&self, source: SourceFile) -> Asset {
        self.draft(source).freeze()
    }

    /// Computes every classification input, leaving dependent fields to `freeze`.
    #[must_use]
    pub fn draft(&self, source: SourceFile) -> AssetDraft {
        let SourceFile {
            path,
            name,
            size_bytes,
            last_modified,
            content,
        } = source;

        let (asset_type, language) = file_class::classify(&path, &content);
        let features = extract::extract(&content, language);
        let complexity_score =
            metrics::complexity_score(&content, language, features.platform.match_count);
        let business_priority = self
            .priorities
            .classify(&path.to_string_lossy(), &content);

        AssetDraft {
            path,
            asset_type,
            name,
            size_bytes,
            last_modified,
            language,
            complexity_score,
            dependencies: features.dependencies,
            database_objects: features.objects.all,
            transformations: features.transformations,
            business_priority,
            extracted_statements: features.statements,
            platform_operations: features.platform.operations,
            data_sources: features.objects.sources,
            data_targets: features.objects.targets,
        }
    }
}
