// src/analysis/extract.rs
//! Feature extraction over raw file text.
//!
//! Four independent extractions, each driven by a table in [`super::patterns`].
//! All functions are total: any input produces a (possibly empty) result.

use std::collections::BTreeSet;

use regex::Regex;

use super::patterns::{
    ObjectRole, DATABASE_OBJECT_RULES, IMPORT_RULES, PLATFORM_RULES, STATEMENT_RULES,
    TABLE_REFERENCE_RULES, TRANSFORMATION_RULES,
};
use crate::types::{Language, Transformation};

/// Everything the extractor pulls out of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    pub dependencies: BTreeSet<String>,
    pub objects: DatabaseObjects,
    pub transformations: BTreeSet<Transformation>,
    pub statements: Vec<String>,
    pub platform: PlatformScan,
}

/// Referenced tables and views, split by role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseObjects {
    pub all: BTreeSet<String>,
    pub sources: BTreeSet<String>,
    pub targets: BTreeSet<String>,
}

/// Platform-operation markers found in a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformScan {
    /// Distinct matched texts.
    pub operations: BTreeSet<String>,
    /// Total matches across all markers, overlaps included.
    pub match_count: usize,
}

/// Runs every extraction over `content`.
#[must_use]
pub fn extract(content: &str, language: Language) -> Features {
    Features {
        dependencies: dependencies(content, language),
        objects: database_objects(content),
        transformations: transformations(content),
        statements: statements(content),
        platform: platform_operations(content),
    }
}

/// Module imports (python only) plus table/view references (all languages).
#[must_use]
pub fn dependencies(content: &str, language: Language) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();

    if language == Language::Python {
        for re in IMPORT_RULES.iter() {
            deps.extend(first_captures(re, content));
        }
    }

    for re in TABLE_REFERENCE_RULES.iter() {
        deps.extend(first_captures(re, content));
    }

    deps
}

/// Table and view identifiers with quote characters stripped.
#[must_use]
pub fn database_objects(content: &str) -> DatabaseObjects {
    let mut objects = DatabaseObjects::default();

    for rule in DATABASE_OBJECT_RULES.iter() {
        for raw in first_captures(&rule.regex, content) {
            let name = strip_quotes(&raw);
            if name.is_empty() {
                continue;
            }
            match rule.tag {
                ObjectRole::Source => objects.sources.insert(name.to_string()),
                ObjectRole::Target => objects.targets.insert(name.to_string()),
            };
            objects.all.insert(name.to_string());
        }
    }

    objects
}

/// Categories with at least one matching alternative.
#[must_use]
pub fn transformations(content: &str) -> BTreeSet<Transformation> {
    TRANSFORMATION_RULES
        .iter()
        .filter(|(_, alts)| alts.iter().any(|re| re.is_match(content)))
        .map(|(tag, _)| *tag)
        .collect()
}

/// Statement fragments in table order, duplicates kept.
#[must_use]
pub fn statements(content: &str) -> Vec<String> {
    STATEMENT_RULES
        .iter()
        .flat_map(|rule| rule.regex.find_iter(content))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Matched platform markers and their total match count.
#[must_use]
pub fn platform_operations(content: &str) -> PlatformScan {
    let mut scan = PlatformScan::default();
    for re in PLATFORM_RULES.iter() {
        for m in re.find_iter(content) {
            scan.match_count += 1;
            scan.operations.insert(m.as_str().to_string());
        }
    }
    scan
}

fn first_captures<'a>(re: &'a Regex, content: &'a str) -> impl Iterator<Item = String> + 'a {
    re.captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn strip_quotes(raw: &str) -> &str {
    raw.trim_matches(|c| c == '`' || c == '"')
}
