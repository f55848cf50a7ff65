// src/analysis/patterns.rs
//! Built-in pattern tables for feature extraction.
//!
//! Each table is an ordered slice of `(tag, pattern)` pairs, compiled once on
//! first use. Order is significant wherever output order is: statements are
//! emitted in table order, transformation categories are checked in table order.
//! Case-insensitivity and dot-all are expressed as inline flags so every table
//! entry is self-describing.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Transformation;

/// A compiled pattern with its semantic tag.
#[derive(Debug)]
pub struct Rule<T> {
    pub tag: T,
    pub regex: Regex,
}

/// Whether a referenced database object is read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectRole {
    Source,
    Target,
}

/// Shape of an embedded SQL statement fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Create,
    Insert,
    Select,
    Update,
    Delete,
    With,
    Merge,
}

// === DEPENDENCIES ===

/// Python imports. Case-sensitive; only applied to python-classified content.
pub const IMPORT_PATTERNS: &[&str] = &[
    r"import\s+(\w+(?:\.\w+)*)",
    r"from\s+(\w+(?:\.\w+)*)\s+import",
];

/// Table and view references. Applied to every language.
pub const TABLE_REFERENCE_PATTERNS: &[&str] = &[
    r"(?i)FROM\s+(\w+(?:\.\w+)*)",
    r"(?i)INTO\s+(\w+(?:\.\w+)*)",
    r"(?i)TABLE\s+(\w+(?:\.\w+)*)",
    r"(?i)VIEW\s+(\w+(?:\.\w+)*)",
];

// === DATABASE OBJECTS ===

/// Possibly quoted, possibly dotted identifiers. Quotes are stripped after capture.
pub const DATABASE_OBJECT_PATTERNS: &[(ObjectRole, &str)] = &[
    (ObjectRole::Source, r#"(?i)FROM\s+([`"]?\w+(?:\.\w+)*[`"]?)"#),
    (ObjectRole::Source, r#"(?i)JOIN\s+([`"]?\w+(?:\.\w+)*[`"]?)"#),
    (ObjectRole::Target, r#"(?i)INTO\s+([`"]?\w+(?:\.\w+)*[`"]?)"#),
    (ObjectRole::Target, r#"(?i)UPDATE\s+([`"]?\w+(?:\.\w+)*[`"]?)"#),
    (
        ObjectRole::Target,
        r#"(?i)CREATE\s+(?:OR\s+REPLACE\s+)?(?:TABLE|VIEW)\s+([`"]?\w+(?:\.\w+)*[`"]?)"#,
    ),
    (
        ObjectRole::Target,
        r#"(?i)INSERT\s+(?:INTO|OVERWRITE)\s+([`"]?\w+(?:\.\w+)*[`"]?)"#,
    ),
];

// === TRANSFORMATIONS ===

/// A category is present if any alternative matches anywhere.
pub const TRANSFORMATION_PATTERNS: &[(Transformation, &[&str])] = &[
    (
        Transformation::Aggregation,
        &[
            r"(?i)GROUP\s+BY",
            r"(?i)SUM\(",
            r"(?i)COUNT\(",
            r"(?i)AVG\(",
            r"(?i)MAX\(",
            r"(?i)MIN\(",
            r"(?i)\.agg\(",
        ],
    ),
    (Transformation::Join, &[r"(?i)JOIN", r"(?i)\.join\("]),
    (
        Transformation::Filter,
        &[
            r"(?i)WHERE",
            r"(?i)HAVING",
            r"(?i)\.filter\(",
            r"(?i)\.where\(",
        ],
    ),
    (
        Transformation::Window,
        &[
            r"(?i)OVER\s*\(",
            r"(?i)ROW_NUMBER\(\)",
            r"(?i)RANK\(\)",
            r"(?i)DENSE_RANK\(\)",
        ],
    ),
    (
        Transformation::Pivot,
        &[r"(?i)PIVOT", r"(?i)UNPIVOT", r"(?i)\.pivot\("],
    ),
    (
        Transformation::Union,
        &[r"(?i)UNION", r"(?i)\.union\(", r"(?i)\.unionAll\("],
    ),
    (Transformation::Distinct, &[r"(?i)DISTINCT", r"(?i)\.distinct\("]),
    (
        Transformation::Sort,
        &[r"(?i)ORDER\s+BY", r"(?i)\.sort\(", r"(?i)\.orderBy\("],
    ),
];

// === STATEMENTS ===

/// SQL statement shapes, matched across lines.
pub const STATEMENT_PATTERNS: &[(StatementKind, &str)] = &[
    (
        StatementKind::Create,
        r"(?is)CREATE\s+(?:OR\s+REPLACE\s+)?(?:TEMP\s+|TEMPORARY\s+)?(?:VIEW|TABLE)",
    ),
    (StatementKind::Insert, r"(?is)INSERT\s+(?:INTO|OVERWRITE)"),
    (StatementKind::Select, r"(?is)SELECT\s+.+?\s+FROM"),
    (StatementKind::Update, r"(?is)UPDATE\s+.+?\s+SET"),
    (StatementKind::Delete, r"(?is)DELETE\s+FROM"),
    (StatementKind::With, r"(?is)WITH\s+\w+\s+AS"),
    (StatementKind::Merge, r"(?is)MERGE\s+INTO"),
];

// === PLATFORM OPERATIONS ===

/// Spark dataframe API markers. Overlaps (`spark.` / `spark.sql`) are intended:
/// every match counts toward the complexity bonus.
pub const PLATFORM_PATTERNS: &[&str] = &[
    r"(?i)spark\.",
    r"(?i)\.sql\(",
    r"(?i)\.createOrReplaceTempView\(",
    r"(?i)\.write\.",
    r"(?i)\.read\.",
    r"(?i)DataFrame",
    r"(?i)pyspark",
    r"(?i)from pyspark",
    r"(?i)spark\.sql",
    r"(?i)\.cache\(\)",
    r"(?i)\.persist\(\)",
    r"(?i)\.join\(",
    r"(?i)\.groupBy\(",
    r"(?i)\.agg\(",
    r"(?i)\.select\(",
    r"(?i)\.filter\(",
    r"(?i)\.where\(",
];

// --- Compiled tables ---

pub static IMPORT_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(IMPORT_PATTERNS));

pub static TABLE_REFERENCE_RULES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(TABLE_REFERENCE_PATTERNS));

pub static DATABASE_OBJECT_RULES: LazyLock<Vec<Rule<ObjectRole>>> =
    LazyLock::new(|| compile_tagged(DATABASE_OBJECT_PATTERNS));

pub static TRANSFORMATION_RULES: LazyLock<Vec<(Transformation, Vec<Regex>)>> =
    LazyLock::new(|| {
        TRANSFORMATION_PATTERNS
            .iter()
            .map(|(tag, alts)| (*tag, compile_all(alts)))
            .collect()
    });

pub static STATEMENT_RULES: LazyLock<Vec<Rule<StatementKind>>> =
    LazyLock::new(|| compile_tagged(STATEMENT_PATTERNS));

pub static PLATFORM_RULES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(PLATFORM_PATTERNS));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid built-in pattern {pattern:?}: {e}"))
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile(p)).collect()
}

fn compile_tagged<T: Copy>(table: &[(T, &str)]) -> Vec<Rule<T>> {
    table
        .iter()
        .map(|(tag, p)| Rule {
            tag: *tag,
            regex: compile(p),
        })
        .collect()
}
