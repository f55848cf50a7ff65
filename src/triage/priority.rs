//! Keyword-driven business priority.
//!
//! The table is an ordered list, scanned top to bottom. The first keyword found
//! (case-insensitive substring of the path or the content) decides the tier.
//! Two keywords can appear in the same file, so reordering the table changes
//! results.

use serde::{Deserialize, Serialize};

use crate::types::BusinessPriority;

/// Tier used when no keyword matches.
pub const DEFAULT_PRIORITY: BusinessPriority = BusinessPriority::Medium;

/// One `(keyword, tier)` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRule {
    pub keyword: String,
    pub tier: BusinessPriority,
}

impl PriorityRule {
    #[must_use]
    pub fn new(keyword: &str, tier: BusinessPriority) -> Self {
        Self {
            keyword: keyword.to_string(),
            tier,
        }
    }
}

/// Built-in table. Order matters: the first matching keyword wins.
#[must_use]
pub fn default_rules() -> Vec<PriorityRule> {
    vec![
        PriorityRule::new("paymentez", BusinessPriority::Critical),
        PriorityRule::new("mazooma", BusinessPriority::HighRisk),
        PriorityRule::new("simplex", BusinessPriority::High),
        PriorityRule::new("safecharge", BusinessPriority::High),
    ]
}

/// Ordered keyword table with keywords normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    rules: Vec<PriorityRule>,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl PriorityTable {
    /// Builds a table, preserving the given order.
    #[must_use]
    pub fn new(rules: Vec<PriorityRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| PriorityRule {
                keyword: r.keyword.to_lowercase(),
                tier: r.tier,
            })
            .collect();
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[PriorityRule] {
        &self.rules
    }

    /// Returns the tier of the first keyword present in `path` or `content`.
    #[must_use]
    pub fn classify(&self, path: &str, content: &str) -> BusinessPriority {
        let path = path.to_lowercase();
        let content = content.to_lowercase();

        self.rules
            .iter()
            .find(|r| path.contains(&r.keyword) || content.contains(&r.keyword))
            .map_or(DEFAULT_PRIORITY, |r| r.tier)
    }
}
