//! Migration difficulty decision table.
//!
//! Rules run in a fixed order and later rules may overwrite earlier ones:
//! 1. base tier from the complexity score
//! 2. scala is always `Hard`
//! 3. sql without platform operations is `Easy`
//! 4. escalated priorities lift `Easy` to `Medium`
//!
//! Rule 3 applies even to a very large SQL file. That ordering is kept as is.

use crate::types::{BusinessPriority, Language, MigrationDifficulty};

/// The inputs the decision table looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultySignals {
    pub complexity_score: u8,
    pub language: Language,
    pub has_platform_operations: bool,
    pub business_priority: BusinessPriority,
}

#[must_use]
pub fn classify(signals: &DifficultySignals) -> MigrationDifficulty {
    let mut tier = base_tier(signals.complexity_score);

    if signals.language == Language::Scala {
        tier = MigrationDifficulty::Hard;
    }

    if signals.language == Language::Sql && !signals.has_platform_operations {
        tier = MigrationDifficulty::Easy;
    }

    if signals.business_priority.is_escalated() && tier == MigrationDifficulty::Easy {
        tier = MigrationDifficulty::Medium;
    }

    tier
}

/// Tier implied by the score alone.
#[must_use]
pub fn base_tier(score: u8) -> MigrationDifficulty {
    match score {
        8.. => MigrationDifficulty::Critical,
        6..=7 => MigrationDifficulty::Hard,
        4..=5 => MigrationDifficulty::Medium,
        _ => MigrationDifficulty::Easy,
    }
}
