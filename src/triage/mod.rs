//! Migration triage: business priority and migration difficulty.

pub mod difficulty;
pub mod priority;

pub use difficulty::DifficultySignals;
pub use priority::{PriorityRule, PriorityTable};
