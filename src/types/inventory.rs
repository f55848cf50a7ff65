//! The finalized, read-only corpus summary.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Asset, AssetType, BusinessPriority, Language, MigrationDifficulty};

/// Corpus-wide summary of one run. Produced by
/// [`InventoryAggregator::finalize`](crate::analysis::aggregator::InventoryAggregator::finalize).
///
/// Counter maps iterate in enum declaration order (e.g. Notebook, Script,
/// Sql, Config for types), so reports are stable between runs.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    pub total_assets: usize,
    pub assets_by_type: BTreeMap<AssetType, usize>,
    pub assets_by_language: BTreeMap<Language, usize>,
    pub assets_by_priority: BTreeMap<BusinessPriority, usize>,
    pub total_complexity_score: u64,
    /// Top ten dependency names by reference count, ties in first-seen order.
    pub critical_dependencies: Vec<String>,
    pub migration_summary: BTreeMap<MigrationDifficulty, usize>,
    /// Assets in discovery order.
    pub discovered_assets: Vec<Asset>,
    pub extraction_timestamp: DateTime<Utc>,
}

impl Inventory {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_assets == 0
    }

    /// Share of all assets represented by `count`, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage_of(&self, count: usize) -> f64 {
        if self.total_assets == 0 {
            return 0.0;
        }
        (count as f64 / self.total_assets as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_counters_serialize_in_declaration_order() {
        let mut assets_by_type = BTreeMap::new();
        for (kind, n) in [
            (AssetType::Config, 1),
            (AssetType::Sql, 2),
            (AssetType::Script, 3),
            (AssetType::Notebook, 4),
        ] {
            assets_by_type.insert(kind, n);
        }
        let inventory = Inventory {
            total_assets: 10,
            assets_by_type,
            assets_by_language: BTreeMap::new(),
            assets_by_priority: BTreeMap::new(),
            total_complexity_score: 0,
            critical_dependencies: Vec::new(),
            migration_summary: BTreeMap::new(),
            discovered_assets: Vec::new(),
            extraction_timestamp: Utc::now(),
        };

        let keys: Vec<AssetType> = inventory.assets_by_type.keys().copied().collect();
        assert_eq!(
            keys,
            vec![AssetType::Notebook, AssetType::Script, AssetType::Sql, AssetType::Config]
        );
        let json = serde_json::to_string(&inventory).unwrap();
        assert!(json.contains(r#""assets_by_type":{"notebook":4,"script":3,"sql":2,"config":1}"#));
    }
}
