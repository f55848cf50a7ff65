//! Aggregation of assets into the corpus inventory.
//! Counters are additive, so partial aggregators from different workers can be
//! merged in any order. Asset order is restored from discovery sequence numbers
//! at finalize time.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;

use crate::types::{Asset, AssetType, BusinessPriority, Inventory, Language, MigrationDifficulty};

/// How many dependency names make the critical list.
pub const CRITICAL_DEPENDENCY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct InventoryAggregator {
    entries: Vec<(usize, Asset)>,
    next_seq: usize,
    by_type: BTreeMap<AssetType, usize>,
    by_language: BTreeMap<Language, usize>,
    by_priority: BTreeMap<BusinessPriority, usize>,
    by_difficulty: BTreeMap<MigrationDifficulty, usize>,
    total_complexity: u64,
}

impl InventoryAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an asset after everything folded so far.
    pub fn fold(&mut self, asset: Asset) {
        let seq = self.next_seq;
        self.fold_at(seq, asset);
    }

    /// Appends an asset at an explicit discovery position.
    pub fn fold_at(&mut self, seq: usize, asset: Asset) {
        *self.by_type.entry(asset.asset_type()).or_insert(0) += 1;
        *self.by_language.entry(asset.language()).or_insert(0) += 1;
        *self.by_priority.entry(asset.business_priority()).or_insert(0) += 1;
        *self.by_difficulty.entry(asset.migration_difficulty()).or_insert(0) += 1;
        self.total_complexity += u64::from(asset.complexity_score());
        self.next_seq = self.next_seq.max(seq + 1);
        self.entries.push((seq, asset));
    }

    /// Adds another partial aggregator into this one.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        add_counts(&mut self.by_type, other.by_type);
        add_counts(&mut self.by_language, other.by_language);
        add_counts(&mut self.by_priority, other.by_priority);
        add_counts(&mut self.by_difficulty, other.by_difficulty);
        self.total_complexity += other.total_complexity;
        self.next_seq = self.next_seq.max(other.next_seq);
        self.entries.extend(other.entries);
        self
    }

    /// Restores discovery order, computes the dependency ranking, and freezes
    /// the result.
    #[must_use]
    pub fn finalize(mut self) -> Inventory {
        self.entries.sort_by_key(|(seq, _)| *seq);
        let assets: Vec<Asset> = self.entries.into_iter().map(|(_, a)| a).collect();

        Inventory {
            total_assets: assets.len(),
            assets_by_type: self.by_type,
            assets_by_language: self.by_language,
            assets_by_priority: self.by_priority,
            total_complexity_score: self.total_complexity,
            critical_dependencies: rank_dependencies(&assets, CRITICAL_DEPENDENCY_LIMIT),
            migration_summary: self.by_difficulty,
            discovered_assets: assets,
            extraction_timestamp: Utc::now(),
        }
    }
}

fn add_counts<K: Ord>(into: &mut BTreeMap<K, usize>, from: BTreeMap<K, usize>) {
    for (k, n) in from {
        *into.entry(k).or_insert(0) += n;
    }
}

/// Most referenced dependency names, ties broken by first appearance.
#[must_use]
pub fn rank_dependencies(assets: &[Asset], limit: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for dep in assets.iter().flat_map(|a| a.dependencies()) {
        let count = counts.entry(dep.as_str()).or_insert_with(|| {
            order.push(dep.as_str());
            0
        });
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order
        .into_iter()
        .map(|d| (d, counts.get(d).copied().unwrap_or(0)))
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(d, _)| d.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::worker::{AssetBuilder, SourceFile};
    use crate::triage::PriorityTable;

    fn asset(path: &str, content: &str) -> Asset {
        let table = PriorityTable::default();
        AssetBuilder::new(&table).build_source(SourceFile::from_text(path, content))
    }

    #[test]
    fn empty_aggregator_finalizes_to_empty_inventory() {
        let inv = InventoryAggregator::new().finalize();
        assert!(inv.is_empty());
        assert!(inv.critical_dependencies.is_empty());
        assert!(inv.assets_by_type.is_empty());
        assert_eq!(inv.total_complexity_score, 0);
    }

    #[test]
    fn fold_counts_every_dimension() {
        let mut agg = InventoryAggregator::new();
        agg.fold(asset("/a.sql", "select * from t"));
        agg.fold(asset("/b.py", "import os"));
        agg.fold(asset("/c.sql", "select * from u"));

        let inv = agg.finalize();
        assert_eq!(inv.total_assets, 3);
        assert_eq!(inv.assets_by_type.get(&AssetType::Sql), Some(&2));
        assert_eq!(inv.assets_by_type.get(&AssetType::Script), Some(&1));
        assert_eq!(inv.assets_by_language.get(&Language::Python), Some(&1));
        assert_eq!(inv.assets_by_priority.get(&BusinessPriority::Medium), Some(&3));
        assert_eq!(inv.migration_summary.get(&MigrationDifficulty::Easy), Some(&3));
        assert_eq!(inv.total_complexity_score, 3);
    }

    #[test]
    fn merge_restores_discovery_order() {
        let mut left = InventoryAggregator::new();
        let mut right = InventoryAggregator::new();
        right.fold_at(1, asset("/second.sql", ""));
        left.fold_at(2, asset("/third.sql", ""));
        right.fold_at(0, asset("/first.sql", ""));

        let inv = left.merge(right).finalize();
        let names: Vec<&str> = inv.discovered_assets.iter().map(Asset::name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn fold_after_merge_appends_at_end() {
        let mut left = InventoryAggregator::new();
        left.fold_at(4, asset("/e.sql", ""));
        let mut agg = left.merge(InventoryAggregator::new());
        agg.fold(asset("/f.sql", ""));
        let inv = agg.finalize();
        assert_eq!(inv.discovered_assets.last().map(Asset::name), Some("f"));
    }

    #[test]
    fn ranking_breaks_ties_by_first_seen() {
        let assets = vec![
            asset("/1.sql", "select * from zeta"),
            asset("/2.sql", "select * from alpha"),
            asset("/3.sql", "select * from alpha join x; select * from zeta"),
            asset("/4.sql", "select * from mid"),
        ];
        let ranked = rank_dependencies(&assets, 10);
        assert_eq!(ranked, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn ranking_is_limited() {
        let assets: Vec<Asset> = (0..15)
            .map(|i| asset(&format!("/{i}.sql"), &format!("select * from t{i:02}")))
            .collect();
        let ranked = rank_dependencies(&assets, CRITICAL_DEPENDENCY_LIMIT);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked.first().map(String::as_str), Some("t00"));
        assert_eq!(ranked.last().map(String::as_str), Some("t09"));
    }
}
