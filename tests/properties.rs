//! Property-based tests for scoring, classification, and aggregation.

use assetscout_core::analysis::metrics::{complexity_score, MAX_SCORE, MIN_SCORE};
use assetscout_core::analysis::{AssetBuilder, InventoryAggregator, SourceFile};
use assetscout_core::file_class;
use assetscout_core::triage::PriorityTable;
use assetscout_core::types::{Asset, Language, MigrationDifficulty};
use proptest::prelude::*;
use std::path::Path;

const LANGUAGES: &[Language] = &[
    Language::Python,
    Language::Sql,
    Language::Scala,
    Language::R,
    Language::Notebook,
    Language::Config,
    Language::Unknown,
];

/// Small corpus of varied files to fold in different orders.
const CORPUS: &[(&str, &str)] = &[
    ("/etl/paymentez/load.sql", "INSERT INTO ledger SELECT * FROM raw JOIN fx"),
    ("/etl/jobs/clean.py", "from pyspark.sql import functions\ndf.groupBy('a').agg(x)"),
    ("/etl/jobs/Job.scala", "import org.apache.spark.SparkContext"),
    ("/etl/conf/app.yaml", "source: mazooma"),
    ("/etl/report.sql", "SELECT COUNT(*) FROM orders GROUP BY region"),
    ("/etl/nb/explore.ipynb", "{\"cells\": []}"),
    ("/etl/r/model.r", "library(simplex)"),
];

fn asset(index: usize) -> Asset {
    let table = PriorityTable::default();
    let (path, content) = CORPUS[index];
    AssetBuilder::new(&table).build_source(SourceFile::from_text(path, content))
}

fn fold(order: &[usize]) -> assetscout_core::types::Inventory {
    let mut agg = InventoryAggregator::new();
    for &i in order {
        agg.fold(asset(i));
    }
    agg.finalize()
}

proptest! {
    #[test]
    fn score_is_always_in_range(
        content in ".{0,400}",
        lang in 0usize..7,
        platform_matches in 0usize..100,
    ) {
        let score = complexity_score(&content, LANGUAGES[lang], platform_matches);
        prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
    }

    #[test]
    fn classifier_is_total(name in "[a-zA-Z0-9_]{0,12}(\\.[a-zA-Z]{0,6})?", content in "\\PC{0,200}") {
        let table = PriorityTable::default();
        let path = format!("/corpus/{name}");
        let (_, language) = file_class::classify(Path::new(&path), &content);
        let built = AssetBuilder::new(&table).build_source(SourceFile::from_text(path, content));
        prop_assert_eq!(built.language(), language);
        prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&built.complexity_score()));
    }

    #[test]
    fn scala_extension_is_hard(stem in "[a-z]{1,10}", content in "\\PC{0,200}") {
        let table = PriorityTable::default();
        let path = format!("/src/{stem}.scala");
        let built = AssetBuilder::new(&table).build_source(SourceFile::from_text(path, content));
        prop_assert_eq!(built.migration_difficulty(), MigrationDifficulty::Hard);
    }

    #[test]
    fn fold_order_does_not_change_counters(
        (order, shuffled) in prop::collection::vec(0usize..CORPUS.len(), 1..16)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = fold(&order);
        let b = fold(&shuffled);
        prop_assert_eq!(a.total_assets, b.total_assets);
        prop_assert_eq!(a.total_complexity_score, b.total_complexity_score);
        prop_assert_eq!(a.assets_by_type, b.assets_by_type);
        prop_assert_eq!(a.assets_by_language, b.assets_by_language);
        prop_assert_eq!(a.assets_by_priority, b.assets_by_priority);
        prop_assert_eq!(a.migration_summary, b.migration_summary);
    }

    #[test]
    fn paymentez_path_is_critical(prefix in "[a-z]{0,8}", case in 0usize..3) {
        let keyword = match case {
            0 => "paymentez",
            1 => "PAYMENTEZ",
            _ => "PayMentez",
        };
        let table = PriorityTable::default();
        let path = format!("/data/{prefix}{keyword}/job.py");
        let built = AssetBuilder::new(&table).build_source(SourceFile::from_text(path, "x = 1"));
        prop_assert_eq!(
            built.business_priority(),
            assetscout_core::types::BusinessPriority::Critical
        );
    }
}
