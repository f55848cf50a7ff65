// src/analysis/mod.rs
//! Per-file classification and corpus aggregation.

pub mod aggregator;
pub mod engine;
pub mod extract;
pub mod metrics;
pub mod patterns;
pub mod worker;

pub use aggregator::InventoryAggregator;
pub use engine::Engine;
pub use worker::{AssetBuilder, SourceFile};
