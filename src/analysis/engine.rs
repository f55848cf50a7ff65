//! Main execution logic for the asset discovery engine.
//! Unified entry point for all scanning operations.

use std::path::{Path, PathBuf};

use rayon::prelude::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info, warn};

use super::aggregator::InventoryAggregator;
use super::worker::AssetBuilder;
use crate::config::Config;
use crate::types::{ScanReport, SkippedFile};

/// The main analysis engine.
/// Builds one asset per file in parallel and folds them into an inventory.
pub struct Engine {
    config: Config,
}

/// Per-worker state: a partial inventory plus the files it had to skip.
#[derive(Default)]
struct Partial {
    aggregator: InventoryAggregator,
    skipped: Vec<(usize, SkippedFile)>,
}

impl Partial {
    fn merge(mut self, other: Self) -> Self {
        self.aggregator = self.aggregator.merge(other.aggregator);
        self.skipped.extend(other.skipped);
        self
    }
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans files in discovery order without progress callbacks.
    #[must_use]
    pub fn scan<I>(&self, paths: I) -> ScanReport
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.scan_with_progress(paths, &|_: &Path| {})
    }

    /// Entry point for scanning files with a per-file progress callback.
    pub fn scan_with_progress<I, F>(&self, paths: I, on_progress: &F) -> ScanReport
    where
        I: IntoIterator<Item = PathBuf>,
        F: Fn(&Path) + Sync,
    {
        let start = std::time::Instant::now();
        let files: Vec<PathBuf> = paths.into_iter().collect();
        info!(files = files.len(), "Classifying candidate files");

        let partial = match self.config.jobs {
            Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(|| self.classify_all(&files, on_progress)),
                Err(e) => {
                    warn!(jobs = n, error = %e, "Could not build worker pool, using global pool");
                    self.classify_all(&files, on_progress)
                }
            },
            None => self.classify_all(&files, on_progress),
        };

        let mut skipped = partial.skipped;
        skipped.sort_by_key(|(seq, _)| *seq);

        let inventory = partial.aggregator.finalize();
        info!(
            assets = inventory.total_assets,
            skipped = skipped.len(),
            total_complexity = inventory.total_complexity_score,
            "Inventory finalized"
        );

        ScanReport {
            inventory,
            skipped: skipped.into_iter().map(|(_, s)| s).collect(),
            duration_ms: start.elapsed().as_millis(),
        }
    }

    fn classify_all<F>(&self, files: &[PathBuf], on_progress: &F) -> Partial
    where
        F: Fn(&Path) + Sync,
    {
        let builder = AssetBuilder::new(&self.config.priorities);

        files
            .par_iter()
            .enumerate()
            .fold(Partial::default, |mut partial, (seq, path)| {
                on_progress(path);
                match builder.build(path) {
                    Ok(asset) => {
                        debug!(
                            path = %path.display(),
                            language = %asset.language(),
                            score = asset.complexity_score(),
                            difficulty = %asset.migration_difficulty(),
                            "Classified"
                        );
                        partial.aggregator.fold_at(seq, asset);
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Skipping file");
                        partial.skipped.push((
                            seq,
                            SkippedFile {
                                path: path.clone(),
                                reason: e.to_string(),
                            },
                        ));
                    }
                }
                partial
            })
            .reduce(Partial::default, Partial::merge)
    }
}
