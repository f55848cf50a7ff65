// src/cli/progress.rs
//! Terminal progress for the scan phase.
//!
//! Drawn on stderr. indicatif hides the bar on its own when stderr is not a
//! terminal, so piped and CI runs stay clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const TEMPLATE_SCAN: &str = "{spinner} {msg} {bar:30} {pos}/{len} files ({percent}%) - {eta}";

/// Builds the bar for `total` files. `quiet` yields a hidden bar.
#[must_use]
pub fn scan_bar(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::default_bar()
        .template(TEMPLATE_SCAN)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░  ");
    let pb = ProgressBar::new(total).with_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Advances the bar past one analyzed file.
pub fn tick(pb: &ProgressBar, path: &Path) {
    if let Some(name) = path.file_name() {
        pb.set_message(name.to_string_lossy().into_owned());
    }
    pb.inc(1);
}
