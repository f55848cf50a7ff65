use crate::types::ScanReport;
use std::time::Duration;

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn duration(report: &ScanReport) -> Duration {
    let ms = u64::try_from(report.duration_ms).unwrap_or(u64::MAX);
    Duration::from_millis(ms)
}

/// Pads a label to a fixed column width.
pub(crate) fn cell(label: &str, width: usize) -> String {
    format!("{label:<width$}")
}

pub(crate) fn rule(width: usize) -> String {
    "-".repeat(width)
}
