use crate::reporting::shared::{cell, duration, pluralize, rule};
use crate::types::{Inventory, MigrationDifficulty, ScanReport};
use colored::Colorize;
use std::fmt::Write;

const LABEL_WIDTH: usize = 28;
const TABLE_WIDTH: usize = 56;

/// Prints the inventory summary tables to stdout.
pub fn print_summary(report: &ScanReport) {
    print!("{}", render_summary(report));
}

/// Renders the summary tables as text.
#[must_use]
pub fn render_summary(report: &ScanReport) -> String {
    let inv = &report.inventory;
    let mut out = String::new();

    write_overview(&mut out, inv);
    write_by_type(&mut out, inv);
    write_difficulty(&mut out, inv);
    write_priority(&mut out, inv);
    write_dependencies(&mut out, inv);
    write_footer(&mut out, report);
    out
}

fn header(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title.bold().cyan());
    let _ = writeln!(out, "{}", rule(TABLE_WIDTH).dimmed());
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{} {value}", cell(label, LABEL_WIDTH));
}

fn write_overview(out: &mut String, inv: &Inventory) {
    header(out, "ETL Asset Discovery Summary");
    row(out, "Total assets", &inv.total_assets.to_string());
    row(
        out,
        "Total complexity score",
        &inv.total_complexity_score.to_string(),
    );
    row(
        out,
        "Critical dependencies",
        &inv.critical_dependencies.len().to_string(),
    );
}

fn write_by_type(out: &mut String, inv: &Inventory) {
    header(out, "Assets by Type");
    for (asset_type, count) in &inv.assets_by_type {
        let pct = inv.percentage_of(*count);
        row(out, asset_type.title(), &format!("{count:>5}  {pct:>5.1}%"));
    }
}

fn write_difficulty(out: &mut String, inv: &Inventory) {
    header(out, "Migration Difficulty");
    for (difficulty, count) in &inv.migration_summary {
        let label = format!("{difficulty} ({})", difficulty.risk_label());
        let colored_label = match difficulty {
            MigrationDifficulty::Easy => label.green(),
            MigrationDifficulty::Medium => label.yellow(),
            MigrationDifficulty::Hard => label.red(),
            MigrationDifficulty::Critical => label.red().bold(),
        };
        let _ = writeln!(
            out,
            "{}{} {count:>5}",
            colored_label,
            " ".repeat(LABEL_WIDTH.saturating_sub(label.len())),
        );
    }
}

fn write_priority(out: &mut String, inv: &Inventory) {
    header(out, "Business Priority");
    for (priority, count) in &inv.assets_by_priority {
        let name = priority.to_string();
        let shown = if priority.is_escalated() {
            name.red().bold()
        } else {
            name.normal()
        };
        let _ = writeln!(
            out,
            "{}{} {count:>5}  {}",
            shown,
            " ".repeat(LABEL_WIDTH.saturating_sub(name.len())),
            priority.context().dimmed()
        );
    }
}

fn write_dependencies(out: &mut String, inv: &Inventory) {
    header(out, "Critical Dependencies");
    if inv.critical_dependencies.is_empty() {
        let _ = writeln!(out, "{}", "none".dimmed());
        return;
    }
    for (rank, dep) in inv.critical_dependencies.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {dep}", rank + 1);
    }
}

fn write_footer(out: &mut String, report: &ScanReport) {
    let _ = writeln!(out);
    let elapsed = duration(report);
    let assets = report.inventory.total_assets;
    let _ = writeln!(
        out,
        "{} Classified {assets} {} in {elapsed:?}.",
        "OK".green().bold(),
        pluralize("asset", assets)
    );
    if report.has_skips() {
        let skipped = report.skipped.len();
        let _ = writeln!(
            out,
            "{} Skipped {skipped} unreadable {}.",
            "~".yellow().bold(),
            pluralize("file", skipped)
        );
    }
}
