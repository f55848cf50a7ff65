use crate::types::Inventory;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the inventory as pretty JSON, creating parent directories.
///
/// # Errors
/// Returns error if directories can't be created, serialization fails, or the
/// file can't be written.
pub fn save_inventory(inventory: &Inventory, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = to_json(inventory)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Serializes the inventory as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(inventory: &Inventory) -> Result<String> {
    serde_json::to_string_pretty(inventory).context("Failed to serialize inventory")
}

/// Prints the inventory as pretty JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(inventory: &Inventory) -> Result<()> {
    println!("{}", to_json(inventory)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregator::InventoryAggregator;
    use crate::analysis::worker::{AssetBuilder, SourceFile};
    use crate::triage::PriorityTable;
    use tempfile::TempDir;

    fn inventory() -> Inventory {
        let table = PriorityTable::default();
        let mut agg = InventoryAggregator::new();
        agg.fold(
            AssetBuilder::new(&table)
                .build_source(SourceFile::from_text("/x/mazooma_load.sql", "select * from ledger")),
        );
        agg.finalize()
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("results").join("nested").join("inv.json");

        let written = save_inventory(&inventory(), &target).unwrap();
        assert_eq!(written, target);

        let text = fs::read_to_string(&target).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total_assets"], 1);
        assert_eq!(value["assets_by_priority"]["HIGH_RISK"], 1);
        assert_eq!(value["migration_summary"]["medium"], 1);
        assert_eq!(value["discovered_assets"][0]["language"], "sql");
    }

    #[test]
    fn save_into_a_file_path_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        assert!(save_inventory(&inventory(), &blocker.join("inv.json")).is_err());
    }
}
