// tests/cli_exit.rs - Exit code tests
// Runs the binary in a temp directory so no stray `assetscout.toml` is picked up.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn workspace() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    let etl = dir.path().join("etl");
    fs::create_dir_all(&etl).expect("failed to create etl dir");
    fs::write(etl.join("orders.sql"), "SELECT * FROM orders JOIN customers ON 1 = 1;")
        .expect("failed to write orders.sql");
    fs::write(etl.join("simplex_load.py"), "import pandas\n").expect("failed to write py");
    dir
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_assetscout"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute assetscout")
}

#[test]
fn test_exit_0_scan_writes_default_report() {
    let dir = workspace();
    let out = run(&dir, &["scan", "etl"]);
    assert_eq!(out.status.code(), Some(0));

    let report = dir.path().join("results").join("etl_asset_inventory.json");
    let text = fs::read_to_string(report).expect("report missing");
    let value: serde_json::Value = serde_json::from_str(&text).expect("report is not JSON");
    assert_eq!(value["total_assets"], 2);
}

#[test]
fn test_exit_0_json_no_save() {
    let dir = workspace();
    let out = run(&dir, &["scan", "etl", "--json", "--no-save"]);
    assert_eq!(out.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is not valid JSON");
    assert_eq!(value["assets_by_priority"]["HIGH"], 1);
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_exit_1_classify_missing_file() {
    let dir = workspace();
    let out = run(&dir, &["classify", "etl/nope.sql"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_exit_2_missing_config() {
    let dir = workspace();
    let out = run(&dir, &["scan", "etl", "--config", "missing.toml"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_exit_2_bad_extension() {
    let dir = workspace();
    let out = run(&dir, &["scan", "etl", "--ext", "sql", "--no-save"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_exit_3_unwritable_report() {
    let dir = workspace();
    fs::write(dir.path().join("blocker"), "").expect("failed to write blocker");
    let out = run(&dir, &["scan", "etl", "--output", "blocker/inv.json"]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn test_classify_prints_asset() {
    let dir = workspace();
    let out = run(&dir, &["classify", "etl/orders.sql"]);
    assert_eq!(out.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is not valid JSON");
    assert_eq!(value["language"], "sql");
    assert_eq!(value["migration_difficulty"], "easy");
    assert_eq!(value["name"], "orders");
}
