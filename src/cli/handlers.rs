//! Command handlers.

use crate::analysis::worker::AssetBuilder;
use crate::analysis::Engine;
use crate::cli::progress;
use crate::config::Config;
use crate::discovery;
use crate::exit::ScoutExit;
use crate::reporting;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Flags of the `scan` command.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub roots: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub output: Option<PathBuf>,
    pub no_save: bool,
    pub json: bool,
    pub jobs: Option<usize>,
    pub verbose: bool,
}

/// Loads the config file and layers command-line overrides on top.
///
/// # Errors
/// Returns error if the config can't be loaded or the merged result is invalid.
pub fn resolve_config(opts: &ScanOptions) -> Result<Config> {
    let mut config = Config::load(opts.config.as_deref())?;
    if !opts.roots.is_empty() {
        config.roots.clone_from(&opts.roots);
    }
    if !opts.extensions.is_empty() {
        config.extensions.clone_from(&opts.extensions);
    }
    if let Some(output) = &opts.output {
        config.output.clone_from(output);
    }
    config.jobs = opts.jobs;
    config.verbose = opts.verbose;
    config.validate().context("Invalid command-line options")?;
    Ok(config)
}

/// Handles the scan command.
///
/// # Errors
/// Returns error on failures that aren't mapped to a dedicated exit code.
pub fn handle_scan(opts: &ScanOptions) -> Result<ScoutExit> {
    let config = match resolve_config(opts) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            return Ok(ScoutExit::InvalidInput);
        }
    };

    info!(roots = ?config.roots, extensions = ?config.extensions, "Starting discovery");
    let files: Vec<PathBuf> = discovery::locate(&config.roots, &config.extensions).collect();
    let total = files.len();
    let bar = progress::scan_bar(total as u64, opts.json);

    let engine = Engine::new(config);
    let report = engine.scan_with_progress(files, &|path: &Path| {
        progress::tick(&bar, path);
        debug!(progress = bar.position(), total, path = %path.display(), "Scanning");
    });
    bar.finish_and_clear();

    if opts.json {
        reporting::print_json(&report.inventory)?;
    } else {
        reporting::print_summary(&report);
    }

    if opts.no_save {
        return Ok(ScoutExit::Success);
    }

    match reporting::save_inventory(&report.inventory, &engine.config().output) {
        Ok(path) => {
            info!(path = %path.display(), "Inventory saved");
            if !opts.json {
                println!("{} Report written to {}", "OK".green().bold(), path.display());
            }
            Ok(ScoutExit::Success)
        }
        Err(e) => {
            let reason = format!("{e:#}");
            error!(error = %reason, "Could not persist inventory");
            eprintln!("{} {reason}", "Error:".red());
            Ok(ScoutExit::PersistFailure)
        }
    }
}

/// Handles the classify command.
///
/// # Errors
/// Returns error if the config is invalid or the file can't be read.
pub fn handle_classify(file: &Path, config: Option<&Path>) -> Result<ScoutExit> {
    let config = match Config::load(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            return Ok(ScoutExit::InvalidInput);
        }
    };

    let asset = AssetBuilder::new(&config.priorities)
        .build(file)
        .with_context(|| format!("Could not classify {}", file.display()))?;
    let json = serde_json::to_string_pretty(&asset).context("Failed to serialize asset")?;
    println!("{json}");
    Ok(ScoutExit::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn flags_override_defaults() {
        let opts = ScanOptions {
            roots: vec![PathBuf::from("etl")],
            extensions: vec![".SQL".to_string()],
            output: Some(PathBuf::from("out/inv.json")),
            jobs: Some(2),
            config: Some(PathBuf::from("/no/such/assetscout.toml")),
            ..ScanOptions::default()
        };
        assert!(resolve_config(&opts).is_err());

        let dir = TempDir::new().unwrap();
        let cfg_path = dir.path().join("assetscout.toml");
        fs::write(&cfg_path, "[discovery]\nroots = [\"other\"]").unwrap();
        let opts = ScanOptions {
            config: Some(cfg_path),
            ..opts
        };

        let config = resolve_config(&opts).unwrap();
        assert_eq!(config.roots, vec![PathBuf::from("etl")]);
        assert_eq!(config.extensions, vec![".sql"]);
        assert_eq!(config.output, PathBuf::from("out/inv.json"));
        assert_eq!(config.jobs, Some(2));
    }

    #[test]
    fn bad_extension_flag_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let cfg_path = dir.path().join("assetscout.toml");
        fs::write(&cfg_path, "").unwrap();
        let opts = ScanOptions {
            config: Some(cfg_path),
            extensions: vec!["sql".to_string()],
            ..ScanOptions::default()
        };
        assert_eq!(handle_scan(&opts).unwrap(), ScoutExit::InvalidInput);
    }

    #[test]
    fn scan_writes_report() {
        let dir = TempDir::new().unwrap();
        let corpus = dir.path().join("corpus");
        fs::create_dir(&corpus).unwrap();
        fs::write(corpus.join("load.sql"), "insert into sales select * from raw").unwrap();
        let cfg_path = dir.path().join("assetscout.toml");
        fs::write(&cfg_path, "").unwrap();
        let output = dir.path().join("results").join("inv.json");

        let opts = ScanOptions {
            roots: vec![corpus],
            config: Some(cfg_path),
            output: Some(output.clone()),
            json: true,
            ..ScanOptions::default()
        };
        assert_eq!(handle_scan(&opts).unwrap(), ScoutExit::Success);
        assert!(output.exists());
    }
}
