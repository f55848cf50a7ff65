//! Command dispatch logic extracted from the binary.

use super::args::Commands;
use super::handlers::{handle_classify, handle_scan, ScanOptions};
use crate::exit::ScoutExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<ScoutExit> {
    match command {
        Commands::Scan {
            roots,
            config,
            extensions,
            output,
            no_save,
            json,
            jobs,
            verbose,
        } => handle_scan(&ScanOptions {
            roots,
            config,
            extensions,
            output,
            no_save,
            json,
            jobs,
            verbose,
        }),
        Commands::Classify { file, config } => handle_classify(&file, config.as_deref()),
    }
}
