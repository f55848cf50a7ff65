pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod file_class;
pub mod reporting;
pub mod triage;
pub mod types;
