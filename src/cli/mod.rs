// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;
pub mod progress;

pub use args::{Cli, Commands};
