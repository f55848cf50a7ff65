//! Output for finished scans.
//!
//! The console summary is colored tables. The persisted report is the full
//! inventory as pretty JSON.

pub mod console;
pub mod json;
mod shared;

pub use console::{print_summary, render_summary};
pub use json::{print_json, save_inventory, to_json};
