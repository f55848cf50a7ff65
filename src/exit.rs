// src/exit.rs
//! Process exit codes for `assetscout`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ScoutExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, unreadable single file).
    Error = 1,
    /// Invalid configuration or command-line input.
    InvalidInput = 2,
    /// The inventory report could not be written.
    PersistFailure = 3,
}

impl ScoutExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for ScoutExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
