// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All errors the `egg` command line can report.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Client(#[from] egg_client::Error),

    #[error(transparent)]
    Core(#[from] egg_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("invalid assignment '{0}'\n  hint: use key=value, e.g. hScale=1.5")]
    InvalidAssignment(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("unknown key '{key}'\n  hint: valid keys are: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("cannot derive a file name from '{0}'\n  hint: pass --name")]
    InvalidFileName(String),

    #[error("interrupted")]
    Interrupted,
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
