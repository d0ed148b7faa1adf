// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for egg-core operations.

use thiserror::Error;

/// All possible errors that can occur in egg-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid motion command: '{0}'\n  hint: valid commands are: pen-up, pen-down, motors-enable, motors-disable, print-pause, print-stop, print-continue")]
    InvalidCommand(String),

    #[error("invalid encryption type code: {0}\n  hint: valid codes are 0 through 5")]
    InvalidEncryptionType(u8),

    #[error("invalid layer resolve type: '{0}'\n  hint: valid types are: none, stroke, fill")]
    InvalidLayerResolveType(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for egg-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
