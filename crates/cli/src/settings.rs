// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User settings.
//!
//! Settings are stored in `<config_dir>/egg/config.toml` (or the file named by
//! `EGG_CONFIG`) and include:
//! - `url`: Base URL of the device
//! - `save_debounce_ms`: Quiet period before config edits are written back
//! - `request_timeout_secs`: Per-request timeout
//!
//! A missing file means defaults. `--url` / `EGG_URL` override `url`.

use std::fs;
use std::path::{Path, PathBuf};

use egg_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};

const SETTINGS_DIR_NAME: &str = "egg";
const SETTINGS_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub url: String,
    pub save_debounce_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let client = ClientConfig::default();
        Settings {
            url: client.base_url,
            save_debounce_ms: client.save_debounce_ms,
            request_timeout_secs: client.request_timeout_secs,
        }
    }
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Settings::default()),
        }
    }

    /// Loads settings from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Settings(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Saves settings to `path`, creating its directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Settings(format!("failed to serialize settings: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Client configuration, with `url` replaced by `url_override` if given.
    pub fn client_config(&self, url_override: Option<&str>) -> ClientConfig {
        ClientConfig {
            base_url: url_override.unwrap_or(&self.url).to_string(),
            save_debounce_ms: self.save_debounce_ms,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

/// Path of the settings file: `EGG_CONFIG`, else `<config_dir>/egg/config.toml`.
pub fn settings_path() -> Option<PathBuf> {
    env::config_file().or_else(|| {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    })
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
