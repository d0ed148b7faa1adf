// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operation façade over the device API.
//!
//! Provides a high-level interface for:
//! - Live config with optimistic edits and debounced write-back
//! - Live, event-sourced file list
//! - File upload, load (cached), delete, and print
//! - Motion commands and parameters, wifi scan/status/connect
//!
//! Every remote operation except the config pipeline and the wifi reads is
//! raced against the loader gate. Write operations apply their local side
//! effect (file event, cache invalidation) only after the device confirmed
//! the write, so a failed or preempted write leaves local state untouched.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use egg_core::{
    file_key, Config, ConfigPatch, FileEvent, FileList, MotionCommand, MotionParams, Network,
    ResponseCache, WifiCredentials, WifiStatus, DEFAULT_QUIET_PERIOD,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api;
use crate::config_sync::ConfigSync;
use crate::error::{Error, Result};
use crate::file_list::FileListSync;
use crate::gate::{Gated, LoaderGate};
use crate::live::LiveValue;
use crate::lock;
use crate::transport::{HttpTransport, Request, Transport};

/// Configuration for the API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the device.
    pub base_url: String,
    /// Quiet period before config edits are written back (milliseconds).
    pub save_debounce_ms: u64,
    /// Per-request timeout (seconds).
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://eggduino.local/".to_string(),
            save_debounce_ms: DEFAULT_QUIET_PERIOD.as_millis() as u64,
            request_timeout_secs: 30,
        }
    }
}

/// Client for the device's configuration and file-storage endpoints.
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
    gate: LoaderGate,
    config: ConfigSync<T>,
    files: FileListSync<T>,
    cache: Mutex<ResponseCache>,
}

impl ApiClient<HttpTransport> {
    /// Creates a client talking HTTP to the configured device.
    pub fn new(config: &ClientConfig, gate: LoaderGate) -> Result<Self> {
        let transport = HttpTransport::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::with_transport(
            transport,
            gate,
            Duration::from_millis(config.save_debounce_ms),
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client with a custom transport (for testing).
    pub fn with_transport(transport: T, gate: LoaderGate, save_debounce: Duration) -> Self {
        let transport = Arc::new(transport);
        ApiClient {
            config: ConfigSync::new(Arc::clone(&transport), save_debounce),
            files: FileListSync::new(Arc::clone(&transport), gate.clone()),
            transport,
            gate,
            cache: Mutex::new(ResponseCache::new()),
        }
    }

    /// Live device config. Always a complete record; defaults if the device
    /// could not be reached.
    pub fn config(&self) -> LiveValue<Config> {
        self.config.live()
    }

    /// Replaces the live config with `patch` overlaid on the defaults.
    ///
    /// Reflected locally at once; written back after the quiet period.
    pub fn update_config(&self, patch: ConfigPatch) -> Result<()> {
        self.config.update(patch)
    }

    /// Edits the latest live config in place, keeping untouched fields.
    pub fn modify_config(&self, f: impl FnOnce(&mut Config) + Send + 'static) -> Result<()> {
        self.config.modify(f)
    }

    /// Live file list, fetched on first use.
    pub async fn files(&self) -> Result<Gated<LiveValue<FileList>>> {
        self.files.live().await
    }

    pub async fn motion_params(&self) -> Result<Gated<MotionParams>> {
        self.gate
            .race(async {
                let text = self.transport.send(api::fetch_motion_params()).await?;
                Ok::<_, Error>(serde_json::from_str(&text)?)
            })
            .await
            .transpose()
    }

    pub async fn upload_file(&self, name: &str, content: &str) -> Result<Gated<()>> {
        self.gate
            .race(async {
                self.transport.send(api::upload_file(name, content)).await?;
                self.files.record(FileEvent::create(name));
                Ok::<_, Error>(())
            })
            .await
            .transpose()
    }

    /// Loads a file's content, serving repeat loads from the cache.
    pub async fn load_file(&self, name: &str) -> Result<Gated<String>> {
        let key = file_key(name);
        self.gate
            .race(async {
                let (cached, generation) = {
                    let cache = lock(&self.cache);
                    (cache.get(&key).map(str::to_string), cache.generation())
                };
                if let Some(text) = cached {
                    debug!("cache hit for {}", key);
                    return Ok(text);
                }
                let text = self.transport.send(api::load_file(name)).await?;
                if !lock(&self.cache).insert_if_current(key.clone(), generation, text.clone()) {
                    debug!("not caching {}: invalidated during load", key);
                }
                Ok::<_, Error>(text)
            })
            .await
            .transpose()
    }

    pub async fn delete_file(&self, name: &str) -> Result<Gated<()>> {
        self.gate
            .race(async {
                self.transport.send(api::delete_file(name)).await?;
                self.files.record(FileEvent::delete(name));
                lock(&self.cache).invalidate(&file_key(name));
                Ok::<_, Error>(())
            })
            .await
            .transpose()
    }

    /// Starts printing a stored file. Returns the device's reply.
    pub async fn print_file(&self, name: &str) -> Result<Gated<String>> {
        self.race_send(api::print_file(name)).await
    }

    pub async fn send_command(&self, cmd: MotionCommand) -> Result<Gated<()>> {
        Ok(self.race_send(api::send_command(cmd)).await?.map(drop))
    }

    pub async fn update_motion_params(&self, params: &MotionParams) -> Result<Gated<()>> {
        let request = api::update_motion_params(params)?;
        Ok(self.race_send(request).await?.map(drop))
    }

    /// Not raced against the gate: a scan is a read with no effect on the
    /// device, so the caller decides whether a load may preempt it.
    pub async fn wifi_scan(&self) -> Result<Vec<Network>> {
        let text = self.transport.send(api::wifi_scan()).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Not raced against the gate, like [`ApiClient::wifi_scan`].
    pub async fn wifi_status(&self) -> Result<WifiStatus> {
        let text = self.transport.send(api::wifi_status()).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn wifi_connect(&self, credentials: &WifiCredentials) -> Result<Gated<()>> {
        let request = api::wifi_connect(credentials)?;
        Ok(self.race_send(request).await?.map(drop))
    }

    /// Cached content of a file, if a previous load stored it.
    pub fn cached_file(&self, name: &str) -> Option<String> {
        lock(&self.cache).get(&file_key(name)).map(str::to_string)
    }

    /// Stops the config driver after persisting any pending edit.
    ///
    /// Config edits submitted afterwards fail with [`Error::Closed`].
    pub async fn shutdown(&self) {
        self.config.shutdown().await;
    }

    async fn race_send(&self, request: Request) -> Result<Gated<String>> {
        self.gate
            .race(async { Ok::<_, Error>(self.transport.send(request).await?) })
            .await
            .transpose()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
