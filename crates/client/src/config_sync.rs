// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config synchronizer.
//!
//! One driver task owns the device configuration:
//!
//! ```text
//!  GET api/config ──(fail → default)──┐
//!                                     ├─► merge onto default ─► live cell ─► LiveValue readers
//!  update_config / modify_config ─────┘                  │
//!                                                        └─► SaveDebouncer ─► POST api/config
//! ```
//!
//! The driver starts on first use and performs exactly one fetch. Edits are
//! reflected in the live cell immediately and written back after a quiet
//! period, skipping the initial value and anything that did not change.
//! Edits submitted while the initial fetch is in flight are applied after it.
//! When the synchronizer shuts down (or is dropped) the driver drains queued
//! edits, writes any pending value at once, and stops.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use egg_core::{Config, ConfigPatch, SaveDebouncer};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::api;
use crate::error::{Error, Result};
use crate::live::LiveValue;
use crate::lock;
use crate::transport::Transport;

type Modifier = Box<dyn FnOnce(&mut Config) + Send>;

/// An edit submitted to the driver.
enum ConfigUpdate {
    /// Overlay on the default record.
    Patch(ConfigPatch),
    /// Edit the latest record in place.
    Modify(Modifier),
}

enum DriverSlot<T> {
    Idle(Driver<T>),
    Running(JoinHandle<()>),
    Stopped,
}

pub struct ConfigSync<T: Transport> {
    updates: Mutex<Option<mpsc::UnboundedSender<ConfigUpdate>>>,
    live: watch::Receiver<Option<Config>>,
    driver: Mutex<DriverSlot<T>>,
}

impl<T: Transport> ConfigSync<T> {
    pub fn new(transport: Arc<T>, quiet: Duration) -> Self {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let (live_tx, live_rx) = watch::channel(None);

        let driver = Driver {
            transport,
            updates: updates_rx,
            live: live_tx,
            debouncer: SaveDebouncer::new(quiet),
            in_flight: None,
        };

        ConfigSync {
            updates: Mutex::new(Some(updates_tx)),
            live: live_rx,
            driver: Mutex::new(DriverSlot::Idle(driver)),
        }
    }

    /// Returns a reader of the live config, starting the driver if needed.
    pub fn live(&self) -> LiveValue<Config> {
        self.ensure_started();
        LiveValue::new(self.live.clone())
    }

    /// Replaces the live config with `patch` overlaid on the defaults.
    pub fn update(&self, patch: ConfigPatch) -> Result<()> {
        self.submit(ConfigUpdate::Patch(patch))
    }

    /// Edits the latest live config in place.
    pub fn modify(&self, f: impl FnOnce(&mut Config) + Send + 'static) -> Result<()> {
        self.submit(ConfigUpdate::Modify(Box::new(f)))
    }

    /// Stops accepting edits, persists any pending edit, and waits for the
    /// driver to finish.
    pub async fn shutdown(&self) {
        lock(&self.updates).take();
        let slot = std::mem::replace(&mut *lock(&self.driver), DriverSlot::Stopped);
        if let DriverSlot::Running(handle) = slot {
            if let Err(e) = handle.await {
                warn!("config driver failed: {}", e);
            }
        }
    }

    fn submit(&self, update: ConfigUpdate) -> Result<()> {
        {
            let updates = lock(&self.updates);
            let tx = updates.as_ref().ok_or(Error::Closed)?;
            tx.send(update).map_err(|_| Error::Closed)?;
        }
        self.ensure_started();
        Ok(())
    }

    fn ensure_started(&self) {
        let mut slot = lock(&self.driver);
        if !matches!(*slot, DriverSlot::Idle(_)) {
            return;
        }
        if let DriverSlot::Idle(driver) = std::mem::replace(&mut *slot, DriverSlot::Stopped) {
            debug!("starting config driver");
            *slot = DriverSlot::Running(tokio::spawn(driver.run()));
        }
    }
}

struct Driver<T> {
    transport: Arc<T>,
    updates: mpsc::UnboundedReceiver<ConfigUpdate>,
    live: watch::Sender<Option<Config>>,
    debouncer: SaveDebouncer<Config>,
    /// The latest write. A newer write supersedes it.
    in_flight: Option<JoinHandle<()>>,
}

impl<T: Transport> Driver<T> {
    async fn run(mut self) {
        let initial = self.fetch().await;
        self.publish(initial);

        loop {
            let deadline = self.debouncer.deadline().map(Instant::from_std);
            tokio::select! {
                update = self.updates.recv() => match update {
                    Some(update) => {
                        let config = self.resolve(update);
                        self.publish(config);
                    }
                    None => break,
                },
                _ = sleep_until(deadline) => {
                    if let Some(config) = self.debouncer.take_due(Instant::now().into_std()) {
                        self.save(config);
                    }
                }
            }
        }

        if let Some(config) = self.debouncer.flush() {
            self.save(config);
        }
        if let Some(handle) = self.in_flight.take() {
            let _ = handle.await;
        }
        debug!("config driver stopped");
    }

    async fn fetch(&self) -> Config {
        let result = match self.transport.send(api::fetch_config()).await {
            Ok(text) => Config::from_json(&text).map_err(Error::from),
            Err(e) => Err(e.into()),
        };
        match result {
            Ok(config) => {
                debug!("loaded config from device");
                config
            }
            Err(e) => {
                warn!("failed to load config, using defaults: {}", e);
                Config::default()
            }
        }
    }

    fn resolve(&self, update: ConfigUpdate) -> Config {
        match update {
            ConfigUpdate::Patch(patch) => Config::from_patch(&patch),
            ConfigUpdate::Modify(f) => {
                let mut config = self.live.borrow().clone().unwrap_or_default();
                f(&mut config);
                config
            }
        }
    }

    fn publish(&mut self, config: Config) {
        self.live.send_replace(Some(config.clone()));
        self.debouncer.push(config, Instant::now().into_std());
    }

    fn save(&mut self, config: Config) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        let transport = Arc::clone(&self.transport);
        self.in_flight = Some(tokio::spawn(async move {
            let result = match api::save_config(&config) {
                Ok(request) => transport.send(request).await.map_err(Error::from),
                Err(e) => Err(e),
            };
            match result {
                Ok(_) => debug!("saved config to device"),
                Err(e) => warn!("failed to save config: {}", e),
            }
        }));
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "config_sync_tests.rs"]
mod tests;
