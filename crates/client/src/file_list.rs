// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File-list synchronizer.
//!
//! The device's file list is fetched once, raced against the loader gate.
//! After that the list only changes by folding confirmed [`FileEvent`]s over
//! it; it is never re-fetched. Events recorded while the initial fetch is in
//! flight are replayed over the snapshot once it lands. A fetch that fails or
//! is preempted leaves the list unloaded, and the next reader retries. The
//! same holds when the loading future itself is dropped.

use std::sync::{Arc, Mutex};

use egg_core::{FileEvent, FileList, PrintFile};
use tokio::sync::watch;
use tracing::debug;

use crate::api;
use crate::error::{Error, Result};
use crate::gate::{Gated, LoaderGate};
use crate::live::LiveValue;
use crate::lock;
use crate::transport::Transport;

#[derive(Default)]
struct EventLog {
    loading: bool,
    /// Events awaiting the snapshot.
    pending: Vec<FileEvent>,
}

pub struct FileListSync<T: Transport> {
    transport: Arc<T>,
    gate: LoaderGate,
    /// Serializes all writers of `live`.
    log: Mutex<EventLog>,
    live: watch::Sender<Option<FileList>>,
    load: tokio::sync::Mutex<()>,
}

impl<T: Transport> FileListSync<T> {
    pub fn new(transport: Arc<T>, gate: LoaderGate) -> Self {
        let (live, _) = watch::channel(None);
        FileListSync {
            transport,
            gate,
            log: Mutex::new(EventLog::default()),
            live,
            load: tokio::sync::Mutex::new(()),
        }
    }

    /// Returns a reader of the file list, fetching the snapshot on first use.
    pub async fn live(&self) -> Result<Gated<LiveValue<FileList>>> {
        let _loading = self.load.lock().await;
        if self.live.borrow().is_some() {
            return Ok(Gated::Completed(self.reader()));
        }

        let _pending = self.begin_load();
        let transport = Arc::clone(&self.transport);
        let outcome = self
            .gate
            .race(async move {
                let text = transport.send(api::list_files()).await?;
                let files: Vec<PrintFile> = serde_json::from_str(&text)?;
                Ok::<_, Error>(files)
            })
            .await
            .transpose();

        match outcome {
            Ok(Gated::Completed(snapshot)) => {
                self.install(snapshot);
                Ok(Gated::Completed(self.reader()))
            }
            Ok(Gated::Preempted) => {
                debug!("file list load preempted");
                Ok(Gated::Preempted)
            }
            Err(e) => Err(e),
        }
    }

    /// Folds a confirmed event into the list.
    pub fn record(&self, event: FileEvent) {
        let mut log = lock(&self.log);
        if self.live.borrow().is_none() {
            // Without a load in flight the next snapshot already reflects it.
            if log.loading {
                log.pending.push(event);
            }
            return;
        }
        debug!("file event: {:?}", event);
        self.live.send_if_modified(|list| match list {
            Some(list) => list.apply(&event),
            None => false,
        });
    }

    /// The current list, if loaded.
    pub fn latest(&self) -> Option<FileList> {
        self.live.borrow().clone()
    }

    fn reader(&self) -> LiveValue<FileList> {
        LiveValue::new(self.live.subscribe())
    }

    fn begin_load(&self) -> LoadGuard<'_> {
        let mut log = lock(&self.log);
        log.loading = true;
        log.pending.clear();
        LoadGuard { log: &self.log }
    }

    fn install(&self, snapshot: Vec<PrintFile>) {
        let mut log = lock(&self.log);
        let list = FileList::replay(snapshot, &log.pending);
        debug!(
            "loaded {} files ({} replayed events)",
            list.len(),
            log.pending.len()
        );
        log.loading = false;
        log.pending.clear();
        self.live.send_replace(Some(list));
    }
}

/// Ends a load that did not install a snapshot: failed, preempted or dropped.
struct LoadGuard<'a> {
    log: &'a Mutex<EventLog>,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        let mut log = lock(self.log);
        if log.loading {
            log.loading = false;
            log.pending.clear();
        }
    }
}

#[cfg(test)]
#[path = "file_list_tests.rs"]
mod tests;
