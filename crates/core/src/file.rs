// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Print files and the event-sourced file list.
//!
//! The device's file list is fetched once. After that it is evolved locally by
//! folding [`FileEvent`]s over the snapshot in arrival order. Events are only
//! recorded once the device has confirmed the upload or deletion.
//!
//! The reducer is idempotent per name: creating a name that is already listed
//! leaves the list as it is, deleting an absent name does nothing. Replaying an
//! event that the snapshot already reflects is therefore harmless, and no two
//! entries ever share a name.

use serde::{Deserialize, Serialize};

/// A file stored on the device, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintFile {
    pub name: String,
}

impl PrintFile {
    pub fn new(name: impl Into<String>) -> Self {
        PrintFile { name: name.into() }
    }
}

/// A confirmed change to the device's file set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileEvent {
    /// A file was uploaded.
    Create { name: String },
    /// A file was deleted.
    Delete { name: String },
}

impl FileEvent {
    pub fn create(name: impl Into<String>) -> Self {
        FileEvent::Create { name: name.into() }
    }

    pub fn delete(name: impl Into<String>) -> Self {
        FileEvent::Delete { name: name.into() }
    }

    /// Returns the file name the event refers to.
    pub fn name(&self) -> &str {
        match self {
            FileEvent::Create { name } | FileEvent::Delete { name } => name,
        }
    }
}

/// Ordered list of device files, derived from a snapshot plus events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileList {
    files: Vec<PrintFile>,
}

impl FileList {
    /// Creates a list from a device snapshot.
    ///
    /// Later duplicates of a name are dropped so the list starts out unique.
    pub fn from_snapshot(snapshot: Vec<PrintFile>) -> Self {
        let mut list = FileList::default();
        for file in snapshot {
            list.apply(&FileEvent::Create { name: file.name });
        }
        list
    }

    /// Folds `events` over `snapshot` in order.
    pub fn replay<'a>(
        snapshot: Vec<PrintFile>,
        events: impl IntoIterator<Item = &'a FileEvent>,
    ) -> Self {
        let mut list = FileList::from_snapshot(snapshot);
        for event in events {
            list.apply(event);
        }
        list
    }

    /// Applies one event. Returns true if the list changed.
    pub fn apply(&mut self, event: &FileEvent) -> bool {
        match event {
            FileEvent::Create { name } => {
                if self.contains(name) {
                    return false;
                }
                self.files.push(PrintFile::new(name.clone()));
                true
            }
            FileEvent::Delete { name } => {
                let before = self.files.len();
                self.files.retain(|f| f.name != *name);
                self.files.len() != before
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name == name)
    }

    pub fn files(&self) -> &[PrintFile] {
        &self.files
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
