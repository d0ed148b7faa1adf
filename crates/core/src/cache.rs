// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Response cache for file contents.
//!
//! Entries are keyed by `file:<name>` and live until explicitly invalidated.
//! There is no expiry: the device only changes a file's content through this
//! client, and deletion invalidates the entry.
//!
//! Invalidation bumps a generation counter. A fetch that started before an
//! invalidation records the generation it saw and stores its result with
//! [`ResponseCache::insert_if_current`], so content read before a delete is
//! never cached after it.

use std::collections::HashMap;

/// Cache key for the content of the named file.
pub fn file_key(name: &str) -> String {
    format!("file:{}", name)
}

/// Key to text mapping with manual invalidation.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    entries: HashMap<String, String>,
    generation: u64,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Counter bumped by every invalidation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Inserts `text` unless the cache was invalidated since `generation` was read.
    pub fn insert_if_current(
        &mut self,
        key: impl Into<String>,
        generation: u64,
        text: impl Into<String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.insert(key, text);
        true
    }

    /// Removes an entry, returning whether one was present.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.generation += 1;
        self.entries.remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
