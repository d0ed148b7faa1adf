// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared live values.
//!
//! A [`LiveValue`] is a reader of a single-writer cell holding the latest
//! value of a resource. Any number of readers can exist; all of them are fed
//! by the same upstream pipeline, and a new reader sees the latest value
//! immediately. The cell is empty until the first value lands.

use tokio::sync::watch;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct LiveValue<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T: Clone> LiveValue<T> {
    pub(crate) fn new(rx: watch::Receiver<Option<T>>) -> Self {
        LiveValue { rx }
    }

    /// Returns the latest value without waiting.
    pub fn latest(&self) -> Option<T> {
        self.rx.borrow().clone()
    }

    /// Returns the latest value, waiting for the first one if needed.
    ///
    /// Fails with [`Error::Closed`] if the writer stopped before producing one.
    pub async fn get(&mut self) -> Result<T> {
        let value = self
            .rx
            .wait_for(Option::is_some)
            .await
            .map_err(|_| Error::Closed)?;
        (*value).clone().ok_or(Error::Closed)
    }

    /// Waits for a value newer than the last one this reader observed.
    pub async fn changed(&mut self) -> Result<T> {
        loop {
            self.rx.changed().await.map_err(|_| Error::Closed)?;
            if let Some(value) = self.rx.borrow_and_update().clone() {
                return Ok(value);
            }
        }
    }
}

#[cfg(test)]
#[path = "live_tests.rs"]
mod tests;
