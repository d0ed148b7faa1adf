// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! egg-client: Synchronization layer for the egg plotter's HTTP API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  ApiClient  │────►│  Transport  │────►│   Device    │
//! │  (façade)   │◄────│   (trait)   │◄────│  HTTP API   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!    │      │
//!    │      ├──► ConfigSync    live config + debounced write-back
//!    │      ├──► FileListSync  event-sourced file list
//!    │      └──► ResponseCache file contents by name
//!    ▼
//! ┌─────────────┐
//! │ LoaderGate  │  (preempts in-flight operations)
//! └─────────────┘
//! ```
//!
//! # Features
//!
//! - Long-lived [`LiveValue`]s with latest-value replay for config and files
//! - Optimistic local edits, written back after a quiet period
//! - File list evolved from confirmed uploads/deletes, never re-fetched
//! - Uniform race of remote operations against an external [`LoaderGate`]
//! - Injectable transport trait for testing

mod api;
mod client;
mod config_sync;
mod error;
mod file_list;
mod gate;
mod live;
mod transport;

pub use client::{ApiClient, ClientConfig};
pub use config_sync::ConfigSync;
pub use error::{Error, Result};
pub use file_list::FileListSync;
pub use gate::{GateHandle, Gated, LoaderGate};
pub use live::LiveValue;
pub use transport::{
    Body, HttpTransport, Method, Request, Transport, TransportError, TransportResult,
};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a std mutex, recovering the data if a holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
#[path = "transport_tests.rs"]
mod transport_tests;
