// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! egg-core: Shared library for the egg plotter client
//!
//! This crate provides the data model exchanged with the device and the pure
//! state machines behind the client's synchronization layer: the defaulting
//! config merge, the event-sourced file list, the save debouncer, and the
//! response cache. Nothing in here performs I/O.

pub mod cache;
pub mod config;
pub mod debounce;
pub mod device;
pub mod error;
pub mod file;

pub use cache::{file_key, ResponseCache};
pub use config::{Config, ConfigPatch, LayerResolveType};
pub use debounce::{Admission, SaveDebouncer, DEFAULT_QUIET_PERIOD};
pub use device::{
    form_pairs, EncryptionType, MotionCommand, MotionParams, Network, WifiCredentials, WifiState,
    WifiStatus,
};
pub use error::{Error, Result};
pub use file::{FileEvent, FileList, PrintFile};
