// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `egg config`: show and edit the drawing config.
//!
//! Edits go through the client's live config, so they are written back by
//! its debounced save. [`Session::close`] flushes the pending save before the
//! process exits.

use egg_core::{Config, ConfigPatch};

use super::{apply_assignments, completed, emit, Session};
use crate::display::format_record;
use crate::error::Result;

/// The live config, interruptible by Ctrl-C while the first fetch is in flight.
async fn current(session: &Session) -> Result<Config> {
    let mut live = session.client.config();
    let outcome = session.gate.race(live.get()).await.transpose()?;
    completed(outcome)
}

fn show_config(session: &Session, config: &Config) -> Result<()> {
    let record = serde_json::to_value(config)?;
    emit(session.output, config, || format_record(&record))
}

pub async fn show(session: &Session) -> Result<()> {
    let config = current(session).await?;
    show_config(session, &config)
}

pub async fn set(session: &Session, assignments: &[String]) -> Result<()> {
    let config = current(session).await?;
    let updated = apply_assignments(&config, assignments)?;
    session
        .client
        .update_config(ConfigPatch::from(updated.clone()))?;
    show_config(session, &updated)
}
