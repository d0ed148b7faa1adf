// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use egg_core::MotionCommand;
use serde_json::json;

use super::{apply_assignments, completed, emit, Session};
use crate::display::format_record;
use crate::error::Result;

pub async fn send(session: &Session, cmd: MotionCommand) -> Result<()> {
    completed(session.client.send_command(cmd).await?)?;
    emit(session.output, &json!({ "command": cmd }), || {
        format!("sent {}", cmd)
    })
}

pub async fn show(session: &Session) -> Result<()> {
    let params = completed(session.client.motion_params().await?)?;
    let record = serde_json::to_value(&params)?;
    emit(session.output, &params, || format_record(&record))
}

pub async fn set(session: &Session, assignments: &[String]) -> Result<()> {
    let params = completed(session.client.motion_params().await?)?;
    let updated = apply_assignments(&params, assignments)?;
    completed(session.client.update_motion_params(&updated).await?)?;
    let record = serde_json::to_value(&updated)?;
    emit(session.output, &updated, || format_record(&record))
}
