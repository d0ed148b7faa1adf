// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use serde_json::json;

use super::{completed, emit, Session};
use crate::error::{Error, Result};

pub async fn list(session: &Session) -> Result<()> {
    let mut live = completed(session.client.files().await?)?;
    let files = live.get().await?;
    emit(session.output, &files, || {
        files.names().collect::<Vec<_>>().join("\n")
    })
}

pub async fn upload(session: &Session, path: &Path, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => file_name(path)?,
    };
    let content = tokio::fs::read_to_string(path).await?;
    completed(session.client.upload_file(&name, &content).await?)?;
    emit(session.output, &json!({ "name": name }), || {
        format!("uploaded {} ({} bytes)", name, content.len())
    })
}

pub async fn cat(session: &Session, name: &str) -> Result<()> {
    let content = completed(session.client.load_file(name).await?)?;
    emit(
        session.output,
        &json!({ "name": name, "content": content }),
        || content.trim_end_matches('\n').to_string(),
    )
}

pub async fn remove(session: &Session, name: &str) -> Result<()> {
    completed(session.client.delete_file(name).await?)?;
    emit(session.output, &json!({ "name": name }), || {
        format!("deleted {}", name)
    })
}

pub async fn print(session: &Session, name: &str) -> Result<()> {
    let reply = completed(session.client.print_file(name).await?)?;
    emit(
        session.output,
        &json!({ "name": name, "reply": reply }),
        || {
            if reply.trim().is_empty() {
                format!("printing {}", name)
            } else {
                reply.trim().to_string()
            }
        },
    )
}

/// The final path component, used as the stored name.
pub(crate) fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidFileName(path.display().to_string()))
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
