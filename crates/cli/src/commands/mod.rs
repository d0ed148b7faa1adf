// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod files;
pub mod motion;
pub mod wifi;

use egg_client::{ApiClient, ClientConfig, Gated, LoaderGate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// A connected client whose loader gate fires on Ctrl-C.
pub struct Session {
    pub client: ApiClient,
    pub gate: LoaderGate,
    pub output: OutputFormat,
    interrupt: JoinHandle<()>,
}

impl Session {
    /// Must be called from within a tokio runtime.
    pub fn connect(config: &ClientConfig, output: OutputFormat) -> Result<Self> {
        let (handle, gate) = LoaderGate::channel();
        let interrupt = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("interrupt received, preempting in-flight operations");
                handle.fire();
            }
        });
        Ok(Session {
            client: ApiClient::new(config, gate.clone())?,
            gate,
            output,
            interrupt,
        })
    }

    /// Persists any pending config edit and stops the interrupt watcher.
    pub async fn close(self) {
        self.client.shutdown().await;
        self.interrupt.abort();
    }
}

/// Unwraps a gated outcome, reporting preemption as [`Error::Interrupted`].
pub fn completed<T>(outcome: Gated<T>) -> Result<T> {
    match outcome {
        Gated::Completed(value) => Ok(value),
        Gated::Preempted => Err(Error::Interrupted),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints `json` in JSON mode, otherwise the text produced by `text`.
pub fn emit<T: Serialize>(output: OutputFormat, json: &T, text: impl FnOnce() -> String) -> Result<()> {
    match output {
        OutputFormat::Json => print_json(json),
        OutputFormat::Text => {
            println!("{}", text());
            Ok(())
        }
    }
}

/// Applies `key=value` assignments to a copy of `record`.
///
/// Keys match the record's serialized field names, ignoring case, `-` and `_`
/// (`h-scale`, `h_scale` and `hScale` are the same key). Values are parsed as
/// JSON unless the field is a string, in which case they are taken verbatim.
pub fn apply_assignments<T: Serialize + DeserializeOwned>(
    record: &T,
    assignments: &[String],
) -> Result<T> {
    let original = match serde_json::to_value(record)? {
        Value::Object(fields) => fields,
        other => return Err(Error::InvalidAssignment(other.to_string())),
    };
    let mut fields = original.clone();
    for assignment in assignments {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| Error::InvalidAssignment(assignment.clone()))?;
        let field = resolve_key(&original, key.trim())?;
        let value = match original.get(&field) {
            Some(Value::String(_)) => Value::String(raw.to_string()),
            _ => serde_json::from_str(raw.trim())
                .unwrap_or_else(|_| Value::String(raw.to_string())),
        };
        check_field::<T>(&original, &field, &value)?;
        debug!("assign {} = {}", field, value);
        fields.insert(field, value);
    }
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Decodes the unedited record with only `key` replaced, so a type mismatch
/// names the offending key.
fn check_field<T: DeserializeOwned>(
    record: &Map<String, Value>,
    key: &str,
    value: &Value,
) -> Result<()> {
    let mut candidate = record.clone();
    candidate.insert(key.to_string(), value.clone());
    serde_json::from_value::<T>(Value::Object(candidate))
        .map(drop)
        .map_err(|e| Error::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn resolve_key(fields: &Map<String, Value>, key: &str) -> Result<String> {
    let wanted = normalize_key(key);
    fields
        .keys()
        .find(|field| normalize_key(field) == wanted)
        .cloned()
        .ok_or_else(|| Error::UnknownKey {
            key: key.to_string(),
            valid: fields.keys().cloned().collect::<Vec<_>>().join(", "),
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
