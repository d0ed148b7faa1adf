// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use egg_core::{Network, WifiState, WifiStatus};
use serde_json::Value;

/// Render a flat record as aligned `key  value` lines.
///
/// Strings are shown without quotes; other values in their JSON form.
/// Non-object values render as a single line.
pub fn format_record(record: &Value) -> String {
    let Value::Object(fields) = record else {
        return plain(record);
    };
    let width = fields.keys().map(String::len).max().unwrap_or(0);
    fields
        .iter()
        .map(|(key, value)| format!("{key:<width$}  {}", plain(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render scan results as a table, strongest signal first.
pub fn format_networks(networks: &[Network]) -> String {
    let mut sorted: Vec<&Network> = networks.iter().collect();
    sorted.sort_by(|a, b| b.rssi.cmp(&a.rssi));

    let width = sorted
        .iter()
        .map(|n| n.ssid.len())
        .chain(std::iter::once("SSID".len()))
        .max()
        .unwrap_or(0);
    let mut lines = vec![format!(
        "{:<width$}  {:>3}  {:>5}  {:<15}  BSSID",
        "SSID", "CH", "RSSI", "SECURITY"
    )];
    lines.extend(sorted.iter().map(|n| {
        format!(
            "{:<width$}  {:>3}  {:>5}  {:<15}  {}",
            n.ssid,
            n.channel,
            n.rssi,
            n.encryption_type.label(),
            n.bssid
        )
    }));
    lines.join("\n")
}

pub fn format_wifi_status(status: &WifiStatus) -> String {
    match status.status {
        WifiState::Connected => format!("connected to {} ({})", status.ssid, status.bssid),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
