// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use egg_core::EncryptionType;
use serde_json::json;

fn network(ssid: &str, rssi: i32) -> Network {
    Network {
        ssid: ssid.to_string(),
        encryption_type: EncryptionType::Wpa2Psk,
        rssi,
        channel: 6,
        bssid: format!("{ssid}-bssid"),
    }
}

#[test]
fn test_format_record_aligns_keys() {
    let record = json!({"hScale": 1.5, "layerResolveType": "fill", "optimizeTravel": true});
    let text = format_record(&record);
    assert_eq!(
        text,
        "hScale            1.5\nlayerResolveType  fill\noptimizeTravel    true"
    );
}

#[test]
fn test_format_record_non_object() {
    assert_eq!(format_record(&json!("ok")), "ok");
    assert_eq!(format_record(&json!(3)), "3");
}

#[test]
fn test_format_networks_sorts_by_signal() {
    let text = format_networks(&[network("weak", -80), network("strong", -40)]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("SSID"));
    assert!(lines[1].starts_with("strong"));
    assert!(lines[1].contains("WPA2-PSK"));
    assert!(lines[2].ends_with("weak-bssid"));
}

#[test]
fn test_format_networks_empty_has_header() {
    assert!(format_networks(&[]).starts_with("SSID"));
}

#[test]
fn test_format_wifi_status() {
    let mut status = WifiStatus {
        status: WifiState::Connected,
        ssid: "home".to_string(),
        bssid: "aa".to_string(),
    };
    assert_eq!(format_wifi_status(&status), "connected to home (aa)");
    status.status = WifiState::ConnectFailed;
    assert_eq!(format_wifi_status(&status), "connect_failed");
}
