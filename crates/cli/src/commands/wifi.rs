// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use egg_core::WifiCredentials;
use serde_json::json;

use super::{completed, emit, Session};
use crate::display::{format_networks, format_wifi_status};
use crate::error::Result;

pub async fn scan(session: &Session) -> Result<()> {
    let outcome = session.gate.race(session.client.wifi_scan()).await;
    let networks = completed(outcome.transpose()?)?;
    emit(session.output, &networks, || format_networks(&networks))
}

pub async fn status(session: &Session) -> Result<()> {
    let outcome = session.gate.race(session.client.wifi_status()).await;
    let status = completed(outcome.transpose()?)?;
    emit(session.output, &status, || format_wifi_status(&status))
}

pub async fn connect(session: &Session, credentials: WifiCredentials) -> Result<()> {
    completed(session.client.wifi_connect(&credentials).await?)?;
    emit(
        session.output,
        &json!({ "ssid": credentials.ssid, "bssid": credentials.bssid }),
        || format!("connecting to {}", credentials.ssid),
    )
}
