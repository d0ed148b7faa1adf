// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Motion and wifi records exchanged with the device.
//!
//! These are passthrough types: the client does not cache or merge them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Immediate commands for the plotter's motors and print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionCommand {
    PenUp,
    PenDown,
    MotorsEnable,
    MotorsDisable,
    PrintPause,
    PrintStop,
    PrintContinue,
}

impl MotionCommand {
    pub const ALL: [MotionCommand; 7] = [
        MotionCommand::PenUp,
        MotionCommand::PenDown,
        MotionCommand::MotorsEnable,
        MotionCommand::MotorsDisable,
        MotionCommand::PrintPause,
        MotionCommand::PrintStop,
        MotionCommand::PrintContinue,
    ];

    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionCommand::PenUp => "pen-up",
            MotionCommand::PenDown => "pen-down",
            MotionCommand::MotorsEnable => "motors-enable",
            MotionCommand::MotorsDisable => "motors-disable",
            MotionCommand::PrintPause => "print-pause",
            MotionCommand::PrintStop => "print-stop",
            MotionCommand::PrintContinue => "print-continue",
        }
    }
}

impl fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MotionCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        MotionCommand::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == lower)
            .ok_or_else(|| Error::InvalidCommand(s.to_string()))
    }
}

/// Stepper motor tuning values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionParams {
    pub pen_up_percent: u32,
    pub pen_down_percent: u32,
    pub drawing_speed: u32,
    /// Delay after moving the pen servo, in milliseconds.
    pub pen_move_delay: u32,
    pub travel_speed: u32,
    pub steps_per_rotation: u32,
    pub reverse_pen: bool,
    pub reverse_rotation: bool,
}

/// Wifi security of a scanned network, as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EncryptionType {
    Open = 0,
    Wep = 1,
    WpaPsk = 2,
    Wpa2Psk = 3,
    WpaWpa2Psk = 4,
    Wpa2Enterprise = 5,
}

impl EncryptionType {
    pub fn label(&self) -> &'static str {
        match self {
            EncryptionType::Open => "open",
            EncryptionType::Wep => "WEP",
            EncryptionType::WpaPsk => "WPA-PSK",
            EncryptionType::Wpa2Psk => "WPA2-PSK",
            EncryptionType::WpaWpa2Psk => "WPA/WPA2-PSK",
            EncryptionType::Wpa2Enterprise => "WPA2-Enterprise",
        }
    }
}

impl TryFrom<u8> for EncryptionType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(EncryptionType::Open),
            1 => Ok(EncryptionType::Wep),
            2 => Ok(EncryptionType::WpaPsk),
            3 => Ok(EncryptionType::Wpa2Psk),
            4 => Ok(EncryptionType::WpaWpa2Psk),
            5 => Ok(EncryptionType::Wpa2Enterprise),
            _ => Err(Error::InvalidEncryptionType(code)),
        }
    }
}

impl From<EncryptionType> for u8 {
    fn from(kind: EncryptionType) -> u8 {
        kind as u8
    }
}

impl fmt::Display for EncryptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A network found by a wifi scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub ssid: String,
    pub encryption_type: EncryptionType,
    pub rssi: i32,
    pub channel: u32,
    pub bssid: String,
}

/// Connection state of the device's wifi station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WifiState {
    Idle,
    NoNetwork,
    ScanCompleted,
    Connected,
    ConnectFailed,
    ConnectionLost,
    Disconnected,
    #[serde(other)]
    Unknown,
}

impl WifiState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WifiState::Idle => "idle",
            WifiState::NoNetwork => "no_network",
            WifiState::ScanCompleted => "scan_completed",
            WifiState::Connected => "connected",
            WifiState::ConnectFailed => "connect_failed",
            WifiState::ConnectionLost => "connection_lost",
            WifiState::Disconnected => "disconnected",
            WifiState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WifiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiStatus {
    pub status: WifiState,
    pub ssid: String,
    pub bssid: String,
}

/// Parameters for joining a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredentials {
    pub ssid: String,
    pub bssid: String,
    pub password: String,
}

/// Flattens a record into `key=value` pairs for url-encoded bodies.
///
/// Keys follow the record's serde names. Strings are passed through, other
/// scalars use their JSON text (`true`, `42`).
pub fn form_pairs<T: Serialize>(record: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(record)?;
    let serde_json::Value::Object(map) = value else {
        return Err(Error::Json(serde::ser::Error::custom(
            "form body must be a record",
        )));
    };
    Ok(map
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, text)
        })
        .collect())
}

#[cfg(test)]
#[path = "device_tests.rs"]
mod tests;
