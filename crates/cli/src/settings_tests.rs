// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_missing_file_means_defaults() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.url, "http://eggduino.local/");
    assert_eq!(settings.save_debounce_ms, 5000);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "url = \"http://192.168.4.1\"\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.url, "http://192.168.4.1");
    assert_eq!(settings.request_timeout_secs, 30);
}

#[test]
fn test_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("egg").join("config.toml");
    let settings = Settings {
        url: "http://plotter.lan/".to_string(),
        save_debounce_ms: 100,
        request_timeout_secs: 5,
    };

    settings.save(&path).unwrap();

    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_malformed_file_is_settings_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "url = [").unwrap();

    let err = Settings::load_from(&path).unwrap_err();

    assert!(matches!(err, Error::Settings(_)));
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn test_wrong_type_is_settings_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "save_debounce_ms = \"soon\"").unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(Error::Settings(_))
    ));
}

#[test]
fn test_url_override_wins() {
    let settings = Settings::default();
    let config = settings.client_config(Some("http://10.0.0.2/"));
    assert_eq!(config.base_url, "http://10.0.0.2/");
    assert_eq!(config.save_debounce_ms, settings.save_debounce_ms);

    let config = settings.client_config(None);
    assert_eq!(config.base_url, settings.url);
}
