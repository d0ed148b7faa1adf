// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_error_unknown_key_lists_valid_keys() {
    let err = Error::UnknownKey {
        key: "speed".to_string(),
        valid: "hScale, vScale".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("unknown key 'speed'"));
    assert!(msg.contains("hScale, vScale"));
}

#[test]
fn test_error_invalid_assignment_has_hint() {
    let err = Error::InvalidAssignment("hScale".to_string());
    assert!(err.to_string().contains("key=value"));
}

#[test]
fn test_error_client_is_transparent() {
    let err: Error = egg_client::Error::Closed.into();
    assert_eq!(err.to_string(), egg_client::Error::Closed.to_string());
}

#[test]
fn test_error_from_core() {
    let core: egg_core::Error = "jump".parse::<egg_core::MotionCommand>().unwrap_err();
    let err: Error = core.into();
    assert!(matches!(err, Error::Core(_)));
}

#[test]
fn test_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io.into();
    assert!(err.to_string().contains("missing"));
}
