// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    bare = { "egg.gcode", "egg.gcode" },
    nested = { "out/drawings/egg.gcode", "egg.gcode" },
    no_extension = { "./plot", "plot" },
)]
fn test_file_name(path: &str, expected: &str) {
    assert_eq!(file_name(Path::new(path)).unwrap(), expected);
}

#[parameterized(
    root = { "/" },
    parent = { "out/.." },
    empty = { "" },
)]
fn test_file_name_missing(path: &str) {
    assert!(matches!(
        file_name(Path::new(path)),
        Err(Error::InvalidFileName(_))
    ));
}
