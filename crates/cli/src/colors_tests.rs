// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[parameterized(
    two_spaces = { "egg files  List files", Some(9) },
    many_spaces = { "egg rm <name>      Delete", Some(13) },
    single_space = { "egg files list", None },
    trailing_spaces = { "egg files   ", None },
    empty = { "", None },
)]
fn description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

#[test]
fn fg256_produces_escape_sequence() {
    assert_eq!(fg256(74), "\x1b[38;5;74m");
    assert_eq!(header("x"), "\x1b[38;5;74mx\x1b[0m");
}

#[test]
fn colorize_command_dims_placeholders() {
    let painted = colorize_command("egg cat <name>");
    assert!(painted.contains(&context("<name>")));
    assert!(painted.contains(&literal("cat")));
    assert_eq!(strip_ansi(&painted), "egg cat <name>");
}

#[test]
fn colorize_command_dims_assigned_values() {
    let painted = colorize_command("egg config set hScale=2");
    assert!(painted.contains(&literal("hScale=")));
    assert!(painted.contains(&context("2")));
    assert_eq!(strip_ansi(&painted), "egg config set hScale=2");
}

#[test]
fn paint_examples_keeps_text() {
    let text = "Examples:\n  egg files          List stored files\n  plain line";
    let painted = paint_examples(text);
    assert!(painted.starts_with(&header("Examples:")));
    assert_eq!(strip_ansi(&painted), text);
}
