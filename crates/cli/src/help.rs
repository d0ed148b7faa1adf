// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let paint = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = paint(colors::codes::HEADER);
    let context = paint(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(paint(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help, grouped by area.
pub fn commands() -> String {
    let rows = |rows: &[(&str, &str)]| {
        rows.iter()
            .map(|(name, about)| format!("  {}{}{}", colors::literal(name), pad(name), about))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}\n",
        colors::header("Files:"),
        rows(&[
            ("files", "List stored files"),
            ("upload", "Upload a G-code file"),
            ("cat", "Print a stored file"),
            ("rm", "Delete a stored file"),
            ("print", "Start printing a stored file"),
        ]),
        colors::header("Plotter:"),
        rows(&[
            ("config", "Show or edit drawing config"),
            ("command", "Send a motion command"),
            ("motion", "Show or edit motion params"),
        ]),
        colors::header("Network:"),
        rows(&[("wifi", "Scan, inspect and join wifi networks")]),
    )
}

const COMMAND_WIDTH: usize = 10;

fn pad(name: &str) -> String {
    " ".repeat(COMMAND_WIDTH.saturating_sub(name.len()).max(1))
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  egg --url http://192.168.4.1 files    List files on a device
  egg upload egg.gcode                  Upload a file
  egg print egg.gcode                   Print it
  egg config set hScale=1.5             Edit the drawing config",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
