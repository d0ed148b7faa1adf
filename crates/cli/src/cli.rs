// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use egg_core::MotionCommand;

use crate::colors;
use crate::help;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn motion_command(s: &str) -> Result<MotionCommand, String> {
    s.parse().map_err(|e: egg_core::Error| e.to_string())
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "egg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Control an EggDuino plotter over its HTTP API")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Device base URL (overrides the settings file)
    #[arg(long, global = true, env = "EGG_URL", value_name = "URL")]
    pub url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log requests and state changes to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn output(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored files
    Files,

    /// Upload a G-code file
    #[command(after_help = colors::examples("\
Examples:
  egg upload egg.gcode                 Store as egg.gcode
  egg upload out/a.gcode --name b      Store as b"))]
    Upload {
        /// Local file to upload
        path: PathBuf,

        /// Name to store the file under (defaults to the file's name)
        #[arg(long, short, value_parser = non_empty_string)]
        name: Option<String>,
    },

    /// Print the content of a stored file
    Cat {
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// Delete a stored file
    Rm {
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// Start printing a stored file
    Print {
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// Show or edit the drawing config
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Send a motion command
    #[command(
        name = "command",
        after_help = colors::examples("\
Commands:
  pen-up  pen-down  motors-enable  motors-disable
  print-pause  print-stop  print-continue")
    )]
    Send {
        #[arg(value_parser = motion_command, value_name = "CMD")]
        cmd: MotionCommand,
    },

    /// Show or edit motion params
    Motion {
        #[command(subcommand)]
        command: MotionParamsCommand,
    },

    /// Scan, inspect and join wifi networks
    Wifi {
        #[command(subcommand)]
        command: WifiCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the device's config
    Show,

    /// Edit config fields
    #[command(after_help = colors::examples("\
Examples:
  egg config set hScale=1.5                  Set one field
  egg config set optimize-travel=false       Keys match case and dash insensitively
  egg config set layerResolveType=fill       Enumerations take their name"))]
    Set {
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MotionParamsCommand {
    /// Show the stepper tuning values
    Show,

    /// Edit motion params
    Set {
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WifiCommand {
    /// List networks in range
    Scan,

    /// Show the station's connection state
    Status,

    /// Join a network
    Connect {
        #[arg(long, value_parser = non_empty_string)]
        ssid: String,

        #[arg(long)]
        bssid: String,

        #[arg(long, default_value = "")]
        password: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
