// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! eggcli - command-line control of an EggDuino plotter.
//!
//! This crate provides the `egg` CLI on top of [`egg_client::ApiClient`]:
//! stored files, the drawing config, motion commands and params, and wifi.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument parsing (clap)
//! - [`Settings`] - User settings file (`<config_dir>/egg/config.toml`)
//! - [`run`] - Executes a parsed command against a device
//! - [`Error`] - Error types for all operations
//!
//! Ctrl-C fires the client's loader gate: the in-flight operation is
//! abandoned and reported as interrupted.

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod error;
pub mod help;
pub mod settings;

pub use cli::{Cli, Command, ConfigCommand, MotionParamsCommand, OutputFormat, WifiCommand};
pub use error::{Error, Result};
pub use settings::Settings;

use commands::Session;
use egg_core::WifiCredentials;

/// Execute a parsed command line. This is the main entry point for library
/// users; it loads settings, connects and dispatches.
pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;
    let config = settings.client_config(cli.url.as_deref());
    let session = Session::connect(&config, cli.output())?;
    let result = dispatch(&session, cli.command).await;
    session.close().await;
    result
}

async fn dispatch(session: &Session, command: Command) -> Result<()> {
    match command {
        Command::Files => commands::files::list(session).await,
        Command::Upload { path, name } => commands::files::upload(session, &path, name).await,
        Command::Cat { name } => commands::files::cat(session, &name).await,
        Command::Rm { name } => commands::files::remove(session, &name).await,
        Command::Print { name } => commands::files::print(session, &name).await,
        Command::Config { command } => match command {
            ConfigCommand::Show => commands::config::show(session).await,
            ConfigCommand::Set { assignments } => {
                commands::config::set(session, &assignments).await
            }
        },
        Command::Send { cmd } => commands::motion::send(session, cmd).await,
        Command::Motion { command } => match command {
            MotionParamsCommand::Show => commands::motion::show(session).await,
            MotionParamsCommand::Set { assignments } => {
                commands::motion::set(session, &assignments).await
            }
        },
        Command::Wifi { command } => match command {
            WifiCommand::Scan => commands::wifi::scan(session).await,
            WifiCommand::Status => commands::wifi::status(session).await,
            WifiCommand::Connect {
                ssid,
                bssid,
                password,
            } => {
                let credentials = WifiCredentials {
                    ssid,
                    bssid,
                    password,
                };
                commands::wifi::connect(session, credentials).await
            }
        },
    }
}
