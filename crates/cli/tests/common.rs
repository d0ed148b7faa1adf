// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// An address nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:9/";

/// The `egg` binary, isolated from the user's settings and environment.
pub fn egg(settings: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("egg");
    cmd.env("EGG_CONFIG", settings.path().join("config.toml"))
        .env_remove("EGG_URL")
        .env("NO_COLOR", "1");
    cmd
}

/// A request as seen by [`serve`]: request line and body.
#[derive(Debug, Clone)]
pub struct Seen {
    pub line: String,
    pub body: String,
}

/// Serves one canned `(status, body)` response per connection, in order,
/// then returns the requests it saw.
pub fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<Seen>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    let handle = std::thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let mut length = 0;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header.trim().is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0; length];
            reader.read_exact(&mut request_body).unwrap();
            seen.push(Seen {
                line: line.trim().to_string(),
                body: String::from_utf8_lossy(&request_body).into_owned(),
            });

            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {} X\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();
        }
        seen
    });
    (url, handle)
}
