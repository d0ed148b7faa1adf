// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request builders for the device's HTTP endpoints.
//!
//! | Operation | Request |
//! |---|---|
//! | fetch / save config | `GET` / `POST api/config` (JSON) |
//! | list files | `GET api/files` |
//! | upload file | `POST api/file` (multipart, field `data`) |
//! | load / delete file | `GET` / `DELETE api/file/{name}` |
//! | print file | `POST api/print/{name}` |
//! | send command | `POST api/command` (form `command`) |
//! | fetch / update motion params | `GET` / `PATCH api/motion` (form) |
//! | wifi scan / status | `GET api/wifi/scan`, `GET api/wifi` |
//! | wifi connect | `POST api/wifi/connect` (form) |

use egg_core::{form_pairs, Config, MotionCommand, MotionParams, WifiCredentials};

use crate::error::Result;
use crate::transport::{Body, Method, Request};

/// Multipart field carrying uploaded file content.
pub const UPLOAD_FIELD: &str = "data";

pub fn fetch_config() -> Request {
    Request::get(["api", "config"])
}

pub fn save_config(config: &Config) -> Result<Request> {
    let body = Body::Json(serde_json::to_value(config)?);
    Ok(Request::new(Method::Post, ["api", "config"], body))
}

pub fn list_files() -> Request {
    Request::get(["api", "files"])
}

pub fn upload_file(name: &str, content: &str) -> Request {
    Request::new(
        Method::Post,
        ["api", "file"],
        Body::Multipart {
            field: UPLOAD_FIELD.to_string(),
            file_name: name.to_string(),
            content: content.to_string(),
        },
    )
}

pub fn load_file(name: &str) -> Request {
    Request::get(["api", "file", name])
}

pub fn delete_file(name: &str) -> Request {
    Request::new(Method::Delete, ["api", "file", name], Body::Empty)
}

pub fn print_file(name: &str) -> Request {
    Request::new(Method::Post, ["api", "print", name], Body::Empty)
}

pub fn send_command(cmd: MotionCommand) -> Request {
    Request::new(
        Method::Post,
        ["api", "command"],
        Body::Form(vec![("command".to_string(), cmd.as_str().to_string())]),
    )
}

pub fn fetch_motion_params() -> Request {
    Request::get(["api", "motion"])
}

pub fn update_motion_params(params: &MotionParams) -> Result<Request> {
    let body = Body::Form(form_pairs(params)?);
    Ok(Request::new(Method::Patch, ["api", "motion"], body))
}

pub fn wifi_scan() -> Request {
    Request::get(["api", "wifi", "scan"])
}

pub fn wifi_status() -> Request {
    Request::get(["api", "wifi"])
}

pub fn wifi_connect(credentials: &WifiCredentials) -> Result<Request> {
    let body = Body::Form(form_pairs(credentials)?);
    Ok(Request::new(Method::Post, ["api", "wifi", "connect"], body))
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
