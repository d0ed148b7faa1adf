// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the HTTP transport against a loopback stub.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::transport::{Body, HttpTransport, Method, Request, Transport, TransportError};

/// Serves one HTTP response and returns the raw request it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let base = format!("http://{}/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&raw).into_owned()
    });

    (base, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(head_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..head_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= head_end + 4 + content_length
}

fn transport(base: &str) -> HttpTransport {
    HttpTransport::new(base, Duration::from_secs(5)).unwrap()
}

#[test]
fn base_url_gains_trailing_slash() {
    let t = transport("http://plotter.local/device");
    assert_eq!(t.base_url().as_str(), "http://plotter.local/device/");
}

#[test]
fn invalid_base_url_is_rejected() {
    assert!(matches!(
        HttpTransport::new("not a url", Duration::from_secs(1)),
        Err(TransportError::InvalidUrl(_))
    ));
    assert!(matches!(
        HttpTransport::new("mailto:someone@example.com", Duration::from_secs(1)),
        Err(TransportError::InvalidUrl(_))
    ));
}

#[test]
fn url_for_appends_segments() {
    let t = transport("http://plotter.local/");
    let url = t.url_for(&Request::get(["api", "wifi", "scan"])).unwrap();
    assert_eq!(url.as_str(), "http://plotter.local/api/wifi/scan");
}

#[test]
fn url_for_keeps_base_path_prefix() {
    let t = transport("http://plotter.local/egg/");
    let url = t.url_for(&Request::get(["api", "config"])).unwrap();
    assert_eq!(url.as_str(), "http://plotter.local/egg/api/config");
}

#[test]
fn url_for_encodes_file_names_as_one_segment() {
    let t = transport("http://plotter.local/");
    let url = t
        .url_for(&Request::get(["api", "file", "my egg/../x.gcode"]))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://plotter.local/api/file/my%20egg%2F..%2Fx.gcode"
    );
}

#[tokio::test]
async fn get_returns_body_text() {
    let (base, server) = serve_once("200 OK", r#"{"hScale":2}"#).await;

    let text = transport(&base)
        .send(Request::get(["api", "config"]))
        .await
        .unwrap();

    assert_eq!(text, r#"{"hScale":2}"#);
    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /api/config HTTP/1.1"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (base, server) = serve_once("500 Internal Server Error", "sd card missing").await;

    let result = transport(&base).send(Request::get(["api", "files"])).await;

    match result {
        Err(TransportError::Status { code, body }) => {
            assert_eq!(code, 500);
            assert_eq!(body, "sd card missing");
        }
        other => unreachable!("expected status error, got {:?}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn form_body_is_url_encoded() {
    let (base, server) = serve_once("200 OK", "").await;

    let request = Request::new(
        Method::Post,
        ["api", "command"],
        Body::Form(vec![("command".into(), "pen-up".into())]),
    );
    transport(&base).send(request).await.unwrap();

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /api/command HTTP/1.1"));
    assert!(raw
        .to_lowercase()
        .contains("content-type: application/x-www-form-urlencoded"));
    assert!(raw.ends_with("command=pen-up"));
}

#[tokio::test]
async fn json_body_is_sent_with_content_type() {
    let (base, server) = serve_once("200 OK", "").await;

    let request = Request::new(
        Method::Post,
        ["api", "config"],
        Body::Json(serde_json::json!({ "vScale": 2.0 })),
    );
    transport(&base).send(request).await.unwrap();

    let raw = server.await.unwrap();
    assert!(raw.to_lowercase().contains("content-type: application/json"));
    assert!(raw.ends_with(r#"{"vScale":2.0}"#));
}

#[tokio::test]
async fn connection_refused_is_connection_error() {
    // Bind then drop to find a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let result = transport(&base).send(Request::get(["api", "wifi"])).await;
    assert!(matches!(result, Err(TransportError::Connection(_))));
}
