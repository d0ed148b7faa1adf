// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the device's HTTP API.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests against the device (reqwest)
//! - Mock transports for unit testing

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Url;
use tracing::debug;

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The device answered with a non-success status.
    #[error("device returned status {code}: {body}")]
    Status { code: u16, body: String },

    /// The base URL cannot carry request paths.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request body could not be built.
    #[error("invalid request body: {0}")]
    Body(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request payload, by encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
    /// A single text file part of a multipart form.
    Multipart {
        field: String,
        file_name: String,
        content: String,
    },
}

/// A request relative to the device's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Path segments. Each is percent-encoded on its own, so a file name can
    /// never escape its segment.
    pub segments: Vec<String>,
    pub body: Body,
}

impl Request {
    pub fn new<I, S>(method: Method, segments: I, body: Body) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Request {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            body,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Request::new(Method::Get, segments, Body::Empty)
    }

    /// Unencoded relative path, for logging and matching.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// `METHOD path`, e.g. `GET api/config`.
    pub fn route(&self) -> String {
        format!("{} {}", self.method, self.path())
    }
}

/// Transport trait for request/response communication with the device.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations. A successful call yields the
/// raw response text; non-success statuses are errors.
pub trait Transport: Send + Sync + 'static {
    fn send(
        &self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = TransportResult<String>> + Send + '_>>;
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    /// Creates a transport for the device at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> TransportResult<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(base_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(HttpTransport { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolves a request's segments against the base URL.
    pub fn url_for(&self, request: &Request) -> TransportResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = TransportResult<String>> + Send + '_>> {
        Box::pin(async move {
            let url = self.url_for(&request)?;
            debug!("{} {}", request.method, url);

            let builder = match request.method {
                Method::Get => self.client.get(url),
                Method::Post => self.client.post(url),
                Method::Patch => self.client.patch(url),
                Method::Delete => self.client.delete(url),
            };

            let builder = match request.body {
                Body::Empty => builder,
                Body::Json(value) => builder.json(&value),
                Body::Form(pairs) => builder.form(&pairs),
                Body::Multipart {
                    field,
                    file_name,
                    content,
                } => {
                    let part = Part::text(content)
                        .file_name(file_name)
                        .mime_str("text/plain")
                        .map_err(|e| TransportError::Body(e.to_string()))?;
                    builder.multipart(Form::new().part(field, part))
                }
            };

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::Connection(e.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| TransportError::Connection(e.to_string()))?;

            if !status.is_success() {
                return Err(TransportError::Status {
                    code: status.as_u16(),
                    body: text,
                });
            }

            Ok(text)
        })
    }
}
