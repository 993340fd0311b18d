/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use url::Url;

/// Error type surfaced by [`Transport`] implementations. Transport failures
/// are handed back to the caller untouched; this client never retries or
/// translates them.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Body payload sent with mutating calls.
///
/// Values are scalars or JSON-encoded strings. Unlike query parameters,
/// entries are never filtered out: an explicit `Null` is transmitted so the
/// remote side can clear a field.
pub type Body = Map<String, Value>;

/// A fully resolved API call, ready to hand to a [`Transport`]. Built fresh
/// for every operation and used once.
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub method: Method,
    pub headers: Option<HashMap<String, String>>,
    pub body: Option<Body>,
}

/// Raw response handed back by a [`Transport`].
///
/// The client does not inspect it; interpreting the status code and payload
/// is left to the caller.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    /// Deserializes the response payload as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Performs the actual network exchange for a [`Request`].
///
/// Any conforming implementation can be plugged into
/// [`Client::new`](crate::Client::new): the bundled [`HttpTransport`], a
/// recording double in tests, or a wrapper adding retry behaviour on top.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, BoxError>;
}

/// Bundled [`Transport`] backed by reqwest. Bodies are sent as JSON.
#[derive(Default, Clone)]
pub struct HttpTransport {
    https_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            https_client: reqwest::Client::new(),
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        let mut req = self
            .https_client
            .request(request.method, request.url)
            .header("Accept", "application/json");
        if let Some(headers) = &request.headers {
            for (name, value) in headers {
                req = req.header(name, value);
            }
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(Response { status, body })
    }
}
