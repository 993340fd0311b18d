/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use async_trait::async_trait;
use bytes::Bytes;
use engage::{BoxError, Client, Request, Response, Transport};
use std::sync::{Arc, Mutex};

pub(crate) const TEST_TOKEN: &str = "token-123";

/// Transport double that records every request and answers `200 {}`.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    seen: Arc<Mutex<Vec<Request>>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.seen.lock().unwrap().clone()
    }

    /// The one request this transport saw; panics if there were more or none.
    pub(crate) fn single_request(&self) -> Request {
        let seen = self.seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "expected exactly one request");
        seen[0].clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        self.seen.lock().unwrap().push(request);
        Ok(Response {
            status: 200,
            body: Bytes::from_static(b"{}"),
        })
    }
}

/// Transport double that always fails.
pub(crate) struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn execute(&self, _request: Request) -> Result<Response, BoxError> {
        Err("connection reset by peer".into())
    }
}

#[allow(dead_code)]
pub(crate) fn recording_client() -> (Client, RecordingTransport) {
    let transport = RecordingTransport::new();
    let client = Client::new(transport.clone(), TEST_TOKEN).unwrap();
    (client, transport)
}
