/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::errors::EngageError;
use crate::request;
use crate::transport::{Body, HttpTransport, Request, Response, Transport};
use log::debug;
use reqwest::Method;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

// Root origin for operational API calls. OAuth endpoints live on the
// application host instead, see [`crate::oauth`].
pub const API_ORIGIN: &str = "https://api.engagor.com";

/// Client for the Engage REST API.
///
/// Holds the access token for the lifetime of the instance and delegates the
/// network exchange to the supplied [`Transport`]. Carries no other state:
/// every operation builds a fresh request, and concurrent calls do not
/// interact. Cloning is cheap; clones share the same transport.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    access_token: String,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Creates a client from a transport and an access token.
    ///
    /// The token is attached to every outgoing request; an empty one is
    /// rejected up front.
    pub fn new(
        transport: impl Transport + 'static,
        access_token: &str,
    ) -> Result<Self, EngageError> {
        if access_token.is_empty() {
            return Err(EngageError::Configuration(
                "an access token is required".into(),
            ));
        }
        Ok(Self {
            inner: Arc::new(ClientInner {
                access_token: access_token.into(),
                transport: Box::new(transport),
            }),
        })
    }

    /// Creates a client backed by the bundled reqwest transport.
    pub fn with_access_token(access_token: &str) -> Result<Self, EngageError> {
        Self::new(HttpTransport::new(), access_token)
    }

    pub(crate) fn build_url(&self, path: &str) -> Result<Url, EngageError> {
        request::build_url(API_ORIGIN, path)
    }

    pub(crate) async fn get(&self, url: Url) -> Result<Response, EngageError> {
        self.request(url, Method::GET, None, None).await
    }

    pub(crate) async fn post(&self, url: Url, body: Body) -> Result<Response, EngageError> {
        self.request(url, Method::POST, None, Some(body)).await
    }

    pub(crate) async fn delete(
        &self,
        url: Url,
        body: Option<Body>,
    ) -> Result<Response, EngageError> {
        self.request(url, Method::DELETE, None, body).await
    }

    /// Single exit point towards the transport. The access token is attached
    /// here, last, after all other query parameters.
    pub(crate) async fn request(
        &self,
        mut url: Url,
        method: Method,
        headers: Option<HashMap<String, String>>,
        body: Option<Body>,
    ) -> Result<Response, EngageError> {
        request::attach_credential(&mut url, &self.inner.access_token);
        debug!("{} {}", method, redacted(&url));
        self.inner
            .transport
            .execute(Request {
                url,
                method,
                headers,
                body,
            })
            .await
            .map_err(EngageError::Transport)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

// Keeps tokens out of log output
fn redacted(url: &Url) -> Url {
    let mut shown = url.clone();
    request::set_query_param(&mut shown, "access_token", "xxx");
    shown
}
