/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! OAuth2 URL builders.
//!
//! These are pure string formatting: no request is made, and exchanging the
//! authorization code for a token is left to the consumer. Scope and state
//! values are percent-encoded; the scope list is space-joined per the
//! provider's convention.

use std::fmt::Write;

/// Where users are sent to authorize the application.
pub const AUTHORIZATION_URL: &str = "https://app.engagor.com/oauth/authorize/";

/// Where authorization codes and refresh tokens are exchanged.
pub const TOKEN_URL: &str = "https://app.engagor.com/oauth/access_token/";

/// Inputs for [`authorization_url`].
#[derive(Debug, Default)]
pub struct AuthorizationUrlParams<'a> {
    pub client_id: &'a str,
    /// Permission scopes, e.g. `["accounts_read", "accounts_write"]`.
    pub scope: Option<&'a [&'a str]>,
    /// Opaque value echoed back on the redirect, for CSRF protection.
    pub state: Option<&'a str>,
}

/// Returns the authorization URL.
///
/// Parameter order is fixed: `client_id`, `response_type=code`, then `state`
/// and `scope` when given.
pub fn authorization_url(params: &AuthorizationUrlParams<'_>) -> String {
    let mut request_url = format!(
        "{AUTHORIZATION_URL}?client_id={}&response_type=code",
        params.client_id
    );

    if let Some(state) = params.state.filter(|state| !state.is_empty()) {
        let _ = write!(request_url, "&state={}", urlencoding::encode(state));
    }

    if let Some(scope) = params.scope {
        let scope_string = scope.join(" ");
        let _ = write!(request_url, "&scope={}", urlencoding::encode(&scope_string));
    }

    request_url
}

/// Returns the token URL for exchanging an authorization code.
pub fn authorization_token_url(client_id: &str, client_secret: &str, code: &str) -> String {
    format!(
        "{TOKEN_URL}?client_id={client_id}&client_secret={client_secret}&grant_type=authorization_code&code={code}"
    )
}

/// Returns the token URL for refreshing an expired access token.
pub fn refresh_token_url(client_id: &str, client_secret: &str, refresh_token: &str) -> String {
    format!(
        "{TOKEN_URL}?client_id={client_id}&client_secret={client_secret}&grant_type=refresh_token&refresh_token={refresh_token}"
    )
}
