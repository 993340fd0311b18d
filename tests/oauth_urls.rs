/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use engage::oauth::{
        AuthorizationUrlParams, authorization_token_url, authorization_url, refresh_token_url,
    };

    #[test]
    fn authorization_url_with_scope_and_state() {
        let url = authorization_url(&AuthorizationUrlParams {
            client_id: "abc",
            scope: Some(&["read", "write"]),
            state: Some("xyz"),
        });
        assert_eq!(
            url,
            "https://app.engagor.com/oauth/authorize/?client_id=abc&response_type=code&state=xyz&scope=read%20write"
        );
    }

    #[test]
    fn authorization_url_without_optional_parts() {
        let url = authorization_url(&AuthorizationUrlParams {
            client_id: "abc",
            ..Default::default()
        });
        assert_eq!(
            url,
            "https://app.engagor.com/oauth/authorize/?client_id=abc&response_type=code"
        );
    }

    #[test]
    fn authorization_url_percent_encodes_state() {
        let url = authorization_url(&AuthorizationUrlParams {
            client_id: "abc",
            scope: None,
            state: Some("a b/c"),
        });
        assert_eq!(
            url,
            "https://app.engagor.com/oauth/authorize/?client_id=abc&response_type=code&state=a%20b%2Fc"
        );
    }

    #[test]
    fn token_url_for_authorization_code_grant() {
        assert_eq!(
            authorization_token_url("abc", "s3cret", "code123"),
            "https://app.engagor.com/oauth/access_token/?client_id=abc&client_secret=s3cret&grant_type=authorization_code&code=code123"
        );
    }

    #[test]
    fn token_url_for_refresh_token_grant() {
        assert_eq!(
            refresh_token_url("abc", "s3cret", "refresh456"),
            "https://app.engagor.com/oauth/access_token/?client_id=abc&client_secret=s3cret&grant_type=refresh_token&refresh_token=refresh456"
        );
    }
}
