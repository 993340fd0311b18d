/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Inbox filter suggestions.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::{add_query_params, validate_required};
use crate::transport::Response;

impl Client {
    /// Returns the filter options available in the inbox filter. Passing a
    /// query searches for specific filter options, e.g. by a user's name.
    pub async fn get_filter_options(
        &self,
        account_id: &str,
        query: Option<&str>,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/filter/suggestions"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
                ("query", query.map(str::to_string)),
            ],
        );
        self.get(url).await
    }
}
