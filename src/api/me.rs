/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Operations on the authenticated user.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::add_query_params;
use crate::transport::Response;

impl Client {
    /// Returns details about the currently logged in user. Use this to
    /// identify who authorized your application.
    pub async fn get_currently_logged_in_user(&self) -> Result<Response, EngageError> {
        let url = self.build_url("/me")?;
        self.get(url).await
    }

    /// Returns the accounts (with associated projects, topics and monitored
    /// profiles) the logged in user has access to.
    pub async fn get_currently_logged_in_user_accounts(
        &self,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        let mut url = self.build_url("/me/accounts")?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the connected profiles of the authenticated user.
    pub async fn get_currently_logged_in_user_connected_profiles(
        &self,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        let mut url = self.build_url("/me/connectedprofiles")?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the permissions your application has for the currently logged
    /// in user.
    pub async fn get_currently_logged_in_user_permissions(
        &self,
    ) -> Result<Response, EngageError> {
        let url = self.build_url("/me/permissions")?;
        self.get(url).await
    }
}
