/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Security audit logs.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::{add_query_params, validate_required};
use crate::transport::Response;
use chrono::{DateTime, Utc};
use strum_macros::{EnumString, IntoStaticStr};

/// Event types recorded in the security audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SecurityEvent {
    PasswordChange,
    LoginSuccess,
    LoginFailure,
    Logout,
    AccountLocked,
    AccountUnlocked,
    SettingsEdited,
    PasswordReset,
}

/// Optional filters for [`Client::get_security_logs_for_account`].
#[derive(Debug, Default, Clone)]
pub struct SecurityLogParams {
    /// Defaults to 28 days ago on the remote side.
    pub date_from: Option<DateTime<Utc>>,
    /// Defaults to now on the remote side.
    pub date_to: Option<DateTime<Utc>>,
    /// Event types to include; all types when absent.
    pub events: Option<Vec<SecurityEvent>>,
    /// Only events caused by this user.
    pub user_id: Option<String>,
    pub page_token: Option<String>,
    /// Amount of audit log items to return. (Max: 200)
    pub limit: Option<u32>,
}

impl Client {
    /// Returns the security audit logs for an account.
    pub async fn get_security_logs_for_account(
        &self,
        account_id: &str,
        params: SecurityLogParams,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/security/audit"))?;
        add_query_params(
            &mut url,
            [
                ("date_from", params.date_from.map(|date| date.to_rfc3339())),
                ("date_to", params.date_to.map(|date| date.to_rfc3339())),
                (
                    "events",
                    params.events.map(|events| {
                        events
                            .iter()
                            .map(|event| <&'static str>::from(*event))
                            .collect::<Vec<_>>()
                            .join(",")
                    }),
                ),
                ("user_id", params.user_id),
                ("page_token", params.page_token),
                ("limit", params.limit.map(|limit| limit.to_string())),
            ],
        );
        self.get(url).await
    }
}
