/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Account settings: users, user roles, teams, topics, tags, social profile
//! groups, canned responses, business hours schedules, custom fields and the
//! settings change history.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::{
    add_query_params, json_encoded, opt_json_encoded, opt_json_param, validate_payload,
    validate_required,
};
use crate::transport::{Body, Response};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Optional filters for [`Client::get_audit_log_settings_changes_for_account`].
#[derive(Debug, Default, Clone)]
pub struct AuditLogParams {
    /// Defaults to 28 days ago on the remote side.
    pub date_from: Option<DateTime<Utc>>,
    /// Defaults to now on the remote side.
    pub date_to: Option<DateTime<Utc>>,
    /// Comma separated list of change types; all types when absent.
    pub types: Option<String>,
    pub topic_ids: Option<Vec<String>>,
    /// Only changes made by this user.
    pub user_id: Option<String>,
    pub page_token: Option<String>,
    pub limit: Option<u32>,
}

/// Optional filters for [`Client::get_canned_responses_for_account`].
#[derive(Debug, Default, Clone)]
pub struct CannedResponseParams {
    pub limit: Option<u32>,
    pub page_token: Option<String>,
    pub topic_id: Option<String>,
    pub ymid: Option<String>,
    pub query: Option<String>,
    /// Sent JSON-encoded.
    pub folder_ids: Option<Vec<String>>,
    pub order: Option<String>,
    pub reply_type: Option<String>,
    pub service_type: Option<String>,
    pub service_id: Option<String>,
}

impl Client {
    /// Returns the list of users for a certain account.
    pub async fn get_users_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/users"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the list of user roles for a certain account.
    pub async fn get_user_roles_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/userroles"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns a single user of a certain account.
    pub async fn get_user_for_account(
        &self,
        account_id: &str,
        user_id: &str,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("user ID", user_id)])?;
        let url = self.build_url(&format!("/{account_id}/settings/user/{user_id}"))?;
        self.get(url).await
    }

    /// Updates a user of a certain account. `updates` is transmitted
    /// JSON-encoded; see the provider docs for the accepted fields.
    pub async fn update_user_for_account(
        &self,
        account_id: &str,
        user_id: &str,
        updates: &Value,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("user ID", user_id)])?;
        validate_payload("updates payload", updates)?;
        let url = self.build_url(&format!("/{account_id}/settings/user/{user_id}"))?;

        let mut body = Body::new();
        body.insert("updates".into(), json_encoded(updates)?);

        self.post(url, body).await
    }

    /// Deletes a user from a certain account.
    pub async fn delete_user_for_account(
        &self,
        account_id: &str,
        user_id: &str,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("user ID", user_id)])?;
        let url = self.build_url(&format!("/{account_id}/settings/user/{user_id}"))?;
        self.delete(url, None).await
    }

    /// Returns all topics of a certain account.
    pub async fn get_topics_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/topics/"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the list of teams for a certain account.
    pub async fn get_teams_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/teams/"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Adds a new team to a certain account.
    pub async fn add_team_for_account(
        &self,
        account_id: &str,
        team: &Value,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        validate_payload("team payload", team)?;
        let url = self.build_url(&format!("/{account_id}/settings/teams/"))?;

        let mut body = Body::new();
        body.insert("team".into(), json_encoded(team)?);

        self.post(url, body).await
    }

    /// Returns a single team of a certain account.
    pub async fn get_team_for_account(
        &self,
        account_id: &str,
        team_id: &str,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("team ID", team_id)])?;
        let url = self.build_url(&format!("/{account_id}/settings/team/{team_id}"))?;
        self.get(url).await
    }

    /// Updates a team of a certain account.
    pub async fn update_team_for_account(
        &self,
        account_id: &str,
        team_id: &str,
        updates: &Value,
        options: Option<&Value>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("team ID", team_id)])?;
        validate_payload("updates payload", updates)?;
        let url = self.build_url(&format!("/{account_id}/settings/team/{team_id}"))?;

        let mut body = Body::new();
        body.insert("updates".into(), json_encoded(updates)?);
        body.insert("options".into(), opt_json_encoded(options)?);

        self.post(url, body).await
    }

    /// Deletes a team from a certain account.
    pub async fn delete_team_for_account(
        &self,
        account_id: &str,
        team_id: &str,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("team ID", team_id)])?;
        let url = self.build_url(&format!("/{account_id}/settings/team/{team_id}"))?;
        self.delete(url, None).await
    }

    /// Returns the tags configured for a certain account.
    pub async fn get_tags_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/tags"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the publishing guidelines configured for a certain account.
    pub async fn get_publishing_guidelines_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/publishing_guidelines"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the social profile groups of a certain account.
    pub async fn get_social_profile_groups_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/profilegroups"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Adds a new social profile group to a certain account.
    pub async fn add_social_profile_group_for_account(
        &self,
        account_id: &str,
        profile_group: &Value,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        validate_payload("profile group payload", profile_group)?;
        let url = self.build_url(&format!("/{account_id}/settings/profilegroups"))?;

        let mut body = Body::new();
        body.insert("profile_group".into(), json_encoded(profile_group)?);

        self.post(url, body).await
    }

    /// Edits an existing social profile group of a certain account.
    pub async fn update_social_profile_group_for_account(
        &self,
        account_id: &str,
        group_id: &str,
        updates: &Value,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("group ID", group_id)])?;
        validate_payload("updates payload", updates)?;
        let url = self.build_url(&format!("/{account_id}/settings/profilegroup/{group_id}"))?;

        let mut body = Body::new();
        body.insert("updates".into(), json_encoded(updates)?);

        self.post(url, body).await
    }

    /// Deletes a social profile group from a certain account.
    pub async fn delete_social_profile_group_for_account(
        &self,
        account_id: &str,
        group_id: &str,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("group ID", group_id)])?;
        let url = self.build_url(&format!("/{account_id}/settings/profilegroup/{group_id}"))?;
        self.delete(url, None).await
    }

    /// Returns the history of settings changes for a certain account.
    pub async fn get_audit_log_settings_changes_for_account(
        &self,
        account_id: &str,
        params: AuditLogParams,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/history"))?;
        add_query_params(
            &mut url,
            [
                ("date_from", params.date_from.map(|date| date.to_rfc3339())),
                ("date_to", params.date_to.map(|date| date.to_rfc3339())),
                ("types", params.types),
                ("topic_ids", params.topic_ids.map(|ids| ids.join(","))),
                ("user_id", params.user_id),
                ("page_token", params.page_token),
                ("limit", params.limit.map(|limit| limit.to_string())),
            ],
        );
        self.get(url).await
    }

    /// Returns the custom attribute fields defined for a certain account.
    pub async fn get_custom_fields_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/customattributes"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the canned response folders of a certain account.
    pub async fn get_canned_responses_folders_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/canned_responses_folders"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the canned responses of a certain account, optionally
    /// narrowed down by [`CannedResponseParams`].
    pub async fn get_canned_responses_for_account(
        &self,
        account_id: &str,
        params: CannedResponseParams,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/canned_responses"))?;
        add_query_params(
            &mut url,
            [
                ("limit", params.limit.map(|limit| limit.to_string())),
                ("page_token", params.page_token),
                ("topic_id", params.topic_id),
                ("ymid", params.ymid),
                ("query", params.query),
                ("folder_ids", opt_json_param(params.folder_ids.as_ref())?),
                ("order", params.order),
                ("reply_type", params.reply_type),
                ("service_type", params.service_type),
                ("service_id", params.service_id),
            ],
        );
        self.get(url).await
    }

    /// Returns the business hours schedules of a certain account.
    pub async fn get_business_hours_schedules_for_account(
        &self,
        account_id: &str,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/settings/businesshoursschedules"))?;
        add_query_params(
            &mut url,
            [
                ("limit", limit.map(|limit| limit.to_string())),
                ("page_token", page_token.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Adds a new business hours schedule to a certain account.
    pub async fn add_business_hours_schedule_for_account(
        &self,
        account_id: &str,
        business_hours_schedule: &Value,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        validate_payload("business hours schedule payload", business_hours_schedule)?;
        let url = self.build_url(&format!("/{account_id}/settings/businesshoursschedules"))?;

        let mut body = Body::new();
        body.insert(
            "business_hours_schedule".into(),
            json_encoded(business_hours_schedule)?,
        );

        self.post(url, body).await
    }

    /// Edits a business hours schedule of a certain account.
    pub async fn edit_business_hours_schedule_for_account(
        &self,
        account_id: &str,
        id: &str,
        updates: &Value,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("business hours schedule ID", id),
        ])?;
        validate_payload("updates payload", updates)?;
        let url = self.build_url(&format!("/{account_id}/settings/businesshoursschedules/{id}"))?;

        let mut body = Body::new();
        body.insert("updates".into(), json_encoded(updates)?);

        self.post(url, body).await
    }

    /// Deletes a business hours schedule from a certain account.
    pub async fn delete_business_hours_schedule_for_account(
        &self,
        account_id: &str,
        id: &str,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("business hours schedule ID", id),
        ])?;
        let url = self.build_url(&format!("/{account_id}/settings/businesshoursschedules/{id}"))?;
        self.delete(url, None).await
    }
}
