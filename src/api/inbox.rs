/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Inbox: mentions, contacts (social profiles), context history and mailbox
//! configuration.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::{
    add_query_params, json_encoded, opt_json_encoded, opt_string, validate_payload,
    validate_required,
};
use crate::transport::{Body, Response};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Optional filters for [`Client::get_contacts_for_account`].
#[derive(Debug, Default, Clone)]
pub struct ContactListParams {
    /// Comma separated list of fields every returned contact must have.
    pub required_fields: Option<String>,
    pub filter: Option<String>,
    /// Only contacts updated since this moment.
    pub updated_since: Option<DateTime<Utc>>,
    pub page_token: Option<String>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

/// Optional filters for [`Client::get_mentions_for_account`].
#[derive(Debug, Default, Clone)]
pub struct MentionListParams {
    /// A filter query string, as built in the inbox filter.
    pub filter: Option<String>,
    /// Defaults to 28 days ago on the remote side.
    pub date_from: Option<DateTime<Utc>>,
    /// Defaults to now on the remote side.
    pub date_to: Option<DateTime<Utc>>,
    pub topic_ids: Option<Vec<String>>,
    pub page_token: Option<String>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

impl Client {
    /// Adds mentions to a topic of a certain account. `mentions` is an array
    /// of mention objects, transmitted JSON-encoded.
    pub async fn add_mentions_to_topic_for_account(
        &self,
        account_id: &str,
        mentions: &Value,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        validate_payload("mentions payload", mentions)?;
        let url = self.build_url(&format!("/{account_id}/inbox/add"))?;

        let mut body = Body::new();
        body.insert("mentions".into(), json_encoded(mentions)?);

        self.post(url, body).await
    }

    /// Returns a contact (social profile) of a certain account.
    pub async fn get_social_profile_for_account(
        &self,
        account_id: &str,
        contact_id: &str,
        topic_ids: Option<&[&str]>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("contact ID", contact_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/inbox/contact/{contact_id}"))?;
        // The provider expects the plural-plural "topics_ids" key here.
        add_query_params(
            &mut url,
            [("topics_ids", topic_ids.map(|ids| ids.join(",")))],
        );
        self.get(url).await
    }

    /// Updates a contact (social profile) of a certain account.
    pub async fn update_social_profile_for_account(
        &self,
        account_id: &str,
        contact_id: &str,
        updates: &Value,
        options: Option<&Value>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("contact ID", contact_id)])?;
        validate_payload("updates payload", updates)?;
        let url = self.build_url(&format!("/{account_id}/inbox/contact/{contact_id}"))?;

        let mut body = Body::new();
        body.insert("updates".into(), json_encoded(updates)?);
        body.insert("options".into(), opt_json_encoded(options)?);

        self.post(url, body).await
    }

    /// Deletes a contact (social profile) from a certain account.
    ///
    /// `updates` is part of the operation's contract and is validated for
    /// presence, but the delete itself is sent without a body.
    pub async fn delete_social_profile_for_account(
        &self,
        account_id: &str,
        contact_id: &str,
        updates: &Value,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("contact ID", contact_id)])?;
        validate_payload("updates payload", updates)?;
        let url = self.build_url(&format!("/{account_id}/inbox/contact/{contact_id}"))?;
        self.delete(url, None).await
    }

    /// Returns a contact (social profile) of a certain account, addressed by
    /// service (e.g. "twitter") and service-side id rather than contact id.
    pub async fn get_social_profile_for_account_by_service(
        &self,
        account_id: &str,
        service: &str,
        service_id: &str,
        topic_ids: Option<&[&str]>,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("service", service),
            ("service ID", service_id),
        ])?;
        let mut url =
            self.build_url(&format!("/{account_id}/inbox/contact/{service}/{service_id}"))?;
        add_query_params(
            &mut url,
            [("topics_ids", topic_ids.map(|ids| ids.join(",")))],
        );
        self.get(url).await
    }

    /// Updates a contact (social profile) of a certain account, addressed by
    /// service and service-side id.
    pub async fn update_social_profile_for_account_by_service(
        &self,
        account_id: &str,
        service: &str,
        service_id: &str,
        updates: &Value,
        options: Option<&Value>,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("service", service),
            ("service ID", service_id),
        ])?;
        validate_payload("updates payload", updates)?;
        let url =
            self.build_url(&format!("/{account_id}/inbox/contact/{service}/{service_id}"))?;

        let mut body = Body::new();
        body.insert("updates".into(), json_encoded(updates)?);
        body.insert("options".into(), opt_json_encoded(options)?);

        self.post(url, body).await
    }

    /// Returns the contacts of a certain account.
    pub async fn get_contacts_for_account(
        &self,
        account_id: &str,
        params: ContactListParams,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/inbox/contacts"))?;
        add_query_params(
            &mut url,
            [
                ("required_fields", params.required_fields),
                ("filter", params.filter),
                (
                    "updated_since",
                    params.updated_since.map(|date| date.to_rfc3339()),
                ),
                ("page_token", params.page_token),
                ("limit", params.limit.map(|limit| limit.to_string())),
                ("sort", params.sort),
            ],
        );
        self.get(url).await
    }

    /// Returns the context history of a mention, i.e. the surrounding
    /// conversation and audit trail.
    pub async fn get_context_history_of_mention_for_account(
        &self,
        account_id: &str,
        topic_id: &str,
        id: &str,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
        context_type: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("topic ID", topic_id),
            ("mention ID", id),
        ])?;
        let mut url = self.build_url(&format!("/{account_id}/inbox/context/{topic_id}/{id}"))?;
        add_query_params(
            &mut url,
            [
                ("date_from", date_from.map(|date| date.to_rfc3339())),
                ("date_to", date_to.map(|date| date.to_rfc3339())),
                ("context_type", context_type.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Returns the mailbox configuration of a certain account. `limit`
    /// defaults to 20 items per page.
    pub async fn get_mailboxes_configuration(
        &self,
        account_id: &str,
        page_token: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/inbox/mailboxes"))?;
        add_query_params(
            &mut url,
            [
                ("page_token", page_token.map(str::to_string)),
                ("limit", Some(limit.unwrap_or(20).to_string())),
            ],
        );
        self.get(url).await
    }

    /// Returns a single mention.
    pub async fn get_mention(
        &self,
        account_id: &str,
        topic_id: &str,
        id: &str,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("topic ID", topic_id),
            ("mention ID", id),
        ])?;
        let url = self.build_url(&format!("/{account_id}/inbox/mention/{topic_id}/{id}"))?;
        self.get(url).await
    }

    /// Updates a single mention. All three body fields are optional; absent
    /// ones are transmitted as explicit nulls. `list_filter` scopes the
    /// update when the mention is shown in a filtered list.
    pub async fn update_mention(
        &self,
        account_id: &str,
        topic_id: &str,
        id: &str,
        updates: Option<&Value>,
        list_filter: Option<&str>,
        options: Option<&Value>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let url = self.build_url(&format!("/{account_id}/inbox/mention/{topic_id}/{id}"))?;

        let mut body = Body::new();
        body.insert("updates".into(), opt_json_encoded(updates)?);
        body.insert("list_filter".into(), opt_string(list_filter));
        body.insert("options".into(), opt_json_encoded(options)?);

        self.post(url, body).await
    }

    /// Deletes a single mention.
    pub async fn delete_mention(
        &self,
        account_id: &str,
        topic_id: &str,
        id: &str,
        options: Option<&Value>,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("topic ID", topic_id),
            ("mention ID", id),
        ])?;
        let url = self.build_url(&format!("/{account_id}/inbox/mention/{topic_id}/{id}"))?;

        let mut body = Body::new();
        body.insert("options".into(), opt_json_encoded(options)?);

        self.delete(url, Some(body)).await
    }

    /// Returns the mentions of a certain account.
    pub async fn get_mentions_for_account(
        &self,
        account_id: &str,
        params: MentionListParams,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/inbox/mentions"))?;
        add_query_params(
            &mut url,
            [
                ("filter", params.filter),
                ("date_from", params.date_from.map(|date| date.to_rfc3339())),
                ("date_to", params.date_to.map(|date| date.to_rfc3339())),
                ("topic_ids", params.topic_ids.map(|ids| ids.join(","))),
                ("page_token", params.page_token),
                ("limit", params.limit.map(|limit| limit.to_string())),
                ("sort", params.sort),
            ],
        );
        self.get(url).await
    }
}
