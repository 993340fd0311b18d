/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Publisher: drafting, scheduling and inspecting outgoing mentions.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::{
    add_query_params, json_encoded, opt_json_encoded, opt_string, validate_payload,
    validate_required,
};
use crate::transport::{Body, Response};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Optional fields for [`Client::update_publisher_services_and_options`].
/// Every absent field is transmitted as an explicit null.
#[derive(Debug, Default, Clone)]
pub struct PublishParams {
    /// Publication type, sent as the `type` parameter.
    pub kind: Option<String>,
    pub to: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
    /// When to publish; immediately when absent.
    pub date_publish: Option<DateTime<Utc>>,
    pub topic_id: Option<String>,
    pub mention_id: Option<String>,
    /// Media attachments, transmitted JSON-encoded.
    pub media: Option<Value>,
    pub canned_response_id: Option<String>,
}

/// Optional filters for [`Client::get_publisher_mentions`].
#[derive(Debug, Default, Clone)]
pub struct PublisherMentionListParams {
    /// Which list to return (e.g. scheduled vs sent), sent as the `type`
    /// parameter.
    pub filter: Option<String>,
    pub topic_ids: Option<Vec<String>>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub page_token: Option<String>,
    pub limit: Option<u32>,
}

impl Client {
    /// Returns the services that can be published to and the options each
    /// service supports, optionally scoped to a reply to a specific mention.
    pub async fn get_publisher_services_and_options(
        &self,
        account_id: &str,
        kind: Option<&str>,
        topic_id: Option<&str>,
        mention_id: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/publisher/add"))?;
        add_query_params(
            &mut url,
            [
                ("type", kind.map(str::to_string)),
                ("topic_id", topic_id.map(str::to_string)),
                ("mention_id", mention_id.map(str::to_string)),
            ],
        );
        self.get(url).await
    }

    /// Creates a new outgoing mention. `services` is an array of items with
    /// `type` and `service_id` properties, transmitted JSON-encoded.
    pub async fn update_publisher_services_and_options(
        &self,
        account_id: &str,
        services: &Value,
        params: PublishParams,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        validate_payload("services payload", services)?;
        let url = self.build_url(&format!("/{account_id}/publisher/add"))?;

        let mut body = Body::new();
        body.insert("type".into(), opt_string(params.kind.as_deref()));
        body.insert("services".into(), json_encoded(services)?);
        body.insert("to".into(), opt_string(params.to.as_deref()));
        body.insert("subject".into(), opt_string(params.subject.as_deref()));
        body.insert("message".into(), opt_string(params.message.as_deref()));
        body.insert("status".into(), opt_string(params.status.as_deref()));
        body.insert(
            "date_publish".into(),
            opt_string(params.date_publish.map(|date| date.to_rfc3339()).as_deref()),
        );
        body.insert("topic_id".into(), opt_string(params.topic_id.as_deref()));
        body.insert("mention_id".into(), opt_string(params.mention_id.as_deref()));
        body.insert("media".into(), opt_json_encoded(params.media.as_ref())?);
        body.insert(
            "canned_response_id".into(),
            opt_string(params.canned_response_id.as_deref()),
        );

        self.post(url, body).await
    }

    /// Returns a single mention from the publisher.
    pub async fn get_publisher_mention(
        &self,
        account_id: &str,
        id: &str,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("publisher mention ID", id)])?;
        let url = self.build_url(&format!("/{account_id}/publisher/mention/{id}"))?;
        self.get(url).await
    }

    /// Updates a mention in the publisher, e.g. to reschedule or cancel it.
    pub async fn update_publisher_mention(
        &self,
        account_id: &str,
        id: &str,
        updates: &Value,
        options: Option<&Value>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("publisher mention ID", id)])?;
        validate_payload("updates payload", updates)?;
        let url = self.build_url(&format!("/{account_id}/publisher/mention/{id}"))?;

        let mut body = Body::new();
        body.insert("updates".into(), json_encoded(updates)?);
        body.insert("options".into(), opt_json_encoded(options)?);

        self.post(url, body).await
    }

    /// Returns the outgoing mentions of a certain account.
    pub async fn get_publisher_mentions(
        &self,
        account_id: &str,
        params: PublisherMentionListParams,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/publisher/mentions"))?;
        add_query_params(
            &mut url,
            [
                ("type", params.filter),
                ("topic_ids", params.topic_ids.map(|ids| ids.join(","))),
                ("date_from", params.date_from.map(|date| date.to_rfc3339())),
                ("date_to", params.date_to.map(|date| date.to_rfc3339())),
                ("page_token", params.page_token),
                ("limit", params.limit.map(|limit| limit.to_string())),
            ],
        );
        self.get(url).await
    }
}
