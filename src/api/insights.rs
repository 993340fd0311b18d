/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Statistical insights about mentions, as used by the chart builder.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::{add_query_params, validate_payload, validate_required};
use crate::transport::Response;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Optional filters for [`Client::get_insights`].
#[derive(Debug, Default, Clone)]
pub struct InsightsParams {
    /// Only return data matching this filter query string.
    pub filter: Option<String>,
    /// Defaults to 28 days ago on the remote side.
    pub date_from: Option<DateTime<Utc>>,
    /// Defaults to now on the remote side.
    pub date_to: Option<DateTime<Utc>>,
    /// Topic ids to search in. Required by facets of type "mentions".
    pub topic_ids: Option<Vec<String>>,
    /// Monitored profile ids. Required by facets of type
    /// "monitored profile kpis".
    pub profile_ids: Option<Vec<String>>,
}

impl Client {
    /// Returns statistical data about your mentions, useful for charts or
    /// summary tables. `facet_definitions` is an array of facet definition
    /// objects, transmitted JSON-encoded.
    pub async fn get_insights(
        &self,
        account_id: &str,
        facet_definitions: &Value,
        params: InsightsParams,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        validate_payload("facet definitions payload", facet_definitions)?;
        let mut url = self.build_url(&format!("/{account_id}/insights/facets"))?;
        add_query_params(
            &mut url,
            [
                (
                    "facetdefinitions",
                    Some(serde_json::to_string(facet_definitions)?),
                ),
                ("filter", params.filter),
                ("date_from", params.date_from.map(|date| date.to_rfc3339())),
                ("date_to", params.date_to.map(|date| date.to_rfc3339())),
                ("topic_ids", params.topic_ids.map(|ids| ids.join(","))),
                ("profile_ids", params.profile_ids.map(|ids| ids.join(","))),
            ],
        );
        self.get(url).await
    }
}
