/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Dashboard overviews and widget data exports.
//!
//! The widget endpoints return data in whatever shape the widget uses; the
//! schemas are undocumented and unversioned on the provider side, so the
//! payloads here are even more "as is" than elsewhere.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::{add_query_params, validate_required};
use crate::transport::Response;
use chrono::{DateTime, Utc};

impl Client {
    /// Returns the data for a single widget from a dashboard.
    pub async fn get_dashboard_widget_data(
        &self,
        account_id: &str,
        dashboard_id: &str,
        component_id: &str,
        filter: Option<&str>,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("dashboard ID", dashboard_id),
            ("component ID", component_id),
        ])?;
        let mut url = self.build_url(&format!(
            "/{account_id}/dashboards/component/{dashboard_id}/{component_id}"
        ))?;
        add_query_params(
            &mut url,
            [
                ("filter", filter.map(str::to_string)),
                ("date_from", date_from.map(|date| date.to_rfc3339())),
                ("date_to", date_to.map(|date| date.to_rfc3339())),
            ],
        );
        self.get(url).await
    }

    /// Returns the data for all widgets of a specific dashboard.
    pub async fn get_widget_data_from_dashboard(
        &self,
        account_id: &str,
        dashboard_id: &str,
        filter: Option<&str>,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("dashboard ID", dashboard_id)])?;
        let mut url =
            self.build_url(&format!("/{account_id}/dashboards/export/{dashboard_id}"))?;
        add_query_params(
            &mut url,
            [
                ("filter", filter.map(str::to_string)),
                ("date_from", date_from.map(|date| date.to_rfc3339())),
                ("date_to", date_to.map(|date| date.to_rfc3339())),
            ],
        );
        self.get(url).await
    }

    /// Returns a list of all dashboards for an account.
    pub async fn get_dashboards(&self, account_id: &str) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let url = self.build_url(&format!("/{account_id}/dashboards/overview"))?;
        self.get(url).await
    }
}
