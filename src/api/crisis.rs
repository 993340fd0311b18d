/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Crisis plans and their to-do items.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::{add_query_params, validate_required};
use crate::transport::{Body, Response};
use serde_json::Value;

impl Client {
    /// Enables or disables a crisis plan. `crisis_name` names the new crisis
    /// event when activating; it is sent as an empty string when absent.
    pub async fn toggle_crisis_plan(
        &self,
        account_id: &str,
        plan_id: &str,
        activate: bool,
        crisis_name: Option<&str>,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id), ("crisis plan ID", plan_id)])?;
        let url = self.build_url(&format!("/{account_id}/crisis/event/"))?;

        let mut body = Body::new();
        body.insert("id".into(), Value::String(plan_id.to_owned()));
        body.insert("activate".into(), Value::Bool(activate));
        body.insert(
            "crisis_name".into(),
            Value::String(crisis_name.unwrap_or_default().to_owned()),
        );

        self.post(url, body).await
    }

    /// Returns the crisis plans of an account. Set `active_only` to restrict
    /// the list to currently active plans.
    pub async fn get_crisis_plans_for_account(
        &self,
        account_id: &str,
        active_only: bool,
    ) -> Result<Response, EngageError> {
        validate_required(&[("account ID", account_id)])?;
        let mut url = self.build_url(&format!("/{account_id}/crisis/plans"))?;
        add_query_params(
            &mut url,
            [("active_only", active_only.then(|| "1".to_string()))],
        );
        self.get(url).await
    }

    /// Marks a to-do item of a crisis plan as done or to do.
    pub async fn toggle_todo_for_account(
        &self,
        account_id: &str,
        plan_id: &str,
        todo_id: &str,
        done: bool,
    ) -> Result<Response, EngageError> {
        validate_required(&[
            ("account ID", account_id),
            ("crisis plan ID", plan_id),
            ("to-do ID", todo_id),
        ])?;
        let url = self.build_url(&format!("/{account_id}/crisis/todo/"))?;

        let mut body = Body::new();
        body.insert("plan_id".into(), Value::String(plan_id.to_owned()));
        body.insert("todo_id".into(), Value::String(todo_id.to_owned()));
        body.insert("done".into(), Value::Bool(done));

        self.post(url, body).await
    }
}
