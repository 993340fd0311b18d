/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, FailingTransport, RecordingTransport, TEST_TOKEN};
    use engage::api::MentionListParams;
    use engage::{Client, EngageError};
    use serde_json::{Value, json};

    #[tokio::test]
    async fn missing_account_id_fails_before_any_transport_call() {
        let (client, transport) = helpers::recording_client();
        let err = client
            .get_users_for_account("", Some(20), None)
            .await
            .unwrap_err();

        assert!(matches!(err, EngageError::MissingArgument { .. }));
        assert_eq!(err.to_string(), "Please give an account ID");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn validation_reports_the_first_missing_field_only() {
        let (client, transport) = helpers::recording_client();
        // Both identifiers are empty; only the first is reported.
        let err = client.get_user_for_account("", "").await.unwrap_err();
        assert_eq!(err.to_string(), "Please give an account ID");

        let err = client.get_user_for_account("12345", "").await.unwrap_err();
        assert_eq!(err.to_string(), "Please give a user ID");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn empty_optional_parameters_are_omitted_entirely() {
        let (client, transport) = helpers::recording_client();
        client
            .get_filter_options("12345", Some(""), Some(5), None)
            .await
            .unwrap();

        let request = transport.single_request();
        assert_eq!(request.url.path(), "/12345/filter/suggestions");
        let keys: Vec<String> = request
            .url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, vec!["limit", "access_token"]);
    }

    #[tokio::test]
    async fn listing_users_with_limit_only_sends_exactly_that_parameter() {
        let (client, transport) = helpers::recording_client();
        client
            .get_users_for_account("12345", Some(20), None)
            .await
            .unwrap();

        let request = transport.single_request();
        let query = request.url.query().unwrap();
        assert!(query.contains("limit=20"));
        assert!(!query.contains("page_token"));
    }

    #[tokio::test]
    async fn access_token_is_present_exactly_once_and_applied_last() {
        let (client, transport) = helpers::recording_client();
        client
            .get_mentions_for_account(
                "12345",
                MentionListParams {
                    filter: Some("tag:urgent".into()),
                    topic_ids: Some(vec!["1".into(), "2".into()]),
                    limit: Some(50),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let request = transport.single_request();
        let tokens: Vec<String> = request
            .url
            .query_pairs()
            .filter(|(k, _)| k == "access_token")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(tokens, vec![TEST_TOKEN.to_string()]);
        assert!(
            request
                .url
                .query()
                .unwrap()
                .ends_with(&format!("access_token={TEST_TOKEN}"))
        );
    }

    #[tokio::test]
    async fn access_token_reflects_construction_across_repeated_calls() {
        let (client, transport) = helpers::recording_client();
        client.get_currently_logged_in_user().await.unwrap();
        client.get_dashboards("12345").await.unwrap();

        for request in transport.requests() {
            let token = request
                .url
                .query_pairs()
                .find(|(k, _)| k == "access_token")
                .map(|(_, v)| v.into_owned());
            assert_eq!(token.as_deref(), Some(TEST_TOKEN));
        }
    }

    #[tokio::test]
    async fn query_values_are_encoded() {
        let (client, transport) = helpers::recording_client();
        client
            .get_filter_options("12345", Some("a&b=c"), None, None)
            .await
            .unwrap();

        let request = transport.single_request();
        assert!(request.url.query().unwrap().contains("query=a%26b%3Dc"));
        let decoded = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "query")
            .map(|(_, v)| v.into_owned());
        assert_eq!(decoded.as_deref(), Some("a&b=c"));
    }

    #[tokio::test]
    async fn identical_inputs_build_identical_urls() {
        let (client, transport) = helpers::recording_client();
        let params = || MentionListParams {
            filter: Some("is:unresolved".into()),
            topic_ids: Some(vec!["7".into(), "8".into()]),
            limit: Some(25),
            sort: Some("date_received:desc".into()),
            ..Default::default()
        };
        client
            .get_mentions_for_account("12345", params())
            .await
            .unwrap();
        client
            .get_mentions_for_account("12345", params())
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url.as_str(), requests[1].url.as_str());
    }

    #[tokio::test]
    async fn absent_body_fields_are_kept_as_explicit_nulls() {
        let (client, transport) = helpers::recording_client();
        client
            .update_mention("12345", "67", "89", None, None, None)
            .await
            .unwrap();

        let request = transport.single_request();
        let body = request.body.unwrap();
        assert_eq!(body["updates"], Value::Null);
        assert_eq!(body["list_filter"], Value::Null);
        assert_eq!(body["options"], Value::Null);
    }

    #[tokio::test]
    async fn structured_body_values_are_json_encoded_strings() {
        let (client, transport) = helpers::recording_client();
        let updates = json!([{"action": "resolve"}]);
        client
            .update_user_for_account("12345", "67", &updates)
            .await
            .unwrap();

        let request = transport.single_request();
        assert_eq!(request.method, reqwest::Method::POST);
        let body = request.body.unwrap();
        assert_eq!(body["updates"], json!(r#"[{"action":"resolve"}]"#));
    }

    #[tokio::test]
    async fn transport_failures_are_passed_through_untouched() {
        let client = Client::new(FailingTransport, TEST_TOKEN).unwrap();
        let err = client.get_dashboards("12345").await.unwrap_err();

        match err {
            EngageError::Transport(source) => {
                assert_eq!(source.to_string(), "connection reset by peer")
            }
            other => panic!("expected a transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn construction_requires_a_non_empty_access_token() {
        let err = Client::new(RecordingTransport::new(), "").unwrap_err();
        assert!(matches!(err, EngageError::Configuration(_)));
    }
}
