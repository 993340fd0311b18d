/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Text-analysis tools. These are not scoped to an account.

use crate::client::Client;
use crate::errors::EngageError;
use crate::request::add_query_params;
use crate::transport::Response;

impl Client {
    /// Tries to determine mentioned places (city, region and/or country) in
    /// a given string.
    pub async fn get_geo_locations_from_string(
        &self,
        string: &str,
    ) -> Result<Response, EngageError> {
        let mut url = self.build_url("/tools/geocode")?;
        add_query_params(&mut url, [("string", Some(string.to_string()))]);
        self.get(url).await
    }

    /// Tries to determine the language a given string is written in.
    pub async fn get_language_from_string(&self, string: &str) -> Result<Response, EngageError> {
        let mut url = self.build_url("/tools/geocode")?;
        add_query_params(&mut url, [("string", Some(string.to_string()))]);
        self.get(url).await
    }

    /// Tries to determine the sentiment of a given string. Pass a JSON
    /// encoded array to analyze up to 50 messages at a time; the response is
    /// a score per input, 0 being neutral, higher positive, lower negative.
    /// `language` is an ISO 639-1 code; detected remotely when absent.
    pub async fn get_sentiment_from_string(
        &self,
        string: &str,
        language: Option<&str>,
    ) -> Result<Response, EngageError> {
        let mut url = self.build_url("/tools/geocode")?;
        add_query_params(
            &mut url,
            [
                ("string", Some(string.to_string())),
                ("language", language.map(str::to_string)),
            ],
        );
        self.get(url).await
    }
}
