/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::transport::BoxError;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum EngageError {
    /// A required argument was absent or empty. Raised before any URL is
    /// built, so no request reaches the transport.
    #[error("{}", missing_argument_message(.field))]
    MissingArgument { field: &'static str },

    /// Invalid construction input, e.g. an empty access token or a base URL
    /// that does not parse.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failure raised by the [`Transport`](crate::transport::Transport),
    /// passed through to the caller untouched.
    #[error("Transport error: {0}")]
    Transport(BoxError),

    #[error("JSON serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl From<url::ParseError> for EngageError {
    fn from(err: url::ParseError) -> Self {
        EngageError::Configuration(err.to_string())
    }
}

// "an account ID" but "a user ID": the article follows the sound, not the
// letter.
fn missing_argument_message(field: &str) -> String {
    let article = match field.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') if !field.starts_with("use") => "an",
        _ => "a",
    };
    format!("Please give {article} {field}")
}
