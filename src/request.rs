/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! URL, query-string and body assembly shared by every API operation.

use crate::errors::EngageError;
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Resolves a path (identifiers already interpolated) against an origin.
pub(crate) fn build_url(origin: &str, path: &str) -> Result<Url, EngageError> {
    Ok(Url::parse(origin)?.join(path)?)
}

/// Sets each query parameter whose key and value are both non-empty.
///
/// `None` and `""` both mean "not supplied" and are skipped entirely rather
/// than sent as empty pairs. Keys already present on the URL are overwritten,
/// never duplicated, and iteration order is preserved, so identical inputs
/// always produce identical URLs.
pub(crate) fn add_query_params<'a>(
    url: &mut Url,
    params: impl IntoIterator<Item = (&'a str, Option<String>)>,
) {
    for (key, value) in params {
        if key.is_empty() {
            continue;
        }
        match value {
            Some(value) if !value.is_empty() => set_query_param(url, key, &value),
            _ => {}
        }
    }
}

/// Sets `key` to `value`, replacing every pre-existing pair with that key.
pub(crate) fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k.as_ref() != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (k, v) in &kept {
        pairs.append_pair(k, v);
    }
    pairs.append_pair(key, value);
}

/// Attaches the access token, overwriting any prior value. Called from the
/// client's single transport exit point, after all other parameters, so no
/// call path can leave without it.
pub(crate) fn attach_credential(url: &mut Url, access_token: &str) {
    set_query_param(url, "access_token", access_token);
}

/// Checks required string identifiers in declaration order. The first empty
/// one aborts the call, before any URL is built.
pub(crate) fn validate_required(fields: &[(&'static str, &str)]) -> Result<(), EngageError> {
    for &(field, value) in fields {
        if value.is_empty() {
            return Err(EngageError::MissingArgument { field });
        }
    }
    Ok(())
}

/// Presence check for required JSON payload arguments; `Null` counts as
/// absent.
pub(crate) fn validate_payload(field: &'static str, value: &Value) -> Result<(), EngageError> {
    if value.is_null() {
        return Err(EngageError::MissingArgument { field });
    }
    Ok(())
}

/// JSON-encodes a structured value for transmission as a single body or
/// query value, matching the documented wire contract for "JSON encoded
/// array" parameters.
pub(crate) fn json_encoded<T: Serialize + ?Sized>(value: &T) -> Result<Value, EngageError> {
    Ok(Value::String(serde_json::to_string(value)?))
}

/// Optional variant of [`json_encoded`]. Absent values become an explicit
/// `Null` that stays in the body: body fields, unlike query parameters, are
/// never filtered, since a null is how callers clear a field remotely.
pub(crate) fn opt_json_encoded<T: Serialize>(value: Option<&T>) -> Result<Value, EngageError> {
    match value {
        Some(value) => json_encoded(value),
        None => Ok(Value::Null),
    }
}

/// JSON-encodes an optional structured query value; absent stays absent.
pub(crate) fn opt_json_param<T: Serialize>(
    value: Option<&T>,
) -> Result<Option<String>, EngageError> {
    value
        .map(|value| serde_json::to_string(value).map_err(EngageError::from))
        .transpose()
}

/// Optional scalar body value, preserved as `Null` when absent.
pub(crate) fn opt_string(value: Option<&str>) -> Value {
    match value {
        Some(value) => Value::String(value.to_owned()),
        None => Value::Null,
    }
}
