//! Unwrapping of the `{ success, data }` envelope.
//!
//! Endpoints disagree on shape. A collection may arrive as
//! `{ success, data: { <key>: [...] } }`, `{ success, data: [...] }`, a bare
//! array, or `{ <key>: [...] }`. A single record may arrive as
//! `{ success, data: { <key>: {...} } }`, `{ success, data: {...} }`,
//! `{ <key>: {...} }` or a bare object.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::coerce::parse_flag;

/// `success` is truthy the way the backend writes it: `true`, `1` or `"1"`.
pub(crate) fn is_success(body: &Value) -> bool {
    body.get("success").is_some_and(parse_flag)
}

/// Returns the items of a collection response, or an empty list when no
/// known shape matches.
pub fn unwrap_collection(body: &Value, key: &str) -> Vec<Value> {
    if is_success(body) {
        if let Some(items) = body
            .get("data")
            .and_then(|data| data.get(key))
            .and_then(Value::as_array)
        {
            return items.clone();
        }
        if let Some(items) = body.get("data").and_then(Value::as_array) {
            return items.clone();
        }
    }
    if let Some(items) = body.as_array() {
        return items.clone();
    }
    if let Some(items) = body.get(key).and_then(Value::as_array) {
        return items.clone();
    }

    warn!(key, "unrecognized collection response, using empty list");
    Vec::new()
}

/// Returns the record object of a detail response.
pub fn unwrap_record(body: &Value, key: &str) -> Option<Value> {
    let data = body.get("data").filter(|_| is_success(body) || body.get("success").is_none());

    if let Some(record) = data.and_then(|d| d.get(key)).filter(|r| r.is_object()) {
        return Some(record.clone());
    }
    if let Some(record) = data.filter(|d| d.is_object()) {
        return Some(record.clone());
    }
    if let Some(record) = body.get(key).filter(|r| r.is_object()) {
        return Some(record.clone());
    }
    if body.is_object() && body.get("success").is_none() && body.get("data").is_none() {
        return Some(body.clone());
    }

    warn!(key, "unrecognized record response");
    None
}

/// Minimal shape check applied before a candidate response is accepted.
pub fn is_recognizable(body: &Value, key: &str) -> bool {
    body.is_array()
        || is_success(body)
        || body.get("data").is_some_and(|d| d.is_object() || d.is_array())
        || body.get(key).is_some()
}

/// Decodes every item of a collection, skipping and logging those that do
/// not fit `T`.
pub fn decode_items<T: DeserializeOwned>(items: Vec<Value>, key: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(key, index, error = %e, "skipping malformed item");
                None
            }
        })
        .collect()
}
