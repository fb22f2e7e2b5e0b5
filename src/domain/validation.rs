//! Request validation for the track endpoint.
//!
//! Validation never raises; all outcomes are returned as data so the handler
//! can accumulate every defect before rejecting the request.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A single validation defect in an inbound request.
///
/// Serializes to an externally-tagged single-field object, e.g.
/// `{"missing_key": "ip missing from body"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// A configured required key is absent from the body.
    MissingKey(String),
    /// A present field carries a value of the wrong JSON type.
    WrongType(String),
    /// The route action is not in the configured allow-list.
    Action(String),
}

/// Checks the route action against the configured allow-list.
///
/// Returns `None` when the action is accepted.
pub fn validate_action(action: &str, accepted: &HashSet<String>) -> Option<ValidationError> {
    if accepted.contains(action) {
        None
    } else {
        Some(ValidationError::Action(format!(
            "{action} is not a valid action"
        )))
    }
}

/// Checks an inbound request body against the configured required keys.
///
/// Emits one `missing_key` error per absent key. Only when no key is missing,
/// and `ip` is among the required keys, the `ip` value is additionally
/// required to be a JSON string. Returns an empty list for a valid body.
pub fn validate_body(body: &Map<String, Value>, required_keys: &[String]) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = required_keys
        .iter()
        .filter(|key| !body.contains_key(key.as_str()))
        .map(|key| ValidationError::MissingKey(format!("{key} missing from body")))
        .collect();

    // The type check only runs on a body with all keys present; a missing-key
    // report already covers the absent case.
    if errors.is_empty()
        && required_keys.iter().any(|key| key == "ip")
        && !body.get("ip").is_some_and(Value::is_string)
    {
        errors.push(ValidationError::WrongType("ip should be string".to_string()));
    }

    errors
}
