// ABOUTME: JSON value helpers for loosely typed request bodies
// ABOUTME: Implements the truthiness rule used to validate the authorization code

use serde_json::Value;

/// Whether a JSON value counts as present for required request fields
///
/// `null`, `false`, the empty string, and numeric zero are falsy. Arrays and
/// objects are truthy even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
