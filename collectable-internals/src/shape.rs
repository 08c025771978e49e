//! Partial-shape matching and key overlap between objects.

use serde_json::Value;

use crate::compare::loose_eq;

/// Returns `true` when every field of `shape` is present in `item` with a
/// loosely equal value.
///
/// Only the fields named by `shape` are compared, so `{"id": 1}` matches
/// `{"id": 1, "name": "x"}`. A non-object shape falls back to
/// [`loose_eq`].
///
/// # Examples
///
/// ```
/// use collectable_internals::shape::matches_shape;
/// use serde_json::json;
///
/// assert!(matches_shape(&json!({"id": 1, "name": "x"}), &json!({"id": "1"})));
/// assert!(!matches_shape(&json!({"id": 1}), &json!({"id": 1, "name": "x"})));
/// ```
#[must_use]
pub fn matches_shape(item: &Value, shape: &Value) -> bool {
    match (item, shape) {
        (Value::Object(fields), Value::Object(expected)) => expected
            .iter()
            .all(|(key, value)| fields.get(key).is_some_and(|found| loose_eq(found, value))),
        (_, Value::Object(_)) => false,
        _ => loose_eq(item, shape),
    }
}

/// Returns `true` if two objects share at least one key.
///
/// Values that are not objects have no keys.
#[must_use]
pub fn keys_overlap(a: &Value, b: &Value) -> bool {
    match (a.as_object(), b.as_object()) {
        (Some(a), Some(b)) => a.keys().any(|key| b.contains_key(key)),
        _ => false,
    }
}
