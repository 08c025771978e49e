//! Loose equality and ordinal comparison of dynamic values.
//!
//! Loose equality lets numbers, numeric strings and booleans compare by their
//! numeric value, so `4 == "4"` and `1 == true`. Strings compare with strings
//! verbatim, and containers compare structurally using loose equality for
//! their members. `null` only equals `null`.

use core::cmp::Ordering;

use serde_json::{Number, Value};

use crate::coerce::to_number;

/// Returns `true` if two values are loosely equal.
///
/// # Examples
///
/// ```
/// use collectable_internals::loose_eq;
/// use serde_json::json;
///
/// assert!(loose_eq(&json!(4), &json!("4")));
/// assert!(loose_eq(&json!([1, "2"]), &json!(["1", 2])));
/// assert!(!loose_eq(&json!(null), &json!(0)));
/// ```
#[must_use]
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y) == Some(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| loose_eq(x, y)))
        }
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        // Remaining pairs are mixed scalars: number, string or bool.
        _ => match (to_number(a), to_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Compares two values when they are of mutually comparable kinds.
///
/// Numbers compare with numbers, strings with strings (lexicographically by
/// code point) and booleans with booleans. Two `null`s are equal. Any other
/// pairing returns `None`.
#[must_use]
pub fn ordinal_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// A total order over all values, used for sorting.
///
/// Values are ranked by kind first: `null`, booleans, numbers, strings,
/// arrays, then objects. Within a kind, scalars compare as in
/// [`ordinal_cmp`], arrays compare element by element and objects compare
/// their entries in insertion order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use collectable_internals::compare::total_cmp;
/// use serde_json::json;
///
/// assert_eq!(total_cmp(&json!(null), &json!(0)), Ordering::Less);
/// assert_eq!(total_cmp(&json!(10), &json!("1")), Ordering::Less);
/// assert_eq!(total_cmp(&json!([1, 2]), &json!([1, 3])), Ordering::Less);
/// ```
#[must_use]
pub fn total_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y).unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(xs), Value::Array(ys)) => xs
            .iter()
            .zip(ys)
            .map(|(x, y)| total_cmp(x, y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| xs.len().cmp(&ys.len())),
        (Value::Object(xs), Value::Object(ys)) => xs
            .iter()
            .zip(ys)
            .map(|((xk, xv), (yk, yv))| xk.cmp(yk).then_with(|| total_cmp(xv, yv)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| xs.len().cmp(&ys.len())),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Compares two JSON numbers, exactly when both are integers.
#[must_use]
pub fn number_cmp(x: &Number, y: &Number) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return Some(a.cmp(&b));
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return Some(a.cmp(&b));
    }
    x.as_f64()?.partial_cmp(&y.as_f64()?)
}
