//! Coercion of dynamic values into numbers and map keys.

use serde_json::Value;

/// Coerces a value to a number the way the collection aggregates expect.
///
/// - numbers convert directly
/// - strings are trimmed and parsed; an unparsable or blank string is `None`
/// - booleans become `1.0` and `0.0`
/// - `null`, arrays and objects are `None`
///
/// Non-finite parse results (`"NaN"`, `"inf"`) are rejected.
#[must_use]
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_numeric(s),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parses a numeric string, ignoring surrounding whitespace.
#[must_use]
pub fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Renders a value as a map key.
///
/// Strings are used verbatim and integers use their decimal text. Floats go
/// through [`float_key`], so `1.0` and `1` share a key. Booleans become
/// `"true"`/`"false"` and `null` becomes the empty string. Containers are
/// keyed by their compact JSON encoding.
///
/// # Examples
///
/// ```
/// use collectable_internals::to_key;
/// use serde_json::json;
///
/// assert_eq!(to_key(&json!("a")), "a");
/// assert_eq!(to_key(&json!(12)), "12");
/// assert_eq!(to_key(&json!(12.0)), "12");
/// assert_eq!(to_key(&json!(null)), "");
/// ```
#[must_use]
pub fn to_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(float) if n.is_f64() => float_key(float),
            _ => n.to_string(),
        },
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Formats a float the way a key would be formatted: integral values lose
/// their fractional part.
#[must_use]
pub fn float_key(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}
