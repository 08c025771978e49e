//! Dot-notation paths into dynamic values.
//!
//! A path such as `"user.address.city"` walks object fields segment by
//! segment. Numeric segments index into arrays, so `"tags.0"` is the first
//! tag. A key that itself contains a dot is still reachable when the whole
//! path names a field of the top-level object.

use serde_json::{Map, Value};

/// The separator between path segments.
pub const SEPARATOR: char = '.';

/// Looks up a dot-notation path inside a value.
///
/// An empty path returns the value itself.
///
/// # Examples
///
/// ```
/// use collectable_internals::path::get;
/// use serde_json::json;
///
/// let value = json!({"user": {"tags": ["a", "b"]}});
/// assert_eq!(get(&value, "user.tags.1"), Some(&json!("b")));
/// assert_eq!(get(&value, "user.name"), None);
/// ```
#[must_use]
pub fn get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    if let Some(found) = value.as_object().and_then(|object| object.get(path)) {
        return Some(found);
    }
    path.split(SEPARATOR)
        .try_fold(value, |current, segment| step(current, segment))
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(object) => object.get(segment),
        Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

/// Flattens the fields of an object into dot-joined paths, appending them to
/// `out`.
///
/// Nested non-empty objects are descended into; arrays, scalars and empty
/// objects are leaves. Later paths overwrite earlier ones.
pub fn flatten_into(object: &Map<String, Value>, prefix: &str, out: &mut Map<String, Value>) {
    for (key, value) in object {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{SEPARATOR}{key}")
        };
        match value {
            Value::Object(nested) if !nested.is_empty() => flatten_into(nested, &path, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

/// Writes `value` at a dot-notation path, creating intermediate objects.
///
/// An intermediate segment that holds a non-object value is replaced by an
/// object.
pub fn set(target: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments = path.split(SEPARATOR).peekable();
    let mut current = target;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_owned(), value);
            return;
        }
        let slot = current
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(next) = slot else {
            return;
        };
        current = next;
    }
}

/// Rebuilds a nested object from dot-joined keys.
///
/// # Examples
///
/// ```
/// use collectable_internals::path::undot;
/// use serde_json::json;
///
/// let nested = undot([("a.b".to_owned(), json!(1)), ("a.c".to_owned(), json!(2))]);
/// assert_eq!(nested, json!({"a": {"b": 1, "c": 2}}));
/// ```
#[must_use]
pub fn undot<I>(entries: I) -> Value
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut root = Map::new();
    for (path, value) in entries {
        set(&mut root, &path, value);
    }
    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_get_literal_dotted_key() {
        let value = json!({"a.b": 1, "a": {"b": 2}});
        assert_eq!(get(&value, "a.b"), Some(&json!(1)));
    }

    #[test]
    fn test_get_through_scalar() {
        let value = json!({"a": 5});
        assert_eq!(get(&value, "a.b"), None);
        assert_eq!(get(&value, ""), Some(&value));
    }

    #[test]
    fn test_flatten_into_keeps_arrays_as_leaves() {
        let value = json!({"name": "x", "meta": {"tags": [1, 2], "empty": {}}});
        let mut out = Map::new();
        flatten_into(value.as_object().unwrap(), "", &mut out);
        assert_eq!(
            Value::Object(out),
            json!({"name": "x", "meta.tags": [1, 2], "meta.empty": {}})
        );
    }

    #[test]
    fn test_set_overwrites_scalar_intermediate() {
        let mut target = Map::new();
        set(&mut target, "a", json!(1));
        set(&mut target, "a.b", json!(2));
        assert_eq!(Value::Object(target), json!({"a": {"b": 2}}));
    }
}
