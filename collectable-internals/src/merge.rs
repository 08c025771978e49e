//! Recursive merge and recursive replace over dynamic values.
//!
//! Both operations build a new tree and never modify their inputs. JSON
//! trees are acyclic, so recursion depth is bounded by the depth of the
//! inputs.

use serde_json::{Map, Value};

/// Merges two values, the later one taking precedence.
///
/// - two objects merge key by key, recursively
/// - two arrays merge with [`merge_lists`]
/// - any other pairing yields a copy of `later`
#[must_use]
pub fn merge_values(earlier: &Value, later: &Value) -> Value {
    match (earlier, later) {
        (Value::Object(a), Value::Object(b)) => Value::Object(merge_objects(a, b)),
        (Value::Array(a), Value::Array(b)) => Value::Array(merge_lists(a, b)),
        _ => later.clone(),
    }
}

fn merge_objects(earlier: &Map<String, Value>, later: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = earlier.clone();
    for (key, value) in later {
        let next = match merged.get(key) {
            Some(existing) => merge_values(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

/// Merges two lists.
///
/// A pair of lists made only of scalars is concatenated. As soon as either
/// side holds an array or object, the lists merge position by position with
/// [`merge_values`], and the tail of the longer list is kept as is.
///
/// # Examples
///
/// ```
/// use collectable_internals::merge::merge_lists;
/// use serde_json::json;
///
/// let tags = merge_lists(&[json!("a")], &[json!("b")]);
/// assert_eq!(tags, vec![json!("a"), json!("b")]);
///
/// let rows = merge_lists(&[json!({"a": 1, "b": 2})], &[json!({"a": 10})]);
/// assert_eq!(rows, vec![json!({"a": 10, "b": 2})]);
/// ```
#[must_use]
pub fn merge_lists(earlier: &[Value], later: &[Value]) -> Vec<Value> {
    let is_scalar = |value: &Value| !value.is_array() && !value.is_object();
    if earlier.iter().chain(later).all(is_scalar) {
        return earlier.iter().chain(later).cloned().collect();
    }
    let len = earlier.len().max(later.len());
    (0..len)
        .filter_map(|index| match (earlier.get(index), later.get(index)) {
            (Some(a), Some(b)) => Some(merge_values(a, b)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        })
        .collect()
}

/// Overwrites `base` with `patch`, descending into containers.
///
/// Objects are replaced key by key and arrays index by index; indices or
/// keys missing from `base` are added. Any other pairing yields a copy of
/// `patch`. Unlike [`merge_values`], arrays are never concatenated.
#[must_use]
pub fn replace_values(base: &Value, patch: &Value) -> Value {
    match (base, patch) {
        (Value::Object(a), Value::Object(b)) => {
            let mut replaced = a.clone();
            for (key, value) in b {
                let next = match replaced.get(key) {
                    Some(existing) => replace_values(existing, value),
                    None => value.clone(),
                };
                replaced.insert(key.clone(), next);
            }
            Value::Object(replaced)
        }
        (Value::Array(a), Value::Array(b)) => {
            let mut replaced = a.clone();
            for (index, value) in b.iter().enumerate() {
                match replaced.get_mut(index) {
                    Some(existing) => *existing = replace_values(existing, value),
                    None => replaced.push(value.clone()),
                }
            }
            Value::Array(replaced)
        }
        _ => patch.clone(),
    }
}
