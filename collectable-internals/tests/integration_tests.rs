//! Integration tests for the collectable-internals crate.
//!
//! These tests exercise the public primitives together, the way the
//! `collectable` crate combines them:
//!
//! ## Comparison Tests (3 tests)
//! - `test_loose_eq_is_symmetric`: loose equality gives the same answer in
//!   both directions for a grid of scalar and container values
//! - `test_loose_eq_agrees_with_to_number`: mixed scalars are equal exactly
//!   when their numeric coercions are equal
//! - `test_ordinal_cmp_total_within_kind`: numbers, strings and booleans are
//!   totally ordered among themselves
//!
//! ## Path Tests (2 tests)
//! - `test_flatten_then_undot_restores_objects`: flattening nested objects and
//!   rebuilding them from dotted keys returns the original tree
//! - `test_get_reaches_flattened_paths`: every path produced by flattening is
//!   reachable with `get`
//!
//! ## Merge and Shape Tests (3 tests)
//! - `test_merge_then_match_shape`: a merged record matches the shape of the
//!   later record
//! - `test_replace_is_idempotent`: replacing twice with the same patch is the
//!   same as replacing once
//! - `test_to_key_for_grouping`: keys produced for numbers and numeric strings
//!   collide the way grouping expects

use collectable_internals::{
    Kind, loose_eq,
    merge::{merge_values, replace_values},
    ordinal_cmp,
    path::{flatten_into, get, undot},
    shape::matches_shape,
    to_key, to_number,
};
use core::cmp::Ordering;
use serde_json::{Map, Value, json};

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        json!(true),
        json!(false),
        json!(0),
        json!(1),
        json!(1.0),
        json!(2.5),
        json!("1"),
        json!(" 2.5 "),
        json!("abc"),
        json!(""),
        json!([1, "2"]),
        json!(["1", 2]),
        json!({"a": 1}),
        json!({"a": "1"}),
    ]
}

#[test]
fn test_loose_eq_is_symmetric() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(loose_eq(a, b), loose_eq(b, a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_loose_eq_agrees_with_to_number() {
    let values = samples();
    for a in &values {
        for b in &values {
            let scalar = |v: &Value| matches!(Kind::of(v), Kind::Bool | Kind::Integer | Kind::Float);
            if scalar(a) && scalar(b) {
                assert_eq!(loose_eq(a, b), to_number(a) == to_number(b), "{a} vs {b}");
            }
        }
    }
}

#[test]
fn test_ordinal_cmp_total_within_kind() {
    let numbers = [json!(-1), json!(0.5), json!(3), json!(u64::MAX)];
    for window in numbers.windows(2) {
        assert_eq!(ordinal_cmp(&window[0], &window[1]), Some(Ordering::Less));
        assert_eq!(ordinal_cmp(&window[1], &window[0]), Some(Ordering::Greater));
    }
    assert_eq!(ordinal_cmp(&json!("apple"), &json!("banana")), Some(Ordering::Less));
    assert_eq!(ordinal_cmp(&json!(false), &json!(true)), Some(Ordering::Less));
    assert_eq!(ordinal_cmp(&json!("apple"), &json!(1)), None);
}

#[test]
fn test_flatten_then_undot_restores_objects() {
    let original = json!({
        "user": {"name": "Alice", "address": {"city": "Paris", "zip": "75001"}},
        "tags": ["a", "b"],
        "active": true
    });
    let mut flat = Map::new();
    flatten_into(original.as_object().unwrap(), "", &mut flat);
    assert_eq!(flat.get("user.address.city"), Some(&json!("Paris")));
    assert_eq!(flat.get("tags"), Some(&json!(["a", "b"])));
    assert_eq!(undot(flat), original);
}

#[test]
fn test_get_reaches_flattened_paths() {
    let original = json!({"a": {"b": {"c": 1}, "d": [1, 2]}, "e": null});
    let mut flat = Map::new();
    flatten_into(original.as_object().unwrap(), "", &mut flat);
    for (path, value) in &flat {
        assert_eq!(get(&original, path), Some(value), "{path}");
    }
}

#[test]
fn test_merge_then_match_shape() {
    let earlier = json!({"user": {"name": "Alice", "age": 25}, "role": "admin"});
    let later = json!({"user": {"age": 26, "email": "alice@example.com"}, "active": true});
    let merged = merge_values(&earlier, &later);
    assert!(matches_shape(&merged, &later));
    assert!(matches_shape(&merged, &json!({"role": "admin"})));
    assert_eq!(get(&merged, "user.name"), Some(&json!("Alice")));
}

#[test]
fn test_replace_is_idempotent() {
    let base = json!({"a": [1, {"b": 2}], "c": "x"});
    let patch = json!({"a": [0, {"d": 3}], "c": {"nested": true}});
    let once = replace_values(&base, &patch);
    let twice = replace_values(&once, &patch);
    assert_eq!(once, twice);
    assert_eq!(once, json!({"a": [0, {"b": 2, "d": 3}], "c": {"nested": true}}));
}

#[test]
fn test_to_key_for_grouping() {
    assert_eq!(to_key(&json!(1)), to_key(&json!("1")));
    assert_ne!(to_key(&json!(1)), to_key(&json!(1.5)));
    assert_eq!(to_key(&json!(false)), "false");
}
