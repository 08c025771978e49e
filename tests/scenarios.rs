//! End-to-end scenarios combining several operation families.
//!
//! ## Documented Behavior (6 tests)
//! - `test_filter_map_chain`: filtering then mapping a list of numbers
//! - `test_chunk_while_equal_runs`: grouping equal neighbours into runs
//! - `test_after_loose_and_strict`: needles with and without coercion
//! - `test_duplicates_by_field_keeps_first_seen`: duplicate records by id
//! - `test_average_of_mixed_numbers`: numeric strings count as numbers
//! - `test_empty_input_neutral_values`: aggregates on nothing
//!
//! ## Error Reporting (2 tests)
//! - `test_ensure_reports_offending_index`: type expectations on records
//! - `test_first_or_fail_in_fallible_pipeline`: `?` propagation of reports
//!
//! ## Records Pipeline (2 tests)
//! - `test_report_over_orders`: grouping, aggregates and plucking together
//! - `test_json_round_trip_of_pipeline_result`: serde on collections

use collectable::{
    Collection, ItemNotFound, Needle, TypeDescriptor, UnexpectedValue, Value, collect,
};
use rootcause::Report;
use serde_json::json;

fn orders() -> Collection<Value> {
    collect![
        json!({"id": 1, "customer": "ann", "total": 30, "status": "paid"}),
        json!({"id": 2, "customer": "bob", "total": "12.5", "status": "open"}),
        json!({"id": 3, "customer": "ann", "total": 20, "status": "paid"}),
        json!({"id": 4, "customer": "cid", "total": null, "status": "void"}),
    ]
}

#[test]
fn test_filter_map_chain() {
    let result = collect([1, 2, 3, 4]).filter(|n| *n > 2).map(|n| n * 2);
    assert_eq!(result, [6, 8]);
}

#[test]
fn test_chunk_while_equal_runs() {
    let runs = collect([1, 2, 2, 3, 4, 4, 4, 5, 6])
        .chunk_while(|value, index, items| index == 0 || items[index - 1] == *value);
    assert_eq!(
        runs,
        vec![vec![1], vec![2, 2], vec![3], vec![4, 4, 4], vec![5], vec![6]]
    );
}

#[test]
fn test_after_loose_and_strict() {
    let numbers = collect([json!(2), json!(4), json!(6), json!(8)]);
    assert_eq!(numbers.after(&json!("4")), Some(&json!(6)));
    assert_eq!(numbers.after(Needle::strict(&json!("4"))), None);
}

#[test]
fn test_duplicates_by_field_keeps_first_seen() {
    let users = collect([
        json!({"id": 1, "name": "John"}),
        json!({"id": 2, "name": "Jane"}),
        json!({"id": 1, "name": "Jack"}),
    ]);
    assert_eq!(
        users.duplicates_by_field("id"),
        [json!({"id": 1, "name": "John"})]
    );
}

#[test]
fn test_average_of_mixed_numbers() {
    let mixed = collect([json!(1), json!("2"), json!(3), json!("4"), json!(5)]);
    assert_eq!(mixed.average(), 3.0);
    assert_eq!(mixed.median(), Some(3.0));
}

#[test]
fn test_empty_input_neutral_values() {
    let empty: Collection<Value> = collect![];
    assert_eq!(empty.average(), 0.0);
    assert_eq!(empty.min().unwrap(), None);
    assert_eq!(empty.percentage(|_| true), 0.0);
    assert!(empty.chunk(3).is_empty());
    assert!(empty.dot().is_empty());
}

#[test]
fn test_ensure_reports_offending_index() {
    let orders = orders();
    assert!(orders.ensure(&[TypeDescriptor::Object]).is_ok());

    let totals = orders.pluck("total");
    let report = totals
        .ensure(&[TypeDescriptor::Number, TypeDescriptor::String])
        .unwrap_err();
    assert_eq!(report.current_context().index(), 3);
}

fn first_paid_total(orders: &Collection<Value>) -> Result<f64, Report<ItemNotFound>> {
    let paid = orders.where_eq("status", "paid");
    let first = paid.first_or_fail()?;
    Ok(first["total"].as_f64().unwrap_or_default())
}

#[test]
fn test_first_or_fail_in_fallible_pipeline() {
    assert_eq!(first_paid_total(&orders()).unwrap(), 30.0);

    let report = first_paid_total(&orders().where_eq("status", "open")).unwrap_err();
    assert_eq!(report.current_context().operation(), "first_or_fail");
    assert!(report.to_string().contains("first_or_fail"));
}

#[test]
fn test_report_over_orders() {
    let orders = orders();
    let per_customer = orders.group_by_field("customer");
    assert_eq!(
        per_customer.keys().collect::<Vec<_>>(),
        ["ann", "bob", "cid"]
    );
    assert_eq!(per_customer["ann"].sum_by(|order| order["total"].clone()), 50.0);

    assert_eq!(orders.sum_by(|order| order["total"].clone()), 62.5);
    assert_eq!(orders.pluck("total").average(), 62.5 / 3.0);
    assert_eq!(orders.count_by(|order| order["status"].clone())["paid"], 2);
    assert_eq!(
        orders.where_not_null("total").pluck("customer").unique(),
        [json!("ann"), json!("bob")]
    );
    assert_eq!(
        orders.sort_by_field_desc("id").pluck("id").take(2),
        [json!(4), json!(3)]
    );

    let max: Result<Option<Value>, Report<UnexpectedValue>> = orders.pluck("total").max();
    assert_eq!(max.unwrap_err().current_context().index(), 1);
}

#[test]
fn test_json_round_trip_of_pipeline_result() {
    let summary = orders().only(&["id", "status"]).take(2);
    let text = summary.to_json().unwrap();
    assert_eq!(
        text,
        r#"[{"id":1,"status":"paid"},{"id":2,"status":"open"}]"#
    );
    let parsed: Collection<Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, summary);
}
