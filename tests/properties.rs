//! Property tests for the generic operations of `Collection`.
//!
//! ## Transformation Properties
//! - `filter_keeps_exactly_matching`: `filter` keeps the matching elements in
//!   order
//! - `map_preserves_count`: `map` never changes the element count
//! - `chunk_is_lossless`: collapsing the chunks gives back the input
//! - `unique_is_idempotent`: deduplicating twice is deduplicating once
//! - `partition_splits_every_element`: each element lands on exactly one side
//! - `sort_is_ordered_permutation`: sorting orders and keeps every element
//! - `mixed_value_sort_is_ordered`: sorting heterogeneous values never
//!   panics and yields a non-decreasing sequence
//!
//! ## Slicing Properties
//! - `for_page_covers_input`: consecutive pages concatenate to the input
//! - `split_sizes_differ_by_one`: `split` balances its groups
//!
//! ## Aggregate Properties
//! - `average_within_bounds`: the average lies between min and max
//! - `percentage_complements`: a predicate and its negation sum to 100

use collectable::{Collection, Ordinal, Value, collect};
use proptest::prelude::*;
use serde_json::json;

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-50i32..50, 0..40)
}

fn mixed_values() -> impl Strategy<Value = Vec<Value>> {
    let scalar = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-20i64..20).prop_map(Value::from),
        (-20.0f64..20.0).prop_map(|n| json!(n)),
        "[a-c]{0,2}".prop_map(Value::from),
    ];
    let element = prop_oneof![
        4 => scalar.clone(),
        1 => proptest::collection::vec(scalar.clone(), 0..3).prop_map(Value::from),
        1 => scalar.prop_map(|v| json!({"age": v})),
    ];
    proptest::collection::vec(element, 0..40)
}

proptest! {
    #[test]
    fn filter_keeps_exactly_matching(items in small_ints(), threshold in -50i32..50) {
        let filtered = collect(items.clone()).filter(|n| *n > threshold);
        let expected: Vec<i32> = items.into_iter().filter(|n| *n > threshold).collect();
        prop_assert_eq!(filtered.unwrap(), expected);
    }

    #[test]
    fn map_preserves_count(items in small_ints()) {
        let numbers = collect(items);
        prop_assert_eq!(numbers.map(|n| i64::from(*n) * 3).count(), numbers.count());
    }

    #[test]
    fn chunk_is_lossless(items in small_ints(), size in 1usize..10) {
        let numbers = collect(items);
        let chunks = numbers.chunk(size);
        prop_assert!(chunks.every(|chunk| chunk.count() <= size && chunk.is_not_empty()));
        prop_assert_eq!(chunks.collapse(), numbers.clone());
        prop_assert!(numbers.chunk(0).is_empty());
    }

    #[test]
    fn unique_is_idempotent(items in small_ints()) {
        let unique = collect(items).unique();
        prop_assert_eq!(unique.unique(), unique.clone());
        prop_assert_eq!(unique.unique_strict(), unique);
    }

    #[test]
    fn partition_splits_every_element(items in small_ints()) {
        let numbers = collect(items);
        let (even, odd) = numbers.partition(|n| n % 2 == 0);
        prop_assert_eq!(even.count() + odd.count(), numbers.count());
        prop_assert!(even.every(|n| n % 2 == 0));
        prop_assert!(odd.every(|n| n % 2 != 0));
    }

    #[test]
    fn sort_is_ordered_permutation(items in small_ints()) {
        let sorted = collect(items.clone()).sort();
        let mut expected = items;
        expected.sort();
        prop_assert_eq!(sorted.clone().unwrap(), expected);
        prop_assert_eq!(sorted.reverse(), collect(sorted.to_vec()).sort_desc());
    }

    #[test]
    fn mixed_value_sort_is_ordered(items in mixed_values()) {
        let values = collect(items);
        let sorted = values.sort();
        prop_assert_eq!(sorted.count(), values.count());
        prop_assert!(sorted.all().windows(2).all(|pair| pair[0].sort_cmp(&pair[1]).is_le()));
        let by_age = values.sort_by(|item| item["age"].clone());
        prop_assert!(by_age
            .all()
            .windows(2)
            .all(|pair| pair[0]["age"].sort_cmp(&pair[1]["age"]).is_le()));
    }

    #[test]
    fn for_page_covers_input(items in small_ints(), per_page in 1usize..8) {
        let numbers = collect(items);
        let pages = numbers.count().div_ceil(per_page);
        let rejoined: Collection<i32> = (1..=pages)
            .flat_map(|page| numbers.for_page(page, per_page))
            .collect();
        prop_assert_eq!(rejoined, numbers.clone());
        prop_assert!(numbers.for_page(pages + 1, per_page).is_empty());
    }

    #[test]
    fn split_sizes_differ_by_one(items in small_ints(), groups in 1usize..6) {
        let numbers = collect(items);
        let split = numbers.split(groups);
        let sizes = split.map(Collection::count);
        if let (Ok(Some(min)), Ok(Some(max))) = (sizes.min(), sizes.max()) {
            prop_assert!(max - min <= 1);
        }
        prop_assert_eq!(split.collapse(), numbers);
    }

    #[test]
    fn average_within_bounds(items in proptest::collection::vec(-1000i32..1000, 1..30)) {
        let numbers = collect(items);
        let average = numbers.average();
        let min = f64::from(numbers.min().unwrap().unwrap());
        let max = f64::from(numbers.max().unwrap().unwrap());
        prop_assert!(min <= average && average <= max);
    }

    #[test]
    fn percentage_complements(items in proptest::collection::vec(any::<bool>(), 1..30)) {
        let flags = collect(items);
        let yes = flags.percentage_with_precision(|flag| *flag, 6);
        let no = flags.percentage_with_precision(|flag| !*flag, 6);
        prop_assert!((yes + no - 100.0).abs() < 1e-3);
    }
}
