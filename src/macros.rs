/// Creates a [`Collection`] from a list of elements, like [`vec!`].
///
/// The macro accepts the same forms as [`vec!`]: a comma-separated list of
/// elements, or an element and a count.
///
/// [`Collection`]: crate::Collection
///
/// # Examples
///
/// ```
/// use collectable::{Collection, collect};
/// use serde_json::json;
///
/// let numbers = collect![1, 2, 3];
/// assert_eq!(numbers.sum(), 6.0);
///
/// let zeros = collect![0u8; 4];
/// assert_eq!(zeros.count(), 4);
///
/// let empty: Collection<i32> = collect![];
/// assert!(empty.is_empty());
///
/// let records = collect![json!({"id": 1}), json!({"id": 2})];
/// assert_eq!(records.pluck("id"), [json!(1), json!(2)]);
/// ```
#[macro_export]
macro_rules! collect {
    () => {
        $crate::Collection::new()
    };
    ($elem:expr; $n:expr $(,)?) => {
        $crate::Collection::from($crate::__private::vec![$elem; $n])
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Collection::from([$($elem),+])
    };
}
