//! Error contexts returned by the fallible collection operations.
//!
//! Fallible operations return a [`rootcause::Report`] whose context is one of
//! the types in this module. Match on the context with
//! [`Report::current_context`](rootcause::Report::current_context); the
//! attachments carry details such as the collection length.
//!
//! ```
//! use collectable::{ItemNotFound, collect};
//!
//! let empty = collect(Vec::<i32>::new());
//! let report = empty.first_or_fail().unwrap_err();
//! assert_eq!(report.current_context(), &ItemNotFound::new("first_or_fail"));
//! ```

use rootcause::Report;

/// No element satisfied a lookup that was required to succeed.
///
/// Returned by [`first_or_fail`](crate::Collection::first_or_fail) when
/// nothing qualifies, and by [`sole`](crate::Collection::sole) when the number
/// of qualifying elements is not exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemNotFound {
    operation: &'static str,
}

impl ItemNotFound {
    /// Creates a new `ItemNotFound` for the named operation.
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    /// The operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

impl core::fmt::Display for ItemNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Item not found in `{}`", self.operation)
    }
}

impl core::error::Error for ItemNotFound {}

/// An element did not meet a declared expectation.
///
/// Returned by [`ensure`](crate::Collection::ensure) when an element matches
/// none of the allowed type descriptors, and by
/// [`min`](crate::Collection::min) and [`max`](crate::Collection::max) when
/// two elements cannot be ordered against each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnexpectedValue {
    index: usize,
    expected: String,
}

impl UnexpectedValue {
    /// Creates a new `UnexpectedValue` for the element at `index`.
    #[must_use]
    pub fn new(index: usize, expected: impl Into<String>) -> Self {
        Self {
            index,
            expected: expected.into(),
        }
    }

    /// Position of the offending element.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// What the element was expected to be.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl core::fmt::Display for UnexpectedValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Unexpected value at index {}, expected {}",
            self.index, self.expected
        )
    }
}

impl core::error::Error for UnexpectedValue {}

#[track_caller]
pub(crate) fn item_not_found(operation: &'static str, len: usize) -> Report<ItemNotFound> {
    Report::new(ItemNotFound::new(operation)).attach(format!("Collection length: {len}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_not_found_display() {
        let error = ItemNotFound::new("sole");
        assert_eq!(error.to_string(), "Item not found in `sole`");
        assert_eq!(error.operation(), "sole");
    }

    #[test]
    fn test_unexpected_value_display() {
        let error = UnexpectedValue::new(3, "one of [integer, string]");
        assert_eq!(
            error.to_string(),
            "Unexpected value at index 3, expected one of [integer, string]"
        );
        assert_eq!(error.index(), 3);
    }

    #[test]
    fn test_item_not_found_report_attachments() {
        let report = item_not_found("first_or_fail", 0);
        assert_eq!(report.current_context().operation(), "first_or_fail");
        assert!(report.attachments().iter().any(|attachment| {
            attachment
                .downcast_inner::<String>()
                .is_some_and(|text| text == "Collection length: 0")
        }));
    }

    static_assertions::assert_impl_all!(ItemNotFound: Send, Sync, Copy, core::error::Error);
    static_assertions::assert_impl_all!(UnexpectedValue: Send, Sync, core::error::Error);
}
