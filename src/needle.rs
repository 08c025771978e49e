//! What membership and search operations look for.
//!
//! A [`Needle`] is accepted by [`contains`](crate::Collection::contains),
//! [`doesnt_contain`](crate::Collection::doesnt_contain),
//! [`search`](crate::Collection::search),
//! [`after`](crate::Collection::after) and
//! [`before`](crate::Collection::before). A plain reference converts into a
//! loose needle, so the common case needs no ceremony:
//!
//! ```
//! use collectable::{Needle, collect};
//! use serde_json::json;
//!
//! let numbers = collect([json!(2), json!(4), json!(6)]);
//! assert!(numbers.contains(&json!("4")));
//! assert!(!numbers.contains(Needle::strict(&json!("4"))));
//! assert!(numbers.contains(Needle::when(|n: &serde_json::Value| n.as_i64() == Some(6))));
//! ```

use crate::compare::LooseEq;

/// A value or predicate to look for in a collection.
pub enum Needle<'a, T> {
    /// Matches elements loosely equal to the value.
    Loose(&'a T),
    /// Matches elements equal to the value under [`PartialEq`].
    Strict(&'a T),
    /// Matches elements for which the predicate returns `true`.
    Predicate(Box<dyn Fn(&T) -> bool + 'a>),
}

impl<'a, T> Needle<'a, T> {
    /// A needle matching elements loosely equal to `value`.
    #[must_use]
    pub fn loose(value: &'a T) -> Self {
        Self::Loose(value)
    }

    /// A needle matching elements strictly equal to `value`.
    #[must_use]
    pub fn strict(value: &'a T) -> Self {
        Self::Strict(value)
    }

    /// A needle matching elements that satisfy `predicate`.
    #[must_use]
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Self::Predicate(Box::new(predicate))
    }

    /// Returns `true` if `item` is matched by this needle.
    pub fn matches(&self, item: &T) -> bool
    where
        T: LooseEq,
    {
        match self {
            Self::Loose(value) => item.loose_eq(value),
            Self::Strict(value) => item == *value,
            Self::Predicate(predicate) => predicate(item),
        }
    }
}

impl<'a, T> From<&'a T> for Needle<'a, T> {
    fn from(value: &'a T) -> Self {
        Self::Loose(value)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Needle<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Loose(value) => f.debug_tuple("Loose").field(value).finish(),
            Self::Strict(value) => f.debug_tuple("Strict").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
