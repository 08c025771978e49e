use crate::{Collection, compare::LooseEq, needle::Needle};

impl<T: LooseEq> Collection<T> {
    /// Returns `true` if any element is matched by `needle`.
    ///
    /// A plain reference is a loose needle; see [`Needle`] for strict and
    /// predicate needles.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::{Needle, collect};
    ///
    /// let numbers = collect([1, 2, 3]);
    /// assert!(numbers.contains(&2));
    /// assert!(numbers.contains(Needle::when(|n: &i32| *n > 2)));
    /// assert!(!numbers.contains(&4));
    /// ```
    pub fn contains<'a>(&self, needle: impl Into<Needle<'a, T>>) -> bool
    where
        T: 'a,
    {
        let needle = needle.into();
        self.iter().any(|item| needle.matches(item))
    }

    /// Returns `true` if any element is strictly equal to `value`.
    pub fn contains_strict(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// The negation of [`contains`](Self::contains).
    pub fn doesnt_contain<'a>(&self, needle: impl Into<Needle<'a, T>>) -> bool
    where
        T: 'a,
    {
        !self.contains(needle)
    }

    /// The index of the first element matched by `needle`.
    pub fn search<'a>(&self, needle: impl Into<Needle<'a, T>>) -> Option<usize>
    where
        T: 'a,
    {
        let needle = needle.into();
        self.iter().position(|item| needle.matches(item))
    }

    /// The element right after the first element matched by `needle`.
    ///
    /// Returns `None` when nothing matches or the match is the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::{Needle, collect};
    /// use serde_json::json;
    ///
    /// let numbers = collect([json!(2), json!(4), json!(6), json!(8)]);
    /// assert_eq!(numbers.after(&json!("4")), Some(&json!(6)));
    /// assert_eq!(numbers.after(Needle::strict(&json!("4"))), None);
    /// assert_eq!(numbers.after(&json!(8)), None);
    /// ```
    pub fn after<'a>(&self, needle: impl Into<Needle<'a, T>>) -> Option<&T>
    where
        T: 'a,
    {
        let index = self.search(needle)?;
        self.get(index + 1)
    }

    /// The element right before the first element matched by `needle`.
    ///
    /// Returns `None` when nothing matches or the match is the first element.
    pub fn before<'a>(&self, needle: impl Into<Needle<'a, T>>) -> Option<&T>
    where
        T: 'a,
    {
        let index = self.search(needle)?;
        self.get(index.checked_sub(1)?)
    }
}

impl<T> Collection<T> {
    /// Returns `true` if `predicate` holds for every element, and for an
    /// empty collection.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|item| predicate(item))
    }

    /// Returns `true` if `predicate` holds for at least one element.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|item| predicate(item))
    }

    /// Returns `true` if the collection holds exactly one element.
    #[must_use]
    pub fn contains_one_item(&self) -> bool {
        self.count() == 1
    }

    /// Returns `true` if exactly one element satisfies `predicate`.
    pub fn contains_one_item_matching<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).take(2).count() == 1
    }
}
