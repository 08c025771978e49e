use core::ops::Index;

use rand::{Rng, seq::IndexedRandom};
use rootcause::Report;
use serde::{Deserialize, Serialize};

use crate::{
    collection::{CollectionIntoIter, CollectionIter},
    errors::{ItemNotFound, item_not_found},
};

/// An ordered sequence of elements with a fluent method surface.
///
/// Insertion order is significant and duplicates are allowed. Transformations
/// borrow the receiver and return a new collection; see the
/// [crate documentation](crate) for an overview of the operation families.
///
/// # Examples
///
/// ```
/// use collectable::Collection;
///
/// let mut numbers = Collection::make(1..=5);
/// let evens = numbers.filter(|n| n % 2 == 0);
/// assert_eq!(evens, [2, 4]);
///
/// // Only the explicit `&mut self` API changes the receiver.
/// assert_eq!(numbers.pop(), Some(5));
/// assert_eq!(numbers.count(), 4);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates a new, empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a collection from anything iterable.
    pub fn make<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Creates a collection holding a single element.
    pub fn wrap(item: T) -> Self {
        Self { items: vec![item] }
    }

    /// Creates a collection by calling `f` with `1..=count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::Collection;
    ///
    /// let squares = Collection::times(4, |n| n * n);
    /// assert_eq!(squares, [1, 4, 9, 16]);
    /// ```
    pub fn times<F>(count: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::make((1..=count).map(f))
    }

    /// Consumes the collection and returns the backing vector.
    #[must_use]
    pub fn unwrap(self) -> Vec<T> {
        self.items
    }

    /// The backing sequence.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> CollectionIter<'_, T> {
        CollectionIter::new(&self.items)
    }

    /// The number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// The number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if there is at least one element.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    /// The element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The first element satisfying `predicate`.
    pub fn first_matching<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// The last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// The last element satisfying `predicate`.
    ///
    /// Use [`Option::unwrap_or_else`] on the result to supply a fallback.
    pub fn last_matching<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().rev().find(|item| predicate(item))
    }

    /// The element at position `n`, where a negative `n` counts back from the
    /// end (`-1` is the last element).
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let letters = collect(['a', 'b', 'c']);
    /// assert_eq!(letters.nth(1), Some(&'b'));
    /// assert_eq!(letters.nth(-1), Some(&'c'));
    /// assert_eq!(letters.nth(-4), None);
    /// ```
    #[must_use]
    pub fn nth(&self, n: isize) -> Option<&T> {
        let index = if n >= 0 {
            n.unsigned_abs()
        } else {
            self.items.len().checked_sub(n.unsigned_abs())?
        };
        self.items.get(index)
    }

    /// The first element, or an error if the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`] if the collection is empty.
    #[track_caller]
    pub fn first_or_fail(&self) -> Result<&T, Report<ItemNotFound>> {
        self.items
            .first()
            .ok_or_else(|| item_not_found("first_or_fail", self.items.len()))
    }

    /// The first element satisfying `predicate`, or an error if there is
    /// none.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`] if no element satisfies `predicate`.
    #[track_caller]
    pub fn first_or_fail_matching<F>(&self, predicate: F) -> Result<&T, Report<ItemNotFound>>
    where
        F: FnMut(&T) -> bool,
    {
        self.first_matching(predicate)
            .ok_or_else(|| item_not_found("first_or_fail_matching", self.items.len()))
    }

    /// The only element of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`] unless the collection holds exactly one
    /// element. The report records how many elements were found.
    #[track_caller]
    pub fn sole(&self) -> Result<&T, Report<ItemNotFound>> {
        match self.items.as_slice() {
            [only] => Ok(only),
            _ => Err(item_not_found("sole", self.items.len())
                .attach(format!("Matching items: {}", self.items.len()))),
        }
    }

    /// The only element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`] unless exactly one element satisfies
    /// `predicate`.
    #[track_caller]
    pub fn sole_matching<F>(&self, mut predicate: F) -> Result<&T, Report<ItemNotFound>>
    where
        F: FnMut(&T) -> bool,
    {
        let mut matching = self.items.iter().filter(|item| predicate(item));
        match (matching.next(), matching.count()) {
            (Some(only), 0) => Ok(only),
            (first, rest) => {
                let found = usize::from(first.is_some()) + rest;
                Err(item_not_found("sole_matching", self.items.len())
                    .attach(format!("Matching items: {found}")))
            }
        }
    }

    /// The indices of the elements.
    pub fn keys(&self) -> Collection<usize> {
        Collection::make(0..self.items.len())
    }

    /// A uniformly chosen element, or `None` if the collection is empty.
    #[must_use]
    pub fn random(&self) -> Option<&T> {
        self.random_with(&mut rand::rng())
    }

    /// Like [`random`](Self::random), drawing from the given generator.
    pub fn random_with<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng + ?Sized,
    {
        self.items.choose(rng)
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Replaces every element with the result of `f`, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let mut words = collect(["a".to_owned(), "b".to_owned()]);
    /// words.transform(|word| word.to_uppercase());
    /// assert_eq!(words, ["A", "B"]);
    /// ```
    pub fn transform<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        self.items = core::mem::take(&mut self.items).into_iter().map(f).collect();
        self
    }
}

impl<T: Clone> Collection<T> {
    /// A copy of the elements satisfying `predicate`.
    pub fn all_matching<F>(&self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// A copy of the collection, reindexed from zero.
    #[must_use]
    pub fn values(&self) -> Self {
        self.clone()
    }

    /// A copy of the backing sequence.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl Collection<i64> {
    /// Creates a collection of the integers from `start` to `end`,
    /// inclusive. A `start` greater than `end` counts down.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::Collection;
    ///
    /// assert_eq!(Collection::range(3, 6), [3, 4, 5, 6]);
    /// assert_eq!(Collection::range(2, -1), [2, 1, 0, -1]);
    /// ```
    #[must_use]
    pub fn range(start: i64, end: i64) -> Self {
        if start <= end {
            Self::make(start..=end)
        } else {
            Self::make((end..=start).rev())
        }
    }
}

impl<T: Serialize> Collection<T> {
    /// Serializes the collection as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if an element fails to serialize, such as a map with
    /// non-string keys.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Serializes the collection as an indented JSON array.
    ///
    /// # Errors
    ///
    /// Same as [`to_json`](Self::to_json).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.items)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(collection: Collection<T>) -> Self {
        collection.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::make(iter)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = CollectionIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        CollectionIntoIter::new(self.items)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = CollectionIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Collection<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Collection<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Collection<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.items == other
    }
}
