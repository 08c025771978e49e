use core::hash::Hash;

use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;

use crate::{Collection, Map, compare::LooseEq, convert::ToKey};

/// Keeps the first-seen element of every key that occurs more than once,
/// ordered by first occurrence.
///
/// Loose equality cannot be hashed, so this compares every element with the
/// first element of each tally: quadratic in the worst case.
pub(super) fn first_of_repeated<T, F>(items: &[T], mut same: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut tallies: Vec<(usize, usize)> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match tallies.iter_mut().find(|(first, _)| same(&items[*first], item)) {
            Some((_, count)) => *count += 1,
            None => tallies.push((index, 1)),
        }
    }
    tallies
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(first, _)| items[first].clone())
        .collect()
}

impl<T: Clone> Collection<T> {
    /// Groups the elements by the stringified key derived by `key`.
    ///
    /// Groups are ordered by the first occurrence of their key and keep the
    /// order of their elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let words = collect(["apple", "avocado", "banana"]);
    /// let groups = words.group_by(|word| word.chars().next());
    /// assert_eq!(groups["a"], ["apple", "avocado"]);
    /// assert_eq!(groups["b"], ["banana"]);
    /// ```
    pub fn group_by<K, F>(&self, mut key: F) -> Map<Self>
    where
        K: ToKey,
        F: FnMut(&T) -> K,
    {
        let mut groups: Map<Self> = Map::default();
        for item in self {
            groups
                .entry(key(item).to_key())
                .or_default()
                .extend([item.clone()]);
        }
        groups
    }

    /// Keys every element by the stringified key derived by `key`. When two
    /// elements share a key the later one wins, at the position of the
    /// first.
    pub fn key_by<K, F>(&self, mut key: F) -> Map<T>
    where
        K: ToKey,
        F: FnMut(&T) -> K,
    {
        self.iter()
            .map(|item| (key(item).to_key(), item.clone()))
            .collect()
    }

    /// Groups the values of the key/value pairs returned by `f`.
    pub fn map_to_groups<K, V, F>(&self, mut f: F) -> Map<Collection<V>>
    where
        K: ToKey,
        F: FnMut(&T) -> (K, V),
    {
        let mut groups: Map<Collection<V>> = Map::default();
        for item in self {
            let (key, value) = f(item);
            groups.entry(key.to_key()).or_default().extend([value]);
        }
        groups
    }

    /// The first-seen element of every key derived by `key` that occurs
    /// more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let numbers = collect([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(numbers.duplicates_by(|n| n % 3), [1, 2, 3]);
    /// ```
    pub fn duplicates_by<K, F>(&self, mut key: F) -> Self
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut tallies: HashMap<K, (usize, usize), FxBuildHasher> =
            HashMap::with_hasher(FxBuildHasher);
        for (index, item) in self.iter().enumerate() {
            tallies.entry(key(item)).or_insert((index, 0)).1 += 1;
        }
        let mut repeated: Vec<usize> = tallies
            .into_values()
            .filter(|(_, count)| *count > 1)
            .map(|(first, _)| first)
            .collect();
        repeated.sort_unstable();
        repeated.into_iter().map(|index| self[index].clone()).collect()
    }
}

impl<T> Collection<T> {
    /// Counts the elements per stringified key derived by `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let counts = collect(["a", "b", "a"]).count_by(|s| *s);
    /// assert_eq!(counts["a"], 2);
    /// assert_eq!(counts["b"], 1);
    /// ```
    pub fn count_by<K, F>(&self, mut key: F) -> Map<usize>
    where
        K: ToKey,
        F: FnMut(&T) -> K,
    {
        let mut counts: Map<usize> = Map::default();
        for item in self {
            *counts.entry(key(item).to_key()).or_default() += 1;
        }
        counts
    }

    /// Builds a map from the key/value pairs returned by `f`. Later pairs
    /// overwrite earlier ones with the same key.
    pub fn map_with_keys<K, V, F>(&self, mut f: F) -> Map<V>
    where
        K: ToKey,
        F: FnMut(&T) -> (K, V),
    {
        self.iter()
            .map(|item| {
                let (key, value) = f(item);
                (key.to_key(), value)
            })
            .collect()
    }
}

impl<T: ToKey> Collection<T> {
    /// Maps every stringified element to its position. Repeated elements
    /// keep their last position.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let flipped = collect(["a", "b", "a"]).flip();
    /// assert_eq!(flipped["a"], 2);
    /// assert_eq!(flipped["b"], 1);
    /// ```
    #[must_use]
    pub fn flip(&self) -> Map<usize> {
        self.iter()
            .enumerate()
            .map(|(index, item)| (item.to_key(), index))
            .collect()
    }

    /// Uses the elements as keys for `values`, paired by position. Keys
    /// without a value map to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let combined = collect(["name", "age"]).combine(["Ada"]);
    /// assert_eq!(combined["name"], Some("Ada"));
    /// assert_eq!(combined["age"], None);
    /// ```
    pub fn combine<U, I>(&self, values: I) -> Map<Option<U>>
    where
        I: IntoIterator<Item = U>,
    {
        let mut values = values.into_iter();
        self.iter()
            .map(|key| (key.to_key(), values.next()))
            .collect()
    }
}

impl<T: LooseEq + Clone> Collection<T> {
    /// The first-seen element of every value that occurs more than once,
    /// compared loosely.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let values = collect([json!("a"), json!(1), json!("1"), json!("a"), json!(2)]);
    /// assert_eq!(values.duplicates(), [json!("a"), json!(1)]);
    /// ```
    ///
    /// Runs in quadratic time. For hashable elements,
    /// [`duplicates_by`](Self::duplicates_by) with an identity key gives the
    /// strict result in linear time.
    #[must_use]
    pub fn duplicates(&self) -> Self {
        first_of_repeated(self.all(), T::loose_eq).into()
    }
}

impl<T: PartialEq + Clone> Collection<T> {
    /// Like [`duplicates`](Self::duplicates), compared strictly. Also
    /// quadratic; prefer [`duplicates_by`](Self::duplicates_by) for hashable
    /// elements.
    #[must_use]
    pub fn duplicates_strict(&self) -> Self {
        first_of_repeated(self.all(), T::eq).into()
    }
}
