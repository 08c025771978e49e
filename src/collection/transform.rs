use core::{cmp::Ordering, hash::Hash};

use hashbrown::HashSet;
use rand::{Rng, seq::SliceRandom};
use rustc_hash::FxBuildHasher;

use crate::{
    Collection,
    compare::{LooseEq, Ordinal},
};

impl<T> Collection<T> {
    /// Applies `f` to every element.
    pub fn map<U, F>(&self, f: F) -> Collection<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Applies `f` to every element and its index.
    pub fn map_with_index<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.iter()
            .enumerate()
            .map(|(index, item)| f(item, index))
            .collect()
    }

    /// Applies `f` to every element and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let words = collect(["ab", "c"]);
    /// assert_eq!(words.flat_map(|w| w.chars()), ['a', 'b', 'c']);
    /// ```
    pub fn flat_map<U, I, F>(&self, f: F) -> Collection<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        self.iter().flat_map(f).collect()
    }

    /// Folds the elements into a single value, starting from `initial`.
    pub fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(initial, f)
    }
}

impl<T: Clone> Collection<T> {
    /// Converts every element with `factory`, which receives the element by
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Currency(String);
    ///
    /// let codes = collect(["EUR".to_owned(), "USD".to_owned()]);
    /// let currencies = codes.map_into(Currency);
    /// assert_eq!(currencies.first(), Some(&Currency("EUR".to_owned())));
    /// ```
    pub fn map_into<U, F>(&self, factory: F) -> Collection<U>
    where
        F: FnMut(T) -> U,
    {
        self.iter().cloned().map(factory).collect()
    }

    /// Keeps the elements satisfying `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// Keeps the elements for which `predicate` holds given the element and
    /// its index.
    pub fn filter_with_index<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|(index, item)| predicate(item, *index))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Drops the elements satisfying `predicate`.
    pub fn reject<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.filter(|item| !predicate(item))
    }

    /// Splits the elements into those satisfying `predicate` and the rest,
    /// both in their original order.
    pub fn partition<F>(&self, mut predicate: F) -> (Self, Self)
    where
        F: FnMut(&T) -> bool,
    {
        let (matching, rest): (Vec<T>, Vec<T>) =
            self.iter().cloned().partition(|item| predicate(item));
        (matching.into(), rest.into())
    }

    /// Splits the elements into chunks of `size`; the last chunk may be
    /// shorter. A `size` of zero yields an empty collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let chunks = collect([1, 2, 3, 4, 5]).chunk(2);
    /// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    pub fn chunk(&self, size: usize) -> Collection<Self> {
        if size == 0 {
            return Collection::new();
        }
        self.all().chunks(size).map(Self::from).collect()
    }

    /// Splits the elements into runs, starting a new chunk whenever
    /// `predicate` returns `false`.
    ///
    /// The predicate receives the element, its index and the whole backing
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let runs = collect([1, 2, 2, 3, 4, 4, 4, 5, 6])
    ///     .chunk_while(|item, index, all| index == 0 || *item == all[index - 1]);
    /// assert_eq!(
    ///     runs,
    ///     vec![vec![1], vec![2, 2], vec![3], vec![4, 4, 4], vec![5], vec![6]]
    /// );
    /// ```
    pub fn chunk_while<F>(&self, mut predicate: F) -> Collection<Self>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        let all = self.all();
        let mut chunks: Vec<Self> = Vec::new();
        let mut current: Vec<T> = Vec::new();
        for (index, item) in all.iter().enumerate() {
            if !current.is_empty() && !predicate(item, index, all) {
                chunks.push(core::mem::take(&mut current).into());
            }
            current.push(item.clone());
        }
        if !current.is_empty() {
            chunks.push(current.into());
        }
        chunks.into()
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// A uniformly random permutation of the elements.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Like [`shuffle`](Self::shuffle), drawing from the given generator.
    pub fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut items = self.to_vec();
        items.shuffle(rng);
        items.into()
    }

    /// A copy with `item` appended.
    pub fn push(&self, item: T) -> Self {
        let mut items = self.to_vec();
        items.push(item);
        items.into()
    }

    /// A copy with `item` inserted at the front.
    pub fn prepend(&self, item: T) -> Self {
        core::iter::once(item).chain(self.iter().cloned()).collect()
    }

    /// A copy with `items` appended.
    pub fn concat<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.iter().cloned().chain(items).collect()
    }

    /// Pads the collection with `value` up to `size` elements. A negative
    /// `size` pads at the front up to `|size|` elements. A collection already
    /// at least that long is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let numbers = collect([1, 2]);
    /// assert_eq!(numbers.pad(4, 0), [1, 2, 0, 0]);
    /// assert_eq!(numbers.pad(-3, 0), [0, 1, 2]);
    /// assert_eq!(numbers.pad(1, 0), [1, 2]);
    /// ```
    pub fn pad(&self, size: isize, value: T) -> Self {
        let missing = size.unsigned_abs().saturating_sub(self.count());
        let padding = core::iter::repeat_n(value, missing);
        if size >= 0 {
            self.iter().cloned().chain(padding).collect()
        } else {
            padding.chain(self.iter().cloned()).collect()
        }
    }

    /// A copy without the element at `index`.
    pub fn forget(&self, index: usize) -> Self {
        self.filter_with_index(|_, position| position != index)
    }

    /// Sorts with a comparator. The sort is stable.
    pub fn sort_with<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.to_vec();
        items.sort_by(compare);
        items.into()
    }

    /// Sorts ascending by a derived key, using [`Ordinal::sort_cmp`]. The sort
    /// is stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let words = collect(["ccc", "a", "bb", "d"]);
    /// assert_eq!(words.sort_by(|w| w.len()), ["a", "d", "bb", "ccc"]);
    /// ```
    pub fn sort_by<K, F>(&self, mut key: F) -> Self
    where
        K: Ordinal,
        F: FnMut(&T) -> K,
    {
        self.sort_with(|a, b| key(a).sort_cmp(&key(b)))
    }

    /// Sorts descending by a derived key. The sort is stable.
    pub fn sort_by_desc<K, F>(&self, mut key: F) -> Self
    where
        K: Ordinal,
        F: FnMut(&T) -> K,
    {
        self.sort_with(|a, b| key(b).sort_cmp(&key(a)))
    }

    /// Keeps the first element for every distinct derived key.
    pub fn unique_by<K, F>(&self, mut key: F) -> Self
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut seen: HashSet<K, FxBuildHasher> = HashSet::with_hasher(FxBuildHasher);
        self.filter(|item| seen.insert(key(item)))
    }
}

impl<T: Ordinal + Clone> Collection<T> {
    /// Sorts ascending. The sort is stable.
    ///
    /// Mixed values are ordered by kind first: `null`, booleans, numbers,
    /// strings, arrays, then objects. Floats sort with `NaN` last.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let mixed = collect([json!(3), json!("x"), json!(null), json!(1)]);
    /// assert_eq!(mixed.sort(), [json!(null), json!(1), json!(3), json!("x")]);
    /// ```
    #[must_use]
    pub fn sort(&self) -> Self {
        self.sort_with(T::sort_cmp)
    }

    /// Sorts descending. The sort is stable.
    #[must_use]
    pub fn sort_desc(&self) -> Self {
        self.sort_with(|a, b| b.sort_cmp(a))
    }
}

impl<T: LooseEq + Clone> Collection<T> {
    /// Drops loosely equal repeats, keeping the first occurrence.
    #[must_use]
    pub fn unique(&self) -> Self {
        let mut kept: Vec<T> = Vec::new();
        for item in self {
            if !kept.iter().any(|seen| seen.loose_eq(item)) {
                kept.push(item.clone());
            }
        }
        kept.into()
    }
}

impl<T: PartialEq + Clone> Collection<T> {
    /// Drops strictly equal repeats, keeping the first occurrence.
    #[must_use]
    pub fn unique_strict(&self) -> Self {
        let mut kept: Vec<T> = Vec::new();
        for item in self {
            if !kept.contains(item) {
                kept.push(item.clone());
            }
        }
        kept.into()
    }

    /// A copy without the elements strictly equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let values = collect([json!(1), json!("1"), json!(2), json!(1)]);
    /// assert_eq!(values.pull(&json!(1)), [json!("1"), json!(2)]);
    /// ```
    pub fn pull(&self, value: &T) -> Self {
        self.reject(|item| item == value)
    }
}

impl<I> Collection<I>
where
    I: IntoIterator + Clone,
{
    /// Flattens a collection of iterables by one level.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let nested = collect([vec![1, 2], vec![], vec![3]]);
    /// assert_eq!(nested.collapse(), [1, 2, 3]);
    /// ```
    pub fn collapse(&self) -> Collection<I::Item> {
        self.iter().cloned().flatten().collect()
    }
}

impl<U> Collection<Vec<U>> {
    /// Applies `f` to every nested sequence, passed as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let pairs = collect([vec![1, 2], vec![3, 4]]);
    /// assert_eq!(pairs.map_spread(|xs| xs.iter().product::<i32>()), [2, 12]);
    /// ```
    pub fn map_spread<R, F>(&self, mut f: F) -> Collection<R>
    where
        F: FnMut(&[U]) -> R,
    {
        self.map(|items| f(items))
    }

    /// Calls `f` with every nested sequence, passed as a slice.
    pub fn each_spread<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&[U]),
    {
        for items in self {
            f(items);
        }
        self
    }
}
