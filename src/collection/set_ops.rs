use crate::{Collection, compare::LooseEq};

fn loosely_contains<T: LooseEq>(haystack: &[T], needle: &T) -> bool {
    haystack.iter().any(|item| item.loose_eq(needle))
}

impl<T: LooseEq + Clone> Collection<T> {
    /// The elements not loosely present in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let values = collect([json!(1), json!(2), json!(3)]);
    /// assert_eq!(values.diff([json!("2")]), [json!(1), json!(3)]);
    /// ```
    pub fn diff(&self, other: impl AsRef<[T]>) -> Self {
        let other = other.as_ref();
        self.filter(|item| !loosely_contains(other, item))
    }

    /// The elements loosely present in `other`.
    pub fn intersect(&self, other: impl AsRef<[T]>) -> Self {
        let other = other.as_ref();
        self.filter(|item| loosely_contains(other, item))
    }

    /// The elements of the receiver followed by the elements of `other`
    /// that are not loosely present yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// assert_eq!(collect([1, 2]).union([2, 3, 3]), [1, 2, 3]);
    /// ```
    pub fn union(&self, other: impl AsRef<[T]>) -> Self {
        let mut items = self.to_vec();
        for item in other.as_ref() {
            if !loosely_contains(&items, item) {
                items.push(item.clone());
            }
        }
        items.into()
    }
}

impl<T: PartialEq + Clone> Collection<T> {
    /// The elements not present in `other`, compared strictly.
    pub fn diff_assoc(&self, other: impl AsRef<[T]>) -> Self {
        let other = other.as_ref();
        self.filter(|item| !other.contains(item))
    }

    /// The elements present in `other`, compared strictly.
    pub fn intersect_assoc(&self, other: impl AsRef<[T]>) -> Self {
        let other = other.as_ref();
        self.filter(|item| other.contains(item))
    }
}

impl<T: Clone> Collection<T> {
    /// The elements whose key, derived by `key`, matches the key of no
    /// element of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let words = collect(["Apple", "pear", "Plum"]);
    /// let kept = words.diff_using(["apple"], |w| w.to_lowercase());
    /// assert_eq!(kept, ["pear", "Plum"]);
    /// ```
    pub fn diff_using<K, F>(&self, other: impl AsRef<[T]>, mut key: F) -> Self
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        let excluded: Vec<K> = other.as_ref().iter().map(&mut key).collect();
        self.filter(|item| !excluded.contains(&key(item)))
    }

    /// The receiver's elements followed by `items`.
    pub fn merge<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.concat(items)
    }

    /// Pairs every element with the value at the same position of `values`,
    /// or `None` when `values` is shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let zipped = collect(['a', 'b']).zip([1]);
    /// assert_eq!(zipped, [('a', Some(1)), ('b', None)]);
    /// ```
    pub fn zip<U, I>(&self, values: I) -> Collection<(T, Option<U>)>
    where
        I: IntoIterator<Item = U>,
    {
        let mut values = values.into_iter();
        self.iter()
            .map(|item| (item.clone(), values.next()))
            .collect()
    }

    /// The Cartesian product of the receiver and every list in `lists`.
    ///
    /// Rows are produced depth first: the receiver varies slowest and the
    /// last list fastest.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let product = collect([1, 2]).cross_join([[3, 4]]);
    /// assert_eq!(product, vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]]);
    /// ```
    pub fn cross_join<L, I>(&self, lists: I) -> Collection<Vec<T>>
    where
        L: AsRef<[T]>,
        I: IntoIterator<Item = L>,
    {
        let mut rows: Vec<Vec<T>> = self.iter().map(|item| vec![item.clone()]).collect();
        for list in lists {
            let list = list.as_ref();
            rows = rows
                .iter()
                .flat_map(|prefix| {
                    list.iter().map(move |item| {
                        let mut row = prefix.clone();
                        row.push(item.clone());
                        row
                    })
                })
                .collect();
        }
        rows.into()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Collection, collect};

    #[test]
    fn test_diff_and_intersect_loose() {
        let values = collect([json!(1), json!("two"), json!(true), json!(null)]);
        let other = collect([json!("1"), json!(null)]);
        assert_eq!(values.diff(&other), [json!("two")]);
        assert_eq!(values.intersect(&other), [json!(1), json!(true), json!(null)]);
        assert_eq!(values.diff(Vec::<serde_json::Value>::new()), values);
    }

    #[test]
    fn test_assoc_variants_are_strict() {
        let values = collect([json!(1), json!("1"), json!({"a": 1})]);
        let other = [json!("1"), json!({"a": 1})];
        assert_eq!(values.diff_assoc(other.clone()), [json!(1)]);
        assert_eq!(values.intersect_assoc(other), [json!("1"), json!({"a": 1})]);
    }

    #[test]
    fn test_union_keeps_receiver() {
        let values = collect([json!(1), json!(1)]);
        assert_eq!(values.union([json!("1"), json!(2)]), [json!(1), json!(1), json!(2)]);
        assert_eq!(Collection::new().union([5, 5]), [5]);
    }

    #[test]
    fn test_merge_and_zip() {
        assert_eq!(collect([1]).merge([2, 3]), [1, 2, 3]);
        let zipped = collect([1, 2, 3]).zip(["a", "b"]);
        assert_eq!(zipped.count(), 3);
        assert_eq!(zipped[2], (3, None));
        assert!(Collection::<i32>::new().zip([1]).is_empty());
    }

    #[test]
    fn test_cross_join_order() {
        let product = collect(['a', 'b']).cross_join([vec!['x'], vec!['1', '2']]);
        assert_eq!(
            product,
            vec![
                vec!['a', 'x', '1'],
                vec!['a', 'x', '2'],
                vec!['b', 'x', '1'],
                vec!['b', 'x', '2'],
            ]
        );
        assert!(collect([1]).cross_join([Vec::<i32>::new()]).is_empty());
        assert_eq!(collect([1, 2]).cross_join(Vec::<Vec<i32>>::new()), vec![vec![1], vec![2]]);
    }
}
