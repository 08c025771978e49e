use crate::Collection;

impl<T: Clone> Collection<T> {
    /// Resolves a possibly negative offset to a position within the
    /// collection.
    fn resolve_offset(&self, offset: isize) -> usize {
        if offset >= 0 {
            offset.unsigned_abs().min(self.count())
        } else {
            self.count().saturating_sub(offset.unsigned_abs())
        }
    }

    /// The elements starting at `offset`, at most `len` of them.
    ///
    /// A negative `offset` counts back from the end. A `len` of `None` runs
    /// to the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let numbers = collect([1, 2, 3, 4, 5]);
    /// assert_eq!(numbers.slice(1, Some(2)), [2, 3]);
    /// assert_eq!(numbers.slice(-2, None), [4, 5]);
    /// ```
    pub fn slice(&self, offset: isize, len: Option<usize>) -> Self {
        let start = self.resolve_offset(offset);
        let end = len.map_or(self.count(), |len| start.saturating_add(len).min(self.count()));
        Self::from(&self.all()[start..end])
    }

    /// Removes `delete_count` elements starting at `offset` and inserts
    /// `replacement` in their place.
    ///
    /// Returns the resulting collection and the removed elements. The
    /// receiver is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let letters = collect(['a', 'b', 'c', 'd']);
    /// let (result, removed) = letters.splice(1, Some(2), ['x']);
    /// assert_eq!(result, ['a', 'x', 'd']);
    /// assert_eq!(removed, ['b', 'c']);
    /// ```
    pub fn splice<I>(&self, offset: isize, delete_count: Option<usize>, replacement: I) -> (Self, Self)
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.resolve_offset(offset);
        let end = delete_count.map_or(self.count(), |count| {
            start.saturating_add(count).min(self.count())
        });
        let mut items = self.to_vec();
        let removed: Vec<T> = items.splice(start..end, replacement).collect();
        (items.into(), removed.into())
    }

    /// The first `limit` elements, or the last `|limit|` elements when
    /// `limit` is negative.
    pub fn take(&self, limit: isize) -> Self {
        let count = limit.unsigned_abs().min(self.count());
        if limit >= 0 {
            Self::from(&self.all()[..count])
        } else {
            Self::from(&self.all()[self.count() - count..])
        }
    }

    /// Everything but the first `count` elements.
    pub fn skip(&self, count: usize) -> Self {
        Self::from(&self.all()[count.min(self.count())..])
    }

    /// The position of the first element for which `predicate` holds.
    fn position_where<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .position(|(index, item)| predicate(item, index))
    }

    /// The elements before the first one satisfying `predicate`, or all of
    /// them when none does.
    pub fn take_until<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        let end = self.position_where(predicate).unwrap_or(self.count());
        Self::from(&self.all()[..end])
    }

    /// The elements before the first one failing `predicate`.
    pub fn take_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.take_until(|item, index| !predicate(item, index))
    }

    /// The elements from the first one satisfying `predicate` onwards, or
    /// none when no element does.
    pub fn skip_until<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        let start = self.position_where(predicate).unwrap_or(self.count());
        Self::from(&self.all()[start..])
    }

    /// The elements from the first one failing `predicate` onwards.
    pub fn skip_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.skip_until(|item, index| !predicate(item, index))
    }

    /// The elements shown on a 1-based `page` of `per_page` elements. Page
    /// zero is treated as the first page.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let numbers = collect(1..=9);
    /// assert_eq!(numbers.for_page(2, 4), [5, 6, 7, 8]);
    /// assert_eq!(numbers.for_page(3, 4), [9]);
    /// assert!(numbers.for_page(4, 4).is_empty());
    /// ```
    pub fn for_page(&self, page: usize, per_page: usize) -> Self {
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        self.iter().skip(offset).take(per_page).cloned().collect()
    }

    /// Windows of `size` consecutive elements, advancing by `step`. Only
    /// complete windows are produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let windows = collect([1, 2, 3, 4, 5]).sliding(3, 2);
    /// assert_eq!(windows, vec![vec![1, 2, 3], vec![3, 4, 5]]);
    /// ```
    pub fn sliding(&self, size: usize, step: usize) -> Collection<Self> {
        if size == 0 || step == 0 {
            return Collection::new();
        }
        self.all()
            .windows(size)
            .step_by(step)
            .map(Self::from)
            .collect()
    }

    /// Splits the elements into `groups` groups of near-equal size. Earlier
    /// groups receive the remainder, so sizes differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let groups = collect([1, 2, 3, 4, 5]).split(3);
    /// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    pub fn split(&self, groups: usize) -> Collection<Self> {
        if groups == 0 || self.is_empty() {
            return Collection::new();
        }
        let base = self.count() / groups;
        let remainder = self.count() % groups;
        let mut rest = self.all();
        let mut result: Vec<Self> = Vec::with_capacity(groups);
        for group in 0..groups {
            let size = base + usize::from(group < remainder);
            if size == 0 {
                break;
            }
            let (head, tail) = rest.split_at(size);
            result.push(Self::from(head));
            rest = tail;
        }
        result.into()
    }

    /// Splits the elements into at most `groups` chunks, filling each chunk
    /// before starting the next.
    pub fn split_in(&self, groups: usize) -> Collection<Self> {
        if groups == 0 {
            return Collection::new();
        }
        self.chunk(self.count().div_ceil(groups))
    }
}
