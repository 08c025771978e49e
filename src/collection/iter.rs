use core::iter::FusedIterator;

/// An iterator over references to the elements of a [`Collection`].
///
/// # Examples
///
/// ```
/// use collectable::collect;
///
/// let names = collect(["alice", "bob"]);
/// let lengths: Vec<usize> = names.iter().map(|name| name.len()).collect();
/// assert_eq!(lengths, [5, 3]);
/// ```
///
/// [`Collection`]: crate::Collection
#[must_use]
#[derive(Debug, Clone)]
pub struct CollectionIter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<'a, T> CollectionIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter(),
        }
    }

    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for CollectionIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for CollectionIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for CollectionIter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for CollectionIter<'_, T> {}

/// An owning iterator over the elements of a [`Collection`].
///
/// [`Collection`]: crate::Collection
#[must_use]
#[derive(Debug, Clone)]
pub struct CollectionIntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> CollectionIntoIter<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            inner: items.into_iter(),
        }
    }
}

impl<T> Iterator for CollectionIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for CollectionIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for CollectionIntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for CollectionIntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_both_ends() {
        let items = [1, 2, 3];
        let mut iter = CollectionIter::new(&items);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.as_slice(), &[2]);
    }

    #[test]
    fn test_into_iter_exact_size() {
        let mut iter = CollectionIntoIter::new(vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.next_back().as_deref(), Some("b"));
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next(), None);
    }

    static_assertions::assert_impl_all!(CollectionIter<'static, u8>: Send, Sync, FusedIterator);
    static_assertions::assert_impl_all!(CollectionIntoIter<u8>: Send, Sync, FusedIterator);
}
