use core::fmt::Debug;

use crate::{Collection, hooks};

impl<T: Clone> Collection<T> {
    /// Returns `f(self)` when `condition` holds, otherwise a copy of the
    /// receiver.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let admin = true;
    /// let roles = collect(["user"]).when(admin, |roles| roles.push("admin"));
    /// assert_eq!(roles, ["user", "admin"]);
    /// ```
    pub fn when<F>(&self, condition: bool, f: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        if condition { f(self) } else { self.clone() }
    }

    /// Returns `f(self)` unless `condition` holds.
    pub fn unless<F>(&self, condition: bool, f: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        self.when(!condition, f)
    }

    /// Returns `f(self)` when the collection is empty.
    pub fn when_empty<F>(&self, f: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        self.when(self.is_empty(), f)
    }

    /// Returns `f(self)` when the collection is not empty.
    pub fn when_not_empty<F>(&self, f: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        self.when(self.is_not_empty(), f)
    }

    /// Returns `f(self)` unless the collection is empty.
    pub fn unless_empty<F>(&self, f: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        self.when_not_empty(f)
    }

    /// Returns `f(self)` unless the collection is not empty.
    pub fn unless_not_empty<F>(&self, f: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        self.when_empty(f)
    }
}

impl<T> Collection<T> {
    /// Runs `f` with the collection and returns the receiver.
    pub fn tap<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        f(self);
        self
    }

    /// Returns the result of `f` applied to the collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let total: i32 = collect([1, 2, 3]).pipe(|numbers| numbers.iter().sum());
    /// assert_eq!(total, 6);
    /// ```
    pub fn pipe<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        f(self)
    }

    /// Calls `f` with every element and its index.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.iter().enumerate() {
            f(item, index);
        }
        self
    }

    /// Calls `f` with every element and its index until it returns `false`.
    pub fn each_while<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        for (index, item) in self.iter().enumerate() {
            if !f(item, index) {
                break;
            }
        }
        self
    }
}

impl<T: Debug> Collection<T> {
    /// Writes a rendering of the collection through the installed dump sink
    /// and returns the receiver.
    ///
    /// See [`hooks`](crate::hooks) for configuring the sink and format.
    pub fn dump(&self) -> &Self {
        hooks::dump(self);
        self
    }

    /// Dumps the collection, then terminates through the installed exit
    /// handler with status 1.
    ///
    /// If the handler returns, the process exits anyway.
    pub fn dd(&self) -> ! {
        hooks::dump(self);
        hooks::exit(1);
        std::process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use crate::{Collection, collect};

    #[test]
    fn test_when_and_unless() {
        let numbers = collect([1, 2]);
        assert_eq!(numbers.when(false, |c| c.push(3)), [1, 2]);
        assert_eq!(numbers.unless(false, |c| c.push(3)), [1, 2, 3]);
        assert_eq!(numbers, [1, 2]);
    }

    #[test]
    fn test_emptiness_conditions() {
        let empty = Collection::<i32>::new();
        let full = collect([1]);
        assert_eq!(empty.when_empty(|c| c.push(0)), [0]);
        assert_eq!(full.when_empty(|c| c.push(0)), [1]);
        assert_eq!(full.when_not_empty(|c| c.map(|n| n * 5)), [5]);
        assert!(empty.unless_empty(|c| c.push(9)).is_empty());
        assert_eq!(full.unless_not_empty(|c| c.push(9)), [1]);
    }

    #[test]
    fn test_tap_pipe_each() {
        let numbers = collect([3, 4, 5]);
        let seen = Cell::new(0);
        let count = numbers
            .tap(|c| seen.set(c.count()))
            .pipe(|c| c.filter(|n| *n > 3).count());
        assert_eq!(seen.get(), 3);
        assert_eq!(count, 2);

        let mut visited = Vec::new();
        numbers.each(|n, index| visited.push((index, *n)));
        assert_eq!(visited, [(0, 3), (1, 4), (2, 5)]);

        let mut stopped = Vec::new();
        numbers.each_while(|n, _| {
            stopped.push(*n);
            *n < 4
        });
        assert_eq!(stopped, [3, 4]);
    }

    #[test]
    fn test_dump_returns_receiver() {
        let numbers = collect([1, 2]);
        assert_eq!(numbers.dump().filter(|n| *n > 1), [2]);
    }
}
