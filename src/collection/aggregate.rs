use core::{cmp::Ordering, fmt::Display};

use rootcause::Report;

use crate::{
    Collection,
    compare::{LooseEq, Ordinal},
    convert::Numeric,
    errors::UnexpectedValue,
};

/// Finds the smallest (`Ordering::Less`) or largest (`Ordering::Greater`)
/// key, skipping absent ones. The first of several equal keys wins.
fn extremum<K, I>(keys: I, wanted: Ordering) -> Result<Option<K>, Report<UnexpectedValue>>
where
    K: Ordinal,
    I: IntoIterator<Item = K>,
{
    let mut best: Option<K> = None;
    for (index, key) in keys.into_iter().enumerate() {
        if key.is_absent() {
            continue;
        }
        best = Some(match best {
            None => key,
            Some(current) => match key.ordinal_cmp(&current) {
                Some(ordering) if ordering == wanted => key,
                Some(_) => current,
                None => {
                    return Err(Report::new(UnexpectedValue::new(
                        index,
                        "a value comparable with the preceding elements",
                    )));
                }
            },
        });
    }
    Ok(best)
}

/// The most frequent key, counted with loose equality. Ties go to the key
/// seen first. Loose equality cannot be hashed, so tallying is quadratic in
/// the number of distinct keys.
fn mode_of<K, I>(keys: I) -> Option<K>
where
    K: LooseEq,
    I: IntoIterator<Item = K>,
{
    let mut tallies: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match tallies.iter_mut().find(|(seen, _)| seen.loose_eq(&key)) {
            Some((_, count)) => *count += 1,
            None => tallies.push((key, 1)),
        }
    }

    let mut best: Option<(K, usize)> = None;
    for (key, count) in tallies {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

fn median_of(mut values: Vec<f64>) -> Option<f64> {
    values.sort_by(f64::total_cmp);
    let len = values.len();
    match len {
        0 => None,
        _ if len % 2 == 1 => Some(values[len / 2]),
        _ => Some((values[len / 2 - 1] + values[len / 2]) / 2.0),
    }
}

fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round() / factor
}

impl<T: Numeric> Collection<T> {
    /// The sum of the numeric elements. Non-numeric elements count as zero.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.sum_by(|item| item.to_f64())
    }

    /// The mean of the numeric elements, or `0` when there are none.
    ///
    /// Elements that do not coerce to a number, such as `null`, are skipped
    /// rather than counted as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// let mixed = collect([json!(1), json!("2"), json!(3), json!("4"), json!(5)]);
    /// assert_eq!(mixed.average(), 3.0);
    /// assert_eq!(collect(Vec::<i32>::new()).average(), 0.0);
    /// ```
    #[must_use]
    pub fn average(&self) -> f64 {
        self.average_by(|item| item.to_f64())
    }

    /// Alias for [`average`](Self::average).
    #[must_use]
    pub fn avg(&self) -> f64 {
        self.average()
    }

    /// The median of the numeric elements, or `None` when there are none.
    #[must_use]
    pub fn median(&self) -> Option<f64> {
        self.median_by(|item| item.to_f64())
    }
}

impl<T> Collection<T> {
    /// The sum of the numbers derived by `f`.
    pub fn sum_by<N, F>(&self, mut f: F) -> f64
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        self.iter().filter_map(|item| f(item).to_f64()).sum()
    }

    /// The mean of the numbers derived by `f`, or `0` when there are none.
    pub fn average_by<N, F>(&self, mut f: F) -> f64
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        let (total, count) = self
            .iter()
            .filter_map(|item| f(item).to_f64())
            .fold((0.0, 0usize), |(total, count), n| (total + n, count + 1));
        if count == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = count as f64;
            total / count
        }
    }

    /// Alias for [`average_by`](Self::average_by).
    pub fn avg_by<N, F>(&self, f: F) -> f64
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        self.average_by(f)
    }

    /// The median of the numbers derived by `f`.
    ///
    /// Odd counts give the middle value and even counts the mean of the two
    /// middle values.
    pub fn median_by<N, F>(&self, mut f: F) -> Option<f64>
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        median_of(self.iter().filter_map(|item| f(item).to_f64()).collect())
    }

    /// The smallest key derived by `f`, skipping absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`UnexpectedValue`] if two keys cannot be ordered against
    /// each other.
    pub fn min_by<K, F>(&self, f: F) -> Result<Option<K>, Report<UnexpectedValue>>
    where
        K: Ordinal,
        F: FnMut(&T) -> K,
    {
        extremum(self.iter().map(f), Ordering::Less)
    }

    /// The largest key derived by `f`, skipping absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`UnexpectedValue`] if two keys cannot be ordered against
    /// each other.
    pub fn max_by<K, F>(&self, f: F) -> Result<Option<K>, Report<UnexpectedValue>>
    where
        K: Ordinal,
        F: FnMut(&T) -> K,
    {
        extremum(self.iter().map(f), Ordering::Greater)
    }

    /// The most frequent key derived by `f`. Ties go to the key seen first.
    pub fn mode_by<K, F>(&self, f: F) -> Option<K>
    where
        K: LooseEq,
        F: FnMut(&T) -> K,
    {
        mode_of(self.iter().map(f))
    }

    /// The share of elements satisfying `predicate`, as a percentage rounded
    /// to two decimals. An empty collection gives `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// let numbers = collect([1, 1, 2, 2, 2, 3]);
    /// assert_eq!(numbers.percentage(|n| *n == 1), 33.33);
    /// ```
    pub fn percentage<F>(&self, predicate: F) -> f64
    where
        F: FnMut(&T) -> bool,
    {
        self.percentage_with_precision(predicate, 2)
    }

    /// Like [`percentage`](Self::percentage), rounded to `precision`
    /// decimals.
    pub fn percentage_with_precision<F>(&self, mut predicate: F, precision: i32) -> f64
    where
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return 0.0;
        }
        let matching = self.iter().filter(|item| predicate(item)).count();
        #[allow(clippy::cast_precision_loss)]
        let share = matching as f64 / self.count() as f64 * 100.0;
        round_to(share, precision)
    }

    /// Concatenates the strings derived by `f`, separated by `glue`.
    pub fn implode<S, F>(&self, glue: &str, mut f: F) -> String
    where
        S: Display,
        F: FnMut(&T) -> S,
    {
        self.iter()
            .map(|item| f(item).to_string())
            .collect::<Vec<_>>()
            .join(glue)
    }
}

impl<T: Ordinal + Clone> Collection<T> {
    /// The smallest element, skipping absent ones. `Ok(None)` for an empty
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`UnexpectedValue`] if two elements cannot be ordered against
    /// each other, such as a number and a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    /// use serde_json::json;
    ///
    /// assert_eq!(collect([3, 1, 2]).min().unwrap(), Some(1));
    /// assert!(collect([json!(1), json!("a")]).min().is_err());
    /// ```
    pub fn min(&self) -> Result<Option<T>, Report<UnexpectedValue>> {
        extremum(self.iter().cloned(), Ordering::Less)
    }

    /// The largest element, skipping absent ones. `Ok(None)` for an empty
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`UnexpectedValue`] if two elements cannot be ordered against
    /// each other.
    pub fn max(&self) -> Result<Option<T>, Report<UnexpectedValue>> {
        extremum(self.iter().cloned(), Ordering::Greater)
    }
}

impl<T: LooseEq + Clone> Collection<T> {
    /// The most frequent element. Ties go to the element seen first.
    ///
    /// Elements are tallied with loose equality, which takes quadratic time
    /// in the number of distinct values.
    #[must_use]
    pub fn mode(&self) -> Option<T> {
        mode_of(self.iter().cloned())
    }
}

impl<T: Display> Collection<T> {
    /// Joins the elements with `glue`, using `final_glue` before the last
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::collect;
    ///
    /// assert_eq!(collect(["a", "b", "c"]).join(", ", " and "), "a, b and c");
    /// assert_eq!(collect(["a"]).join(", ", " and "), "a");
    /// ```
    pub fn join(&self, glue: &str, final_glue: &str) -> String {
        match self.all() {
            [] => String::new(),
            [only] => only.to_string(),
            [init @ .., last] => {
                let head: Vec<String> = init.iter().map(ToString::to_string).collect();
                format!("{}{final_glue}{last}", head.join(glue))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Collection, collect};

    #[test]
    fn test_empty_aggregates() {
        let empty = Collection::<f64>::new();
        assert_eq!(empty.sum(), 0.0);
        assert_eq!(empty.average(), 0.0);
        assert_eq!(empty.median(), None);
        assert_eq!(empty.min().unwrap(), None);
        assert_eq!(empty.max().unwrap(), None);
        assert_eq!(empty.mode(), None);
        assert_eq!(empty.percentage(|_| true), 0.0);
    }

    #[test]
    fn test_sum_and_average_skip_non_numeric() {
        let values = collect([json!(1), json!(null), json!("x"), json!(3), json!(true)]);
        assert_eq!(values.sum(), 5.0);
        assert_eq!(values.avg(), 5.0 / 3.0);
    }

    #[test]
    fn test_aggregates_by_field() {
        let people = collect([
            json!({"name": "a", "age": 20}),
            json!({"name": "b", "age": 30}),
            json!({"name": "c"}),
        ]);
        assert_eq!(people.sum_by(|p| p["age"].clone()), 50.0);
        assert_eq!(people.average_by(|p| p.get("age").and_then(serde_json::Value::as_f64)), 25.0);
        assert_eq!(people.median_by(|p| p["age"].clone()), Some(25.0));
        assert_eq!(
            people.max_by(|p| p["age"].clone()).unwrap(),
            Some(json!(30))
        );
    }

    #[test]
    fn test_median() {
        assert_eq!(collect([3, 1, 2]).median(), Some(2.0));
        assert_eq!(collect([4, 1, 3, 2]).median(), Some(2.5));
        assert_eq!(collect([json!("10"), json!(null), json!(20)]).median(), Some(15.0));
    }

    #[test]
    fn test_min_max_values() {
        let values = collect([json!(4), json!(null), json!(-2), json!(9.5)]);
        assert_eq!(values.min().unwrap(), Some(json!(-2)));
        assert_eq!(values.max().unwrap(), Some(json!(9.5)));
        let strings = collect(["pear", "apple", "zucchini"]);
        assert_eq!(strings.min().unwrap(), Some("apple"));
        assert_eq!(strings.max_by(|s| s.len()).unwrap(), Some(8));
    }

    #[test]
    fn test_min_rejects_incomparable() {
        let mixed = collect([json!(1), json!(2), json!("three")]);
        let report = mixed.max().unwrap_err();
        assert_eq!(report.current_context().index(), 2);
        assert!(collect([json!([1]), json!([2])]).min().is_err());
        assert!(collect([f64::NAN, 1.0]).min().is_err());
    }

    #[test]
    fn test_mode_ties_first_seen() {
        assert_eq!(collect([1, 2, 2, 3, 3]).mode(), Some(2));
        assert_eq!(collect([json!("1"), json!(1), json!(2)]).mode(), Some(json!("1")));
        let words = collect(["aa", "b", "cc", "d"]);
        assert_eq!(words.mode_by(|w| w.len()), Some(2));
    }

    #[test]
    fn test_percentage_precision() {
        let numbers = collect([1, 2, 3]);
        assert_eq!(numbers.percentage(|n| *n > 1), 66.67);
        assert_eq!(numbers.percentage_with_precision(|n| *n > 1, 0), 67.0);
        assert_eq!(numbers.percentage_with_precision(|n| *n > 1, 4), 66.6667);
    }

    #[test]
    fn test_implode_and_join() {
        let users = collect([json!({"name": "a"}), json!({"name": "b"})]);
        assert_eq!(
            users.implode(", ", |u| u["name"].as_str().unwrap_or_default().to_owned()),
            "a, b"
        );
        assert_eq!(Collection::<i32>::new().join(", ", " or "), "");
        assert_eq!(collect([1, 2]).join(", ", " or "), "1 or 2");
    }
}
