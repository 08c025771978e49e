use core::cmp::Ordering;

use serde_json::Value;

/// Equality used by membership tests, set operations and deduplication.
///
/// The default implementation is plain [`PartialEq`]. [`Value`] overrides it
/// so numbers, numeric strings and booleans compare by numeric value, which
/// is what "loose" means throughout this crate. Operations documented as
/// strict always use [`PartialEq`] instead.
///
/// # Examples
///
/// ```
/// use collectable::LooseEq;
/// use serde_json::json;
///
/// assert!(json!(4).loose_eq(&json!("4")));
/// assert!(!4i32.loose_eq(&5));
/// ```
pub trait LooseEq: PartialEq {
    /// Returns `true` if `self` and `other` are loosely equal.
    fn loose_eq(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! impl_strict_loose_eq {
    ($($ty:ty),* $(,)?) => {
        $(impl LooseEq for $ty {})*
    };
}

impl_strict_loose_eq!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl LooseEq for Value {
    fn loose_eq(&self, other: &Self) -> bool {
        collectable_internals::loose_eq(self, other)
    }
}

impl<T: LooseEq + ?Sized> LooseEq for &T {
    fn loose_eq(&self, other: &Self) -> bool {
        (**self).loose_eq(*other)
    }
}

impl<T: LooseEq + ?Sized> LooseEq for Box<T> {
    fn loose_eq(&self, other: &Self) -> bool {
        (**self).loose_eq(&**other)
    }
}

impl<T: LooseEq> LooseEq for Option<T> {
    fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.loose_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: LooseEq> LooseEq for [T] {
    fn loose_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.loose_eq(b))
    }
}

impl<T: LooseEq> LooseEq for Vec<T> {
    fn loose_eq(&self, other: &Self) -> bool {
        self.as_slice().loose_eq(other.as_slice())
    }
}

impl<A: LooseEq, B: LooseEq> LooseEq for (A, B) {
    fn loose_eq(&self, other: &Self) -> bool {
        self.0.loose_eq(&other.0) && self.1.loose_eq(&other.1)
    }
}

impl<A: LooseEq, B: LooseEq, C: LooseEq> LooseEq for (A, B, C) {
    fn loose_eq(&self, other: &Self) -> bool {
        self.0.loose_eq(&other.0) && self.1.loose_eq(&other.1) && self.2.loose_eq(&other.2)
    }
}

/// Ordering used by `min`, `max` and the sorting operations.
///
/// Unlike [`PartialOrd`], the ordering is meant to be asked across the
/// elements of a heterogeneous collection: `None` means the two values are
/// of kinds that cannot be ordered against each other, such as a number and
/// a string.
///
/// Sorting needs a total order and uses [`sort_cmp`](Self::sort_cmp)
/// instead. Types whose `ordinal_cmp` can return `None` should override it.
pub trait Ordinal {
    /// Compares `self` with `other`, or returns `None` if they are not
    /// comparable.
    fn ordinal_cmp(&self, other: &Self) -> Option<Ordering>;

    /// Total order used by `sort` and friends.
    ///
    /// The default falls back to `Equal` for incomparable pairs, which is
    /// only a total order if `ordinal_cmp` never returns `None`.
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.ordinal_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Returns `true` for null-like values, which `min` and `max` skip.
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_total_ordinal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Ordinal for $ty {
                fn ordinal_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }
        )*
    };
}

impl_total_ordinal!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    str,
    String,
);

impl Ordinal for f32 {
    fn ordinal_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Ordinal for f64 {
    fn ordinal_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Ordinal for Value {
    fn ordinal_cmp(&self, other: &Self) -> Option<Ordering> {
        collectable_internals::ordinal_cmp(self, other)
    }

    /// Kinds rank `null`, bool, number, string, array, object.
    fn sort_cmp(&self, other: &Self) -> Ordering {
        collectable_internals::total_cmp(self, other)
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: Ordinal + ?Sized> Ordinal for &T {
    fn ordinal_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).ordinal_cmp(*other)
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        (**self).sort_cmp(*other)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// `None` orders before every `Some`.
impl<T: Ordinal> Ordinal for Option<T> {
    fn ordinal_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Some(a), Some(b)) => a.ordinal_cmp(b),
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
        }
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.sort_cmp(b),
            _ => self.is_some().cmp(&other.is_some()),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<A: Ordinal, B: Ordinal> Ordinal for (A, B) {
    fn ordinal_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.ordinal_cmp(&other.0)? {
            Ordering::Equal => self.1.ordinal_cmp(&other.1),
            decided => Some(decided),
        }
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.0
            .sort_cmp(&other.0)
            .then_with(|| self.1.sort_cmp(&other.1))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_loose_eq_defaults_to_partial_eq() {
        assert!(3i32.loose_eq(&3));
        assert!(!"a".loose_eq(&"b"));
        assert!(vec![1i32, 2].loose_eq(&vec![1, 2]));
        assert!(!Some(1i32).loose_eq(&None));
    }

    #[test]
    fn test_loose_eq_values() {
        assert!(json!(4).loose_eq(&json!("4")));
        assert!(vec![json!(1), json!("2")].loose_eq(&vec![json!("1"), json!(2)]));
        assert!((json!(1), json!(true)).loose_eq(&(json!("1"), json!(1))));
        assert!(!json!("four").loose_eq(&json!(4)));
    }

    #[test]
    fn test_ordinal_floats_and_values() {
        assert_eq!(1.5f64.ordinal_cmp(&2.0), Some(Ordering::Less));
        assert_eq!(f64::NAN.ordinal_cmp(&2.0), None);
        assert_eq!(json!("a").ordinal_cmp(&json!(1)), None);
        assert!(json!(null).is_absent());
        assert!(!json!(0).is_absent());
    }

    #[test]
    fn test_ordinal_option_and_tuple() {
        assert_eq!(None::<i32>.ordinal_cmp(&Some(1)), Some(Ordering::Less));
        assert_eq!((1i32, "b").ordinal_cmp(&(1, "a")), Some(Ordering::Greater));
    }

    #[test]
    fn test_sort_cmp_is_total() {
        assert_eq!(json!("a").sort_cmp(&json!(1)), Ordering::Greater);
        assert_eq!(json!(null).sort_cmp(&json!(0)), Ordering::Less);
        assert_eq!(f64::NAN.sort_cmp(&1.0), Ordering::Greater);
        assert_eq!((-0.0f64).sort_cmp(&0.0), Ordering::Less);
        assert_eq!(None::<f64>.sort_cmp(&Some(f64::NAN)), Ordering::Less);
        assert_eq!(
            (json!(1), json!(null)).sort_cmp(&(json!(1), json!("b"))),
            Ordering::Less
        );
    }
}
