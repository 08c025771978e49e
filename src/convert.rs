use collectable_internals::coerce::{float_key, parse_numeric};
use serde_json::Value;

/// Numeric coercion used by the statistical aggregates.
///
/// Returning `None` marks a value that is not a number. Aggregates skip such
/// values instead of failing: the average of `[1, null, 3]` is `2`.
///
/// # Examples
///
/// ```
/// use collectable::Numeric;
/// use serde_json::json;
///
/// assert_eq!(json!("2").to_f64(), Some(2.0));
/// assert_eq!(json!(true).to_f64(), Some(1.0));
/// assert_eq!(json!(null).to_f64(), None);
/// assert_eq!(7u8.to_f64(), Some(7.0));
/// ```
pub trait Numeric {
    /// Returns the numeric value, or `None` if there is none.
    fn to_f64(&self) -> Option<f64>;
}

macro_rules! impl_numeric_as {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_as!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeric for f32 {
    fn to_f64(&self) -> Option<f64> {
        Some(f64::from(*self)).filter(|n| n.is_finite())
    }
}

impl Numeric for f64 {
    fn to_f64(&self) -> Option<f64> {
        Some(*self).filter(|n| n.is_finite())
    }
}

impl Numeric for bool {
    fn to_f64(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

impl Numeric for str {
    fn to_f64(&self) -> Option<f64> {
        parse_numeric(self)
    }
}

impl Numeric for String {
    fn to_f64(&self) -> Option<f64> {
        parse_numeric(self)
    }
}

impl Numeric for Value {
    fn to_f64(&self) -> Option<f64> {
        collectable_internals::to_number(self)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }
}

impl<T: Numeric> Numeric for Option<T> {
    fn to_f64(&self) -> Option<f64> {
        self.as_ref().and_then(Numeric::to_f64)
    }
}

/// Derivation of the string key under which an element is grouped, keyed or
/// counted.
///
/// Keys are stringified the way a dynamic map would stringify them, so the
/// integer `1` and the string `"1"` land under the same key.
pub trait ToKey {
    /// Returns the key for `self`.
    fn to_key(&self) -> String;
}

macro_rules! impl_to_key_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToKey for $ty {
                fn to_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_to_key_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

impl ToKey for f32 {
    fn to_key(&self) -> String {
        float_key(f64::from(*self))
    }
}

impl ToKey for f64 {
    fn to_key(&self) -> String {
        float_key(*self)
    }
}

impl ToKey for Value {
    fn to_key(&self) -> String {
        collectable_internals::to_key(self)
    }
}

impl<T: ToKey + ?Sized> ToKey for &T {
    fn to_key(&self) -> String {
        (**self).to_key()
    }
}

/// `None` is keyed as the empty string, like a JSON `null`.
impl<T: ToKey> ToKey for Option<T> {
    fn to_key(&self) -> String {
        self.as_ref().map(ToKey::to_key).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_numeric_rejects_non_finite() {
        assert_eq!(f64::NAN.to_f64(), None);
        assert_eq!(f64::INFINITY.to_f64(), None);
        assert_eq!("inf".to_f64(), None);
        assert_eq!(" 12.5 ".to_f64(), Some(12.5));
    }

    #[test]
    fn test_numeric_option() {
        assert_eq!(Some(3i32).to_f64(), Some(3.0));
        assert_eq!(None::<i32>.to_f64(), None);
        assert_eq!(json!([1]).to_f64(), None);
    }

    #[test]
    fn test_to_key() {
        assert_eq!(1i64.to_key(), json!("1").to_key());
        assert_eq!(2.0f64.to_key(), "2");
        assert_eq!(2.5f64.to_key(), "2.5");
        assert_eq!(Some("x").to_key(), "x");
        assert_eq!(None::<String>.to_key(), "");
        assert_eq!(json!(null).to_key(), "");
    }
}
