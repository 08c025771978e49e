//! Classification of dynamic values.

use serde_json::Value;

/// The runtime kind of a value.
///
/// Numbers are split into integers and floats so callers can distinguish
/// `1` from `1.5`; a float with an integral value (such as `1.0`) is still a
/// float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// A number stored as a signed or unsigned integer
    Integer,
    /// A number stored as a float
    Float,
    /// A string
    String,
    /// An array
    Array,
    /// An object
    Object,
}

impl Kind {
    /// Returns the kind of a JSON value.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable_internals::Kind;
    /// use serde_json::json;
    ///
    /// assert_eq!(Kind::of(&json!(1)), Kind::Integer);
    /// assert_eq!(Kind::of(&json!(1.5)), Kind::Float);
    /// assert_eq!(Kind::of(&json!({"a": 1})), Kind::Object);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns `true` for [`Kind::Integer`] and [`Kind::Float`].
    #[must_use]
    pub fn is_number(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Returns `true` for arrays and objects.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// The lowercase name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
