//! Runtime type expectations for collection elements.
//!
//! [`Collection::ensure`] checks every element against a list of
//! [`TypeDescriptor`]s and fails with [`UnexpectedValue`] on the first
//! element that matches none of them.
//!
//! ```
//! use collectable::{TypeDescriptor, collect};
//! use serde_json::json;
//!
//! let mixed = collect([json!(1), json!("two"), json!(3.5)]);
//! assert!(mixed.ensure(&[TypeDescriptor::Number, TypeDescriptor::String]).is_ok());
//!
//! let report = mixed.ensure(&[TypeDescriptor::Number]).unwrap_err();
//! assert_eq!(report.current_context().index(), 1);
//! ```

use collectable_internals::Kind;
use rootcause::Report;
use serde_json::Value;

use crate::{Collection, Map, errors::UnexpectedValue};

/// Runtime kind information for an element.
pub trait Typed {
    /// The kind of `self`.
    fn kind(&self) -> Kind;

    /// Returns `true` if `self` is a record with a field called `name`.
    fn has_field(&self, name: &str) -> bool {
        let _ = name;
        false
    }
}

macro_rules! impl_typed {
    ($kind:ident => $($ty:ty),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }
            }
        )*
    };
}

impl_typed!(Null => ());
impl_typed!(Bool => bool);
impl_typed!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_typed!(Float => f32, f64);
impl_typed!(String => char, str, String);

impl Typed for Value {
    fn kind(&self) -> Kind {
        Kind::of(self)
    }

    fn has_field(&self, name: &str) -> bool {
        self.as_object().is_some_and(|object| object.contains_key(name))
    }
}

impl<T> Typed for [T] {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T> Typed for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T> Typed for Collection<T> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<V> Typed for Map<V> {
    fn kind(&self) -> Kind {
        Kind::Object
    }

    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<T: Typed> Typed for Option<T> {
    fn kind(&self) -> Kind {
        self.as_ref().map_or(Kind::Null, Typed::kind)
    }

    fn has_field(&self, name: &str) -> bool {
        self.as_ref().is_some_and(|inner| inner.has_field(name))
    }
}

impl<T: Typed + ?Sized> Typed for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn has_field(&self, name: &str) -> bool {
        (**self).has_field(name)
    }
}

/// An allowed element type, as checked by [`Collection::ensure`].
pub enum TypeDescriptor<T> {
    /// `null` or `None`.
    Null,
    /// A boolean.
    Bool,
    /// Any number, integer or float.
    Number,
    /// An integer.
    Integer,
    /// A float.
    Float,
    /// A string.
    String,
    /// An array or sequence.
    Array,
    /// An object or map.
    Object,
    /// A record that has every one of the listed fields.
    Shape(&'static [&'static str]),
    /// A user-defined type check.
    Named {
        /// Name used in the error when nothing matches.
        name: &'static str,
        /// Returns `true` for elements of this type.
        predicate: fn(&T) -> bool,
    },
}

impl<T> TypeDescriptor<T> {
    /// Returns `true` if `item` is of this type.
    pub fn matches(&self, item: &T) -> bool
    where
        T: Typed,
    {
        let kind = item.kind();
        match self {
            Self::Null => kind == Kind::Null,
            Self::Bool => kind == Kind::Bool,
            Self::Number => kind.is_number(),
            Self::Integer => kind == Kind::Integer,
            Self::Float => kind == Kind::Float,
            Self::String => kind == Kind::String,
            Self::Array => kind == Kind::Array,
            Self::Object => kind == Kind::Object,
            Self::Shape(fields) => fields.iter().all(|field| item.has_field(field)),
            Self::Named { predicate, .. } => predicate(item),
        }
    }

    /// The name shown in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Self::Null => "null".to_owned(),
            Self::Bool => "bool".to_owned(),
            Self::Number => "number".to_owned(),
            Self::Integer => "integer".to_owned(),
            Self::Float => "float".to_owned(),
            Self::String => "string".to_owned(),
            Self::Array => "array".to_owned(),
            Self::Object => "object".to_owned(),
            Self::Shape(fields) => format!("shape {{{}}}", fields.join(", ")),
            Self::Named { name, .. } => (*name).to_owned(),
        }
    }
}

impl<T> core::fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "TypeDescriptor({})", self.name())
    }
}

impl<T: Typed> Collection<T> {
    /// Verifies that every element matches at least one of `descriptors`.
    ///
    /// Returns the collection itself so the check can sit inside a chain.
    ///
    /// # Errors
    ///
    /// Returns [`UnexpectedValue`] for the first element matching none of
    /// the descriptors. An empty descriptor list rejects any non-empty
    /// collection. The report carries the element's kind as an attachment.
    pub fn ensure(&self, descriptors: &[TypeDescriptor<T>]) -> Result<&Self, Report<UnexpectedValue>> {
        let offending = self
            .iter()
            .enumerate()
            .find(|(_, item)| !descriptors.iter().any(|descriptor| descriptor.matches(item)));

        match offending {
            None => Ok(self),
            Some((index, item)) => {
                let names: Vec<String> = descriptors.iter().map(TypeDescriptor::name).collect();
                tracing::debug!(index, found = %item.kind(), "collection element failed ensure");
                Err(
                    Report::new(UnexpectedValue::new(index, format!("one of [{}]", names.join(", "))))
                        .attach(format!("Found: {}", item.kind())),
                )
            }
        }
    }
}
