#![deny(
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    unused_doc_comments
)]
#![warn(missing_docs, missing_copy_implementations)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A fluent, chainable collection type with a large surface of convenience
//! operations.
//!
//! ## Overview
//!
//! [`Collection<T>`] wraps an ordered sequence and offers mapping, filtering,
//! grouping, statistical aggregates, set-like operations, pagination helpers
//! and more, all returning new collections so calls can be chained.
//!
//! ## Quick Example
//!
//! ```
//! use collectable::collect;
//!
//! let doubled = collect([1, 2, 3, 4]).filter(|n| *n > 2).map(|n| n * 2);
//! assert_eq!(doubled, [6, 8]);
//! assert_eq!(doubled.average(), 7.0);
//! ```
//!
//! ## Core Concepts
//!
//! **Copy on transform.** Every transformation borrows the receiver and
//! returns a new collection. The receiver is never modified, except through
//! the few methods that take `&mut self` ([`pop`](Collection::pop),
//! [`shift`](Collection::shift) and [`transform`](Collection::transform)).
//!
//! **Typed and dynamic elements.** Most operations are generic over `T` and
//! pick up extra abilities through small traits:
//!
//! - [`LooseEq`]: equality used by `contains`, `diff`, `unique` and friends
//! - [`Ordinal`]: ordering used by `min`, `max` and `sort`
//! - [`Numeric`]: numeric coercion used by `sum`, `average` and `median`
//! - [`ToKey`]: key derivation used by grouping and keying
//! - [`Typed`]: runtime kinds used by [`ensure`](Collection::ensure)
//!
//! Records with a dynamic shape are represented as [`serde_json::Value`].
//! A `Collection<Value>` additionally offers field-oriented operations such
//! as [`pluck`](Collection::pluck), [`dot`](Collection::dot) and
//! [`where_eq`](Collection::where_eq). For values, loose equality treats
//! `4` and `"4"` as equal, the way a dynamically typed caller would expect.
//!
//! **Errors.** Lookups that must succeed return
//! `Result<_, rootcause::Report<ItemNotFound>>`, and type expectations return
//! `Result<_, rootcause::Report<UnexpectedValue>>`. Everything else degrades
//! to `None` or a neutral value.
//!
//! **Diagnostics.** [`dump`](Collection::dump) and [`dd`](Collection::dd)
//! write through a sink configured with [`hooks::Hooks`].
//!
//! For the value-level primitives, see the [`collectable-internals`] crate.
//!
//! [`collectable-internals`]: collectable_internals

pub mod collection;
mod compare;
mod convert;
pub mod ensure;
pub mod errors;
pub mod hooks;
mod macros;
pub mod needle;
pub mod prelude;

pub use collectable_internals::Kind;
pub use serde_json::Value;

pub use self::{
    collection::Collection,
    compare::{LooseEq, Ordinal},
    convert::{Numeric, ToKey},
    ensure::{TypeDescriptor, Typed},
    errors::{ItemNotFound, UnexpectedValue},
    needle::Needle,
};

/// An insertion-ordered map from string keys, the result type of grouping and
/// keying operations.
pub type Map<V> = indexmap::IndexMap<String, V, rustc_hash::FxBuildHasher>;

/// Creates a new [`Collection`] from anything iterable.
///
/// # Examples
///
/// ```
/// use collectable::collect;
///
/// let names = collect(vec!["alice", "bob"]);
/// assert_eq!(names.count(), 2);
/// ```
pub fn collect<I>(items: I) -> Collection<I::Item>
where
    I: IntoIterator,
{
    Collection::make(items)
}

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use std::vec;
}
