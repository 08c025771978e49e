//! Commonly used items for convenient importing.
//!
//! The prelude re-exports the collection type, its constructor helpers and
//! the traits that unlock its generic operations, so a single use statement
//! covers the common case.
//!
//! # Usage
//!
//! ```rust
//! use collectable::prelude::*;
//!
//! let totals = collect![3, 1, 2].sort().map(|n| n * 10);
//! assert_eq!(totals, [10, 20, 30]);
//! assert!(totals.contains(Needle::when(|n: &i32| *n > 25)));
//! ```
//!
//! # What's Included
//!
//! - **[`Collection`]**, **[`collect`]** and **[`collect!`]**
//! - **[`Needle`]**: loose, strict and predicate lookups
//! - **[`LooseEq`]**, **[`Ordinal`]**, **[`Numeric`]**, **[`ToKey`]** and
//!   **[`Typed`]**: the element traits
//! - **[`TypeDescriptor`]**: expectations for [`Collection::ensure`]
//! - **[`Map`]** and **[`Value`]**: keyed results and dynamic records

pub use crate::{
    Collection, LooseEq, Map, Needle, Numeric, Ordinal, ToKey, TypeDescriptor, Typed, Value,
    collect,
};
