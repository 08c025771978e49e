#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
//! Internal implementation crate for [`collectable`].
//!
//! # Overview
//!
//! This crate contains the value-level primitives that the [`collectable`]
//! crate builds its dynamic operations on. Everything here works on
//! [`serde_json::Value`] trees, which is how `collectable` represents
//! heterogeneous records.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`collectable`] crate,
//! not this one.
//!
//! # Layout
//!
//! - **[`kind`]**: the [`Kind`] classification of a value
//! - **[`compare`]**: loose equality, ordinal comparison and the total sort
//!   order
//! - **[`coerce`]**: numeric coercion and key stringification
//! - **[`path`]**: dot-notation lookup, flattening and rebuilding
//! - **[`merge`]**: recursive merge and recursive replace
//! - **[`shape`]**: partial-shape matching and key overlap
//!
//! All functions are total: malformed input degrades to `None`, `false` or a
//! neutral value rather than panicking.
//!
//! [`collectable`]: https://docs.rs/collectable/latest/collectable/

pub mod coerce;
pub mod compare;
pub mod kind;
pub mod merge;
pub mod path;
pub mod shape;

pub use self::{
    coerce::{to_key, to_number},
    compare::{loose_eq, ordinal_cmp, total_cmp},
    kind::Kind,
};
