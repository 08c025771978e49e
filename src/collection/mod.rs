//! The [`Collection`] type and its operation families.
//!
//! The methods of [`Collection`] are spread over several files, one per
//! family:
//!
//! - **owned**: construction, element access and the `&mut self` API
//! - **search**: membership tests and needle-based lookups
//! - **transform**: mapping, filtering, chunking, sorting and deduplication
//! - **slicing**: positional selection and pagination
//! - **aggregate**: sums, averages, extrema, median, mode and percentages
//! - **grouping**: operations producing a keyed [`Map`](crate::Map)
//! - **set_ops**: differences, intersections, unions, zips and products
//! - **control**: conditional helpers, iteration and diagnostics
//! - **dynamic**: field-oriented operations on `Collection<Value>`

mod aggregate;
mod control;
mod dynamic;
mod grouping;
mod iter;
mod owned;
mod search;
mod set_ops;
mod slicing;
mod transform;

pub use self::{
    iter::{CollectionIntoIter, CollectionIter},
    owned::Collection,
};
