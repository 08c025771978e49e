//! Built-in hooks provided by collectable.
//!
//! # What's Automatic
//!
//! Without any installed hooks, [`dump`](crate::Collection::dump) writes to
//! standard error through [`StderrSink`] and [`dd`](crate::Collection::dd)
//! terminates through [`ProcessExit`]. The `COLLECTABLE_DUMP` environment
//! variable adjusts these defaults; see [`Hooks`](crate::hooks::Hooks).
//!
//! ## Dump Sinks
//!
//! - **[`dump_sinks`]**: [`StderrSink`] (the default) and [`TracingSink`],
//!   which forwards dumps as `tracing` events.
//!
//! ## Exit Handlers
//!
//! - **[`exit`]**: [`ProcessExit`], the default handler.
//!
//! [`StderrSink`]: dump_sinks::StderrSink
//! [`TracingSink`]: dump_sinks::TracingSink
//! [`ProcessExit`]: exit::ProcessExit

pub mod dump_sinks;
pub mod exit;
