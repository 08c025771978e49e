//! Dump sinks shipped with collectable.
//!
//! Route dumps into an application's logs instead of standard error:
//!
//! ```rust
//! use collectable::hooks::{Hooks, builtin_hooks::dump_sinks::TracingSink};
//!
//! Hooks::new()
//!     .dump_sink(TracingSink)
//!     .install()
//!     .expect("failed to install hooks");
//! ```

use crate::hooks::dump_sink::DumpSink;

/// Writes every dump to standard error, followed by a newline.
///
/// This is the sink used when no other sink is installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StderrSink;

impl DumpSink for StderrSink {
    fn write(&self, rendered: &str) {
        eprintln!("{rendered}");
    }
}

/// Emits every dump as an `INFO` event on the `collectable::dump` target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl DumpSink for TracingSink {
    fn write(&self, rendered: &str) {
        tracing::info!(target: "collectable::dump", "{rendered}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sinks_accept_output() {
        StderrSink.write("stderr sink test");
        TracingSink.write("tracing sink test");
    }

    static_assertions::assert_impl_all!(StderrSink: DumpSink, Copy);
    static_assertions::assert_impl_all!(TracingSink: DumpSink, Copy);
}
