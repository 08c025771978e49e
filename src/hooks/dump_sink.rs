//! Where [`dump`](crate::Collection::dump) output goes, and how it is
//! rendered.
//!
//! Any `Fn(&str)` closure is a sink, which makes capturing dumps in tests a
//! one-liner:
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use collectable::hooks::{Hooks, dump_sink::DumpFormat};
//!
//! let captured = Arc::new(Mutex::new(Vec::<String>::new()));
//! let sink = Arc::clone(&captured);
//!
//! Hooks::new()
//!     .dump_sink(move |rendered: &str| sink.lock().unwrap().push(rendered.to_owned()))
//!     .dump_format(DumpFormat::Compact)
//!     .install()
//!     .expect("failed to install hooks");
//!
//! collectable::collect([1, 2]).dump();
//! assert_eq!(captured.lock().unwrap().as_slice(), ["[1, 2]"]);
//! ```

use core::fmt;

/// Receives the rendered text of every dumped collection.
///
/// See [`builtin_hooks::dump_sinks`](crate::hooks::builtin_hooks::dump_sinks)
/// for the sinks shipped with this crate.
pub trait DumpSink: 'static + Send + Sync {
    /// Writes one rendered dump.
    fn write(&self, rendered: &str);
}

impl<F> DumpSink for F
where
    F: Fn(&str) + 'static + Send + Sync,
{
    fn write(&self, rendered: &str) {
        self(rendered);
    }
}

/// How a dumped collection is rendered before it reaches the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DumpFormat {
    /// Multi-line, indented `Debug` output (`{:#?}`).
    #[default]
    Pretty,
    /// Single-line `Debug` output (`{:?}`).
    Compact,
}

impl DumpFormat {
    /// Renders `value` in this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectable::hooks::dump_sink::DumpFormat;
    ///
    /// assert_eq!(DumpFormat::Compact.render(&[1, 2]), "[1, 2]");
    /// assert_eq!(DumpFormat::Pretty.render(&[1]), "[\n    1,\n]");
    /// ```
    #[must_use]
    pub fn render(self, value: &dyn fmt::Debug) -> String {
        match self {
            Self::Pretty => format!("{value:#?}"),
            Self::Compact => format!("{value:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_closure_sink() {
        let seen = Arc::new(Mutex::new(String::new()));
        let target = Arc::clone(&seen);
        let sink = move |rendered: &str| target.lock().unwrap().push_str(rendered);
        sink.write("abc");
        DumpSink::write(&sink, "def");
        assert_eq!(*seen.lock().unwrap(), "abcdef");
    }

    #[test]
    fn test_render_nested() {
        let nested = vec![vec![1, 2], vec![]];
        assert_eq!(DumpFormat::Compact.render(&nested), "[[1, 2], []]");
        assert!(DumpFormat::Pretty.render(&nested).contains('\n'));
        assert_eq!(DumpFormat::default(), DumpFormat::Pretty);
    }
}
