//! What [`dd`](crate::Collection::dd) does after dumping.
//!
//! The default handler, [`ProcessExit`], terminates the process. Installing
//! a handler that panics instead makes `dd` testable:
//!
//! ```rust,should_panic
//! use collectable::hooks::Hooks;
//!
//! fn panic_on_exit(code: i32) {
//!     panic!("dd exited with {code}");
//! }
//!
//! Hooks::new()
//!     .dump_sink(|_: &str| {})
//!     .exit_handler(panic_on_exit)
//!     .install()
//!     .expect("failed to install hooks");
//!
//! collectable::collect([1]).dd();
//! ```
//!
//! If a handler returns normally, `dd` still terminates the process so that
//! it never returns to its caller.
//!
//! [`ProcessExit`]: crate::hooks::builtin_hooks::exit::ProcessExit

/// Called by [`dd`](crate::Collection::dd) with the exit status.
pub trait ExitHandler: 'static + Send + Sync {
    /// Handles the termination request.
    fn exit(&self, code: i32);
}

impl<F> ExitHandler for F
where
    F: Fn(i32) + 'static + Send + Sync,
{
    fn exit(&self, code: i32) {
        self(code);
    }
}
