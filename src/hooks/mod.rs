//! Hooks system for customizing diagnostic output.
//!
//! # Quick Start
//!
//! ```rust
//! use collectable::hooks::{Hooks, builtin_hooks::dump_sinks::TracingSink, dump_sink::DumpFormat};
//!
//! // Send every dump through `tracing`, on a single line
//! Hooks::new()
//!     .dump_sink(TracingSink)
//!     .dump_format(DumpFormat::Compact)
//!     .install()
//!     .expect("failed to install hooks");
//! ```
//!
//! # When to Use Hooks
//!
//! **Most users don't need hooks**: by default [`dump`] writes a pretty
//! `Debug` rendering to standard error and [`dd`] exits the process with
//! status 1. Use hooks when you need to:
//! - Capture dumps in tests or forward them to a logging system
//! - Keep `dd` from terminating the process, for example in a test harness
//! - Change how dumps are rendered
//!
//! # Hook Types
//!
//! - **[`dump_sink`]**: where rendered dumps are written
//! - **[`exit_handler`]**: what `dd` does after dumping
//! - **[`DumpFormat`]**: how a collection is rendered
//!
//! # Environment Variables
//!
//! `COLLECTABLE_DUMP` holds comma-separated options, read once per process:
//! - `compact`: render dumps on a single line unless a format is installed
//! - `pretty`: render dumps indented unless a format is installed (default)
//! - `silent`: discard dumps unless a sink is installed
//!
//! [`dump`]: crate::Collection::dump
//! [`dd`]: crate::Collection::dd
//! [`DumpFormat`]: dump_sink::DumpFormat

pub mod builtin_hooks;
pub mod dump_sink;
pub mod exit_handler;
mod hook_lock;

use core::fmt;
use std::{
    panic::Location,
    sync::{Arc, OnceLock},
};

use self::{
    builtin_hooks::{dump_sinks::StderrSink, exit::ProcessExit},
    dump_sink::{DumpFormat, DumpSink},
    exit_handler::ExitHandler,
    hook_lock::HookLock,
};

/// Builder for configuring and installing hooks globally.
///
/// Every setting is optional. Settings left out fall back to the defaults
/// described in the [module documentation](self).
///
/// # Examples
///
/// ```rust
/// use collectable::hooks::Hooks;
///
/// fn panic_on_exit(code: i32) {
///     panic!("exit({code})");
/// }
///
/// Hooks::new()
///     .dump_sink(|rendered: &str| println!("{rendered}"))
///     .exit_handler(panic_on_exit)
///     .install()
///     .expect("failed to install hooks");
///
/// // Installed hooks stay in place until replaced or uninstalled
/// assert!(Hooks::new().install().is_err());
/// ```
#[derive(Debug)]
pub struct Hooks(Box<HookData>);

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct HookData {
    dump_sink: Option<Box<dyn DumpSink>>,
    exit_handler: Option<Box<dyn ExitHandler>>,
    dump_format: Option<DumpFormat>,
    created_at: &'static Location<'static>,
}

impl fmt::Debug for HookData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookData")
            .field("dump_sink", &self.dump_sink.is_some())
            .field("exit_handler", &self.exit_handler.is_some())
            .field("dump_format", &self.dump_format)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Error returned when attempting to install hooks when they're already
/// installed.
///
/// Contains the hooks that were attempted to be installed, allowing you to
/// recover them if needed.
pub struct HooksAlreadyInstalledError(pub Hooks);

impl fmt::Debug for HooksAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HooksAlreadyInstalledError").finish()
    }
}

impl fmt::Display for HooksAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hooks are already installed globally")
    }
}

impl core::error::Error for HooksAlreadyInstalledError {}

impl Hooks {
    /// Creates a new `Hooks` builder with every setting left at its default.
    #[track_caller]
    #[must_use]
    pub fn new() -> Self {
        Self(Box::new(HookData {
            dump_sink: None,
            exit_handler: None,
            dump_format: None,
            created_at: Location::caller(),
        }))
    }

    /// Sets the sink that receives rendered dumps.
    ///
    /// Accepts any [`DumpSink`], including `Fn(&str)` closures.
    #[must_use]
    pub fn dump_sink<S>(mut self, sink: S) -> Self
    where
        S: DumpSink,
    {
        self.0.dump_sink = Some(Box::new(sink));
        self
    }

    /// Sets the handler [`dd`](crate::Collection::dd) calls after dumping.
    ///
    /// Accepts any [`ExitHandler`], including `Fn(i32)` closures.
    #[must_use]
    pub fn exit_handler<H>(mut self, handler: H) -> Self
    where
        H: ExitHandler,
    {
        self.0.exit_handler = Some(Box::new(handler));
        self
    }

    /// Sets how dumps are rendered. Overrides the `COLLECTABLE_DUMP`
    /// environment variable.
    #[must_use]
    pub fn dump_format(mut self, format: DumpFormat) -> Self {
        self.0.dump_format = Some(format);
        self
    }

    /// Installs the hooks globally.
    ///
    /// If hooks are already installed, returns an error
    /// [`HooksAlreadyInstalledError`], containing the hooks that were attempted
    /// to be installed.
    ///
    /// See also [`replace`](Self::replace) which will replace any existing
    /// hooks without erroring.
    ///
    /// # Errors
    ///
    /// Returns [`HooksAlreadyInstalledError`] if hooks are already installed.
    pub fn install(self) -> Result<(), HooksAlreadyInstalledError> {
        let mut guard = HOOKS.write();
        let slot = guard.get();
        if slot.is_some() {
            tracing::debug!("refusing to install hooks over existing hooks");
            return Err(HooksAlreadyInstalledError(self));
        }
        tracing::debug!(hooks = ?self.0, "installing hooks");
        *slot = Some(Arc::from(self.0));
        Ok(())
    }

    /// Replaces the currently installed hooks with `self`.
    ///
    /// Returns the previously installed hooks, if any, as an
    /// [`InstalledHooks`] handle that can be put back later.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectable::hooks::{Hooks, dump_sink::DumpFormat};
    ///
    /// Hooks::new().dump_format(DumpFormat::Compact).install().unwrap();
    ///
    /// let previous = Hooks::new().replace();
    /// assert!(previous.is_some());
    /// ```
    pub fn replace(self) -> Option<InstalledHooks> {
        self.share().replace()
    }

    /// Removes the currently installed hooks, restoring the defaults.
    ///
    /// Returns the removed hooks, if any.
    pub fn uninstall() -> Option<InstalledHooks> {
        let previous = HOOKS.write().get().take();
        tracing::debug!(was_installed = previous.is_some(), "uninstalling hooks");
        previous.map(InstalledHooks)
    }

    /// Turns the builder into an [`InstalledHooks`] handle without
    /// installing it.
    pub fn share(self) -> InstalledHooks {
        InstalledHooks(Arc::from(self.0))
    }
}

/// A shareable handle to hooks, installed or not.
///
/// Handles are returned by [`Hooks::replace`] and [`Hooks::uninstall`] so
/// that a previous configuration can be restored.
#[derive(Clone, Debug)]
pub struct InstalledHooks(Arc<HookData>);

impl InstalledHooks {
    /// Fetches the currently installed hooks, if any.
    pub fn fetch_current_hooks() -> Option<Self> {
        HookData::fetch().map(Self)
    }

    /// Installs `self` globally in place of the current hooks.
    ///
    /// Returns the previously installed hooks, if any.
    pub fn replace(self) -> Option<InstalledHooks> {
        tracing::debug!(hooks = ?self.0, "replacing hooks");
        HOOKS.write().get().replace(self.0).map(Self)
    }
}

static HOOKS: HookLock<Arc<HookData>> = HookLock::new();

impl HookData {
    pub(crate) fn fetch() -> Option<Arc<HookData>> {
        HOOKS.read().get().cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CollectableEnvOptions {
    dump_format: DumpFormat,
    silent: bool,
}

impl CollectableEnvOptions {
    fn get() -> &'static Self {
        static COLLECTABLE_FLAGS: OnceLock<CollectableEnvOptions> = OnceLock::new();

        COLLECTABLE_FLAGS.get_or_init(|| match std::env::var_os("COLLECTABLE_DUMP") {
            Some(var) => Self::parse(&var.to_string_lossy()),
            None => Self::parse(""),
        })
    }

    fn parse(var: &str) -> Self {
        let mut dump_format = DumpFormat::Pretty;
        let mut silent = false;

        for v in var.split(',').map(str::trim) {
            if v.eq_ignore_ascii_case("compact") {
                dump_format = DumpFormat::Compact;
            } else if v.eq_ignore_ascii_case("pretty") {
                dump_format = DumpFormat::Pretty;
            } else if v.eq_ignore_ascii_case("silent") {
                silent = true;
            }
        }

        Self {
            dump_format,
            silent,
        }
    }
}

/// Renders `value` and writes it through the installed sink.
pub(crate) fn dump(value: &dyn fmt::Debug) {
    let hooks = HookData::fetch();
    let env_options = CollectableEnvOptions::get();

    let format = hooks
        .as_ref()
        .and_then(|hooks| hooks.dump_format)
        .unwrap_or(env_options.dump_format);

    match hooks.as_ref().and_then(|hooks| hooks.dump_sink.as_deref()) {
        Some(sink) => sink.write(&format.render(value)),
        None if env_options.silent => {}
        None => StderrSink.write(&format.render(value)),
    }
}

/// Hands `code` to the installed exit handler.
pub(crate) fn exit(code: i32) {
    match HookData::fetch()
        .as_ref()
        .and_then(|hooks| hooks.exit_handler.as_deref())
    {
        Some(handler) => handler.exit(code),
        None => ProcessExit.exit(code),
    }
}
