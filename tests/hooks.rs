//! Global hook behavior for `dump` and `dd`.
//!
//! Hooks are process-wide, so everything runs inside a single test to keep
//! the steps from racing each other.
//!
//! ## Steps
//! - a capturing sink receives pretty dumps and `dump` returns the receiver
//! - a second `install` is refused and hands the hooks back
//! - `replace` switches to the compact format and returns the old hooks
//! - `dd` dumps, then calls the exit handler with status 1
//! - `uninstall` removes the hooks and the captured output stops growing

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex},
};

use collectable::{
    collect,
    hooks::{Hooks, InstalledHooks, dump_sink::DumpFormat},
};

fn panic_on_exit(code: i32) {
    panic!("exit({code})");
}

fn capture(seen: &Arc<Mutex<Vec<String>>>) -> impl Fn(&str) + Send + Sync + 'static {
    let seen = Arc::clone(seen);
    move |rendered: &str| seen.lock().unwrap().push(rendered.to_owned())
}

#[test]
fn test_dump_and_dd_hooks() {
    let seen = Arc::new(Mutex::new(Vec::new()));

    Hooks::new()
        .dump_sink(capture(&seen))
        .dump_format(DumpFormat::Pretty)
        .install()
        .unwrap();
    assert!(InstalledHooks::fetch_current_hooks().is_some());

    let numbers = collect([1, 2]);
    let doubled = numbers.dump().map(|n| n * 2);
    assert_eq!(doubled, [2, 4]);
    assert_eq!(*seen.lock().unwrap(), ["[\n    1,\n    2,\n]"]);

    let refused = Hooks::new().install().unwrap_err();
    assert_eq!(refused.to_string(), "hooks are already installed globally");

    let previous = Hooks::new()
        .dump_sink(capture(&seen))
        .dump_format(DumpFormat::Compact)
        .exit_handler(panic_on_exit)
        .replace();
    assert!(previous.is_some());

    collect(["a", "b"]).dump();
    assert_eq!(seen.lock().unwrap().last().unwrap(), r#"["a", "b"]"#);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        collect([7]).dd();
    }));
    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().unwrap(), "exit(1)");
    assert_eq!(seen.lock().unwrap().last().unwrap(), "[7]");

    assert!(Hooks::uninstall().is_some());
    assert!(Hooks::uninstall().is_none());
    assert!(InstalledHooks::fetch_current_hooks().is_none());

    let before = seen.lock().unwrap().len();
    collect([0]).dump();
    assert_eq!(seen.lock().unwrap().len(), before);
}
