//! The default exit handler.

use crate::hooks::exit_handler::ExitHandler;

/// Terminates the process with [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessExit;

impl ExitHandler for ProcessExit {
    fn exit(&self, code: i32) {
        tracing::debug!(code, "terminating process after dump");
        std::process::exit(code)
    }
}
