//! User-facing console

use tracing::debug;

/// Console receiving one line per notable submission event
pub trait Console: Send + Sync {
    /// Write a debug line
    fn debug(&self, message: &str);
}

/// Console forwarding lines to `tracing` under the `lint_gate::console` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn debug(&self, message: &str) {
        debug!(target: "lint_gate::console", "{message}");
    }
}
