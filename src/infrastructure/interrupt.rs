//! Ctrl-C handling
//!
//! The child process receives the same SIGINT and exits on its own; we only
//! record the interrupt so scope guards (manifest restore, build lock) run
//! before the process ends.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set once Ctrl-C was pressed
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// Install the process-wide handler. Installing twice keeps the first
    /// handler and returns a flag that is never set.
    pub fn install() -> Self {
        let flag = Self::default();
        let handler_flag = flag.0.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            handler_flag.store(true, Ordering::SeqCst);
        }) {
            tracing::debug!(error = %e, "interrupt handler not installed");
        }
        flag
    }

    /// The underlying flag, for code that polls it directly
    pub fn shared(&self) -> Arc<AtomicBool> {
        self.0.clone()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}
