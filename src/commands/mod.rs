use std::path::Path;

use stackpilot::infrastructure::{BuildLock, InterruptFlag};
use stackpilot::{StackpilotError, StackpilotResult};

pub mod build;
pub mod cleanup;
pub mod deploy;
pub mod outputs;

/// Run `work` while holding the build directory lock. A Ctrl-C recorded in
/// `interrupt` turns the outcome into `Aborted` once the child has exited and
/// the manifests are restored.
pub(crate) fn guarded<T, F>(
    operation: &str,
    lock_path: &Path,
    interrupt: &InterruptFlag,
    work: F,
) -> StackpilotResult<T>
where
    F: FnOnce() -> StackpilotResult<T>,
{
    let _lock = BuildLock::acquire(lock_path)?;

    let result = work();
    if interrupt.is_set() {
        return Err(StackpilotError::Aborted {
            operation: operation.to_string(),
        });
    }
    result
}
