//! Bounded polling of a stack deletion
//!
//! Shared by the deploy recovery path and the cleanup of stacks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::WaitConfig;
use crate::domain::ports::{CloudProvider, ProviderError};
use crate::domain::value_objects::StackStatus;
use crate::error::{StackpilotError, StackpilotResult};

/// Slice of a poll interval between two stop checks
const STOP_CHECK: Duration = Duration::from_millis(200);

/// Shared switch that ends a wait early, typically raised from a Ctrl-C
/// handler
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe an existing flag
    pub fn shared(flag: Arc<AtomicBool>) -> Self {
        Self(flag)
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Two signals are equal when they share the same flag.
impl PartialEq for StopSignal {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for StopSignal {}

/// How often and how long to poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitPolicy {
    pub poll_interval: Duration,
    pub max_polls: u32,
    /// Reported in `StackWaitTimeout`
    pub timeout_secs: u64,
    pub stop: StopSignal,
}

impl WaitPolicy {
    pub fn from_config(config: &WaitConfig) -> Self {
        let interval = config.poll_interval_secs.max(1);
        let polls = (config.timeout_secs / interval).max(1);
        Self {
            poll_interval: Duration::from_secs(interval),
            max_polls: u32::try_from(polls).unwrap_or(u32::MAX),
            timeout_secs: config.timeout_secs,
            stop: StopSignal::new(),
        }
    }

    pub fn with_stop(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// No sleeping between polls
    pub fn immediate(max_polls: u32) -> Self {
        Self {
            poll_interval: Duration::ZERO,
            max_polls,
            timeout_secs: 0,
            stop: StopSignal::new(),
        }
    }

    /// Sleep one poll interval in short slices; `false` when stopped.
    fn pause(&self) -> bool {
        let mut left = self.poll_interval;
        while !left.is_zero() {
            if self.stop.is_raised() {
                return false;
            }
            let step = left.min(STOP_CHECK);
            std::thread::sleep(step);
            left -= step;
        }
        !self.stop.is_raised()
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::from_config(&WaitConfig::default())
    }
}

/// Poll until `stack` is gone.
///
/// `DELETE_FAILED` ends the wait with `StackDeleteFailed`, except on the very
/// first poll of a stack that was already `DELETE_FAILED` before the retry
/// (the provider may not have picked up the new request yet).
/// `on_poll` sees every intermediate status. A raised stop signal ends the
/// wait with `Aborted`; the deletion itself keeps running in the cloud.
pub fn wait_for_stack_deletion<P, F>(
    provider: &P,
    stack: &str,
    previous: Option<&StackStatus>,
    policy: &WaitPolicy,
    mut on_poll: F,
) -> StackpilotResult<()>
where
    P: CloudProvider,
    F: FnMut(&StackStatus),
{
    let retrying_failed = previous.is_some_and(StackStatus::is_delete_failed);

    let stopped = || StackpilotError::Aborted {
        operation: format!("wait for deletion of stack '{}'", stack),
    };

    for attempt in 0..policy.max_polls {
        if policy.stop.is_raised() {
            return Err(stopped());
        }
        match provider.stack_status(stack) {
            Ok(None) | Err(ProviderError::NotFound(_)) => return Ok(()),
            Ok(Some(status)) if status.is_delete_complete() => return Ok(()),
            Ok(Some(status)) if status.is_delete_failed() && !(retrying_failed && attempt == 0) => {
                return Err(StackpilotError::StackDeleteFailed {
                    stack: stack.to_string(),
                    status: status.to_string(),
                });
            }
            Ok(Some(status)) => {
                tracing::debug!(stack, status = %status, attempt, "waiting for stack deletion");
                on_poll(&status);
            }
            Err(ProviderError::Failed(message)) => {
                tracing::warn!(stack, %message, "stack status query failed, retrying");
            }
        }

        if !policy.pause() {
            return Err(stopped());
        }
    }

    Err(StackpilotError::StackWaitTimeout {
        stack: stack.to_string(),
        seconds: policy.timeout_secs,
    })
}
