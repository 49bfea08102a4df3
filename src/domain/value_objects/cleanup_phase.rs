//! Cleanup phase - states of the cleanup state machine

use serde::Serialize;

use super::ResourceCategory;

/// `Scanning -> Summarizing -> Confirming/Deleting(category)... -> Verifying -> Done`
///
/// `Aborted` is reached only from `Summarizing` when the global confirmation
/// is declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "category", rename_all = "snake_case")]
pub enum CleanupPhase {
    Scanning,
    Summarizing,
    Confirming(ResourceCategory),
    Deleting(ResourceCategory),
    Verifying,
    Done,
    Aborted,
}

impl CleanupPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CleanupPhase::Done | CleanupPhase::Aborted)
    }
}

impl std::fmt::Display for CleanupPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupPhase::Scanning => write!(f, "scanning"),
            CleanupPhase::Summarizing => write!(f, "summarizing"),
            CleanupPhase::Confirming(c) => write!(f, "confirming {}", c.plural()),
            CleanupPhase::Deleting(c) => write!(f, "deleting {}", c.plural()),
            CleanupPhase::Verifying => write!(f, "verifying"),
            CleanupPhase::Done => write!(f, "done"),
            CleanupPhase::Aborted => write!(f, "aborted"),
        }
    }
}
