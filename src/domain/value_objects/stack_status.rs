//! Stack status value object
//!
//! Wraps the status string reported by CloudFormation and classifies it for
//! the deploy safety check and the stack deletion wait.

use serde::{Deserialize, Serialize};

/// Status of a CloudFormation stack (e.g. `UPDATE_COMPLETE`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackStatus(String);

impl StackStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A stack in this state cannot be updated and must be deleted first.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(
            self.0.as_str(),
            "ROLLBACK_COMPLETE" | "ROLLBACK_FAILED" | "CREATE_FAILED" | "DELETE_FAILED"
        )
    }

    /// An operation on the stack is still running
    pub fn is_in_progress(&self) -> bool {
        self.0.ends_with("_IN_PROGRESS")
    }

    pub fn is_delete_complete(&self) -> bool {
        self.0 == "DELETE_COMPLETE"
    }

    pub fn is_delete_failed(&self) -> bool {
        self.0 == "DELETE_FAILED"
    }
}

impl std::fmt::Display for StackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StackStatus {
    fn from(value: &str) -> Self {
        StackStatus::new(value)
    }
}
