//! Build artifact entity

use serde::Serialize;

/// Status of one built unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Pending,
    Success,
    Failed,
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildStatus::Pending => write!(f, "pending"),
            BuildStatus::Success => write!(f, "success"),
            BuildStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A built layer or the function bundle, tracked until the build is reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildArtifact {
    pub name: String,
    pub status: BuildStatus,
}

impl BuildArtifact {
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: BuildStatus::Pending,
        }
    }

    pub fn mark_success(&mut self) {
        self.status = BuildStatus::Success;
    }

    pub fn mark_failed(&mut self) {
        self.status = BuildStatus::Failed;
    }

    pub fn is_success(&self) -> bool {
        self.status == BuildStatus::Success
    }
}
