//! Build result

use serde::Serialize;

use crate::domain::entities::BuildArtifact;

/// Result of a successful build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildResult {
    /// Layers in build order, then the functions
    pub artifacts: Vec<BuildArtifact>,
    /// Manifests stubbed (and restored) around the function build
    pub manifests_swapped: usize,
}

impl BuildResult {
    pub fn built_count(&self) -> usize {
        self.artifacts.iter().filter(|a| a.is_success()).count()
    }
}
