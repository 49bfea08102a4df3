//! PATH lookup for external tools

use std::path::PathBuf;

use crate::domain::ports::ToolLocator;

/// Finds executables on `PATH` with the `which` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct WhichToolLocator;

impl WhichToolLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for WhichToolLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn finds_a_shell() {
        assert!(WhichToolLocator::new().locate("sh").is_some());
    }

    #[test]
    fn unknown_tool_is_none() {
        assert!(WhichToolLocator::new()
            .locate("stackpilot-definitely-not-installed")
            .is_none());
    }
}
