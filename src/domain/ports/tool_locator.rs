//! ToolLocator port - finds external executables before a flow starts

use std::path::PathBuf;

/// An external tool a flow depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredTool {
    /// Executable name looked up on PATH
    pub name: String,
    /// Install hint shown when it is missing
    pub hint: String,
}

impl RequiredTool {
    pub fn new(name: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hint: hint.into(),
        }
    }
}

/// Locates executables
pub trait ToolLocator {
    /// Full path of `tool`, or `None` when it is not installed
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

impl<T: ToolLocator + ?Sized> ToolLocator for &T {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        (**self).locate(tool)
    }
}
