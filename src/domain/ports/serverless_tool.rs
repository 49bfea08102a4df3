//! ServerlessTool port - the external build/deploy CLI

use std::path::PathBuf;

use super::command_runner::{CommandError, CommandOutput};

/// One invocation of the containerized build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Logical id to build; `None` builds every resource in the template
    pub resource: Option<String>,
    pub template: PathBuf,
    pub build_dir: PathBuf,
    pub use_container: bool,
    pub parallel: bool,
    /// Reuse previously built resources (set for the function pass)
    pub cached: bool,
    /// Extra environment for the build (telemetry/BuildKit switches)
    pub env: Vec<(String, String)>,
}

/// One invocation of the deploy tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub stack_name: String,
    pub region: String,
    pub profile: Option<String>,
    /// Template to deploy (the built template when a build ran)
    pub template: PathBuf,
    pub capabilities: Vec<String>,
    /// `Key=Value` overrides passed to the stack
    pub parameters: Vec<(String, String)>,
    /// Values that must never appear in logs
    pub secrets: Vec<String>,
}

/// External build/deploy CLI
pub trait ServerlessTool {
    fn build(&self, request: &BuildRequest) -> Result<CommandOutput, CommandError>;

    /// Deploy non-interactively; an empty changeset must not be an error
    fn deploy(&self, request: &DeployRequest) -> Result<CommandOutput, CommandError>;
}

impl<T: ServerlessTool + ?Sized> ServerlessTool for &T {
    fn build(&self, request: &BuildRequest) -> Result<CommandOutput, CommandError> {
        (**self).build(request)
    }

    fn deploy(&self, request: &DeployRequest) -> Result<CommandOutput, CommandError> {
        (**self).deploy(request)
    }
}
