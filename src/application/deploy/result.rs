//! Deploy result

use serde::Serialize;

use crate::application::build::BuildResult;
use crate::domain::entities::StackOutputs;

/// Result of a deploy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployResult {
    pub stack_name: String,
    pub region: String,
    pub bucket_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildResult>,
    /// A stack in an unrecoverable state was deleted before deploying
    pub recovered_stack: bool,
    /// The deploy tool found nothing to change
    pub empty_changeset: bool,
    pub outputs: StackOutputs,
    /// Value of the endpoint output, when the stack exposes it
    pub endpoint: Option<String>,
    pub warnings: Vec<String>,
}

impl DeployResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
