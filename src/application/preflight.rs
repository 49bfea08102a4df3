//! Prerequisite checks run before any external call

use crate::domain::ports::{RequiredTool, ToolLocator};
use crate::error::{StackpilotError, StackpilotResult};

pub fn sam_cli() -> RequiredTool {
    RequiredTool::new(
        "sam",
        "Install the AWS SAM CLI: https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/install-sam-cli.html",
    )
}

pub fn aws_cli() -> RequiredTool {
    RequiredTool::new(
        "aws",
        "Install the AWS CLI v2: https://docs.aws.amazon.com/cli/latest/userguide/getting-started-install.html",
    )
}

pub fn container_engine() -> RequiredTool {
    RequiredTool::new(
        "docker",
        "Install Docker and make sure the daemon is running (`docker info`)",
    )
}

/// Fail with `ToolMissing` on the first tool not found, in the given order.
pub fn require_tools<L: ToolLocator>(locator: &L, tools: &[RequiredTool]) -> StackpilotResult<()> {
    for tool in tools {
        match locator.locate(&tool.name) {
            Some(path) => tracing::debug!(tool = %tool.name, path = %path.display(), "tool found"),
            None => {
                return Err(StackpilotError::ToolMissing {
                    tool: tool.name.clone(),
                    hint: tool.hint.clone(),
                })
            }
        }
    }
    Ok(())
}
