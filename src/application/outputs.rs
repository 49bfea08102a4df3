//! Outputs Use Case
//!
//! Reads the outputs of a deployed stack.

use crate::domain::entities::StackOutputs;
use crate::domain::ports::{CloudProvider, ProviderError};
use crate::error::{StackpilotError, StackpilotResult};

/// Manual command printing a stack's outputs
pub fn describe_outputs_command(stack: &str, region: &str) -> String {
    format!(
        "aws cloudformation describe-stacks --stack-name {} --region {} --query 'Stacks[0].Outputs'",
        stack, region
    )
}

pub struct OutputsUseCase<P: CloudProvider> {
    provider: P,
}

impl<P: CloudProvider> OutputsUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn execute(&self, stack: &str) -> StackpilotResult<StackOutputs> {
        let not_found = || StackpilotError::StackNotFound {
            stack: stack.to_string(),
            region: self.provider.region().to_string(),
        };

        match self.provider.stack_status(stack) {
            Ok(Some(_)) => {}
            Ok(None) | Err(ProviderError::NotFound(_)) => return Err(not_found()),
            Err(ProviderError::Failed(message)) => {
                return Err(StackpilotError::CommandFailed {
                    program: "aws".to_string(),
                    message,
                })
            }
        }

        self.provider.stack_outputs(stack).map_err(|e| match e {
            ProviderError::NotFound(_) => not_found(),
            ProviderError::Failed(message) => StackpilotError::CommandFailed {
                program: "aws".to_string(),
                message,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::FakeProvider;

    #[test]
    fn missing_stack_is_not_found() {
        let use_case = OutputsUseCase::new(FakeProvider::new());
        let err = use_case.execute("travel-planner").unwrap_err();
        assert!(matches!(
            err,
            StackpilotError::StackNotFound { stack, region }
                if stack == "travel-planner" && region == "ap-southeast-1"
        ));
    }

    #[test]
    fn outputs_are_returned_in_order() {
        let provider = FakeProvider::new()
            .with_stack("travel-planner", "UPDATE_COMPLETE")
            .with_outputs(&[("ApiUrl", "https://x.example/prod"), ("BucketName", "b")]);
        let outputs = OutputsUseCase::new(provider).execute("travel-planner").unwrap();

        let keys: Vec<_> = outputs.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["ApiUrl", "BucketName"]);
        assert_eq!(outputs.endpoint("ApiUrl"), Some("https://x.example/prod"));
    }

    #[test]
    fn describe_command_queries_outputs() {
        assert_eq!(
            describe_outputs_command("app", "us-east-1"),
            "aws cloudformation describe-stacks --stack-name app --region us-east-1 --query 'Stacks[0].Outputs'"
        );
    }
}
