//! Resource category value object - the six kinds of cloud resource a
//! cleanup scan looks for.

use serde::{Deserialize, Serialize};

/// Category of a cloud resource matched by the naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    /// CloudFormation stack
    Stack,
    /// S3 bucket
    Bucket,
    /// Lambda function
    Function,
    /// API Gateway REST API
    Api,
    /// ECR repository
    Registry,
    /// CloudWatch log group
    LogGroup,
}

impl ResourceCategory {
    /// All categories in scan order
    pub const ALL: [ResourceCategory; 6] = [
        ResourceCategory::Stack,
        ResourceCategory::Bucket,
        ResourceCategory::Function,
        ResourceCategory::Api,
        ResourceCategory::Registry,
        ResourceCategory::LogGroup,
    ];

    /// Categories in deletion order (leaves last).
    ///
    /// Stacks go first because they own most of the other resources;
    /// functions go last so that only orphans remain to be deleted.
    /// APIs are removed with their stack and never deleted directly.
    pub const DELETION_ORDER: [ResourceCategory; 5] = [
        ResourceCategory::Stack,
        ResourceCategory::Bucket,
        ResourceCategory::Registry,
        ResourceCategory::LogGroup,
        ResourceCategory::Function,
    ];

    /// Singular display name
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Stack => "stack",
            ResourceCategory::Bucket => "bucket",
            ResourceCategory::Function => "function",
            ResourceCategory::Api => "API",
            ResourceCategory::Registry => "registry",
            ResourceCategory::LogGroup => "log group",
        }
    }

    /// Plural display name used in summaries and prompts
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceCategory::Stack => "stacks",
            ResourceCategory::Bucket => "buckets",
            ResourceCategory::Function => "functions",
            ResourceCategory::Api => "APIs",
            ResourceCategory::Registry => "registries",
            ResourceCategory::LogGroup => "log groups",
        }
    }

    /// Manual command an operator can run to remove one leftover resource
    pub fn manual_delete_command(&self, name: &str, region: &str) -> String {
        match self {
            ResourceCategory::Stack => format!(
                "aws cloudformation delete-stack --stack-name {} --region {}",
                name, region
            ),
            ResourceCategory::Bucket => format!("aws s3 rb s3://{} --force", name),
            ResourceCategory::Function => format!(
                "aws lambda delete-function --function-name {} --region {}",
                name, region
            ),
            ResourceCategory::Api => format!(
                "aws apigateway delete-rest-api --rest-api-id <id of {}> --region {}",
                name, region
            ),
            ResourceCategory::Registry => format!(
                "aws ecr delete-repository --repository-name {} --force --region {}",
                name, region
            ),
            ResourceCategory::LogGroup => format!(
                "aws logs delete-log-group --log-group-name {} --region {}",
                name, region
            ),
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
