//! Error types for Stackpilot
//!
//! Uses `thiserror` for library errors. Every variant is either fatal (aborts
//! its flow with a non-zero exit) or non-fatal (accumulated and shown in the
//! final summary); see [`StackpilotError::is_fatal`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stackpilot operations
pub type StackpilotResult<T> = Result<T, StackpilotError>;

/// Main error type for Stackpilot operations
#[derive(Error, Debug)]
pub enum StackpilotError {
    /// Required external executable is not on PATH
    #[error("required tool '{tool}' was not found on PATH")]
    ToolMissing { tool: String, hint: String },

    /// Deploy credential is unset or empty
    #[error("credential is not set (export {variable})")]
    MissingCredential { variable: String },

    /// A layer build produced no output
    #[error("layer '{layer}' produced no build output in {path}")]
    ArtifactMissing { layer: String, path: PathBuf },

    /// External build command exited non-zero
    #[error("build of '{resource}' failed: {message}")]
    BuildFailed { resource: String, message: String },

    /// Template uses an environment key reserved by the runtime
    #[error("reserved environment key '{key}' set in {location}")]
    ReservedKeyConflict { key: String, location: String },

    /// Template could not be read or parsed
    #[error("could not parse template {path}: {message}")]
    TemplateParse { path: PathBuf, message: String },

    /// Remote deploy was rejected
    #[error("deploy of stack '{stack}' failed: {message}")]
    DeployFailed { stack: String, message: String },

    /// Stack deletion ended in DELETE_FAILED
    #[error("stack '{stack}' could not be deleted (status {status})")]
    StackDeleteFailed { stack: String, status: String },

    /// Bounded wait on a stack operation expired
    #[error("timed out after {seconds}s waiting for stack '{stack}'")]
    StackWaitTimeout { stack: String, seconds: u64 },

    /// Stack does not exist
    #[error("stack '{stack}' does not exist in {region}")]
    StackNotFound { stack: String, region: String },

    /// Deleting one resource failed (non-fatal)
    #[error("failed to delete {category} '{name}': {message}")]
    ResourceDeletionFailed {
        category: String,
        name: String,
        message: String,
    },

    /// Listing one resource category failed (non-fatal, counted as zero)
    #[error("scan of {category} failed: {message}")]
    ScanQueryFailed { category: String, message: String },

    /// External command could not be spawned or exited non-zero
    #[error("command '{program}' failed: {message}")]
    CommandFailed { program: String, message: String },

    /// External command printed output that could not be decoded
    #[error("unexpected output from '{program}': {message}")]
    UnexpectedOutput { program: String, message: String },

    /// Invalid configuration file or value
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Another run holds the project lock
    #[error("another stackpilot run holds {path}")]
    Locked { path: PathBuf },

    /// Interactive prompt required but no terminal is attached
    #[error("{operation} needs an interactive terminal")]
    NonInteractive { operation: String },

    /// Flow was aborted by the user at a confirmation prompt
    #[error("{operation} aborted by user")]
    Aborted { operation: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StackpilotError {
    /// Whether this error aborts the flow it occurred in
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            StackpilotError::ResourceDeletionFailed { .. } | StackpilotError::ScanQueryFailed { .. }
        )
    }

    /// Actionable next step shown under the error message
    pub fn fix_hint(&self) -> Option<String> {
        match self {
            StackpilotError::ToolMissing { hint, .. } => Some(hint.clone()),
            StackpilotError::MissingCredential { variable } => {
                Some(format!("export {}=<your key> and re-run", variable))
            }
            StackpilotError::ArtifactMissing { layer, .. } => Some(format!(
                "Check the layer's requirements file, then run `sam build {} --use-container` to inspect the failure",
                layer
            )),
            StackpilotError::BuildFailed { resource, .. } => Some(format!(
                "Re-run `sam build {} --use-container --debug` to see the full log",
                resource
            )),
            StackpilotError::ReservedKeyConflict { key, .. } => Some(format!(
                "Remove '{}' from the function environment; the runtime sets it automatically",
                key
            )),
            StackpilotError::DeployFailed { stack, .. } => Some(format!(
                "aws cloudformation describe-stack-events --stack-name {}",
                stack
            )),
            StackpilotError::StackDeleteFailed { stack, .. } => Some(format!(
                "aws cloudformation delete-stack --stack-name {} --retain-resources <ids>",
                stack
            )),
            StackpilotError::StackWaitTimeout { stack, .. } => Some(format!(
                "aws cloudformation describe-stacks --stack-name {} --query 'Stacks[0].StackStatus'",
                stack
            )),
            StackpilotError::Locked { path } => Some(format!(
                "Wait for the other run to finish or remove {}",
                path.display()
            )),
            StackpilotError::NonInteractive { .. } => {
                Some("Pass --yes to confirm every prompt, or --dry-run to only scan".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_artifact_missing() {
        let err = StackpilotError::ArtifactMissing {
            layer: "CommonLayer".to_string(),
            path: PathBuf::from(".aws-sam/build/CommonLayer/python"),
        };
        assert_eq!(
            err.to_string(),
            "layer 'CommonLayer' produced no build output in .aws-sam/build/CommonLayer/python"
        );
    }

    #[test]
    fn test_error_display_missing_credential() {
        let err = StackpilotError::MissingCredential {
            variable: "OPENAI_KEY".to_string(),
        };
        assert_eq!(err.to_string(), "credential is not set (export OPENAI_KEY)");
    }

    #[test]
    fn deletion_and_scan_failures_are_not_fatal() {
        let deletion = StackpilotError::ResourceDeletionFailed {
            category: "bucket".to_string(),
            name: "b".to_string(),
            message: "denied".to_string(),
        };
        let scan = StackpilotError::ScanQueryFailed {
            category: "stack".to_string(),
            message: "throttled".to_string(),
        };
        assert!(!deletion.is_fatal());
        assert!(!scan.is_fatal());
        assert!(StackpilotError::Aborted {
            operation: "cleanup".to_string()
        }
        .is_fatal());
    }

    #[test]
    fn deploy_failure_points_at_stack_events() {
        let err = StackpilotError::DeployFailed {
            stack: "travel-planner".to_string(),
            message: "ROLLBACK".to_string(),
        };
        assert_eq!(
            err.fix_hint().unwrap(),
            "aws cloudformation describe-stack-events --stack-name travel-planner"
        );
    }
}
