//! SAM CLI adapter
//!
//! Translates build and deploy requests into `sam` invocations.

use crate::domain::ports::{
    BuildRequest, CommandError, CommandOutput, CommandRunner, CommandSpec, DeployRequest,
    OutputMode, ServerlessTool,
};

pub const SAM_PROGRAM: &str = "sam";

/// `sam` driven through a [`CommandRunner`]
pub struct SamCli<R: CommandRunner> {
    runner: R,
    output: OutputMode,
}

impl<R: CommandRunner> SamCli<R> {
    /// Output is echoed and captured so failures can be summarized.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            output: OutputMode::Tee,
        }
    }

    /// Capture silently (JSON mode).
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn build_spec(&self, request: &BuildRequest) -> CommandSpec {
        let mut spec = CommandSpec::new(SAM_PROGRAM).arg("build");
        if let Some(resource) = &request.resource {
            spec = spec.arg(resource.as_str());
        }
        spec = spec
            .arg("--template")
            .arg(request.template.display().to_string())
            .arg("--build-dir")
            .arg(request.build_dir.display().to_string());
        if request.use_container {
            spec = spec.arg("--use-container");
        }
        if request.parallel {
            spec = spec.arg("--parallel");
        }
        if request.cached {
            spec = spec.arg("--cached");
        }
        for (key, value) in &request.env {
            spec = spec.env(key.as_str(), value.as_str());
        }
        spec.output(self.output)
    }

    pub fn deploy_spec(&self, request: &DeployRequest) -> CommandSpec {
        let mut spec = CommandSpec::new(SAM_PROGRAM)
            .args(["deploy", "--stack-name", request.stack_name.as_str()])
            .args(["--region", request.region.as_str()])
            .arg("--template-file")
            .arg(request.template.display().to_string());
        if let Some(profile) = &request.profile {
            spec = spec.args(["--profile", profile.as_str()]);
        }
        if !request.capabilities.is_empty() {
            spec = spec
                .arg("--capabilities")
                .args(request.capabilities.iter().map(String::as_str));
        }
        spec = spec.args([
            "--resolve-s3",
            "--no-confirm-changeset",
            "--no-fail-on-empty-changeset",
        ]);
        if !request.parameters.is_empty() {
            spec = spec.arg("--parameter-overrides").args(
                request
                    .parameters
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value)),
            );
        }
        for secret in &request.secrets {
            spec = spec.secret(secret.as_str());
        }
        spec.env("SAM_CLI_TELEMETRY", "0").output(self.output)
    }
}

impl<R: CommandRunner> ServerlessTool for SamCli<R> {
    fn build(&self, request: &BuildRequest) -> Result<CommandOutput, CommandError> {
        self.runner.run(&self.build_spec(request))
    }

    fn deploy(&self, request: &DeployRequest) -> Result<CommandOutput, CommandError> {
        self.runner.run(&self.deploy_spec(request))
    }
}
