//! Deploy Use Case
//!
//! Credential and tools, optional build, template validation, stack
//! recovery, deploy, outputs. Nothing external runs before the credential
//! and tool checks pass.

use std::fs;

use crate::application::build::BuildUseCase;
use crate::application::outputs::describe_outputs_command;
use crate::application::preflight::{self, require_tools};
use crate::application::stack_wait::wait_for_stack_deletion;
use crate::config::CREDENTIAL_VAR;
use crate::domain::entities::{DeploymentParameters, StackOutputs};
use crate::domain::policies::check_template;
use crate::domain::ports::{
    BuildEvent, CloudProvider, DeployEvent, DeployRequest, EventSink, ServerlessTool, ToolLocator,
};
use crate::error::{StackpilotError, StackpilotResult};

use super::options::DeployOptions;
use super::result::DeployResult;

/// Printed by the deploy tool when the changeset is empty
pub const NO_CHANGES_MARKER: &str = "No changes to deploy";

pub struct DeployUseCase<T, P, L, S>
where
    T: ServerlessTool,
    P: CloudProvider,
    L: ToolLocator,
    S: EventSink<DeployEvent> + EventSink<BuildEvent>,
{
    tool: T,
    provider: P,
    locator: L,
    events: S,
}

impl<T, P, L, S> DeployUseCase<T, P, L, S>
where
    T: ServerlessTool,
    P: CloudProvider,
    L: ToolLocator,
    S: EventSink<DeployEvent> + EventSink<BuildEvent>,
{
    pub fn new(tool: T, provider: P, locator: L, events: S) -> Self {
        Self {
            tool,
            provider,
            locator,
            events,
        }
    }

    pub fn execute(
        &self,
        params: &DeploymentParameters,
        options: &DeployOptions,
    ) -> StackpilotResult<DeployResult> {
        if !params.has_credential() {
            return Err(StackpilotError::MissingCredential {
                variable: CREDENTIAL_VAR.to_string(),
            });
        }

        let mut tools = vec![preflight::sam_cli(), preflight::aws_cli()];
        if options.build.as_ref().is_some_and(|b| b.use_container) {
            tools.push(preflight::container_engine());
        }
        require_tools(&self.locator, &tools)?;

        let mut result = DeployResult {
            stack_name: params.stack_name.clone(),
            region: params.region.clone(),
            bucket_name: params.bucket_name.clone(),
            ..DeployResult::default()
        };

        match &options.build {
            Some(build) => {
                let built = BuildUseCase::new(&self.tool, &self.events).execute(build)?;
                result.build = Some(built);
            }
            None => self.emit(DeployEvent::BuildSkipped),
        }

        let template = options.template_to_validate();
        let content = fs::read_to_string(template).map_err(|e| StackpilotError::TemplateParse {
            path: template.to_path_buf(),
            message: e.to_string(),
        })?;
        check_template(template, &content)?;
        self.emit(DeployEvent::TemplateValidated {
            path: template.to_path_buf(),
        });

        result.recovered_stack = self.prepare_stack(params, options, &mut result.warnings)?;

        let request = DeployRequest {
            stack_name: params.stack_name.clone(),
            region: params.region.clone(),
            profile: params.profile.clone(),
            template: template.to_path_buf(),
            capabilities: options.capabilities.clone(),
            parameters: vec![
                (
                    options.parameter_names.bucket.clone(),
                    params.bucket_name.clone(),
                ),
                (
                    options.parameter_names.credential.clone(),
                    params.credential.clone(),
                ),
                (options.parameter_names.model.clone(), params.model.clone()),
                (options.parameter_names.owner.clone(), params.owner.clone()),
            ],
            secrets: vec![params.credential.clone()],
        };

        self.emit(DeployEvent::Started {
            stack: params.stack_name.clone(),
            bucket: params.bucket_name.clone(),
        });
        let output = self.tool.deploy(&request)?;
        result.empty_changeset = output.mentions(NO_CHANGES_MARKER);
        if !output.is_success() && !result.empty_changeset {
            return Err(StackpilotError::DeployFailed {
                stack: params.stack_name.clone(),
                message: output.summary(),
            });
        }
        self.emit(DeployEvent::Completed {
            stack: params.stack_name.clone(),
            empty_changeset: result.empty_changeset,
        });

        let (outputs, endpoint) = self.fetch_outputs(params, options, &mut result.warnings);
        result.outputs = outputs;
        result.endpoint = endpoint;

        Ok(result)
    }

    /// Delete the stack first when it cannot be updated.
    ///
    /// Returns whether a recovery happened. A failed status query is not
    /// fatal: the deploy itself reports a broken stack.
    fn prepare_stack(
        &self,
        params: &DeploymentParameters,
        options: &DeployOptions,
        warnings: &mut Vec<String>,
    ) -> StackpilotResult<bool> {
        let stack = params.stack_name.as_str();
        let status = match self.provider.stack_status(stack) {
            Ok(Some(status)) => status,
            Ok(None) => return Ok(false),
            Err(e) => {
                tracing::warn!(stack, error = %e, "could not query stack status");
                warnings.push(format!("Could not check the status of stack '{}': {}", stack, e));
                return Ok(false);
            }
        };

        if !status.is_unrecoverable() {
            self.emit(DeployEvent::StackUpdating {
                stack: stack.to_string(),
                status: status.to_string(),
            });
            return Ok(false);
        }

        tracing::info!(stack, status = %status, "deleting stack in unrecoverable state");
        self.emit(DeployEvent::StackRecovering {
            stack: stack.to_string(),
            status: status.to_string(),
        });
        self.provider
            .delete_stack(stack)
            .map_err(|e| StackpilotError::StackDeleteFailed {
                stack: stack.to_string(),
                status: e.to_string(),
            })?;
        wait_for_stack_deletion(&self.provider, stack, Some(&status), &options.wait, |_| {})?;
        self.emit(DeployEvent::StackRecovered {
            stack: stack.to_string(),
        });
        Ok(true)
    }

    fn fetch_outputs(
        &self,
        params: &DeploymentParameters,
        options: &DeployOptions,
        warnings: &mut Vec<String>,
    ) -> (StackOutputs, Option<String>) {
        let manual = describe_outputs_command(&params.stack_name, &params.region);
        match self.provider.stack_outputs(&params.stack_name) {
            Ok(outputs) => {
                self.emit(DeployEvent::OutputsFetched {
                    count: outputs.len(),
                });
                let endpoint = outputs
                    .endpoint(&options.endpoint_output)
                    .map(str::to_string);
                if endpoint.is_none() {
                    warnings.push(format!(
                        "Stack output '{}' not found. Look it up with: {}",
                        options.endpoint_output, manual
                    ));
                }
                (outputs, endpoint)
            }
            Err(e) => {
                tracing::warn!(stack = %params.stack_name, error = %e, "could not read stack outputs");
                warnings.push(format!(
                    "Could not read stack outputs ({}). Look them up with: {}",
                    e, manual
                ));
                (StackOutputs::default(), None)
            }
        }
    }

    fn emit(&self, event: DeployEvent) {
        EventSink::<DeployEvent>::on_event(&self.events, event);
    }
}
