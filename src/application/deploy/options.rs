//! Deploy options

use std::path::{Path, PathBuf};

use crate::application::build::BuildOptions;
use crate::application::stack_wait::WaitPolicy;
use crate::config::{Config, ParameterNames};

/// Options for the deploy flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Build to run first; `None` deploys the existing build output
    pub build: Option<BuildOptions>,
    /// Source template, validated when no built template exists
    pub template: PathBuf,
    pub built_template: PathBuf,
    pub capabilities: Vec<String>,
    pub parameter_names: ParameterNames,
    /// Stack output holding the endpoint URL
    pub endpoint_output: String,
    pub wait: WaitPolicy,
}

impl DeployOptions {
    pub fn from_config(config: &Config, project_root: &Path) -> Self {
        let build = BuildOptions::from_config(&config.build, project_root);
        Self {
            template: build.template.clone(),
            built_template: build.built_template(),
            build: Some(build),
            capabilities: config.deploy.capabilities.clone(),
            parameter_names: config.deploy.parameters.clone(),
            endpoint_output: config.deploy.endpoint_output.clone(),
            wait: WaitPolicy::from_config(&config.wait),
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.build = self.build.map(|b| b.with_parallel(parallel));
        self
    }

    pub fn with_skip_build(mut self, skip: bool) -> Self {
        if skip {
            self.build = None;
        }
        self
    }

    pub fn with_wait(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    /// Built template when present, else the source template
    pub fn template_to_validate(&self) -> &Path {
        if self.built_template.is_file() {
            &self.built_template
        } else {
            &self.template
        }
    }
}
