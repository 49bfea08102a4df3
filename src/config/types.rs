//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{NameFilters, ResourceCategory};
use crate::error::StackpilotResult;

use super::loader::{self, ConfigWarning};

/// A dependency layer built before the functions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Logical id of the layer in the template
    pub name: String,

    /// Directory inside the layer's build output that must be non-empty
    #[serde(default = "default_layer_subdir")]
    pub output_subdir: String,
}

impl LayerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_subdir: default_layer_subdir(),
        }
    }
}

fn default_layer_subdir() -> String {
    "python".to_string()
}

/// Build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    #[serde(default = "default_true")]
    pub use_container: bool,

    #[serde(default = "default_layers")]
    pub layers: Vec<LayerConfig>,

    /// Function dependency manifests replaced by empty stubs while the
    /// functions build (their dependencies ship in the layers)
    #[serde(default = "default_manifests")]
    pub manifests: Vec<PathBuf>,

    /// Extra environment for the build tool, on top of the telemetry and
    /// BuildKit switches
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            build_dir: default_build_dir(),
            use_container: true,
            layers: default_layers(),
            manifests: default_manifests(),
            env: BTreeMap::new(),
        }
    }
}

fn default_template() -> PathBuf {
    PathBuf::from("template.yaml")
}

fn default_build_dir() -> PathBuf {
    PathBuf::from(".aws-sam/build")
}

fn default_layers() -> Vec<LayerConfig> {
    vec![LayerConfig::new("SharedDepsLayer")]
}

fn default_manifests() -> Vec<PathBuf> {
    vec![
        PathBuf::from("api-gateway/requirements.txt"),
        PathBuf::from("intent-requirements-service/requirements.txt"),
        PathBuf::from("shared-services/requirements.txt"),
    ]
}

fn default_true() -> bool {
    true
}

/// Names of the stack parameters the deploy passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterNames {
    #[serde(default = "default_bucket_param")]
    pub bucket: String,
    #[serde(default = "default_credential_param")]
    pub credential: String,
    #[serde(default = "default_model_param")]
    pub model: String,
    #[serde(default = "default_owner_param")]
    pub owner: String,
}

impl Default for ParameterNames {
    fn default() -> Self {
        Self {
            bucket: default_bucket_param(),
            credential: default_credential_param(),
            model: default_model_param(),
            owner: default_owner_param(),
        }
    }
}

fn default_bucket_param() -> String {
    "BucketName".to_string()
}

fn default_credential_param() -> String {
    "OpenAIApiKey".to_string()
}

fn default_model_param() -> String {
    "OpenAIModelName".to_string()
}

fn default_owner_param() -> String {
    "StackOwner".to_string()
}

/// Deploy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_stack_name")]
    pub stack_name: String,

    /// First segment of the generated bucket name
    #[serde(default = "default_stack_name")]
    pub bucket_prefix: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Stack output holding the endpoint URL
    #[serde(default = "default_endpoint_output")]
    pub endpoint_output: String,

    #[serde(default = "default_capabilities")]
    pub capabilities: Vec<String>,

    #[serde(default)]
    pub parameters: ParameterNames,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            stack_name: default_stack_name(),
            bucket_prefix: default_stack_name(),
            region: default_region(),
            model: default_model(),
            endpoint_output: default_endpoint_output(),
            capabilities: default_capabilities(),
            parameters: ParameterNames::default(),
        }
    }
}

fn default_stack_name() -> String {
    "travel-planner".to_string()
}

fn default_region() -> String {
    "ap-southeast-1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_endpoint_output() -> String {
    "ApiUrl".to_string()
}

fn default_capabilities() -> Vec<String> {
    vec![
        "CAPABILITY_IAM".to_string(),
        "CAPABILITY_NAMED_IAM".to_string(),
        "CAPABILITY_AUTO_EXPAND".to_string(),
    ]
}

/// Name-substring filters per resource category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_project_filter")]
    pub stacks: Vec<String>,
    #[serde(default = "default_project_filter")]
    pub buckets: Vec<String>,
    #[serde(default = "default_function_filter")]
    pub functions: Vec<String>,
    #[serde(default = "default_project_filter")]
    pub apis: Vec<String>,
    #[serde(default = "default_project_filter")]
    pub registries: Vec<String>,
    #[serde(default = "default_log_group_filter")]
    pub log_groups: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            stacks: default_project_filter(),
            buckets: default_project_filter(),
            functions: default_function_filter(),
            apis: default_project_filter(),
            registries: default_project_filter(),
            log_groups: default_log_group_filter(),
        }
    }
}

impl FilterConfig {
    pub fn to_name_filters(&self) -> NameFilters {
        NameFilters::new()
            .with(ResourceCategory::Stack, self.stacks.clone())
            .with(ResourceCategory::Bucket, self.buckets.clone())
            .with(ResourceCategory::Function, self.functions.clone())
            .with(ResourceCategory::Api, self.apis.clone())
            .with(ResourceCategory::Registry, self.registries.clone())
            .with(ResourceCategory::LogGroup, self.log_groups.clone())
    }
}

fn default_project_filter() -> Vec<String> {
    vec!["travel-planner".to_string()]
}

fn default_function_filter() -> Vec<String> {
    vec![
        "travel-planner".to_string(),
        "ApiGatewayFn".to_string(),
        "IntentServiceFn".to_string(),
        "SharedServicesFn".to_string(),
    ]
}

fn default_log_group_filter() -> Vec<String> {
    vec![
        "/aws/lambda/travel-planner".to_string(),
        "/aws/apigateway/travel-planner".to_string(),
    ]
}

/// Cleanup configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupConfig {
    #[serde(default)]
    pub filters: FilterConfig,
}

/// Bounded wait on long-running stack operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_wait_timeout")]
    pub timeout_secs: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            timeout_secs: default_wait_timeout(),
        }
    }
}

fn default_poll_interval() -> u64 {
    10
}

fn default_wait_timeout() -> u64 {
    1800
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub cleanup: CleanupConfig,

    #[serde(default)]
    pub wait: WaitConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StackpilotResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> StackpilotResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
