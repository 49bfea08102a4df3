//! Configuration module for Stackpilot
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AWS_*, OPENAI_KEY, STACKPILOT_*)
//! 3. Project config (./stackpilot.toml, or --config)
//! 4. User config (~/.config/stackpilot/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod settings;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{load_layered, user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use settings::{CliOverrides, EnvSnapshot, Settings, CREDENTIAL_VAR, LOG_VAR};
pub use types::{
    BuildConfig, CleanupConfig, ColorMode, Config, DeployConfig, FilterConfig, LayerConfig,
    OutputConfig, ParameterNames, WaitConfig,
};
