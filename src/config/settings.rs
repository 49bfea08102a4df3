//! Resolved run settings
//!
//! Environment variables are read exactly once, into an [`EnvSnapshot`], and
//! folded with the loaded [`Config`] and CLI overrides into an immutable
//! [`Settings`]. Use cases only ever see `Settings` (or values derived from
//! it); they never read the process environment themselves.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::entities::{bucket_name, DeploymentParameters};

use super::env_validator::EnvVarValidator;
use super::types::{ColorMode, Config};

/// Primary credential variable, named in `MissingCredential`
pub const CREDENTIAL_VAR: &str = "OPENAI_KEY";
const CREDENTIAL_FALLBACK_VAR: &str = "OPENAI_API_KEY";
const REGION_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];
const OWNER_VARS: &[&str] = &["STACK_OWNER", "USER"];
const DEFAULT_OWNER: &str = "dev";
const PROFILE_VAR: &str = "AWS_PROFILE";
const STACK_NAME_VAR: &str = "STACKPILOT_STACK_NAME";
const MODEL_VAR: &str = "STACKPILOT_MODEL";
const COLOR_VAR: &str = "STACKPILOT_COLOR";
/// Tracing filter directive, read by the logging setup
pub const LOG_VAR: &str = "STACKPILOT_LOG";

const COLOR_VALUES: &[&str] = &["auto", "always", "never"];

/// Frozen copy of the environment variables this tool understands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture from the process environment
    pub fn capture() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capture through an arbitrary lookup (tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys = [CREDENTIAL_VAR, CREDENTIAL_FALLBACK_VAR, PROFILE_VAR]
            .into_iter()
            .chain(REGION_VARS.iter().copied())
            .chain(OWNER_VARS.iter().copied())
            .chain([STACK_NAME_VAR, MODEL_VAR, COLOR_VAR, LOG_VAR]);

        let vars = keys
            .filter_map(|key| lookup(key).map(|value| (key.to_string(), value)))
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `key`, ignoring unset and blank values
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// First non-blank value among `keys`
    fn first(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }
}

/// Values passed on the command line; they win over everything else
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub stack_name: Option<String>,
    pub region: Option<String>,
    pub color: Option<ColorMode>,
}

/// Immutable settings for one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: Config,
    pub stack_name: String,
    pub region: String,
    pub owner: String,
    pub model: String,
    pub profile: Option<String>,
    pub color: ColorMode,
    credential: String,
    warnings: Vec<String>,
}

impl Settings {
    /// Fold config, environment and CLI flags, in increasing priority.
    pub fn resolve(config: Config, env: &EnvSnapshot, overrides: &CliOverrides) -> Self {
        let mut warnings = Vec::new();

        let env_color = env.get(COLOR_VAR).and_then(|value| {
            EnvVarValidator::new(COLOR_VAR, COLOR_VALUES)
                .parse(value, ColorMode::parse)
                .map_err(|warning| warnings.push(warning))
                .ok()
        });

        let stack_name = overrides
            .stack_name
            .clone()
            .or_else(|| env.get(STACK_NAME_VAR).map(str::to_string))
            .unwrap_or_else(|| config.deploy.stack_name.clone());
        let region = overrides
            .region
            .clone()
            .or_else(|| env.first(REGION_VARS).map(str::to_string))
            .unwrap_or_else(|| config.deploy.region.clone());
        let model = env
            .get(MODEL_VAR)
            .map(str::to_string)
            .unwrap_or_else(|| config.deploy.model.clone());
        let owner = env.first(OWNER_VARS).unwrap_or(DEFAULT_OWNER).to_string();
        let credential = env
            .first(&[CREDENTIAL_VAR, CREDENTIAL_FALLBACK_VAR])
            .unwrap_or_default()
            .to_string();
        let color = overrides
            .color
            .or(env_color)
            .unwrap_or(config.output.color);

        Self {
            stack_name,
            region,
            owner,
            model,
            profile: env.get(PROFILE_VAR).map(str::to_string),
            color,
            credential,
            warnings,
            config,
        }
    }

    /// Non-fatal problems found while resolving (invalid enum values)
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Build the deploy parameters, stamping the bucket name with `at`.
    pub fn deployment_parameters(&self, at: DateTime<Utc>) -> DeploymentParameters {
        DeploymentParameters {
            stack_name: self.stack_name.clone(),
            region: self.region.clone(),
            owner: self.owner.clone(),
            bucket_name: bucket_name(
                &self.config.deploy.bucket_prefix,
                &self.owner,
                &self.region,
                at,
            ),
            credential: self.credential.clone(),
            model: self.model.clone(),
            profile: self.profile.clone(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("stack_name", &self.stack_name)
            .field("region", &self.region)
            .field("owner", &self.owner)
            .field("model", &self.model)
            .field("profile", &self.profile)
            .field("color", &self.color)
            .field("credential_set", &!self.credential.is_empty())
            .finish_non_exhaustive()
    }
}
