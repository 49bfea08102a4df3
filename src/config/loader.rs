//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StackpilotError, StackpilotResult};

use super::env_validator::levenshtein;
use super::types::Config;

/// Project configuration file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "stackpilot.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> StackpilotResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(path, &content)
}

fn parse_with_warnings(path: &Path, content: &str) -> StackpilotResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StackpilotError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for this run.
///
/// An explicit `--config` path wins and must exist. Otherwise the project
/// file in `project_root` is used, then the user file, then defaults.
/// A file that exists but does not parse is an error, never silently skipped.
pub fn load_layered(
    project_root: &Path,
    explicit: Option<&Path>,
) -> StackpilotResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(StackpilotError::Config {
                file: path.to_path_buf(),
                message: "file does not exist".to_string(),
            });
        }
        return load_with_warnings(path);
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        return load_with_warnings(&project_config);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            return load_with_warnings(&user_config);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// `~/.config/stackpilot/config.toml` (platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stackpilot").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with(needle)
                && trimmed[needle.len()..].trim_start().starts_with('=')
        })
        .map(|idx| idx + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "build",
    "template",
    "build_dir",
    "use_container",
    "layers",
    "name",
    "output_subdir",
    "manifests",
    "env",
    "deploy",
    "stack_name",
    "bucket_prefix",
    "region",
    "model",
    "endpoint_output",
    "capabilities",
    "parameters",
    "bucket",
    "credential",
    "owner",
    "cleanup",
    "filters",
    "stacks",
    "buckets",
    "functions",
    "apis",
    "registries",
    "log_groups",
    "wait",
    "poll_interval_secs",
    "timeout_secs",
    "output",
    "color",
    "unicode",
];

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|k| (*k, levenshtein(unknown, k)))
        .filter(|(_, d)| *d > 0 && *d <= 2)
        .min_by_key(|(_, d)| *d)
        .map(|(k, _)| k.to_string())
}
