//! Build options

use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, LayerConfig};

/// Options for the build flow, with every path resolved against the
/// project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub template: PathBuf,
    pub build_dir: PathBuf,
    pub layers: Vec<LayerConfig>,
    pub manifests: Vec<PathBuf>,
    pub use_container: bool,
    pub parallel: bool,
    pub env: Vec<(String, String)>,
}

impl BuildOptions {
    pub fn from_config(config: &BuildConfig, project_root: &Path) -> Self {
        let mut env = vec![
            ("SAM_CLI_TELEMETRY".to_string(), "0".to_string()),
            ("DOCKER_BUILDKIT".to_string(), "0".to_string()),
        ];
        env.extend(config.env.iter().map(|(k, v)| (k.clone(), v.clone())));

        Self {
            template: project_root.join(&config.template),
            build_dir: project_root.join(&config.build_dir),
            layers: config.layers.clone(),
            manifests: config
                .manifests
                .iter()
                .map(|m| project_root.join(m))
                .collect(),
            use_container: config.use_container,
            parallel: false,
            env,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Template written by the build, used by the deploy
    pub fn built_template(&self) -> PathBuf {
        self.build_dir.join("template.yaml")
    }

    /// `<build_dir>/<layer>/<subdir>`
    pub fn layer_output(&self, layer: &LayerConfig) -> PathBuf {
        self.build_dir.join(&layer.name).join(&layer.output_subdir)
    }

    /// Advisory lock file guarding the build directory
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self
            .build_dir
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "build".into());
        name.push(".lock");
        self.build_dir.with_file_name(name)
    }
}
