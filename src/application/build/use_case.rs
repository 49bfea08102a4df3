//! Build Use Case
//!
//! Layers first, verified, then the functions against stubbed manifests.

use std::fs;
use std::path::Path;

use crate::domain::entities::BuildArtifact;
use crate::domain::ports::{BuildEvent, BuildRequest, EventSink, ServerlessTool};
use crate::error::{StackpilotError, StackpilotResult};

use super::manifest_swap::ManifestSwap;
use super::options::BuildOptions;
use super::result::BuildResult;

/// Artifact name of the function build
pub const FUNCTIONS_RESOURCE: &str = "functions";

pub struct BuildUseCase<T, S>
where
    T: ServerlessTool,
    S: EventSink<BuildEvent>,
{
    tool: T,
    events: S,
}

impl<T, S> BuildUseCase<T, S>
where
    T: ServerlessTool,
    S: EventSink<BuildEvent>,
{
    pub fn new(tool: T, events: S) -> Self {
        Self { tool, events }
    }

    pub fn execute(&self, options: &BuildOptions) -> StackpilotResult<BuildResult> {
        self.clean(&options.build_dir)?;

        let mut artifacts = Vec::with_capacity(options.layers.len() + 1);
        for layer in &options.layers {
            let mut artifact = BuildArtifact::pending(&layer.name);
            self.events.on_event(BuildEvent::LayerStarted {
                layer: layer.name.clone(),
            });

            let output = self.tool.build(&request(options, Some(&layer.name), false))?;
            if !output.is_success() {
                artifact.mark_failed();
                return Err(StackpilotError::BuildFailed {
                    resource: layer.name.clone(),
                    message: output.summary(),
                });
            }
            artifact.mark_success();
            artifacts.push(artifact);
            self.events.on_event(BuildEvent::LayerBuilt {
                layer: layer.name.clone(),
            });
        }

        // All layers must be verified before any manifest is touched.
        for layer in &options.layers {
            let path = options.layer_output(layer);
            if !is_non_empty_dir(&path) {
                return Err(StackpilotError::ArtifactMissing {
                    layer: layer.name.clone(),
                    path,
                });
            }
            self.events.on_event(BuildEvent::LayerVerified {
                layer: layer.name.clone(),
            });
        }

        let mut functions = BuildArtifact::pending(FUNCTIONS_RESOURCE);
        let guard = ManifestSwap::swap(&options.manifests)?;
        let swapped = guard.len();
        self.events
            .on_event(BuildEvent::ManifestsSwapped { count: swapped });

        self.events.on_event(BuildEvent::FunctionsStarted);
        let output = self.tool.build(&request(options, None, true));
        let restored = guard.restore();
        let output = output?;
        restored?;
        self.events
            .on_event(BuildEvent::ManifestsRestored { count: swapped });

        if !output.is_success() {
            functions.mark_failed();
            return Err(StackpilotError::BuildFailed {
                resource: FUNCTIONS_RESOURCE.to_string(),
                message: output.summary(),
            });
        }
        functions.mark_success();
        artifacts.push(functions);
        self.events.on_event(BuildEvent::FunctionsBuilt);

        Ok(BuildResult {
            artifacts,
            manifests_swapped: swapped,
        })
    }

    fn clean(&self, build_dir: &Path) -> StackpilotResult<()> {
        match fs::remove_dir_all(build_dir) {
            Ok(()) => tracing::debug!(path = %build_dir.display(), "removed prior build output"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        self.events.on_event(BuildEvent::Cleaned {
            path: build_dir.to_path_buf(),
        });
        Ok(())
    }
}

fn request(options: &BuildOptions, resource: Option<&str>, cached: bool) -> BuildRequest {
    BuildRequest {
        resource: resource.map(str::to_string),
        template: options.template.clone(),
        build_dir: options.build_dir.clone(),
        use_container: options.use_container,
        parallel: options.parallel,
        cached,
        env: options.env.clone(),
    }
}

fn is_non_empty_dir(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
