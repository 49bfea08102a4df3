//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{BuildUseCase, CleanupUseCase, DeployUseCase, OutputsUseCase};
use crate::config::Settings;
use crate::domain::ports::{
    BuildEvent, CleanupEvent, Confirmer, DeployEvent, EventSink, OutputMode,
};
use crate::infrastructure::{AwsCli, SamCli, SystemCommandRunner, WhichToolLocator};

/// SAM CLI over the local process runner
pub type ConcreteSam = SamCli<SystemCommandRunner>;

/// AWS CLI over the local process runner
pub type ConcreteAws = AwsCli<SystemCommandRunner>;

pub type ConcreteBuildUseCase<S> = BuildUseCase<ConcreteSam, S>;

pub type ConcreteDeployUseCase<S> = DeployUseCase<ConcreteSam, ConcreteAws, WhichToolLocator, S>;

pub type ConcreteCleanupUseCase<C, S> = CleanupUseCase<ConcreteAws, C, S>;

pub type ConcreteOutputsUseCase = OutputsUseCase<ConcreteAws>;

/// In JSON mode child output is captured silently so stdout carries only
/// the final document.
fn create_sam(json: bool) -> ConcreteSam {
    let output = if json {
        OutputMode::Capture
    } else {
        OutputMode::Tee
    };
    SamCli::new(SystemCommandRunner::new()).with_output(output)
}

/// Cloud provider bound to the resolved region and profile
pub fn create_cloud_provider(settings: &Settings) -> ConcreteAws {
    AwsCli::new(SystemCommandRunner::new(), settings.region.as_str())
        .with_profile(settings.profile.clone())
}

pub fn create_build_use_case<S>(json: bool, events: S) -> ConcreteBuildUseCase<S>
where
    S: EventSink<BuildEvent>,
{
    BuildUseCase::new(create_sam(json), events)
}

pub fn create_deploy_use_case<S>(settings: &Settings, json: bool, events: S) -> ConcreteDeployUseCase<S>
where
    S: EventSink<DeployEvent> + EventSink<BuildEvent>,
{
    DeployUseCase::new(
        create_sam(json),
        create_cloud_provider(settings),
        WhichToolLocator::new(),
        events,
    )
}

pub fn create_cleanup_use_case<C, S>(
    settings: &Settings,
    confirmer: C,
    events: S,
) -> ConcreteCleanupUseCase<C, S>
where
    C: Confirmer,
    S: EventSink<CleanupEvent>,
{
    CleanupUseCase::new(create_cloud_provider(settings), confirmer, events)
}

pub fn create_outputs_use_case(settings: &Settings) -> ConcreteOutputsUseCase {
    OutputsUseCase::new(create_cloud_provider(settings))
}
