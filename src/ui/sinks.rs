//! Progress lines for the build, deploy and cleanup flows, written to stderr
//! so stdout carries only results.

use std::io::Write;

use stackpilot::domain::ports::{BuildEvent, CleanupEvent, DeployEvent, EventSink};
use stackpilot::domain::value_objects::CleanupPhase;
use stackpilot::infrastructure::TracingEventSink;

use crate::ui::blocks::step::{StepLine, StepStatus};
use crate::ui::context::UiContext;

pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    fn write(&self, step: StepLine) {
        let mut err = std::io::stderr().lock();
        let _ = err.write_all(step.render(self.color, self.unicode).as_bytes());
    }
}

pub(crate) fn build_step(event: &BuildEvent) -> StepLine {
    match event {
        BuildEvent::Cleaned { path } => {
            StepLine::new(StepStatus::Done, format!("Removed {}", path.display()))
        }
        BuildEvent::LayerStarted { layer } => {
            StepLine::new(StepStatus::Running, format!("Building layer {}", layer))
        }
        BuildEvent::LayerBuilt { layer } => {
            StepLine::new(StepStatus::Done, format!("Built layer {}", layer))
        }
        BuildEvent::LayerVerified { layer } => {
            StepLine::new(StepStatus::Done, format!("Layer {} has build output", layer))
        }
        BuildEvent::ManifestsSwapped { count } => StepLine::new(
            StepStatus::Done,
            format!("Stubbed {} dependency manifest(s)", count),
        ),
        BuildEvent::FunctionsStarted => StepLine::new(StepStatus::Running, "Building functions"),
        BuildEvent::FunctionsBuilt => StepLine::new(StepStatus::Done, "Built functions"),
        BuildEvent::ManifestsRestored { count } => StepLine::new(
            StepStatus::Done,
            format!("Restored {} dependency manifest(s)", count),
        ),
    }
}

pub(crate) fn deploy_step(event: &DeployEvent) -> StepLine {
    match event {
        DeployEvent::BuildSkipped => StepLine::new(StepStatus::Skipped, "Build skipped"),
        DeployEvent::TemplateValidated { path } => StepLine::new(
            StepStatus::Done,
            format!("No reserved environment keys in {}", path.display()),
        ),
        DeployEvent::StackRecovering { stack, status } => {
            StepLine::new(StepStatus::Running, format!("Deleting stack {}", stack))
                .with_note(format!("status {} cannot be updated", status))
        }
        DeployEvent::StackRecovered { stack } => {
            StepLine::new(StepStatus::Done, format!("Deleted stack {}", stack))
        }
        DeployEvent::StackUpdating { stack, status } => StepLine::new(
            StepStatus::Done,
            format!("Updating stack {} ({})", stack, status),
        ),
        DeployEvent::Started { stack, bucket } => {
            StepLine::new(StepStatus::Running, format!("Deploying {}", stack))
                .with_note(format!("bucket {}", bucket))
        }
        DeployEvent::Completed {
            stack,
            empty_changeset,
        } => {
            let step = StepLine::new(StepStatus::Done, format!("Deployed {}", stack));
            if *empty_changeset {
                step.with_note("no changes to deploy")
            } else {
                step
            }
        }
        DeployEvent::OutputsFetched { count } => {
            StepLine::new(StepStatus::Done, format!("Fetched {} stack output(s)", count))
        }
    }
}

/// `None` for transitions that have nothing to show
pub(crate) fn cleanup_step(event: &CleanupEvent) -> Option<StepLine> {
    let step = match event {
        CleanupEvent::PhaseChanged { phase } => match phase {
            CleanupPhase::Scanning => StepLine::new(StepStatus::Running, "Scanning resources"),
            CleanupPhase::Deleting(category) => {
                StepLine::new(StepStatus::Running, format!("Deleting {}", category.plural()))
            }
            CleanupPhase::Verifying => StepLine::new(StepStatus::Running, "Verifying cleanup"),
            _ => return None,
        },
        CleanupEvent::CategoryScanned {
            category,
            count,
            names,
        } => {
            let step = StepLine::new(StepStatus::Done, format!("{} {}", count, category.plural()));
            if names.is_empty() {
                step
            } else {
                step.with_note(names.join(", "))
            }
        }
        CleanupEvent::CategorySkipped { category } => {
            StepLine::new(StepStatus::Skipped, format!("Skipped {}", category.plural()))
        }
        CleanupEvent::StackWaiting { stack, status } => {
            StepLine::new(StepStatus::Running, format!("Waiting for {}", stack))
                .with_note(status.as_str())
        }
        CleanupEvent::ResourceDeleted { category, name } => {
            StepLine::new(StepStatus::Done, format!("Deleted {} {}", category.label(), name))
        }
        CleanupEvent::ResourceFailed {
            category,
            name,
            message,
        } => StepLine::new(
            StepStatus::Failed,
            format!("Failed to delete {} {}", category.label(), name),
        )
        .with_note(message.as_str()),
    };
    Some(step)
}

impl EventSink<BuildEvent> for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.write(build_step(&event));
    }
}

impl EventSink<DeployEvent> for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write(deploy_step(&event));
    }
}

impl EventSink<CleanupEvent> for ConsoleEventSink {
    fn on_event(&self, event: CleanupEvent) {
        if let Some(step) = cleanup_step(&event) {
            self.write(step);
        }
    }
}

/// Terminal progress lines, or `tracing` events in JSON mode
pub enum FlowSink {
    Console(ConsoleEventSink),
    Tracing(TracingEventSink),
}

impl FlowSink {
    pub fn for_context(ui: &UiContext) -> Self {
        if ui.json {
            FlowSink::Tracing(TracingEventSink)
        } else {
            FlowSink::Console(ConsoleEventSink::new(ui.color, ui.unicode))
        }
    }
}

impl<E> EventSink<E> for FlowSink
where
    ConsoleEventSink: EventSink<E>,
    TracingEventSink: EventSink<E>,
{
    fn on_event(&self, event: E) {
        match self {
            FlowSink::Console(sink) => sink.on_event(event),
            FlowSink::Tracing(sink) => sink.on_event(event),
        }
    }
}
