//! Event sink that forwards flow events to `tracing`
//!
//! Used in JSON mode, where the terminal views stay silent and only the final
//! document is printed.

use crate::domain::ports::{BuildEvent, CleanupEvent, DeployEvent, EventSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink<BuildEvent> for TracingEventSink {
    fn on_event(&self, event: BuildEvent) {
        tracing::info!(flow = "build", ?event);
    }
}

impl EventSink<DeployEvent> for TracingEventSink {
    fn on_event(&self, event: DeployEvent) {
        tracing::info!(flow = "deploy", ?event);
    }
}

impl EventSink<CleanupEvent> for TracingEventSink {
    fn on_event(&self, event: CleanupEvent) {
        tracing::info!(flow = "cleanup", ?event);
    }
}
