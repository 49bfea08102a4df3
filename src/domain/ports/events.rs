//! Progress Event Port
//!
//! Provides an observable interface for the build, deploy and cleanup flows.
//! Enables progress reporting, tracing and test assertions on ordering.

use std::path::PathBuf;

use crate::domain::value_objects::{CleanupPhase, ResourceCategory};

/// Event emitted during the build flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Prior build output removed (or already absent)
    Cleaned { path: PathBuf },
    LayerStarted { layer: String },
    LayerBuilt { layer: String },
    /// Layer output directory exists and is non-empty
    LayerVerified { layer: String },
    /// Dependency manifests replaced by stubs
    ManifestsSwapped { count: usize },
    FunctionsStarted,
    FunctionsBuilt,
    /// Dependency manifests put back
    ManifestsRestored { count: usize },
}

/// Event emitted during the deploy flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    BuildSkipped,
    TemplateValidated { path: PathBuf },
    /// Existing stack is unusable and is being deleted first
    StackRecovering { stack: String, status: String },
    StackRecovered { stack: String },
    /// Existing stack will be updated in place
    StackUpdating { stack: String, status: String },
    Started { stack: String, bucket: String },
    Completed { stack: String, empty_changeset: bool },
    OutputsFetched { count: usize },
}

/// Event emitted during the cleanup flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupEvent {
    PhaseChanged { phase: CleanupPhase },
    CategoryScanned {
        category: ResourceCategory,
        count: usize,
        /// Matched names, in listing order
        names: Vec<String>,
    },
    /// Operator declined this category
    CategorySkipped { category: ResourceCategory },
    /// Waiting on a stack deletion
    StackWaiting { stack: String, status: String },
    ResourceDeleted {
        category: ResourceCategory,
        name: String,
    },
    /// One step of a deletion failed; the flow continues
    ResourceFailed {
        category: ResourceCategory,
        name: String,
        message: String,
    },
}

/// Trait for receiving flow events
///
/// Implementations can be:
/// - ConsoleEventSink: progress lines in the terminal
/// - NoopEventSink: silent operation (JSON mode, tests)
pub trait EventSink<E> {
    fn on_event(&self, event: E);
}

impl<E, T: EventSink<E> + ?Sized> EventSink<E> for &T {
    fn on_event(&self, event: E) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl<E> EventSink<E> for NoopEventSink {
    fn on_event(&self, _event: E) {
        // Do nothing
    }
}
