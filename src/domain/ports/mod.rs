//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cloud_provider;
pub mod command_runner;
pub mod confirmer;
pub mod events;
pub mod serverless_tool;
pub mod tool_locator;

pub use cloud_provider::{CloudProvider, ProviderError, ProviderResult};
pub use command_runner::{CommandError, CommandOutput, CommandRunner, CommandSpec, OutputMode};
pub use confirmer::{AutoConfirmer, Confirmer};
pub use events::{BuildEvent, CleanupEvent, DeployEvent, EventSink, NoopEventSink};
pub use serverless_tool::{BuildRequest, DeployRequest, ServerlessTool};
pub use tool_locator::{RequiredTool, ToolLocator};
