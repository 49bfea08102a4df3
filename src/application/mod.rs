//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Clean, build layers, verify, build functions with stubbed manifests
//! - `DeployUseCase` - Preflight, optional build, validate, recover, deploy, outputs
//! - `CleanupUseCase` - Scan, confirm and delete leftover cloud resources
//! - `OutputsUseCase` - Read a deployed stack's outputs

pub mod build;
pub mod cleanup;
pub mod deploy;
pub mod outputs;
pub mod preflight;
pub mod stack_wait;

#[cfg(test)]
pub(crate) mod fakes;

pub use build::{BuildOptions, BuildResult, BuildUseCase};
pub use cleanup::{CleanupOptions, CleanupOutcome, CleanupReport, CleanupUseCase};
pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use outputs::{describe_outputs_command, OutputsUseCase};
pub use stack_wait::{wait_for_stack_deletion, StopSignal, WaitPolicy};
