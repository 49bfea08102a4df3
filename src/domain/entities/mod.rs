//! Domain Entities
//!
//! Descriptors of external resources. None of them is owned persistent
//! state: each lives for one command invocation.

mod build_artifact;
mod deployment;
mod inventory;
mod stack_outputs;

pub use build_artifact::{BuildArtifact, BuildStatus};
pub use deployment::{bucket_name, DeploymentParameters, MAX_BUCKET_NAME_LEN};
pub use inventory::{CloudResourceInventory, ResourceDescriptor, ScanWarning};
pub use stack_outputs::{StackOutput, StackOutputs};
