//! Build Use Case
//!
//! Orchestrates the containerized build of the serverless application.
//!
//! This module handles:
//! - Removing prior build output
//! - Building each dependency layer and verifying its output
//! - Building the functions with their dependency manifests swapped out

mod manifest_swap;
mod options;
mod result;
mod use_case;

pub use manifest_swap::{ManifestSwap, BACKUP_SUFFIX};
pub use options::BuildOptions;
pub use result::BuildResult;
pub use use_case::{BuildUseCase, FUNCTIONS_RESOURCE};
