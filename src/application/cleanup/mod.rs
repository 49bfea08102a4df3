//! Cleanup Use Case
//!
//! Finds leftover cloud resources of the project and removes them with the
//! operator's consent.
//!
//! This module handles:
//! - Scanning six resource categories through name filters
//! - A global confirmation, then one per category
//! - Deletion in dependency order, tolerating individual failures
//! - A verification scan and the final report

mod options;
mod result;
mod use_case;

pub use options::CleanupOptions;
pub use result::{CleanupFailure, CleanupOutcome, CleanupReport, DeletedResource};
pub use use_case::CleanupUseCase;
