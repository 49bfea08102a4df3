//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use stackpilot::presentation::factory;
//!
//! // Create the cleanup use case with the AWS CLI wired up
//! let use_case = factory::create_cleanup_use_case(&settings, confirmer, events);
//! let report = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{
    create_build_use_case, create_cleanup_use_case, create_cloud_provider,
    create_deploy_use_case, create_outputs_use_case,
};
