//! Deploy Module
//!
//! Orchestrates the deployment of the serverless stack.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use stackpilot::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(sam, aws, locator, events);
//! let result = use_case.execute(&params, &DeployOptions::from_config(&config, root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::{DeployUseCase, NO_CHANGES_MARKER};
