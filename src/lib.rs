//! Stackpilot - operational CLI for a serverless stack
//!
//! Orchestrates three flows around the SAM and AWS command line tools:
//! a two-phase containerized build, a guarded deploy, and an interactive
//! cleanup of leftover cloud resources.
//!
//! The crate follows a layered layout:
//! - `domain` - entities, value objects, policies and ports
//! - `application` - use cases coordinating the ports
//! - `infrastructure` - port implementations over external programs
//! - `presentation` - CLI definition and use case wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use config::{Config, Settings};
pub use error::{StackpilotError, StackpilotResult};
