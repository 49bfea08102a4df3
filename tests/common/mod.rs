//! Common test utilities for Stackpilot CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus stub tools on PATH
//! - Assertion macros: `assert_output_contains!`, `assert_called!`
//! - Fixtures: templates and provider responses

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
