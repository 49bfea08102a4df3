//! AWS adapters
//!
//! - `cli` - `CloudProvider` over the `aws` command line
//! - `responses` - typed JSON payloads

mod cli;
mod responses;

pub use cli::{AwsCli, AWS_PROGRAM, DELETE_BATCH};
