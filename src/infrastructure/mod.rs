//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - `CommandRunner` over `std::process`
//! - `tools` - `ToolLocator` over `which`
//! - `sam` - `ServerlessTool` over the SAM CLI
//! - `aws/` - `CloudProvider` over the AWS CLI
//! - `prompt` - `Confirmer` over `dialoguer`
//! - `lock` - advisory build directory lock
//! - `interrupt` - Ctrl-C flag
//! - `events` - event sink forwarding to `tracing`

pub mod aws;
pub mod events;
pub mod interrupt;
pub mod lock;
pub mod process;
pub mod prompt;
pub mod sam;
pub mod tools;

#[cfg(test)]
pub(crate) mod testing;

// Re-export for convenience
pub use aws::AwsCli;
pub use events::TracingEventSink;
pub use interrupt::InterruptFlag;
pub use lock::BuildLock;
pub use process::SystemCommandRunner;
pub use prompt::DialoguerConfirmer;
pub use sam::SamCli;
pub use tools::WhichToolLocator;
