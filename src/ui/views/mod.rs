pub mod build;
pub mod cleanup;
pub mod deploy;
pub mod outputs;
