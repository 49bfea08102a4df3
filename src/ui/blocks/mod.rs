pub mod error;
pub mod header;
pub mod step;
pub mod summary;
pub mod warning;
