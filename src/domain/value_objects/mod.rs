//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cleanup_phase;
mod name_filters;
mod resource_category;
mod stack_status;

pub use cleanup_phase::CleanupPhase;
pub use name_filters::NameFilters;
pub use resource_category::ResourceCategory;
pub use stack_status::StackStatus;
