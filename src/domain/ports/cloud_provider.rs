//! CloudProvider port - listing, inspecting and deleting cloud resources
//!
//! Implementations are bound to one region (and profile) at construction.
//! Listing returns every resource of a category; name filtering is done by
//! the caller so the adapter stays convention-free.

use crate::domain::entities::{ResourceDescriptor, StackOutputs};
use crate::domain::value_objects::{ResourceCategory, StackStatus};

/// Result type for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Provider call errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The addressed resource does not exist
    NotFound(String),
    /// The call failed (permissions, throttling, network, bad output)
    Failed(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::NotFound(what) => write!(f, "not found: {}", what),
            ProviderError::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Cloud account operations used by deploy, cleanup and outputs
pub trait CloudProvider {
    /// Region every call is scoped to
    fn region(&self) -> &str;

    /// Every resource of `category` visible in the region
    fn list(&self, category: ResourceCategory) -> ProviderResult<Vec<ResourceDescriptor>>;

    /// Current status, `None` when the stack does not exist
    fn stack_status(&self, stack: &str) -> ProviderResult<Option<StackStatus>>;

    fn stack_outputs(&self, stack: &str) -> ProviderResult<StackOutputs>;

    /// Request stack deletion (returns before deletion completes)
    fn delete_stack(&self, stack: &str) -> ProviderResult<()>;

    /// Remove current objects from a bucket
    fn empty_bucket(&self, bucket: &str) -> ProviderResult<()>;

    /// Remove every object version; returns how many were removed
    fn delete_object_versions(&self, bucket: &str) -> ProviderResult<usize>;

    /// Remove every delete marker; returns how many were removed
    fn delete_delete_markers(&self, bucket: &str) -> ProviderResult<usize>;

    fn delete_bucket(&self, bucket: &str) -> ProviderResult<()>;

    /// Delete a registry including its images
    fn delete_registry(&self, registry: &str) -> ProviderResult<()>;

    fn delete_log_group(&self, group: &str) -> ProviderResult<()>;

    fn delete_function(&self, function: &str) -> ProviderResult<()>;
}

impl<T: CloudProvider + ?Sized> CloudProvider for &T {
    fn region(&self) -> &str {
        (**self).region()
    }

    fn list(&self, category: ResourceCategory) -> ProviderResult<Vec<ResourceDescriptor>> {
        (**self).list(category)
    }

    fn stack_status(&self, stack: &str) -> ProviderResult<Option<StackStatus>> {
        (**self).stack_status(stack)
    }

    fn stack_outputs(&self, stack: &str) -> ProviderResult<StackOutputs> {
        (**self).stack_outputs(stack)
    }

    fn delete_stack(&self, stack: &str) -> ProviderResult<()> {
        (**self).delete_stack(stack)
    }

    fn empty_bucket(&self, bucket: &str) -> ProviderResult<()> {
        (**self).empty_bucket(bucket)
    }

    fn delete_object_versions(&self, bucket: &str) -> ProviderResult<usize> {
        (**self).delete_object_versions(bucket)
    }

    fn delete_delete_markers(&self, bucket: &str) -> ProviderResult<usize> {
        (**self).delete_delete_markers(bucket)
    }

    fn delete_bucket(&self, bucket: &str) -> ProviderResult<()> {
        (**self).delete_bucket(bucket)
    }

    fn delete_registry(&self, registry: &str) -> ProviderResult<()> {
        (**self).delete_registry(registry)
    }

    fn delete_log_group(&self, group: &str) -> ProviderResult<()> {
        (**self).delete_log_group(group)
    }

    fn delete_function(&self, function: &str) -> ProviderResult<()> {
        (**self).delete_function(function)
    }
}
