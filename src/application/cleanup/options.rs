//! Cleanup options

use crate::application::stack_wait::WaitPolicy;
use crate::config::Config;
use crate::domain::value_objects::NameFilters;

/// Options for the cleanup flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    pub filters: NameFilters,
    /// Stop after the summary
    pub dry_run: bool,
    pub wait: WaitPolicy,
}

impl CleanupOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            filters: config.cleanup.filters.to_name_filters(),
            dry_run: false,
            wait: WaitPolicy::from_config(&config.wait),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_wait(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }
}
