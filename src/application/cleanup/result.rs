//! Cleanup result

use serde::Serialize;

use crate::domain::entities::CloudResourceInventory;
use crate::domain::value_objects::{CleanupPhase, ResourceCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedResource {
    pub category: ResourceCategory,
    pub name: String,
}

/// One failed deletion step; the flow continued past it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupFailure {
    pub category: ResourceCategory,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanupOutcome {
    /// The first scan matched nothing
    NothingFound,
    /// Scan only, nothing deleted
    DryRun,
    /// The verification scan matched nothing
    Clean,
    /// Resources remain after the verification scan
    Partial,
}

/// Everything the cleanup saw and did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub region: String,
    pub initial: CloudResourceInventory,
    /// Verification scan, absent when nothing was deleted
    pub remaining: Option<CloudResourceInventory>,
    pub deleted: Vec<DeletedResource>,
    pub skipped: Vec<ResourceCategory>,
    pub failures: Vec<CleanupFailure>,
    pub phases: Vec<CleanupPhase>,
    pub dry_run: bool,
}

impl CleanupReport {
    pub fn new(region: impl Into<String>, dry_run: bool) -> Self {
        Self {
            region: region.into(),
            initial: CloudResourceInventory::new(),
            remaining: None,
            deleted: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
            phases: Vec::new(),
            dry_run,
        }
    }

    pub fn outcome(&self) -> CleanupOutcome {
        if self.initial.is_empty() {
            return CleanupOutcome::NothingFound;
        }
        match &self.remaining {
            None if self.dry_run => CleanupOutcome::DryRun,
            Some(remaining) if remaining.is_empty() => CleanupOutcome::Clean,
            _ => CleanupOutcome::Partial,
        }
    }

    /// Inventory the final report is based on
    pub fn final_inventory(&self) -> &CloudResourceInventory {
        self.remaining.as_ref().unwrap_or(&self.initial)
    }

    /// Every remaining resource with the command that removes it by hand
    pub fn leftovers(&self) -> Vec<(ResourceCategory, String, String)> {
        let inventory = self.final_inventory();
        ResourceCategory::ALL
            .iter()
            .flat_map(|category| {
                inventory.get(*category).iter().map(move |resource| {
                    (
                        *category,
                        resource.name.clone(),
                        category.manual_delete_command(&resource.name, &self.region),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ResourceDescriptor;

    fn inventory_with(category: ResourceCategory, names: &[&str]) -> CloudResourceInventory {
        let mut inventory = CloudResourceInventory::new();
        inventory.set(
            category,
            names.iter().map(|n| ResourceDescriptor::new(*n)).collect(),
        );
        inventory
    }

    #[test]
    fn outcome_nothing_found() {
        let report = CleanupReport::new("ap-southeast-1", false);
        assert_eq!(report.outcome(), CleanupOutcome::NothingFound);
    }

    #[test]
    fn outcome_partial_lists_manual_commands() {
        let mut report = CleanupReport::new("ap-southeast-1", false);
        report.initial = inventory_with(ResourceCategory::Bucket, &["a", "b"]);
        report.remaining = Some(inventory_with(ResourceCategory::Bucket, &["b"]));

        assert_eq!(report.outcome(), CleanupOutcome::Partial);
        assert_eq!(
            report.leftovers(),
            vec![(
                ResourceCategory::Bucket,
                "b".to_string(),
                "aws s3 rb s3://b --force".to_string()
            )]
        );
    }

    #[test]
    fn outcome_dry_run_uses_initial_scan() {
        let mut report = CleanupReport::new("ap-southeast-1", true);
        report.initial = inventory_with(ResourceCategory::Registry, &["repo"]);

        assert_eq!(report.outcome(), CleanupOutcome::DryRun);
        assert_eq!(report.leftovers().len(), 1);
    }
}
