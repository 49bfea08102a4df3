//! Cleanup Use Case
//!
//! A state machine over [`CleanupPhase`]:
//!
//! ```text
//! Scanning -> Summarizing -> Confirming(c) -> Deleting(c) -> ... -> Verifying -> Done
//!                  |               |  (no: skip c)
//!                  +-> Done (nothing found, dry run)
//!                  +-> Aborted (global no)
//! ```
//!
//! Categories are visited in [`ResourceCategory::DELETION_ORDER`]; APIs are
//! only reported since they go away with their stack.

use std::collections::BTreeMap;

use crate::application::stack_wait::wait_for_stack_deletion;
use crate::domain::entities::{CloudResourceInventory, ResourceDescriptor};
use crate::domain::ports::{CleanupEvent, CloudProvider, Confirmer, EventSink, ProviderResult};
use crate::domain::value_objects::{CleanupPhase, NameFilters, ResourceCategory, StackStatus};
use crate::error::{StackpilotError, StackpilotResult};

use super::options::CleanupOptions;
use super::result::{CleanupFailure, CleanupReport, DeletedResource};

pub struct CleanupUseCase<P, C, S>
where
    P: CloudProvider,
    C: Confirmer,
    S: EventSink<CleanupEvent>,
{
    provider: P,
    confirmer: C,
    events: S,
}

impl<P, C, S> CleanupUseCase<P, C, S>
where
    P: CloudProvider,
    C: Confirmer,
    S: EventSink<CleanupEvent>,
{
    pub fn new(provider: P, confirmer: C, events: S) -> Self {
        Self {
            provider,
            confirmer,
            events,
        }
    }

    /// Scan every category once, without side effects
    pub fn scan(&self, filters: &NameFilters) -> CloudResourceInventory {
        let mut inventory = CloudResourceInventory::new();
        for category in ResourceCategory::ALL {
            match self.list_matching(category, filters) {
                Ok(resources) => {
                    self.events.on_event(CleanupEvent::CategoryScanned {
                        category,
                        count: resources.len(),
                        names: resources.iter().map(|r| r.name.clone()).collect(),
                    });
                    inventory.set(category, resources);
                }
                Err(e) => {
                    let failure = StackpilotError::ScanQueryFailed {
                        category: category.to_string(),
                        message: e.to_string(),
                    };
                    tracing::warn!(error = %failure, "scan query failed, counting as empty");
                    inventory.set(category, Vec::new());
                    inventory.add_warning(category, e.to_string());
                }
            }
        }
        inventory
    }

    /// Run the flow. An operator "no" at the global prompt is `Aborted`.
    pub fn execute(&self, options: &CleanupOptions) -> StackpilotResult<CleanupReport> {
        let mut report = CleanupReport::new(self.provider.region(), options.dry_run);
        let mut pending: BTreeMap<ResourceCategory, Vec<ResourceDescriptor>> = BTreeMap::new();
        let mut phase = CleanupPhase::Scanning;

        loop {
            report.phases.push(phase);
            self.events.on_event(CleanupEvent::PhaseChanged { phase });

            phase = match phase {
                CleanupPhase::Scanning => {
                    report.initial = self.scan(&options.filters);
                    for category in ResourceCategory::DELETION_ORDER {
                        pending.insert(category, report.initial.get(category).to_vec());
                    }
                    CleanupPhase::Summarizing
                }
                CleanupPhase::Summarizing => {
                    let total = report.initial.total();
                    if total == 0 || options.dry_run {
                        CleanupPhase::Done
                    } else if !self.confirmer.confirm(&format!(
                        "Delete {} {} in {}?",
                        total,
                        if total == 1 { "resource" } else { "resources" },
                        report.region
                    ))? {
                        CleanupPhase::Aborted
                    } else {
                        next_phase(None, &pending)
                    }
                }
                CleanupPhase::Confirming(category) => {
                    if category == ResourceCategory::Function {
                        // Most functions go away with their stack.
                        let still_present = self
                            .list_matching(category, &options.filters)
                            .unwrap_or_else(|e| {
                                tracing::warn!(error = %e, "function re-scan failed");
                                pending.get(&category).cloned().unwrap_or_default()
                            });
                        pending.insert(category, orphans(still_present, &report));
                    }

                    let count = pending.get(&category).map_or(0, Vec::len);
                    if count == 0 {
                        next_phase(Some(category), &pending)
                    } else if self.confirmer.confirm(&category_prompt(category, count))? {
                        CleanupPhase::Deleting(category)
                    } else {
                        report.skipped.push(category);
                        self.events
                            .on_event(CleanupEvent::CategorySkipped { category });
                        next_phase(Some(category), &pending)
                    }
                }
                CleanupPhase::Deleting(category) => {
                    let resources = pending.remove(&category).unwrap_or_default();
                    for resource in &resources {
                        self.delete(category, resource, options, &mut report);
                    }
                    next_phase(Some(category), &pending)
                }
                CleanupPhase::Verifying => {
                    report.remaining = Some(self.scan(&options.filters));
                    CleanupPhase::Done
                }
                CleanupPhase::Done => return Ok(report),
                CleanupPhase::Aborted => {
                    return Err(StackpilotError::Aborted {
                        operation: "cleanup".to_string(),
                    })
                }
            };
        }
    }

    fn list_matching(
        &self,
        category: ResourceCategory,
        filters: &NameFilters,
    ) -> ProviderResult<Vec<ResourceDescriptor>> {
        Ok(self
            .provider
            .list(category)?
            .into_iter()
            .filter(|r| filters.matches(category, &r.name))
            .collect())
    }

    fn delete(
        &self,
        category: ResourceCategory,
        resource: &ResourceDescriptor,
        options: &CleanupOptions,
        report: &mut CleanupReport,
    ) {
        let name = resource.name.as_str();
        let outcome = match category {
            ResourceCategory::Stack => {
                let scanned = resource.detail.as_deref().map(StackStatus::new);
                self.delete_stack(name, scanned.as_ref(), options)
            }
            ResourceCategory::Bucket => self.delete_bucket(name, report),
            ResourceCategory::Registry => self.provider.delete_registry(name).map_err(|e| e.to_string()),
            ResourceCategory::LogGroup => self.provider.delete_log_group(name).map_err(|e| e.to_string()),
            ResourceCategory::Function => self.provider.delete_function(name).map_err(|e| e.to_string()),
            ResourceCategory::Api => Ok(()),
        };

        match outcome {
            Ok(()) => {
                tracing::info!(%category, name, "deleted");
                self.events.on_event(CleanupEvent::ResourceDeleted {
                    category,
                    name: name.to_string(),
                });
                report.deleted.push(DeletedResource {
                    category,
                    name: name.to_string(),
                });
            }
            Err(message) => self.record_failure(category, name, message, report),
        }
    }

    /// `scanned` is the status seen during the scan, so a stale
    /// `DELETE_FAILED` right after a retried deletion is not taken as final.
    fn delete_stack(
        &self,
        name: &str,
        scanned: Option<&StackStatus>,
        options: &CleanupOptions,
    ) -> Result<(), String> {
        self.provider.delete_stack(name).map_err(|e| e.to_string())?;
        wait_for_stack_deletion(&self.provider, name, scanned, &options.wait, |status| {
            self.events.on_event(CleanupEvent::StackWaiting {
                stack: name.to_string(),
                status: status.to_string(),
            })
        })
        .map_err(|e| e.to_string())
    }

    /// Each step runs even when an earlier one failed; only the final
    /// bucket removal decides success.
    fn delete_bucket(&self, name: &str, report: &mut CleanupReport) -> Result<(), String> {
        let category = ResourceCategory::Bucket;

        if let Err(e) = self.provider.empty_bucket(name) {
            self.record_failure(category, name, format!("emptying objects: {}", e), report);
        }
        match self.provider.delete_object_versions(name) {
            Ok(count) => tracing::debug!(bucket = name, count, "deleted object versions"),
            Err(e) => self.record_failure(category, name, format!("deleting versions: {}", e), report),
        }
        match self.provider.delete_delete_markers(name) {
            Ok(count) => tracing::debug!(bucket = name, count, "deleted delete markers"),
            Err(e) => {
                self.record_failure(category, name, format!("deleting delete markers: {}", e), report)
            }
        }
        self.provider.delete_bucket(name).map_err(|e| e.to_string())
    }

    fn record_failure(
        &self,
        category: ResourceCategory,
        name: &str,
        message: String,
        report: &mut CleanupReport,
    ) {
        let failure = StackpilotError::ResourceDeletionFailed {
            category: category.to_string(),
            name: name.to_string(),
            message: message.clone(),
        };
        tracing::warn!(error = %failure, "deletion step failed, continuing");
        self.events.on_event(CleanupEvent::ResourceFailed {
            category,
            name: name.to_string(),
            message: message.clone(),
        });
        report.failures.push(CleanupFailure {
            category,
            name: name.to_string(),
            message,
        });
    }
}

/// Functions not owned by a stack that is still there (declined or failed
/// to delete). Stack-managed functions are named `<stack>-<LogicalId>-<suffix>`.
fn orphans(functions: Vec<ResourceDescriptor>, report: &CleanupReport) -> Vec<ResourceDescriptor> {
    let live_stacks: Vec<String> = report
        .initial
        .get(ResourceCategory::Stack)
        .iter()
        .filter(|stack| {
            !report
                .deleted
                .iter()
                .any(|d| d.category == ResourceCategory::Stack && d.name == stack.name)
        })
        .map(|stack| format!("{}-", stack.name))
        .collect();

    functions
        .into_iter()
        .filter(|f| {
            let owned = live_stacks.iter().any(|prefix| f.name.starts_with(prefix.as_str()));
            if owned {
                tracing::debug!(function = %f.name, "owned by a remaining stack, not orphaned");
            }
            !owned
        })
        .collect()
}

fn category_prompt(category: ResourceCategory, count: usize) -> String {
    let noun = if count == 1 {
        category.label()
    } else {
        category.plural()
    };
    match category {
        ResourceCategory::Function => format!("Delete {} orphaned {}?", count, noun),
        _ => format!("Delete {} {}?", count, noun),
    }
}

/// Next category after `after` that still has something pending, or
/// `Verifying`. Functions are always visited when any were scanned, since
/// their count is only known after the re-scan.
fn next_phase(
    after: Option<ResourceCategory>,
    pending: &BTreeMap<ResourceCategory, Vec<ResourceDescriptor>>,
) -> CleanupPhase {
    let start = after
        .and_then(|a| ResourceCategory::DELETION_ORDER.iter().position(|c| *c == a))
        .map_or(0, |i| i + 1);

    ResourceCategory::DELETION_ORDER[start..]
        .iter()
        .find(|c| pending.get(*c).is_some_and(|r| !r.is_empty()))
        .map_or(CleanupPhase::Verifying, |c| CleanupPhase::Confirming(*c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_use_singular_and_plural() {
        assert_eq!(category_prompt(ResourceCategory::Bucket, 1), "Delete 1 bucket?");
        assert_eq!(category_prompt(ResourceCategory::LogGroup, 3), "Delete 3 log groups?");
        assert_eq!(
            category_prompt(ResourceCategory::Function, 2),
            "Delete 2 orphaned functions?"
        );
    }

    #[test]
    fn next_phase_skips_empty_categories() {
        let mut pending = BTreeMap::new();
        pending.insert(ResourceCategory::Stack, vec![]);
        pending.insert(ResourceCategory::Registry, vec![ResourceDescriptor::new("r")]);

        assert_eq!(
            next_phase(None, &pending),
            CleanupPhase::Confirming(ResourceCategory::Registry)
        );
        assert_eq!(
            next_phase(Some(ResourceCategory::Registry), &pending),
            CleanupPhase::Verifying
        );
    }
}
