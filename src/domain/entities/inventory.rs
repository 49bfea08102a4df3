//! Cloud resource inventory entity
//!
//! The result of one scan: for every category, the matched resources in the
//! order the provider listed them. Rebuilt on every scan, never persisted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::ResourceCategory;

/// A matched cloud resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    pub name: String,
    /// Status or metadata shown next to the name (stack status, creation date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ResourceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A category whose scan query failed and was counted as empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    pub category: ResourceCategory,
    pub message: String,
}

/// Matched resources for every category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloudResourceInventory {
    resources: BTreeMap<ResourceCategory, Vec<ResourceDescriptor>>,
    warnings: Vec<ScanWarning>,
}

impl CloudResourceInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, category: ResourceCategory, resources: Vec<ResourceDescriptor>) {
        self.resources.insert(category, resources);
    }

    pub fn add_warning(&mut self, category: ResourceCategory, message: impl Into<String>) {
        self.warnings.push(ScanWarning {
            category,
            message: message.into(),
        });
    }

    pub fn get(&self, category: ResourceCategory) -> &[ResourceDescriptor] {
        self.resources
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self, category: ResourceCategory) -> usize {
        self.get(category).len()
    }

    pub fn total(&self) -> usize {
        self.resources.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// Per-category counts in scan order
    pub fn counts(&self) -> Vec<(ResourceCategory, usize)> {
        ResourceCategory::ALL
            .iter()
            .map(|c| (*c, self.count(*c)))
            .collect()
    }
}
