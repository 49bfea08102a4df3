//! Name filters - substring patterns selecting which cloud resources belong
//! to the project.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ResourceCategory;

/// Per-category substring filters.
///
/// A resource matches its category when its name contains any of the
/// category's patterns. Matching is case-insensitive. A category without
/// patterns matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameFilters {
    patterns: BTreeMap<ResourceCategory, Vec<String>>,
}

impl NameFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the patterns for one category, replacing any previous ones
    pub fn with(mut self, category: ResourceCategory, patterns: Vec<String>) -> Self {
        let cleaned = patterns
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        self.patterns.insert(category, cleaned);
        self
    }

    pub fn patterns(&self, category: ResourceCategory) -> &[String] {
        self.patterns
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn matches(&self, category: ResourceCategory, name: &str) -> bool {
        let name = name.to_lowercase();
        self.patterns(category)
            .iter()
            .any(|p| name.contains(&p.to_lowercase()))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.values().all(|v| v.is_empty())
    }
}
