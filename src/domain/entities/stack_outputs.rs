//! Stack outputs entity - key/value results of a deployed stack

use serde::Serialize;

/// One stack output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Outputs of a deployed stack, in the order the provider returned them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StackOutputs {
    outputs: Vec<StackOutput>,
}

impl StackOutputs {
    pub fn new(outputs: Vec<StackOutput>) -> Self {
        Self { outputs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.value.as_str())
    }

    /// Endpoint URL stored under `key`, if present and non-blank
    pub fn endpoint(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StackOutput> {
        self.outputs.iter()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
