//! Scripted command runner for adapter tests

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec};

/// Records every spec and answers from rules matched against the command
/// line. A rule's last response repeats; unmatched commands succeed with
/// empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    pub specs: RefCell<Vec<CommandSpec>>,
    rules: RefCell<Vec<(String, VecDeque<CommandOutput>)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, pattern: &str, responses: Vec<CommandOutput>) -> Self {
        self.rules
            .borrow_mut()
            .push((pattern.to_string(), responses.into()));
        self
    }

    pub fn on_json(self, pattern: &str, json: &str) -> Self {
        self.on(pattern, vec![CommandOutput::success(json)])
    }

    pub fn lines(&self) -> Vec<String> {
        self.specs
            .borrow()
            .iter()
            .map(CommandSpec::display_redacted)
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        let line = spec.display_redacted();
        self.specs.borrow_mut().push(spec.clone());

        let mut rules = self.rules.borrow_mut();
        let response = rules
            .iter_mut()
            .find(|(pattern, _)| line.contains(pattern.as_str()))
            .and_then(|(_, responses)| {
                if responses.len() > 1 {
                    responses.pop_front()
                } else {
                    responses.front().cloned()
                }
            });
        Ok(response.unwrap_or_else(|| CommandOutput::success("")))
    }
}
