//! Command header printed to stderr before a flow starts
//!
//! ```text
//! [DEPLOY] Stackpilot Deploy
//!   Stack   travel-planner
//!   Region  ap-southeast-1
//! ```

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, strong, Tone};

/// Title line plus the targets the command resolved (stack, region, paths)
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    command: &'static str,
    note: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl CommandHeader {
    /// `command` is the capitalized subcommand, e.g. `"Deploy"`.
    pub fn new(icon: Icon, command: &'static str) -> Self {
        Self {
            icon,
            command,
            note: None,
            fields: Vec::new(),
        }
    }

    /// Parenthesized suffix on the title, e.g. `Dry Run`
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    /// Adds the field only when a value is present.
    pub fn field_opt(self, label: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.field(label, value),
            None => self,
        }
    }

    pub fn title(&self) -> String {
        match &self.note {
            Some(note) => format!("Stackpilot {} ({})", self.command, note),
            None => format!("Stackpilot {}", self.command),
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            strong(&self.title(), Tone::Info, supports_color)
        );
        let width = self
            .fields
            .iter()
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);
        for (label, value) in &self.fields {
            let padded = format!("{:<width$}", label, width = width);
            out.push_str(&format!(
                "  {}  {}\n",
                paint(&padded, Tone::Dim, supports_color),
                value
            ));
        }
        out
    }
}
