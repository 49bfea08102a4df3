use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Running,
    Done,
    Skipped,
    Failed,
}

/// One progress line, optionally followed by an indented note
#[derive(Debug, Clone)]
pub struct StepLine {
    pub status: StepStatus,
    pub message: String,
    pub note: Option<String>,
}

impl StepLine {
    pub fn new(status: StepStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = match self.status {
            StepStatus::Running => Icon::Progress,
            StepStatus::Done => Icon::Success,
            StepStatus::Skipped => Icon::Pending,
            StepStatus::Failed => Icon::Error,
        }
        .colored(supports_color, supports_unicode);

        let message = match self.status {
            StepStatus::Skipped => paint(&self.message, Tone::Dim, supports_color),
            _ => self.message.clone(),
        };

        let mut out = format!("  {} {}\n", icon, message);
        if let Some(note) = &self.note {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                note
            ));
        }
        out
    }
}
