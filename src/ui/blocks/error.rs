use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{strong, Tone};
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Fatal error with an optional `FIX:` line
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    details: Vec<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
            fix: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            strong("ERROR", Tone::Error, supports_color)
        );
        let mut panel = Panel::titled(title, PanelStyle::Error);
        panel.blank();
        panel.row(self.message.as_str());

        if !self.details.is_empty() {
            panel.blank();
            for detail in &self.details {
                panel.row(detail.as_str());
            }
        }

        if let Some(fix) = &self.fix {
            panel.blank();
            panel.row(format!("FIX: {}", fix));
        }

        panel.render(supports_color, supports_unicode)
    }
}
