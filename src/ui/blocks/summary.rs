use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, strong, Tone};
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Final box of a command: outcome title, counts, notes, warnings and a
/// next step
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::with_outcome(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_outcome(title, false)
    }

    fn with_outcome(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Informational line shown with the success icon
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, tone) = if self.success {
            (PanelStyle::Success, Icon::Success, Tone::Success)
        } else {
            (PanelStyle::Warning, Icon::Warning, Tone::Warning)
        };
        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            strong(&self.title, tone, supports_color)
        );

        let mut panel = Panel::titled(header, style);
        if !self.stats.is_empty() {
            panel.blank();
            for (label, count) in &self.stats {
                panel.row(format!("{} {}", count, label));
            }
        }

        if !self.infos.is_empty() {
            panel.blank();
            for info in &self.infos {
                panel.row(format!(
                    "{} {}",
                    Icon::Success.colored(supports_color, supports_unicode),
                    info
                ));
            }
        }

        if !self.warnings.is_empty() {
            panel.blank();
            for warning in &self.warnings {
                panel.row(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            panel.blank();
            panel.row(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                paint("Next:", Tone::Dim, supports_color),
                next_step
            ));
        }

        panel.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_success_icon_in_title() {
        let mut summary = ResultSummary::success("Build Complete");
        summary.add_stat("layers built", 1);

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[OK] Build Complete"));
        assert!(rendered.contains("1 layers built"));
    }

    #[test]
    fn partial_summary_lists_warnings_and_next_step() {
        let mut summary = ResultSummary::partial("Cleanup Incomplete");
        summary.add_warning("bucket b: AccessDenied");
        summary.with_next_step("aws s3 rb s3://b --force");

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[WARN] Cleanup Incomplete"));
        assert!(rendered.contains("[WARN] bucket b: AccessDenied"));
        assert!(rendered.contains("[>] Next: aws s3 rb s3://b --force"));
    }
}
