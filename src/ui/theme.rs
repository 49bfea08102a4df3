use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use std::fmt;

/// Design tokens for Stackpilot CLI UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";
    pub const QUESTION: &str = "?";

    // Command identifiers (used in headers).
    pub const BUILD: &str = "🔨";
    pub const DEPLOY: &str = "📦";
    pub const CLEANUP: &str = "🧹";
    pub const OUTPUTS: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";
    pub const QUESTION: &str = "[?]";

    pub const BUILD: &str = "[BUILD]";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const CLEANUP: &str = "[CLEANUP]";
    pub const OUTPUTS: &str = "[OUTPUTS]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// StackpilotTheme - dialoguer theme for destructive confirmations
// ----------------------------------------------------------------------------

/// Dialoguer theme for the cleanup prompts.
///
/// Wraps `ColorfulTheme`, or `SimpleTheme` without color. `SimpleTheme` has
/// no prompt marker, so this adds one to confirm prompts in that mode.
pub struct StackpilotTheme {
    color: bool,
    unicode: bool,
    inner: Box<dyn Theme>,
}

impl StackpilotTheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        let inner: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self {
            color,
            unicode,
            inner,
        }
    }

    fn write_marker(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        if self.color {
            return Ok(());
        }
        write!(f, "{} ", self.question_icon())
    }

    pub fn question_icon(&self) -> &'static str {
        if self.unicode {
            icons::QUESTION
        } else {
            icons_ascii::QUESTION
        }
    }
}

impl Theme for StackpilotTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.write_marker(f)?;
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.write_marker(f)?;
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_question_icons() {
        assert_eq!(StackpilotTheme::new(false, true).question_icon(), "?");
        assert_eq!(StackpilotTheme::new(false, false).question_icon(), "[?]");
    }

    #[test]
    fn test_theme_prefixes_confirm_prompt() {
        let theme = StackpilotTheme::new(false, false);
        let mut out = String::new();
        theme
            .format_confirm_prompt(&mut out, "Delete 1 bucket?", Some(false))
            .unwrap();
        assert!(out.starts_with("[?] Delete 1 bucket?"));
    }
}
