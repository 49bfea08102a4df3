use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use stackpilot::config::{ColorMode, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, settings: &Settings) -> Self {
        Self::from_caps(
            json,
            settings.color,
            settings.config.output.unicode,
            detect_capabilities(),
        )
    }

    /// Before settings are resolved (config load errors)
    pub fn early(json: bool, color: Option<ColorMode>) -> Self {
        Self::from_caps(
            json,
            color.unwrap_or_default(),
            true,
            detect_capabilities(),
        )
    }

    pub(crate) fn from_caps(
        json: bool,
        color: ColorMode,
        unicode: bool,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            caps,
            color: color && !json,
            unicode: unicode && caps.supports_unicode,
        }
    }

    /// Whether confirmation prompts can be shown
    pub fn interactive(&self) -> bool {
        self.caps.stdin_is_tty && !self.json
    }
}
