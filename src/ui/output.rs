use stackpilot::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

/// Unknown config keys and ignored environment values, on stderr
pub fn print_warnings(ui: &UiContext, config_warnings: &[ConfigWarning], settings_warnings: &[String]) {
    if let Some(rendered) = render_warnings(config_warnings, settings_warnings, ui.color, ui.unicode) {
        if ui.json {
            for line in config_warnings
                .iter()
                .map(ToString::to_string)
                .chain(settings_warnings.iter().cloned())
            {
                tracing::warn!("{}", line);
            }
        } else {
            eprint!("{}", rendered);
        }
    }
}

fn render_warnings(
    config_warnings: &[ConfigWarning],
    settings_warnings: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let mut block = WarningBlock::new("Configuration warnings");
    for warning in config_warnings {
        block.add_line(warning.to_string());
    }
    for warning in settings_warnings {
        block.add_line(warning.as_str());
    }

    if block.is_empty() {
        None
    } else {
        Some(block.render(supports_color, supports_unicode))
    }
}
