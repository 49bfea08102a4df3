//! Cleanup command handler

use anyhow::Result;

use stackpilot::application::preflight::{self, require_tools};
use stackpilot::application::{CleanupOptions, CleanupReport};
use stackpilot::domain::ports::{AutoConfirmer, Confirmer};
use stackpilot::infrastructure::{DialoguerConfirmer, WhichToolLocator};
use stackpilot::presentation::factory;
use stackpilot::{Settings, StackpilotError, StackpilotResult};

use crate::ui::context::UiContext;
use crate::ui::sinks::FlowSink;
use crate::ui::theme::StackpilotTheme;
use crate::ui::views::cleanup::{render_cleanup_header, render_cleanup_report, render_inventory};

/// How prompts are answered for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromptMode {
    /// `--yes`
    Auto,
    /// `--dry-run`: the flow stops before the first prompt
    NoPrompts,
    Terminal,
}

pub(crate) fn prompt_mode(yes: bool, dry_run: bool, ui: &UiContext) -> StackpilotResult<PromptMode> {
    if dry_run {
        return Ok(PromptMode::NoPrompts);
    }
    if yes {
        return Ok(PromptMode::Auto);
    }
    if ui.interactive() {
        return Ok(PromptMode::Terminal);
    }
    let operation = if ui.json { "cleanup --json" } else { "cleanup" };
    Err(StackpilotError::NonInteractive {
        operation: operation.to_string(),
    })
}

pub fn cmd_cleanup(settings: &Settings, yes: bool, dry_run: bool, ui: &UiContext) -> Result<()> {
    let mode = prompt_mode(yes, dry_run, ui)?;
    require_tools(&WhichToolLocator::new(), &[preflight::aws_cli()])?;

    if !ui.json {
        eprint!(
            "{}",
            render_cleanup_header(&settings.region, dry_run, ui.color, ui.unicode)
        );
    }

    let options = CleanupOptions::from_config(&settings.config).with_dry_run(dry_run);
    let report = match mode {
        PromptMode::Auto | PromptMode::NoPrompts => run(settings, &options, AutoConfirmer, ui)?,
        PromptMode::Terminal => {
            let confirmer =
                DialoguerConfirmer::new(Box::new(StackpilotTheme::new(ui.color, ui.unicode)));
            run(settings, &options, confirmer, ui)?
        }
    };

    if ui.json {
        crate::ui::json::emit(&report)?;
        return Ok(());
    }

    if dry_run && !report.initial.is_empty() {
        print!("{}", render_inventory(&report.initial, ui.color));
    }
    print!("{}", render_cleanup_report(&report, ui.color, ui.unicode));
    Ok(())
}

fn run<C: Confirmer>(
    settings: &Settings,
    options: &CleanupOptions,
    confirmer: C,
    ui: &UiContext,
) -> StackpilotResult<CleanupReport> {
    factory::create_cleanup_use_case(settings, confirmer, FlowSink::for_context(ui)).execute(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;
    use stackpilot::config::ColorMode;

    fn ui(json: bool, stdin_is_tty: bool) -> UiContext {
        let caps = TerminalCapabilities {
            stdin_is_tty,
            supports_color: false,
            supports_unicode: false,
            is_ci: false,
        };
        UiContext::from_caps(json, ColorMode::Never, false, caps)
    }

    #[test]
    fn no_terminal_without_flags_fails_fast() {
        let err = prompt_mode(false, false, &ui(false, false)).unwrap_err();
        assert!(matches!(err, StackpilotError::NonInteractive { operation } if operation == "cleanup"));
    }

    #[test]
    fn json_needs_yes_or_dry_run() {
        let err = prompt_mode(false, false, &ui(true, true)).unwrap_err();
        assert!(matches!(err, StackpilotError::NonInteractive { operation } if operation == "cleanup --json"));
        assert_eq!(prompt_mode(true, false, &ui(true, true)).unwrap(), PromptMode::Auto);
    }

    #[test]
    fn dry_run_never_prompts() {
        assert_eq!(prompt_mode(false, true, &ui(false, false)).unwrap(), PromptMode::NoPrompts);
    }

    #[test]
    fn terminal_prompts_by_default() {
        assert_eq!(prompt_mode(false, false, &ui(false, true)).unwrap(), PromptMode::Terminal);
    }
}
