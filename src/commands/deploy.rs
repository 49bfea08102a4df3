//! Deploy command handler

use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use stackpilot::application::{DeployOptions, StopSignal, WaitPolicy};
use stackpilot::infrastructure::InterruptFlag;
use stackpilot::presentation::factory;
use stackpilot::Settings;

use super::guarded;
use crate::ui::context::UiContext;
use crate::ui::sinks::FlowSink;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary};

pub fn cmd_deploy(
    settings: &Settings,
    project_root: &Path,
    parallel: bool,
    skip_build: bool,
    ui: &UiContext,
) -> Result<()> {
    let params = settings.deployment_parameters(Utc::now());
    let mut options = DeployOptions::from_config(&settings.config, project_root)
        .with_parallel(parallel)
        .with_skip_build(skip_build);

    // Only a deploy that builds traps Ctrl-C; the stack wait then has to
    // observe it too.
    let interrupt = options.build.is_some().then(InterruptFlag::install);
    if let Some(flag) = &interrupt {
        let wait = WaitPolicy::from_config(&settings.config.wait)
            .with_stop(StopSignal::shared(flag.shared()));
        options = options.with_wait(wait);
    }

    if !ui.json {
        eprint!(
            "{}",
            render_deploy_header(&params, skip_build, ui.color, ui.unicode)
        );
    }

    let use_case = factory::create_deploy_use_case(settings, ui.json, FlowSink::for_context(ui));
    let result = match (&options.build, &interrupt) {
        (Some(build), Some(flag)) => guarded("deploy", &build.lock_path(), flag, || {
            use_case.execute(&params, &options)
        })?,
        _ => use_case.execute(&params, &options)?,
    };

    if ui.json {
        crate::ui::json::emit(&result)?;
        return Ok(());
    }

    eprint!(
        "{}",
        render_deploy_summary(&result, &options.endpoint_output, ui.color, ui.unicode)
    );
    // The endpoint alone on stdout, so `stackpilot deploy | tail -1` is the URL.
    if let Some(endpoint) = &result.endpoint {
        println!("{}", endpoint);
    }
    Ok(())
}
