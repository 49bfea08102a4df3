//! Build command handler

use std::path::Path;

use anyhow::Result;

use stackpilot::application::preflight::{self, require_tools};
use stackpilot::application::BuildOptions;
use stackpilot::infrastructure::{InterruptFlag, WhichToolLocator};
use stackpilot::presentation::factory;
use stackpilot::Settings;

use super::guarded;
use crate::ui::context::UiContext;
use crate::ui::sinks::FlowSink;
use crate::ui::views::build::{render_build_header, render_build_summary};

pub fn cmd_build(settings: &Settings, project_root: &Path, parallel: bool, ui: &UiContext) -> Result<()> {
    let options = BuildOptions::from_config(&settings.config.build, project_root).with_parallel(parallel);

    let mut tools = vec![preflight::sam_cli()];
    if options.use_container {
        tools.push(preflight::container_engine());
    }
    require_tools(&WhichToolLocator::new(), &tools)?;

    if !ui.json {
        eprint!(
            "{}",
            render_build_header(&options.template, &options.build_dir, parallel, ui.color, ui.unicode)
        );
    }

    let use_case = factory::create_build_use_case(ui.json, FlowSink::for_context(ui));
    let interrupt = InterruptFlag::install();
    let result = guarded("build", &options.lock_path(), &interrupt, || use_case.execute(&options))?;

    if ui.json {
        crate::ui::json::emit(&result)?;
    } else {
        print!("{}", render_build_summary(&result, ui.color, ui.unicode));
    }
    Ok(())
}
