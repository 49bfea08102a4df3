//! Outputs command handler

use anyhow::Result;

use stackpilot::application::preflight::{self, require_tools};
use stackpilot::infrastructure::WhichToolLocator;
use stackpilot::presentation::factory;
use stackpilot::Settings;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::outputs::render_outputs;

pub fn cmd_outputs(settings: &Settings, ui: &UiContext) -> Result<()> {
    require_tools(&WhichToolLocator::new(), &[preflight::aws_cli()])?;

    let outputs = factory::create_outputs_use_case(settings).execute(&settings.stack_name)?;

    if ui.json {
        crate::ui::json::emit(&outputs)?;
        return Ok(());
    }

    let header = CommandHeader::new(Icon::Outputs, "Outputs")
        .field("Stack", settings.stack_name.as_str())
        .field("Region", settings.region.as_str());
    eprint!("{}", header.render(ui.color, ui.unicode));

    if outputs.is_empty() {
        eprintln!("Stack {} has no outputs", settings.stack_name);
    }
    print!("{}", render_outputs(&outputs));
    Ok(())
}
