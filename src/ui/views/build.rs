use std::path::Path;

use stackpilot::application::BuildResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(
    template: &Path,
    build_dir: &Path,
    parallel: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    CommandHeader::new(Icon::Build, "Build")
        .field("Template", template.display().to_string())
        .field("Output", build_dir.display().to_string())
        .field_opt("Mode", parallel.then_some("parallel"))
        .render(supports_color, supports_unicode)
}

pub fn render_build_summary(
    result: &BuildResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Build Complete");
    summary.add_stat("artifacts built", result.built_count());
    summary.add_stat("manifests restored", result.manifests_swapped);
    for artifact in &result.artifacts {
        summary.add_info(format!("{} ({})", artifact.name, artifact.status));
    }
    summary.with_next_step("stackpilot deploy --skip-build");
    summary.render(supports_color, supports_unicode)
}
