use stackpilot::application::{describe_outputs_command, DeployResult};
use stackpilot::domain::entities::DeploymentParameters;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_deploy_header(
    params: &DeploymentParameters,
    skip_build: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    CommandHeader::new(Icon::Deploy, "Deploy")
        .field("Stack", params.stack_name.as_str())
        .field("Region", params.region.as_str())
        .field_opt("Profile", params.profile.as_deref())
        .field("Bucket", params.bucket_name.as_str())
        .field_opt("Build", skip_build.then_some("skipped"))
        .render(supports_color, supports_unicode)
}

pub fn render_deploy_summary(
    result: &DeployResult,
    endpoint_key: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.has_warnings() {
        ResultSummary::partial("Deploy Complete (with warnings)")
    } else {
        ResultSummary::success("Deploy Complete")
    };

    summary.add_stat("stack outputs", result.outputs.len());
    if result.recovered_stack {
        summary.add_info(format!("Recreated stack {}", result.stack_name));
    }
    if result.empty_changeset {
        summary.add_info("Stack already up to date");
    }
    match &result.endpoint {
        Some(endpoint) => summary.add_info(format!("{}: {}", endpoint_key, endpoint)),
        None => summary.with_next_step(describe_outputs_command(&result.stack_name, &result.region)),
    }
    for warning in &result.warnings {
        summary.add_warning(warning.as_str());
    }

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> DeployResult {
        DeployResult {
            stack_name: "travel-planner".to_string(),
            region: "ap-southeast-1".to_string(),
            ..DeployResult::default()
        }
    }

    #[test]
    fn endpoint_is_shown_under_its_key() {
        let mut result = result();
        result.endpoint = Some("https://x.example/prod".to_string());

        let rendered = render_deploy_summary(&result, "ApiUrl", false, false);
        assert!(rendered.contains("[OK] Deploy Complete"));
        assert!(rendered.contains("ApiUrl: https://x.example/prod"));
    }

    #[test]
    fn missing_endpoint_suggests_describe_command() {
        let mut result = result();
        result.warnings.push("stack has no output named ApiUrl".to_string());

        let rendered = render_deploy_summary(&result, "ApiUrl", false, false);
        assert!(rendered.contains("[WARN] Deploy Complete (with warnings)"));
        assert!(rendered.contains("--stack-name travel-planner --region ap-southeast-1"));
    }
}
