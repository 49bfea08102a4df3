//! Cleanup command views: the scan inventory and the final report

use stackpilot::application::{CleanupOutcome, CleanupReport};
use stackpilot::domain::entities::CloudResourceInventory;
use stackpilot::domain::value_objects::ResourceCategory;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, strong, Tone};

pub const NOTHING_FOUND: &str = "No resources found";

pub fn render_cleanup_header(
    region: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let header = CommandHeader::new(Icon::Cleanup, "Cleanup").field("Region", region);
    let header = if dry_run {
        header.with_note("Dry Run")
    } else {
        header
    };
    header.render(supports_color, supports_unicode)
}

/// Matched resources grouped by category, with a count column
pub fn render_inventory(inventory: &CloudResourceInventory, supports_color: bool) -> String {
    let width = ResourceCategory::ALL
        .iter()
        .map(|c| c.plural().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (category, count) in inventory.counts() {
        let label = format!("{:<width$}", category.plural(), width = width);
        let count_text = count.to_string();
        let count_text = if count == 0 {
            paint(&count_text, Tone::Dim, supports_color)
        } else {
            strong(&count_text, Tone::Warning, supports_color)
        };
        out.push_str(&format!("  {}  {}\n", label, count_text));

        for resource in inventory.get(category) {
            match &resource.detail {
                Some(detail) => out.push_str(&format!(
                    "      - {} {}\n",
                    resource.name,
                    paint(&format!("({})", detail), Tone::Dim, supports_color)
                )),
                None => out.push_str(&format!("      - {}\n", resource.name)),
            }
        }
    }

    for warning in inventory.warnings() {
        out.push_str(&format!(
            "  {}\n",
            paint(
                &format!("scan of {} failed: {}", warning.category.plural(), warning.message),
                Tone::Warning,
                supports_color
            )
        ));
    }
    out
}

pub fn render_cleanup_report(
    report: &CleanupReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = match report.outcome() {
        CleanupOutcome::NothingFound => {
            let mut summary = ResultSummary::success(NOTHING_FOUND);
            summary.add_info(format!("Nothing to clean up in {}", report.region));
            summary
        }
        CleanupOutcome::DryRun => {
            let mut summary = ResultSummary::success("Dry Run Complete");
            summary.add_stat("resources matched", report.initial.total());
            summary.with_next_step("stackpilot cleanup");
            summary
        }
        CleanupOutcome::Clean => {
            let mut summary = ResultSummary::success("Cleanup Complete");
            summary.add_stat("resources deleted", report.deleted.len());
            summary
        }
        CleanupOutcome::Partial => {
            let mut summary = ResultSummary::partial("Cleanup Incomplete");
            summary.add_stat("resources deleted", report.deleted.len());
            summary.add_stat("resources remaining", report.final_inventory().total());
            summary
        }
    };

    for category in &report.skipped {
        summary.add_info(format!("Skipped {}", category.plural()));
    }
    for failure in &report.failures {
        summary.add_warning(format!(
            "{} {}: {}",
            failure.category.label(),
            failure.name,
            failure.message
        ));
    }
    for warning in report.final_inventory().warnings() {
        summary.add_warning(format!(
            "scan of {} failed: {}",
            warning.category.plural(),
            warning.message
        ));
    }

    let mut out = summary.render(supports_color, supports_unicode);
    if report.outcome() == CleanupOutcome::Partial {
        out.push_str(&render_leftovers(report, supports_color));
    }
    out
}

/// Remaining resources, each with the command that removes it by hand
fn render_leftovers(report: &CleanupReport, supports_color: bool) -> String {
    let mut out = format!("\n{}\n", strong("Remove manually:", Tone::Warning, supports_color));
    for (category, name, command) in report.leftovers() {
        out.push_str(&format!("  {} {}\n", category.label(), name));
        out.push_str(&format!("    {}\n", paint(&command, Tone::Dim, supports_color)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackpilot::domain::entities::ResourceDescriptor;

    fn inventory(category: ResourceCategory, names: &[&str]) -> CloudResourceInventory {
        let mut inventory = CloudResourceInventory::new();
        inventory.set(
            category,
            names.iter().map(|n| ResourceDescriptor::new(*n)).collect(),
        );
        inventory
    }

    #[test]
    fn empty_report_says_nothing_found() {
        let report = CleanupReport::new("ap-southeast-1", false);
        let rendered = render_cleanup_report(&report, false, false);
        assert!(rendered.contains("[OK] No resources found"));
        assert!(!rendered.contains("Remove manually"));
    }

    #[test]
    fn partial_report_lists_manual_commands() {
        let mut report = CleanupReport::new("ap-southeast-1", false);
        report.initial = inventory(ResourceCategory::Registry, &["app-repo"]);
        report.remaining = Some(inventory(ResourceCategory::Registry, &["app-repo"]));

        let rendered = render_cleanup_report(&report, false, false);
        assert!(rendered.contains("[WARN] Cleanup Incomplete"));
        assert!(rendered.contains("Remove manually:"));
        assert!(rendered.contains("  registry app-repo\n"));
    }

    #[test]
    fn inventory_shows_names_and_details() {
        let mut inventory = CloudResourceInventory::new();
        inventory.set(
            ResourceCategory::Stack,
            vec![ResourceDescriptor::new("travel-planner").with_detail("ROLLBACK_COMPLETE")],
        );

        let rendered = render_inventory(&inventory, false);
        assert!(rendered.contains("- travel-planner (ROLLBACK_COMPLETE)"));
    }
}
