//! End-of-run summary formatting.

use crate::config::RunConfig;
use crate::reconcile::ReconcileReport;

/// Width of the separator banner.
pub const SEPARATOR_WIDTH: usize = 40;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Renders the completion banner and report lists, one entry per line.
///
/// The fallback and missing lists are always shown in full when non-empty;
/// failed downloads follow when any occurred.
#[must_use]
pub fn render_summary(report: &ReconcileReport, config: &RunConfig) -> Vec<String> {
    let fallback_dir = config.fallback_dir.display();
    let mut lines = vec![
        String::new(),
        separator(),
        "Download Complete.".to_string(),
        format!(
            "Check the '{fallback_dir}' folder for mods that didn't match version {}.",
            config.game_version
        ),
    ];

    if !report.fallback.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "The following mods were not up to date and put in the '{fallback_dir}' folder:"
        ));
        lines.extend(report.fallback.iter().map(|name| format!(" - {name}")));
    }

    lines.push(String::new());
    lines.push(separator());

    if !report.missing.is_empty() {
        lines.push(String::new());
        lines.push("The following mods could not be downloaded at all (check URLs):".to_string());
        lines.extend(report.missing.iter().map(|name| format!(" - {name}")));
    }

    if !report.failed_downloads.is_empty() {
        lines.push(String::new());
        lines.push("The following mods were resolved but their files failed to download:".to_string());
        lines.extend(report.failed_downloads.iter().map(|name| format!(" - {name}")));
    }

    lines.push(separator());
    lines
}

/// Prints the summary to stdout.
pub fn print_summary(report: &ReconcileReport, config: &RunConfig) {
    for line in render_summary(report, config) {
        println!("{line}");
    }
}
