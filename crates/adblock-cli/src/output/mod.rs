//! Terminal output for finished runs.

use adblock::ReconcileReport;
use colored::Colorize;

/// Render the one-line summary of a successful run.
pub fn summary(report: &ReconcileReport) -> String {
    let rule = report.rule_id.as_deref().map_or_else(
        || "no rule created".yellow().to_string(),
        |id| format!("rule {}", id.cyan()),
    );

    format!(
        "{} {} domains in {} lists ({} replaced), {}",
        "Synced:".green().bold(),
        report.domains_submitted.to_string().bold(),
        report.lists_created.to_string().bold(),
        report.lists_deleted,
        rule,
    )
}
