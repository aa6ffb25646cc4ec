//! Human-readable output for the save and restore commands.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, Local};
use hypr_sessions_core::{RestorePreview, RestoreReport, SnapshotReport};

/// Local time for a saved timestamp, if it has one.
pub fn saved_at(timestamp: i64) -> Option<String> {
    if timestamp <= 0 {
        return None;
    }
    DateTime::from_timestamp(timestamp, 0).map(|utc| {
        utc.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    })
}

/// One line per item, each newline-terminated.
fn block(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Everything printed after a save besides the headline.
pub fn save_notes(report: &SnapshotReport, apps_path: &Path) -> String {
    let summary = &report.summary;
    let mut lines = vec![format!(
        "  {} web apps, {} browser windows, {} terminals, {} applications",
        summary.web_apps, summary.browsers, summary.terminals, summary.applications
    )];
    if !report.rejected.is_empty() {
        lines.push(format!("Not saved ({}):", report.rejected.len()));
        lines.extend(
            report
                .rejected
                .iter()
                .map(|(name, reason)| format!("  - {name}: {reason}")),
        );
    }
    block(lines) + &missing_mappings(&report.missing_mappings, apps_path)
}

/// Sorted list of classes and web apps with no launch command.
pub fn missing_mappings(missing: &BTreeSet<String>, apps_path: &Path) -> String {
    if missing.is_empty() {
        return String::new();
    }
    let mut lines = vec![format!("Missing command mappings ({}):", missing.len())];
    lines.extend(missing.iter().map(|name| format!("  - {name}")));
    lines.push(format!(
        "Add them under [apps] or [pwa] in {} to restore these windows.",
        apps_path.display()
    ));
    block(lines)
}

pub fn restore_preview(preview: &RestorePreview<'_>) -> String {
    let mut lines = vec![format!(
        "DRY RUN - would restore {} windows",
        preview.launches.len()
    )];
    for plan in &preview.launches {
        let entry = plan.entry;
        lines.push(format!(
            "[{}] {} '{}' -> workspace {} ({})",
            entry.kind(),
            entry.identity_key(),
            entry.title(),
            entry.workspace(),
            if entry.is_floating() { "floating" } else { "tiled" },
        ));
        lines.push(match &plan.command {
            Some(cmd) => format!("    hyprctl dispatch exec -- {cmd}"),
            None => "    no command mapping".to_string(),
        });
    }
    if !preview.unmapped.is_empty() {
        lines.push(format!(
            "Entries without a command mapping: {}",
            preview.unmapped.join(", ")
        ));
    }
    block(lines)
}

pub fn restore_summary(report: &RestoreReport) -> String {
    let launch = &report.launch;
    let placement = &report.placement;
    let mut lines = vec![
        format!("Launched {}/{} apps", launch.launched, launch.total),
        format!("Placed {}/{} windows", placement.placed, placement.total),
    ];
    if !launch.unmapped.is_empty() {
        lines.push(format!("No command mapping: {}", launch.unmapped.join(", ")));
    }
    if launch.failed > 0 {
        lines.push(format!("Failed to launch: {}", launch.failed));
    }
    if !placement.unmatched.is_empty() {
        lines.push(format!("Never appeared: {}", placement.unmatched.join(", ")));
    }
    block(lines)
}
