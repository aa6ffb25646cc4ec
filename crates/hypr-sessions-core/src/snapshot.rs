//! Build a [`SessionSnapshot`] from the live window list.

use std::collections::BTreeSet;

use hypr_sessions_common::{EntryError, SessionSnapshot, WindowKind, WorkspaceEntry};
use hypr_sessions_config::CommandMap;
use hypr_sessions_platform::{CwdResolver, RawClient, RawWorkspace};
use tracing::{debug, warn};

use crate::classify::classify;

/// Compositor-owned windows that never need a launch command.
const SYSTEM_CLASSES: &[&str] = &[
    "", "hyprland", "Hyprland", "hyprpaper", "waybar", "rofi", "wofi", "dunst", "mako",
];

/// Per-kind window counts from one capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindSummary {
    pub web_apps: usize,
    pub browsers: usize,
    pub terminals: usize,
    pub applications: usize,
    /// Unmapped windows left out of the snapshot.
    pub skipped: usize,
}

impl KindSummary {
    fn record(&mut self, kind: WindowKind) {
        match kind {
            WindowKind::WebApp => self.web_apps += 1,
            WindowKind::Browser => self.browsers += 1,
            WindowKind::Terminal => self.terminals += 1,
            WindowKind::Application => self.applications += 1,
        }
    }

    pub fn saved(&self) -> usize {
        self.web_apps + self.browsers + self.terminals + self.applications
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotReport {
    pub snapshot: SessionSnapshot,
    /// Identities with no launch command, deduplicated.
    pub missing_mappings: BTreeSet<String>,
    pub summary: KindSummary,
    /// Windows that could not form a valid entry, by class.
    pub rejected: Vec<(String, EntryError)>,
}

/// Classify every mapped client in encounter order.
pub fn build_snapshot(
    clients: &[RawClient],
    workspaces: Vec<RawWorkspace>,
    commands: &CommandMap,
    cwd_resolver: &dyn CwdResolver,
    timestamp: i64,
) -> SnapshotReport {
    let mut entries = Vec::with_capacity(clients.len());
    let mut missing_mappings = BTreeSet::new();
    let mut summary = KindSummary::default();
    let mut rejected = Vec::new();

    for client in clients {
        let class = client.class_name();
        if !client.is_mapped() {
            debug!("skipping unmapped window: {}", client.identity_key());
            summary.skipped += 1;
            continue;
        }

        let entry = match classify(client, commands, cwd_resolver) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("not saving {} '{}': {e}", client.identity_key(), client.title);
                rejected.push((client.identity_key().to_string(), e));
                continue;
            }
        };
        summary.record(entry.kind());

        if !SYSTEM_CLASSES.contains(&class) {
            match entry.kind() {
                WindowKind::WebApp => {
                    if let Some(key) = entry.web_app_key() {
                        if commands.web_app(key).is_none() {
                            missing_mappings.insert(key.to_string());
                        }
                    }
                }
                WindowKind::Browser => {}
                WindowKind::Application | WindowKind::Terminal => {
                    if commands.app(class).is_none() {
                        missing_mappings.insert(class.to_string());
                    }
                }
            }
        }

        entries.push(entry);
    }

    debug!(
        "window summary: {} web apps, {} browsers, {} terminals, {} applications, {} skipped",
        summary.web_apps, summary.browsers, summary.terminals, summary.applications, summary.skipped
    );

    SnapshotReport {
        snapshot: SessionSnapshot {
            timestamp,
            clients: entries,
            workspaces: workspaces.into_iter().map(WorkspaceEntry::from).collect(),
        },
        missing_mappings,
        summary,
        rejected,
    }
}
