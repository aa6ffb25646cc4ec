//! End-to-end save and restore.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use hypr_sessions_common::{ClientEntry, Result};
use hypr_sessions_config::CommandMap;
use hypr_sessions_platform::{CwdResolver, WindowManager};
use tracing::{debug, info};

use crate::launcher::{launch, plan_launches, LaunchReport, PlannedLaunch};
use crate::matcher::{place_windows, PlacementReport};
use crate::snapshot::{build_snapshot, SnapshotReport};
use crate::store::write_snapshot;
use crate::waiter::{wait_for_windows, WaitOptions, DEFAULT_POLL_INTERVAL};


/// Overall budget from the first launch to the end of waiting.
pub const DEFAULT_RESTORE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct RestoreOptions {
    pub timeout: Duration,
    pub poll_interval: Duration,
    /// Substituted for `{cwd}` when an entry has no working directory.
    pub home: PathBuf,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_RESTORE_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            home: dirs::home_dir().unwrap_or_else(|| PathBuf::from("/")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub launch: LaunchReport,
    pub placement: PlacementReport,
}

/// What a restore would do, without doing it.
#[derive(Debug, Clone)]
pub struct RestorePreview<'a> {
    pub launches: Vec<PlannedLaunch<'a>>,
    /// Names of entries without a launch command, in entry order.
    pub unmapped: Vec<String>,
}

/// Query the compositor and classify everything it reports.
///
/// Query failures are fatal; a session saved from a partial window list
/// would silently drop windows.
pub fn capture_session(
    wm: &dyn WindowManager,
    commands: &CommandMap,
    cwd_resolver: &dyn CwdResolver,
    timestamp: i64,
) -> Result<SnapshotReport> {
    let clients = wm.clients()?;
    let workspaces = wm.workspaces()?;
    info!(
        "captured {} windows on {} workspaces",
        clients.len(),
        workspaces.len()
    );
    for ws in &workspaces {
        debug!(
            "workspace {} '{}' on {}",
            ws.id,
            ws.name,
            ws.monitor.as_deref().unwrap_or("unknown monitor")
        );
    }

    Ok(build_snapshot(
        &clients,
        workspaces,
        commands,
        cwd_resolver,
        timestamp,
    ))
}

/// Capture the live session and write it to `path`.
pub fn save_session(
    wm: &dyn WindowManager,
    commands: &CommandMap,
    cwd_resolver: &dyn CwdResolver,
    path: &Path,
    timestamp: i64,
) -> Result<SnapshotReport> {
    let report = capture_session(wm, commands, cwd_resolver, timestamp)?;
    write_snapshot(path, &report.snapshot)?;
    Ok(report)
}

/// Resolve every entry's launch command without dispatching anything.
pub fn preview_restore<'a>(
    entries: &'a [ClientEntry],
    commands: &CommandMap,
    home: &Path,
) -> RestorePreview<'a> {
    let launches = plan_launches(entries, commands, home);
    let unmapped = launches
        .iter()
        .filter(|plan| plan.command.is_none())
        .map(|plan| plan.entry.display_name().to_string())
        .collect();
    RestorePreview { launches, unmapped }
}

/// Launch every mapped entry, wait for the windows, then place them.
///
/// The timeout covers launching and waiting together.
pub fn restore_session(
    entries: &[ClientEntry],
    commands: &CommandMap,
    wm: &dyn WindowManager,
    options: &RestoreOptions,
) -> RestoreReport {
    let wait = WaitOptions {
        deadline: Instant::now() + options.timeout,
        poll_interval: options.poll_interval,
    };

    let launch = launch(entries, commands, wm, &options.home);
    info!("launched {}/{} apps", launch.launched, launch.total);

    let observed = wait_for_windows(entries, wm, &wait);
    let placement = place_windows(entries, &observed, wm);
    info!("placed {}/{} windows", placement.placed, placement.total);

    RestoreReport { launch, placement }
}
