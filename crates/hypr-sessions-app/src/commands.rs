//! `save` and `restore` entry points.

use std::path::PathBuf;

use chrono::Utc;
use hypr_sessions_common::{ConfigError, Result, SessionError};
use hypr_sessions_config::{default_command_map_path, default_session_path, load_from_path};
use hypr_sessions_core::{
    capture_session, preview_restore, read_snapshot, restore_session, save_session,
    RestoreOptions,
};
use hypr_sessions_platform::{create_window_manager, ProcCwdResolver};
use tracing::info;

use crate::cli::{RestoreArgs, SaveArgs};
use crate::report;

fn or_default(
    path: Option<PathBuf>,
    default: fn() -> std::result::Result<PathBuf, ConfigError>,
) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(default()?),
    }
}

pub fn save(args: SaveArgs) -> Result<()> {
    let apps_path = or_default(args.apps_toml, default_command_map_path)?;
    let session_path = or_default(args.output, default_session_path)?;
    let commands = load_from_path(&apps_path)?;

    let wm = create_window_manager();
    let cwd = ProcCwdResolver::new();
    let timestamp = Utc::now().timestamp();

    let report = if args.dry_run {
        let report = capture_session(wm.as_ref(), &commands, &cwd, timestamp)?;
        let json = serde_json::to_string_pretty(&report.snapshot)
            .map_err(|e| SessionError::Serialize(e.to_string()))?;
        println!(
            "DRY RUN - would save {} windows to {}",
            report.snapshot.clients.len(),
            session_path.display()
        );
        println!("{json}");
        report
    } else {
        let report = save_session(wm.as_ref(), &commands, &cwd, &session_path, timestamp)?;
        println!(
            "Saved {} windows to {}",
            report.snapshot.clients.len(),
            session_path.display()
        );
        report
    };

    print!("{}", report::save_notes(&report, &apps_path));
    Ok(())
}

pub fn restore(args: RestoreArgs) -> Result<()> {
    let apps_path = or_default(args.apps_toml, default_command_map_path)?;
    let session_path = or_default(args.input, default_session_path)?;

    let snapshot = read_snapshot(&session_path)?;
    let commands = load_from_path(&apps_path)?;
    info!(
        "restoring {} windows from {} (saved {})",
        snapshot.clients.len(),
        session_path.display(),
        report::saved_at(snapshot.timestamp).as_deref().unwrap_or("at an unknown time"),
    );

    let options = RestoreOptions::default();
    if args.dry_run {
        let preview = preview_restore(&snapshot.clients, &commands, &options.home);
        print!("{}", report::restore_preview(&preview));
        return Ok(());
    }

    let wm = create_window_manager();
    let report = restore_session(&snapshot.clients, &commands, wm.as_ref(), &options);
    print!("{}", report::restore_summary(&report));
    Ok(())
}
