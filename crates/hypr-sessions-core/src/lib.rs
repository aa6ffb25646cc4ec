//! Session capture and reconciliation.
//!
//! `save` classifies every live window into a [`ClientEntry`] and persists
//! the result. `restore` relaunches each entry through the command map,
//! waits for the windows to show up, pairs saved entries with the new
//! windows, and moves them back into place.
//!
//! [`ClientEntry`]: hypr_sessions_common::ClientEntry

pub mod classify;
pub mod flow;
pub mod launcher;
pub mod matcher;
pub mod snapshot;
pub mod store;
pub mod waiter;

#[cfg(test)]
mod test_support;

pub use classify::{classify, resolve_web_app_key};
pub use flow::{
    capture_session, preview_restore, restore_session, save_session, RestoreOptions, RestorePreview,
    RestoreReport,
};
pub use launcher::{
    launch, plan_launches, render_command, resolve_command, LaunchReport, PlannedLaunch,
};
pub use matcher::{place_windows, PlacementReport};
pub use snapshot::{build_snapshot, KindSummary, SnapshotReport};
pub use store::{read_snapshot, write_snapshot};
pub use waiter::{wait_for_windows, WaitOptions};
