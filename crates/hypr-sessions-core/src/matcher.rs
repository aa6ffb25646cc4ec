//! Pair saved entries with live windows and move them into place.

use hypr_sessions_common::ClientEntry;
use hypr_sessions_platform::{Dispatch, RawClient, WindowManager};
use tracing::{debug, info, warn};

const IDENTITY_SCORE: u32 = 1;
const TITLE_SCORE: u32 = 2;
const FLOATING_SCORE: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    pub placed: usize,
    pub total: usize,
    /// Names of entries no live window was found for, in entry order.
    pub unmatched: Vec<String>,
}

/// How well `window` fits `entry`. Callers only score same-identity pairs.
fn score(entry: &ClientEntry, window: &RawClient) -> u32 {
    let mut score = IDENTITY_SCORE;

    let saved = entry.title().to_lowercase();
    let live = window.title.to_lowercase();
    if !saved.is_empty() && !live.is_empty() && (saved.contains(&live) || live.contains(&saved)) {
        score += TITLE_SCORE;
    }
    if entry.is_floating() == window.floating {
        score += FLOATING_SCORE;
    }
    score
}

/// Index of the best unclaimed window for `entry`. Ties go to the earliest.
fn best_candidate(entry: &ClientEntry, observed: &[RawClient], claimed: &[bool]) -> Option<usize> {
    let key = entry.identity_key();
    let mut best: Option<(usize, u32)> = None;

    for (idx, window) in observed.iter().enumerate() {
        if claimed[idx] || window.address.is_empty() || window.identity_key() != key {
            continue;
        }
        let s = score(entry, window);
        if best.map_or(true, |(_, top)| s > top) {
            best = Some((idx, s));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Dispatches that move `window` to where `entry` was saved.
fn placement_dispatches(entry: &ClientEntry, window: &RawClient) -> Vec<Dispatch> {
    let mut dispatches = vec![
        Dispatch::FocusWindow {
            address: window.address.clone(),
        },
        Dispatch::MoveToWorkspaceSilent(entry.workspace()),
    ];
    if entry.is_floating() != window.floating {
        dispatches.push(Dispatch::ToggleFloating);
    }
    if entry.is_floating() {
        let [width, height] = entry.size();
        let [x, y] = entry.position();
        dispatches.push(Dispatch::ResizeWindowExact { width, height });
        dispatches.push(Dispatch::MoveWindowExact { x, y });
    }
    dispatches
}

/// Greedy one-to-one assignment in entry order.
///
/// Each live window is used at most once. A matched entry counts as placed
/// even if some of its dispatches fail.
pub fn place_windows(
    entries: &[ClientEntry],
    observed: &[RawClient],
    wm: &dyn WindowManager,
) -> PlacementReport {
    let mut report = PlacementReport {
        total: entries.len(),
        ..Default::default()
    };
    let mut claimed = vec![false; observed.len()];

    for entry in entries {
        let Some(idx) = best_candidate(entry, observed, &claimed) else {
            debug!("no live window for {} '{}'", entry.identity_key(), entry.title());
            report.unmatched.push(entry.display_name().to_string());
            continue;
        };
        claimed[idx] = true;
        let window = &observed[idx];

        info!(
            "placing {} ({}) on workspace {}",
            entry.display_name(),
            window.address,
            entry.workspace()
        );
        for dispatch in placement_dispatches(entry, window) {
            if let Err(e) = wm.dispatch(&dispatch) {
                warn!("`{dispatch}` failed for {}: {e}", window.address);
            }
        }
        report.placed += 1;
    }

    report
}
