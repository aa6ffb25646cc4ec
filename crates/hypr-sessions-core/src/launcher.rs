//! Resolve saved entries to shell commands and hand them to the compositor.

use std::borrow::Cow;
use std::path::Path;

use hypr_sessions_common::{ClientEntry, WindowKind};
use hypr_sessions_config::CommandMap;
use hypr_sessions_platform::{Dispatch, WindowManager};
use tracing::{info, trace, warn};

const CWD_PLACEHOLDER: &str = "{cwd}";
const URL_PLACEHOLDER: &str = "{url}";

/// Launch command lookup for one entry.
///
/// Web apps look in `[pwa]`; every other kind looks in `[apps]` by class.
/// All kinds then fall back to flat top-level keys (class, then app-id).
pub fn resolve_command<'m>(entry: &ClientEntry, commands: &'m CommandMap) -> Option<&'m str> {
    let primary = match entry.kind() {
        WindowKind::WebApp => entry.web_app_key().and_then(|key| commands.web_app(key)),
        WindowKind::Application | WindowKind::Terminal | WindowKind::Browser => {
            commands.app(entry.class())
        }
    };

    primary.or_else(|| {
        [Some(entry.class()), entry.app_id()]
            .into_iter()
            .flatten()
            .filter(|key| !key.is_empty())
            .find_map(|key| commands.flat(key))
    })
}

/// Substitute `{cwd}` and `{url}` in a command template.
///
/// `{cwd}` becomes the entry's working directory, or `home` when it has
/// none. Both are shell-quoted. `{url}` is always empty.
pub fn render_command(template: &str, entry: &ClientEntry, home: &Path) -> String {
    let mut cmd = template.to_string();
    if cmd.contains(CWD_PLACEHOLDER) {
        let dir = entry
            .cwd()
            .map(Cow::Borrowed)
            .unwrap_or_else(|| home.to_string_lossy());
        cmd = cmd.replace(CWD_PLACEHOLDER, &quote(&dir));
    }
    if cmd.contains(URL_PLACEHOLDER) {
        cmd = cmd.replace(URL_PLACEHOLDER, &quote(""));
    }
    cmd
}

fn quote(s: &str) -> String {
    // only fails on interior NUL bytes
    shlex::try_quote(s)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| "''".to_string())
}

/// One entry paired with the command that would relaunch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLaunch<'a> {
    pub entry: &'a ClientEntry,
    pub command: Option<String>,
}

pub fn plan_launches<'a>(
    entries: &'a [ClientEntry],
    commands: &CommandMap,
    home: &Path,
) -> Vec<PlannedLaunch<'a>> {
    entries
        .iter()
        .map(|entry| PlannedLaunch {
            entry,
            command: resolve_command(entry, commands)
                .map(|template| render_command(template, entry, home)),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchReport {
    pub launched: usize,
    pub total: usize,
    /// Names of entries without a launch command, in entry order.
    pub unmapped: Vec<String>,
    /// Dispatches the compositor refused or that could not be sent.
    pub failed: usize,
}

/// Dispatch one `exec` per resolvable entry.
///
/// Returns as soon as the requests are sent; the windows show up later.
pub fn launch(
    entries: &[ClientEntry],
    commands: &CommandMap,
    wm: &dyn WindowManager,
    home: &Path,
) -> LaunchReport {
    let mut report = LaunchReport {
        total: entries.len(),
        ..Default::default()
    };

    for plan in plan_launches(entries, commands, home) {
        let entry = plan.entry;
        let Some(cmd) = plan.command else {
            warn!(
                "no launcher for {} (class={} app_id={})",
                entry.identity_key(),
                entry.class(),
                entry.app_id().unwrap_or("none"),
            );
            report.unmapped.push(entry.display_name().to_string());
            continue;
        };

        info!("launching {}", entry.display_name());
        let dispatch = Dispatch::Exec(cmd);
        trace!("hyprctl dispatch {dispatch}");
        match wm.dispatch(&dispatch) {
            Ok(()) => report.launched += 1,
            Err(e) => {
                warn!("failed to launch {}: {e}", entry.display_name());
                report.failed += 1;
            }
        }
    }

    report
}
