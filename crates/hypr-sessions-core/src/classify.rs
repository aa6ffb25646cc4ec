//! Live window → [`ClientEntry`] classification.
//!
//! Order matters: web app detection runs before the terminal check, and
//! terminal detection only succeeds when the cwd can be read.

use std::cmp::Reverse;
use std::sync::LazyLock;

use hypr_sessions_common::{ClientEntry, ClientEntryRecord, EntryError, WindowKind};
use hypr_sessions_config::CommandMap;
use hypr_sessions_platform::{CwdResolver, RawClient};
use regex::Regex;
use tracing::debug;

/// Chromium-family classes, including per-app windows such as
/// `chrome-github.com__-Default`. Windows of these classes may be web apps.
static WEB_APP_HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(chromium|chromium-browser|google-chrome|google-chrome-(stable|beta|unstable)|brave-browser|chrome-.*__-Default)$",
    )
    .expect("static regex pattern must compile")
});

/// Browsers that never host web apps.
static PLAIN_BROWSER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(firefox|firefox-esr|firefox-developer-edition|org\.mozilla\.firefox|librewolf)$")
        .expect("static regex pattern must compile")
});

const TERMINAL_CLASSES: &[&str] = &[
    "Alacritty",
    "foot",
    "footclient",
    "kitty",
    "org.wezfurlong.wezterm",
    "com.mitchellh.ghostty",
];

pub fn is_web_app_host(class: &str) -> bool {
    WEB_APP_HOST_RE.is_match(class)
}

pub fn is_browser(class: &str) -> bool {
    is_web_app_host(class) || PLAIN_BROWSER_RE.is_match(class)
}

pub fn is_terminal(class: &str) -> bool {
    TERMINAL_CLASSES.contains(&class)
}

/// Longest key contained in `text`, case-insensitively.
///
/// Longer keys win so that `"mail-beta"` is preferred over `"mail"` when
/// both occur.
pub fn resolve_web_app_key<'k>(
    text: &str,
    keys: impl IntoIterator<Item = &'k str>,
) -> Option<&'k str> {
    if text.is_empty() {
        return None;
    }
    let haystack = text.to_lowercase();
    let mut keys: Vec<&str> = keys.into_iter().filter(|k| !k.is_empty()).collect();
    keys.sort_by_key(|k| Reverse(k.len()));
    keys.into_iter()
        .find(|key| haystack.contains(&key.to_lowercase()))
}

/// Classify one live window.
///
/// Fails when the window cannot form a valid entry (special workspace,
/// missing geometry).
pub fn classify(
    raw: &RawClient,
    commands: &CommandMap,
    cwd_resolver: &dyn CwdResolver,
) -> Result<ClientEntry, EntryError> {
    let class = raw.class_name();
    let mut cwd = None;
    let mut pwa_key = None;

    let kind = if is_web_app_host(class) {
        let key = resolve_web_app_key(&raw.title, commands.web_app_keys())
            .or_else(|| resolve_web_app_key(class, commands.web_app_keys()));
        match key {
            Some(key) => {
                pwa_key = Some(key.to_string());
                WindowKind::WebApp
            }
            None => WindowKind::Browser,
        }
    } else if is_browser(class) {
        WindowKind::Browser
    } else if let Some(dir) = terminal_cwd(raw, class, cwd_resolver) {
        cwd = Some(dir);
        WindowKind::Terminal
    } else {
        WindowKind::Application
    };

    debug!(
        "{class} '{}' -> {kind}{} (workspace {:?}, {})",
        raw.title,
        pwa_key.as_deref().map(|k| format!(" {k}")).unwrap_or_default(),
        raw.workspace_id(),
        if raw.floating { "floating" } else { "tiled" },
    );

    ClientEntry::try_from(ClientEntryRecord {
        class: class.to_string(),
        title: raw.title.clone(),
        workspace: raw.workspace_id().unwrap_or_default(),
        floating: raw.floating,
        at: raw.at.clone().unwrap_or_default(),
        size: raw.size.clone().unwrap_or_default(),
        monitor: raw.monitor.unwrap_or_default(),
        kind,
        app_id: raw.app_id.clone().filter(|id| !id.is_empty()),
        pid: raw.pid,
        cwd,
        pwa_key,
    })
}

fn terminal_cwd(raw: &RawClient, class: &str, resolver: &dyn CwdResolver) -> Option<String> {
    let pid = raw.pid.filter(|pid| *pid > 0)?;
    if !is_terminal(class) {
        return None;
    }
    let dir = resolver.working_directory(pid)?;
    debug!("terminal {class} (pid {pid}) has cwd {}", dir.display());
    Some(dir.to_string_lossy().into_owned())
}
