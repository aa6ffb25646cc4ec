use serde::{Deserialize, Serialize};

use super::identity::identity_key;
use super::kind::WindowKind;
use crate::errors::EntryError;

/// Unvalidated form of a [`ClientEntry`], as it appears on disk.
///
/// Optional fields are omitted from the JSON when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEntryRecord {
    pub class: String,
    pub title: String,
    pub workspace: i64,
    pub floating: bool,
    pub at: Vec<i32>,
    pub size: Vec<i32>,
    pub monitor: i64,
    pub kind: WindowKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwa_key: Option<String>,
}

/// One saved window.
///
/// Only obtainable through [`ClientEntry::try_from`], which enforces:
/// - `at` and `size` have exactly two elements,
/// - `workspace >= 1`,
/// - `kind == WebApp` exactly when a non-empty web app key is present,
/// - a web app entry has a non-empty class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClientEntryRecord", into = "ClientEntryRecord")]
pub struct ClientEntry {
    kind: WindowKind,
    class: String,
    title: String,
    workspace: u32,
    floating: bool,
    at: [i32; 2],
    size: [i32; 2],
    monitor: i64,
    app_id: Option<String>,
    pid: Option<i64>,
    cwd: Option<String>,
    pwa_key: Option<String>,
}

impl TryFrom<ClientEntryRecord> for ClientEntry {
    type Error = EntryError;

    fn try_from(record: ClientEntryRecord) -> Result<Self, Self::Error> {
        let at: [i32; 2] = record
            .at
            .as_slice()
            .try_into()
            .map_err(|_| EntryError::InvalidPosition(record.at.clone()))?;
        let size: [i32; 2] = record
            .size
            .as_slice()
            .try_into()
            .map_err(|_| EntryError::InvalidSize(record.size.clone()))?;

        let workspace = u32::try_from(record.workspace)
            .ok()
            .filter(|ws| *ws >= 1)
            .ok_or(EntryError::InvalidWorkspace(record.workspace))?;

        let has_key = record.pwa_key.as_deref().is_some_and(|k| !k.is_empty());
        match (record.kind, has_key) {
            (WindowKind::WebApp, false) => return Err(EntryError::MissingWebAppKey),
            (WindowKind::WebApp, true) if record.class.is_empty() => {
                return Err(EntryError::MissingField("class"))
            }
            (kind, _) if kind != WindowKind::WebApp && record.pwa_key.is_some() => {
                return Err(EntryError::UnexpectedWebAppKey(kind))
            }
            _ => {}
        }

        Ok(Self {
            kind: record.kind,
            class: record.class,
            title: record.title,
            workspace,
            floating: record.floating,
            at,
            size,
            monitor: record.monitor,
            app_id: record.app_id,
            pid: record.pid,
            cwd: record.cwd,
            pwa_key: record.pwa_key,
        })
    }
}

impl From<ClientEntry> for ClientEntryRecord {
    fn from(entry: ClientEntry) -> Self {
        Self {
            class: entry.class,
            title: entry.title,
            workspace: i64::from(entry.workspace),
            floating: entry.floating,
            at: entry.at.to_vec(),
            size: entry.size.to_vec(),
            monitor: entry.monitor,
            kind: entry.kind,
            app_id: entry.app_id,
            pid: entry.pid,
            cwd: entry.cwd,
            pwa_key: entry.pwa_key,
        }
    }
}

impl ClientEntry {
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn workspace(&self) -> u32 {
        self.workspace
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    /// `[x, y]` in layout pixels.
    pub fn position(&self) -> [i32; 2] {
        self.at
    }

    /// `[width, height]` in layout pixels.
    pub fn size(&self) -> [i32; 2] {
        self.size
    }

    /// Advisory only; placement does not consult it.
    pub fn monitor(&self) -> i64 {
        self.monitor
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn pid(&self) -> Option<i64> {
        self.pid
    }

    pub fn cwd(&self) -> Option<&str> {
        self.cwd.as_deref()
    }

    pub fn web_app_key(&self) -> Option<&str> {
        self.pwa_key.as_deref()
    }

    /// Key used to count and pair this entry with live windows:
    /// app-id, else class, else `"unknown"`.
    pub fn identity_key(&self) -> &str {
        identity_key([self.app_id.as_deref(), Some(self.class.as_str())])
    }

    /// Name shown in logs and reports: class, else `"unknown"`.
    pub fn display_name(&self) -> &str {
        identity_key([Some(self.class.as_str())])
    }
}
