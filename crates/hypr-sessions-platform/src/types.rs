//! Raw records as returned by `hyprctl -j clients` / `hyprctl -j workspaces`.
//!
//! Every field is optional on the wire; conversion into validated session
//! types happens in the classifier.

use hypr_sessions_common::{identity_key, WorkspaceEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawClient {
    pub address: String,
    /// Absent means mapped.
    pub mapped: Option<bool>,
    pub class: String,
    pub initial_class: String,
    #[serde(rename = "app_id")]
    pub app_id: Option<String>,
    pub title: String,
    pub pid: Option<i64>,
    pub floating: bool,
    pub at: Option<Vec<i32>>,
    pub size: Option<Vec<i32>>,
    pub monitor: Option<i64>,
    pub workspace: Option<RawWorkspaceRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWorkspaceRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWorkspace {
    pub id: i64,
    pub name: String,
    pub monitor: Option<String>,
}

impl RawClient {
    pub fn is_mapped(&self) -> bool {
        self.mapped.unwrap_or(true)
    }

    /// Current class, falling back to the initial class. May be empty.
    pub fn class_name(&self) -> &str {
        if self.class.is_empty() {
            &self.initial_class
        } else {
            &self.class
        }
    }

    /// app-id, else class, else initial class, else `"unknown"`.
    pub fn identity_key(&self) -> &str {
        identity_key([
            self.app_id.as_deref(),
            Some(self.class.as_str()),
            Some(self.initial_class.as_str()),
        ])
    }

    pub fn workspace_id(&self) -> Option<i64> {
        self.workspace.as_ref().map(|ws| ws.id)
    }
}

impl From<RawWorkspace> for WorkspaceEntry {
    fn from(ws: RawWorkspace) -> Self {
        Self {
            id: ws.id,
            name: ws.name,
            monitor: ws.monitor,
        }
    }
}
