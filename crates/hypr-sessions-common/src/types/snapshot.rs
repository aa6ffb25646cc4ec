use serde::{Deserialize, Serialize};

use super::entry::ClientEntry;

/// A workspace as it existed at save time. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub monitor: Option<String>,
}

/// Everything written by one `save` and read back by `restore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub clients: Vec<ClientEntry>,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceEntry>,
}
