//! In-memory form of the command-map file.

use std::collections::BTreeMap;

use tracing::debug;

pub const APPS_TABLE: &str = "apps";
pub const PWA_TABLE: &str = "pwa";

/// Launch commands keyed by window identity.
///
/// `apps` is keyed by class, `pwa` by web app key, and `fallback` holds
/// flat top-level entries keyed by class or app-id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandMap {
    pub apps: BTreeMap<String, String>,
    pub pwa: BTreeMap<String, String>,
    pub fallback: BTreeMap<String, String>,
}

impl CommandMap {
    /// Build from a parsed TOML document.
    ///
    /// String values under `[apps]` and `[pwa]` become mappings, top-level
    /// strings become flat fallbacks; anything else is ignored.
    pub fn from_table(table: toml::Table) -> Self {
        let mut map = Self::default();
        for (key, value) in table {
            match value {
                toml::Value::Table(t) if key == APPS_TABLE => {
                    map.apps = string_entries(APPS_TABLE, t)
                }
                toml::Value::Table(t) if key == PWA_TABLE => map.pwa = string_entries(PWA_TABLE, t),
                toml::Value::String(cmd) => {
                    map.fallback.insert(key, cmd);
                }
                other => {
                    debug!("ignoring top-level key '{key}' of type {}", other.type_str());
                }
            }
        }
        map
    }

    pub fn web_app(&self, key: &str) -> Option<&str> {
        non_empty(self.pwa.get(key))
    }

    pub fn app(&self, class: &str) -> Option<&str> {
        non_empty(self.apps.get(class))
    }

    pub fn flat(&self, key: &str) -> Option<&str> {
        non_empty(self.fallback.get(key))
    }

    pub fn web_app_keys(&self) -> impl Iterator<Item = &str> {
        self.pwa.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty() && self.pwa.is_empty() && self.fallback.is_empty()
    }
}

fn non_empty(cmd: Option<&String>) -> Option<&str> {
    cmd.map(|c| c.trim()).filter(|c| !c.is_empty())
}

fn string_entries(section: &str, table: toml::Table) -> BTreeMap<String, String> {
    table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(cmd) => Some((key, cmd)),
            other => {
                debug!("ignoring [{section}] key '{key}' of type {}", other.type_str());
                None
            }
        })
        .collect()
}
