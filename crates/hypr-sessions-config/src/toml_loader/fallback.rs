//! Minimal `[section]` / `key = "value"` reader.
//!
//! Accepts files with stray syntax the TOML parser rejects, such as
//! unquoted values or duplicated keys (last one wins). Keys outside a
//! section are ignored.

use std::collections::BTreeMap;

use hypr_sessions_common::ConfigError;

pub(super) type Sections = BTreeMap<String, BTreeMap<String, String>>;

pub(super) fn parse_sections(content: &str) -> Result<Sections, ConfigError> {
    let mut sections = Sections::new();
    let mut current: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim_matches(|c| c == '[' || c == ']').trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::ParseError(format!(
                "line {}: expected `[section]` or `key = value`, got `{line}`",
                idx + 1
            )));
        };

        if let Some(section) = &current {
            sections
                .entry(section.clone())
                .or_default()
                .insert(unquote(key), unquote(value));
        }
    }

    Ok(sections)
}

pub(super) fn into_table(sections: Sections) -> toml::Table {
    sections
        .into_iter()
        .map(|(name, entries)| {
            let table: toml::Table = entries
                .into_iter()
                .map(|(k, v)| (k, toml::Value::String(v)))
                .collect();
            (name, toml::Value::Table(table))
        })
        .collect()
}

fn unquote(s: &str) -> String {
    s.trim().trim_matches('"').to_string()
}
