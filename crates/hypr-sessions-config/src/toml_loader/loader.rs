//! Read the command-map file, with a line-based fallback for files the TOML
//! parser rejects.

use std::io::ErrorKind;
use std::path::Path;

use hypr_sessions_common::ConfigError;
use tracing::{debug, info, warn};

use super::fallback;
use crate::command_map::CommandMap;

/// Load the command map from `path`.
///
/// A missing file yields an empty map. Other read failures are errors.
pub fn load_from_path(path: &Path) -> Result<CommandMap, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "command map {} not found; no application will have a launch command",
                path.display()
            );
            return Ok(CommandMap::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let map = parse_command_map(&content)?;
    info!(
        "loaded {} web app and {} app mappings from {}",
        map.pwa.len(),
        map.apps.len(),
        path.display()
    );
    Ok(map)
}

/// Parse command-map text, trying strict TOML first.
pub fn parse_command_map(content: &str) -> Result<CommandMap, ConfigError> {
    match content.parse::<toml::Table>() {
        Ok(table) => Ok(CommandMap::from_table(table)),
        Err(e) => {
            warn!("command map is not valid TOML, retrying with the basic parser: {e}");
            let sections = fallback::parse_sections(content)?;
            debug!("basic parser found {} section(s)", sections.len());
            Ok(CommandMap::from_table(fallback::into_table(sections)))
        }
    }
}
