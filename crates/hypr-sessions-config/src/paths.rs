//! Default file locations.

use std::path::PathBuf;

use hypr_sessions_common::ConfigError;

const APP_DIR: &str = "hypr";

/// `$XDG_CONFIG_HOME/hypr/session-apps.toml`
pub fn default_command_map_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_DIR).join("session-apps.toml"))
}

/// `$XDG_STATE_HOME/hypr/session.json`, falling back to `~/.local/state`.
pub fn default_session_path() -> Result<PathBuf, ConfigError> {
    let state_dir = dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))
        .ok_or_else(|| ConfigError::PathError("could not determine state directory".into()))?;
    Ok(state_dir.join(APP_DIR).join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_map_path_is_reasonable() {
        // May not resolve in every CI sandbox
        if let Ok(path) = default_command_map_path() {
            assert!(path.is_absolute());
            assert!(path.ends_with("hypr/session-apps.toml"));
        }
    }

    #[test]
    fn session_path_is_reasonable() {
        if let Ok(path) = default_session_path() {
            assert!(path.is_absolute());
            assert!(path.ends_with("hypr/session.json"));
        }
    }
}
