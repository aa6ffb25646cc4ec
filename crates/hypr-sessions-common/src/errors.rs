use std::path::PathBuf;

use crate::types::WindowKind;

/// A client record that violates the [`ClientEntry`](crate::ClientEntry) invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("position 'at' must be [x, y], got: {0:?}")]
    InvalidPosition(Vec<i32>),

    #[error("size must be [width, height], got: {0:?}")]
    InvalidSize(Vec<i32>),

    #[error("workspace must be positive, got: {0}")]
    InvalidWorkspace(i64),

    #[error("web app entries must have a non-empty web app key")]
    MissingWebAppKey,

    #[error("only web app entries may carry a web app key, got kind '{0}'")]
    UnexpectedWebAppKey(WindowKind),

    #[error("missing field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no saved session found at {0}")]
    NotFound(PathBuf),

    #[error("saved session at {0} is empty")]
    Empty(PathBuf),

    #[error("failed to read session {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed session file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("failed to write session to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize session: {0}")]
    Serialize(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("failed to spawn {0}")]
    Spawn(String),

    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("invalid window manager response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HyprSessionsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_error_display() {
        let err = EntryError::InvalidPosition(vec![1, 2, 3]);
        assert_eq!(err.to_string(), "position 'at' must be [x, y], got: [1, 2, 3]");

        let err = EntryError::InvalidWorkspace(-98);
        assert_eq!(err.to_string(), "workspace must be positive, got: -98");

        let err = EntryError::UnexpectedWebAppKey(WindowKind::Browser);
        assert_eq!(
            err.to_string(),
            "only web app entries may carry a web app key, got kind 'browser'"
        );
    }

    #[test]
    fn session_error_display() {
        let err = SessionError::NotFound(PathBuf::from("/tmp/session.json"));
        assert_eq!(err.to_string(), "no saved session found at /tmp/session.json");

        let err = SessionError::Malformed {
            path: PathBuf::from("/tmp/session.json"),
            reason: "expected value at line 1".into(),
        };
        assert!(err.to_string().contains("expected value at line 1"));
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::CommandFailed {
            command: "hyprctl -j clients".into(),
            status: "exit status: 1".into(),
        };
        assert_eq!(err.to_string(), "`hyprctl -j clients` exited with exit status: 1");
    }

    #[test]
    fn top_level_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: HyprSessionsError = config_err.into();
        assert!(matches!(err, HyprSessionsError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn top_level_error_from_session() {
        let err: HyprSessionsError = SessionError::Empty(PathBuf::from("s.json")).into();
        assert!(matches!(err, HyprSessionsError::Session(_)));
        assert_eq!(err.to_string(), "saved session at s.json is empty");
    }

    #[test]
    fn top_level_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HyprSessionsError = io_err.into();
        assert!(matches!(err, HyprSessionsError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
