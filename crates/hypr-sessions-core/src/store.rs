//! Session file persistence.

use std::path::Path;

use hypr_sessions_common::{SessionError, SessionSnapshot};
use tracing::{debug, info};

/// Load and validate a saved session.
///
/// Any entry that breaks the [`ClientEntry`] invariants makes the whole
/// file malformed. A file with no clients is [`SessionError::Empty`].
///
/// [`ClientEntry`]: hypr_sessions_common::ClientEntry
pub fn read_snapshot(path: &Path) -> Result<SessionSnapshot, SessionError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SessionError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(SessionError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let snapshot: SessionSnapshot =
        serde_json::from_str(&content).map_err(|e| SessionError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if snapshot.clients.is_empty() {
        return Err(SessionError::Empty(path.to_path_buf()));
    }

    debug!(
        "loaded {} clients from {}",
        snapshot.clients.len(),
        path.display()
    );
    Ok(snapshot)
}

/// Pretty-print `snapshot` to `path`, creating parent directories.
pub fn write_snapshot(path: &Path, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
    let mut json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| SessionError::Serialize(e.to_string()))?;
    json.push('\n');

    let write_err = |source| SessionError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, json).map_err(write_err)?;

    info!(
        "saved {} clients to {}",
        snapshot.clients.len(),
        path.display()
    );
    Ok(())
}
