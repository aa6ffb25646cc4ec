//! Working-directory lookup through the process table.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Resolves the current working directory of a process.
///
/// `None` covers every failure: process gone, permission denied, no procfs.
pub trait CwdResolver {
    fn working_directory(&self, pid: i64) -> Option<PathBuf>;
}

/// Reads `<root>/<pid>/cwd`, normally under `/proc`.
#[derive(Debug, Clone)]
pub struct ProcCwdResolver {
    root: PathBuf,
}

impl ProcCwdResolver {
    pub fn new() -> Self {
        Self::with_root("/proc")
    }

    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl Default for ProcCwdResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CwdResolver for ProcCwdResolver {
    fn working_directory(&self, pid: i64) -> Option<PathBuf> {
        if pid <= 0 {
            return None;
        }
        let link = self.root.join(pid.to_string()).join("cwd");
        match std::fs::read_link(&link) {
            Ok(cwd) => Some(cwd),
            Err(e) => {
                debug!("cannot resolve cwd of pid {pid}: {e}");
                None
            }
        }
    }
}
