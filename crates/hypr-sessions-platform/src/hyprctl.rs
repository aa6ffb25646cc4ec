//! Hyprland WindowManager implementation using the `hyprctl` binary.

use std::ffi::OsString;
use std::process::{Command, Output};

use hypr_sessions_common::PlatformError;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::{Dispatch, RawClient, RawWorkspace, Result, WindowManager};

const DEFAULT_BINARY: &str = "hyprctl";

/// Shells out to `hyprctl -j <query>` and `hyprctl dispatch <verb> ...`.
#[derive(Debug, Clone)]
pub struct HyprctlWindowManager {
    binary: OsString,
}

impl HyprctlWindowManager {
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    pub fn with_binary(binary: impl Into<OsString>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run(&self, args: &[String]) -> Result<Output> {
        let command = self.describe(args);
        trace!("running {command}");
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| PlatformError::Spawn(format!("{command}: {e}")))?;

        if !output.status.success() {
            return Err(PlatformError::CommandFailed {
                command,
                status: output.status.to_string(),
            });
        }
        Ok(output)
    }

    fn query<T: DeserializeOwned>(&self, what: &str) -> Result<T> {
        let output = self.run(&["-j".to_string(), what.to_string()])?;
        serde_json::from_slice(&output.stdout)
            .map_err(|e| PlatformError::InvalidResponse(format!("hyprctl -j {what}: {e}")))
    }

    fn describe(&self, args: &[String]) -> String {
        let mut parts = vec![self.binary.to_string_lossy().into_owned()];
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }
}

impl Default for HyprctlWindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager for HyprctlWindowManager {
    fn clients(&self) -> Result<Vec<RawClient>> {
        self.query("clients")
    }

    fn workspaces(&self) -> Result<Vec<RawWorkspace>> {
        self.query("workspaces")
    }

    fn dispatch(&self, dispatch: &Dispatch) -> Result<()> {
        let mut args = vec!["dispatch".to_string()];
        args.extend(dispatch.args());
        let output = self.run(&args)?;
        // hyprctl reports rejected dispatches on stdout with a zero exit code
        let reply = String::from_utf8_lossy(&output.stdout);
        trace!("dispatch {dispatch}: {}", reply.trim());
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn fake_hyprctl(dir: &Path, script: &str) -> HyprctlWindowManager {
        let path = dir.join("hyprctl");
        std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        HyprctlWindowManager::with_binary(path)
    }

    #[test]
    fn missing_binary_is_spawn_error() {
        let wm = HyprctlWindowManager::with_binary("/nonexistent/hyprctl");
        let err = wm.clients().unwrap_err();
        assert!(matches!(err, PlatformError::Spawn(_)));
    }

    #[test]
    fn parses_clients_from_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let wm = fake_hyprctl(
            dir.path(),
            r#"echo '[{"address":"0x1","class":"foot","title":"t","workspace":{"id":2,"name":"2"}}]'"#,
        );
        let clients = wm.clients().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].class, "foot");
        assert_eq!(clients[0].workspace_id(), Some(2));
    }

    #[test]
    fn garbage_output_is_invalid_response() {
        // `echo -j workspaces` prints its arguments back
        let wm = HyprctlWindowManager::with_binary("echo");
        let err = wm.workspaces().unwrap_err();
        assert!(matches!(err, PlatformError::InvalidResponse(_)));
    }

    #[test]
    fn nonzero_exit_is_command_failed() {
        let wm = HyprctlWindowManager::with_binary("false");
        let err = wm.dispatch(&Dispatch::ToggleFloating).unwrap_err();
        assert!(matches!(err, PlatformError::CommandFailed { .. }));
    }

    #[test]
    fn dispatch_passes_verb_and_args() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("args.log");
        let wm = fake_hyprctl(dir.path(), &format!("echo \"$@\" > {}", log.display()));
        wm.dispatch(&Dispatch::MoveToWorkspaceSilent(5)).unwrap();
        let logged = std::fs::read_to_string(&log).unwrap();
        assert_eq!(logged.trim(), "dispatch movetoworkspacesilent 5");
    }
}
