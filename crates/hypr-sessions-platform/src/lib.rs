//! Window-manager and process-table access.
//!
//! Everything that talks to the compositor or inspects other processes sits
//! behind a trait here so the session logic can run against fakes.

pub mod dispatch;
pub mod hyprctl;
pub mod noop;
pub mod procfs;
pub mod types;

use hypr_sessions_common::PlatformError;

pub use dispatch::Dispatch;
pub use hyprctl::HyprctlWindowManager;
pub use noop::NoopWindowManager;
pub use procfs::{CwdResolver, ProcCwdResolver};
pub use types::{RawClient, RawWorkspace, RawWorkspaceRef};

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Narrow query/command interface to the compositor.
///
/// Dispatches are fire-and-forget: `Ok(())` means the request was handed
/// over, not that the compositor acted on it.
pub trait WindowManager {
    /// All current client windows.
    fn clients(&self) -> Result<Vec<RawClient>>;

    /// All current workspaces.
    fn workspaces(&self) -> Result<Vec<RawWorkspace>>;

    fn dispatch(&self, dispatch: &Dispatch) -> Result<()>;
}

/// Create the platform-appropriate WindowManager.
///
/// On Linux: talks to Hyprland through `hyprctl`.
/// On other platforms: returns a no-op implementation.
pub fn create_window_manager() -> Box<dyn WindowManager> {
    #[cfg(target_os = "linux")]
    {
        Box::new(HyprctlWindowManager::new())
    }
    #[cfg(not(target_os = "linux"))]
    {
        Box::new(NoopWindowManager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_manager_is_usable_as_trait_object() {
        let wm: Box<dyn WindowManager> = Box::new(NoopWindowManager);
        assert!(wm.clients().unwrap().is_empty());
        assert!(wm.dispatch(&Dispatch::ToggleFloating).is_ok());
    }
}
