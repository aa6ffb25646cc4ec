//! No-op WindowManager implementation.
//!
//! Used on platforms without a supported compositor.

use tracing::debug;

use crate::{Dispatch, RawClient, RawWorkspace, Result, WindowManager};

/// Reports no windows and accepts every dispatch.
pub struct NoopWindowManager;

impl WindowManager for NoopWindowManager {
    fn clients(&self) -> Result<Vec<RawClient>> {
        Ok(Vec::new())
    }

    fn workspaces(&self) -> Result<Vec<RawWorkspace>> {
        Ok(Vec::new())
    }

    fn dispatch(&self, dispatch: &Dispatch) -> Result<()> {
        debug!("noop window manager ignoring dispatch: {dispatch}");
        Ok(())
    }
}
