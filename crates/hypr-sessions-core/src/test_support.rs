//! Fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

use hypr_sessions_common::{ClientEntry, ClientEntryRecord, PlatformError, WindowKind};
use hypr_sessions_platform::{
    CwdResolver, Dispatch, RawClient, RawWorkspace, RawWorkspaceRef, Result, WindowManager,
};

/// Serves scripted client lists and records every dispatch.
///
/// Each `clients()` call pops the next scripted list; the last one repeats.
#[derive(Default)]
pub struct FakeWindowManager {
    pub polls: RefCell<Vec<Vec<RawClient>>>,
    pub workspaces: Vec<RawWorkspace>,
    pub dispatched: RefCell<Vec<Dispatch>>,
    pub fail_dispatch: bool,
    pub fail_queries: bool,
    pub queries: Cell<usize>,
}

impl FakeWindowManager {
    pub fn with_clients(clients: Vec<RawClient>) -> Self {
        Self {
            polls: RefCell::new(vec![clients]),
            ..Default::default()
        }
    }

    pub fn with_polls(polls: Vec<Vec<RawClient>>) -> Self {
        Self {
            polls: RefCell::new(polls),
            ..Default::default()
        }
    }

    pub fn dispatched(&self) -> Vec<Dispatch> {
        self.dispatched.borrow().clone()
    }

    pub fn execs(&self) -> Vec<String> {
        self.dispatched()
            .into_iter()
            .filter_map(|d| match d {
                Dispatch::Exec(cmd) => Some(cmd),
                _ => None,
            })
            .collect()
    }
}

impl WindowManager for FakeWindowManager {
    fn clients(&self) -> Result<Vec<RawClient>> {
        self.queries.set(self.queries.get() + 1);
        if self.fail_queries {
            return Err(PlatformError::Spawn("hyprctl: not found".into()));
        }
        let mut polls = self.polls.borrow_mut();
        if polls.len() > 1 {
            Ok(polls.remove(0))
        } else {
            Ok(polls.first().cloned().unwrap_or_default())
        }
    }

    fn workspaces(&self) -> Result<Vec<RawWorkspace>> {
        if self.fail_queries {
            return Err(PlatformError::Spawn("hyprctl: not found".into()));
        }
        Ok(self.workspaces.clone())
    }

    fn dispatch(&self, dispatch: &Dispatch) -> Result<()> {
        self.dispatched.borrow_mut().push(dispatch.clone());
        if self.fail_dispatch {
            return Err(PlatformError::CommandFailed {
                command: format!("hyprctl dispatch {dispatch}"),
                status: "exit status: 1".into(),
            });
        }
        Ok(())
    }
}

/// Fixed pid → cwd table.
#[derive(Default)]
pub struct FakeCwd(pub HashMap<i64, PathBuf>);

impl FakeCwd {
    pub fn with(pid: i64, cwd: &str) -> Self {
        Self(HashMap::from([(pid, PathBuf::from(cwd))]))
    }
}

impl CwdResolver for FakeCwd {
    fn working_directory(&self, pid: i64) -> Option<PathBuf> {
        self.0.get(&pid).cloned()
    }
}

pub fn raw_client(address: &str, class: &str, title: &str) -> RawClient {
    RawClient {
        address: address.into(),
        class: class.into(),
        initial_class: class.into(),
        title: title.into(),
        at: Some(vec![0, 0]),
        size: Some(vec![800, 600]),
        monitor: Some(0),
        workspace: Some(RawWorkspaceRef {
            id: 1,
            name: "1".into(),
        }),
        ..Default::default()
    }
}

pub fn entry(kind: WindowKind, class: &str, title: &str, floating: bool) -> ClientEntry {
    ClientEntry::try_from(ClientEntryRecord {
        class: class.into(),
        title: title.into(),
        workspace: 1,
        floating,
        at: vec![0, 0],
        size: vec![800, 600],
        monitor: 0,
        kind,
        pwa_key: (kind == WindowKind::WebApp).then(|| class.to_lowercase()),
        ..Default::default()
    })
    .unwrap()
}
