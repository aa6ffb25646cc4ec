//! Dispatch verbs understood by the compositor.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Run a shell command in the compositor's environment.
    Exec(String),
    FocusWindow { address: String },
    /// Move the focused window without following it.
    MoveToWorkspaceSilent(u32),
    /// Toggle floating on the focused window.
    ToggleFloating,
    ResizeWindowExact { width: i32, height: i32 },
    MoveWindowExact { x: i32, y: i32 },
}

impl Dispatch {
    /// Arguments following `hyprctl dispatch`.
    pub fn args(&self) -> Vec<String> {
        match self {
            Dispatch::Exec(cmd) => vec!["exec".into(), "--".into(), cmd.clone()],
            Dispatch::FocusWindow { address } => {
                vec!["focuswindow".into(), format!("address:{address}")]
            }
            Dispatch::MoveToWorkspaceSilent(ws) => {
                vec!["movetoworkspacesilent".into(), ws.to_string()]
            }
            Dispatch::ToggleFloating => vec!["togglefloating".into()],
            Dispatch::ResizeWindowExact { width, height } => vec![
                "resizewindowpixel".into(),
                "exact".into(),
                width.to_string(),
                height.to_string(),
            ],
            Dispatch::MoveWindowExact { x, y } => vec![
                "movewindowpixel".into(),
                "exact".into(),
                x.to_string(),
                y.to_string(),
            ],
        }
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}
