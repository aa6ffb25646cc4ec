use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic kind of a saved window.
///
/// Serialized as `"application"`, `"browser"`, `"terminal"`, or `"pwa"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    #[default]
    Application,
    Browser,
    Terminal,
    #[serde(rename = "pwa")]
    WebApp,
}

impl WindowKind {
    pub const ALL: [WindowKind; 4] = [
        WindowKind::WebApp,
        WindowKind::Browser,
        WindowKind::Terminal,
        WindowKind::Application,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WindowKind::Application => "application",
            WindowKind::Browser => "browser",
            WindowKind::Terminal => "terminal",
            WindowKind::WebApp => "pwa",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
