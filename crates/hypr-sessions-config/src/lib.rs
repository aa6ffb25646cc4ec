//! Command-map configuration for hypr-sessions.
//!
//! The command map tells `restore` how to relaunch each saved window. It
//! lives in a small TOML file edited by hand:
//!
//! ```toml
//! [apps]
//! foot = "foot --working-directory {cwd}"
//! "org.gnome.Nautilus" = "nautilus"
//!
//! [pwa]
//! github = "chromium --app=https://github.com"
//!
//! # flat fallbacks, keyed by class or app-id
//! firefox = "firefox"
//! ```
//!
//! The file is read fresh on every invocation and never written by this
//! program.

pub mod command_map;
pub mod paths;
pub mod toml_loader;

pub use command_map::CommandMap;
pub use paths::{default_command_map_path, default_session_path};
pub use toml_loader::{load_from_path, parse_command_map};
