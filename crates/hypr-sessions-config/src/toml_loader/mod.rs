//! Command-map file loading.

mod fallback;
mod loader;


pub use loader::{load_from_path, parse_command_map};
