pub mod errors;
pub mod types;

pub use errors::{ConfigError, EntryError, HyprSessionsError, PlatformError, SessionError};
pub use types::{
    identity_key, ClientEntry, ClientEntryRecord, SessionSnapshot, WindowKind, WorkspaceEntry,
    UNKNOWN_IDENTITY,
};

pub type Result<T> = std::result::Result<T, HyprSessionsError>;
