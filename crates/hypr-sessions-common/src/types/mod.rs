mod entry;
mod identity;
mod kind;
mod snapshot;

pub use entry::{ClientEntry, ClientEntryRecord};
pub use identity::{identity_key, UNKNOWN_IDENTITY};
pub use kind::WindowKind;
pub use snapshot::{SessionSnapshot, WorkspaceEntry};
