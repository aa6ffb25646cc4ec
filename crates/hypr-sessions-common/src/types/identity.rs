//! Identity keys used to pair saved entries with live windows.

/// Fallback key for windows that expose neither an app-id nor a class.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// First non-empty candidate, or [`UNKNOWN_IDENTITY`].
///
/// Saved entries pass `[app_id, class]`; live windows pass
/// `[app_id, class, initial_class]`.
pub fn identity_key<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> &'a str {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_IDENTITY)
}
