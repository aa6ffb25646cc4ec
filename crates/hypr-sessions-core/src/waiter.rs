//! Poll the compositor until relaunched windows show up.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use hypr_sessions_common::ClientEntry;
use hypr_sessions_platform::{RawClient, WindowManager};
use tracing::{debug, info, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    pub deadline: Instant,
    pub poll_interval: Duration,
}

/// Windows wanted per identity key.
fn wanted_counts(entries: &[ClientEntry]) -> HashMap<&str, usize> {
    let mut wanted = HashMap::new();
    for entry in entries {
        *wanted.entry(entry.identity_key()).or_insert(0) += 1;
    }
    wanted
}

fn is_satisfied(wanted: &HashMap<&str, usize>, observed: &[RawClient]) -> bool {
    let mut got: HashMap<&str, usize> = HashMap::new();
    for client in observed {
        *got.entry(client.identity_key()).or_insert(0) += 1;
    }
    wanted
        .iter()
        .all(|(key, want)| got.get(key).copied().unwrap_or(0) >= *want)
}

/// Poll until every identity has at least as many live windows as
/// `entries` asks for, or the deadline passes.
///
/// Satisfaction is by count only. Returns the last observed list either
/// way; a failed query counts as an empty list.
pub fn wait_for_windows(
    entries: &[ClientEntry],
    wm: &dyn WindowManager,
    options: &WaitOptions,
) -> Vec<RawClient> {
    let wanted = wanted_counts(entries);

    loop {
        let observed = wm.clients().unwrap_or_else(|e| {
            debug!("client query failed while waiting: {e}");
            Vec::new()
        });

        if is_satisfied(&wanted, &observed) {
            info!("all {} expected windows present", entries.len());
            return observed;
        }

        let now = Instant::now();
        if now >= options.deadline {
            warn!("timed out waiting for windows; placing what is present");
            return observed;
        }
        std::thread::sleep(options.poll_interval.min(options.deadline - now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry, raw_client, FakeWindowManager};
    use hypr_sessions_common::WindowKind;

    fn options(timeout_ms: u64) -> WaitOptions {
        WaitOptions {
            deadline: Instant::now() + Duration::from_millis(timeout_ms),
            poll_interval: Duration::from_millis(10),
        }
    }

    #[test]
    fn returns_as_soon_as_satisfied() {
        let wm = FakeWindowManager::with_clients(vec![raw_client("0x1", "foo", "x")]);
        let entries = vec![entry(WindowKind::Application, "foo", "x", false)];

        let started = Instant::now();
        let observed = wait_for_windows(&entries, &wm, &options(5_000));
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(observed.len(), 1);
        assert_eq!(wm.queries.get(), 1);
    }

    #[test]
    fn keeps_polling_until_windows_appear() {
        let wm = FakeWindowManager::with_polls(vec![
            vec![],
            vec![raw_client("0x1", "foo", "a")],
            vec![raw_client("0x1", "foo", "a"), raw_client("0x2", "foo", "b")],
        ]);
        let entries = vec![
            entry(WindowKind::Application, "foo", "a", false),
            entry(WindowKind::Application, "foo", "b", false),
        ];

        let observed = wait_for_windows(&entries, &wm, &options(5_000));
        assert_eq!(observed.len(), 2);
        assert_eq!(wm.queries.get(), 3);
    }

    #[test]
    fn gives_up_at_deadline() {
        let wm = FakeWindowManager::with_clients(vec![raw_client("0x1", "bar", "x")]);
        let entries = vec![entry(WindowKind::Application, "foo", "x", false)];

        let started = Instant::now();
        let observed = wait_for_windows(&entries, &wm, &options(50));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_secs(2));
        assert_eq!(observed.len(), 1);
    }

    #[test]
    fn query_failures_count_as_no_windows() {
        let wm = FakeWindowManager {
            fail_queries: true,
            ..Default::default()
        };
        let entries = vec![entry(WindowKind::Application, "foo", "x", false)];
        let observed = wait_for_windows(&entries, &wm, &options(30));
        assert!(observed.is_empty());
        assert!(wm.queries.get() >= 2);
    }

    #[test]
    fn counts_windows_per_identity() {
        let entries = vec![
            entry(WindowKind::Application, "foo", "a", false),
            entry(WindowKind::Application, "foo", "b", false),
            entry(WindowKind::Application, "bar", "c", false),
        ];
        let wanted = wanted_counts(&entries);
        assert_eq!(wanted["foo"], 2);
        assert_eq!(wanted["bar"], 1);

        let observed = vec![raw_client("0x1", "foo", ""), raw_client("0x2", "bar", "")];
        assert!(!is_satisfied(&wanted, &observed));
    }

    #[test]
    fn nothing_wanted_is_satisfied_immediately() {
        let wm = FakeWindowManager::default();
        let observed = wait_for_windows(&[], &wm, &options(5_000));
        assert!(observed.is_empty());
        assert_eq!(wm.queries.get(), 1);
    }
}
