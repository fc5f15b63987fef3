//! Once-per-day submission gate.
//!
//! The marker lives in the browser's own storage, so clearing site data or
//! switching devices resets the window. That is the intended scope of this
//! limiter: it trims casual duplicates, it is not server-side enforcement.

use crate::lead::store::KeyValueStore;

pub const LAST_SUBMISSION_KEY: &str = "eurolink_last_submission";
pub const RESUBMIT_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Outcome of the pre-submission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allowed,
    Denied { retry_in_ms: i64 },
}

/// Synchronous, read-only check. No marker, or a marker that does not parse
/// as a timestamp, counts as never-submitted. The window reopens at exactly
/// 24 hours after the last successful submission.
pub fn check<S: KeyValueStore>(store: &S, now_ms: i64) -> Gate {
    let marker = match store
        .get(LAST_SUBMISSION_KEY)
        .and_then(|v| v.parse::<i64>().ok())
    {
        Some(ms) => ms,
        None => return Gate::Allowed,
    };
    let elapsed = now_ms - marker;
    if elapsed < RESUBMIT_WINDOW_MS {
        Gate::Denied {
            retry_in_ms: RESUBMIT_WINDOW_MS - elapsed,
        }
    } else {
        Gate::Allowed
    }
}

/// Called only after a successful insert. Failed attempts never extend the
/// window.
pub fn record_submission<S: KeyValueStore>(store: &S, now_ms: i64) {
    store.set(LAST_SUBMISSION_KEY, &now_ms.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::store::MemoryStore;

    #[test]
    fn first_ever_attempt_is_allowed() {
        let store = MemoryStore::new();
        assert_eq!(check(&store, 1_000), Gate::Allowed);
    }

    #[test]
    fn window_is_inclusive_at_exactly_24_hours() {
        let store = MemoryStore::new();
        let submitted_at = 1_700_000_000_000;
        record_submission(&store, submitted_at);

        assert_eq!(
            check(&store, submitted_at + RESUBMIT_WINDOW_MS - 1),
            Gate::Denied { retry_in_ms: 1 }
        );
        assert_eq!(check(&store, submitted_at + RESUBMIT_WINDOW_MS), Gate::Allowed);
    }

    #[test]
    fn denied_reports_time_until_window_reopens() {
        let store = MemoryStore::new();
        record_submission(&store, 0);

        let one_hour = 60 * 60 * 1000;
        assert_eq!(
            check(&store, one_hour),
            Gate::Denied {
                retry_in_ms: RESUBMIT_WINDOW_MS - one_hour
            }
        );
    }

    #[test]
    fn unparseable_marker_counts_as_absent() {
        let store = MemoryStore::new();
        store.set(LAST_SUBMISSION_KEY, "not-a-timestamp");
        assert_eq!(check(&store, 5), Gate::Allowed);
    }

    #[test]
    fn record_overwrites_the_marker() {
        let store = MemoryStore::new();
        record_submission(&store, 100);
        record_submission(&store, 9_000);
        assert_eq!(store.get(LAST_SUBMISSION_KEY).as_deref(), Some("9000"));
    }
}
