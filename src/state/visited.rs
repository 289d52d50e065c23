//! Visited store - the deduplication ledger
//!
//! Maps every link ever observed to its reachability classification and
//! guarantees each distinct link is scheduled for fetching at most once.
//! All mutation goes through one mutex so that two workers can never both
//! claim the same link.

use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

/// A link and its final reachability classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// The absolute link string, exactly as discovered
    pub link: String,

    /// Whether the link answered with a 2xx status
    pub reachable: bool,
}

/// Deduplication ledger shared by all crawl tasks
///
/// Links are compared by exact string identity: no normalization of trailing
/// slashes, query order, or case is performed, so `https://a.test` and
/// `https://a.test/` are two distinct entries.
#[derive(Debug, Default)]
pub struct VisitedStore {
    links: Mutex<HashMap<String, bool>>,
}

impl VisitedStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims a link for fetching
    ///
    /// If the link has never been seen, it is inserted with default
    /// reachability `true` and the caller must schedule work for it. If it
    /// was already claimed by any worker, the caller must drop it.
    ///
    /// # Returns
    ///
    /// * `true` - First observation; the caller now owns the fetch
    /// * `false` - Already seen; a fetch is running or finished elsewhere
    pub fn claim(&self, link: &str) -> bool {
        let mut links = self.links.lock().unwrap();
        match links.entry(link.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(true);
                true
            }
        }
    }

    /// Marks a claimed link as dead
    ///
    /// Safe to call multiple times. Callers claim before they classify, so
    /// the entry is always present.
    pub fn mark_dead(&self, link: &str) {
        let mut links = self.links.lock().unwrap();
        links.insert(link.to_string(), false);
    }

    /// Returns the number of links observed so far
    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    /// Returns true if no link has been observed yet
    pub fn is_empty(&self) -> bool {
        self.links.lock().unwrap().is_empty()
    }

    /// Returns the final classification of every observed link
    ///
    /// Records are sorted by link for deterministic output. Only meaningful
    /// once the crawl has terminated and no task is still classifying.
    pub fn snapshot(&self) -> Vec<LinkRecord> {
        let links = self.links.lock().unwrap();
        let mut records: Vec<LinkRecord> = links
            .iter()
            .map(|(link, reachable)| LinkRecord {
                link: link.clone(),
                reachable: *reachable,
            })
            .collect();
        records.sort_by(|a, b| a.link.cmp(&b.link));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_claim_first_time_returns_true() {
        let store = VisitedStore::new();
        assert!(store.claim("https://example.com/"));
    }

    #[test]
    fn test_claim_second_time_returns_false() {
        let store = VisitedStore::new();
        assert!(store.claim("https://example.com/"));
        assert!(!store.claim("https://example.com/"));
        assert!(!store.claim("https://example.com/"));
    }

    #[test]
    fn test_distinct_links_claim_independently() {
        let store = VisitedStore::new();
        assert!(store.claim("https://example.com/a"));
        assert!(store.claim("https://example.com/b"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_no_normalization_trailing_slash_is_distinct() {
        let store = VisitedStore::new();
        assert!(store.claim("https://example.com"));
        assert!(store.claim("https://example.com/"));
    }

    #[test]
    fn test_claimed_link_defaults_reachable() {
        let store = VisitedStore::new();
        store.claim("https://example.com/");
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].reachable);
    }

    #[test]
    fn test_mark_dead() {
        let store = VisitedStore::new();
        store.claim("https://example.com/gone");
        store.mark_dead("https://example.com/gone");
        let snapshot = store.snapshot();
        assert!(!snapshot[0].reachable);
    }

    #[test]
    fn test_mark_dead_is_idempotent() {
        let store = VisitedStore::new();
        store.claim("https://example.com/gone");
        store.mark_dead("https://example.com/gone");
        store.mark_dead("https://example.com/gone");
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot[0].reachable);
    }

    #[test]
    fn test_mark_dead_does_not_unclaim() {
        let store = VisitedStore::new();
        store.claim("https://example.com/gone");
        store.mark_dead("https://example.com/gone");
        assert!(!store.claim("https://example.com/gone"));
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let store = VisitedStore::new();
        store.claim("https://example.com/c");
        store.claim("https://example.com/a");
        store.claim("https://example.com/b");
        let links: Vec<String> = store.snapshot().into_iter().map(|r| r.link).collect();
        assert_eq!(
            links,
            vec![
                "https://example.com/a",
                "https://example.com/b",
                "https://example.com/c"
            ]
        );
    }

    #[tokio::test]
    async fn test_concurrent_claim_is_exclusive() {
        let store = Arc::new(VisitedStore::new());

        let mut handles = Vec::new();
        for _ in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.claim("https://example.com/contested")
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1, "exactly one claimant may win");
        assert_eq!(store.len(), 1);
    }
}
