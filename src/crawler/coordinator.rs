//! Crawler coordinator - the concurrent discovery engine
//!
//! This module contains the dispatch loop and the per-link crawl tasks:
//! - seeding and draining the frontier queue
//! - claiming links so each is fetched at most once
//! - fanning out one task per claimed link
//! - detecting quiescence so the crawl ends without sleep heuristics
//!
//! Termination works through the frontier channel itself: every queued entry
//! and every live crawl task holds a sender clone, the dispatcher holds none,
//! and a task finishes all of its pushes before its clone drops. The channel
//! therefore closes exactly when no task is running and nothing is buffered,
//! and `recv()` returning `None` is the quiescence observation.

use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::parser::extract_links;
use crate::state::{LinkRecord, VisitedStore};
use crate::url::{origin_of, same_origin};
use crate::CrawlError;
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use url::Url;

/// Buffered capacity of the frontier queue
///
/// A producer blocks briefly when a burst of discoveries exceeds it. The
/// dispatcher always drains, so bounded blocking affects throughput only,
/// never correctness.
const FRONTIER_CAPACITY: usize = 1024;

/// A link discovered during the crawl, with its hold on the frontier
struct Discovered {
    link: String,
    frontier: mpsc::Sender<Discovered>,
}

/// Final state of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// Classification of every link observed, sorted by link
    pub records: Vec<LinkRecord>,

    /// Total wall-clock duration of the crawl
    pub elapsed: Duration,
}

impl CrawlSummary {
    /// Returns the links classified dead, in sorted order
    pub fn dead_links(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| !record.reachable)
            .map(|record| record.link.clone())
            .collect()
    }
}

/// Main crawler coordinator structure
///
/// Owns the crawl session: the seed, the origin that scopes the crawl, the
/// shared HTTP client, the visited store, and the outstanding-worker gauge.
pub struct Coordinator {
    seed: String,
    origin: String,
    client: Client,
    store: Arc<VisitedStore>,
    in_flight: Arc<AtomicUsize>,
}

impl Coordinator {
    /// Creates a new coordinator for the given seed URL
    ///
    /// # Arguments
    ///
    /// * `seed` - The absolute URL the crawl starts from
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Seed validated, HTTP client built
    /// * `Err(CrawlError)` - Unparseable seed, hostless seed, or client
    ///   construction failure
    pub fn new(seed: &str) -> Result<Self, CrawlError> {
        let seed_url = Url::parse(seed).map_err(|source| CrawlError::InvalidSeed {
            url: seed.to_string(),
            source,
        })?;

        // The origin doubles as dedup scope and relative-link base, so a
        // seed without one cannot anchor a crawl.
        let origin =
            origin_of(&seed_url).ok_or_else(|| CrawlError::MissingOrigin(seed.to_string()))?;

        let client = build_http_client()?;

        Ok(Self {
            seed: seed.to_string(),
            origin,
            client,
            store: Arc::new(VisitedStore::new()),
            in_flight: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Runs the crawl to completion
    ///
    /// This is the dispatch loop:
    /// 1. Seed the frontier with the starting URL
    /// 2. Receive one discovered link at a time
    /// 3. Claim it; duplicates are dropped here, in one place
    /// 4. Spawn a crawl task for every claimed link
    /// 5. Exit when the frontier closes at quiescence
    pub async fn run(&self) -> CrawlSummary {
        let started = Instant::now();
        tracing::info!("starting crawl of {} (origin {})", self.seed, self.origin);

        let (tx, mut rx) = mpsc::channel(FRONTIER_CAPACITY);

        // The receiver is alive in this scope, so the seed send cannot fail.
        tx.send(Discovered {
            link: self.seed.clone(),
            frontier: tx.clone(),
        })
        .await
        .expect("frontier receiver is alive");

        // The dispatcher keeps no sender of its own: once the seed message
        // and every task spawned from it are gone, recv() returns None.
        drop(tx);

        let mut dispatched: u64 = 0;
        while let Some(Discovered { link, frontier }) = rx.recv().await {
            if !self.store.claim(&link) {
                // Already claimed; dropping `frontier` releases this
                // entry's hold on the queue.
                continue;
            }

            dispatched += 1;
            self.in_flight.fetch_add(1, Ordering::SeqCst);

            let task = CrawlTask {
                link,
                origin: self.origin.clone(),
                client: self.client.clone(),
                store: Arc::clone(&self.store),
                in_flight: Arc::clone(&self.in_flight),
            };
            tokio::spawn(task.run(frontier));

            if dispatched % 25 == 0 {
                tracing::info!(
                    "progress: {} links claimed, {} workers in flight",
                    dispatched,
                    self.in_flight.load(Ordering::SeqCst)
                );
            }
        }

        let elapsed = started.elapsed();
        let records = self.store.snapshot();
        tracing::info!(
            "crawl complete: {} links classified in {:.2?}",
            records.len(),
            elapsed
        );

        CrawlSummary { records, elapsed }
    }
}

/// One unit of concurrent work: fetch, classify, extract
struct CrawlTask {
    link: String,
    origin: String,
    client: Client,
    store: Arc<VisitedStore>,
    in_flight: Arc<AtomicUsize>,
}

impl CrawlTask {
    /// Processes one claimed link
    ///
    /// `frontier` is this task's hold on the queue. It drops only at the end
    /// of this method, after every push has completed, so the dispatcher can
    /// never observe quiescence while a discovery is still on its way.
    async fn run(self, frontier: mpsc::Sender<Discovered>) {
        tracing::info!("scraping {}", self.link);

        match fetch_url(&self.client, &self.link).await {
            FetchResult::NetworkError { error } => {
                tracing::info!("dead link {} ({})", self.link, error);
                self.store.mark_dead(&self.link);
            }
            FetchResult::Success { body, .. } => {
                self.push_discoveries(&body, &frontier).await;
            }
            FetchResult::HttpFailure { status_code, body } => {
                tracing::info!("dead link {} (HTTP {})", self.link, status_code);
                self.store.mark_dead(&self.link);
                // Dead, but its body may still reference pages worth
                // checking: classification and extraction are independent.
                self.push_discoveries(&body, &frontier).await;
            }
        }

        // Strictly after the pushes above, matching the causal contract.
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    /// Extracts candidate links from an in-domain body into the frontier
    async fn push_discoveries(&self, body: &str, frontier: &mpsc::Sender<Discovered>) {
        // Out-of-domain pages are leaves: classified, never parsed.
        if !same_origin(&self.link, &self.origin) {
            return;
        }

        let links = extract_links(body, &self.origin);
        tracing::debug!("{} candidate links on {}", links.len(), self.link);

        for link in links {
            let message = Discovered {
                link,
                frontier: frontier.clone(),
            };
            if frontier.send(message).await.is_err() {
                // Unreachable while this task holds a sender clone.
                tracing::warn!("frontier closed while pushing discoveries");
                return;
            }
        }
    }
}

/// Runs a complete crawl for the given seed URL
///
/// # Arguments
///
/// * `seed` - The absolute URL the crawl starts from
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Classification of every observed link plus elapsed
///   wall-clock time
/// * `Err(CrawlError)` - The seed could not anchor a crawl
pub async fn run_crawl(seed: &str) -> Result<CrawlSummary, CrawlError> {
    let coordinator = Coordinator::new(seed)?;
    Ok(coordinator.run().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_unparseable_seed() {
        let result = Coordinator::new("not a url");
        assert!(matches!(result, Err(CrawlError::InvalidSeed { .. })));
    }

    #[test]
    fn test_new_rejects_hostless_seed() {
        let result = Coordinator::new("mailto:test@example.com");
        assert!(matches!(result, Err(CrawlError::MissingOrigin(_))));
    }

    #[test]
    fn test_new_accepts_http_seed() {
        assert!(Coordinator::new("http://127.0.0.1:4545/").is_ok());
    }

    #[test]
    fn test_dead_links_filters_and_keeps_order() {
        let summary = CrawlSummary {
            records: vec![
                LinkRecord {
                    link: "https://a.test/alive".to_string(),
                    reachable: true,
                },
                LinkRecord {
                    link: "https://a.test/gone".to_string(),
                    reachable: false,
                },
                LinkRecord {
                    link: "https://b.test/".to_string(),
                    reachable: false,
                },
            ],
            elapsed: Duration::from_millis(5),
        };

        assert_eq!(
            summary.dead_links(),
            vec!["https://a.test/gone", "https://b.test/"]
        );
    }
}
