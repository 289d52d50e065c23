//! Crawler module for link discovery and classification
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and reachability classification
//! - HTML parsing and link extraction
//! - The concurrent dispatch loop and termination detection

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator, CrawlSummary};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use parser::extract_links;

use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It validates the seed,
/// walks every same-origin page reachable from it, classifies every observed
/// link, and returns the final classification with the elapsed time.
///
/// # Arguments
///
/// * `seed` - The absolute URL the crawl starts from
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed
/// * `Err(CrawlError)` - The seed could not anchor a crawl
pub async fn crawl(seed: &str) -> Result<CrawlSummary, CrawlError> {
    run_crawl(seed).await
}
