//! Linkrot: a same-origin dead-link crawler
//!
//! This crate crawls a website starting from a seed URL, concurrently follows
//! every link that shares the seed's origin, and classifies every link it
//! observes as reachable or dead based on the HTTP response received.

pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for linkrot operations
///
/// Only crawl setup can fail. Per-link failures during the crawl are
/// reachability classifications, not errors.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid seed URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        source: ::url::ParseError,
    },

    #[error("seed URL '{0}' has no host to scope the crawl to")]
    MissingOrigin(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Result type alias for linkrot operations
pub type Result<T> = std::result::Result<T, CrawlError>;

// Re-export commonly used types
pub use crawler::{crawl, CrawlSummary};
pub use output::CrawlReport;
pub use state::{LinkRecord, VisitedStore};
pub use url::{origin_of, same_origin};
