//! Shared crawl state
//!
//! The visited store is the only state mutated by concurrent crawl tasks.

mod visited;

pub use visited::{LinkRecord, VisitedStore};
