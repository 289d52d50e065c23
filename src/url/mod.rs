//! URL handling for linkrot
//!
//! This module provides origin extraction and origin comparison. The origin
//! (scheme + host + port) is the crawl's domain-scoping boundary and the base
//! against which origin-relative hrefs are resolved.

mod origin;

pub use origin::{origin_of, same_origin};
