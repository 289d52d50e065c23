//! Output module for linkrot
//!
//! Builds the final dead-link report from the crawl's classification and
//! renders it for a human (colored terminal output) or a machine (JSON).

mod report;

pub use report::{build_report, render_json, print_report, CrawlReport};
