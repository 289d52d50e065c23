//! Dead-link report generation and rendering

use crate::state::LinkRecord;
use colored::Colorize;
use serde::Serialize;
use std::time::Duration;

/// Final crawl report
///
/// In-domain and out-of-domain links are not distinguished: every observed
/// link that answered badly is listed.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// Total number of distinct links observed
    pub total_links: usize,

    /// Links classified dead, sorted
    pub dead_links: Vec<String>,

    /// Wall-clock duration of the crawl in milliseconds
    pub elapsed_ms: u64,
}

/// Builds the report from the final classification
///
/// # Arguments
///
/// * `records` - The visited store's snapshot (already sorted by link)
/// * `elapsed` - Total wall-clock duration of the crawl
pub fn build_report(records: &[LinkRecord], elapsed: Duration) -> CrawlReport {
    let dead_links = records
        .iter()
        .filter(|record| !record.reachable)
        .map(|record| record.link.clone())
        .collect();

    CrawlReport {
        total_links: records.len(),
        dead_links,
        elapsed_ms: elapsed.as_millis() as u64,
    }
}

/// Prints the human-readable report to stdout
///
/// One dead link per line under a banner, then the total elapsed time.
pub fn print_report(report: &CrawlReport) {
    println!();
    println!("+-----{}-----+", " Dead Links ".red());

    if report.dead_links.is_empty() {
        println!("{}", "(none)".green());
    } else {
        for link in &report.dead_links {
            println!("{}", link.yellow());
        }
    }

    println!(
        "{} {:.2?}",
        "Total time:".blue(),
        Duration::from_millis(report.elapsed_ms)
    );
}

/// Renders the report as pretty-printed JSON
pub fn render_json(report: &CrawlReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(link: &str, reachable: bool) -> LinkRecord {
        LinkRecord {
            link: link.to_string(),
            reachable,
        }
    }

    #[test]
    fn test_build_report_counts_all_links() {
        let records = vec![
            record("https://a.test/", true),
            record("https://a.test/p1", true),
            record("https://b.test/", false),
        ];
        let report = build_report(&records, Duration::from_millis(1500));
        assert_eq!(report.total_links, 3);
    }

    #[test]
    fn test_build_report_lists_only_dead_links() {
        let records = vec![
            record("https://a.test/", true),
            record("https://a.test/404", false),
            record("https://b.test/", false),
        ];
        let report = build_report(&records, Duration::from_secs(1));
        assert_eq!(
            report.dead_links,
            vec!["https://a.test/404", "https://b.test/"]
        );
    }

    #[test]
    fn test_build_report_empty_crawl() {
        let report = build_report(&[], Duration::ZERO);
        assert_eq!(report.total_links, 0);
        assert!(report.dead_links.is_empty());
        assert_eq!(report.elapsed_ms, 0);
    }

    #[test]
    fn test_elapsed_converted_to_millis() {
        let report = build_report(&[], Duration::from_secs(2));
        assert_eq!(report.elapsed_ms, 2000);
    }

    #[test]
    fn test_json_shape() {
        let records = vec![
            record("https://a.test/", true),
            record("https://b.test/", false),
        ];
        let report = build_report(&records, Duration::from_millis(42));

        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_links"], 2);
        assert_eq!(value["elapsed_ms"], 42);
        assert_eq!(value["dead_links"][0], "https://b.test/");
    }
}
