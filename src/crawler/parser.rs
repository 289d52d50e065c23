//! HTML parser for extracting candidate links
//!
//! Walks every anchor element in the document, in document order, and turns
//! href values into candidate links. Only origin-relative hrefs (leading `/`)
//! are resolved; everything else is passed through verbatim and left for the
//! fetcher to judge. A href that never resolves to a fetchable URL still gets
//! classified - its fetch fails and it lands in the dead-link report.

use scraper::{Html, Selector};

/// Extracts every candidate link from an HTML document
///
/// # Extraction Rules
///
/// For each `<a href="...">` in document order:
/// - an empty href is skipped;
/// - a href starting with `/` is resolved to `base_origin + href`;
/// - any other href (absolute, fragment, mail address) is produced
///   unchanged, with no validation.
///
/// html5ever parses any byte soup, so malformed markup is not an error: it
/// simply yields however many anchors survive the parse.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_origin` - The origin used to resolve origin-relative hrefs
///
/// # Returns
///
/// Candidate links in document order, duplicates preserved.
///
/// # Example
///
/// ```
/// use linkrot::crawler::extract_links;
///
/// let html = r#"<a href="/p1">one</a> <a href="https://other.test/">two</a>"#;
/// let links = extract_links(html, "https://example.com");
/// assert_eq!(links, vec!["https://example.com/p1", "https://other.test/"]);
/// ```
pub fn extract_links(html: &str, base_origin: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(link) = resolve_href(href, base_origin) {
                    links.push(link);
                }
            }
        }
    }

    links
}

/// Resolves a single href value to a candidate link
fn resolve_href(href: &str, base_origin: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }

    if href.starts_with('/') {
        Some(format!("{}{}", base_origin, href))
    } else {
        Some(href.to_string())
    }
}
