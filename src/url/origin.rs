use url::{Origin, Url};

/// Extracts the origin (scheme + host + port) from a URL
///
/// Default ports are elided, so `https://example.com:443/x` and
/// `https://example.com/x` produce the same origin string. URLs without a
/// host (`mailto:`, `data:`, and other opaque-origin schemes) return None.
///
/// # Arguments
///
/// * `url` - The URL to extract the origin from
///
/// # Returns
///
/// * `Some(String)` - The origin, e.g. `https://example.com`
/// * `None` - If the URL has no host-based origin
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkrot::url::origin_of;
///
/// let url = Url::parse("https://example.com/path?q=1").unwrap();
/// assert_eq!(origin_of(&url), Some("https://example.com".to_string()));
///
/// let url = Url::parse("http://example.com:8080/").unwrap();
/// assert_eq!(origin_of(&url), Some("http://example.com:8080".to_string()));
/// ```
pub fn origin_of(url: &Url) -> Option<String> {
    match url.origin() {
        origin @ Origin::Tuple(..) => Some(origin.ascii_serialization()),
        Origin::Opaque(_) => None,
    }
}

/// Checks whether a link string belongs to the given origin
///
/// The link is parsed and its origin compared against `origin` for exact
/// equality. Links that fail to parse (fragments, scheme-less paths, mail
/// addresses) are never in-domain: their fetch decides their reachability,
/// but nothing is ever extracted from them.
///
/// # Arguments
///
/// * `link` - The candidate link string
/// * `origin` - The session origin to compare against
///
/// # Examples
///
/// ```
/// use linkrot::url::same_origin;
///
/// assert!(same_origin("https://example.com/page", "https://example.com"));
/// assert!(!same_origin("https://other.test/page", "https://example.com"));
/// assert!(!same_origin("#fragment", "https://example.com"));
/// ```
pub fn same_origin(link: &str, origin: &str) -> bool {
    match Url::parse(link) {
        Ok(url) => origin_of(&url).as_deref() == Some(origin),
        Err(_) => false,
    }
}
