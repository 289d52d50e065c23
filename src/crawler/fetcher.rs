//! HTTP fetcher implementation
//!
//! One GET per link, no retries, default redirect handling, default timeout.
//! The body is read even for non-2xx responses so that in-domain error pages
//! can still be mined for further links: reachability classification and
//! link extraction are independent decisions.

use reqwest::Client;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The link answered with a 2xx status
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The link answered, but outside the 200-299 success range
    HttpFailure {
        /// HTTP status code
        status_code: u16,
        /// Whatever body the server returned alongside the error status
        body: String,
    },

    /// The request never produced a response (DNS failure, connection
    /// refused, timeout, invalid URL)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns true if the link counts as reachable
    pub fn is_reachable(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }
}

/// Builds the HTTP client shared by all crawl tasks
///
/// Keeps reqwest's default redirect policy and default (absent) timeout: the
/// crawl policy is a single plain GET per link, with no custom headers,
/// cookies, or authentication.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Fetches a link and classifies the outcome
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `link` - The link to fetch, exactly as discovered
///
/// # Returns
///
/// A [`FetchResult`]; never an error. Transport failures are an outcome, not
/// a fault, because every observed link gets classified one way or the other.
pub async fn fetch_url(client: &Client, link: &str) -> FetchResult {
    let response = match client.get(link).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::NetworkError {
                error: classify_request_error(&e),
            }
        }
    };

    let status_code = response.status().as_u16();
    let success = response.status().is_success();

    // Read the body regardless of status: non-2xx pages still carry links.
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            return FetchResult::NetworkError {
                error: format!("failed to read body: {}", e),
            }
        }
    };

    if success {
        FetchResult::Success { status_code, body }
    } else {
        FetchResult::HttpFailure { status_code, body }
    }
}

/// Maps a reqwest error to a short description for logging
fn classify_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timeout".to_string()
    } else if e.is_connect() {
        "connection failed".to_string()
    } else if e.is_builder() {
        // Unparseable link strings (fragments, mailto:, bare paths) end up
        // here: the GET cannot even be constructed.
        format!("invalid request target: {}", e)
    } else {
        e.to_string()
    }
}
