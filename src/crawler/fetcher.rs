//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the shared HTTP client
//! - Fetching the sitemap (fatal on failure, no timeout)
//! - Fetching pages with a bounded timeout and error classification
//!
//! No request is ever retried.

use crate::CrawlerError;
use reqwest::Client;
use std::time::Duration;

/// Result of a page fetch
#[derive(Debug)]
pub enum FetchResult {
    /// A response body arrived
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Response body
        body: String,
    },

    /// Network error (connection refused, timeout, body decode, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by the sitemap and page fetches
///
/// The client itself carries no overall timeout; page fetches apply their
/// own per-request bound and the sitemap fetch waits indefinitely.
///
/// # Example
///
/// ```no_run
/// use irs_pdf_crawler::crawler::build_http_client;
///
/// let client = build_http_client("irs-pdf-crawler/1.0").unwrap();
/// ```
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a raw document body, failing on network errors or a non-success status
///
/// Used for the sitemap, where any failure ends the run. The body is returned
/// undecoded since XML documents declare their own encoding.
pub async fn fetch_document(client: &Client, url: &str) -> Result<Vec<u8>, CrawlerError> {
    let http_error = |source: reqwest::Error| CrawlerError::Http {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(http_error)?;

    let body = response.bytes().await.map_err(http_error)?;
    Ok(body.to_vec())
}

/// Fetches a page with the given timeout
///
/// The status code is reported but not judged: any body that arrives is
/// returned as `Success`. Only transport-level failures produce
/// `NetworkError`.
pub async fn fetch_url(client: &Client, url: &str, timeout: Duration) -> FetchResult {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::NetworkError {
                error: classify_error(&e),
            }
        }
    };

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code,
            body,
        },
        Err(e) => FetchResult::NetworkError {
            error: format!("Failed to read body: {}", classify_error(&e)),
        },
    }
}

fn classify_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    }
}
