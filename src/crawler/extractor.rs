//! Per-page PDF link extraction
//!
//! Combines the fetcher and the HTML parser into a best-effort operation:
//! whatever goes wrong with one page is reported as a [`PageOutcome::Failed`]
//! and never propagates.

use crate::crawler::fetcher::{fetch_url, FetchResult};
use crate::crawler::parser::extract_pdf_links;
use crate::state::PageOutcome;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Downloads a page and returns the PDF links it contains
///
/// Relative hrefs are resolved against `page_url` itself, not against the
/// final URL after redirects. No retry is attempted.
pub async fn extract_pdf_links_from_page(
    client: &Client,
    page_url: &str,
    timeout: Duration,
) -> PageOutcome {
    let base_url = match Url::parse(page_url) {
        Ok(url) => url,
        Err(e) => return failed(page_url, format!("Invalid page URL: {}", e)),
    };

    match fetch_url(client, base_url.as_str(), timeout).await {
        FetchResult::Success {
            final_url,
            status_code,
            body,
        } => {
            let links = extract_pdf_links(&body, &base_url);
            tracing::debug!(
                "Fetched {} (status {}, final URL {}): {} PDF links",
                page_url,
                status_code,
                final_url,
                links.len()
            );
            PageOutcome::Links(links)
        }
        FetchResult::NetworkError { error } => failed(page_url, error),
    }
}

fn failed(page_url: &str, reason: String) -> PageOutcome {
    tracing::warn!("Error fetching {}: {}", page_url, reason);
    PageOutcome::Failed {
        url: page_url.to_string(),
        reason,
    }
}
