//! HTML parser for extracting PDF links
//!
//! A PDF link is any `<a href>` whose href ends in `.pdf`, compared
//! case-insensitively. Matching links are resolved against the page URL so the
//! result is always absolute.

use scraper::{Html, Selector};
use url::Url;

/// Returns true if the href points at a PDF document
///
/// The raw attribute value is tested, untrimmed, so an href with trailing
/// whitespace after `.pdf` does not match. Leading whitespace is harmless
/// here and is stripped later by URL resolution.
///
/// # Example
///
/// ```
/// use irs_pdf_crawler::crawler::is_pdf_link;
///
/// assert!(is_pdf_link("/pub/irs-pdf/f1040.pdf"));
/// assert!(is_pdf_link("doc.PDF"));
/// assert!(!is_pdf_link("/forms/pdf-viewer"));
/// ```
pub fn is_pdf_link(href: &str) -> bool {
    href.to_ascii_lowercase().ends_with(".pdf")
}

/// Extracts every PDF link from an HTML document
///
/// Links keep document order and may repeat; deduplication happens in the
/// coordinator's result set.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The page URL, used to resolve relative hrefs
///
/// # Example
///
/// ```
/// use irs_pdf_crawler::crawler::extract_pdf_links;
/// use url::Url;
///
/// let html = r#"<a href="/forms/f1040.pdf">1040</a><a href="/about">About</a>"#;
/// let base_url = Url::parse("https://www.irs.gov/forms").unwrap();
/// let links = extract_pdf_links(html, &base_url);
/// assert_eq!(links, vec!["https://www.irs.gov/forms/f1040.pdf"]);
/// ```
pub fn extract_pdf_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if !is_pdf_link(href) {
            continue;
        }

        if let Some(absolute_url) = resolve_link(href, base_url) {
            links.push(absolute_url);
        }
    }

    links
}

/// Resolves a link href to an absolute URL, whatever its scheme
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    match base_url.join(href) {
        Ok(absolute_url) => Some(absolute_url.to_string()),
        Err(e) => {
            tracing::debug!("Skipping {} on {}: {}", href, base_url, e);
            None
        }
    }
}
