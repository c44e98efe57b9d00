//! Sitemap fetching and parsing
//!
//! Pages to visit come from the `<loc>` elements of a sitemaps.org document.
//! Only elements bound to the sitemap namespace count. Any failure here is
//! fatal to the run: there is no partial page list.

use crate::crawler::fetcher::fetch_document;
use crate::{CrawlerError, SitemapError};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::{NsReader, Reader};
use reqwest::Client;

/// Namespace of the sitemaps.org protocol
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Fetches a sitemap and returns its page URLs in document order
///
/// No timeout is applied to this request.
pub async fn fetch_sitemap(
    client: &Client,
    sitemap_url: &str,
) -> Result<Vec<String>, CrawlerError> {
    tracing::info!("Fetching sitemap {}", sitemap_url);

    let body = fetch_document(client, sitemap_url).await?;
    let urls = decode_sitemap(&body)
        .and_then(|xml| parse_sitemap(&xml))
        .map_err(|source| CrawlerError::Sitemap {
            url: sitemap_url.to_string(),
            source,
        })?;

    tracing::debug!("Sitemap {} lists {} URLs", sitemap_url, urls.len());
    Ok(urls)
}

/// Decodes raw sitemap bytes into text
///
/// A byte order mark wins; otherwise the `encoding` of the XML declaration
/// is used, defaulting to UTF-8. UTF-8, US-ASCII, ISO-8859-1 and UTF-16 are
/// understood. Any other declared encoding is an error rather than a guess.
pub fn decode_sitemap(bytes: &[u8]) -> Result<String, SitemapError> {
    if let Some(rest) = bytes.strip_prefix(b"\xEF\xBB\xBF") {
        return decode_utf8(rest);
    }
    if let Some(rest) = bytes.strip_prefix(b"\xFF\xFE") {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(b"\xFE\xFF") {
        return decode_utf16(rest, u16::from_be_bytes);
    }

    match declared_encoding(bytes)?.as_deref() {
        None | Some("utf-8") | Some("utf8") => decode_utf8(bytes),
        Some("us-ascii") | Some("ascii") if bytes.is_ascii() => decode_utf8(bytes),
        Some("us-ascii") | Some("ascii") => Err(SitemapError::Encoding(
            "non-ASCII byte in a US-ASCII document".to_string(),
        )),
        Some("iso-8859-1") | Some("latin1") | Some("latin-1") => {
            Ok(bytes.iter().map(|&b| char::from(b)).collect())
        }
        Some(other) => Err(SitemapError::Encoding(format!(
            "unsupported declared encoding '{}'",
            other
        ))),
    }
}

/// Reads the `encoding` pseudo-attribute of a leading XML declaration
fn declared_encoding(bytes: &[u8]) -> Result<Option<String>, SitemapError> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    match reader.read_event_into(&mut buf) {
        Ok(Event::Decl(decl)) => match decl.encoding() {
            Some(Ok(label)) => Ok(Some(
                String::from_utf8_lossy(&label).trim().to_ascii_lowercase(),
            )),
            Some(Err(e)) => Err(SitemapError::Xml(e.into())),
            None => Ok(None),
        },
        // Anything else is left for the parser to accept or reject
        _ => Ok(None),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, SitemapError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| SitemapError::Encoding(e.to_string()))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, SitemapError> {
    if bytes.len() % 2 != 0 {
        return Err(SitemapError::Encoding(
            "odd byte count in a UTF-16 document".to_string(),
        ));
    }

    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| SitemapError::Encoding(e.to_string()))
}

/// Parses a sitemap document into the text of its `<loc>` elements
///
/// Text is trimmed; an empty `<loc>` still yields an (empty) entry so the
/// result has exactly one item per element. The document must hold exactly
/// one root element: a second root, or text outside the root, is an error.
///
/// # Example
///
/// ```
/// use irs_pdf_crawler::crawler::parse_sitemap;
///
/// let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://www.irs.gov/forms</loc></url>
/// </urlset>"#;
/// assert_eq!(parse_sitemap(xml).unwrap(), vec!["https://www.irs.gov/forms"]);
/// ```
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>, SitemapError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut current: Option<String> = None;
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut root_closed = false;

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) => {
                if root_closed {
                    return Err(SitemapError::StrayContent);
                }
                depth += 1;
                saw_root = true;
                if is_loc(&ns, e.local_name().as_ref()) {
                    current = Some(String::new());
                }
            }
            (ns, Event::Empty(e)) => {
                if root_closed {
                    return Err(SitemapError::StrayContent);
                }
                saw_root = true;
                if depth == 0 {
                    root_closed = true;
                }
                if is_loc(&ns, e.local_name().as_ref()) {
                    urls.push(String::new());
                }
            }
            (_, Event::Text(e)) => {
                if depth == 0 {
                    if e.iter().all(|b| b.is_ascii_whitespace()) {
                        continue;
                    }
                    return Err(SitemapError::StrayContent);
                }
                if let Some(text) = current.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            (_, Event::CData(e)) => {
                if depth == 0 {
                    return Err(SitemapError::StrayContent);
                }
                if let Some(text) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            (ns, Event::End(e)) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
                if is_loc(&ns, e.local_name().as_ref()) {
                    if let Some(text) = current.take() {
                        urls.push(text.trim().to_string());
                    }
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    if depth > 0 {
        return Err(SitemapError::UnexpectedEof(depth));
    }
    if !saw_root {
        return Err(SitemapError::NoRoot);
    }

    Ok(urls)
}

fn is_loc(ns: &ResolveResult, local_name: &[u8]) -> bool {
    local_name == b"loc"
        && matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == SITEMAP_NAMESPACE.as_bytes())
}
