//! Crawler module for sitemap-driven PDF link harvesting
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching (sitemap and pages)
//! - Sitemap parsing
//! - HTML parsing and PDF link extraction
//! - Politeness pacing between pages
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod pacer;
mod parser;
mod sitemap;

pub use coordinator::{run_crawl, Coordinator, CrawlReport};
pub use extractor::extract_pdf_links_from_page;
pub use fetcher::{build_http_client, fetch_document, fetch_url, FetchResult};
pub use pacer::Pacer;
pub use parser::{extract_pdf_links, is_pdf_link};
pub use sitemap::{decode_sitemap, fetch_sitemap, parse_sitemap, SITEMAP_NAMESPACE};
