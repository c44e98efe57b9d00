//! irs-pdf-crawler: a one-shot PDF link harvester
//!
//! This crate fetches a sitemap, visits every page it lists, collects the
//! hyperlinks that point at PDF documents and writes the deduplicated, sorted
//! list to a flat text file.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for crawler operations
///
/// Every variant is fatal to a run. Per-page failures never surface here;
/// they are reported through [`state::PageOutcome`] instead.
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Failed to parse sitemap {url}: {source}")]
    Sitemap { url: String, source: SitemapError },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Sitemap document errors
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Unsupported or invalid encoding: {0}")]
    Encoding(String),

    #[error("Document ended with {0} unclosed element(s)")]
    UnexpectedEof(usize),

    #[error("Document has no root element")]
    NoRoot,

    #[error("Content outside the root element")]
    StrayContent,
}

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, Coordinator, CrawlReport};
pub use state::{PageOutcome, ResultSet};
