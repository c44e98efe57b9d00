//! Configuration module for the PDF crawler
//!
//! Every run-wide constant (sitemap endpoint, politeness delay, page timeout,
//! output path) lives in [`Config`]. The defaults reproduce the built-in
//! crawl; a TOML file can override any of them.
//!
//! # Example
//!
//! ```no_run
//! use irs_pdf_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Sitemap: {}", config.sitemap_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DEFAULT_OUTPUT_PATH, DEFAULT_PAGE_TIMEOUT_SECS, DEFAULT_POLITENESS_DELAY_MS,
    DEFAULT_SITEMAP_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_with_hash};
pub use validation::validate;
