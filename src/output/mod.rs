//! Output module for persisting and reporting crawl results
//!
//! This module handles:
//! - Writing the sorted PDF link list to its text file
//! - Recording and printing crawl statistics

pub mod stats;
mod writer;

pub use stats::{print_statistics, CrawlStatistics};
pub use writer::{format_results, write_results};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
