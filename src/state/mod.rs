//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageOutcome`: What a single page visit produced (links or a failure reason)
//! - `ResultSet`: The deduplicated PDF links accumulated across the whole crawl

mod page_outcome;
mod result_set;

// Re-export main types
pub use page_outcome::PageOutcome;
pub use result_set::ResultSet;
