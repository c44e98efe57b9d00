//! Crawl statistics
//!
//! Counters gathered by the coordinator during a run and the console summary
//! printed at the end of it.

use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Number of `<loc>` entries in the sitemap
    pub pages_in_sitemap: u64,

    /// Number of pages visited (successful or not)
    pub pages_visited: u64,

    /// Number of page visits that failed
    pub pages_failed: u64,

    /// PDF links seen across all pages, duplicates included
    pub links_seen: u64,

    /// Size of the final result set
    pub unique_pdfs: u64,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the crawl loop finished
    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlStatistics {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            pages_in_sitemap: 0,
            pages_visited: 0,
            pages_failed: 0,
            links_seen: 0,
            unique_pdfs: 0,
            started_at,
            finished_at: None,
        }
    }

    /// Elapsed seconds between start and finish, if finished
    pub fn duration_seconds(&self) -> Option<u64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds().max(0) as u64)
    }

    /// Percentage of visited pages that were fetched successfully
    pub fn success_rate(&self) -> f64 {
        if self.pages_visited == 0 {
            return 0.0;
        }
        let succeeded = self.pages_visited - self.pages_failed;
        (succeeded as f64 / self.pages_visited as f64) * 100.0
    }
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &CrawlStatistics) {
    println!();
    println!("Visited {} pages.", stats.pages_visited);
    println!("Found {} unique PDFs.", stats.unique_pdfs);

    if stats.pages_failed > 0 {
        println!(
            "{} of {} pages failed ({:.1}% success rate)",
            stats.pages_failed,
            stats.pages_visited,
            stats.success_rate()
        );
    }

    if let Some(duration) = stats.duration_seconds() {
        println!(
            "Duration: {} seconds ({:.2} minutes)",
            duration,
            duration as f64 / 60.0
        );
    }
}
