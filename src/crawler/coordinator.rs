//! Crawler coordinator - main crawl orchestration logic
//!
//! The run is a single linear sequence:
//! Init → Fetch Sitemap → (Extract Page)* → Write Output → Done.
//!
//! Pages are visited one at a time in sitemap order. A failing page counts as
//! zero links; a failing sitemap fetch or output write ends the run before any
//! output is written.

use crate::config::Config;
use crate::crawler::build_http_client;
use crate::crawler::extractor::extract_pdf_links_from_page;
use crate::crawler::pacer::Pacer;
use crate::crawler::sitemap::fetch_sitemap;
use crate::output::{write_results, CrawlStatistics};
use crate::state::ResultSet;
use crate::CrawlerError;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Instant;

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Counters gathered during the run
    pub statistics: CrawlStatistics,

    /// The deduplicated PDF links that were written
    pub results: ResultSet,

    /// Where the links were written
    pub output_path: PathBuf,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    pacer: Pacer,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlerError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, CrawlerError> {
        let client = build_http_client(&config.user_agent)?;
        let pacer = Pacer::new(config.politeness_delay());

        Ok(Self {
            config,
            client,
            pacer,
        })
    }

    /// Runs the crawl end to end and writes the output file
    pub async fn run(&self) -> Result<CrawlReport, CrawlerError> {
        let mut statistics = CrawlStatistics::new(Utc::now());
        let start_time = Instant::now();

        let page_urls = fetch_sitemap(&self.client, &self.config.sitemap_url).await?;
        statistics.pages_in_sitemap = page_urls.len() as u64;
        tracing::info!("Found {} pages in sitemap", page_urls.len());

        let results = self.crawl_pages(&page_urls, &mut statistics).await;
        statistics.unique_pdfs = results.len() as u64;
        statistics.finished_at = Some(Utc::now());

        tracing::info!(
            "Visited {} pages ({} failed) in {:?}",
            statistics.pages_visited,
            statistics.pages_failed,
            start_time.elapsed()
        );
        tracing::info!("Found {} unique PDFs", statistics.unique_pdfs);

        write_results(&results, &self.config.output_path)?;
        tracing::info!("Saved to {}", self.config.output_path.display());

        Ok(CrawlReport {
            statistics,
            results,
            output_path: self.config.output_path.clone(),
        })
    }

    /// Visits each page in order and merges its links into one result set
    async fn crawl_pages(
        &self,
        page_urls: &[String],
        statistics: &mut CrawlStatistics,
    ) -> ResultSet {
        let mut results = ResultSet::new();
        let timeout = self.config.page_timeout();
        let progress = self.progress_bar(page_urls.len() as u64);
        tracing::debug!(
            "Visiting {} pages with a {:?} pause after each",
            page_urls.len(),
            self.pacer.delay()
        );

        for (index, page_url) in page_urls.iter().enumerate() {
            tracing::trace!("Crawling {}/{}: {}", index + 1, page_urls.len(), page_url);

            let outcome = extract_pdf_links_from_page(&self.client, page_url, timeout).await;
            if outcome.is_failed() {
                statistics.pages_failed += 1;
            }

            let links = outcome.into_links();
            statistics.links_seen += links.len() as u64;
            let added = results.merge(links);
            if added > 0 {
                tracing::debug!("{} new PDF links from {}", added, page_url);
            }

            statistics.pages_visited += 1;
            progress.inc(1);

            self.pacer.pause().await;
        }

        progress.finish_and_clear();
        results
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::with_template(
            "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");

        let bar = ProgressBar::new(total);
        bar.set_style(style);
        bar.set_message("Crawling pages");
        bar
    }
}

/// Runs the main crawl operation
///
/// # Example
///
/// ```no_run
/// use irs_pdf_crawler::config::Config;
/// use irs_pdf_crawler::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(Config::default()).await?;
/// println!("{} unique PDFs", report.results.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport, CrawlerError> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
