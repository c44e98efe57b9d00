use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Sitemap crawled when no override is configured
pub const DEFAULT_SITEMAP_URL: &str = "https://www.irs.gov/sitemap.xml";

/// Fixed pause after each page (milliseconds)
pub const DEFAULT_POLITENESS_DELAY_MS: u64 = 200;

/// Upper bound on a single page fetch (seconds)
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 10;

/// Where the harvested links are written
pub const DEFAULT_OUTPUT_PATH: &str = "output/irs_pdf_links.txt";

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("irs-pdf-crawler/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure
///
/// All keys are optional in the TOML form; missing keys take the defaults
/// above, so an empty file is equivalent to [`Config::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sitemap document listing the pages to visit
    #[serde(rename = "sitemap-url")]
    pub sitemap_url: String,

    /// Pause after each page fetch (milliseconds)
    #[serde(rename = "politeness-delay-ms")]
    pub politeness_delay_ms: u64,

    /// Timeout applied to each page fetch (seconds)
    #[serde(rename = "page-timeout-secs")]
    pub page_timeout_secs: u64,

    /// Output file for the sorted PDF link list
    #[serde(rename = "output-path")]
    pub output_path: PathBuf,

    /// User agent string for HTTP requests
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whether to draw a progress bar while crawling
    #[serde(rename = "show-progress")]
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sitemap_url: DEFAULT_SITEMAP_URL.to_string(),
            politeness_delay_ms: DEFAULT_POLITENESS_DELAY_MS,
            page_timeout_secs: DEFAULT_PAGE_TIMEOUT_SECS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            show_progress: true,
        }
    }
}

impl Config {
    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }
}
