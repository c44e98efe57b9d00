/// Result of visiting a single page
///
/// A page visit never aborts the crawl. Fetch and decode failures are carried
/// as `Failed` and the coordinator counts them as zero links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was fetched and parsed; holds resolved PDF links in document order
    Links(Vec<String>),

    /// The page could not be fetched or decoded
    Failed {
        /// The page URL as listed in the sitemap
        url: String,
        /// Human-readable failure reason
        reason: String,
    },
}

impl PageOutcome {
    /// Returns true if the page visit failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Consumes the outcome, yielding the links found (empty for a failure)
    pub fn into_links(self) -> Vec<String> {
        match self {
            Self::Links(links) => links,
            Self::Failed { .. } => Vec::new(),
        }
    }
}
