use std::collections::BTreeSet;

/// The unique PDF links gathered across a crawl
///
/// Uniqueness is exact string equality on the resolved URL. Iteration is
/// always in ascending lexicographic order, which is the order the output file
/// uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    links: BTreeSet<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a link, returning false if it was already present
    pub fn insert(&mut self, link: impl Into<String>) -> bool {
        self.links.insert(link.into())
    }

    /// Merges a batch of links, returning how many were new
    pub fn merge<I>(&mut self, links: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        links
            .into_iter()
            .map(|link| self.insert(link))
            .filter(|&added| added)
            .count()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates the links in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(String::as_str)
    }
}
