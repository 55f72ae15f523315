use std::collections::HashSet;
use url::Url;

/// Tracks which URLs have already been dispatched to the page processor
///
/// URLs are stored in absolute, fragment-stripped string form. A URL is
/// marked exactly once, before its fetch is attempted, which is what
/// guarantees termination over cyclic link graphs: a page reachable via
/// two different links during its own processing is never reprocessed.
///
/// The set grows monotonically for the lifetime of a crawl and is never
/// persisted across runs.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates an empty visited set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the URL has already been dispatched
    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url.as_str())
    }

    /// Marks a URL as visited
    ///
    /// Returns `true` if the URL was new, `false` if it had been marked
    /// before. The membership test and the insertion are a single call so
    /// callers cannot forget one half of the guard.
    pub fn mark(&mut self, url: &Url) -> bool {
        self.urls.insert(url.as_str().to_string())
    }

    /// Number of URLs dispatched so far
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if nothing has been visited yet
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert_eq!(visited.len(), 0);
    }

    #[test]
    fn test_mark_new_url() {
        let mut visited = VisitedSet::new();
        assert!(visited.mark(&url("https://example.com/page")));
        assert!(visited.contains(&url("https://example.com/page")));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut visited = VisitedSet::new();
        assert!(visited.mark(&url("https://example.com/page")));
        assert!(!visited.mark(&url("https://example.com/page")));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_urls_are_distinct() {
        let mut visited = VisitedSet::new();
        visited.mark(&url("https://example.com/a"));
        assert!(!visited.contains(&url("https://example.com/b")));
    }
}
