use crate::config::SiteConfig;
use url::Url;

/// Scope rules a crawl applies to every discovered link
///
/// Built once from the configuration, then consulted for every candidate
/// URL the parser discovers.
#[derive(Debug, Clone)]
pub struct ScopeRules {
    /// String form of the base URL; candidates must start with this
    base: String,

    /// Path prefixes that are in scope but must not be crawled
    exclude_paths: Vec<String>,

    /// Substrings marking non-document resources (archives, binaries)
    skip_substrings: Vec<String>,
}

impl ScopeRules {
    /// Creates scope rules from the parsed base URL and site configuration
    pub fn new(base_url: &Url, site: &SiteConfig) -> Self {
        Self {
            base: base_url.as_str().to_string(),
            exclude_paths: site.exclude_paths.clone(),
            skip_substrings: site.skip_substrings.clone(),
        }
    }

    /// Returns the base URL string candidates are matched against
    pub fn base(&self) -> &str {
        &self.base
    }
}

/// Verdict for one discovered link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkVerdict {
    /// Link is a new in-scope document; the URL is fragment-stripped
    Accept(Url),

    /// Link leaves the configured site (external domain, mailto, tel, ...)
    OutOfScope,

    /// Link is in scope but under an excluded path prefix
    ExcludedPath,

    /// Link is an anchor into the page it was found on
    SamePageAnchor,

    /// Link points at a non-document resource
    NonDocument,
}

impl LinkVerdict {
    /// Returns true if the link should be crawled
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept(_))
    }
}

/// Classifies a discovered link against the crawl's scope rules
///
/// The candidate must already be resolved to absolute form (relative and
/// root-relative hrefs are resolved against the base URL at discovery
/// time, so by this point an in-scope link always starts with the base
/// URL string). Checks are applied in order:
///
/// 1. Scope: the candidate's string form must start with the base URL
/// 2. Excluded paths: the candidate's path must not start with a
///    configured excluded prefix
/// 3. Same-page anchor: a fragment-carrying candidate whose
///    fragment-stripped form equals the current page's fragment-stripped
///    URL is not a navigation
/// 4. Non-document: the candidate must not contain a configured skip
///    substring
///
/// Accepted candidates come back with their fragment stripped; fragments
/// carry no server-side content distinction.
///
/// # Arguments
///
/// * `candidate` - The absolute URL to classify
/// * `page_url` - The URL of the page the link was found on
/// * `rules` - The crawl's scope rules
pub fn classify_link(candidate: &Url, page_url: &Url, rules: &ScopeRules) -> LinkVerdict {
    if !candidate.as_str().starts_with(&rules.base) {
        return LinkVerdict::OutOfScope;
    }

    if rules
        .exclude_paths
        .iter()
        .any(|prefix| candidate.path().starts_with(prefix.as_str()))
    {
        return LinkVerdict::ExcludedPath;
    }

    let stripped = strip_fragment(candidate);

    if candidate.fragment().is_some() && stripped == strip_fragment(page_url) {
        return LinkVerdict::SamePageAnchor;
    }

    if rules
        .skip_substrings
        .iter()
        .any(|marker| candidate.as_str().contains(marker.as_str()))
    {
        return LinkVerdict::NonDocument;
    }

    LinkVerdict::Accept(stripped)
}

/// Returns a copy of the URL with its fragment removed
pub fn strip_fragment(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_fragment(None);
    stripped
}
