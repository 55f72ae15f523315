//! HTML parsing for title, content region, and link discovery
//!
//! The fetched document is parsed once; everything the processor needs
//! comes out in a single pass:
//! - the `<title>` text (raw, before any trimming of site suffixes)
//! - the content region matched by the configured selectors
//! - every `<a href>` resolved to an absolute URL

use scraper::{Html, Selector};
use url::Url;

/// Everything extracted from one fetched document
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Raw text of the `<title>` element, if present
    pub title: Option<String>,

    /// Serialized HTML of the content region, if any selector matched
    pub content_html: Option<String>,

    /// Outbound links resolved to absolute form (fragments intact,
    /// classification happens later)
    pub links: Vec<Url>,
}

/// Parses a fetched document and extracts title, content, and links
///
/// The content selectors are tried in order; the first selector with a
/// match wins, and the first matching element's outer HTML is taken as
/// the content region.
///
/// Hrefs are resolved against the configured base URL, so root-relative
/// links land inside the site. Hrefs that fail to resolve are dropped,
/// never fatal.
///
/// # Arguments
///
/// * `html` - The fetched HTML document
/// * `selectors` - Content-region selectors, in priority order
/// * `base_url` - The configured base URL for resolving relative links
pub fn extract_page(html: &str, selectors: &[Selector], base_url: &Url) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        title: extract_title(&document),
        content_html: extract_content(&document, selectors),
        links: extract_links(&document, base_url),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Finds the content region designated by the configured selectors
fn extract_content(document: &Html, selectors: &[Selector]) -> Option<String> {
    for selector in selectors {
        if let Some(element) = document.select(selector).next() {
            return Some(element.html());
        }
    }
    None
}

/// Extracts all hyperlinks from the HTML document
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - empty or fragment-only hrefs
/// - javascript:, mailto:, tel: schemes and data: URIs
/// - hrefs that fail to resolve
/// - non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url)
            } else {
                None
            }
        }
        Err(e) => {
            tracing::debug!("Failed to resolve href '{}': {}", href, e);
            None
        }
    }
}
