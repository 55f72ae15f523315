//! Page processor - fetch, extract, convert, persist
//!
//! The processor owns the full lifecycle of a single URL: the visited
//! guard, the fetch, content extraction, Markdown conversion, frontmatter
//! composition, cleanup, and the file write. Every failure along the way
//! is contained to the URL being processed and reported as a
//! [`SkipReason`].

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::crawler::parser::extract_page;
use crate::output::{clean_markdown, compile_rules, derive_title, write_document};
use crate::output::{CleanupRule, PageDocument};
use crate::state::{PageOutcome, SkipReason, VisitedSet};
use crate::url::{derive_filename, path_key};
use crate::{ConfigError, CrawlError};
use reqwest::Client;
use scraper::Selector;
use std::path::PathBuf;
use url::Url;

/// Processes single URLs into output files
#[derive(Debug)]
pub struct PageProcessor {
    client: Client,
    base_url: Url,
    selectors: Vec<Selector>,
    cleanup_rules: Vec<CleanupRule>,
    source_library: String,
    output_dir: PathBuf,
}

impl PageProcessor {
    /// Creates a processor from the validated configuration
    ///
    /// Compiles the content selectors and cleanup rules once; the
    /// validation pass has already checked them, so failures here mean
    /// the configuration was constructed without going through
    /// [`crate::config::load_config`].
    pub fn new(config: &Config, base_url: Url) -> Result<Self, CrawlError> {
        let client = build_http_client(&config.fetch)?;

        let selectors = config
            .content
            .selectors
            .iter()
            .map(|s| {
                Selector::parse(s)
                    .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", s, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cleanup_rules = compile_rules(&config.content.cleanup)?;

        Ok(Self {
            client,
            base_url,
            selectors,
            cleanup_rules,
            source_library: config.site.source_library.clone(),
            output_dir: PathBuf::from(&config.output.directory),
        })
    }

    /// Processes one URL
    ///
    /// # Processing Steps
    ///
    /// 1. Guard: mark the URL visited; bail out if it already was
    /// 2. Fetch the page with the configured timeout
    /// 3. Extract the content region (first matching selector wins)
    /// 4. Convert the region's HTML to Markdown
    /// 5. Build frontmatter metadata and clean the body
    /// 6. Write `<output-dir>/<derived filename>`, overwriting
    ///
    /// On success the page's outbound links ride back in
    /// [`PageOutcome::Saved`] for the driver to classify.
    ///
    /// # Arguments
    ///
    /// * `url` - The fragment-stripped URL to process
    /// * `visited` - The crawl's visited set; marked before any fetch
    pub async fn process(&self, url: &Url, visited: &mut VisitedSet) -> PageOutcome {
        // The guard must be set before any other work so a page reachable
        // via two links during its own processing is not reprocessed.
        if !visited.mark(url) {
            return PageOutcome::Skipped(SkipReason::AlreadyVisited);
        }

        tracing::info!("Processing: {}", url);

        let body = match fetch_page(&self.client, url).await {
            FetchResult::Success { body } => body,
            FetchResult::HttpError { status_code } => {
                tracing::error!("Failed to fetch {} with status {}", url, status_code);
                return PageOutcome::Skipped(SkipReason::HttpStatus(status_code));
            }
            FetchResult::NetworkError { error } => {
                tracing::error!("Error fetching {}: {}", url, error);
                return PageOutcome::Skipped(SkipReason::Fetch(error));
            }
        };

        let page = extract_page(&body, &self.selectors, &self.base_url);

        let content_html = match page.content_html {
            Some(html) => html,
            None => {
                tracing::warn!("Could not find content in {}, skipping", url);
                return PageOutcome::Skipped(SkipReason::NoContent);
            }
        };

        let markdown = html2md::parse_html(&content_html);
        let cleaned = clean_markdown(&markdown, &self.cleanup_rules);

        let document = PageDocument {
            title: derive_title(page.title.as_deref()),
            source_url: url.to_string(),
            source_library: self.source_library.clone(),
            path_key: path_key(url.path()),
            body: cleaned,
        };

        let file_name = derive_filename(url.path());

        match write_document(&self.output_dir, &file_name, &document.render()) {
            Ok(()) => {
                tracing::info!("Saved: {}", file_name);
                PageOutcome::Saved {
                    file_name,
                    links: page.links,
                }
            }
            Err(e) => {
                tracing::error!("Failed to write {}: {}", file_name, e);
                PageOutcome::Skipped(SkipReason::Failed(format!(
                    "write error for {}: {}",
                    file_name, e
                )))
            }
        }
    }
}
