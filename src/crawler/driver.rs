//! Crawl driver - traversal order, link filtering, and accounting
//!
//! The driver owns the visited set and an explicit LIFO work list. The
//! traversal is depth-first: a page's accepted links are pushed in
//! reverse document order, so the first link on a page is the next URL
//! processed. Using a work list instead of call-stack recursion means
//! stack depth never limits site size, and the visited set guarantees no
//! URL is processed twice regardless of order.

use crate::config::Config;
use crate::crawler::processor::PageProcessor;
use crate::output::CrawlSummary;
use crate::state::{PageOutcome, SkipReason, VisitedSet};
use crate::url::{classify_link, strip_fragment, LinkVerdict, ScopeRules};
use crate::CrawlError;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

/// Main crawler structure
#[derive(Debug)]
pub struct Crawler {
    base_url: Url,
    rules: ScopeRules,
    processor: PageProcessor,
    visited: VisitedSet,
    output_dir: PathBuf,
    max_pages: Option<usize>,
}

impl Crawler {
    /// Creates a crawler from the validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(CrawlError)` - Base URL failed to parse or the HTTP client
    ///   could not be built
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        let base_url = Url::parse(&config.site.base_url).map_err(|e| CrawlError::BaseUrl {
            url: config.site.base_url.clone(),
            source: e,
        })?;

        let rules = ScopeRules::new(&base_url, &config.site);
        let processor = PageProcessor::new(&config, base_url.clone())?;

        Ok(Self {
            base_url,
            rules,
            processor,
            visited: VisitedSet::new(),
            output_dir: PathBuf::from(&config.output.directory),
            max_pages: config.fetch.max_pages,
        })
    }

    /// Runs the crawl to completion
    ///
    /// Creates the output directory, seeds the work list with the base
    /// URL, and processes URLs until none remain (or the configured page
    /// limit is reached). Failing to create the output directory is the
    /// only fatal error past this point; every per-page failure is
    /// tallied and the crawl continues.
    pub async fn run(&mut self) -> Result<CrawlSummary, CrawlError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| CrawlError::OutputDir {
            path: self.output_dir.display().to_string(),
            source: e,
        })?;

        tracing::info!("Starting crawl of {}", self.base_url);

        let start_time = Instant::now();
        let mut summary = CrawlSummary::new();
        let mut work_list = vec![strip_fragment(&self.base_url)];

        while let Some(url) = work_list.pop() {
            // A URL can sit in the work list more than once when several
            // pages link to it; later copies are dropped here.
            if self.visited.contains(&url) {
                continue;
            }

            if let Some(limit) = self.max_pages {
                if summary.pages_visited >= limit {
                    summary.queued_remaining = work_list.len() + 1;
                    tracing::info!(
                        "Page limit of {} reached, {} queued URLs left",
                        limit,
                        summary.queued_remaining
                    );
                    break;
                }
            }

            match self.processor.process(&url, &mut self.visited).await {
                PageOutcome::Saved { links, .. } => {
                    summary.pages_visited += 1;
                    summary.pages_saved += 1;

                    // Reverse push keeps document order under LIFO popping
                    for link in self.accept_links(&links, &url).into_iter().rev() {
                        work_list.push(link);
                    }
                }
                PageOutcome::Skipped(SkipReason::AlreadyVisited) => {}
                PageOutcome::Skipped(SkipReason::Fetch(_))
                | PageOutcome::Skipped(SkipReason::HttpStatus(_)) => {
                    summary.pages_visited += 1;
                    summary.fetch_failures += 1;
                }
                PageOutcome::Skipped(SkipReason::NoContent) => {
                    summary.pages_visited += 1;
                    summary.extraction_misses += 1;
                }
                PageOutcome::Skipped(SkipReason::Failed(_)) => {
                    summary.pages_visited += 1;
                    summary.unexpected_failures += 1;
                }
            }
        }

        summary.elapsed = start_time.elapsed();

        tracing::info!(
            "Crawl completed: {} pages visited, {} saved in {:?}",
            summary.pages_visited,
            summary.pages_saved,
            summary.elapsed
        );

        Ok(summary)
    }

    /// Filters one page's discovered links down to crawlable URLs
    ///
    /// Runs each link through the classifier, drops already-visited
    /// targets, and deduplicates within the page (two fragment variants
    /// of the same target collapse to one entry). Document order is
    /// preserved.
    fn accept_links(&self, links: &[Url], page_url: &Url) -> Vec<Url> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut accepted = Vec::new();

        for link in links {
            match classify_link(link, page_url, &self.rules) {
                LinkVerdict::Accept(target) => {
                    if !self.visited.contains(&target) && seen.insert(target.as_str().to_string())
                    {
                        accepted.push(target);
                    }
                }
                verdict => {
                    tracing::trace!("Rejected link {} ({:?})", link, verdict);
                }
            }
        }

        accepted
    }
}
