//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with a bounded per-request timeout
//! - HTML parsing: title, content region, link discovery
//! - Per-page processing (fetch, extract, convert, clean, persist)
//! - The crawl driver with its explicit depth-first work list

mod driver;
mod fetcher;
mod parser;
mod processor;

pub use driver::Crawler;
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use parser::{extract_page, ExtractedPage};
pub use processor::PageProcessor;

use crate::config::Config;
use crate::output::CrawlSummary;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the crawler (HTTP client, selectors, cleanup rules)
/// 2. Create the output directory
/// 3. Walk the site depth-first from the base URL
/// 4. Write one Markdown file per successfully processed page
///
/// # Arguments
///
/// * `config` - The validated crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed; counters for the run
/// * `Err(CrawlError)` - Startup failed before any fetch
pub async fn crawl(config: Config) -> Result<CrawlSummary, CrawlError> {
    let mut crawler = Crawler::new(config)?;
    crawler.run().await
}
