//! End-of-run summary reporting

use std::time::Duration;

/// Counters accumulated over one crawl run
///
/// Every URL handed to the page processor lands in exactly one of the
/// outcome counters; `pages_visited` is their sum.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// URLs dispatched to the page processor
    pub pages_visited: usize,

    /// Pages converted and written to disk
    pub pages_saved: usize,

    /// Network errors and non-success HTTP statuses
    pub fetch_failures: usize,

    /// Pages where no content selector matched
    pub extraction_misses: usize,

    /// Any other per-page failure (file writes, mostly)
    pub unexpected_failures: usize,

    /// URLs still queued when the page limit stopped the crawl
    pub queued_remaining: usize,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl CrawlSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of pages that produced no output file
    pub fn total_failures(&self) -> usize {
        self.fetch_failures + self.extraction_misses + self.unexpected_failures
    }
}

/// Prints the completion summary to stdout
pub fn print_summary(summary: &CrawlSummary) {
    println!("\n=== Crawl Complete ===\n");
    println!("Pages visited:     {}", summary.pages_visited);
    println!("Pages saved:       {}", summary.pages_saved);
    println!("Fetch failures:    {}", summary.fetch_failures);
    println!("Extraction misses: {}", summary.extraction_misses);

    if summary.unexpected_failures > 0 {
        println!("Other failures:    {}", summary.unexpected_failures);
    }

    if summary.queued_remaining > 0 {
        println!(
            "Queued URLs left when the page limit was reached: {}",
            summary.queued_remaining
        );
    }

    println!("Elapsed: {:.2}s", summary.elapsed.as_secs_f64());
}
