//! Docmirror: a documentation site to Markdown mirror
//!
//! This crate implements a sequential crawler that walks a documentation
//! website, extracts the main article content from each page, converts it
//! to Markdown, and writes one annotated file per page to a local directory.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Fatal errors that abort a crawl before or at startup
///
/// Everything that can go wrong while processing a single page is handled
/// at the per-URL level (see [`state::SkipReason`]) and never surfaces here.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: String,
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid content selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid cleanup pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Crawler;
pub use output::CrawlSummary;
pub use state::{PageOutcome, SkipReason, VisitedSet};
pub use url::{classify_link, derive_filename, path_key, LinkVerdict};
