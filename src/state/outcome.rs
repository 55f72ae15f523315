use std::fmt;
use url::Url;

/// Result of processing one URL
///
/// Every URL handed to the page processor ends in exactly one of these
/// states. Discovery continues from `Saved` only; a skipped page
/// contributes no output file and no further links, but never aborts the
/// crawl.
#[derive(Debug)]
pub enum PageOutcome {
    /// Page was fetched, converted, and written to disk
    Saved {
        /// Name of the file written into the output directory
        file_name: String,
        /// Outbound links discovered on the page, resolved to absolute
        /// form but not yet classified
        links: Vec<Url>,
    },

    /// Page produced no file; the reason says why
    Skipped(SkipReason),
}

/// Why a URL produced no output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// URL was already dispatched earlier in this run
    AlreadyVisited,

    /// Network-level fetch failure (connection error, timeout)
    Fetch(String),

    /// Server answered with a non-success status
    HttpStatus(u16),

    /// No configured content selector matched the document
    NoContent,

    /// Any other per-page failure, e.g. a file write error
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyVisited => write!(f, "already visited"),
            Self::Fetch(msg) => write!(f, "fetch error: {}", msg),
            Self::HttpStatus(code) => write!(f, "HTTP {}", code),
            Self::NoContent => write!(f, "no content region found"),
            Self::Failed(msg) => write!(f, "{}", msg),
        }
    }
}
