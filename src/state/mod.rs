//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `VisitedSet`: the set of URLs already dispatched to the page processor
//! - `PageOutcome` / `SkipReason`: the explicit per-URL result the driver
//!   branches on

mod outcome;
mod visited;

// Re-export main types
pub use outcome::{PageOutcome, SkipReason};
pub use visited::VisitedSet;
