//! Output module for composing and persisting Markdown documents
//!
//! This module handles:
//! - Post-conversion Markdown cleanup (configured rewrite rules plus
//!   blank-line collapsing)
//! - Frontmatter composition and file writing
//! - The end-of-run summary

mod cleanup;
mod document;
mod summary;

pub use cleanup::{clean_markdown, compile_rules, CleanupRule};
pub use document::{derive_title, write_document, PageDocument};
pub use summary::{print_summary, CrawlSummary};
