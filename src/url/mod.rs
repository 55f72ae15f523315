//! URL handling module for docmirror
//!
//! This module decides which discovered links are worth crawling and
//! derives the stable identifiers a page's URL maps to:
//!
//! - `classify_link`: scope, excluded-path, same-page-anchor, and
//!   non-document checks for every discovered link
//! - `derive_filename`: the output filename for a URL path
//! - `path_key`: the trailing-slash-normalized page identifier used in
//!   frontmatter

mod classify;
mod filename;

// Re-export main functions and types
pub use classify::{classify_link, strip_fragment, LinkVerdict, ScopeRules};
pub use filename::{derive_filename, path_key};
