//! Page document composition and persistence
//!
//! A processed page becomes one Markdown file: a YAML frontmatter block
//! followed by the cleaned body. Filenames come from
//! [`crate::url::derive_filename`], so re-runs overwrite deterministically.

use std::fs;
use std::io;
use std::path::Path;

/// Fallback title when a page carries no `<title>` element
const UNTITLED: &str = "Untitled Page";

/// One fully assembled output document, ready to render
#[derive(Debug, Clone)]
pub struct PageDocument {
    /// Title derived from the document's `<title>` element
    pub title: String,

    /// The URL the page was fetched from
    pub source_url: String,

    /// Configured label identifying the documentation source
    pub source_library: String,

    /// Trailing-slash-normalized URL path, the stable page identifier
    pub path_key: String,

    /// Cleaned Markdown body
    pub body: String,
}

impl PageDocument {
    /// Renders the document to its final file text
    ///
    /// The frontmatter block carries the four metadata fields, then a
    /// blank line, then the body, with a single trailing newline.
    pub fn render(&self) -> String {
        format!(
            "---\n\
             title: \"{}\"\n\
             source_url: \"{}\"\n\
             source_library: \"{}\"\n\
             path_key: \"{}\"\n\
             ---\n\n{}\n",
            escape_frontmatter(&self.title),
            escape_frontmatter(&self.source_url),
            escape_frontmatter(&self.source_library),
            escape_frontmatter(&self.path_key),
            self.body
        )
    }
}

/// Derives the frontmatter title from a raw `<title>` text
///
/// Documentation sites commonly suffix titles with the site name
/// (`"Rooms API | Colyseus"`); everything from the first `|` on is
/// dropped. A missing or empty title falls back to `"Untitled Page"`.
pub fn derive_title(raw: Option<&str>) -> String {
    let derived = raw
        .map(|text| text.split('|').next().unwrap_or("").trim())
        .unwrap_or("");

    if derived.is_empty() {
        UNTITLED.to_string()
    } else {
        derived.to_string()
    }
}

/// Escapes a value for a double-quoted frontmatter field
fn escape_frontmatter(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes a rendered document into the output directory
///
/// Overwrites any existing file of the same name; content is UTF-8.
pub fn write_document(directory: &Path, file_name: &str, content: &str) -> io::Result<()> {
    fs::write(directory.join(file_name), content)
}
