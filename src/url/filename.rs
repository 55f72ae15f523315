/// Characters that are never allowed in an output filename
const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Derives the output filename for a URL path
///
/// The derivation is a pure function of the path: the same path always
/// yields the same filename, so re-running a crawl overwrites files
/// instead of duplicating them.
///
/// # Derivation Steps
///
/// 1. Strip leading and trailing slashes
/// 2. Strip one trailing `.html` or `.htm` extension
/// 3. Replace each remaining `/` with `__` to flatten the hierarchy
/// 4. Drop filesystem-unsafe characters (`\ / : * ? " < > |`)
/// 5. Append `.md`; an empty result (the site root) maps to `index.md`
///
/// # Examples
///
/// ```
/// use docmirror::url::derive_filename;
///
/// assert_eq!(derive_filename("/"), "index.md");
/// assert_eq!(derive_filename("/docs/server/api"), "docs__server__api.md");
/// assert_eq!(derive_filename("/docs/server/api.html"), "docs__server__api.md");
/// ```
pub fn derive_filename(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    let trimmed = trimmed
        .strip_suffix(".html")
        .or_else(|| trimmed.strip_suffix(".htm"))
        .unwrap_or(trimmed);

    let flattened = trimmed.replace('/', "__");

    let cleaned: String = flattened
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .collect();

    if cleaned.is_empty() {
        "index.md".to_string()
    } else {
        format!("{}.md", cleaned)
    }
}

/// Normalizes a URL path into the stable page identifier used in frontmatter
///
/// The path key is the URL's path component with a trailing slash
/// guaranteed; the site root stays `/`.
///
/// # Examples
///
/// ```
/// use docmirror::url::path_key;
///
/// assert_eq!(path_key("/docs/server/api"), "/docs/server/api/");
/// assert_eq!(path_key("/docs/server/api/"), "/docs/server/api/");
/// assert_eq!(path_key("/"), "/");
/// ```
pub fn path_key(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}
