use serde::Deserialize;

/// Main configuration structure for docmirror
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the documentation site; links are in scope when they
    /// start with this string
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Label written into the `source_library` frontmatter field
    #[serde(rename = "source-library")]
    pub source_library: String,

    /// URLs containing any of these substrings are skipped as
    /// non-document resources
    #[serde(rename = "skip-substrings", default = "default_skip_substrings")]
    pub skip_substrings: Vec<String>,

    /// In-scope URLs whose path starts with one of these prefixes are
    /// not crawled (e.g. "/blog/")
    #[serde(rename = "exclude-paths", default)]
    pub exclude_paths: Vec<String>,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Optional hard cap on the number of pages fetched; absent means
    /// the crawl runs until no unvisited in-scope URLs remain
    #[serde(rename = "max-pages")]
    pub max_pages: Option<usize>,
}

/// Content extraction and cleanup configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// CSS selectors tried in order; the first selector with a match
    /// designates the content region
    #[serde(default = "default_selectors")]
    pub selectors: Vec<String>,

    /// Ordered cleanup rules applied to the converted Markdown
    #[serde(default = "default_cleanup_rules")]
    pub cleanup: Vec<CleanupRuleConfig>,
}

/// A single post-conversion cleanup rule
///
/// Patterns are matched case-insensitively against full lines of the
/// converted Markdown.
#[derive(Debug, Clone, Deserialize)]
pub struct CleanupRuleConfig {
    /// Regex pattern to match
    pub pattern: String,

    /// Replacement text (empty string removes the match)
    #[serde(default)]
    pub replacement: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the Markdown files are written into
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_pages: None,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            selectors: default_selectors(),
            cleanup: default_cleanup_rules(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

fn default_skip_substrings() -> Vec<String> {
    vec![".pdf".to_string(), ".zip".to_string(), ".tar".to_string()]
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_selectors() -> Vec<String> {
    // Docusaurus-style documentation layouts
    vec![
        r#"div[class*="docItemContainer"]"#.to_string(),
        r#"article[class*="docItemContainer"]"#.to_string(),
    ]
}

fn default_cleanup_rules() -> Vec<CleanupRuleConfig> {
    vec![
        CleanupRuleConfig {
            pattern: r"^#+\s*On this page\s*$".to_string(),
            replacement: String::new(),
        },
        CleanupRuleConfig {
            pattern: r"^#+\s*In this section\s*$".to_string(),
            replacement: String::new(),
        },
    ]
}

fn default_output_directory() -> String {
    "markdown_docs".to_string()
}
