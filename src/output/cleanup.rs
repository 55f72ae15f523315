//! Post-conversion Markdown cleanup
//!
//! Documentation frameworks leave navigational artifacts ("On this page"
//! headings and the like) inside the content region. The configured
//! cleanup rules rewrite those away after conversion, then runs of blank
//! lines are collapsed so the removals leave no holes.

use crate::config::CleanupRuleConfig;
use crate::ConfigError;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// A compiled cleanup rule
///
/// Patterns are matched case-insensitively, with `^` and `$` anchored to
/// line boundaries.
#[derive(Debug, Clone)]
pub struct CleanupRule {
    regex: Regex,
    replacement: String,
}

impl CleanupRule {
    /// Compiles a rule from its configuration entry
    pub fn compile(config: &CleanupRuleConfig) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(&config.pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map_err(|e| ConfigError::InvalidPattern(format!("'{}': {}", config.pattern, e)))?;

        Ok(Self {
            regex,
            replacement: config.replacement.clone(),
        })
    }
}

/// Compiles the full configured rule list
pub fn compile_rules(configs: &[CleanupRuleConfig]) -> Result<Vec<CleanupRule>, ConfigError> {
    configs.iter().map(CleanupRule::compile).collect()
}

/// Normalizes a converted Markdown body
///
/// Applies the cleanup rules in order, then collapses runs of blank lines
/// to a single blank line and strips leading/trailing whitespace.
///
/// # Arguments
///
/// * `markdown` - The raw converted Markdown
/// * `rules` - Compiled cleanup rules, applied in sequence
pub fn clean_markdown(markdown: &str, rules: &[CleanupRule]) -> String {
    let mut text = markdown.to_string();

    for rule in rules {
        text = rule
            .regex
            .replace_all(&text, rule.replacement.as_str())
            .into_owned();
    }

    collapse_blank_lines(&text).trim().to_string()
}

/// Collapses runs of blank (or whitespace-only) lines to one blank line
fn collapse_blank_lines(text: &str) -> String {
    static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    let blank_run = BLANK_RUN.get_or_init(|| Regex::new(r"\n\s*\n").unwrap());
    blank_run.replace_all(text, "\n\n").into_owned()
}
