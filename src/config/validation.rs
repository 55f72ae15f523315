use crate::config::types::{CleanupRuleConfig, Config, ContentConfig, FetchConfig, SiteConfig};
use crate::ConfigError;
use regex::RegexBuilder;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_fetch_config(&config.fetch)?;
    validate_content_config(&config.content)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use the http or https scheme, got '{}'",
            url.scheme()
        )));
    }

    if config.source_library.trim().is_empty() {
        return Err(ConfigError::Validation(
            "source-library cannot be empty".to_string(),
        ));
    }

    for prefix in &config.exclude_paths {
        if !prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "exclude-paths entries must start with '/', got '{}'",
                prefix
            )));
        }
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if let Some(0) = config.max_pages {
        return Err(ConfigError::Validation(
            "max-pages must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates content extraction configuration
///
/// Both the selectors and the cleanup patterns are compiled again later by
/// the crawler; validating them here means a typo fails at startup instead
/// of mid-crawl.
fn validate_content_config(config: &ContentConfig) -> Result<(), ConfigError> {
    if config.selectors.is_empty() {
        return Err(ConfigError::Validation(
            "at least one content selector is required".to_string(),
        ));
    }

    for selector in &config.selectors {
        Selector::parse(selector)
            .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e)))?;
    }

    for rule in &config.cleanup {
        validate_cleanup_rule(rule)?;
    }

    Ok(())
}

/// Validates a single cleanup rule pattern
fn validate_cleanup_rule(rule: &CleanupRuleConfig) -> Result<(), ConfigError> {
    RegexBuilder::new(&rule.pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern(format!("'{}': {}", rule.pattern, e)))?;
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &crate::config::types::OutputConfig) -> Result<(), ConfigError> {
    if config.directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OutputConfig;

    fn create_test_config() -> Config {
        Config {
            site: SiteConfig {
                base_url: "https://docs.example.com/".to_string(),
                source_library: "Example Documentation".to_string(),
                skip_substrings: vec![".pdf".to_string()],
                exclude_paths: vec![],
            },
            fetch: FetchConfig::default(),
            content: ContentConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_test_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = create_test_config();
        config.site.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_non_http_base_url() {
        let mut config = create_test_config();
        config.site.base_url = "ftp://docs.example.com/".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_empty_source_library() {
        let mut config = create_test_config();
        config.site.source_library = "  ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_exclude_path_without_leading_slash() {
        let mut config = create_test_config();
        config.site.exclude_paths = vec!["blog/".to_string()];
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = create_test_config();
        config.fetch.timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_max_pages() {
        let mut config = create_test_config();
        config.fetch.max_pages = Some(0);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_selector_list() {
        let mut config = create_test_config();
        config.content.selectors = vec![];
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_malformed_selector() {
        let mut config = create_test_config();
        config.content.selectors = vec!["div[[".to_string()];
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidSelector(_)
        ));
    }

    #[test]
    fn test_malformed_cleanup_pattern() {
        let mut config = create_test_config();
        config.content.cleanup = vec![CleanupRuleConfig {
            pattern: "([unclosed".to_string(),
            replacement: String::new(),
        }];
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidPattern(_)
        ));
    }

    #[test]
    fn test_empty_output_directory() {
        let mut config = create_test_config();
        config.output.directory = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_default_selectors_parse() {
        let config = create_test_config();
        for selector in &config.content.selectors {
            assert!(Selector::parse(selector).is_ok());
        }
    }
}
