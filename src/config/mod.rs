//! Configuration module for docmirror
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use docmirror::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Output directory: {}", config.output.directory);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CleanupRuleConfig, Config, ContentConfig, FetchConfig, OutputConfig, SiteConfig,
};

// Re-export parser functions
pub use parser::load_config;
