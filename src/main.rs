//! Docmirror main entry point
//!
//! This is the command-line interface for the docmirror documentation
//! crawler.

use anyhow::Context;
use clap::Parser;
use docmirror::config::load_config;
use docmirror::crawler::crawl;
use docmirror::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Docmirror: mirror a documentation site as local Markdown
///
/// Docmirror walks a documentation website from its base URL, extracts
/// the main article content of each page, converts it to Markdown with
/// frontmatter metadata, and writes one file per page.
#[derive(Parser, Debug)]
#[command(name = "docmirror")]
#[command(version)]
#[command(about = "Mirror a documentation site as local Markdown", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let summary = crawl(config).await.context("crawl failed to start")?;
    print_summary(&summary);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docmirror=info,warn"),
            1 => EnvFilter::new("docmirror=debug,info"),
            2 => EnvFilter::new("docmirror=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &docmirror::config::Config) {
    println!("=== Docmirror Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Source library: {}", config.site.source_library);
    println!("  Skip substrings: {:?}", config.site.skip_substrings);
    if !config.site.exclude_paths.is_empty() {
        println!("  Excluded paths: {:?}", config.site.exclude_paths);
    }

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);
    match config.fetch.max_pages {
        Some(limit) => println!("  Page limit: {}", limit),
        None => println!("  Page limit: unbounded"),
    }

    println!("\nContent selectors ({}):", config.content.selectors.len());
    for selector in &config.content.selectors {
        println!("  - {}", selector);
    }

    println!("\nCleanup rules ({}):", config.content.cleanup.len());
    for rule in &config.content.cleanup {
        println!("  - '{}' -> '{}'", rule.pattern, rule.replacement);
    }

    println!("\nOutput directory: {}", config.output.directory);

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling from {}", config.site.base_url);
}
