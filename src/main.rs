//! Contact-Sweep main entry point
//!
//! This is the command-line interface for the Contact-Sweep harvester.

use anyhow::Context;
use clap::Parser;
use contact_sweep::config::{load_config, validate, Config};
use contact_sweep::crawler::crawl_with_config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Contact-Sweep: a same-domain contact harvester
///
/// Contact-Sweep crawls one website breadth-first, staying on the host:port
/// of the start URL, and collects the email addresses and phone numbers
/// found in page text. The result is printed as JSON and saved under the
/// results directory.
#[derive(Parser, Debug)]
#[command(name = "contact-sweep")]
#[command(version)]
#[command(about = "A same-domain contact harvester", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Maximum number of pages to process
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Number of concurrent workers and fetches
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Directory receiving the <domain>.json result file
    #[arg(long, value_name = "DIR")]
    results_dir: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Builds the effective configuration: defaults, then file, then flags
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                load_config(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?
            }
            None => Config::default(),
        };

        if let Some(max_pages) = self.max_pages {
            config.crawler.max_pages = max_pages;
        }
        if let Some(concurrency) = self.concurrency {
            config.crawler.concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout {
            config.crawler.request_timeout = timeout;
        }
        if let Some(results_dir) = &self.results_dir {
            config.output.results_dir = results_dir.clone();
        }

        validate(&config)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = cli.resolve_config()?;

    match crawl_with_config(&cli.start_url, &config).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the JSON result.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("contact_sweep=info,warn")),
            1 => EnvFilter::new("contact_sweep=debug,info"),
            2 => EnvFilter::new("contact_sweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
