//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind a shared permit pool
//! - HTML text and link extraction
//! - The frontier queue and its quiescence signal
//! - The worker pool and overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod worker;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher};
pub use frontier::{Frontier, FrontierTicket};
pub use parser::{parse_html, ParsedPage};
pub use worker::{CrawlContext, PageOutcome, RunState, Worker};

use crate::config::{Config, DEFAULT_CONCURRENCY, DEFAULT_MAX_PAGES};
use crate::output::{emit, CrawlResult};
use crate::SweepError;

/// Crawls `start_url` with default settings and the given tunables
///
/// `None` falls back to [`DEFAULT_MAX_PAGES`] or [`DEFAULT_CONCURRENCY`]. The
/// result is printed and persisted as configured by
/// [`OutputConfig::default`](crate::config::OutputConfig).
///
/// # Example
///
/// ```no_run
/// use contact_sweep::crawl;
///
/// # async fn example() -> Result<(), contact_sweep::SweepError> {
/// let result = crawl("https://example.com/", Some(50), None).await?;
/// println!("{} emails found", result.emails.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(
    start_url: &str,
    max_pages: Option<usize>,
    concurrency: Option<usize>,
) -> Result<CrawlResult, SweepError> {
    crawl_with_config(start_url, &limits_config(max_pages, concurrency)).await
}

fn limits_config(max_pages: Option<usize>, concurrency: Option<usize>) -> Config {
    Config::with_limits(
        max_pages.unwrap_or(DEFAULT_MAX_PAGES),
        concurrency.unwrap_or(DEFAULT_CONCURRENCY),
    )
}

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration and start URL
/// 2. Build the HTTP client
/// 3. Run the worker pool until the frontier drains
/// 4. Emit the result to stdout and the results directory
///
/// # Arguments
///
/// * `start_url` - The first page to fetch
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed and the result was persisted
/// * `Err(SweepError)` - Invalid input, or the result could not be written
pub async fn crawl_with_config(start_url: &str, config: &Config) -> Result<CrawlResult, SweepError> {
    let coordinator = Coordinator::new(start_url, config.clone())?;
    let result = coordinator.run().await;

    emit(&result, coordinator.target().domain(), &config.output)?;

    Ok(result)
}
