//! Crawler coordinator - main crawl orchestration logic
//!
//! This module wires one crawl together:
//! - Deriving the crawl scope from the start URL
//! - Seeding the frontier and building the shared state
//! - Spawning the worker pool and the fetch permit pool
//! - Waiting for the frontier to drain, then stopping every worker
//! - Assembling the final result

use crate::config::{validate, Config};
use crate::crawler::fetcher::{build_http_client, Fetcher};
use crate::crawler::worker::{CrawlContext, RunState, Worker};
use crate::output::CrawlResult;
use crate::url::CrawlTarget;
use crate::SweepError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    start_url: String,
    target: CrawlTarget,
    client: Client,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `start_url` - Where the crawl begins; its host:port bounds the crawl
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(SweepError)` - Invalid configuration or start URL, or the HTTP
    ///   client could not be built
    pub fn new(start_url: &str, config: Config) -> Result<Self, SweepError> {
        validate(&config)?;

        let target = CrawlTarget::parse(start_url)?;
        let client = build_http_client(&config.user_agent, &config.crawler)?;

        Ok(Self {
            config,
            start_url: start_url.trim().to_string(),
            target,
            client,
        })
    }

    pub fn target(&self) -> &CrawlTarget {
        &self.target
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the crawl to quiescence
    ///
    /// Per-page failures never surface here; they only shrink the result.
    pub async fn run(&self) -> CrawlResult {
        let concurrency = self.config.crawler.concurrency;
        let max_pages = self.config.crawler.max_pages;

        tracing::info!(
            "Crawling {} (domain {}, max {} pages, {} workers)",
            self.start_url,
            self.target.domain(),
            max_pages,
            concurrency
        );
        let start_time = Instant::now();

        let context = Arc::new(CrawlContext::new(
            self.target.clone(),
            max_pages,
            Fetcher::new(self.client.clone(), concurrency),
        ));
        context.frontier.put(self.target.url().as_str());

        let (run_state, run_state_rx) = watch::channel(RunState::Running);
        let workers: Vec<_> = (0..concurrency)
            .map(|id| {
                let worker = Worker::new(id, Arc::clone(&context));
                tokio::spawn(worker.run(run_state_rx.clone()))
            })
            .collect();
        drop(run_state_rx);

        context.frontier.join().await;
        tracing::debug!("Frontier drained, stopping {} workers", workers.len());

        run_state.send_replace(RunState::Stopped);
        for handle in workers {
            if let Err(e) = handle.await {
                tracing::error!("Worker task failed: {}", e);
            }
        }

        let result = CrawlResult::new(
            self.start_url.clone(),
            context.discoveries.emails(),
            context.discoveries.phones(),
        );

        if context.visited.budget_exhausted() {
            tracing::info!("Page budget of {} reached", max_pages);
        }
        tracing::info!(
            "Crawl completed: {} pages claimed, {} emails, {} phones in {:?}",
            context.visited.claimed_count(),
            result.emails.len(),
            result.phones.len(),
            start_time.elapsed()
        );

        result
    }
}
