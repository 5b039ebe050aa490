//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent and timeout
//! - GET requests gated by a crawl-wide permit pool
//! - Error classification into non-fatal outcomes
//!
//! Every failure is logged as a warning and reported to the worker as "no
//! data". Nothing is retried.

use crate::config::{CrawlerConfig, UserAgentConfig};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Result of a single GET request
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered 2xx and the body was decoded
    Success {
        /// Page body, decoded with invalid sequences replaced
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// The total request timeout elapsed
    Timeout,

    /// Transport or protocol failure (DNS, connect, TLS, broken body)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the body on success, logging every other outcome as a warning
    pub fn into_body(self, url: &str) -> Option<String> {
        match self {
            FetchResult::Success { body } => Some(body),
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Non-success response {} for {}", status_code, url);
                None
            }
            FetchResult::Timeout => {
                tracing::warn!("Timeout while fetching {}", url);
                None
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("HTTP error for {}: {}", url, error);
                None
            }
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// The client applies a total timeout to each request. Redirects follow
/// reqwest's default policy.
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Crawler settings providing the request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use contact_sweep::config::Config;
/// use contact_sweep::crawler::build_http_client;
///
/// let config = Config::default();
/// let client = build_http_client(&config.user_agent, &config.crawler).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(crawler.request_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues one GET request and classifies the outcome
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// A FetchResult indicating success or the type of failure
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(e),
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    // `text()` decodes with the declared charset and replaces bad sequences
    match response.text().await {
        Ok(body) => FetchResult::Success { body },
        Err(e) => classify_error(e),
    }
}

fn classify_error(e: reqwest::Error) -> FetchResult {
    if e.is_timeout() {
        FetchResult::Timeout
    } else {
        FetchResult::NetworkError {
            error: e.to_string(),
        }
    }
}

/// HTTP client paired with the crawl-wide fetch permit pool
///
/// At most `permits` requests are in flight at once, however many workers
/// share the fetcher.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    permits: Arc<Semaphore>,
}

impl Fetcher {
    /// Creates a fetcher admitting `permits` concurrent requests
    pub fn new(client: Client, permits: usize) -> Self {
        Self {
            client,
            permits: Arc::new(Semaphore::new(permits)),
        }
    }

    /// Fetches `url`, returning its text or None on any failure
    ///
    /// The permit is held for the whole request, body download included.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        let _permit = match self.permits.acquire().await {
            Ok(permit) => permit,
            Err(_) => {
                tracing::warn!("Fetch permit pool closed, skipping {}", url);
                return None;
            }
        };

        tracing::debug!("Fetching {}", url);
        fetch_url(&self.client, url).await.into_body(url)
    }

    /// Number of permits not currently held by a fetch
    #[cfg(test)]
    pub(crate) fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}
