use serde::Deserialize;
use std::time::Duration;

/// Page budget used when none is configured
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Worker count and fetch permit pool size used when none is configured
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Total per-request timeout, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for Contact-Sweep
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Default configuration with the two crawl tunables replaced
    pub fn with_limits(max_pages: usize, concurrency: usize) -> Self {
        let mut config = Self::default();
        config.crawler.max_pages = max_pages;
        config.crawler.concurrency = concurrency;
        config
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Maximum number of distinct URLs claimed for processing
    pub max_pages: usize,

    /// Number of workers, and size of the shared fetch permit pool
    pub concurrency: usize,

    /// Total timeout for a single request (seconds)
    pub request_timeout: u64,
}

impl CrawlerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            concurrency: DEFAULT_CONCURRENCY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub crawler_name: String,

    /// Version of the crawler
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value as `name/version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "contact-sweep".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Directory receiving one `<domain>.json` file per crawled site
    pub results_dir: String,

    /// Whether the pretty-printed result is also written to stdout
    pub print_stdout: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: "results".to_string(),
            print_stdout: true,
        }
    }
}
