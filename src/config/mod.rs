//! Configuration module for Contact-Sweep
//!
//! Configuration comes from an optional TOML file layered over built-in
//! defaults. The command line may then override individual tunables.
//!
//! # Example
//!
//! ```no_run
//! use contact_sweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sweep.toml")).unwrap();
//! println!("Crawler will visit at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_CONCURRENCY, DEFAULT_MAX_PAGES,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
